use anyhow::{Context, Result, anyhow};

/// Process configuration, read once at startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_conn: u32,
}

const DEFAULT_DB_MAX_CONN: u32 = 5;

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let db_max_conn = match std::env::var("DB_MAX_CONN") {
            Ok(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            Err(_) => DEFAULT_DB_MAX_CONN,
        };

        Ok(Self {
            database_url,
            port,
            run_migrations,
            db_max_conn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that touches these process-wide variables; keep it that
    // way, env mutation is not thread-safe.
    #[test]
    fn init_reads_environment_and_defaults_pool_size() {
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://localhost:5432/products");
            std::env::set_var("PORT", "8080");
            std::env::set_var("RUN_MIGRATIONS", "false");
            std::env::remove_var("DB_MAX_CONN");
        }

        let config = Config::init().expect("config");
        assert_eq!(config.database_url, "postgres://localhost:5432/products");
        assert_eq!(config.port, 8080);
        assert!(!config.run_migrations);
        assert_eq!(config.db_max_conn, DEFAULT_DB_MAX_CONN);

        unsafe {
            std::env::set_var("DB_MAX_CONN", "10");
        }
        let config = Config::init().expect("config");
        assert_eq!(config.db_max_conn, 10);

        unsafe {
            std::env::set_var("DB_MAX_CONN", "not-a-number");
        }
        assert!(Config::init().is_err());

        unsafe {
            std::env::remove_var("DB_MAX_CONN");
        }
    }
}
