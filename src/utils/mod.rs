mod gracefullshutdown;
mod logs;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
