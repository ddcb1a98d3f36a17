mod product;

pub use self::product::product_routes;

use crate::abstract_trait::DynProductService;
use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::create_product,
        product::list_products,
        product::get_product,
        product::replace_product,
        product::patch_product,
        product::delete_product,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
    )
)]
struct ApiDoc;

/// Deadline for in-flight requests once a shutdown signal arrives.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(15);

/// Builds the full application router for the given service handle. Used by
/// `AppRouter::serve` and directly by the HTTP tests.
pub fn app(product_service: DynProductService) -> Router {
    let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(product_routes(product_service))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

    let (router, api) = api_router.split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);
        let app = app(shared_state.di_container.product_service.clone());

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("Server running on http://{}", listener.local_addr()?);
        info!("Swagger UI available at /swagger-ui");

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        tokio::select! {
            result = server => {
                result?;
            }
            _ = drain_deadline() => {
                warn!(
                    "shutdown grace period of {SHUTDOWN_GRACE:?} elapsed, abandoning in-flight requests"
                );
            }
        }

        Ok(())
    }
}

// Resolves SHUTDOWN_GRACE after the first shutdown signal; racing it against
// the draining server bounds the wait for in-flight requests.
async fn drain_deadline() {
    shutdown_signal().await;
    tokio::time::sleep(SHUTDOWN_GRACE).await;
}
