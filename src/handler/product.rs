use crate::{
    abstract_trait::DynProductService,
    domain::{
        requests::{CreateProductRequest, PatchProductRequest, ReplaceProductRequest},
        response::{ApiResponse, ErrorResponse, ProductResponse},
    },
    errors::HttpError,
    middleware::ValidatedJson,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

/// Path id rule: must parse as an integer and be strictly positive.
fn parse_id(raw: &str) -> Result<i32, HttpError> {
    let id: i32 = raw
        .parse()
        .map_err(|_| HttpError::BadRequest("ID must be an integer".to_string()))?;

    if id <= 0 {
        return Err(HttpError::BadRequest(
            "ID must be a positive integer".to_string(),
        ));
    }

    Ok(id)
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Field rule violation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("POST request initialization");

    let product = service.create(&body).await?;

    info!("POST request finished");
    Ok((StatusCode::CREATED, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    info!("GET request initialization");

    let products = service.find_all().await?;

    info!("GET request finished");
    Ok((StatusCode::OK, Json(ApiResponse::new(products))))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    info!("GET request initialization");
    let id = parse_id(&id)?;

    let product = service.find_one(id).await?;

    info!("GET request finished");
    Ok((StatusCode::OK, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ReplaceProductRequest,
    responses(
        (status = 200, description = "Product replaced", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Field rule violation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn replace_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<ReplaceProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("PUT request initialization");
    let id = parse_id(&id)?;

    let product = service.update(id, &body).await?;

    info!("PUT request finished");
    Ok((StatusCode::OK, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = PatchProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Field rule violation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn patch_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<PatchProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("PATCH request initialization");
    let id = parse_id(&id)?;

    let product = service.update_partial(id, &body).await?;

    info!("PATCH request finished");
    Ok((StatusCode::OK, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    info!("DELETE request initialization");
    let id = parse_id(&id)?;

    service.delete(id).await?;

    info!("DELETE request finished");
    Ok(StatusCode::NO_CONTENT)
}

pub fn product_routes(product_service: DynProductService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/products", post(create_product))
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/{id}", get(get_product))
        .route("/api/v1/products/{id}", put(replace_product))
        .route("/api/v1/products/{id}", patch(patch_product))
        .route("/api/v1/products/{id}", delete(delete_product))
        .layer(Extension(product_service))
}
