//! Route definitions and server setup

use std::time::Duration;

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::presentation::{
    controllers::{
        files::read_file,
        items::{create_item, list_items, read_item, update_item},
        models::get_model,
        root::read_root,
    },
    middleware::logging_middleware,
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::root::read_root,
        crate::presentation::controllers::items::create_item,
        crate::presentation::controllers::items::update_item,
        crate::presentation::controllers::items::read_item,
        crate::presentation::controllers::items::list_items,
        crate::presentation::controllers::models::get_model,
        crate::presentation::controllers::files::read_file
    ),
    components(
        schemas(
            Item,
            Image,
            CreateItemResponse,
            UpdateItemResponse,
            ReadItemResponse,
            ItemSummary,
            ModelResponse,
            FilePathResponse,
            ErrorResponse,
            crate::domain::ModelName
        )
    ),
    tags(
        (name = "root", description = "Service greeting"),
        (name = "items", description = "Catalog item endpoints"),
        (name = "models", description = "Model name lookup endpoints"),
        (name = "files", description = "Path echo endpoints")
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "A minimal item-catalog API: typed path and query parameters, JSON bodies validated against declared shapes, and JSON responses. Stateless beyond a fixed in-memory catalog.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the application router with the shared middleware stack
pub fn create_router(config: &Config) -> Router {
    let routes = Router::new()
        .route("/", get(read_root))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/{item_id}", get(read_item).put(update_item))
        .route("/models/{model_name}", get(get_model))
        .route("/files/{*file_path}", get(read_file));

    let mut app = Router::new().merge(routes);

    // Interactive docs are opt-out for hardened deployments
    if config.server.enable_docs {
        app = app.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_seconds,
            )))
            .layer(middleware::from_fn(logging_middleware)),
    )
}

/// Build the CORS layer from the configured origin allow-list
fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600));

    if config.server.allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
