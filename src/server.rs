//! # Server Configuration
//!
//! This module contains the server setup and configuration for the Sandwich
//! Orders API: the application router, shared state, and the OpenAPI
//! document served at /openapi.json with the interactive UI at /api-docs.

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;
use crate::telemetry::{self, TraceContext};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/orders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route(
            "/sandwiches",
            get(handlers::sandwiches::list_sandwiches).post(handlers::sandwiches::create_sandwich),
        )
        .route(
            "/vendors",
            get(handlers::vendors::list_vendors).post(handlers::vendors::create_vendor),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Runs each request inside a fresh trace context so error responses carry a
/// correlation trace ID.
async fn trace_context_middleware(request: Request, next: Next) -> Response {
    let context = TraceContext {
        trace_id: uuid::Uuid::new_v4().to_string(),
    };
    telemetry::with_trace_context(context, next.run(request)).await
}

/// Starts the server with the given configuration.
///
/// The caller is expected to have completed database initialization and
/// seeding before invoking this, so the listener never serves requests
/// against an uninitialized store.
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState { db };
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, profile = %config.profile, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::orders::list_orders,
        crate::handlers::orders::create_order,
        crate::handlers::sandwiches::list_sandwiches,
        crate::handlers::sandwiches::create_sandwich,
        crate::handlers::vendors::list_vendors,
        crate::handlers::vendors::create_vendor,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::sandwich::Model,
            crate::models::vendor::Model,
            crate::repositories::OrderRow,
            crate::handlers::orders::CreateOrderRequestDto,
            crate::handlers::orders::CreateOrderResponseDto,
            crate::handlers::sandwiches::CreateSandwichRequestDto,
            crate::handlers::sandwiches::CreateSandwichResponseDto,
            crate::handlers::vendors::CreateVendorRequestDto,
            crate::handlers::vendors::CreateVendorResponseDto,
            crate::error::ApiError,
        )
    ),
    info(
        title = "Sandwich Orders API",
        description = "API documentation for the Sandwich Orders application",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
