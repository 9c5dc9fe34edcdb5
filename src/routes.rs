use crate::docs::ApiDoc;
use crate::modules::{admin, auth, category, content, history, slide};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::{middleware, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use utoipa::OpenApi;

pub fn configure_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads = ServeDir::new(&state.config.upload_dir);
    let public = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api", api_routes())
        .nest("/api/auth", auth::router(state.clone()))
        .nest("/api/history", history::router(state.clone()))
        .nest("/api/admin", admin_routes(state))
        .nest_service("/uploads", uploads)
        .fallback_service(public)
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(category::router())
        .merge(content::router())
        .merge(slide::router())
}

fn admin_routes(state: AppState) -> Router<AppState> {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(admin::admin_router())
        .merge(category::admin_router())
        .merge(content::admin_router())
        .merge(slide::admin_router())
        .layer(DefaultBodyLimit::max(body_limit))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::role::admin_guard,
        ))
}
