pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::state::AppState;
use crate::upload::handlers;

const UPLOAD_PAGE: &str = "/upload.html";

async fn redirect_to_upload_page() -> Redirect {
    Redirect::to(UPLOAD_PAGE)
}

pub fn build_router(state: AppState) -> Router {
    let upload_page = ServeFile::new(state.config.static_dir.join("upload.html"));
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(redirect_to_upload_page))
        .route_service(UPLOAD_PAGE, upload_page)
        .route("/health", get(health::health_handler))
        .route(
            "/upload-resume",
            post(handlers::handle_upload_resume).layer(body_limit),
        )
        .with_state(state)
}
