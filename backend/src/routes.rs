use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, request_context::request_context_middleware, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/:slug", get(handlers::get_post))
        .route("/api/trending", get(handlers::trending_posts))
        .route("/api/featured", get(handlers::featured_posts))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/tags", get(handlers::list_tags))
        .route(
            "/api/comments",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/newsletter", post(handlers::subscribe_newsletter))
        .with_state(state)
        .layer(middleware::from_fn(request_context_middleware))
        .layer(cors)
}
