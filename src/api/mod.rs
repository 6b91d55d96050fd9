use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::crawler::SearchCrawler;
use crate::faq::FaqBook;

pub mod handlers;
pub mod models;

/// Shared by every handler. Built once at startup and never mutated.
pub struct AppState {
    pub crawler: SearchCrawler,
    pub faq: FaqBook,
}

impl AppState {
    pub fn new(crawler: SearchCrawler, faq: FaqBook) -> AppState {
        AppState { crawler, faq }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration, wide open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/ambulance_data", get(handlers::ambulance_data_handler))
        .route(
            "/update_ambulance_data",
            get(handlers::update_ambulance_data_handler),
        )
        .route("/chatbot/start", get(handlers::chatbot_start_handler))
        .route("/chatbot", post(handlers::chatbot_handler))
        .with_state(state)
        .layer(cors)
}
