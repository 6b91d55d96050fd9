use axum::{Json, extract::State};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::{ChatbotResponse, SearchResultItem};
use crate::error::ScrapeError;

use super::AppState;
use super::models::{ChatbotRequest, RootResponse};

pub async fn root_handler() -> Json<RootResponse> {
    let endpoints = [
        (
            "/ambulance_data",
            "Récupère et retourne les données actuelles sur les ambulances.",
        ),
        (
            "/update_ambulance_data",
            "Force la mise à jour et retourne les données sur les ambulances.",
        ),
        (
            "/chatbot/start",
            "Démarre une conversation et propose les questions fréquentes.",
        ),
        (
            "/chatbot",
            "Répond à une question fréquente (POST {\"message\": \"...\"}).",
        ),
    ]
    .into_iter()
    .map(|(path, description)| (path.to_string(), description.to_string()))
    .collect::<BTreeMap<_, _>>();

    Json(RootResponse {
        message: "API pour récupérer les informations sur les ambulances du Ministère de la Santé du Cameroun."
            .to_string(),
        endpoints,
    })
}

pub async fn ambulance_data_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchResultItem>>, ScrapeError> {
    scrape(&state).await
}

/// Same as [`ambulance_data_handler`]: every request already re-fetches.
pub async fn update_ambulance_data_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchResultItem>>, ScrapeError> {
    scrape(&state).await
}

async fn scrape(state: &AppState) -> Result<Json<Vec<SearchResultItem>>, ScrapeError> {
    let start = Instant::now();
    let items = state.crawler.scrape().await?;
    tracing::info!(
        results = items.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "ambulance data served"
    );
    Ok(Json(items))
}

pub async fn chatbot_start_handler(State(state): State<Arc<AppState>>) -> Json<ChatbotResponse> {
    Json(state.faq.start())
}

pub async fn chatbot_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatbotRequest>,
) -> Json<ChatbotResponse> {
    let reply = state.faq.reply(&request.message);
    tracing::info!(
        matched = reply.options.is_none(),
        "chatbot message: {:?}",
        request.message
    );
    Json(reply)
}
