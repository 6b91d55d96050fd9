use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Erreur de connexion au site du Ministère de la Santé: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Erreur HTTP lors de la récupération de la page: {source}")]
    Http {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Impossible de trouver la liste des résultats de recherche sur la page.")]
    StructureNotFound,

    #[error("Une erreur inattendue s'est produite: {0}")]
    Unexpected(String),
}

impl ScrapeError {
    /// Status returned to our own callers. Remote HTTP errors keep the remote code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::Http { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Connection(_) => "connection",
            ScrapeError::Http { .. } => "http",
            ScrapeError::StructureNotFound => "structure_not_found",
            ScrapeError::Unexpected(_) => "unexpected",
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(kind = self.kind(), status = %status, "scrape failed: {}", self);
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
