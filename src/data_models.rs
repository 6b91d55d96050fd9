use serde::{Deserialize, Serialize};

/// One row of the ministry search page. Every field is optional because the
/// remote markup is not guaranteed to carry all of them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResultItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
    pub info: Option<String>,
}

/// A suggested question. `payload` is what the client sends back to `/chatbot`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DialogueOption {
    pub title: String,
    pub payload: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatbotResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DialogueOption>>,
}
