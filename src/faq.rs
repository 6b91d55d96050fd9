//! Scripted FAQ dialogue.
//!
//! Lookups are exact matches on the normalized message. No state is kept
//! between calls.

use std::collections::HashMap;

use crate::data_models::{ChatbotResponse, DialogueOption};

pub const GREETING: &str = "Bonjour ! Je suis l'assistant ambulance du Ministère de la Santé Publique. \
     Comment puis-je vous aider ?";

pub const FALLBACK: &str = "Désolé, je ne comprends pas votre question. \
     Veuillez choisir l'une des options suivantes :";

/// Offered questions and their answers, in display order.
const SUGGESTED: [(&str, &str); 6] = [
    (
        "Comment accéder au menu ambulance ?",
        "Depuis l'écran d'accueil de l'application, appuyez sur l'onglet « Ambulance » \
         pour afficher la liste des services disponibles.",
    ),
    (
        "Comment demander une ambulance ?",
        "En cas d'urgence, composez le 15 (SAMU) ou le 119. Indiquez clairement votre \
         position et l'état du patient.",
    ),
    (
        "Quels sont les numéros d'urgence ?",
        "SAMU : 15, Police : 117, Sapeurs-pompiers : 118, Urgences médicales : 119.",
    ),
    (
        "Le transport en ambulance est-il payant ?",
        "Les tarifs dépendent de la structure sanitaire. Les interventions du SAMU dans \
         le cadre d'une urgence vitale sont prises en charge par l'État.",
    ),
    (
        "Où trouver les informations sur les ambulances ?",
        "Les informations proviennent du site du Ministère de la Santé Publique \
         (minsante.cm) et sont consultables via l'endpoint /ambulance_data.",
    ),
    (
        "Comment mettre à jour les données ?",
        "Les données sont récupérées à chaque consultation. Vous pouvez aussi forcer \
         la mise à jour via l'endpoint /update_ambulance_data.",
    ),
];

/// Accepted but not offered as options.
const COURTESY: [(&str, &str); 3] = [
    ("bonjour", GREETING),
    ("merci", "Avec plaisir ! N'hésitez pas si vous avez d'autres questions."),
    (
        "aide",
        "Choisissez l'une des questions proposées ou posez-la telle qu'elle est affichée.",
    ),
];

/// Lowercases and trims a message so it can be looked up.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct FaqBook {
    answers: HashMap<String, String>,
    options: Vec<DialogueOption>,
}

impl FaqBook {
    /// Builds a book from `(question, answer)` pairs. Each suggested question
    /// becomes an option whose payload is its normalized text.
    pub fn new<'a>(
        suggested: impl IntoIterator<Item = (&'a str, &'a str)>,
        extra: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> FaqBook {
        let mut answers = HashMap::new();
        let mut options = Vec::new();

        for (question, answer) in suggested {
            let payload = normalize(question);
            answers.insert(payload.clone(), answer.to_string());
            options.push(DialogueOption {
                title: question.to_string(),
                payload,
            });
        }
        for (question, answer) in extra {
            answers.insert(normalize(question), answer.to_string());
        }

        FaqBook { answers, options }
    }

    pub fn options(&self) -> &[DialogueOption] {
        &self.options
    }

    pub fn answer(&self, message: &str) -> Option<&str> {
        self.answers.get(&normalize(message)).map(String::as_str)
    }

    pub fn start(&self) -> ChatbotResponse {
        ChatbotResponse {
            response: GREETING.to_string(),
            options: Some(self.options.clone()),
        }
    }

    pub fn reply(&self, message: &str) -> ChatbotResponse {
        match self.answer(message) {
            Some(answer) => ChatbotResponse {
                response: answer.to_string(),
                options: None,
            },
            None => ChatbotResponse {
                response: FALLBACK.to_string(),
                options: Some(self.options.clone()),
            },
        }
    }
}

impl Default for FaqBook {
    fn default() -> Self {
        FaqBook::new(SUGGESTED, COURTESY)
    }
}
