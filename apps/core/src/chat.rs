//! Chat-turn handling.
//!
//! One sequential step per user turn: reject blank input, tag the message,
//! answer from a canned template when the tagger found coverage, otherwise
//! fall back to the generative service with the question plus whatever
//! profile context exists. Session state is explicit and owned by the
//! caller; the tagger itself never sees it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::brain::{Responder, Tagger};
use crate::error::AppError;
use crate::profile::UserProfile;
use crate::services::generative::GenerativeService;

/// Fixed apology shown when the generative fallback fails.
pub const CHAT_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Where the reply for a turn came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Canned template assembled locally from the classification.
    Template,
    /// Generative fallback (no local coverage).
    Generative,
    /// Generative fallback failed; the fixed apology was substituted.
    Apology,
}

/// Outcome of one chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub reply: String,
    pub source: ReplySource,
}

/// Explicit, caller-owned session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub history: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            history: vec![],
        }
    }
}

/// Build the health-assistant prompt for the generative fallback.
///
/// Includes whatever profile context is available; absent fields are phrased
/// as not provided so the model can nudge the user toward the calculator.
pub fn health_prompt(message: &str, profile: &UserProfile) -> String {
    let bmi_context = match profile.bmi() {
        Some(bmi) => format!("{} ({})", bmi.value, bmi.category.label()),
        None => "not calculated yet".to_string(),
    };
    let age_context = match profile.age {
        Some(age) => age.to_string(),
        None => "not provided".to_string(),
    };
    let gender_context = match profile.gender {
        Some(g) => format!("{:?}", g).to_lowercase(),
        None => "not provided".to_string(),
    };

    format!(
        "You are a knowledgeable health assistant. Provide helpful, accurate, and concise \
         advice about health, fitness, nutrition, and wellness.\n\n\
         User profile: BMI {}, age {}, gender {}.\n\n\
         User question: {}\n\n\
         Keep your response focused on providing accurate health information and practical \
         advice. If medical attention is needed, recommend consulting a healthcare professional.",
        bmi_context, age_context, gender_context, message
    )
}

/// The chat-turn handler, generic over the generative seam for testability.
pub struct ChatHandler<G: GenerativeService> {
    tagger: Tagger,
    generative: G,
}

impl<G: GenerativeService> ChatHandler<G> {
    pub fn new(generative: G) -> Self {
        Self {
            tagger: Tagger::new(),
            generative,
        }
    }

    /// Process one user turn, appending both sides to the session history.
    ///
    /// Blank input is rejected before the tagger is ever invoked.
    #[instrument(skip(self, session, profile))]
    pub async fn handle_turn(
        &self,
        session: &mut ChatSession,
        profile: &UserProfile,
        message: &str,
    ) -> Result<TurnOutcome, AppError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Message must not be empty".to_string()));
        }

        session
            .history
            .push(ChatMessage::new(Role::User, trimmed));

        let classification = self.tagger.classify(trimmed);
        info!(
            "Tagged message: intents={:?}, entities={}",
            classification.intents,
            classification.entities.len()
        );

        let outcome = match Responder::respond(&classification, profile) {
            Some(reply) => TurnOutcome {
                reply,
                source: ReplySource::Template,
            },
            None => match self.generative.generate(&health_prompt(trimmed, profile)).await {
                Ok(reply) => TurnOutcome {
                    reply,
                    source: ReplySource::Generative,
                },
                Err(e) => {
                    error!("Generative fallback failed: {}", e);
                    TurnOutcome {
                        reply: CHAT_APOLOGY.to_string(),
                        source: ReplySource::Apology,
                    }
                }
            },
        };

        session
            .history
            .push(ChatMessage::new(Role::Assistant, outcome.reply.clone()));
        Ok(outcome)
    }
}
