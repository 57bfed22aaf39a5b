//! Intent/entity tagging over static keyword tables.
//!
//! Pure lexical matching, no ML model: intents are detected by substring
//! search, entities by word-boundary regex. Deterministic and infallible on
//! any string input.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::tables::{EntityEntry, IntentEntry, ENTITY_TABLE, INTENT_TABLE};

/// A single extracted entity: its type tag and the table term that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMatch {
    /// Entity type tag, e.g. "body_part".
    pub entity_type: String,
    /// The term from the entity table that was found in the text.
    pub term: String,
}

/// Result of one classification call.
///
/// Ephemeral: consumed by the response generator and discarded. Intents are
/// unique and ordered by intent-table iteration order; entity matches are
/// ordered by entity-table order, then term order within a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Detected intent tags, at most one per table entry.
    pub intents: Vec<String>,
    /// Every entity term found, one record per matching term.
    pub entities: Vec<EntityMatch>,
}

impl Classification {
    fn empty() -> Self {
        Self {
            intents: vec![],
            entities: vec![],
        }
    }

    /// True when neither an intent nor an entity was recognized.
    ///
    /// The caller treats this as "no local coverage" and falls back to the
    /// generative service.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty() && self.entities.is_empty()
    }

    /// Whether a specific intent tag was detected.
    pub fn has_intent(&self, intent: &str) -> bool {
        self.intents.iter().any(|i| i == intent)
    }

    /// Entity types present, deduplicated, in first-occurrence order.
    pub fn entity_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for m in &self.entities {
            if !types.contains(&m.entity_type.as_str()) {
                types.push(&m.entity_type);
            }
        }
        types
    }

    /// First matched term of a given entity type, if any.
    pub fn first_term_of(&self, entity_type: &str) -> Option<&str> {
        self.entities
            .iter()
            .find(|m| m.entity_type == entity_type)
            .map(|m| m.term.as_str())
    }
}

/// Compiled word-boundary patterns for one entity type.
struct EntityMatcher {
    entity_type: &'static str,
    // (term, pattern) pairs in table order
    terms: Vec<(&'static str, Regex)>,
}

/// Keyword tagger over the static intent and entity tables.
///
/// Tables are read-only after construction; `classify` is a pure function of
/// the input string, so a single tagger can be shared across concurrent chat
/// sessions without locking.
pub struct Tagger {
    intents: &'static [IntentEntry],
    entities: Vec<EntityMatcher>,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger {
    /// Build a tagger over the built-in tables, compiling one boundary
    /// pattern per entity term.
    pub fn new() -> Self {
        Self::with_tables(INTENT_TABLE, ENTITY_TABLE)
    }

    /// Build a tagger over explicit tables (tests use small custom tables).
    pub fn with_tables(
        intents: &'static [IntentEntry],
        entity_table: &'static [EntityEntry],
    ) -> Self {
        let entities = entity_table
            .iter()
            .map(|entry| EntityMatcher {
                entity_type: entry.entity_type,
                terms: entry
                    .terms
                    .iter()
                    .map(|term| {
                        let pattern = format!(r"\b{}\b", regex::escape(term));
                        // Escaped table terms always form a valid pattern.
                        let re = Regex::new(&pattern).expect("invalid entity term pattern");
                        (*term, re)
                    })
                    .collect(),
            })
            .collect();

        Self { intents, entities }
    }

    /// Classify free-text input against the keyword tables.
    ///
    /// The input is lowercased once and all matching runs on that normalized
    /// copy. Empty or whitespace-only input short-circuits to an empty
    /// result.
    pub fn classify(&self, text: &str) -> Classification {
        if text.trim().is_empty() {
            return Classification::empty();
        }

        let normalized = text.to_lowercase();

        // Intents: first trigger hit per entry wins, order follows the table.
        let mut intents = Vec::new();
        for entry in self.intents {
            if entry
                .triggers
                .iter()
                .any(|trigger| normalized.contains(trigger))
            {
                intents.push(entry.intent.to_string());
            }
        }

        // Entities: every matching term is recorded, no short-circuit.
        let mut entities = Vec::new();
        for matcher in &self.entities {
            for (term, re) in &matcher.terms {
                if re.is_match(&normalized) {
                    entities.push(EntityMatch {
                        entity_type: matcher.entity_type.to_string(),
                        term: (*term).to_string(),
                    });
                }
            }
        }

        Classification { intents, entities }
    }
}
