//! Static keyword tables for intent and entity matching.
//!
//! Tables are data, not control flow: ordered lists of (tag, phrase-list)
//! pairs that the tagger iterates over. Iteration order is part of the
//! contract — detected intents and extracted entities come back in table
//! order, so reordering an entry here changes observable output.
//!
//! All phrases and terms are lowercase; the tagger lowercases its input once
//! before matching.

/// One intent with its ordered trigger phrases.
///
/// A trigger phrase matches as a plain substring of the normalized text.
pub struct IntentEntry {
    pub intent: &'static str,
    pub triggers: &'static [&'static str],
}

/// One entity type with its ordered terms.
///
/// A term matches only at word boundaries (`\bterm\b`), so "arm" does not
/// fire inside "armchair".
pub struct EntityEntry {
    pub entity_type: &'static str,
    pub terms: &'static [&'static str],
}

/// Intent table, in detection order.
pub const INTENT_TABLE: &[IntentEntry] = &[
    IntentEntry {
        intent: "greeting",
        triggers: &["hello", "hi there", "hey there", "good morning", "good evening"],
    },
    IntentEntry {
        intent: "bmi",
        triggers: &["bmi", "body mass index", "am i overweight", "am i underweight"],
    },
    IntentEntry {
        intent: "weight_loss",
        triggers: &["lose weight", "weight loss", "losing weight", "burn fat", "slim down"],
    },
    IntentEntry {
        intent: "weight_gain",
        triggers: &["gain weight", "weight gain", "build muscle", "put on muscle", "bulk up"],
    },
    IntentEntry {
        intent: "exercise",
        triggers: &["exercise", "workout", "work out", "training", "cardio", "gym"],
    },
    IntentEntry {
        intent: "nutrition",
        triggers: &["nutrition", "diet", "food", "calories", "meal plan", "what should i eat"],
    },
    IntentEntry {
        intent: "sleep",
        triggers: &["sleep", "insomnia", "tired", "fatigue"],
    },
    IntentEntry {
        intent: "hydration",
        triggers: &["water", "hydration", "hydrated", "dehydrated"],
    },
];

/// Entity table, in extraction order.
pub const ENTITY_TABLE: &[EntityEntry] = &[
    EntityEntry {
        entity_type: "body_part",
        terms: &[
            "arm", "leg", "back", "shoulder", "knee", "stomach", "chest", "neck", "hip", "wrist",
            "ankle",
        ],
    },
    EntityEntry {
        entity_type: "nutrient",
        terms: &[
            "protein", "fiber", "vitamin", "carbs", "carbohydrates", "fat", "iron", "calcium",
            "sugar", "sodium",
        ],
    },
    EntityEntry {
        entity_type: "meal",
        terms: &["breakfast", "lunch", "dinner", "snack"],
    },
    EntityEntry {
        entity_type: "symptom",
        terms: &["pain", "ache", "sore", "cramp", "hurts", "swollen"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_triggers_are_lowercase() {
        for entry in INTENT_TABLE {
            for trigger in entry.triggers {
                assert_eq!(
                    *trigger,
                    trigger.to_lowercase(),
                    "trigger {:?} of intent {:?} must be lowercase",
                    trigger,
                    entry.intent
                );
            }
        }
    }

    #[test]
    fn test_all_terms_are_lowercase() {
        for entry in ENTITY_TABLE {
            for term in entry.terms {
                assert_eq!(*term, term.to_lowercase());
            }
        }
    }

    #[test]
    fn test_intent_tags_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in INTENT_TABLE {
            assert!(seen.insert(entry.intent), "duplicate intent {:?}", entry.intent);
        }
    }

    #[test]
    fn test_nutrient_order_is_protein_fiber_vitamin() {
        let nutrients = ENTITY_TABLE
            .iter()
            .find(|e| e.entity_type == "nutrient")
            .expect("nutrient entry");
        assert_eq!(&nutrients.terms[..3], &["protein", "fiber", "vitamin"]);
    }
}
