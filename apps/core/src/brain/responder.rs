//! Canned response generation from a classification result.
//!
//! Picks one base template by an explicit precedence ranking, then appends
//! supplementary sentences for the entity types present and for the user's
//! age bracket and gender. Returns `None` when nothing matched, which the
//! chat handler treats as "no local coverage" and hands to the generative
//! fallback.

use crate::brain::tagger::Classification;
use crate::profile::{AgeBracket, Gender, UserProfile};

/// Fixed precedence for choosing the base template.
///
/// Deliberately its own ranking, not the intent table's iteration order: the
/// two happen to coincide today, but reordering the detection table must not
/// silently change which reply wins.
pub const RESPONSE_PRECEDENCE: &[&str] = &[
    "greeting",
    "bmi",
    "weight_loss",
    "weight_gain",
    "exercise",
    "nutrition",
    "sleep",
    "hydration",
];

fn base_template(intent: &str) -> Option<&'static str> {
    match intent {
        "greeting" => Some("Hello! I'm your health assistant. Ask me about nutrition, exercise, sleep, or your BMI."),
        "bmi" => Some("BMI is your weight in kilograms divided by your height in meters squared. Use the BMI calculator and I can tailor my advice to the result."),
        "weight_loss" => Some("For healthy weight loss, aim for a moderate calorie deficit of around 500 kcal per day, combined with regular activity. Slow and steady changes last longest."),
        "weight_gain" => Some("To gain weight healthily, add calorie-dense whole foods and pair them with strength training so the extra energy builds muscle rather than just fat."),
        "exercise" => Some("A good baseline is 150 minutes of moderate activity per week plus two strength sessions. Start where you are and build up gradually."),
        "nutrition" => Some("A balanced plate is half vegetables and fruit, a quarter whole grains, and a quarter protein. Whole foods beat supplements for most people."),
        "sleep" => Some("Most adults need 7 to 9 hours of sleep. A regular schedule, a dark cool room, and no screens before bed all help."),
        "hydration" => Some("Around 2 liters of water a day works for most people; more when it's hot or you're exercising. Urine color is a decent gauge."),
        _ => None,
    }
}

/// One sentence per entity type, interpolating the first matched term.
fn entity_supplement(entity_type: &str, term: &str) -> Option<String> {
    match entity_type {
        "body_part" => Some(format!(
            " If your {} issue involves sharp or persistent pain, please see a healthcare professional.",
            term
        )),
        "nutrient" => Some(format!(
            " Good whole-food sources of {} are easy to work into everyday meals.",
            term
        )),
        "meal" => Some(format!(
            " Planning your {} ahead of time makes healthy choices much easier.",
            term
        )),
        "symptom" => Some(
            " Symptoms that are severe or don't improve within a few days deserve a professional opinion."
                .to_string(),
        ),
        _ => None,
    }
}

fn age_supplement(bracket: AgeBracket) -> &'static str {
    match bracket {
        AgeBracket::Minor => {
            " Since you're under 18, growth comes first: restrictive dieting isn't recommended without medical guidance."
        }
        AgeBracket::Adult => {
            " At your age, consistency matters more than intensity; build habits you can keep."
        }
        AgeBracket::Senior => {
            " For adults 65 and over, protein intake and balance exercises are especially important for staying strong."
        }
    }
}

fn gender_supplement(gender: Gender) -> Option<&'static str> {
    match gender {
        Gender::Female => {
            Some(" Women often benefit from keeping an eye on iron and calcium intake.")
        }
        Gender::Male => {
            Some(" Men tend to under-report symptoms; regular check-ups are worth the time.")
        }
        Gender::Other => None,
    }
}

/// Response generator over the classification result and user profile.
pub struct Responder;

impl Responder {
    /// Produce a templated reply, or `None` if the classification carries no
    /// local coverage.
    pub fn respond(classification: &Classification, profile: &UserProfile) -> Option<String> {
        if classification.is_empty() {
            return None;
        }

        let mut reply = String::new();

        // First matching intent in precedence order, not detection order.
        for intent in RESPONSE_PRECEDENCE {
            if classification.has_intent(intent) {
                if let Some(template) = base_template(intent) {
                    reply.push_str(template);
                }
                break;
            }
        }

        for entity_type in classification.entity_types() {
            if let Some(term) = classification.first_term_of(entity_type) {
                if let Some(sentence) = entity_supplement(entity_type, term) {
                    reply.push_str(&sentence);
                }
            }
        }

        if let Some(age) = profile.age {
            reply.push_str(age_supplement(AgeBracket::from_age(age)));
        }
        if let Some(gender) = profile.gender {
            if let Some(sentence) = gender_supplement(gender) {
                reply.push_str(sentence);
            }
        }

        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::tagger::Tagger;
    use crate::brain::tables::INTENT_TABLE;

    fn profile() -> UserProfile {
        UserProfile::default()
    }

    #[test]
    fn test_no_coverage_returns_none() {
        let classification = Tagger::new().classify("quantum chromodynamics");
        assert!(Responder::respond(&classification, &profile()).is_none());
    }

    #[test]
    fn test_precedence_picks_greeting_over_later_intents() {
        let classification = Tagger::new().classify("hello, how do i lose weight?");
        let reply = Responder::respond(&classification, &profile()).unwrap();
        assert!(reply.starts_with("Hello!"));
    }

    #[test]
    fn test_precedence_covers_every_intent_in_the_table() {
        for entry in INTENT_TABLE {
            assert!(
                RESPONSE_PRECEDENCE.contains(&entry.intent),
                "intent {:?} has no precedence rank",
                entry.intent
            );
            assert!(
                base_template(entry.intent).is_some(),
                "intent {:?} has no template",
                entry.intent
            );
        }
    }

    #[test]
    fn test_entity_supplements_appended() {
        let classification = Tagger::new().classify("what food has protein for my arm?");
        let reply = Responder::respond(&classification, &profile()).unwrap();
        assert!(reply.contains("sources of protein"));
        assert!(reply.contains("your arm issue"));
    }

    #[test]
    fn test_entities_alone_still_produce_a_reply() {
        let classification = Tagger::new().classify("my knee has been bothering me");
        let reply = Responder::respond(&classification, &profile()).unwrap();
        assert!(reply.contains("your knee issue"));
    }

    #[test]
    fn test_age_and_gender_supplements() {
        let classification = Tagger::new().classify("i want to lose weight");

        let minor = UserProfile {
            age: Some(15),
            gender: Some(Gender::Female),
            ..UserProfile::default()
        };
        let reply = Responder::respond(&classification, &minor).unwrap();
        assert!(reply.contains("under 18"));
        assert!(reply.contains("iron and calcium"));

        let senior = UserProfile {
            age: Some(70),
            gender: Some(Gender::Other),
            ..UserProfile::default()
        };
        let reply = Responder::respond(&classification, &senior).unwrap();
        assert!(reply.contains("65 and over"));
        assert!(!reply.contains("iron and calcium"));
    }
}
