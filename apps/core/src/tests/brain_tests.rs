//! Tagger + responder behavior over the real keyword tables.

use crate::brain::responder::RESPONSE_PRECEDENCE;
use crate::brain::tables::INTENT_TABLE;
use crate::brain::{Responder, Tagger};
use crate::profile::{Gender, UserProfile};

#[test]
fn test_every_intent_is_reachable_through_its_own_triggers() {
    let tagger = Tagger::new();

    for entry in INTENT_TABLE {
        for trigger in entry.triggers {
            let text = format!("tell me something about {} today", trigger);
            let result = tagger.classify(&text);
            assert!(
                result.has_intent(entry.intent),
                "trigger {:?} failed to fire intent {:?}",
                trigger,
                entry.intent
            );
        }
    }
}

#[test]
fn test_intent_result_order_is_table_order_for_any_text_order() {
    let tagger = Tagger::new();

    let forward = tagger.classify("i need more sleep and a better diet");
    let backward = tagger.classify("a better diet would fix my sleep");
    assert_eq!(forward.intents, vec!["nutrition", "sleep"]);
    assert_eq!(backward.intents, vec!["nutrition", "sleep"]);
}

#[test]
fn test_boundary_matching_does_not_fire_inside_words() {
    let tagger = Tagger::new();

    // "armchair", "legacy", "backing" all contain entity terms as substrings
    let result = tagger.classify("armchair legacy backing");
    assert!(result.entities.is_empty());
}

#[test]
fn test_terms_match_next_to_punctuation() {
    let tagger = Tagger::new();

    let result = tagger.classify("pain in my knee, especially my arm!");
    let terms: Vec<&str> = result.entities.iter().map(|m| m.term.as_str()).collect();
    // body_part precedes symptom in the table
    assert_eq!(terms, vec!["arm", "knee", "pain"]);
}

#[test]
fn test_full_local_reply_for_profiled_senior() {
    let tagger = Tagger::new();
    let profile = UserProfile {
        height_cm: Some(165.0),
        weight_kg: Some(70.0),
        age: Some(68),
        gender: Some(Gender::Male),
    };

    let classification = tagger.classify("what should i eat for more protein?");
    let reply = Responder::respond(&classification, &profile).unwrap();

    // template + nutrient supplement + senior bracket + male sentence, in order
    let template_pos = reply.find("balanced plate").unwrap();
    let nutrient_pos = reply.find("sources of protein").unwrap();
    let age_pos = reply.find("65 and over").unwrap();
    let gender_pos = reply.find("check-ups").unwrap();
    assert!(template_pos < nutrient_pos);
    assert!(nutrient_pos < age_pos);
    assert!(age_pos < gender_pos);
}

#[test]
fn test_precedence_ranking_is_independent_data() {
    // Every table intent is ranked and no rank points at a missing intent.
    let table_intents: Vec<&str> = INTENT_TABLE.iter().map(|e| e.intent).collect();
    for ranked in RESPONSE_PRECEDENCE {
        assert!(table_intents.contains(ranked), "rank {:?} has no table entry", ranked);
    }
    for intent in &table_intents {
        assert!(RESPONSE_PRECEDENCE.contains(intent), "intent {:?} unranked", intent);
    }
}
