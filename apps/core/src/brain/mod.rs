//! # Brain Module
//!
//! Fast, non-LLM analysis for VitaChat. Tags user input with intents and
//! entities BEFORE deciding whether a canned template covers it or the
//! generative fallback is needed.
//!
//! ## Components
//! - `tables`: static keyword tables (intents and entities as data)
//! - `tagger`: substring/word-boundary classifier over the tables
//! - `responder`: canned template selection and supplements

pub mod responder;
pub mod tables;
pub mod tagger;

pub use responder::Responder;
pub use tagger::{Classification, EntityMatch, Tagger};
