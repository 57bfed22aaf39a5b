//! Test Module
//!
//! Cross-module test suite for the VitaChat backend.
//!
//! ## Test Categories
//! - `brain_tests`: tagger and responder behavior over the real tables
//! - `chat_tests`: chat-turn pipeline with a mocked generative service
//! - `service_tests`: HTTP clients against a wiremock server

pub mod brain_tests;
