//! External service clients.
//!
//! Both collaborators are specified at the boundary only: a generative
//! text-completion service and a recipe-lookup service. Failures are caught
//! at the call sites and turned into fixed user-visible strings or an empty
//! result state; no retries, no backoff.

pub mod generative;
pub mod recipes;

pub use generative::{GeminiClient, GenerativeService};
pub use recipes::{RecipeClient, RecipeSummary};
