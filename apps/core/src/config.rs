//! Server-side configuration.
//!
//! All credentials are read from the environment (optionally via a `.env`
//! file). API keys are never compiled into the binary and never sent to a
//! client.

use std::env;

use crate::error::AppError;

const DEFAULT_GENERATIVE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GENERATIVE_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_RECIPE_BASE_URL: &str = "https://api.spoonacular.com";

/// Runtime configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the generative text-completion service.
    pub generative_api_key: String,
    /// Base URL of the generative service (overridable for tests).
    pub generative_base_url: String,
    /// Model identifier passed to the generative service.
    pub generative_model: String,
    /// API key for the recipe-lookup service.
    pub recipe_api_key: String,
    /// Base URL of the recipe-lookup service (overridable for tests).
    pub recipe_base_url: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Fails fast if either API key is missing; a backend without credentials
    /// for its external collaborators cannot serve chat fallback or recipe
    /// search.
    pub fn from_env() -> Result<Self, AppError> {
        let generative_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::Config("GEMINI_API_KEY is not set".to_string()))?;
        let recipe_api_key = env::var("SPOONACULAR_API_KEY")
            .map_err(|_| AppError::Config("SPOONACULAR_API_KEY is not set".to_string()))?;

        Ok(Self {
            generative_api_key,
            generative_base_url: env::var("GENERATIVE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GENERATIVE_BASE_URL.to_string()),
            generative_model: env::var("GENERATIVE_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENERATIVE_MODEL.to_string()),
            recipe_api_key,
            recipe_base_url: env::var("RECIPE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_RECIPE_BASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_are_config_errors() {
        temp_env::with_vars_unset(["GEMINI_API_KEY", "SPOONACULAR_API_KEY"], || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
            assert!(err.to_string().contains("GEMINI_API_KEY"));
        });
    }

    #[test]
    fn test_defaults_applied() {
        temp_env::with_vars(
            [
                ("GEMINI_API_KEY", Some("test-key")),
                ("SPOONACULAR_API_KEY", Some("test-key-2")),
                ("GENERATIVE_BASE_URL", None),
                ("GENERATIVE_MODEL", None),
                ("RECIPE_BASE_URL", None),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.generative_model, "gemini-1.5-flash");
                assert_eq!(config.recipe_base_url, "https://api.spoonacular.com");
                assert_eq!(config.generative_api_key, "test-key");
            },
        );
    }

    #[test]
    fn test_overrides_win() {
        temp_env::with_vars(
            [
                ("GEMINI_API_KEY", Some("k1")),
                ("SPOONACULAR_API_KEY", Some("k2")),
                ("RECIPE_BASE_URL", Some("http://localhost:9999")),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.recipe_base_url, "http://localhost:9999");
            },
        );
    }
}
