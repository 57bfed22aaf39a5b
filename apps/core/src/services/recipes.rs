//! Recipe-lookup client and recipe write-up helpers.
//!
//! Wraps the third-party ingredient search endpoint: a comma-joined
//! ingredient list with fixed paging and ranking parameters, returning
//! recipe summaries with matched/missing ingredient lists. The detailed
//! write-up for a chosen recipe goes through the generative service.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::generative::GenerativeService;

const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

// The original client always asked for 4 recipes, ranked to minimize
// missing ingredients, pantry staples included.
const RESULT_COUNT: u32 = 4;
const RANKING: u32 = 2;
const IGNORE_PANTRY: bool = false;

/// One ingredient reference inside a recipe summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientRef {
    pub id: i64,
    pub name: String,
}

/// A recipe summary from the ingredient search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    /// Image URL.
    pub image: String,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub used_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    pub missed_ingredients: Vec<IngredientRef>,
}

/// Client for the recipe-lookup service.
pub struct RecipeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RecipeClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.recipe_base_url.clone(),
            api_key: config.recipe_api_key.clone(),
        }
    }

    /// Search recipes by the ingredients on hand.
    pub async fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSummary>, AppError> {
        if ingredients.is_empty() {
            return Err(AppError::Validation(
                "At least one ingredient is required".to_string(),
            ));
        }

        let ingredient_list = ingredients.join(",");
        info!("Searching recipes for ingredients: {}", ingredient_list);

        let url = format!("{}/recipes/findByIngredients", self.base_url);
        let number = RESULT_COUNT.to_string();
        let ranking = RANKING.to_string();
        let ignore_pantry = IGNORE_PANTRY.to_string();
        let request_future = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("ingredients", ingredient_list.as_str()),
                ("number", number.as_str()),
                ("ranking", ranking.as_str()),
                ("ignorePantry", ignore_pantry.as_str()),
            ])
            .send();

        let res = timeout(SEARCH_TIMEOUT, request_future).await??;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Service(format!(
                "Recipe search failed with status {}: {}",
                status, body
            )));
        }

        let recipes: Vec<RecipeSummary> = res.json().await?;
        info!("Recipe search returned {} results", recipes.len());
        Ok(recipes)
    }
}

/// Build the structured prompt for a detailed recipe guide.
pub fn recipe_guide_prompt(recipe: &RecipeSummary) -> String {
    let main_ingredients = recipe
        .used_ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a detailed recipe guide for \"{}\". Include:\n\
         1. List of ingredients with measurements (considering these main ingredients: {})\n\
         2. Step-by-step cooking instructions\n\
         3. Estimated cooking time and number of servings\n\
         4. Cooking tips and possible variations\n\n\
         Format the response with clear sections and proper spacing. \
         Don't use any markdown symbols like #, *, or `",
        recipe.title, main_ingredients
    )
}

/// Fixed apology shown when the write-up generation fails.
pub const RECIPE_DETAILS_APOLOGY: &str =
    "Sorry, I encountered an error getting the recipe details. Please try again.";

/// Generate the full write-up for a recipe, substituting the apology string
/// on any service failure.
pub async fn recipe_details(
    generative: &dyn GenerativeService,
    recipe: &RecipeSummary,
) -> String {
    match generative.generate(&recipe_guide_prompt(recipe)).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Recipe write-up failed: {}", e);
            RECIPE_DETAILS_APOLOGY.to_string()
        }
    }
}

/// Plain-text share message for a recipe (messenger-friendly body).
pub fn share_text(recipe: &RecipeSummary) -> String {
    let used = recipe
        .used_ingredients
        .iter()
        .map(|i| format!("• {}", i.name))
        .collect::<Vec<_>>()
        .join("\n");
    let missed = recipe
        .missed_ingredients
        .iter()
        .map(|i| format!("• {}", i.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Check out this recipe I found!\n\n*{}*\n\nIngredients used:\n{}\n\nMissing ingredients:\n{}",
        recipe.title, used, missed
    )
}
