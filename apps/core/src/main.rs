// VitaChat Core Entry Point
// Health & recipe assistant brain, driven from a line-based REPL.

mod brain;
mod chat;
mod config;
mod error;
mod pantry;
mod profile;
mod services;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chat::{ChatHandler, ChatSession};
use config::AppConfig;
use profile::{Bmi, UserProfile};
use services::{GeminiClient, RecipeClient};

fn print_help() {
    println!("Commands:");
    println!("  /bmi <height_cm> <weight_kg>   compute BMI and remember it");
    println!("  /age <years>                   set your age");
    println!("  /recipes <a,b,c>               search recipes by ingredients");
    println!("  /quit                          exit");
    println!("Anything else is sent to the health chat assistant.");
}

fn handle_bmi(profile: &mut UserProfile, args: &str) {
    let mut parts = args.split_whitespace();
    let parsed = match (parts.next(), parts.next()) {
        (Some(h), Some(w)) => h.parse::<f64>().ok().zip(w.parse::<f64>().ok()),
        _ => None,
    };

    match parsed {
        Some((height_cm, weight_kg)) => match Bmi::compute(height_cm, weight_kg) {
            Ok(bmi) => {
                profile.height_cm = Some(height_cm);
                profile.weight_kg = Some(weight_kg);
                println!("{}", bmi.message());
            }
            Err(e) => println!("{}", e),
        },
        None => println!("Usage: /bmi <height_cm> <weight_kg>"),
    }
}

async fn handle_recipes(recipes: &RecipeClient, gemini: &GeminiClient, args: &str) {
    let ingredients: Vec<String> = args
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if ingredients.is_empty() {
        println!("Popular ingredients: {}", pantry::SUGGESTED_INGREDIENTS.join(", "));
        return;
    }

    for ingredient in &ingredients {
        let categories = pantry::categories_of(ingredient);
        if categories.is_empty() {
            info!("Ingredient {:?} is not in the catalog; searching anyway", ingredient);
        }
    }

    // A failed search shows an empty result state, not an error page.
    let results = match recipes.find_by_ingredients(&ingredients).await {
        Ok(results) => results,
        Err(e) => {
            error!("Recipe search failed: {}", e);
            vec![]
        }
    };

    if results.is_empty() {
        println!("No recipes found. Try adding more ingredients.");
        return;
    }

    for recipe in &results {
        println!(
            "- {} ({} ingredients matched, {} missing)",
            recipe.title, recipe.used_ingredient_count, recipe.missed_ingredient_count
        );
    }

    if let Some(first) = results.first() {
        println!("\n{}\n", services::recipes::recipe_details(gemini, first).await);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    info!("Configuration loaded");

    let gemini = GeminiClient::new(&config);
    let recipes = RecipeClient::new(&config);
    let handler = ChatHandler::new(GeminiClient::new(&config));

    let mut session = ChatSession::new();
    let mut user_profile = UserProfile::default();
    info!("Session {} started", session.id);

    println!("VitaChat: ask about health, fitness, nutrition, or recipes.");
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" => break,
            "/help" => print_help(),
            _ if line.starts_with("/bmi") => {
                handle_bmi(&mut user_profile, line.trim_start_matches("/bmi"));
            }
            _ if line.starts_with("/age") => {
                match line.trim_start_matches("/age").trim().parse::<u8>() {
                    Ok(age) => {
                        user_profile.age = Some(age);
                        println!("Age set to {}.", age);
                    }
                    Err(_) => println!("Usage: /age <years>"),
                }
            }
            _ if line.starts_with("/recipes") => {
                handle_recipes(&recipes, &gemini, line.trim_start_matches("/recipes")).await;
            }
            _ => match handler.handle_turn(&mut session, &user_profile, line).await {
                Ok(outcome) => println!("{}", outcome.reply),
                Err(e) => println!("{}", e),
            },
        }
    }

    info!("Session {} ended after {} messages", session.id, session.history.len());
    Ok(())
}
