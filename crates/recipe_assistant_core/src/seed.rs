//! crates/recipe_assistant_core/src/seed.rs
//!
//! A small starter pantry and one recipe, used to populate an empty kitchen.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Ingredient, Recipe, RecipeIngredient, Step};

fn pantry(name: &str, category: &str, value: f64, unit: &str) -> Ingredient {
    Ingredient {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: Some(category.to_string()),
        quantity_value: value,
        quantity_unit: unit.to_string(),
        notes: None,
        updated_at: Utc::now(),
    }
}

fn uses(item: &Ingredient, amount: f64, unit: &str, notes: Option<&str>) -> RecipeIngredient {
    RecipeIngredient {
        ingredient_name: item.name.clone(),
        canonical_ingredient_id: Some(item.id),
        amount_value: Some(amount),
        amount_unit: Some(unit.to_string()),
        notes: notes.map(str::to_string),
    }
}

fn step(index: usize, text: &str, minutes: u32, timer_seconds: Option<u64>) -> Step {
    Step {
        index,
        text: text.to_string(),
        estimated_minutes: Some(minutes),
        timer_suggestion_seconds: timer_seconds,
    }
}

/// Returns the starter inventory and recipe library.
pub fn sample_kitchen() -> (Vec<Ingredient>, Vec<Recipe>) {
    let pasta = pantry("Pasta", "pantry", 500.0, "g");
    let sauce = pantry("Tomato Sauce", "pantry", 2.0, "cans");
    let beef = pantry("Ground Beef", "meat", 300.0, "g");
    let onion = pantry("Onion", "produce", 3.0, "count");
    let garlic = pantry("Garlic", "produce", 1.0, "head");

    let now = Utc::now();
    let bolognese = Recipe {
        id: Uuid::new_v4(),
        title: "Spaghetti Bolognese".to_string(),
        description: "Classic Italian meat sauce with pasta".to_string(),
        base_servings: 4,
        ingredients: vec![
            uses(&pasta, 400.0, "g", None),
            uses(&beef, 500.0, "g", None),
            uses(&sauce, 2.0, "cans", None),
            uses(&onion, 1.0, "count", Some("diced")),
            uses(&garlic, 3.0, "cloves", Some("minced")),
        ],
        steps: vec![
            step(1, "Boil water for pasta", 10, Some(600)),
            step(2, "Brown ground beef in a large pan", 5, None),
            step(3, "Add diced onion and minced garlic, cook until soft", 5, None),
            step(4, "Add tomato sauce and simmer", 20, Some(1200)),
            step(5, "Cook pasta according to package directions", 10, None),
            step(6, "Drain pasta and serve with sauce", 2, None),
        ],
        tags: vec!["italian".to_string(), "pasta".to_string(), "dinner".to_string()],
        source_url: None,
        created_at: now,
        updated_at: now,
    };

    (vec![pasta, sauce, beef, onion, garlic], vec![bolognese])
}
