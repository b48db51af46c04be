//! crates/recipe_assistant_core/src/service.rs
//!
//! The application service of the kitchen.
//!
//! `KitchenService` owns an injected `KitchenRepository` and exposes every
//! operation the outside world can ask for. It is where inputs are validated
//! and ids are resolved before the pure engines in `feasibility`, `scaling`,
//! `cook` and `shopping` run.

use std::sync::Arc;

use chrono::Utc;
use futures::lock::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cook::{CookError, StepMove};
use crate::domain::{
    CookSession, CookTimer, Ingredient, Recipe, RecipeIngredient, RecipeSummary, ScaledRecipe,
    Shortfall, ShoppingListItem, Step,
};
use crate::feasibility;
use crate::ports::{KitchenRepository, PortError};
use crate::scaling;
use crate::seed;
use crate::shopping::{self, ExportFormat};

//=========================================================================================
// Service Error and Result Types
//=========================================================================================

#[derive(Debug, thiserror::Error)]
pub enum KitchenError {
    /// Malformed or out-of-range input.
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    /// The operation does not apply to the entity's current state.
    #[error("Not applicable: {0}")]
    NotApplicable(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}

pub type KitchenResult<T> = Result<T, KitchenError>;

impl From<PortError> for KitchenError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound(what) => KitchenError::NotFound(what),
            PortError::Unexpected(msg) => KitchenError::Storage(msg),
        }
    }
}

impl From<CookError> for KitchenError {
    fn from(err: CookError) -> Self {
        match err {
            CookError::NotActive(_) => KitchenError::NotApplicable(err.to_string()),
            CookError::TimerNotFound(_) => KitchenError::NotFound(err.to_string()),
            CookError::StepOutOfRange { .. } => KitchenError::Validation(err.to_string()),
        }
    }
}

//=========================================================================================
// Inputs
//=========================================================================================

#[derive(Debug, Clone, Default)]
pub struct NewIngredient {
    pub name: String,
    pub category: Option<String>,
    pub quantity_value: f64,
    pub quantity_unit: String,
    pub notes: Option<String>,
}

/// Fields left `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity_value: Option<f64>,
    pub quantity_unit: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub base_servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<Step>,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity_value: Option<f64>,
    pub quantity_unit: Option<String>,
    pub source_recipe_id: Option<Uuid>,
}

/// Fields left `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ShoppingItemPatch {
    pub name: Option<String>,
    pub quantity_value: Option<f64>,
    pub quantity_unit: Option<String>,
    pub checked: Option<bool>,
}

//=========================================================================================
// Validation helpers
//=========================================================================================

fn require_servings(servings: u32) -> KitchenResult<u32> {
    if servings == 0 {
        return Err(KitchenError::Validation("servings must be greater than 0".to_string()));
    }
    Ok(servings)
}

fn require_name(field: &str, value: &str) -> KitchenResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KitchenError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn require_quantity(field: &str, value: f64) -> KitchenResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(KitchenError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(value)
}

fn validate_recipe(recipe: &NewRecipe) -> KitchenResult<()> {
    require_name("title", &recipe.title)?;
    if recipe.base_servings == 0 {
        return Err(KitchenError::Validation(
            "baseServings must be greater than 0".to_string(),
        ));
    }
    for line in &recipe.ingredients {
        require_name("ingredientName", &line.ingredient_name)?;
        if let Some(amount) = line.amount_value {
            require_quantity("amountValue", amount)?;
        }
    }
    for (position, step) in recipe.steps.iter().enumerate() {
        if step.index != position + 1 {
            return Err(KitchenError::Validation(format!(
                "step at position {} has index {}; steps must be numbered 1, 2, 3, ...",
                position + 1,
                step.index
            )));
        }
    }
    Ok(())
}

//=========================================================================================
// The Service
//=========================================================================================

pub struct KitchenService {
    repo: Arc<dyn KitchenRepository>,
    /// Serializes every cook session read-modify-write.
    cook_guard: Mutex<()>,
}

impl KitchenService {
    pub fn new(repo: Arc<dyn KitchenRepository>) -> Self {
        Self {
            repo,
            cook_guard: Mutex::new(()),
        }
    }

    pub(crate) fn repo(&self) -> &dyn KitchenRepository {
        self.repo.as_ref()
    }

    /// Loads the starter pantry and recipe library.
    pub async fn seed_sample_data(&self) -> KitchenResult<()> {
        let (ingredients, recipes) = seed::sample_kitchen();
        info!(
            ingredients = ingredients.len(),
            recipes = recipes.len(),
            "Seeding sample kitchen data"
        );
        for ingredient in ingredients {
            self.repo.save_ingredient(ingredient).await?;
        }
        for recipe in recipes {
            self.repo.save_recipe(recipe).await?;
        }
        Ok(())
    }

    // --- Inventory ---

    pub async fn list_ingredients(&self) -> KitchenResult<Vec<Ingredient>> {
        Ok(self.repo.list_ingredients().await?)
    }

    pub async fn add_ingredient(&self, input: NewIngredient) -> KitchenResult<Ingredient> {
        let ingredient = Ingredient {
            id: Uuid::new_v4(),
            name: require_name("name", &input.name)?,
            category: input.category,
            quantity_value: require_quantity("quantityValue", input.quantity_value)?,
            quantity_unit: require_name("quantityUnit", &input.quantity_unit)?,
            notes: input.notes,
            updated_at: Utc::now(),
        };
        self.repo.save_ingredient(ingredient.clone()).await?;
        debug!(ingredient_id = %ingredient.id, name = %ingredient.name, "Ingredient added");
        Ok(ingredient)
    }

    pub async fn update_ingredient(
        &self,
        ingredient_id: Uuid,
        patch: IngredientPatch,
    ) -> KitchenResult<Ingredient> {
        let mut ingredient = self.repo.get_ingredient(ingredient_id).await?;
        if let Some(name) = patch.name {
            ingredient.name = require_name("name", &name)?;
        }
        if let Some(category) = patch.category {
            ingredient.category = Some(category);
        }
        if let Some(value) = patch.quantity_value {
            ingredient.quantity_value = require_quantity("quantityValue", value)?;
        }
        if let Some(unit) = patch.quantity_unit {
            ingredient.quantity_unit = require_name("quantityUnit", &unit)?;
        }
        if let Some(notes) = patch.notes {
            ingredient.notes = Some(notes);
        }
        ingredient.updated_at = Utc::now();
        self.repo.save_ingredient(ingredient.clone()).await?;
        Ok(ingredient)
    }

    /// Takes `amount` off the on-hand quantity, stopping at zero.
    pub async fn decrement_ingredient(&self, ingredient_id: Uuid, amount: f64) -> KitchenResult<Ingredient> {
        let amount = require_quantity("amount", amount)?;
        let mut ingredient = self.repo.get_ingredient(ingredient_id).await?;
        ingredient.quantity_value = (ingredient.quantity_value - amount).max(0.0);
        ingredient.updated_at = Utc::now();
        self.repo.save_ingredient(ingredient.clone()).await?;
        Ok(ingredient)
    }

    pub async fn delete_ingredient(&self, ingredient_id: Uuid) -> KitchenResult<()> {
        Ok(self.repo.delete_ingredient(ingredient_id).await?)
    }

    // --- Recipe Library ---

    /// All recipes, optionally narrowed to those whose title or a tag
    /// contains `search` (case-insensitive).
    pub async fn list_recipes(&self, search: Option<&str>) -> KitchenResult<Vec<Recipe>> {
        let recipes = self.repo.list_recipes().await?;
        let needle = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(needle) => needle.to_lowercase(),
            None => return Ok(recipes),
        };
        Ok(recipes
            .into_iter()
            .filter(|recipe| {
                recipe.title.to_lowercase().contains(&needle)
                    || recipe.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect())
    }

    pub async fn get_recipe(&self, recipe_id: Uuid) -> KitchenResult<Recipe> {
        Ok(self.repo.get_recipe(recipe_id).await?)
    }

    pub async fn create_recipe(&self, input: NewRecipe) -> KitchenResult<Recipe> {
        validate_recipe(&input)?;
        let now = Utc::now();
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            description: input.description,
            base_servings: input.base_servings,
            ingredients: input.ingredients,
            steps: input.steps,
            tags: input.tags,
            source_url: input.source_url,
            created_at: now,
            updated_at: now,
        };
        self.repo.save_recipe(recipe.clone()).await?;
        info!(recipe_id = %recipe.id, title = %recipe.title, "Recipe created");
        Ok(recipe)
    }

    pub async fn delete_recipe(&self, recipe_id: Uuid) -> KitchenResult<()> {
        Ok(self.repo.delete_recipe(recipe_id).await?)
    }

    // --- Feasibility and Scaling ---

    pub async fn list_feasible_recipes(&self, servings: Option<u32>) -> KitchenResult<Vec<RecipeSummary>> {
        if let Some(servings) = servings {
            require_servings(servings)?;
        }
        let recipes = self.repo.list_recipes().await?;
        let inventory = self.repo.list_ingredients().await?;
        Ok(feasibility::feasible_recipes(&recipes, &inventory, servings)
            .into_iter()
            .map(RecipeSummary::from)
            .collect())
    }

    pub async fn missing_ingredients(&self, recipe_id: Uuid, servings: u32) -> KitchenResult<Vec<Shortfall>> {
        let servings = require_servings(servings)?;
        let recipe = self.repo.get_recipe(recipe_id).await?;
        let inventory = self.repo.list_ingredients().await?;
        Ok(feasibility::missing_ingredients(&recipe, &inventory, f64::from(servings)))
    }

    pub async fn scale_recipe(&self, recipe_id: Uuid, servings: u32) -> KitchenResult<ScaledRecipe> {
        let servings = require_servings(servings)?;
        let recipe = self.repo.get_recipe(recipe_id).await?;
        Ok(scaling::scale_recipe(&recipe, servings))
    }

    // --- Cook Sessions ---

    /// Starts cooking `recipe_id`. Any session still active is aborted.
    pub async fn start_cook_session(&self, recipe_id: Uuid, servings: u32) -> KitchenResult<CookSession> {
        let servings = require_servings(servings)?;
        let recipe = self.repo.get_recipe(recipe_id).await?;

        let _guard = self.cook_guard.lock().await;
        let session = CookSession::start(&recipe, servings, Utc::now());
        let superseded = self.repo.start_cook_session(session.clone()).await?;

        if let Some(previous) = superseded {
            info!(
                previous_session_id = %previous.id,
                session_id = %session.id,
                "Active cook session superseded"
            );
        }
        info!(session_id = %session.id, recipe = %recipe.title, servings, "Cook session started");
        Ok(session)
    }

    pub async fn active_cook_session(&self) -> KitchenResult<Option<CookSession>> {
        let now = Utc::now();
        Ok(self
            .repo
            .active_cook_session()
            .await?
            .map(|session| session.with_remaining(now)))
    }

    pub async fn get_cook_session(&self, session_id: Uuid) -> KitchenResult<CookSession> {
        let session = self.repo.get_cook_session(session_id).await?;
        Ok(session.with_remaining(Utc::now()))
    }

    pub async fn list_cook_sessions(&self) -> KitchenResult<Vec<CookSession>> {
        let now = Utc::now();
        Ok(self
            .repo
            .list_cook_sessions()
            .await?
            .iter()
            .map(|session| session.with_remaining(now))
            .collect())
    }

    pub async fn advance_step(&self, session_id: Uuid, step_move: StepMove) -> KitchenResult<CookSession> {
        let _guard = self.cook_guard.lock().await;
        let mut session = self.repo.get_cook_session(session_id).await?;
        let recipe = self.repo.get_recipe(session.recipe_id).await?;

        let index = session.advance(step_move, recipe.steps.len())?;
        self.repo.save_cook_session(session.clone()).await?;
        debug!(%session_id, step = index, "Cook session step changed");
        Ok(session.with_remaining(Utc::now()))
    }

    pub async fn add_timer(
        &self,
        session_id: Uuid,
        step_index: usize,
        label: &str,
        duration_seconds: u32,
    ) -> KitchenResult<CookTimer> {
        let _guard = self.cook_guard.lock().await;
        let mut session = self.repo.get_cook_session(session_id).await?;
        let recipe = self.repo.get_recipe(session.recipe_id).await?;

        let label = match label.trim() {
            "" => format!("Step {step_index}"),
            given => given.to_string(),
        };
        let now = Utc::now();
        let mut timer = session.add_timer(step_index, label, duration_seconds, recipe.steps.len(), now)?;
        self.repo.save_cook_session(session).await?;

        debug!(%session_id, timer_id = %timer.id, duration_seconds, "Timer added");
        timer.remaining_seconds = Some(crate::cook::remaining(&timer, now));
        Ok(timer)
    }

    pub async fn remove_timer(&self, session_id: Uuid, timer_id: Uuid) -> KitchenResult<()> {
        let _guard = self.cook_guard.lock().await;
        let mut session = self.repo.get_cook_session(session_id).await?;
        session.remove_timer(timer_id)?;
        self.repo.save_cook_session(session).await?;
        debug!(%session_id, %timer_id, "Timer removed");
        Ok(())
    }

    pub async fn end_cook_session(&self, session_id: Uuid) -> KitchenResult<CookSession> {
        let _guard = self.cook_guard.lock().await;
        let mut session = self.repo.get_cook_session(session_id).await?;
        session.end()?;
        self.repo.save_cook_session(session.clone()).await?;
        info!(%session_id, "Cook session completed");
        Ok(session.with_remaining(Utc::now()))
    }

    // --- Shopping List ---

    pub async fn list_shopping_items(&self) -> KitchenResult<Vec<ShoppingListItem>> {
        Ok(self.repo.list_shopping_items().await?)
    }

    pub async fn add_shopping_item(&self, input: NewShoppingItem) -> KitchenResult<ShoppingListItem> {
        if let Some(value) = input.quantity_value {
            require_quantity("quantityValue", value)?;
        }
        let item = ShoppingListItem {
            id: Uuid::new_v4(),
            name: require_name("name", &input.name)?,
            quantity_value: input.quantity_value,
            quantity_unit: input.quantity_unit,
            checked: false,
            source_recipe_id: input.source_recipe_id,
        };
        self.repo.save_shopping_item(item.clone()).await?;
        Ok(item)
    }

    pub async fn update_shopping_item(
        &self,
        item_id: Uuid,
        patch: ShoppingItemPatch,
    ) -> KitchenResult<ShoppingListItem> {
        let mut item = self.repo.get_shopping_item(item_id).await?;
        if let Some(name) = patch.name {
            item.name = require_name("name", &name)?;
        }
        if let Some(value) = patch.quantity_value {
            item.quantity_value = Some(require_quantity("quantityValue", value)?);
        }
        if let Some(unit) = patch.quantity_unit {
            item.quantity_unit = Some(unit);
        }
        if let Some(checked) = patch.checked {
            item.checked = checked;
        }
        self.repo.save_shopping_item(item.clone()).await?;
        Ok(item)
    }

    pub async fn delete_shopping_item(&self, item_id: Uuid) -> KitchenResult<()> {
        Ok(self.repo.delete_shopping_item(item_id).await?)
    }

    /// Appends one item per shortfall of `recipe_id` at `servings`.
    /// Running it twice appends the same items twice.
    pub async fn add_missing_to_shopping_list(
        &self,
        recipe_id: Uuid,
        servings: u32,
    ) -> KitchenResult<Vec<ShoppingListItem>> {
        let shortfalls = self.missing_ingredients(recipe_id, servings).await?;
        let items = shopping::items_from_shortfalls(&shortfalls, recipe_id);
        for item in &items {
            self.repo.save_shopping_item(item.clone()).await?;
        }
        info!(%recipe_id, added = items.len(), "Missing ingredients added to shopping list");
        Ok(items)
    }

    pub async fn export_shopping_list(&self, format: ExportFormat) -> KitchenResult<String> {
        let items = self.repo.list_shopping_items().await?;
        Ok(shopping::export(&items, format))
    }
}
