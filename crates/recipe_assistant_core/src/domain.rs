//! crates/recipe_assistant_core/src/domain.rs
//!
//! Defines the core data structures for the kitchen: inventory, recipes,
//! cook sessions, the shopping list and the chat log.
//! These structs are independent of any storage backend. They serialize with
//! camelCase field names, which is the shape the web layer hands to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Inventory
//=========================================================================================

/// An ingredient on hand in the pantry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Never negative.
    pub quantity_value: f64,
    pub quantity_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

//=========================================================================================
// Recipe Library
//=========================================================================================

/// A recipe definition: what goes in and the ordered steps to make it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Always > 0; scaling divides by it.
    pub base_servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    /// `steps[i].index == i + 1`.
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of a recipe's ingredient list.
///
/// An absent `amount_value` means "to taste": such an ingredient never blocks
/// feasibility and scales to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub ingredient_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_ingredient_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub index: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_suggestion_seconds: Option<u64>,
}

/// The compact view of a recipe used in listings and chat payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
        }
    }
}

//=========================================================================================
// Cook Sessions
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CookStatus {
    Active,
    Completed,
    Aborted,
}

/// A single cook-through of a recipe. See `crate::cook` for its transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookSession {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub servings: u32,
    pub started_at: DateTime<Utc>,
    /// 1-based, always within `[1, steps.len()]` of the recipe.
    pub current_step_index: usize,
    pub timers: Vec<CookTimer>,
    pub status: CookStatus,
}

/// A countdown attached to a step of a cook session.
///
/// Only the absolute end time is authoritative. `remaining_seconds` is filled
/// in on the copies handed out to callers and is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookTimer {
    pub id: Uuid,
    pub step_index: usize,
    pub label: String,
    pub target_end_time: DateTime<Utc>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<i64>,
}

//=========================================================================================
// Shopping List
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<String>,
    #[serde(default)]
    pub checked: bool,
    /// Non-owning back-reference to the recipe the item was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_recipe_id: Option<Uuid>,
}

//=========================================================================================
// Chat
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
    Action,
}

/// A single entry of the chat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub action: Option<ChatAction>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into(), None)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content.into(), None)
    }

    pub fn action(content: impl Into<String>, action: ChatAction) -> Self {
        Self::new(ChatRole::Action, content.into(), Some(action))
    }

    fn new(role: ChatRole, content: String, action: Option<ChatAction>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
            action,
        }
    }
}

/// The result of a dispatched chat action. Serializes as an `actionType`
/// tag next to an `actionPayload` whose shape depends on the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "actionType",
    content = "actionPayload",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum ChatAction {
    ListFeasible(Vec<RecipeSummary>),
    OpenRecipe(OpenedRecipe),
    ScaleRecipe(ScaledRecipe),
    MissingIngredients(MissingReport),
    AddToShoppingList(AddedItems),
    StartCookSession(StartedSession),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenedRecipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub base_servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<Step>,
}

/// A recipe's ingredient list at a chosen serving count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRecipe {
    pub recipe_id: Uuid,
    pub title: String,
    pub target_servings: u32,
    pub ingredients: Vec<ScaledIngredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    pub ingredient_name: String,
    /// `None` renders as "to taste".
    pub scaled_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// How much of one ingredient is lacking for a recipe at a serving count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub name: String,
    /// The delta still needed, not the gross amount.
    pub needed_amount: f64,
    pub needed_unit: String,
    pub available_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingReport {
    pub recipe_id: Uuid,
    pub recipe_title: String,
    pub missing: Vec<Shortfall>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedItems {
    pub added: Vec<ShoppingListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedSession {
    pub session_id: Uuid,
    pub recipe_title: String,
}
