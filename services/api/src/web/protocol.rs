//! services/api/src/web/protocol.rs
//!
//! Defines the JSON request bodies and query strings accepted by the REST API,
//! and their conversion into the kitchen service's inputs.
//! Responses are the core domain types serialized directly.

use recipe_assistant_core::{
    IngredientPatch, NewIngredient, NewRecipe, NewShoppingItem, RecipeIngredient,
    ShoppingItemPatch, Step, StepMove,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

//=========================================================================================
// Chat
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
pub struct ChatRequest {
    /// Free text typed by the user.
    pub message: String,
}

//=========================================================================================
// Inventory
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientRequest {
    pub name: String,
    pub category: Option<String>,
    pub quantity_value: f64,
    pub quantity_unit: String,
    pub notes: Option<String>,
}

impl From<CreateIngredientRequest> for NewIngredient {
    fn from(req: CreateIngredientRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            quantity_value: req.quantity_value,
            quantity_unit: req.quantity_unit,
            notes: req.notes,
        }
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity_value: Option<f64>,
    pub quantity_unit: Option<String>,
    pub notes: Option<String>,
}

impl From<UpdateIngredientRequest> for IngredientPatch {
    fn from(req: UpdateIngredientRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            quantity_value: req.quantity_value,
            quantity_unit: req.quantity_unit,
            notes: req.notes,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DecrementRequest {
    pub amount: f64,
}

//=========================================================================================
// Recipes
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub base_servings: u32,
    #[schema(value_type = Vec<Object>)]
    pub ingredients: Vec<RecipeIngredient>,
    #[schema(value_type = Vec<Object>)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source_url: Option<String>,
}

impl From<CreateRecipeRequest> for NewRecipe {
    fn from(req: CreateRecipeRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            base_servings: req.base_servings,
            ingredients: req.ingredients,
            steps: req.steps,
            tags: req.tags,
            source_url: req.source_url,
        }
    }
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeSearchQuery {
    /// Case-insensitive fragment of a title or tag.
    pub search: Option<String>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionalServingsQuery {
    /// Defaults to each recipe's own base servings.
    pub servings: Option<u32>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServingsQuery {
    pub servings: u32,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct ServingsRequest {
    pub servings: u32,
}

//=========================================================================================
// Cook Sessions
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartCookSessionRequest {
    pub recipe_id: Uuid,
    pub servings: u32,
}

/// Exactly one of `stepIndex` (absolute jump) or `delta` (relative move).
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceStepRequest {
    pub step_index: Option<i64>,
    pub delta: Option<i64>,
}

impl AdvanceStepRequest {
    pub fn into_step_move(self) -> Result<StepMove, String> {
        match (self.step_index, self.delta) {
            (Some(index), None) => Ok(StepMove::JumpTo(index)),
            (None, Some(1)) => Ok(StepMove::Next),
            (None, Some(-1)) => Ok(StepMove::Previous),
            (None, Some(delta)) => Ok(StepMove::By(delta)),
            (Some(_), Some(_)) => Err("give either stepIndex or delta, not both".to_string()),
            (None, None) => Err("stepIndex or delta is required".to_string()),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTimerRequest {
    pub step_index: usize,
    #[serde(default)]
    pub label: String,
    pub duration_seconds: u32,
}

//=========================================================================================
// Shopping List
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShoppingItemRequest {
    pub name: String,
    pub quantity_value: Option<f64>,
    pub quantity_unit: Option<String>,
    pub source_recipe_id: Option<Uuid>,
}

impl From<CreateShoppingItemRequest> for NewShoppingItem {
    fn from(req: CreateShoppingItemRequest) -> Self {
        Self {
            name: req.name,
            quantity_value: req.quantity_value,
            quantity_unit: req.quantity_unit,
            source_recipe_id: req.source_recipe_id,
        }
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShoppingItemRequest {
    pub name: Option<String>,
    pub quantity_value: Option<f64>,
    pub quantity_unit: Option<String>,
    pub checked: Option<bool>,
}

impl From<UpdateShoppingItemRequest> for ShoppingItemPatch {
    fn from(req: UpdateShoppingItemRequest) -> Self {
        Self {
            name: req.name,
            quantity_value: req.quantity_value,
            quantity_unit: req.quantity_unit,
            checked: req.checked,
        }
    }
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// `text` (default) or `csv`.
    pub format: Option<String>,
}
