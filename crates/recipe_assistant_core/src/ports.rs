//! crates/recipe_assistant_core/src/ports.rs
//!
//! Defines the storage contract for the kitchen.
//! The trait forms the boundary of the hexagonal architecture: the engines and
//! the `KitchenService` only ever see a `KitchenRepository`, never a concrete
//! store, so any backend with the same entity shapes can be plugged in.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ChatMessage, CookSession, Ingredient, Recipe, ShoppingListItem};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from the backing store.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Repository Port
//=========================================================================================

/// Entity storage for one kitchen.
///
/// `list_*` methods return entities in insertion order; `save_*` methods are
/// upserts that keep an existing entity's position.
#[async_trait]
pub trait KitchenRepository: Send + Sync {
    // --- Inventory ---
    async fn list_ingredients(&self) -> PortResult<Vec<Ingredient>>;

    async fn get_ingredient(&self, ingredient_id: Uuid) -> PortResult<Ingredient>;

    async fn save_ingredient(&self, ingredient: Ingredient) -> PortResult<()>;

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> PortResult<()>;

    // --- Recipe Library ---
    async fn list_recipes(&self) -> PortResult<Vec<Recipe>>;

    async fn get_recipe(&self, recipe_id: Uuid) -> PortResult<Recipe>;

    async fn save_recipe(&self, recipe: Recipe) -> PortResult<()>;

    async fn delete_recipe(&self, recipe_id: Uuid) -> PortResult<()>;

    // --- Cook Sessions ---
    async fn get_cook_session(&self, session_id: Uuid) -> PortResult<CookSession>;

    async fn list_cook_sessions(&self) -> PortResult<Vec<CookSession>>;

    /// Stores `session` as the one active session.
    ///
    /// Whatever session the active pointer referenced is aborted and returned,
    /// in the same critical section that installs the new pointer.
    async fn start_cook_session(&self, session: CookSession) -> PortResult<Option<CookSession>>;

    /// Upserts a session. Saving the currently active session with a
    /// non-active status clears the active pointer.
    async fn save_cook_session(&self, session: CookSession) -> PortResult<()>;

    async fn active_cook_session(&self) -> PortResult<Option<CookSession>>;

    // --- Shopping List ---
    async fn list_shopping_items(&self) -> PortResult<Vec<ShoppingListItem>>;

    async fn get_shopping_item(&self, item_id: Uuid) -> PortResult<ShoppingListItem>;

    async fn save_shopping_item(&self, item: ShoppingListItem) -> PortResult<()>;

    async fn delete_shopping_item(&self, item_id: Uuid) -> PortResult<()>;

    // --- Chat Log ---
    async fn append_chat_message(&self, message: ChatMessage) -> PortResult<()>;

    async fn list_chat_messages(&self) -> PortResult<Vec<ChatMessage>>;
}
