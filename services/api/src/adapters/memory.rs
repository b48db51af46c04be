//! services/api/src/adapters/memory.rs
//!
//! This module contains the in-memory storage adapter, the concrete
//! implementation of the `KitchenRepository` port from the `core` crate.
//! Every table is an `IndexMap` so listings come back in insertion order,
//! and all tables sit behind one lock so multi-table updates are atomic.

use async_trait::async_trait;
use indexmap::IndexMap;
use recipe_assistant_core::domain::{
    ChatMessage, CookSession, Ingredient, Recipe, ShoppingListItem,
};
use recipe_assistant_core::ports::{KitchenRepository, PortError, PortResult};
use tokio::sync::RwLock;
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A process-local store that implements the `KitchenRepository` port.
#[derive(Default)]
pub struct InMemoryRepository {
    tables: RwLock<KitchenTables>,
}

#[derive(Default)]
struct KitchenTables {
    ingredients: IndexMap<Uuid, Ingredient>,
    recipes: IndexMap<Uuid, Recipe>,
    cook_sessions: IndexMap<Uuid, CookSession>,
    /// Kept in step with `cook_sessions` under the same lock.
    active_cook_session: Option<Uuid>,
    shopping_items: IndexMap<Uuid, ShoppingListItem>,
    chat_messages: Vec<ChatMessage>,
}

impl InMemoryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(kind: &str, id: Uuid) -> PortError {
    PortError::NotFound(format!("{} {} not found", kind, id))
}

fn fetch<T: Clone>(table: &IndexMap<Uuid, T>, kind: &str, id: Uuid) -> PortResult<T> {
    table.get(&id).cloned().ok_or_else(|| not_found(kind, id))
}

/// `shift_remove` keeps the remaining entries in insertion order.
fn remove<T>(table: &mut IndexMap<Uuid, T>, kind: &str, id: Uuid) -> PortResult<()> {
    table
        .shift_remove(&id)
        .map(|_| ())
        .ok_or_else(|| not_found(kind, id))
}

//=========================================================================================
// `KitchenRepository` Trait Implementation
//=========================================================================================

#[async_trait]
impl KitchenRepository for InMemoryRepository {
    async fn list_ingredients(&self) -> PortResult<Vec<Ingredient>> {
        Ok(self.tables.read().await.ingredients.values().cloned().collect())
    }

    async fn get_ingredient(&self, ingredient_id: Uuid) -> PortResult<Ingredient> {
        fetch(&self.tables.read().await.ingredients, "Ingredient", ingredient_id)
    }

    async fn save_ingredient(&self, ingredient: Ingredient) -> PortResult<()> {
        self.tables
            .write()
            .await
            .ingredients
            .insert(ingredient.id, ingredient);
        Ok(())
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> PortResult<()> {
        remove(&mut self.tables.write().await.ingredients, "Ingredient", ingredient_id)
    }

    async fn list_recipes(&self) -> PortResult<Vec<Recipe>> {
        Ok(self.tables.read().await.recipes.values().cloned().collect())
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> PortResult<Recipe> {
        fetch(&self.tables.read().await.recipes, "Recipe", recipe_id)
    }

    async fn save_recipe(&self, recipe: Recipe) -> PortResult<()> {
        self.tables.write().await.recipes.insert(recipe.id, recipe);
        Ok(())
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> PortResult<()> {
        remove(&mut self.tables.write().await.recipes, "Recipe", recipe_id)
    }

    async fn get_cook_session(&self, session_id: Uuid) -> PortResult<CookSession> {
        fetch(&self.tables.read().await.cook_sessions, "Cook session", session_id)
    }

    async fn list_cook_sessions(&self) -> PortResult<Vec<CookSession>> {
        Ok(self.tables.read().await.cook_sessions.values().cloned().collect())
    }

    async fn start_cook_session(&self, session: CookSession) -> PortResult<Option<CookSession>> {
        let mut tables = self.tables.write().await;

        let superseded = match tables.active_cook_session.take() {
            Some(previous_id) => tables.cook_sessions.get_mut(&previous_id).map(|previous| {
                previous.abort();
                previous.clone()
            }),
            None => None,
        };

        tables.active_cook_session = session.is_active().then_some(session.id);
        tables.cook_sessions.insert(session.id, session);
        Ok(superseded)
    }

    async fn save_cook_session(&self, session: CookSession) -> PortResult<()> {
        let mut tables = self.tables.write().await;
        if tables.active_cook_session == Some(session.id) && !session.is_active() {
            tables.active_cook_session = None;
        }
        tables.cook_sessions.insert(session.id, session);
        Ok(())
    }

    async fn active_cook_session(&self) -> PortResult<Option<CookSession>> {
        let tables = self.tables.read().await;
        Ok(tables
            .active_cook_session
            .and_then(|id| tables.cook_sessions.get(&id).cloned()))
    }

    async fn list_shopping_items(&self) -> PortResult<Vec<ShoppingListItem>> {
        Ok(self.tables.read().await.shopping_items.values().cloned().collect())
    }

    async fn get_shopping_item(&self, item_id: Uuid) -> PortResult<ShoppingListItem> {
        fetch(&self.tables.read().await.shopping_items, "Shopping list item", item_id)
    }

    async fn save_shopping_item(&self, item: ShoppingListItem) -> PortResult<()> {
        self.tables.write().await.shopping_items.insert(item.id, item);
        Ok(())
    }

    async fn delete_shopping_item(&self, item_id: Uuid) -> PortResult<()> {
        remove(
            &mut self.tables.write().await.shopping_items,
            "Shopping list item",
            item_id,
        )
    }

    async fn append_chat_message(&self, message: ChatMessage) -> PortResult<()> {
        self.tables.write().await.chat_messages.push(message);
        Ok(())
    }

    async fn list_chat_messages(&self) -> PortResult<Vec<ChatMessage>> {
        Ok(self.tables.read().await.chat_messages.clone())
    }
}
