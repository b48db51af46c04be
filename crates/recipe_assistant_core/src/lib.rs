pub mod chat;
pub mod cook;
pub mod domain;
pub mod feasibility;
pub mod intent;
pub mod ports;
pub mod scaling;
pub mod seed;
pub mod service;
pub mod shopping;

pub use chat::ChatExchange;
pub use cook::{CookError, StepMove};
pub use domain::{
    ChatAction, ChatMessage, ChatRole, CookSession, CookStatus, CookTimer, Ingredient, Recipe,
    RecipeIngredient, RecipeSummary, ScaledIngredient, ScaledRecipe, Shortfall, ShoppingListItem,
    Step,
};
pub use intent::{parse_intent, IntentKind, IntentParams, ParsedIntent};
pub use ports::{KitchenRepository, PortError, PortResult};
pub use service::{
    IngredientPatch, KitchenError, KitchenResult, KitchenService, NewIngredient, NewRecipe,
    NewShoppingItem, ShoppingItemPatch,
};
pub use shopping::ExportFormat;
