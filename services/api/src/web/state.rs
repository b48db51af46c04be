//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use recipe_assistant_core::{KitchenRepository, KitchenService};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
pub struct AppState {
    pub kitchen: KitchenService,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wraps `repo` in a `KitchenService` and optionally loads the starter data.
    pub async fn new(
        repo: Arc<dyn KitchenRepository>,
        config: Arc<Config>,
    ) -> recipe_assistant_core::KitchenResult<Self> {
        let kitchen = KitchenService::new(repo);
        if config.seed_sample_data {
            kitchen.seed_sample_data().await?;
        }
        Ok(Self { kitchen, config })
    }
}
