//! crates/recipe_assistant_core/src/chat.rs
//!
//! The rule-based chat front end: parse the message, run the matching kitchen
//! action, and record both sides of the exchange in the chat log.

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    AddedItems, ChatAction, ChatMessage, MissingReport, OpenedRecipe, Recipe, StartedSession,
};
use crate::intent::{parse_intent, IntentKind, ParsedIntent};
use crate::service::{KitchenError, KitchenResult, KitchenService};

/// Servings used when a scale request names no (or a zero) serving count.
pub const DEFAULT_SCALE_SERVINGS: u32 = 4;

const HELP_TEXT: &str =
    "I can help you with cooking! Try asking 'What can I cook?' or 'Start cooking' a recipe.";

const SUBSTITUTIONS_UNAVAILABLE: &str =
    "I can't suggest substitutions yet. Ask me which ingredients are missing for a recipe instead.";

/// The parsed intent plus the user message and the reply, in that order.
#[derive(Debug, Clone, Serialize)]
pub struct ChatExchange {
    pub intent: ParsedIntent,
    pub messages: Vec<ChatMessage>,
}

impl KitchenService {
    pub async fn send_chat_message(&self, text: &str) -> KitchenResult<ChatExchange> {
        if text.trim().is_empty() {
            return Err(KitchenError::Validation("message is required".to_string()));
        }

        let user_message = ChatMessage::user(text);
        let parsed = parse_intent(text);
        debug!(intent = ?parsed.intent, "Chat intent parsed");
        let reply = self.dispatch(&parsed).await?;

        // Only a handled message is logged, and always together with its reply.
        self.repo().append_chat_message(user_message.clone()).await?;
        self.repo().append_chat_message(reply.clone()).await?;

        Ok(ChatExchange {
            intent: parsed,
            messages: vec![user_message, reply],
        })
    }

    pub async fn chat_history(&self) -> KitchenResult<Vec<ChatMessage>> {
        Ok(self.repo().list_chat_messages().await?)
    }

    async fn dispatch(&self, parsed: &ParsedIntent) -> KitchenResult<ChatMessage> {
        match parsed.intent {
            IntentKind::ListFeasible => {
                let feasible = self.list_feasible_recipes(None).await?;
                Ok(ChatMessage::action(
                    format!(
                        "Found {} recipes you can make with your current ingredients.",
                        feasible.len()
                    ),
                    ChatAction::ListFeasible(feasible),
                ))
            }

            IntentKind::OpenRecipe => {
                let Some(recipe) = self.target_recipe(None).await? else {
                    return Ok(ChatMessage::assistant("No recipes found in your library."));
                };
                Ok(ChatMessage::action(
                    format!("Here's the recipe for {}.", recipe.title),
                    ChatAction::OpenRecipe(OpenedRecipe {
                        id: recipe.id,
                        title: recipe.title,
                        description: recipe.description,
                        base_servings: recipe.base_servings,
                        ingredients: recipe.ingredients,
                        steps: recipe.steps,
                    }),
                ))
            }

            IntentKind::ScaleRecipe => {
                let Some(recipe) = self.target_recipe(None).await? else {
                    return Ok(ChatMessage::assistant("No recipe to scale."));
                };
                let servings = parsed
                    .params
                    .servings
                    .filter(|servings| *servings > 0)
                    .unwrap_or(DEFAULT_SCALE_SERVINGS);
                let scaled = self.scale_recipe(recipe.id, servings).await?;
                Ok(ChatMessage::action(
                    format!("Scaled {} to {} servings.", recipe.title, servings),
                    ChatAction::ScaleRecipe(scaled),
                ))
            }

            IntentKind::MissingIngredients => {
                let Some(recipe) = self.target_recipe(None).await? else {
                    return Ok(ChatMessage::assistant("No recipe selected."));
                };
                let missing = self.missing_ingredients(recipe.id, recipe.base_servings).await?;
                Ok(ChatMessage::action(
                    format!(
                        "You're missing {} ingredients for {}.",
                        missing.len(),
                        recipe.title
                    ),
                    ChatAction::MissingIngredients(MissingReport {
                        recipe_id: recipe.id,
                        recipe_title: recipe.title,
                        missing,
                    }),
                ))
            }

            IntentKind::AddToShoppingList => {
                let Some(recipe) = self.target_recipe(None).await? else {
                    return Ok(ChatMessage::assistant("No recipe selected."));
                };
                let added = self
                    .add_missing_to_shopping_list(recipe.id, recipe.base_servings)
                    .await?;
                Ok(ChatMessage::action(
                    format!(
                        "Added {} missing ingredients to your shopping list.",
                        added.len()
                    ),
                    ChatAction::AddToShoppingList(AddedItems { added }),
                ))
            }

            IntentKind::StartCookSession => {
                let Some(recipe) = self.target_recipe(parsed.params.recipe.as_deref()).await? else {
                    return Ok(ChatMessage::assistant("No recipe to start cooking."));
                };
                let session = self.start_cook_session(recipe.id, recipe.base_servings).await?;
                Ok(ChatMessage::action(
                    format!(
                        "Started cooking {}! Navigate to the Cook page to see your steps.",
                        recipe.title
                    ),
                    ChatAction::StartCookSession(StartedSession {
                        session_id: session.id,
                        recipe_title: recipe.title,
                    }),
                ))
            }

            IntentKind::BasicSubstitutions => Ok(ChatMessage::assistant(SUBSTITUTIONS_UNAVAILABLE)),

            IntentKind::None => Ok(ChatMessage::assistant(HELP_TEXT)),
        }
    }

    /// The recipe a chat action applies to: the one named by `token` (its id,
    /// or a case-insensitive title fragment) if any, else the first in the library.
    async fn target_recipe(&self, token: Option<&str>) -> KitchenResult<Option<Recipe>> {
        let recipes = self.repo().list_recipes().await?;

        let named = token.map(str::to_lowercase).and_then(|token| {
            recipes.iter().position(|recipe| {
                recipe.id.to_string() == token || recipe.title.to_lowercase().contains(&token)
            })
        });

        Ok(match named {
            Some(position) => recipes.into_iter().nth(position),
            None => recipes.into_iter().next(),
        })
    }
}
