//! crates/recipe_assistant_core/src/intent.rs
//!
//! Maps free chat text to a discrete kitchen action.
//!
//! Matching is deliberately shallow: the input is lower-cased and run through
//! an ordered rule table, and the first rule whose predicate holds wins. The
//! rules overlap ("add 2 servings to the shopping list"), so their order is
//! part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RECIPE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)recipe\s+([\w-]+)").expect("recipe token pattern is valid")
});

static SERVINGS_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*servings?").expect("servings pattern is valid")
});

/// The action a chat message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    ListFeasible,
    StartCookSession,
    ScaleRecipe,
    MissingIngredients,
    AddToShoppingList,
    OpenRecipe,
    /// Recognized, but the dispatcher has no action for it.
    BasicSubstitutions,
    None,
}

/// Parameters pulled out of the message text. Most intents carry none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub intent: IntentKind,
    pub params: IntentParams,
}

struct IntentRule {
    intent: IntentKind,
    /// Tested against the lower-cased message.
    matches: fn(&str) -> bool,
    /// Run against the original message.
    extract: fn(&str) -> IntentParams,
}

const RULES: [IntentRule; 7] = [
    IntentRule {
        intent: IntentKind::ListFeasible,
        matches: asks_what_to_cook,
        extract: no_params,
    },
    IntentRule {
        intent: IntentKind::StartCookSession,
        matches: asks_to_start_cooking,
        extract: recipe_token,
    },
    IntentRule {
        intent: IntentKind::ScaleRecipe,
        matches: asks_to_scale,
        extract: servings_count,
    },
    IntentRule {
        intent: IntentKind::MissingIngredients,
        matches: asks_for_missing,
        extract: no_params,
    },
    IntentRule {
        intent: IntentKind::AddToShoppingList,
        matches: asks_to_add_to_list,
        extract: no_params,
    },
    IntentRule {
        intent: IntentKind::OpenRecipe,
        matches: asks_to_open_recipe,
        extract: no_params,
    },
    IntentRule {
        intent: IntentKind::BasicSubstitutions,
        matches: asks_for_substitute,
        extract: no_params,
    },
];

/// Classifies a chat message. Never fails: unmatched text is `IntentKind::None`.
pub fn parse_intent(message: &str) -> ParsedIntent {
    let lower = message.to_lowercase();

    RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map(|rule| ParsedIntent {
            intent: rule.intent,
            params: (rule.extract)(message),
        })
        .unwrap_or(ParsedIntent {
            intent: IntentKind::None,
            params: IntentParams::default(),
        })
}

fn asks_what_to_cook(lower: &str) -> bool {
    lower.contains("what can i cook") || lower.contains("what can i make") || lower.contains("feasible")
}

fn asks_to_start_cooking(lower: &str) -> bool {
    // "start cooking" contains "start cook"; both are listed to keep the vocabulary explicit.
    lower.contains("start cooking") || lower.contains("start cook")
}

fn asks_to_scale(lower: &str) -> bool {
    lower.contains("scale") && lower.contains("serving")
}

fn asks_for_missing(lower: &str) -> bool {
    lower.contains("missing ingredient")
}

fn asks_to_add_to_list(lower: &str) -> bool {
    lower.contains("add") && lower.contains("shopping list")
}

fn asks_to_open_recipe(lower: &str) -> bool {
    lower.contains("open recipe") || lower.contains("show recipe")
}

fn asks_for_substitute(lower: &str) -> bool {
    lower.contains("substitute") || lower.contains("replacement")
}

fn no_params(_message: &str) -> IntentParams {
    IntentParams::default()
}

fn recipe_token(message: &str) -> IntentParams {
    IntentParams {
        recipe: RECIPE_TOKEN
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        servings: None,
    }
}

fn servings_count(message: &str) -> IntentParams {
    IntentParams {
        recipe: None,
        servings: SERVINGS_COUNT
            .captures(message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn what_can_i_cook_lists_feasible() {
        let parsed = parse_intent("What can I cook tonight?");
        assert_eq!(parsed.intent, IntentKind::ListFeasible);
        assert_eq!(parsed.params, IntentParams::default());
    }

    #[test]
    fn scale_extracts_servings() {
        let parsed = parse_intent("scale to 6 servings");
        assert_eq!(parsed.intent, IntentKind::ScaleRecipe);
        assert_eq!(parsed.params.servings, Some(6));
    }

    #[test]
    fn scale_without_number_has_no_servings() {
        let parsed = parse_intent("Scale it for more servings please");
        assert_eq!(parsed.intent, IntentKind::ScaleRecipe);
        assert_eq!(parsed.params.servings, None);
    }

    #[test]
    fn scale_accepts_singular_serving() {
        let parsed = parse_intent("SCALE down to 1 serving");
        assert_eq!(parsed.params.servings, Some(1));
    }

    #[test]
    fn oversized_servings_number_is_dropped() {
        let parsed = parse_intent("scale to 99999999999 servings");
        assert_eq!(parsed.intent, IntentKind::ScaleRecipe);
        assert_eq!(parsed.params.servings, None);
    }

    #[test]
    fn start_cooking_extracts_recipe_token() {
        let parsed = parse_intent("Start cooking recipe Bolognese now");
        assert_eq!(parsed.intent, IntentKind::StartCookSession);
        assert_eq!(parsed.params.recipe.as_deref(), Some("Bolognese"));

        let id = "c4129ace-34ff-4445-8f8c-28ebc59a1e3a";
        let by_id = parse_intent(&format!("start cooking recipe {id}"));
        assert_eq!(by_id.params.recipe.as_deref(), Some(id));

        let bare = parse_intent("let's start cooking");
        assert_eq!(bare.intent, IntentKind::StartCookSession);
        assert_eq!(bare.params.recipe, None);
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        // Mentions "feasible" and the shopping list; the feasibility rule is first.
        assert_eq!(
            parse_intent("add whatever is feasible to my shopping list").intent,
            IntentKind::ListFeasible
        );
        // Scaling outranks adding to the list.
        assert_eq!(
            parse_intent("scale to 2 servings and add to shopping list").intent,
            IntentKind::ScaleRecipe
        );
        // Missing ingredients outrank adding to the list.
        assert_eq!(
            parse_intent("add missing ingredients to shopping list").intent,
            IntentKind::MissingIngredients
        );
    }

    #[test]
    fn remaining_rules_match() {
        assert_eq!(
            parse_intent("Add these to my shopping list").intent,
            IntentKind::AddToShoppingList
        );
        assert_eq!(parse_intent("show recipe").intent, IntentKind::OpenRecipe);
        assert_eq!(parse_intent("open recipe please").intent, IntentKind::OpenRecipe);
        assert_eq!(
            parse_intent("what's a substitute for butter?").intent,
            IntentKind::BasicSubstitutions
        );
        assert_eq!(
            parse_intent("any replacement for eggs").intent,
            IntentKind::BasicSubstitutions
        );
    }

    #[test]
    fn unmatched_text_is_none() {
        let parsed = parse_intent("hello there");
        assert_eq!(parsed.intent, IntentKind::None);
        assert_eq!(parse_intent("").intent, IntentKind::None);
    }

    #[test]
    fn serializes_with_screaming_case_tag() {
        let json = serde_json::to_value(parse_intent("scale to 6 servings")).unwrap();
        assert_eq!(json["intent"], "SCALE_RECIPE");
        assert_eq!(json["params"]["servings"], 6);
    }
}
