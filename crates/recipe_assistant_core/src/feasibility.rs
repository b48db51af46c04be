//! crates/recipe_assistant_core/src/feasibility.rs
//!
//! Decides which recipes can be made from the current inventory and what is
//! lacking for the ones that cannot.
//!
//! Quantities are compared as raw numbers. Units are carried along for display
//! but never converted, so "2 cans" against "400 g" compares 2 with 400.

use crate::domain::{Ingredient, Recipe, RecipeIngredient, Shortfall};

/// Finds the inventory entry a recipe line refers to: the explicit canonical
/// link first, then a case-insensitive name match.
pub fn find_inventory_match<'a>(
    line: &RecipeIngredient,
    inventory: &'a [Ingredient],
) -> Option<&'a Ingredient> {
    line.canonical_ingredient_id
        .and_then(|id| inventory.iter().find(|ing| ing.id == id))
        .or_else(|| {
            let wanted = line.ingredient_name.to_lowercase();
            inventory.iter().find(|ing| ing.name.to_lowercase() == wanted)
        })
}

/// The per-ingredient check shared by `is_feasible` and `missing_ingredients`.
///
/// Returns `None` for lines that cannot block: unquantified ones (a zero
/// amount counts as unquantified) and ones with enough on hand.
fn shortfall_for(line: &RecipeIngredient, inventory: &[Ingredient], scale_factor: f64) -> Option<Shortfall> {
    let amount = line.amount_value.filter(|amount| *amount > 0.0)?;
    let needed = amount * scale_factor;
    let available = find_inventory_match(line, inventory)
        .map(|ing| ing.quantity_value)
        .unwrap_or(0.0);

    (available < needed).then(|| Shortfall {
        name: line.ingredient_name.clone(),
        needed_amount: needed - available,
        needed_unit: line.amount_unit.clone().unwrap_or_default(),
        available_amount: available,
    })
}

fn scale_factor(recipe: &Recipe, servings: f64) -> f64 {
    servings / f64::from(recipe.base_servings)
}

/// Whether every quantified ingredient of `recipe` is on hand at `servings`.
pub fn is_feasible(recipe: &Recipe, inventory: &[Ingredient], servings: f64) -> bool {
    let factor = scale_factor(recipe, servings);
    recipe
        .ingredients
        .iter()
        .all(|line| shortfall_for(line, inventory, factor).is_none())
}

/// The recipes that can be made, in library order.
///
/// Each recipe is checked at `target_servings` when given, else at its own
/// base serving count.
pub fn feasible_recipes<'a>(
    recipes: &'a [Recipe],
    inventory: &[Ingredient],
    target_servings: Option<u32>,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| {
            let servings = target_servings.unwrap_or(recipe.base_servings);
            is_feasible(recipe, inventory, f64::from(servings))
        })
        .collect()
}

/// One shortfall record per quantified ingredient that is not sufficiently on hand.
pub fn missing_ingredients(recipe: &Recipe, inventory: &[Ingredient], servings: f64) -> Vec<Shortfall> {
    let factor = scale_factor(recipe, servings);
    recipe
        .ingredients
        .iter()
        .filter_map(|line| shortfall_for(line, inventory, factor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::Utc;
    use uuid::Uuid;

    fn pantry_item(name: &str, value: f64, unit: &str) -> Ingredient {
        Ingredient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: None,
            quantity_value: value,
            quantity_unit: unit.to_string(),
            notes: None,
            updated_at: Utc::now(),
        }
    }

    fn line(name: &str, amount: Option<f64>, unit: Option<&str>) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_name: name.to_string(),
            canonical_ingredient_id: None,
            amount_value: amount,
            amount_unit: unit.map(str::to_string),
            notes: None,
        }
    }

    fn recipe(base_servings: u32, ingredients: Vec<RecipeIngredient>) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: "Test".to_string(),
            description: String::new(),
            base_servings,
            ingredients,
            steps: Vec::new(),
            tags: Vec::new(),
            source_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn ground_beef_shortfall_depends_on_servings() {
        let inventory = vec![pantry_item("Ground Beef", 300.0, "g")];
        let bolognese = recipe(4, vec![line("Ground Beef", Some(500.0), Some("g"))]);

        assert!(!is_feasible(&bolognese, &inventory, 4.0));
        assert!(is_feasible(&bolognese, &inventory, 2.0));

        let missing = missing_ingredients(&bolognese, &inventory, 4.0);
        assert_eq!(
            missing,
            vec![Shortfall {
                name: "Ground Beef".to_string(),
                needed_amount: 200.0,
                needed_unit: "g".to_string(),
                available_amount: 300.0,
            }]
        );
        assert!(missing_ingredients(&bolognese, &inventory, 2.0).is_empty());
    }

    #[test]
    fn sample_bolognese_lacks_beef_and_garlic() {
        let (inventory, recipes) = seed::sample_kitchen();
        let missing = missing_ingredients(&recipes[0], &inventory, 4.0);
        let names: Vec<&str> = missing.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ground Beef", "Garlic"]);
        assert_eq!(missing[1].needed_amount, 2.0);
        assert_eq!(missing[1].needed_unit, "cloves");
    }

    #[test]
    fn unquantified_lines_never_block() {
        let to_taste = recipe(
            2,
            vec![line("Salt", None, None), line("Saffron", Some(0.0), Some("g"))],
        );
        assert!(is_feasible(&to_taste, &[], 2.0));
        assert!(is_feasible(&to_taste, &[], 200.0));
        assert!(missing_ingredients(&to_taste, &[], 200.0).is_empty());
    }

    #[test]
    fn absent_inventory_counts_as_zero() {
        let r = recipe(2, vec![line("Eggs", Some(3.0), None)]);
        let missing = missing_ingredients(&r, &[], 4.0);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].needed_amount, 6.0);
        assert_eq!(missing[0].available_amount, 0.0);
        assert_eq!(missing[0].needed_unit, "");
    }

    #[test]
    fn matches_names_case_insensitively() {
        let inventory = vec![pantry_item("GROUND beef", 500.0, "g")];
        let r = recipe(4, vec![line("Ground Beef", Some(500.0), Some("g"))]);
        assert!(is_feasible(&r, &inventory, 4.0));
    }

    #[test]
    fn canonical_link_wins_over_name() {
        let linked = pantry_item("Beef mince", 1000.0, "g");
        let same_name = pantry_item("Ground Beef", 10.0, "g");
        let mut l = line("Ground Beef", Some(500.0), Some("g"));
        l.canonical_ingredient_id = Some(linked.id);

        let inventory = vec![same_name, linked.clone()];
        let found = find_inventory_match(&l, &inventory).map(|ing| ing.id);
        assert_eq!(found, Some(linked.id));
    }

    #[test]
    fn dangling_canonical_link_falls_back_to_name() {
        let mut l = line("Onion", Some(1.0), None);
        l.canonical_ingredient_id = Some(Uuid::new_v4());
        let inventory = vec![pantry_item("onion", 3.0, "count")];
        assert!(find_inventory_match(&l, &inventory).is_some());
    }

    #[test]
    fn units_are_not_converted() {
        // 2 kg asked, 500 g on hand: compared as 2 <= 500.
        let inventory = vec![pantry_item("Flour", 500.0, "g")];
        let r = recipe(1, vec![line("Flour", Some(2.0), Some("kg"))]);
        assert!(is_feasible(&r, &inventory, 1.0));
    }

    #[test]
    fn feasible_recipes_keep_library_order_and_apply_target() {
        let inventory = vec![pantry_item("Rice", 300.0, "g")];
        let small = recipe(1, vec![line("Rice", Some(100.0), Some("g"))]);
        let large = recipe(1, vec![line("Rice", Some(250.0), Some("g"))]);
        let free = recipe(1, vec![line("Water", None, None)]);
        let recipes = vec![small.clone(), large.clone(), free.clone()];

        let ids: Vec<Uuid> = feasible_recipes(&recipes, &inventory, None)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![small.id, large.id, free.id]);

        let ids: Vec<Uuid> = feasible_recipes(&recipes, &inventory, Some(2))
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![small.id, free.id]);
    }

    #[test]
    fn missing_is_empty_exactly_when_feasible() {
        let (inventory, recipes) = seed::sample_kitchen();
        for servings in 1..=8u32 {
            for r in &recipes {
                let feasible = feasible_recipes(&recipes, &inventory, Some(servings))
                    .iter()
                    .any(|f| f.id == r.id);
                let missing = missing_ingredients(r, &inventory, f64::from(servings));
                assert_eq!(feasible, missing.is_empty(), "servings = {servings}");
            }
        }
    }
}
