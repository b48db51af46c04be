//! crates/recipe_assistant_core/src/scaling.rs

use crate::domain::{Recipe, ScaledIngredient, ScaledRecipe};

/// Scales every quantified ingredient linearly by `target_servings / base_servings`.
/// A zero amount counts as unquantified and stays `None`, like an absent one.
///
/// No rounding happens here. Zero or negative targets produce degenerate
/// amounts; rejecting them is up to the caller.
pub fn scale_ingredients(recipe: &Recipe, target_servings: f64) -> Vec<ScaledIngredient> {
    let factor = target_servings / f64::from(recipe.base_servings);

    recipe
        .ingredients
        .iter()
        .map(|line| ScaledIngredient {
            ingredient_name: line.ingredient_name.clone(),
            scaled_amount: line
                .amount_value
                .filter(|amount| *amount > 0.0)
                .map(|amount| amount * factor),
            amount_unit: line.amount_unit.clone(),
            notes: line.notes.clone(),
        })
        .collect()
}

pub fn scale_recipe(recipe: &Recipe, target_servings: u32) -> ScaledRecipe {
    ScaledRecipe {
        recipe_id: recipe.id,
        title: recipe.title.clone(),
        target_servings,
        ingredients: scale_ingredients(recipe, f64::from(target_servings)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;

    #[test]
    fn base_servings_reproduce_amounts_exactly() {
        let (_, recipes) = seed::sample_kitchen();
        let bolognese = &recipes[0];
        let scaled = scale_ingredients(bolognese, f64::from(bolognese.base_servings));

        for (line, scaled) in bolognese.ingredients.iter().zip(&scaled) {
            assert_eq!(line.amount_value, scaled.scaled_amount);
            assert_eq!(line.amount_unit, scaled.amount_unit);
        }
    }

    #[test]
    fn halving_bolognese() {
        let (_, recipes) = seed::sample_kitchen();
        let scaled = scale_recipe(&recipes[0], 2);
        assert_eq!(scaled.target_servings, 2);
        assert_eq!(scaled.ingredients[1].ingredient_name, "Ground Beef");
        assert_eq!(scaled.ingredients[1].scaled_amount, Some(250.0));
    }

    #[test]
    fn to_taste_stays_unscaled() {
        let (_, recipes) = seed::sample_kitchen();
        let mut recipe = recipes[0].clone();
        recipe.ingredients[0].amount_value = None;
        recipe.ingredients[1].amount_value = Some(0.0);
        let scaled = scale_ingredients(&recipe, 8.0);
        assert_eq!(scaled[0].scaled_amount, None);
        assert_eq!(scaled[1].scaled_amount, None);
        assert_eq!(scaled[2].scaled_amount, Some(4.0));
    }

    #[test]
    fn zero_target_is_degenerate_not_an_error() {
        let (_, recipes) = seed::sample_kitchen();
        let scaled = scale_ingredients(&recipes[0], 0.0);
        assert!(scaled.iter().all(|s| s.scaled_amount == Some(0.0)));
    }

    proptest! {
        #[test]
        fn scaling_is_linear(amount in 0.001f64..10_000.0, base in 1u32..50, target in 1u32..50) {
            let (_, recipes) = seed::sample_kitchen();
            let mut recipe = recipes[0].clone();
            recipe.base_servings = base;
            recipe.ingredients[0].amount_value = Some(amount);

            let at_base = scale_ingredients(&recipe, f64::from(base))[0].scaled_amount.unwrap();
            let at_target = scale_ingredients(&recipe, f64::from(target))[0].scaled_amount.unwrap();
            let expected = at_base * (f64::from(target) / f64::from(base));

            prop_assert!((at_target - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
