use serde::Serialize;

/// A recipe from the built-in sample dataset.
///
/// Ingredients keep the order and casing they were authored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static str,
}

/// The fixed dataset searched by [`crate::search_recipes`] and scanned for
/// known ingredient names during extraction.
pub const SAMPLE_RECIPES: &[Recipe] = &[
    Recipe {
        title: "Simple Pancakes",
        ingredients: &["flour", "milk", "egg", "baking powder", "salt", "butter"],
        instructions: "Mix dry ingredients, add milk and egg, cook on skillet.",
    },
    Recipe {
        title: "Tomato Pasta",
        ingredients: &["pasta", "tomato", "garlic", "olive oil", "basil", "salt"],
        instructions: "Cook pasta, prepare sauce with tomato and garlic, toss together.",
    },
    Recipe {
        title: "Avocado Toast",
        ingredients: &["bread", "avocado", "salt", "pepper", "lemon"],
        instructions: "Toast bread, smash avocado, season, and serve.",
    },
];

/// Every ingredient name in the dataset, in dataset order, repeats included.
pub fn known_ingredients() -> impl Iterator<Item = &'static str> {
    SAMPLE_RECIPES
        .iter()
        .flat_map(|recipe| recipe.ingredients.iter().copied())
}
