use log::debug;

use crate::model::{Recipe, SAMPLE_RECIPES};

/// Default number of results returned by [`search_recipes`]
pub const DEFAULT_TOP_N: usize = 5;

const TITLE_WEIGHT: u32 = 3;
const INSTRUCTIONS_WEIGHT: u32 = 2;
const INGREDIENT_WEIGHT: u32 = 1;

/// A recipe paired with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecipe {
    pub score: u32,
    pub recipe: &'static Recipe,
}

/// Score a recipe against an already lower-cased query.
///
/// Title hits are worth 3, instruction hits 2, and every ingredient that
/// contains the query adds 1.
pub fn score_recipe(recipe: &Recipe, folded_query: &str) -> u32 {
    let mut score = 0;
    if recipe.title.to_lowercase().contains(folded_query) {
        score += TITLE_WEIGHT;
    }
    if recipe.instructions.to_lowercase().contains(folded_query) {
        score += INSTRUCTIONS_WEIGHT;
    }
    for ingredient in recipe.ingredients {
        if ingredient.to_lowercase().contains(folded_query) {
            score += INGREDIENT_WEIGHT;
        }
    }
    score
}

/// Rank the sample dataset against `query`, best match first.
///
/// Recipes scoring zero are dropped. Ties keep dataset order. An empty query
/// matches everything.
pub fn search_recipes(query: &str, top_n: usize) -> Vec<&'static Recipe> {
    let folded = query.to_lowercase();

    let mut scored: Vec<ScoredRecipe> = SAMPLE_RECIPES
        .iter()
        .map(|recipe| ScoredRecipe {
            score: score_recipe(recipe, &folded),
            recipe,
        })
        .filter(|scored| scored.score > 0)
        .collect();

    // sort_by is stable, so equal scores stay in dataset order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    debug!("Query {:?} matched {} recipes", query, scored.len());

    scored
        .into_iter()
        .take(top_n)
        .map(|scored| scored.recipe)
        .collect()
}
