mod heuristic;
mod llm;

pub use self::heuristic::extract_ingredients_from_text;
pub use self::llm::{extract_with_model, parse_ingredient_array};

use log::{info, warn};

use crate::providers::ModelClient;

/// Extract ingredient names from free-form text.
///
/// A configured `client` is asked first. Any failure on that path (transport,
/// HTTP status, missing or malformed JSON array) is logged and the local
/// heuristic answers instead, so this never fails.
pub fn extract_ingredients(text: &str, client: Option<&dyn ModelClient>) -> Vec<String> {
    if let Some(client) = client.filter(|c| c.configured()) {
        match extract_with_model(text, client) {
            Ok(ingredients) => {
                info!("Extracted {} ingredients with the model", ingredients.len());
                return ingredients;
            }
            Err(e) => warn!("Model extraction failed, using local heuristic: {}", e),
        }
    }

    extract_ingredients_from_text(text)
}
