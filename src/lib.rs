//! Search a small built-in recipe dataset and pull ingredient names out of
//! free-form text, optionally with help from a remote text-generation model.

pub mod config;
pub mod console;
pub mod error;
pub mod extractors;
pub mod model;
pub mod providers;
pub mod search;

pub use config::ModelConfig;
pub use console::Console;
pub use error::{ExtractionError, ModelError};
pub use extractors::{extract_ingredients, extract_ingredients_from_text};
pub use model::{Recipe, SAMPLE_RECIPES};
pub use providers::{HttpModelClient, ModelClient, RequestStyle};
pub use search::{search_recipes, ScoredRecipe, DEFAULT_TOP_N};
