mod http;
mod prompt;
mod request;

pub use http::{extract_text, HttpModelClient};
pub use prompt::{build_extraction_prompt, INGREDIENT_EXTRACTION_PROMPT};
pub use request::{PayloadKey, RequestStyle, StyleKind, TargetUrl};

use crate::error::ModelError;

/// A remote text generator that extraction can delegate to
pub trait ModelClient {
    /// Whether the client has what it needs to make a call
    fn configured(&self) -> bool;

    /// Send a prompt and return the generated text
    fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
