/// The instruction sent to the model before the user's text.
///
/// Loaded from `prompt.txt` at compile time so it can be edited without
/// touching Rust string syntax.
pub const INGREDIENT_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");

/// Build the full prompt asking the model for a JSON array of ingredients.
pub fn build_extraction_prompt(text: &str) -> String {
    format!("{}\n\nText:\n{}", INGREDIENT_EXTRACTION_PROMPT, text)
}
