use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde_json::Value;

use crate::error::ExtractionError;
use crate::providers::{build_extraction_prompt, ModelClient};

// greedy: from the first '[' to the last ']'
static JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("JSON array pattern is valid"));

/// Ask the model for the ingredients in `text`.
///
/// Returns the model's list lower-cased and in the model's order.
pub fn extract_with_model(
    text: &str,
    client: &dyn ModelClient,
) -> Result<Vec<String>, ExtractionError> {
    let response = client.generate(&build_extraction_prompt(text))?;
    debug!("Model response: {:?}", response);
    parse_ingredient_array(&response)
}

/// Find the bracketed span in a model reply and read it as a JSON list.
pub fn parse_ingredient_array(response: &str) -> Result<Vec<String>, ExtractionError> {
    let span = JSON_ARRAY
        .find(response)
        .ok_or(ExtractionError::NoJsonArray)?;

    match serde_json::from_str::<Value>(span.as_str())? {
        Value::Array(items) => Ok(items
            .iter()
            .map(|item| match item {
                Value::String(name) => name.to_lowercase(),
                Value::Null => "none".to_string(),
                other => other.to_string().to_lowercase(),
            })
            .collect()),
        _ => Err(ExtractionError::NotAList),
    }
}
