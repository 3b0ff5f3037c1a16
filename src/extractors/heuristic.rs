use std::collections::BTreeSet;
use std::sync::LazyLock;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::model::known_ingredients;

const MAX_CANDIDATE_WORDS: usize = 4;

// "2 cups flour", "- 1 tsp salt", "basil": optional quantity, alphabetic tail
static INGREDIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\d+\s*[\w/.-]*)?\s*([A-Za-z][A-Za-z \-]+)$")
        .expect("ingredient line pattern is valid")
});

// one whole-word, case-insensitive pattern per dataset ingredient name
static KNOWN_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    known_ingredients()
        .map(|name| {
            let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(name)))
                .case_insensitive(true)
                .build()
                .expect("escaped ingredient name is a valid pattern");
            (name, pattern)
        })
        .collect()
});

static LINE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|;|,").expect("line separator pattern is valid"));

/// Guess ingredient names from free-form text without a model.
///
/// The text is split on newlines, semicolons and commas. Each trimmed piece
/// whose alphabetic tail is 2+ characters and at most four words becomes a
/// lower-cased candidate. Dataset ingredient names found anywhere in the text
/// as whole words are added as well. The result is sorted and deduplicated.
pub fn extract_ingredients_from_text(text: &str) -> Vec<String> {
    let mut found: BTreeSet<String> = line_candidates(text).collect();
    found.extend(known_in_text(text));

    debug!("Heuristic extraction found {} ingredients", found.len());
    found.into_iter().collect()
}

fn line_candidates(text: &str) -> impl Iterator<Item = String> + '_ {
    LINE_SEPARATOR.split(text).filter_map(|line| {
        let captures = INGREDIENT_LINE.captures(line.trim())?;
        let tail = captures.get(1)?.as_str().trim();
        if tail.chars().count() > 1 && tail.split_whitespace().count() <= MAX_CANDIDATE_WORDS {
            Some(tail.to_lowercase())
        } else {
            None
        }
    })
}

/// Dataset ingredient names that occur in `text` as whole words, ignoring case.
/// Names are returned with their dataset casing.
fn known_in_text(text: &str) -> BTreeSet<String> {
    KNOWN_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| name.to_string())
        .collect()
}
