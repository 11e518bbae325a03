//! Option label segmentation
//!
//! An option's label is shown with the parts the user typed set apart from
//! the suggested remainder.

use super::matcher::{escape_search_word, find_all, FindAllOptions};

/// A run of an option label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSegment {
    pub text: String,
    /// True when this run matches what the user typed; false for suggested text
    pub user_value: bool,
}

/// Splits typed input into escaped search words, one per whitespace-separated term
pub fn search_words_from_input(value: &str) -> Vec<String> {
    value.split_whitespace().map(escape_search_word).collect()
}

/// Segments `option_value` by the words of `typed_value`.
///
/// An empty label yields no segments.
pub fn option_segments(
    option_value: &str,
    typed_value: &str,
    case_sensitive: bool,
) -> Vec<OptionSegment> {
    let words = search_words_from_input(typed_value);
    let options = FindAllOptions::new().with_case_sensitive(case_sensitive);

    find_all(&words, option_value, &options)
        .into_iter()
        .filter_map(|chunk| {
            chunk.slice(option_value).map(|text| OptionSegment {
                text: text.to_string(),
                user_value: chunk.highlight,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "option_text_tests.rs"]
mod option_text_tests;
