//! Tests for highlight/option_text

use super::*;

fn segment(text: &str, user_value: bool) -> OptionSegment {
    OptionSegment {
        text: text.to_string(),
        user_value,
    }
}

#[test]
fn test_search_words_split_on_whitespace() {
    assert_eq!(search_words_from_input("  app  pie "), vec!["app", "pie"]);
}

#[test]
fn test_search_words_are_escaped() {
    assert_eq!(search_words_from_input("c++"), vec![r"c\+\+"]);
}

#[test]
fn test_search_words_empty_input() {
    assert!(search_words_from_input("   ").is_empty());
}

#[test]
fn test_typed_prefix_is_user_value() {
    let result = option_segments("Apple Pie", "app", false);
    assert_eq!(result, vec![segment("App", true), segment("le Pie", false)]);
}

#[test]
fn test_multiple_terms_highlight_separately() {
    let result = option_segments("Apple Pie", "app pie", false);
    assert_eq!(
        result,
        vec![
            segment("App", true),
            segment("le ", false),
            segment("Pie", true)
        ]
    );
}

#[test]
fn test_metacharacters_in_typed_value_match_literally() {
    let result = option_segments("C++ (lang)", "++ (", false);
    assert_eq!(
        result,
        vec![
            segment("C", false),
            segment("++", true),
            segment(" ", false),
            segment("(", true),
            segment("lang)", false)
        ]
    );
}

#[test]
fn test_empty_typed_value_is_all_suggested() {
    let result = option_segments("Banana", "", false);
    assert_eq!(result, vec![segment("Banana", false)]);
}

#[test]
fn test_case_sensitive_option_segments() {
    let result = option_segments("Apple", "app", true);
    assert_eq!(result, vec![segment("Apple", false)]);
}

#[test]
fn test_empty_label_yields_nothing() {
    assert!(option_segments("", "app", false).is_empty());
}
