//! Option filtering
//!
//! Narrows the item list to what the user typed, best matches first.

use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

pub struct OptionFilter {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for OptionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionFilter").finish_non_exhaustive()
    }
}

impl Default for OptionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionFilter {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Indices of `items` matching `query`, best first.
    ///
    /// Every whitespace-separated term must match. A blank query keeps all
    /// items in their original order.
    pub fn filter(&self, query: &str, items: &[String]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..items.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| {
                let mut total_score: i64 = 0;
                for term in &terms {
                    total_score += self.matcher.fuzzy_match(item, term)?;
                }
                Some((idx, total_score))
            })
            .collect();

        // Stable, so equal scores keep list order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
