//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, HighlightConfig};
use crate::highlight::{FindAllOptions, find_all};

#[derive(Debug, Parser)]
#[command(name = "combobox", version, about = "Interactive combobox with match highlighting")]
pub struct Args {
    /// Items to choose from: a JSON array of strings (.json) or one per line
    #[arg(long, value_name = "FILE")]
    pub items: Option<PathBuf>,

    /// Config file to use instead of ~/.config/combobox/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Open the list when the input gains focus
    #[arg(long)]
    pub open_on_focus: bool,

    /// Don't show the highlighted option in the input while navigating
    #[arg(long)]
    pub no_autocomplete: bool,

    /// Highlight the current value when the list opens
    #[arg(long)]
    pub persist_selection: bool,

    /// Select all input text on the first click after focusing
    #[arg(long)]
    pub select_on_click: bool,

    /// Match search words case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Print the chunks of TEXT matching the words of QUERY and exit
    #[arg(long, num_args = 2, value_names = ["QUERY", "TEXT"])]
    pub highlight: Option<Vec<String>>,
}

impl Args {
    /// Layers the command-line flags over `config`
    pub fn apply_to(&self, config: &mut Config) {
        if self.open_on_focus {
            config.combobox.open_on_focus = true;
        }
        if self.no_autocomplete {
            config.combobox.autocomplete = false;
        }
        if self.persist_selection {
            config.combobox.persist_selection = true;
        }
        if self.select_on_click {
            config.combobox.select_on_click = true;
        }
        if self.case_sensitive {
            config.highlight.case_sensitive = true;
        }
    }
}

/// One line per chunk of `text`: byte range, kind and the chunk text.
///
/// ```text
/// 0..6    plain  "hello "
/// 6..9    match  "wor"
/// ```
pub fn format_highlight(query: &str, text: &str, config: &HighlightConfig) -> String {
    let words: Vec<&str> = query.split_whitespace().collect();
    let options = FindAllOptions::new()
        .with_auto_escape(config.auto_escape)
        .with_case_sensitive(config.case_sensitive);

    find_all(&words, text, &options)
        .into_iter()
        .map(|chunk| {
            let kind = if chunk.highlight { "match" } else { "plain" };
            let range = format!("{}..{}", chunk.start, chunk.end);
            let chunk_text = chunk.slice(text).unwrap_or_default();
            format!("{range:<8}{kind:<7}{chunk_text:?}\n")
        })
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
