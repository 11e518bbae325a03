// Configuration type definitions

use serde::Deserialize;

/// Combobox behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    /// Open the list as soon as the input gains focus
    pub open_on_focus: bool,
    /// Show the highlighted option in the input while navigating, and cycle
    /// back to the typed value past either end of the list
    pub autocomplete: bool,
    /// Re-highlight the current value when the list reopens
    pub persist_selection: bool,
    /// Select the whole input text on the first click after focus
    pub select_on_click: bool,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        ComboboxConfig {
            open_on_focus: false,
            autocomplete: true,
            persist_selection: false,
            select_on_click: false,
        }
    }
}

/// Match highlighting section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub case_sensitive: bool,
    /// Treat search words literally instead of as patterns
    pub auto_escape: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            case_sensitive: false,
            auto_escape: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub combobox: ComboboxConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}
