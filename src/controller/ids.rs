use crate::machine::InteractionState;

/// What descendants of a combobox can read about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxContext {
    pub id: String,
    pub is_expanded: bool,
    pub navigation_value: Option<String>,
    pub state: InteractionState,
}

/// Joins id parts with `--`
pub fn make_id(prefix: &str, id: &str) -> String {
    format!("{}--{}", prefix, id)
}

/// Non-cryptographic 32-bit string hash over UTF-16 code units.
///
/// Used for option ids instead of indices so an id does not move when the
/// list changes under the cursor.
pub fn make_hash(value: &str) -> i32 {
    value.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}
