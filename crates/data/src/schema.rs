use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use janken_core::GameConfig;

/// Key to display text for a single locale.
pub type StringTable = BTreeMap<String, String>;

/// Locale code to its string table.
pub type LocaleTable = BTreeMap<String, StringTable>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleManifest {
    pub default_locale: String,
    /// Locale code to the language's own name.
    pub languages: BTreeMap<String, String>,
}
