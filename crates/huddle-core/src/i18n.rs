//! Locale support for the bilingual (English/Arabic) interface.

use serde::{Deserialize, Serialize};

/// Interface language selected by the user.
///
/// Flows receive their locale explicitly at construction and keep it until
/// `set_locale` is called on them; there is no process-global language state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (left-to-right).
    En,
    /// Arabic (right-to-left).
    Ar,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl Locale {
    /// Language tag used in the config file and IPC payloads.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Parses a language tag. Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }

    /// Picks one side of a bilingual string pair.
    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Locale::En => en,
            Locale::Ar => ar,
        }
    }
}
