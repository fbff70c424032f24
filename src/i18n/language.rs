//! Language type: validated language handle and script grouping.
//!
//! A `Language` can only be built from a code present in the registry.

use crate::error::CapabilityError;
use crate::i18n::{LanguageInfo, LanguageRegistry};

/// A language validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "gu")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const HINDI: Language = Language { code: "hi" };
    pub const GUJARATI: Language = Language { code: "gu" };

    /// Create a Language from a code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is a registry key
    /// * `Err(CapabilityError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, CapabilityError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|info| Language { code: info.code })
            .ok_or_else(|| CapabilityError::UnsupportedLanguage(code.to_string()))
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry metadata for this language.
    pub fn info(&self) -> &'static LanguageInfo {
        LanguageRegistry::get().language_info(self.code)
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Whether this is the language every translation targets.
    pub fn is_english(&self) -> bool {
        self.code == Language::ENGLISH.code
    }

    /// Script family of this language.
    pub fn script_group(&self) -> ScriptGroup {
        ScriptGroup::of(self.code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

/// Script family used to pick preprocessing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptGroup {
    /// Devanagari and related North Indian scripts that share the danda
    /// sentence terminators.
    Indic,
    /// South Indian scripts.
    Dravidian,
    /// English.
    Latin,
    /// Anything else, including codes the registry does not know.
    Other,
}

impl ScriptGroup {
    /// Classify a language code; codes outside the registry are `Other`.
    pub fn of(code: &str) -> ScriptGroup {
        match code {
            "hi" | "mr" | "bn" | "gu" | "pa" | "or" | "as" => ScriptGroup::Indic,
            "ta" | "te" | "kn" | "ml" => ScriptGroup::Dravidian,
            "en" => ScriptGroup::Latin,
            _ => ScriptGroup::Other,
        }
    }
}
