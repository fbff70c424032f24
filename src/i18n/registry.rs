//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is built once on first access and is read-only afterwards, so
//! it can be shared freely between concurrent pipeline invocations.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// ISO 639-1 language code (e.g., "en", "hi", "gu")
    pub code: &'static str,

    /// English display name (e.g., "Gujarati")
    pub name: &'static str,

    /// Name of the language in its own script (e.g., "ગુજરાતી")
    pub native_name: &'static str,

    /// BCP 47 locale used for speech recognition (e.g., "gu-IN")
    pub speech_locale: &'static str,

    /// Whether the language is offered to callers
    pub active: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageInfo>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

/// Code of the language every translation targets.
pub const CANONICAL_CODE: &str = "en";

/// Speech locale used when a code is unknown.
const FALLBACK_SPEECH_LOCALE: &str = "en-US";

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language by its code, whether or not it is active.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageInfo> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Whether `code` is a key of the registry.
    ///
    /// Inactive languages are still "supported": they are known to the
    /// pipeline but not offered to callers.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All active languages, in registry order.
    pub fn list_active(&self) -> Vec<&LanguageInfo> {
        self.languages.iter().filter(|lang| lang.active).collect()
    }

    /// All languages, including inactive ones.
    pub fn list_all(&self) -> Vec<&LanguageInfo> {
        self.languages.iter().collect()
    }

    /// The canonical (target) language, English.
    pub fn canonical(&self) -> &LanguageInfo {
        // English is always present.
        self.get_by_code(CANONICAL_CODE)
            .unwrap_or(&self.languages[0])
    }

    /// Metadata for `code`, or English if the code is unknown.
    pub fn language_info(&self, code: &str) -> &LanguageInfo {
        self.get_by_code(code).unwrap_or_else(|| self.canonical())
    }

    /// Speech recognition locale for `code`, defaulting to `en-US`.
    pub fn speech_locale(&self, code: &str) -> &'static str {
        self.get_by_code(code)
            .map(|lang| lang.speech_locale)
            .unwrap_or(FALLBACK_SPEECH_LOCALE)
    }

    /// Active languages keyed by code.
    pub fn supported_languages(&self) -> BTreeMap<&'static str, LanguageInfo> {
        self.list_active()
            .into_iter()
            .map(|lang| (lang.code, lang.clone()))
            .collect()
    }
}

/// Read-only view of every language offered to callers.
pub fn get_supported_languages() -> BTreeMap<&'static str, LanguageInfo> {
    LanguageRegistry::get().supported_languages()
}

/// English plus eleven Indian languages.
fn default_languages() -> Vec<LanguageInfo> {
    const fn lang(
        code: &'static str,
        name: &'static str,
        native_name: &'static str,
        speech_locale: &'static str,
    ) -> LanguageInfo {
        LanguageInfo {
            code,
            name,
            native_name,
            speech_locale,
            active: true,
        }
    }

    vec![
        lang("en", "English", "English", "en-US"),
        lang("hi", "Hindi", "हिंदी", "hi-IN"),
        lang("mr", "Marathi", "मराठी", "mr-IN"),
        lang("ta", "Tamil", "தமிழ்", "ta-IN"),
        lang("te", "Telugu", "తెలుగు", "te-IN"),
        lang("bn", "Bengali", "বাংলা", "bn-IN"),
        lang("kn", "Kannada", "ಕನ್ನಡ", "kn-IN"),
        lang("gu", "Gujarati", "ગુજરાતી", "gu-IN"),
        lang("ml", "Malayalam", "മലയാളം", "ml-IN"),
        lang("pa", "Punjabi", "ਪੰਜਾਬੀ", "pa-IN"),
        lang("or", "Odia", "ଓଡ଼ିଆ", "or-IN"),
        lang("as", "Assamese", "অসমীয়া", "as-IN"),
    ]
}
