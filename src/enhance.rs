use crate::corrections::{self, GUJARATI_POST_CORRECTIONS};
use tracing::info;

/// Sentence terminators accepted at the end of an enhanced translation.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Replacement text used when a translation is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alternative {
    /// A known phrase matched the source text
    LiteralMapping(&'static str),
    /// Generic text naming the source language
    Placeholder(String),
}

impl Alternative {
    pub fn text(&self) -> &str {
        match self {
            Alternative::LiteralMapping(text) => text,
            Alternative::Placeholder(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Alternative::LiteralMapping(text) => text.to_string(),
            Alternative::Placeholder(text) => text,
        }
    }
}

/// Non-empty stand-in for a rejected translation of `text`.
pub fn get_alternative(text: &str, source: &str) -> Alternative {
    if source == "gu" {
        if let Some((phrase, english)) = corrections::gujarati_phrase(text) {
            info!("Using Gujarati fallback mapping for '{}'", phrase);
            return Alternative::LiteralMapping(english);
        }
    }

    Alternative::Placeholder(format!("Text in {} language", source))
}

/// Clean up an accepted translation for the grammar pipeline.
///
/// Output always ends in `.`, `!` or `?`. Empty or near-empty translations
/// are replaced by `original`.
pub fn enhance(original: &str, translated: &str, source: &str) -> String {
    let trimmed = translated.trim();
    if trimmed.chars().count() < 2 {
        return original.to_string();
    }

    let mut cleaned = if source == "gu" {
        let (corrected, applied) = corrections::apply(trimmed, GUJARATI_POST_CORRECTIONS);
        for token in applied {
            info!("Applied Gujarati post-correction for '{}'", token);
        }
        corrected
    } else {
        trimmed.to_string()
    };

    if !cleaned.ends_with(&TERMINATORS[..]) {
        cleaned.push('.');
    }
    cleaned
}
