use crate::corrections::{self, GUJARATI_PRE_CORRECTIONS};
use crate::i18n::ScriptGroup;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static DANDA_REGEX: OnceLock<Regex> = OnceLock::new();
static ENGLISH_NOISE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Normalize `text` for the language identified by `code`.
///
/// `code` is taken as-is, so an unknown hint only gets whitespace cleanup.
pub fn preprocess(text: &str, code: &str) -> String {
    let whitespace = WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap());
    let text = whitespace.replace_all(text.trim(), " ").into_owned();

    match ScriptGroup::of(code) {
        ScriptGroup::Indic => {
            let danda = DANDA_REGEX.get_or_init(|| Regex::new(r"[।॥]").unwrap());
            let text = danda.replace_all(&text, ".").into_owned();

            if code == "gu" {
                let (corrected, applied) = corrections::apply(&text, GUJARATI_PRE_CORRECTIONS);
                for phrase in applied {
                    info!("Applied Gujarati source correction for '{}'", phrase);
                }
                corrected
            } else {
                text
            }
        }
        // Left untouched until per-script rules exist.
        ScriptGroup::Dravidian => text,
        ScriptGroup::Latin => {
            let noise =
                ENGLISH_NOISE_REGEX.get_or_init(|| Regex::new(r"[^\w\s.,!?-]").unwrap());
            noise.replace_all(&text, "").into_owned()
        }
        ScriptGroup::Other => text,
    }
}
