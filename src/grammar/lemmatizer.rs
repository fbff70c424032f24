//! Reduction of inflected words to their dictionary form.

use super::lexicon::{
    self, adjective_stem, contains, irregular_adjective, irregular_plural, irregular_verb, undouble,
    BASE_VERBS, NOUNS,
};
use crate::error::CapabilityError;

/// Which part-of-speech rules to apply when reducing a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmaRule {
    Verb,
    Adjective,
    Noun,
}

/// External lemmatization capability.
pub trait Lemmatizer: Send + Sync {
    /// Dictionary form of the lowercase `word` under `rule`.
    fn lemmatize(&self, word: &str, rule: LemmaRule) -> Result<String, CapabilityError>;
}

/// Suffix substitutions tried for verbs, validated against the lexicon.
const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("s", ""),
    ("ied", "y"),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("s", ""),
];

/// Lexicon-backed lemmatizer.
///
/// Verb and adjective forms are only reduced to a base the lexicon knows;
/// anything else comes back unchanged. Unknown plural nouns still lose a
/// regular plural suffix.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    fn verb(word: &str) -> String {
        if let Some((base, ..)) = irregular_verb(word) {
            return base.to_string();
        }
        if lexicon::is_known_base(word) {
            return word.to_string();
        }

        for (suffix, replacement) in VERB_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{}{}", stem, replacement);
                if contains(BASE_VERBS, &candidate) {
                    return candidate;
                }
                if replacement.is_empty() && (*suffix == "ing" || *suffix == "ed") {
                    if let Some(single) = undouble(stem) {
                        if contains(BASE_VERBS, single) {
                            return single.to_string();
                        }
                    }
                }
            }
        }

        // No dictionary base: the word is its own lemma ("speed", "pudding").
        word.to_string()
    }

    fn noun(word: &str) -> String {
        if let Some(base) = irregular_plural(word) {
            return base.to_string();
        }
        if lexicon::is_known_base(word) {
            return word.to_string();
        }

        for (suffix, replacement) in NOUN_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let candidate = format!("{}{}", stem, replacement);
                if !stem.is_empty() && contains(NOUNS, &candidate) {
                    return candidate;
                }
            }
        }

        Self::strip_plural_suffix(word)
    }

    /// "cities" -> "city", "boxes" -> "box", "cars" -> "car"; "glass",
    /// "bus" and "this" stay.
    fn strip_plural_suffix(word: &str) -> String {
        if word.chars().count() <= 3 {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        for sibilant in ["sses", "shes", "ches", "xes", "zes"] {
            if word.ends_with(sibilant) {
                return word[..word.len() - 2].to_string();
            }
        }
        if word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return word[..word.len() - 1].to_string();
        }
        word.to_string()
    }

    fn adjective(word: &str) -> String {
        if let Some((base, _)) = irregular_adjective(word) {
            return base.to_string();
        }
        if lexicon::is_known_base(word) {
            return word.to_string();
        }
        adjective_stem(word)
            .map(|(base, _)| base)
            .unwrap_or_else(|| word.to_string())
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str, rule: LemmaRule) -> Result<String, CapabilityError> {
        if word.is_empty() {
            return Err(CapabilityError::Lemmatization {
                word: word.to_string(),
                reason: "empty word".to_string(),
            });
        }

        Ok(match rule {
            LemmaRule::Verb => Self::verb(word),
            LemmaRule::Noun => Self::noun(word),
            LemmaRule::Adjective => Self::adjective(word),
        })
    }
}
