//! English grammar normalization.
//!
//! Turns an English sentence into the ordered gloss tokens an animation
//! player consumes: an optional tense marker, then one lemma per content word.
//! Lemmas without an animation clip are spelled out letter by letter.

mod lexicon;
pub mod lemmatizer;
pub mod stopwords;
pub mod tagger;
pub mod tags;
pub mod tense;

pub use lemmatizer::{LemmaRule, Lemmatizer, RuleLemmatizer};
pub use stopwords::is_stop_word;
pub use tagger::{PosTagger, RuleTagger};
pub use tags::PosTag;
pub use tense::{Tense, TenseCounts, TenseMarker};

use crate::assets::{asset_file_name, AssetLibrary};
use crate::error::CapabilityError;
use crate::i18n::PipelineMetrics;
use std::sync::Arc;
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

/// Gloss token for the first-person pronoun.
pub const FIRST_PERSON_GLOSS: &str = "Me";

/// Lowercase `text` and split it into purely alphabetic word tokens.
///
/// Contractions are split the usual way ("don't" -> "do" + "n't",
/// "it's" -> "it" + "'s", "cannot" -> "can" + "not") before
/// non-alphabetic pieces are dropped. A word survives only if each of its
/// grapheme clusters is a single letter, so words carrying combining marks
/// ("मैं") are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_word_bounds()
        .flat_map(split_contraction)
        .filter(|t| is_plain_word(t))
        .map(str::to_string)
        .collect()
}

fn is_plain_word(word: &str) -> bool {
    !word.is_empty()
        && word.graphemes(true).all(|g| {
            let mut chars = g.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
        })
}

fn split_contraction(word: &str) -> Vec<&str> {
    if word == "cannot" {
        return vec![&word[..3], &word[3..]];
    }

    let Some(pos) = word.find(&['\'', '\u{2019}'][..]) else {
        return vec![word];
    };

    let apostrophe_len = word[pos..].chars().next().map_or(1, char::len_utf8);
    let negation = word[..pos].ends_with('n') && &word[pos + apostrophe_len..] == "t";
    let split = if negation && pos > 1 { pos - 1 } else { pos };
    vec![&word[..split], &word[split..]]
}

/// Expand every token without a clip into its characters.
pub fn resolve_assets(tokens: &[String], assets: &dyn AssetLibrary) -> Vec<String> {
    let mut resolved = Vec::with_capacity(tokens.len());
    for token in tokens {
        if assets.exists(&asset_file_name(token)) {
            resolved.push(token.clone());
        } else {
            debug!("No animation for '{}', spelling it out", token);
            resolved.extend(token.graphemes(true).map(String::from));
        }
    }
    resolved
}

/// Character tokens for `text`, used when the grammar pipeline fails.
///
/// Splits on grapheme clusters so combining marks stay on their base letter.
pub fn spell_out(text: &str) -> Vec<String> {
    text.to_lowercase()
        .graphemes(true)
        .filter(|g| g.chars().next().is_some_and(char::is_alphanumeric))
        .map(String::from)
        .collect()
}

/// Intermediate results of one grammar run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub words: Vec<String>,
    pub tags: Vec<PosTag>,
    pub counts: TenseCounts,
    /// Marker actually prepended to the gloss
    pub marker: Option<TenseMarker>,
    /// Marker (if any) followed by the content lemmas, before asset lookup
    pub gloss: Vec<String>,
}

/// Result of [`GrammarNormalizer::normalize_or_spell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    Normalized(Vec<String>),
    /// The grammar pipeline failed and the input was spelled out instead
    SpelledOut { tokens: Vec<String>, error: String },
}

impl Normalization {
    pub fn tokens(&self) -> &[String] {
        match self {
            Normalization::Normalized(tokens) => tokens,
            Normalization::SpelledOut { tokens, .. } => tokens,
        }
    }

    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Normalization::Normalized(tokens) => tokens,
            Normalization::SpelledOut { tokens, .. } => tokens,
        }
    }

    pub fn is_spelled_out(&self) -> bool {
        matches!(self, Normalization::SpelledOut { .. })
    }
}

/// English text to gloss tokens, over pluggable tagging and lemmatization.
#[derive(Clone)]
pub struct GrammarNormalizer {
    tagger: Arc<dyn PosTagger>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Default for GrammarNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(RuleTagger), Arc::new(RuleLemmatizer))
    }
}

impl GrammarNormalizer {
    pub fn new(tagger: Arc<dyn PosTagger>, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        Self { tagger, lemmatizer }
    }

    fn lemma_rule(tag: PosTag) -> LemmaRule {
        match tag {
            PosTag::Gerund
            | PosTag::PastTense
            | PosTag::PastParticiple
            | PosTag::VerbThirdSingular
            | PosTag::Noun => LemmaRule::Verb,
            PosTag::Adjective
            | PosTag::Comparative
            | PosTag::Superlative
            | PosTag::AdverbComparative
            | PosTag::AdverbSuperlative => LemmaRule::Adjective,
            _ => LemmaRule::Noun,
        }
    }

    /// Run tagging, tense classification and lemmatization over `text`.
    pub fn analyze(&self, text: &str) -> Result<Analysis, CapabilityError> {
        let words = tokenize(text);
        let tags = self.tagger.tag(&words)?;
        if tags.len() != words.len() {
            return Err(CapabilityError::Tagging(format!(
                "tagger returned {} tags for {} words",
                tags.len(),
                words.len()
            )));
        }

        let counts = TenseCounts::from_tags(&tags);
        let mut content = Vec::with_capacity(words.len());

        for (word, tag) in words.iter().zip(&tags) {
            // Rewritten before stop-word removal: "i" is itself a stop word.
            if word == "i" {
                content.push(FIRST_PERSON_GLOSS.to_string());
                continue;
            }
            if is_stop_word(word) {
                continue;
            }
            if !tagger::is_known_word(word) {
                debug!("'{}' is not in the lexicon, tagged {}", word, tag);
            }

            let lemma = self.lemmatizer.lemmatize(word, Self::lemma_rule(*tag))?;
            if !is_plain_word(&lemma) {
                content.push(word.clone());
            } else {
                content.push(lemma);
            }
        }

        // A lemma already spelling "Will" stands in for the future marker.
        let marker = match counts.marker() {
            Some(TenseMarker::Will) if content.iter().any(|t| t == TenseMarker::Will.token()) => None,
            other => other,
        };
        let mut gloss = Vec::with_capacity(content.len() + 1);
        gloss.extend(marker.map(|m| m.token().to_string()));
        gloss.extend(content);

        debug!(?counts, ?marker, "Analyzed '{}' into {:?}", text, gloss);

        Ok(Analysis {
            words,
            tags,
            counts,
            marker,
            gloss,
        })
    }

    /// Gloss tokens for `text` with clip-less tokens spelled out.
    pub fn normalize(
        &self,
        text: &str,
        assets: &dyn AssetLibrary,
    ) -> Result<Vec<String>, CapabilityError> {
        let analysis = self.analyze(text)?;
        Ok(resolve_assets(&analysis.gloss, assets))
    }

    /// Like [`normalize`](Self::normalize), but a failing tagger or
    /// lemmatizer degrades to spelling out the input.
    pub fn normalize_or_spell(&self, text: &str, assets: &dyn AssetLibrary) -> Normalization {
        match self.normalize(text, assets) {
            Ok(tokens) => Normalization::Normalized(tokens),
            Err(e) => {
                warn!("Grammar normalization failed, spelling out input: {}", e);
                PipelineMetrics::global().record_grammar_fallback();
                Normalization::SpelledOut {
                    tokens: spell_out(text),
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::StaticAssets;
    use proptest::prelude::*;

    fn gloss(text: &str) -> Vec<String> {
        GrammarNormalizer::default()
            .analyze(text)
            .expect("Should analyze")
            .gloss
    }

    fn all_assets() -> StaticAssets {
        StaticAssets::from_tokens([
            "Me", "happy", "Will", "will", "go", "Before", "home", "Now", "to", "school", "food",
            "ready",
        ])
    }

    struct FailingTagger;

    impl PosTagger for FailingTagger {
        fn tag(&self, _words: &[String]) -> Result<Vec<PosTag>, CapabilityError> {
            Err(CapabilityError::Tagging("model not loaded".into()))
        }
    }

    struct ShortTagger;

    impl PosTagger for ShortTagger {
        fn tag(&self, _words: &[String]) -> Result<Vec<PosTag>, CapabilityError> {
            Ok(vec![PosTag::Noun])
        }
    }

    struct FailingLemmatizer;

    impl Lemmatizer for FailingLemmatizer {
        fn lemmatize(&self, word: &str, _rule: LemmaRule) -> Result<String, CapabilityError> {
            Err(CapabilityError::Lemmatization {
                word: word.to_string(),
                reason: "no dictionary".into(),
            })
        }
    }

    struct MarkerLemmatizer;

    impl Lemmatizer for MarkerLemmatizer {
        fn lemmatize(&self, word: &str, rule: LemmaRule) -> Result<String, CapabilityError> {
            if word == "will" {
                return Ok(TenseMarker::Will.token().to_string());
            }
            RuleLemmatizer.lemmatize(word, rule)
        }
    }

    struct DigitLemmatizer;

    impl Lemmatizer for DigitLemmatizer {
        fn lemmatize(&self, _word: &str, _rule: LemmaRule) -> Result<String, CapabilityError> {
            Ok("42".into())
        }
    }

    // ===== Tokenizer =====

    #[test]
    fn test_tokenize_drops_punctuation_and_digits() {
        assert_eq!(tokenize("Hello, World! 42 times."), vec!["hello", "world", "times"]);
    }

    #[test]
    fn test_tokenize_splits_contractions() {
        assert_eq!(tokenize("I don't know"), vec!["i", "do", "know"]);
        assert_eq!(tokenize("It's ready"), vec!["it", "ready"]);
        assert_eq!(tokenize("I can\u{2019}t go"), vec!["i", "ca", "go"]);
    }

    #[test]
    fn test_tokenize_splits_cannot() {
        assert_eq!(tokenize("I cannot go"), vec!["i", "can", "not", "go"]);
        assert_eq!(tokenize("Cannot!"), vec!["can", "not"]);
        assert_eq!(tokenize("cannoting"), vec!["cannoting"]);
    }

    #[test]
    fn test_tokenize_drops_words_with_combining_marks() {
        assert_eq!(tokenize("मैं घर गया."), vec!["घर"]);
        assert_eq!(tokenize("café"), vec!["café"]);
        assert!(tokenize("cafe\u{301}").is_empty());
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ... !!").is_empty());
    }

    // ===== Tense Markers =====

    #[test]
    fn test_present_simple_has_no_marker() {
        assert_eq!(gloss("I am happy"), vec!["Me", "happy"]);
    }

    #[test]
    fn test_future_gets_will() {
        assert_eq!(gloss("I will go"), vec!["Will", "Me", "will", "go"]);
    }

    #[test]
    fn test_cannot_is_future() {
        assert_eq!(gloss("I cannot go"), vec!["Will", "Me", "can", "not", "go"]);
    }

    #[test]
    fn test_suppressed_will_marker_is_not_reported() {
        let analysis = GrammarNormalizer::new(Arc::new(RuleTagger), Arc::new(MarkerLemmatizer))
            .analyze("I will go")
            .expect("Should analyze");
        assert_eq!(analysis.gloss, vec!["Me", "Will", "go"]);
        assert_eq!(analysis.marker, None);
        assert_eq!(analysis.counts.marker(), Some(TenseMarker::Will));
    }

    #[test]
    fn test_unknown_ed_noun_gets_no_marker() {
        assert_eq!(gloss("I need speed"), vec!["Me", "need", "speed"]);
        assert_eq!(gloss("I like the pudding"), vec!["Me", "like", "pudding"]);
    }

    #[test]
    fn test_past_gets_before() {
        assert_eq!(gloss("I went home"), vec!["Before", "Me", "go", "home"]);
    }

    #[test]
    fn test_present_continuous_gets_now() {
        assert_eq!(gloss("I am going to school."), vec!["Now", "Me", "go", "to", "school"]);
    }

    #[test]
    fn test_analysis_exposes_counts() {
        let analysis = GrammarNormalizer::default()
            .analyze("I am going to school")
            .expect("Should analyze");
        assert_eq!(analysis.counts.present, 2);
        assert_eq!(analysis.counts.present_continuous, 1);
        assert_eq!(analysis.marker, Some(TenseMarker::Now));
        assert_eq!(analysis.words.len(), analysis.tags.len());
    }

    // ===== Pronoun Rewrite =====

    #[test]
    fn test_pronoun_rewrite_matches_lowercased_i() {
        // Input is lowercased before tagging, so the rewrite must look for "i";
        // it also runs before stop-word removal, which would drop "i".
        assert_eq!(gloss("i"), vec!["Me"]);
        assert_eq!(gloss("I"), vec!["Me"]);
        assert!(!gloss("I am happy").iter().any(|t| t == "i" || t == "I"));
    }

    #[test]
    fn test_only_standalone_i_is_rewritten() {
        assert_eq!(gloss("India"), vec!["india"]);
    }

    // ===== Stop Words And Lemmas =====

    #[test]
    fn test_stop_words_dropped() {
        assert_eq!(gloss("Food is ready"), vec!["food", "ready"]);
        assert!(gloss("the").is_empty());
    }

    #[test]
    fn test_lemmas() {
        assert_eq!(gloss("The children ran"), vec!["Before", "child", "run"]);
        assert_eq!(gloss("Dogs are running"), vec!["Now", "dog", "run"]);
        assert_eq!(gloss("she likes bigger books"), vec!["she", "like", "big", "book"]);
    }

    #[test]
    fn test_non_alphabetic_lemma_falls_back_to_word() {
        let normalizer =
            GrammarNormalizer::new(Arc::new(RuleTagger), Arc::new(DigitLemmatizer));
        let analysis = normalizer.analyze("happy dogs").expect("Should analyze");
        assert_eq!(analysis.gloss, vec!["happy", "dogs"]);
    }

    // ===== Asset Resolution =====

    #[test]
    fn test_known_tokens_kept_whole() {
        let tokens = GrammarNormalizer::default()
            .normalize("I went home", &all_assets())
            .expect("Should normalize");
        assert_eq!(tokens, vec!["Before", "Me", "go", "home"]);
    }

    #[test]
    fn test_missing_assets_spelled_out() {
        let assets = StaticAssets::from_tokens(["Me"]);
        let tokens = GrammarNormalizer::default()
            .normalize("I am happy", &assets)
            .expect("Should normalize");
        assert_eq!(tokens, vec!["Me", "h", "a", "p", "p", "y"]);
    }

    #[test]
    fn test_devanagari_spelled_out_by_grapheme() {
        let tokens = GrammarNormalizer::default()
            .normalize("मैं घर गया.", &StaticAssets::new())
            .expect("Should normalize");
        assert_eq!(tokens, vec!["घ", "र"]);
        assert_eq!(spell_out("मैं घर!"), vec!["मैं", "घ", "र"]);
    }

    #[test]
    fn test_missing_marker_asset_spelled_out() {
        let assets = StaticAssets::from_tokens(["Me", "go", "home"]);
        let tokens = GrammarNormalizer::default()
            .normalize("I went home", &assets)
            .expect("Should normalize");
        assert_eq!(tokens, vec!["B", "e", "f", "o", "r", "e", "Me", "go", "home"]);
    }

    // ===== Failure Fallback =====

    #[test]
    fn test_tagger_failure_spells_out_input() {
        let normalizer =
            GrammarNormalizer::new(Arc::new(FailingTagger), Arc::new(RuleLemmatizer));
        let result = normalizer.normalize_or_spell("Hi, you!", &all_assets());
        assert!(result.is_spelled_out());
        assert_eq!(result.tokens(), ["h", "i", "y", "o", "u"]);
    }

    #[test]
    fn test_lemmatizer_failure_spells_out_input() {
        let normalizer =
            GrammarNormalizer::new(Arc::new(RuleTagger), Arc::new(FailingLemmatizer));
        match normalizer.normalize_or_spell("go", &all_assets()) {
            Normalization::SpelledOut { tokens, error } => {
                assert_eq!(tokens, vec!["g", "o"]);
                assert!(error.contains("no dictionary"));
            }
            other => panic!("Expected spelled-out result, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_count_mismatch_is_an_error() {
        let normalizer = GrammarNormalizer::new(Arc::new(ShortTagger), Arc::new(RuleLemmatizer));
        assert!(normalizer.analyze("one two").is_err());
    }

    #[test]
    fn test_success_is_normalized() {
        let result = GrammarNormalizer::default().normalize_or_spell("I am happy", &all_assets());
        assert_eq!(result, Normalization::Normalized(vec!["Me".into(), "happy".into()]));
        assert_eq!(result.into_tokens(), vec!["Me", "happy"]);
    }

    // ===== Properties =====

    proptest! {
        #[test]
        fn prop_word_without_asset_is_its_characters(word in "[a-z]{1,12}") {
            let tokens = resolve_assets(&[word.clone()], &StaticAssets::new());
            let expected: Vec<String> = word.chars().map(String::from).collect();
            prop_assert_eq!(tokens, expected);
        }

        #[test]
        fn prop_word_with_asset_is_one_token(word in "[a-z]{1,12}") {
            let assets = StaticAssets::from_tokens([word.as_str()]);
            prop_assert_eq!(resolve_assets(&[word.clone()], &assets), vec![word]);
        }

        #[test]
        fn prop_tokens_are_alphabetic(text in "[a-zA-Z ,.!?']{0,60}") {
            for token in tokenize(&text) {
                prop_assert!(!token.is_empty());
                prop_assert!(token.chars().all(char::is_alphabetic));
            }
            let tokens = GrammarNormalizer::default()
                .normalize(&text, &StaticAssets::new())
                .expect("Rule-based grammar should not fail on alphabetic input");
            for token in tokens {
                prop_assert_eq!(token.chars().count(), 1);
            }
        }
    }
}
