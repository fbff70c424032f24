use crate::assets::{AssetLibrary, DirectoryAssets};
use crate::config::Config;
use crate::detect::{self, Detection, LanguageDetector, ScriptDetector};
use crate::enhance;
use crate::error::CapabilityError;
use crate::grammar::GrammarNormalizer;
use crate::i18n::{LanguageRegistry, PipelineMetrics, CANONICAL_CODE};
use crate::preprocess::preprocess;
use crate::quality::{self, QualityVerdict};
use crate::translation::{self, GoogleTranslateClient, TranslationBackend, TranslationPath};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

pub use crate::i18n::get_supported_languages;

/// Language hint that asks for detection.
pub const AUTO_HINT: &str = "auto";

/// How the English text was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct EnglishText {
    pub text: String,
    /// Registry code reported to the caller
    pub language: String,
    /// `None` when the caller named the language
    pub detection: Option<Detection>,
    /// `None` when no translation was needed
    pub translation: Option<TranslationPath>,
    /// `None` when no translation was needed
    pub quality: Option<QualityVerdict>,
}

/// Final result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedText {
    pub english_text: String,
    pub detected_language: String,
    pub tokens: Vec<String>,
    /// Grammar pipeline failed and the text was spelled out
    #[serde(skip)]
    pub spelled_out: bool,
    #[serde(skip)]
    pub english: Option<EnglishText>,
}

impl ProcessedText {
    fn empty() -> Self {
        Self {
            english_text: String::new(),
            detected_language: CANONICAL_CODE.to_string(),
            tokens: Vec::new(),
            spelled_out: false,
            english: None,
        }
    }

    /// `(english_text, detected_language, tokens)`
    pub fn into_tuple(self) -> (String, String, Vec<String>) {
        (self.english_text, self.detected_language, self.tokens)
    }
}

/// Detector, translator and animation library wired into one pipeline.
#[derive(Clone)]
pub struct SignPipeline {
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn TranslationBackend>,
    assets: Arc<dyn AssetLibrary>,
    grammar: GrammarNormalizer,
}

impl SignPipeline {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn TranslationBackend>,
        assets: Arc<dyn AssetLibrary>,
    ) -> Self {
        Self {
            detector,
            translator,
            assets,
            grammar: GrammarNormalizer::default(),
        }
    }

    pub fn with_grammar(mut self, grammar: GrammarNormalizer) -> Self {
        self.grammar = grammar;
        self
    }

    /// Script detector, HTTP translator and the configured clip directory.
    pub fn from_config(config: &Config) -> Result<Self, CapabilityError> {
        let translator = GoogleTranslateClient::new(config)?;
        Ok(Self::new(
            Arc::new(ScriptDetector),
            Arc::new(translator),
            Arc::new(DirectoryAssets::new(&config.asset_dir)),
        ))
    }

    /// English rendering of `text`.
    ///
    /// `hint` is `"auto"` (or empty) to detect the language, otherwise a
    /// language code used as-is for cleanup and translation. The reported
    /// language is always a registry code; unknown hints report English.
    pub async fn to_english(&self, text: &str, hint: &str) -> EnglishText {
        if text.trim().is_empty() {
            return EnglishText {
                text: String::new(),
                language: CANONICAL_CODE.to_string(),
                detection: None,
                translation: None,
                quality: None,
            };
        }

        let hint = hint.trim().to_lowercase();
        let (source, detection) = if hint.is_empty() || hint == AUTO_HINT {
            let detection = detect::detect(self.detector.as_ref(), text);
            (detection.language().code().to_string(), Some(detection))
        } else {
            (hint, None)
        };

        let language = if LanguageRegistry::get().is_supported(&source) {
            source.clone()
        } else {
            warn!("Language hint '{}' is not supported, reporting English", source);
            CANONICAL_CODE.to_string()
        };

        let cleaned = preprocess(text, &source);
        if source == CANONICAL_CODE {
            return EnglishText {
                text: cleaned,
                language,
                detection,
                translation: None,
                quality: None,
            };
        }

        let outcome =
            translation::translate_to_english(self.translator.as_ref(), &cleaned, &source).await;
        let verdict = quality::assess(&cleaned, &outcome.text, &source);

        let candidate = if verdict.is_accepted() {
            outcome.text
        } else {
            PipelineMetrics::global().record_quality_rejection();
            let alternative = enhance::get_alternative(&cleaned, &source);
            info!("Using fallback translation: '{}'", alternative.text());
            alternative.into_text()
        };

        EnglishText {
            text: enhance::enhance(&cleaned, &candidate, &source),
            language,
            detection,
            translation: Some(outcome.path),
            quality: Some(verdict),
        }
    }

    /// Full run: English text, reported language and animation tokens.
    pub async fn process_multilingual_text(&self, text: &str, hint: &str) -> ProcessedText {
        PipelineMetrics::global().record_request();

        if text.trim().is_empty() {
            return ProcessedText::empty();
        }

        let english = self.to_english(text, hint).await;
        let normalization = self
            .grammar
            .normalize_or_spell(&english.text, self.assets.as_ref());
        let spelled_out = normalization.is_spelled_out();
        let tokens = normalization.into_tokens();

        info!(
            "Processed input ({}) into {} tokens",
            english.language,
            tokens.len()
        );

        ProcessedText {
            english_text: english.text.clone(),
            detected_language: english.language.clone(),
            tokens,
            spelled_out,
            english: Some(english),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::StaticAssets;
    use crate::detect::DefaultReason;
    use crate::quality::QualityIssue;
    use crate::translation::TranslatedText;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedDetector(&'static str);

    impl LanguageDetector for FixedDetector {
        fn detect_language(&self, _text: &str) -> Result<String, CapabilityError> {
            Ok(self.0.to_string())
        }
    }

    /// Returns a fixed translation and remembers what it was asked.
    struct RecordingBackend {
        reply: Result<&'static str, &'static str>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingBackend {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                reply: Err(message),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().expect("Lock should not be poisoned").clone()
        }
    }

    #[async_trait]
    impl TranslationBackend for RecordingBackend {
        async fn translate(
            &self,
            text: &str,
            source: &str,
            _target: &str,
        ) -> Result<TranslatedText, CapabilityError> {
            self.calls
                .lock()
                .expect("Lock should not be poisoned")
                .push((text.to_string(), source.to_string()));
            match self.reply {
                Ok(text) => Ok(TranslatedText {
                    text: text.to_string(),
                    confidence: None,
                }),
                Err(message) => Err(CapabilityError::Translation(message.to_string())),
            }
        }
    }

    fn pipeline(detected: &'static str, backend: Arc<RecordingBackend>) -> SignPipeline {
        SignPipeline::new(
            Arc::new(FixedDetector(detected)),
            backend,
            Arc::new(StaticAssets::from_tokens([
                "Me", "happy", "Will", "will", "go", "Before", "home", "Now", "food", "ready",
                "hello", "world",
            ])),
        )
    }

    // ===== Routing =====

    #[tokio::test]
    async fn test_empty_input() {
        let backend = Arc::new(RecordingBackend::replying("unused"));
        let result = pipeline("hi", backend.clone())
            .process_multilingual_text("   ", AUTO_HINT)
            .await;
        assert_eq!(result.into_tuple(), (String::new(), "en".to_string(), vec![]));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_english_skips_translation() {
        let backend = Arc::new(RecordingBackend::replying("unused"));
        let result = pipeline("en", backend.clone())
            .process_multilingual_text("I am happy!", AUTO_HINT)
            .await;

        assert_eq!(result.english_text, "I am happy!");
        assert_eq!(result.detected_language, "en");
        assert_eq!(result.tokens, vec!["Me", "happy"]);
        assert!(backend.calls().is_empty());

        let english = result.english.expect("Should carry the English stage");
        assert_eq!(english.translation, None);
        assert_eq!(english.quality, None);
    }

    #[tokio::test]
    async fn test_detected_language_is_translated() {
        let backend = Arc::new(RecordingBackend::replying("Hello world"));
        let result = pipeline("hi", backend.clone())
            .process_multilingual_text("नमस्ते   दुनिया।", AUTO_HINT)
            .await;

        assert_eq!(result.english_text, "Hello world.");
        assert_eq!(result.detected_language, "hi");
        assert_eq!(result.tokens, vec!["hello", "world"]);
        assert_eq!(
            backend.calls(),
            vec![("नमस्ते दुनिया.".to_string(), "hi".to_string())]
        );
    }

    #[tokio::test]
    async fn test_explicit_hint_skips_detection() {
        let backend = Arc::new(RecordingBackend::replying("Hello world"));
        let english = pipeline("en", backend.clone())
            .to_english("नमस्ते दुनिया", "HI")
            .await;

        assert_eq!(english.language, "hi");
        assert_eq!(english.detection, None);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_detection_defaults_to_english() {
        let backend = Arc::new(RecordingBackend::replying("unused"));
        let english = pipeline("fr", backend.clone())
            .to_english("bonjour le monde", AUTO_HINT)
            .await;

        assert_eq!(english.language, "en");
        assert_eq!(
            english.detection,
            Some(Detection::DefaultedToEnglish(DefaultReason::Unsupported(
                "fr".to_string()
            )))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_hint_is_used_as_is() {
        let backend = Arc::new(RecordingBackend::replying("Hello world"));
        let english = pipeline("en", backend.clone())
            .to_english("bonjour le monde", "fr")
            .await;

        assert_eq!(
            backend.calls(),
            vec![("bonjour le monde".to_string(), "fr".to_string())]
        );
        assert_eq!(english.text, "Hello world.");
        assert_eq!(english.language, "en");
    }

    // ===== Fallbacks =====

    #[tokio::test]
    async fn test_translator_failure_keeps_original_text() {
        let backend = Arc::new(RecordingBackend::failing("timeout"));
        let english = pipeline("hi", backend)
            .to_english("नमस्ते दुनिया", AUTO_HINT)
            .await;

        assert_eq!(english.text, "नमस्ते दुनिया.");
        assert_eq!(english.language, "hi");
        assert!(matches!(
            english.translation,
            Some(TranslationPath::FallbackUsed { .. })
        ));
    }

    #[tokio::test]
    async fn test_rejected_translation_uses_placeholder() {
        let backend = Arc::new(RecordingBackend::replying("error"));
        let english = pipeline("hi", backend)
            .to_english("कुछ भी नहीं", AUTO_HINT)
            .await;

        assert_eq!(english.text, "Text in hi language.");
        assert_eq!(
            english.quality,
            Some(QualityVerdict::Rejected(QualityIssue::Denylisted("error")))
        );
    }

    #[tokio::test]
    async fn test_gujarati_literal_mapping() {
        let backend = Arc::new(RecordingBackend::replying("unused"));
        let result = pipeline("gu", backend.clone())
            .process_multilingual_text("જમવાનું તૈયાર છે", AUTO_HINT)
            .await;

        assert_eq!(result.english_text, "Food is ready.");
        assert_eq!(result.detected_language, "gu");
        assert_eq!(result.tokens, vec!["food", "ready"]);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_gujarati_pre_correction_reaches_literal_mapping() {
        let backend = Arc::new(RecordingBackend::replying("unused"));
        let english = pipeline("gu", backend.clone())
            .to_english("જમવાનું થઈ ગયું", AUTO_HINT)
            .await;

        assert_eq!(english.text, "Food is ready.");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_input_without_words_yields_no_tokens() {
        let backend = Arc::new(RecordingBackend::replying("unused"));
        let result = pipeline("en", backend)
            .process_multilingual_text("42", AUTO_HINT)
            .await;

        assert_eq!(result.tokens, Vec::<String>::new());
        assert!(!result.spelled_out);
    }
}
