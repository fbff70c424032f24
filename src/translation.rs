use crate::config::Config;
use crate::corrections;
use crate::error::CapabilityError;
use crate::i18n::{PipelineMetrics, CANONICAL_CODE};
use crate::retry::{with_retry, RetryConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

/// Text returned by a translation backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedText {
    pub text: String,
    pub confidence: Option<f64>,
}

/// External machine-translation capability.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslatedText, CapabilityError>;
}

/// How a translation was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationPath {
    /// Input was empty or already English
    Unchanged,
    /// Answered from the literal phrase table without calling the backend
    LiteralMapping { phrase: &'static str },
    /// Returned by the backend
    Translated { confidence: Option<f64> },
    /// Backend failed; `text` is the untranslated input
    FallbackUsed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    pub text: String,
    /// Source language, passed through unchanged (or "en" for empty input)
    pub source: String,
    pub path: TranslationPath,
}

/// Translate `text` from `source` into English.
///
/// Never fails: backend errors are logged and the original text comes back
/// paired with the original source language.
pub async fn translate_to_english(
    backend: &dyn TranslationBackend,
    text: &str,
    source: &str,
) -> TranslationOutcome {
    if text.trim().is_empty() {
        return TranslationOutcome {
            text: String::new(),
            source: CANONICAL_CODE.to_string(),
            path: TranslationPath::Unchanged,
        };
    }

    if source == CANONICAL_CODE {
        return TranslationOutcome {
            text: text.to_string(),
            source: source.to_string(),
            path: TranslationPath::Unchanged,
        };
    }

    if source == "gu" {
        if let Some((phrase, english)) = corrections::gujarati_phrase(text) {
            info!("Using direct mapping for Gujarati: '{}' -> '{}'", phrase, english);
            PipelineMetrics::global().record_literal_mapping();
            return TranslationOutcome {
                text: english.to_string(),
                source: source.to_string(),
                path: TranslationPath::LiteralMapping { phrase },
            };
        }
    }

    let metrics = PipelineMetrics::global();
    metrics.record_translator_call();

    match backend.translate(text, source, CANONICAL_CODE).await {
        Ok(translated) => {
            info!(
                "Translation result: '{}' -> '{}' (confidence: {:?})",
                text, translated.text, translated.confidence
            );
            TranslationOutcome {
                text: translated.text,
                source: source.to_string(),
                path: TranslationPath::Translated {
                    confidence: translated.confidence,
                },
            }
        }
        Err(e) => {
            metrics.record_translator_failure();
            error!("Translation from '{}' failed: {}", source, e);
            TranslationOutcome {
                text: text.to_string(),
                source: source.to_string(),
                path: TranslationPath::FallbackUsed {
                    error: e.to_string(),
                },
            }
        }
    }
}

/// Client for the public Google Translate `translate_a/single` endpoint.
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    api_url: String,
    retry: RetryConfig,
}

impl GoogleTranslateClient {
    pub fn new(config: &Config) -> Result<Self, CapabilityError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.translate_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.translate_api_url.clone(),
            retry: RetryConfig::translation(config.translate_max_attempts),
        })
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    async fn request(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslatedText, CapabilityError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(CapabilityError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        parse_response(&body)
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslatedText, CapabilityError> {
        with_retry(
            &self.retry,
            &format!("Translation {}->{}", source, target),
            || self.request(text, source, target),
        )
        .await
    }
}

/// Extract the translation from a `translate_a/single` response.
///
/// The body is a nested array: element 0 lists sentence segments whose first
/// entry is translated text; element 6, when numeric, is a confidence score.
fn parse_response(body: &Value) -> Result<TranslatedText, CapabilityError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| CapabilityError::Translation("malformed response body".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(CapabilityError::Translation(
            "response contained no translated text".to_string(),
        ));
    }

    Ok(TranslatedText {
        text,
        confidence: body.get(6).and_then(Value::as_f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    /// Backend that counts calls and answers with a fixed result.
    struct StubBackend {
        calls: AtomicUsize,
        reply: Result<&'static str, &'static str>,
    }

    impl StubBackend {
        fn ok(text: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(text),
            }
        }

        fn failing(reason: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Err(reason),
            }
        }
    }

    #[async_trait]
    impl TranslationBackend for StubBackend {
        async fn translate(
            &self,
            _text: &str,
            _source: &str,
            _target: &str,
        ) -> Result<TranslatedText, CapabilityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(TranslatedText {
                    text: text.to_string(),
                    confidence: None,
                }),
                Err(reason) => Err(CapabilityError::Translation(reason.to_string())),
            }
        }
    }

    // ==================== translate_to_english ====================

    #[tokio::test]
    async fn test_empty_input_returns_empty_english() {
        let backend = StubBackend::ok("unused");
        let outcome = translate_to_english(&backend, "   ", "hi").await;

        assert_eq!(outcome.text, "");
        assert_eq!(outcome.source, "en");
        assert_eq!(outcome.path, TranslationPath::Unchanged);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_english_is_returned_unchanged() {
        let backend = StubBackend::ok("unused");
        let text = "  Already English, with spacing  ";
        let outcome = translate_to_english(&backend, text, "en").await;

        assert_eq!(outcome.text, text);
        assert_eq!(outcome.source, "en");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gujarati_literal_mapping_skips_backend() {
        let backend = StubBackend::ok("Gone");
        let outcome = translate_to_english(&backend, "જમવાનું તૈયાર છે", "gu").await;

        assert_eq!(outcome.text, "Food is ready");
        assert_eq!(outcome.source, "gu");
        assert_eq!(
            outcome.path,
            TranslationPath::LiteralMapping {
                phrase: "જમવાનું તૈયાર છે"
            }
        );
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gujarati_without_mapping_uses_backend() {
        let backend = StubBackend::ok("How are you?");
        let outcome = translate_to_english(&backend, "કેમ છો?", "gu").await;

        assert_eq!(outcome.text, "How are you?");
        assert_eq!(outcome.path, TranslationPath::Translated { confidence: None });
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_literal_mapping_only_for_gujarati() {
        let backend = StubBackend::ok("Food is prepared");
        let outcome = translate_to_english(&backend, "જમવાનું તૈયાર છે", "hi").await;

        assert_eq!(outcome.text, "Food is prepared");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_returns_original_text() {
        let backend = StubBackend::failing("service unavailable");
        let outcome = translate_to_english(&backend, "नमस्ते", "hi").await;

        assert_eq!(outcome.text, "नमस्ते");
        assert_eq!(outcome.source, "hi");
        assert!(matches!(
            outcome.path,
            TranslationPath::FallbackUsed { ref error } if error.contains("service unavailable")
        ));
    }

    // ==================== parse_response ====================

    #[test]
    fn test_parse_response_joins_segments() {
        let body = serde_json::json!([
            [["Hello. ", "नमस्ते।", null, null, 10], ["How are you?", "आप कैसे हैं?", null, null, 10]],
            null,
            "hi",
            null,
            null,
            null,
            0.93
        ]);

        let parsed = parse_response(&body).expect("Should parse");
        assert_eq!(parsed.text, "Hello. How are you?");
        assert_eq!(parsed.confidence, Some(0.93));
    }

    #[test]
    fn test_parse_response_without_confidence() {
        let body = serde_json::json!([[["Hello", "नमस्ते"]], null, "hi"]);
        let parsed = parse_response(&body).expect("Should parse");
        assert_eq!(parsed.confidence, None);
    }

    #[test]
    fn test_parse_response_malformed() {
        assert!(parse_response(&serde_json::json!({"error": "nope"})).is_err());
        assert!(parse_response(&serde_json::json!([[]])).is_err());
    }

    // ==================== GoogleTranslateClient with wiremock ====================

    fn test_client(server: &MockServer) -> GoogleTranslateClient {
        let config = Config {
            translate_api_url: format!("{}/translate_a/single", server.uri()),
            translate_timeout_secs: 5,
            ..Config::default()
        };
        GoogleTranslateClient::new(&config)
            .expect("Should build client")
            .with_retry_config(RetryConfig::new(3, Duration::from_millis(10)))
    }

    #[tokio::test]
    async fn test_client_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("sl", "hi"))
            .and(query_param("tl", "en"))
            .and(query_param("q", "नमस्ते"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([[["Hello", "नमस्ते"]], null, "hi"])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = test_client(&server).translate("नमस्ते", "hi", "en").await;
        assert_eq!(result.expect("Should succeed").text, "Hello");
    }

    #[tokio::test]
    async fn test_client_retries_on_500() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .up_to_n_times(2)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([[["After retries", "x"]]])),
            )
            .mount(&server)
            .await;

        let result = test_client(&server).translate("x", "ta", "en").await;
        assert_eq!(result.expect("Should succeed after retries").text, "After retries");
    }

    #[tokio::test]
    async fn test_client_no_retry_on_400() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
            .expect(1)
            .mount(&server)
            .await;

        let result = test_client(&server).translate("x", "ta", "en").await;
        assert!(matches!(result, Err(CapabilityError::Http { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_client_exhausts_retries() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Unavailable"))
            .expect(3)
            .mount(&server)
            .await;

        let result = test_client(&server).translate("x", "ta", "en").await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("503"), "{err}");
    }

    #[tokio::test]
    async fn test_client_failure_falls_back_through_translate_to_english() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let outcome = translate_to_english(&client, "வணக்கம்", "ta").await;

        assert_eq!(outcome.text, "வணக்கம்");
        assert_eq!(outcome.source, "ta");
        assert!(matches!(outcome.path, TranslationPath::FallbackUsed { .. }));
    }
}
