use crate::error::CapabilityError;
use crate::i18n::{Language, PipelineMetrics};
use tracing::{debug, warn};

/// External language-identification capability.
pub trait LanguageDetector: Send + Sync {
    /// Best-guess ISO 639-1 code for `text`. The code need not be supported.
    fn detect_language(&self, text: &str) -> Result<String, CapabilityError>;
}

/// Outcome of a detection, recording whether the English fallback was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Detected(Language),
    DefaultedToEnglish(DefaultReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultReason {
    EmptyInput,
    DetectorFailed(String),
    Unsupported(String),
}

impl Detection {
    pub fn language(&self) -> Language {
        match self {
            Detection::Detected(language) => *language,
            Detection::DefaultedToEnglish(_) => Language::ENGLISH,
        }
    }
}

/// Detect the language of `text`, defaulting to English.
pub fn detect(detector: &dyn LanguageDetector, text: &str) -> Detection {
    if text.trim().is_empty() {
        return Detection::DefaultedToEnglish(DefaultReason::EmptyInput);
    }

    let detection = match detector.detect_language(text) {
        Ok(code) => match Language::from_code(&code) {
            Ok(language) => {
                debug!("Detected language '{}'", language);
                Detection::Detected(language)
            }
            Err(_) => {
                warn!("Detected language '{}' is not supported, defaulting to English", code);
                Detection::DefaultedToEnglish(DefaultReason::Unsupported(code))
            }
        },
        Err(e) => {
            warn!("Language detection failed: {}", e);
            Detection::DefaultedToEnglish(DefaultReason::DetectorFailed(e.to_string()))
        }
    };

    if matches!(detection, Detection::DefaultedToEnglish(_)) {
        PipelineMetrics::global().record_detection_defaulted();
    }
    detection
}

/// Detector that votes by Unicode script.
///
/// Each script maps to the registry language most associated with it, so
/// Marathi reads as Hindi and Assamese as Bengali; pass an explicit hint for
/// those.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptDetector;

impl ScriptDetector {
    fn script_language(c: char) -> Option<&'static str> {
        match c as u32 {
            0x0900..=0x097F => Some("hi"),
            0x0980..=0x09FF => Some("bn"),
            0x0A00..=0x0A7F => Some("pa"),
            0x0A80..=0x0AFF => Some("gu"),
            0x0B00..=0x0B7F => Some("or"),
            0x0B80..=0x0BFF => Some("ta"),
            0x0C00..=0x0C7F => Some("te"),
            0x0C80..=0x0CFF => Some("kn"),
            0x0D00..=0x0D7F => Some("ml"),
            _ if c.is_ascii_alphabetic() => Some("en"),
            _ => None,
        }
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect_language(&self, text: &str) -> Result<String, CapabilityError> {
        let mut votes: Vec<(&'static str, usize)> = Vec::new();

        for code in text.chars().filter_map(Self::script_language) {
            match votes.iter_mut().find(|(c, _)| *c == code) {
                Some((_, n)) => *n += 1,
                None => votes.push((code, 1)),
            }
        }

        // Ties go to the script seen first.
        let mut best: Option<(&'static str, usize)> = None;
        for (code, n) in votes {
            if best.map_or(true, |(_, top)| n > top) {
                best = Some((code, n));
            }
        }

        best.map(|(code, _)| code.to_string())
            .ok_or_else(|| CapabilityError::Detection("no letters in input".to_string()))
    }
}
