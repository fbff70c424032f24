use crate::corrections;
use tracing::warn;

/// Output longer than this multiple of the source length is rejected.
const MAX_EXPANSION: usize = 3;

/// Output shorter than this many characters is rejected.
const MIN_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityIssue {
    /// Fewer than two non-whitespace characters
    Empty,
    /// Contains a denylisted degenerate token
    Denylisted(&'static str),
    /// Below the minimum length
    TooShort { length: usize },
    /// More than `MAX_EXPANSION` times the source length
    TooLong { length: usize, source_length: usize },
}

impl std::fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityIssue::Empty => write!(f, "translation is empty"),
            QualityIssue::Denylisted(token) => write!(f, "translation contains '{}'", token),
            QualityIssue::TooShort { length } => {
                write!(f, "translation has only {} characters", length)
            }
            QualityIssue::TooLong {
                length,
                source_length,
            } => write!(
                f,
                "translation has {} characters for a {}-character source",
                length, source_length
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityVerdict {
    Accepted,
    Rejected(QualityIssue),
}

impl QualityVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, QualityVerdict::Accepted)
    }
}

/// Judge a translation of `original`.
pub fn assess(original: &str, translated: &str, source: &str) -> QualityVerdict {
    let verdict = check(original, translated);

    if let QualityVerdict::Rejected(issue) = &verdict {
        warn!(
            "Poor translation from '{}' rejected ({}): '{}' -> '{}'",
            source, issue, original, translated
        );
    }
    verdict
}

/// Whether a translation of `original` is good enough to keep.
pub fn is_acceptable(original: &str, translated: &str, source: &str) -> bool {
    assess(original, translated, source).is_accepted()
}

fn check(original: &str, translated: &str) -> QualityVerdict {
    if translated.chars().filter(|c| !c.is_whitespace()).count() < 2 {
        return QualityVerdict::Rejected(QualityIssue::Empty);
    }

    if let Some(token) = corrections::denylisted(translated) {
        return QualityVerdict::Rejected(QualityIssue::Denylisted(token));
    }

    let length = translated.chars().count();
    let source_length = original.chars().count();

    if length < MIN_LENGTH {
        return QualityVerdict::Rejected(QualityIssue::TooShort { length });
    }
    if length > source_length * MAX_EXPANSION {
        return QualityVerdict::Rejected(QualityIssue::TooLong {
            length,
            source_length,
        });
    }

    QualityVerdict::Accepted
}
