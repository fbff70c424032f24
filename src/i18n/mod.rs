//! Internationalization (i18n) module for multi-language support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` handle and script-family classification
//! - `metrics`: Counters for the pipeline's fallback paths
//!
//! # Example
//!
//! ```rust,ignore
//! use sign_gloss::i18n::{Language, LanguageRegistry};
//!
//! let gujarati = Language::from_code("gu")?;
//! let offered = LanguageRegistry::get().list_active();
//! ```

mod language;
mod metrics;
mod registry;

pub use language::{Language, ScriptGroup};
pub use metrics::{MetricsReport, PipelineMetrics};
pub use registry::{get_supported_languages, LanguageInfo, LanguageRegistry, CANONICAL_CODE};
