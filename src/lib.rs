pub mod assets;
pub mod config;
pub mod corrections;
pub mod detect;
pub mod enhance;
pub mod error;
pub mod grammar;
pub mod i18n;
pub mod pipeline;
pub mod preprocess;
pub mod quality;
pub mod retry;
pub mod translation;

pub use error::CapabilityError;
pub use pipeline::{get_supported_languages, ProcessedText, SignPipeline, AUTO_HINT};
