//! Command-line front end.
//!
//! Usage:
//!   sign-gloss "I am going to school"        # Detect language, print tokens
//!   sign-gloss --lang gu "જમવાનું તૈયાર છે"   # Skip detection
//!   echo "मैं घर गया" | sign-gloss             # Read text from stdin
//!   sign-gloss --languages                    # List supported languages
//!
//! Optional environment variables:
//! - TRANSLATE_API_URL (defaults to the public Google endpoint)
//! - TRANSLATE_TIMEOUT_SECS (defaults to 10)
//! - TRANSLATE_MAX_ATTEMPTS (defaults to 3)
//! - ASSET_DIR (defaults to assets)
//! - DEFAULT_LANGUAGE_HINT (defaults to auto)

use anyhow::{bail, Context, Result};
use sign_gloss::config::Config;
use sign_gloss::i18n::{LanguageRegistry, PipelineMetrics};
use sign_gloss::SignPipeline;
use std::io::Read;
use tracing::info;

#[derive(Debug, Default, PartialEq)]
struct Args {
    lang: Option<String>,
    list_languages: bool,
    text: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" | "-l" => {
                let Some(code) = args.next() else {
                    bail!("--lang needs a language code or 'auto'");
                };
                parsed.lang = Some(code);
            }
            "--languages" => parsed.list_languages = true,
            _ => parsed.text.push(arg),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sign_gloss=info".parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    if args.list_languages {
        let languages = LanguageRegistry::get().list_active();
        println!("{}", serde_json::to_string_pretty(&languages)?);
        return Ok(());
    }

    let config = Config::from_env()?;

    let text = if args.text.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read text from stdin")?;
        input
    } else {
        args.text.join(" ")
    };

    let hint = args.lang.unwrap_or_else(|| config.default_language_hint.clone());
    let pipeline =
        SignPipeline::from_config(&config).context("Failed to build translation client")?;

    info!("Processing {} characters (hint: {})", text.chars().count(), hint);
    let result = pipeline.process_multilingual_text(&text, &hint).await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    let report = PipelineMetrics::global().report();
    info!("Pipeline metrics: {}", serde_json::to_string(&report)?);

    Ok(())
}
