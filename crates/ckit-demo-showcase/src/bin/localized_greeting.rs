#![forbid(unsafe_code)]

//! Greet and part in the locale picked on the command line.
//!
//! With no arguments the default locale is used; one argument selects a
//! language, two select language and region. Unknown locales fall back
//! through the catalog's chain.

use clap::Parser;

use ckit_demo_showcase::init_logging;
use ckit_i18n::{I18nError, Locale, MessageKey, StringCatalog};

#[derive(Debug, Parser)]
#[command(name = "localized_greeting", about = "Localized greeting demo")]
struct Cli {
    /// Language subtag, e.g. "pl"
    language: Option<String>,

    /// Region subtag, e.g. "PL"
    region: Option<String>,
}

fn main() -> Result<(), I18nError> {
    init_logging();

    let cli = Cli::parse();
    let locale = match (cli.language, cli.region) {
        (Some(language), Some(region)) => Locale::with_region(language, region),
        (Some(language), None) => Locale::new(language),
        _ => Locale::default_locale(),
    };
    tracing::debug!(locale = %locale, "selected locale");

    let catalog = StringCatalog::builtin();
    println!("{}", catalog.resolve(&locale, MessageKey::Greeting)?);
    println!("{}", catalog.resolve(&locale, MessageKey::Farewell)?);
    Ok(())
}
