pub mod classify;
pub mod server;

use std::path::Path;

use clap::ValueEnum;
use log::debug;
use rngprobe_core::{ClassifierConfig, ConfigError, Symbol, SymbolEncoding};

/// `--encoding` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    /// Codes by first appearance
    FirstOccurrence,
    /// Integers as-is
    Identity,
}

impl From<EncodingArg> for SymbolEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::FirstOccurrence => SymbolEncoding::FirstOccurrence,
            EncodingArg::Identity => SymbolEncoding::Identity,
        }
    }
}

/// Build the classifier config: JSON file (if any), then flag overrides.
pub fn load_config(
    path: Option<&str>,
    ratio_decimals: Option<u32>,
    outlier_sigma: Option<f64>,
) -> Result<ClassifierConfig, ConfigError> {
    let mut config = match path {
        Some(p) => ClassifierConfig::from_path(Path::new(p))?,
        None => ClassifierConfig::default(),
    };
    if let Some(d) = ratio_decimals {
        config.ratio_decimals = d;
    }
    if let Some(s) = outlier_sigma {
        config.outlier_sigma = s;
    }
    config.validate()?;
    debug!(
        "classifier config: ratio_decimals={} outlier_sigma={}",
        config.ratio_decimals, config.outlier_sigma
    );
    Ok(config)
}

/// Split free text into symbols on whitespace and commas.
pub fn tokenize(text: &str) -> Vec<Symbol> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(Symbol::parse_token)
        .collect()
}

/// Print an error and exit with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
