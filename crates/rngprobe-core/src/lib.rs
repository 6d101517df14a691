//! # rngprobe-core
//!
//! **Which PRNG family produced this symbol stream?**
//!
//! `rngprobe-core` takes an observed sequence of discrete symbols (card suits,
//! dice faces, protocol tokens, raw integers) and returns a best-guess
//! generator family with a confidence score and the evidence behind it.
//!
//! ## Quick Start
//!
//! ```
//! use rngprobe_core::{Classifier, RngType};
//!
//! let classifier = Classifier::default();
//! let verdict = classifier.classify(&[0, 1, 2, 3, 4]).unwrap();
//! assert_eq!(verdict.rng_type, RngType::Lcg);
//! assert_eq!(verdict.confidence, 0.9);
//! ```
//!
//! ## Architecture
//!
//! Symbols → Encoder → (Linear detector ‖ Spectral detector) → Verdict
//!
//! - **Encoder**: distinct symbols get integer codes in first-appearance order.
//! - **Linear**: constant difference (0.9) or constant ratio (0.85).
//! - **Spectral**: outlier FFT power at bin 624 or 397 (0.7).
//! - **Verdict**: linear above 0.8 wins, then spectral, else `unknown`.
//!
//! This is a heuristic hypothesis, not state recovery and not a calibrated
//! statistical test.

pub mod classify;
pub mod config;
pub mod detection;
pub mod encoder;
pub mod error;
pub mod linear;
pub mod spectral;

pub use classify::{Classifier, Evidence, RngType, Verdict};
pub use config::ClassifierConfig;
pub use detection::{DetectionResult, FamilyHint};
pub use encoder::{
    EncodedSequence, Symbol, SymbolEncoding, encode, encode_symbols, symbols_from_json,
};
pub use error::{ClassifyError, ConfigError};
pub use linear::detect_linear;
pub use spectral::{detect_spectral, outlier_bins, power_spectrum};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
