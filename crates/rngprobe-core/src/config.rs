//! Policy constants and tunable classifier settings.
//!
//! The confidence values and bin indices are fixed policy; tests pin them by
//! name. Only the ratio rounding precision and the spectral outlier threshold
//! are tunable, through [`ClassifierConfig`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Policy constants
// ---------------------------------------------------------------------------

/// Shortest sequence the linear detector will look at.
pub const LINEAR_MIN_LEN: usize = 4;
/// Shortest sequence the spectral detector will look at (MT19937 state words).
pub const SPECTRAL_MIN_LEN: usize = 624;

/// Frequency bin matching the MT19937 state size.
pub const MT_STATE_BIN: usize = 624;
/// Frequency bin matching the MT19937 middle-word offset.
pub const MT_SHIFT_BIN: usize = 397;
/// Bins checked by the spectral detector, in reporting order.
pub const MT_WATCHED_BINS: [usize; 2] = [MT_STATE_BIN, MT_SHIFT_BIN];

/// Confidence of a constant-difference detection.
pub const ADDITIVE_CONFIDENCE: f64 = 0.9;
/// Confidence of a constant-ratio detection.
pub const MULTIPLICATIVE_CONFIDENCE: f64 = 0.85;
/// Confidence of a spectral MT19937 detection.
pub const SPECTRAL_CONFIDENCE: f64 = 0.7;
/// A linear detection must exceed this to win the verdict.
pub const LCG_CONFIDENCE_FLOOR: f64 = 0.8;

/// Decimal digits kept when comparing successive ratios.
pub const DEFAULT_RATIO_DECIMALS: u32 = 5;
/// Outlier threshold, in standard deviations above mean power.
pub const DEFAULT_OUTLIER_SIGMA: f64 = 2.0;

/// Beyond this, `10^decimals` stops being exactly representable in an f64
/// mantissa and rounding becomes meaningless.
const MAX_RATIO_DECIMALS: u32 = 15;

// ---------------------------------------------------------------------------
// Tunable settings
// ---------------------------------------------------------------------------

/// Heuristic tuning knobs shared by the detectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Ratios are rounded to this many decimal digits before comparison.
    pub ratio_decimals: u32,
    /// Bins with power above `mean + outlier_sigma * stddev` are outliers.
    pub outlier_sigma: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ratio_decimals: DEFAULT_RATIO_DECIMALS,
            outlier_sigma: DEFAULT_OUTLIER_SIGMA,
        }
    }
}

impl ClassifierConfig {
    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the detectors cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ratio_decimals > MAX_RATIO_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "ratio_decimals must be at most {MAX_RATIO_DECIMALS}, got {}",
                self.ratio_decimals
            )));
        }
        if !self.outlier_sigma.is_finite() || self.outlier_sigma < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "outlier_sigma must be a finite non-negative number, got {}",
                self.outlier_sigma
            )));
        }
        Ok(())
    }
}
