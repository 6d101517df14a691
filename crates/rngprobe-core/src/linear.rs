//! Linear pattern detection: constant difference or constant ratio.
//!
//! These are the shapes degenerate LCG parameterisations (multiplier 1, or
//! increment 0) produce while the output has not yet wrapped the modulus.

use log::debug;

use crate::config::{
    ADDITIVE_CONFIDENCE, ClassifierConfig, LINEAR_MIN_LEN, MULTIPLICATIVE_CONFIDENCE,
};
use crate::detection::{DetectionResult, FamilyHint};

/// Round to `decimals` digits, ties to even.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

/// Successive ratios `x[i+1] / x[i]`, skipping zero denominators.
fn successive_ratios(values: &[i64]) -> impl Iterator<Item = f64> + '_ {
    values
        .windows(2)
        .filter(|w| w[0] != 0)
        .map(|w| w[1] as f64 / w[0] as f64)
}

/// Test for additive, then multiplicative, structure.
///
/// Sequences shorter than [`LINEAR_MIN_LEN`] are never detected.
pub fn detect_linear(values: &[i64], config: &ClassifierConfig) -> DetectionResult {
    let n = values.len();
    if n < LINEAR_MIN_LEN {
        debug!("linear: {n} values, need {LINEAR_MIN_LEN}");
        return DetectionResult::not_detected();
    }

    // i128 so that differences of extreme i64 codes cannot overflow.
    let first = values[1] as i128 - values[0] as i128;
    let constant_step = values
        .windows(2)
        .all(|w| w[1] as i128 - w[0] as i128 == first);
    if constant_step {
        debug!("linear: constant increment {first} over {n} values");
        return DetectionResult::detected(FamilyHint::LinearIncrement, ADDITIVE_CONFIDENCE)
            .with_parameter("increment", first as f64);
    }

    let mut ratios: Vec<f64> = successive_ratios(values)
        .map(|r| round_to(r, config.ratio_decimals))
        .collect();
    if ratios.is_empty() {
        debug!("linear: no usable ratios (all denominators zero)");
        return DetectionResult::not_detected();
    }
    ratios.sort_by(f64::total_cmp);
    ratios.dedup();

    if let [multiplier] = ratios.as_slice() {
        debug!("linear: constant ratio {multiplier} over {n} values");
        return DetectionResult::detected(FamilyHint::Multiplicative, MULTIPLICATIVE_CONFIDENCE)
            .with_parameter("multiplier", *multiplier);
    }

    debug!("linear: {} distinct ratios, no pattern", ratios.len());
    DetectionResult::not_detected()
}
