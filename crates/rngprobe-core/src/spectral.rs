//! Spectral periodicity detection for Mersenne-Twister-class generators.
//!
//! The encoded sequence is treated as a real signal and transformed with a
//! full-length FFT. Bins whose power sits more than `outlier_sigma` standard
//! deviations above the mean are outliers; the detector fires when bin 624 or
//! bin 397 is among them.
//!
//! The two indices are literal MT19937 constants (state size and middle-word
//! offset) compared against raw bin indices. They are not converted into a
//! period in samples, and no other bins are considered.

use log::{debug, trace};
use rustfft::{FftPlanner, num_complex::Complex};
use statrs::statistics::Statistics;

use crate::config::{ClassifierConfig, MT_WATCHED_BINS, SPECTRAL_CONFIDENCE, SPECTRAL_MIN_LEN};
use crate::detection::{DetectionResult, FamilyHint};

/// Power (squared magnitude) of every DFT bin, `0..n`.
pub fn power_spectrum(values: &[i64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex<f64>> = values
        .iter()
        .map(|&x| Complex {
            re: x as f64,
            im: 0.0,
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer.iter().map(|c| c.norm_sqr()).collect()
}

/// Indices of bins with power strictly above `mean + sigma * stddev`.
///
/// Uses the population standard deviation over all bins.
pub fn outlier_bins(power: &[f64], sigma: f64) -> Vec<usize> {
    if power.is_empty() {
        return Vec::new();
    }
    let mean = power.iter().mean();
    let std_dev = power.iter().population_std_dev();
    let threshold = mean + sigma * std_dev;
    trace!("spectral: mean={mean:.3e} std={std_dev:.3e} threshold={threshold:.3e}");

    power
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Check for outlier energy at the MT19937 bins.
///
/// Sequences shorter than [`SPECTRAL_MIN_LEN`] are never detected. A watched
/// bin beyond the end of the spectrum does not exist and cannot fire.
pub fn detect_spectral(values: &[i64], config: &ClassifierConfig) -> DetectionResult {
    let n = values.len();
    if n < SPECTRAL_MIN_LEN {
        debug!("spectral: {n} values, need {SPECTRAL_MIN_LEN}");
        return DetectionResult::not_detected();
    }

    let power = power_spectrum(values);
    let outliers = outlier_bins(&power, config.outlier_sigma);

    // `outliers` is sorted, so membership is a binary search.
    let hit = MT_WATCHED_BINS
        .iter()
        .copied()
        .find(|bin| outliers.binary_search(bin).is_ok());

    match hit {
        Some(bin) => {
            debug!(
                "spectral: bin {bin} is an outlier ({} outlier bins of {n})",
                outliers.len()
            );
            DetectionResult::detected(FamilyHint::MersenneTwister, SPECTRAL_CONFIDENCE)
                .with_parameter("bin", bin as f64)
                .with_parameter("outlier_bins", outliers.len() as f64)
        }
        None => {
            debug!(
                "spectral: no watched bin among {} outliers of {n}",
                outliers.len()
            );
            DetectionResult::not_detected()
        }
    }
}
