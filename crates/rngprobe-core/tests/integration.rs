//! Integration tests for rngprobe-core.
//!
//! These pin the classifier's observable behaviour through the public API:
//! symbols → encoding → detectors → verdict.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rngprobe_core::config::{
    ADDITIVE_CONFIDENCE, MT_SHIFT_BIN, MT_STATE_BIN, MULTIPLICATIVE_CONFIDENCE,
    SPECTRAL_CONFIDENCE,
};
use rngprobe_core::{
    Classifier, ClassifierConfig, ClassifyError, EncodedSequence, FamilyHint, RngType, Symbol,
    SymbolEncoding, detect_linear, detect_spectral, encode,
};

fn noise(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..1000)).collect()
}

#[test]
fn linear_detector_needs_four_values() {
    let config = ClassifierConfig::default();
    for seed in 0..20 {
        for len in 0..4 {
            let values = noise(len, seed);
            let r = detect_linear(&values, &config);
            assert!(!r.detected);
            assert_eq!(r.confidence, 0.0);
        }
    }
    // Trivially constant-step short sequences are still rejected.
    let r = detect_linear(&[1, 2, 3], &config);
    assert!(!r.detected);
}

#[test]
fn spectral_detector_needs_624_values() {
    let config = ClassifierConfig::default();
    for len in [0, 1, 100, 397, 623] {
        let values: Vec<i64> = (0..len)
            .map(|i| (100.0 * (2.0 * PI * 397.0 * i as f64 / 1024.0).cos()).round() as i64)
            .collect();
        let r = detect_spectral(&values, &config);
        assert!(!r.detected, "len {len}");
        assert_eq!(r.confidence, 0.0);
    }
}

#[test]
fn counting_sequence_is_lcg() {
    let classifier = Classifier::default();
    let verdict = classifier.classify(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(verdict.rng_type, RngType::Lcg);
    assert_eq!(verdict.confidence, ADDITIVE_CONFIDENCE);
    let linear = &verdict.evidence.linear;
    assert_eq!(linear.family_hint, Some(FamilyHint::LinearIncrement));
    assert_eq!(linear.parameter("increment"), Some(1.0));
}

#[test]
fn doubling_sequence_is_multiplicative_lcg() {
    let classifier = Classifier::default();
    let encoded = EncodedSequence::from_values(vec![1, 2, 4, 8, 16]);
    let verdict = classifier.classify_encoded(&encoded).unwrap();
    assert_eq!(verdict.rng_type, RngType::Lcg);
    assert_eq!(verdict.confidence, MULTIPLICATIVE_CONFIDENCE);
    let linear = &verdict.evidence.linear;
    assert_eq!(linear.family_hint, Some(FamilyHint::Multiplicative));
    assert_eq!(linear.parameter("multiplier"), Some(2.0));

    // Same result through identity encoding of wire symbols.
    let symbols: Vec<Symbol> = [1, 2, 4, 8, 16].into_iter().map(Symbol::Int).collect();
    let via_symbols = classifier
        .classify_symbols(&symbols, SymbolEncoding::Identity)
        .unwrap();
    assert_eq!(via_symbols, verdict);

    // First-occurrence codes discard magnitudes and see a plain increment.
    let recoded = classifier.classify(&[1, 2, 4, 8, 16]).unwrap();
    assert_eq!(recoded.rng_type, RngType::Lcg);
    assert_eq!(
        recoded.evidence.linear.family_hint,
        Some(FamilyHint::LinearIncrement)
    );
}

#[test]
fn constant_run_has_no_spectral_signature() {
    let symbols = vec!["Hearts"; 624];
    let verdict = Classifier::default().classify(&symbols).unwrap();
    assert!(!verdict.evidence.spectral.detected);
    // All-equal codes are a zero increment.
    assert_eq!(verdict.rng_type, RngType::Lcg);
    assert_eq!(verdict.evidence.linear.parameter("increment"), Some(0.0));
    assert_eq!(verdict.distinct_symbols, 1);
}

#[test]
fn encoding_is_deterministic_and_equality_preserving() {
    let mut rng = StdRng::seed_from_u64(42);
    let suits = ["Hearts", "Diamonds", "Clubs", "Spades"];
    let symbols: Vec<&str> = (0..2000).map(|_| suits[rng.random_range(0..4)]).collect();

    let a = encode(&symbols);
    let b = encode(&symbols);
    assert_eq!(a.values(), b.values());

    for i in (0..symbols.len()).step_by(37) {
        for j in (0..symbols.len()).step_by(41) {
            assert_eq!(symbols[i] == symbols[j], a.values()[i] == a.values()[j]);
        }
    }
    assert_eq!(a.values()[0], 0);
}

#[test]
fn linear_outranks_spectral() {
    // A 625-sample ramp is a constant increment, and its bin-1 energy
    // mirrors into bin 624, so both detectors fire. The case where both
    // watched bins fire is covered by both_watched_bins_name_state_bin.
    let encoded = EncodedSequence::from_values((0..625).collect());
    let verdict = Classifier::default().classify_encoded(&encoded).unwrap();

    assert!(verdict.evidence.spectral.detected);
    assert_eq!(verdict.evidence.spectral.confidence, SPECTRAL_CONFIDENCE);
    assert_eq!(
        verdict.evidence.spectral.parameter("bin"),
        Some(MT_STATE_BIN as f64)
    );

    assert_eq!(verdict.rng_type, RngType::Lcg);
    assert_eq!(verdict.confidence, ADDITIVE_CONFIDENCE);
}

#[test]
fn both_watched_bins_name_state_bin() {
    // Tones at bins 624 and 397 together: the spectral result names bin 624.
    let tone = |bin: usize, i: usize| 100.0 * (2.0 * PI * bin as f64 * i as f64 / 1024.0).cos();
    let values: Vec<i64> = (0..1024)
        .map(|i| (tone(MT_STATE_BIN, i) + tone(MT_SHIFT_BIN, i)).round() as i64)
        .collect();
    let spectral = detect_spectral(&values, &ClassifierConfig::default());
    assert!(spectral.detected);
    assert_eq!(spectral.parameter("bin"), Some(MT_STATE_BIN as f64));

    // With no linear structure the verdict is MT19937 at spectral confidence.
    let verdict = Classifier::default()
        .classify_encoded(&EncodedSequence::from_values(values))
        .unwrap();
    assert!(!verdict.evidence.linear.detected);
    assert_eq!(verdict.rng_type, RngType::Mt19937);
    assert_eq!(verdict.evidence.spectral, spectral);

}

#[test]
fn spectral_only_is_mt19937() {
    let values: Vec<i64> = (0..1024)
        .map(|i| {
            (100.0 * (2.0 * PI * MT_SHIFT_BIN as f64 * i as f64 / 1024.0).cos()).round() as i64
        })
        .collect();
    let verdict = Classifier::default()
        .classify_encoded(&EncodedSequence::from_values(values))
        .unwrap();
    assert!(!verdict.evidence.linear.detected);
    assert_eq!(verdict.rng_type, RngType::Mt19937);
    assert_eq!(verdict.confidence, SPECTRAL_CONFIDENCE);
    assert_eq!(
        verdict.evidence.spectral.family_hint,
        Some(FamilyHint::MersenneTwister)
    );
}

#[test]
fn empty_sequence_is_rejected_not_unknown() {
    let classifier = Classifier::default();
    let err = classifier.classify::<&str>(&[]).unwrap_err();
    assert_eq!(err, ClassifyError::EmptySequence);

    let err = classifier
        .classify_symbols(&[], SymbolEncoding::FirstOccurrence)
        .unwrap_err();
    assert_eq!(err, ClassifyError::EmptySequence);
}

#[test]
fn scrambled_sequence_is_unknown() {
    // High bits of a 64-bit LCG, reduced mod 1000: no constant step or
    // ratio survives, and only the DC bin stands out in the spectrum.
    let mut x: u64 = 1;
    let values: Vec<i64> = (0..700)
        .map(|_| {
            x = x
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((x >> 33) % 1000) as i64
        })
        .collect();
    let verdict = Classifier::default()
        .classify_encoded(&EncodedSequence::from_values(values))
        .unwrap();

    assert!(!verdict.evidence.linear.detected);
    assert!(!verdict.evidence.spectral.detected);
    assert_eq!(verdict.rng_type, RngType::Unknown);
    assert_eq!(verdict.confidence, 0.0);
}

#[test]
fn verdicts_are_reproducible() {
    let values = noise(1500, 7);
    let classifier = Classifier::default();
    let a = classifier
        .classify_encoded(&EncodedSequence::from_values(values.clone()))
        .unwrap();
    let b = classifier
        .classify_encoded(&EncodedSequence::from_values(values))
        .unwrap();
    assert_eq!(a, b);
}
