//! Basic usage of rngprobe-core: classify a few symbol streams.

use rngprobe_core::{Classifier, EncodedSequence};

fn main() {
    let classifier = Classifier::default();

    let suits = ["Hearts", "Diamonds", "Clubs", "Spades", "Hearts", "Clubs"];
    match classifier.classify(&suits) {
        Ok(verdict) => println!(
            "suits:    {} ({:.2}), {} distinct symbols",
            verdict.rng_type, verdict.confidence, verdict.distinct_symbols
        ),
        Err(e) => eprintln!("suits:    {e}"),
    }

    let doubling = EncodedSequence::from_values(vec![3, 6, 12, 24, 48, 96]);
    match classifier.classify_encoded(&doubling) {
        Ok(verdict) => println!(
            "doubling: {} ({:.2}), multiplier {:?}",
            verdict.rng_type,
            verdict.confidence,
            verdict.evidence.linear.parameter("multiplier")
        ),
        Err(e) => eprintln!("doubling: {e}"),
    }

    match classifier.classify::<u32>(&[]) {
        Ok(_) => println!("empty:    unexpected verdict"),
        Err(e) => println!("empty:    rejected ({e})"),
    }
}
