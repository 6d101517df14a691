//! Verdict aggregation over the linear and spectral detectors.
//!
//! Both detectors always run on the same encoded sequence. The verdict is
//! picked by fixed priority, never by blending confidences:
//!
//! 1. a linear detection above [`LCG_CONFIDENCE_FLOOR`] → `LCG`
//! 2. otherwise a spectral detection → `MT19937`
//! 3. otherwise `unknown` with zero confidence
//!
//! Both detector results are returned as evidence in every case.

use std::hash::Hash;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{ClassifierConfig, LCG_CONFIDENCE_FLOOR};
use crate::detection::DetectionResult;
use crate::encoder::{EncodedSequence, Symbol, SymbolEncoding, encode, encode_symbols};
use crate::error::ClassifyError;
use crate::linear::detect_linear;
use crate::spectral::detect_spectral;

/// Generator family named by a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RngType {
    #[serde(rename = "LCG")]
    Lcg,
    #[serde(rename = "MT19937")]
    Mt19937,
    #[serde(rename = "unknown")]
    Unknown,
}

impl std::fmt::Display for RngType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lcg => write!(f, "LCG"),
            Self::Mt19937 => write!(f, "MT19937"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Raw detector output behind a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub linear: DetectionResult,
    pub spectral: DetectionResult,
}

/// Classification of one symbol sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub rng_type: RngType,
    pub confidence: f64,
    pub evidence: Evidence,
    pub sequence_length: usize,
    pub distinct_symbols: usize,
}

/// Stateless classifier; holds only its tuning config.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Encode by first occurrence, then classify.
    ///
    /// The detectors do arithmetic on the codes, so the result is only
    /// meaningful when the alphabet's first-appearance order reflects the
    /// generator's numeric output. See [`crate::encoder`].
    pub fn classify<T: Eq + Hash>(&self, symbols: &[T]) -> Result<Verdict, ClassifyError> {
        if symbols.is_empty() {
            return Err(ClassifyError::EmptySequence);
        }
        self.classify_encoded(&encode(symbols))
    }

    /// Classify wire symbols with an explicit encoding strategy.
    pub fn classify_symbols(
        &self,
        symbols: &[Symbol],
        encoding: SymbolEncoding,
    ) -> Result<Verdict, ClassifyError> {
        if symbols.is_empty() {
            return Err(ClassifyError::EmptySequence);
        }
        self.classify_encoded(&encode_symbols(symbols, encoding)?)
    }

    /// Run both detectors on an already encoded sequence and resolve a verdict.
    pub fn classify_encoded(&self, encoded: &EncodedSequence) -> Result<Verdict, ClassifyError> {
        if encoded.is_empty() {
            return Err(ClassifyError::EmptySequence);
        }
        let values = encoded.values();
        let evidence = Evidence {
            linear: detect_linear(values, &self.config),
            spectral: detect_spectral(values, &self.config),
        };
        let (rng_type, confidence) = resolve(&evidence);
        debug!(
            "verdict: {rng_type} ({confidence:.2}) for {} values, {} distinct",
            encoded.len(),
            encoded.alphabet_size()
        );

        Ok(Verdict {
            rng_type,
            confidence,
            evidence,
            sequence_length: encoded.len(),
            distinct_symbols: encoded.alphabet_size(),
        })
    }
}

/// Fixed-priority resolution of detector outputs.
fn resolve(evidence: &Evidence) -> (RngType, f64) {
    let linear = &evidence.linear;
    if linear.detected && linear.confidence > LCG_CONFIDENCE_FLOOR {
        (RngType::Lcg, linear.confidence)
    } else if evidence.spectral.detected {
        (RngType::Mt19937, evidence.spectral.confidence)
    } else {
        (RngType::Unknown, 0.0)
    }
}
