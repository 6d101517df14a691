//! Per-detector result type shared by the linear and spectral detectors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which generator structure a detector believes it saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyHint {
    /// Constant first difference.
    LinearIncrement,
    /// Constant ratio between successive values.
    Multiplicative,
    /// Outlier energy at the MT19937 bins.
    MersenneTwister,
}

impl std::fmt::Display for FamilyHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearIncrement => write!(f, "linear_increment"),
            Self::Multiplicative => write!(f, "multiplicative"),
            Self::MersenneTwister => write!(f, "mersenne_twister"),
        }
    }
}

/// Outcome of one detector over one encoded sequence.
///
/// Built only through [`DetectionResult::not_detected`] and
/// [`DetectionResult::detected`], so a negative result always carries zero
/// confidence and no parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub detected: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub family_hint: Option<FamilyHint>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, f64>,
    pub confidence: f64,
}

impl DetectionResult {
    pub fn not_detected() -> Self {
        Self {
            detected: false,
            family_hint: None,
            parameters: BTreeMap::new(),
            confidence: 0.0,
        }
    }

    pub fn detected(hint: FamilyHint, confidence: f64) -> Self {
        Self {
            detected: true,
            family_hint: Some(hint),
            parameters: BTreeMap::new(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Attach a named numeric parameter.
    pub fn with_parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_detected_has_zero_confidence() {
        let r = DetectionResult::not_detected();
        assert!(!r.detected);
        assert_eq!(r.confidence, 0.0);
        assert!(r.family_hint.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let r = DetectionResult::detected(FamilyHint::LinearIncrement, 0.9)
            .with_parameter("increment", 1.0);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["detected"], true);
        assert_eq!(v["type"], "linear_increment");
        assert_eq!(v["parameters"]["increment"], 1.0);
        assert_eq!(v["confidence"], 0.9);

        let v = serde_json::to_value(DetectionResult::not_detected()).unwrap();
        assert_eq!(v, serde_json::json!({"detected": false, "confidence": 0.0}));
    }
}
