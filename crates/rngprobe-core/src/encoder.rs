//! Symbol encoding: arbitrary discrete symbols → integer sequence.
//!
//! Every distinct symbol gets the next unused non-negative code in the order
//! it first appears, so the same input always produces the same codes.
//!
//! # Caller responsibility
//!
//! Codes only preserve equality. The detectors downstream do arithmetic on
//! them (differences, ratios, spectral power), which is only meaningful when
//! the symbol alphabet itself has linear structure. If the symbols already
//! are numbers whose magnitudes matter, use [`SymbolEncoding::Identity`]
//! instead of relying on first-occurrence codes.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// A single observed symbol on the wire: an integer code or a short token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    Int(i64),
    Text(String),
}

impl Symbol {
    /// Interpret a CLI/text token: integers stay integers, anything else is text.
    pub fn parse_token(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Text(token.to_string()),
        }
    }

    /// Convert one JSON value, rejecting anything that is not a discrete symbol.
    pub fn from_json(index: usize, value: &serde_json::Value) -> Result<Self, ClassifyError> {
        match value {
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            serde_json::Value::Number(n) => {
                n.as_i64()
                    .map(Self::Int)
                    .ok_or_else(|| ClassifyError::UnsupportedSymbol {
                        index,
                        found: n.to_string(),
                    })
            }
            other => Err(ClassifyError::UnsupportedSymbol {
                index,
                found: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Convert a JSON array body into symbols.
pub fn symbols_from_json(values: &[serde_json::Value]) -> Result<Vec<Symbol>, ClassifyError> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Symbol::from_json(i, v))
        .collect()
}

/// How symbols become integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolEncoding {
    /// Codes assigned in first-appearance order (0, 1, 2, ...).
    #[default]
    FirstOccurrence,
    /// Integer symbols pass through unchanged; text symbols are rejected.
    Identity,
}

impl std::fmt::Display for SymbolEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstOccurrence => write!(f, "first_occurrence"),
            Self::Identity => write!(f, "identity"),
        }
    }
}

/// Integer view of a symbol sequence, plus the size of its alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSequence {
    values: Vec<i64>,
    alphabet_size: usize,
}

impl EncodedSequence {
    /// Wrap values that are already numeric codes.
    pub fn from_values(values: Vec<i64>) -> Self {
        let alphabet_size = values.iter().collect::<HashSet<_>>().len();
        Self {
            values,
            alphabet_size,
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct symbols in the original sequence.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}

/// First-occurrence encoding of any equality-comparable symbol type.
pub fn encode<T: Eq + Hash>(symbols: &[T]) -> EncodedSequence {
    let mut codes: HashMap<&T, i64> = HashMap::with_capacity(symbols.len().min(1024));
    let values = symbols
        .iter()
        .map(|s| {
            let next = codes.len() as i64;
            *codes.entry(s).or_insert(next)
        })
        .collect();
    EncodedSequence {
        values,
        alphabet_size: codes.len(),
    }
}

/// Encode wire symbols with the chosen strategy.
pub fn encode_symbols(
    symbols: &[Symbol],
    encoding: SymbolEncoding,
) -> Result<EncodedSequence, ClassifyError> {
    match encoding {
        SymbolEncoding::FirstOccurrence => Ok(encode(symbols)),
        SymbolEncoding::Identity => {
            let values = symbols
                .iter()
                .enumerate()
                .map(|(index, s)| match s {
                    Symbol::Int(v) => Ok(*v),
                    Symbol::Text(_) => Err(ClassifyError::NonNumericSymbol { index }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(EncodedSequence::from_values(values))
        }
    }
}
