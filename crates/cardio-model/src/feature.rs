use std::fmt;

use serde::{Deserialize, Serialize};

/// A single encoded feature.
///
/// Categorical and integer fields encode as `Int`; only decimal fields
/// produce `Real`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Real(f64),
}

impl FeatureValue {
    /// Numeric view used by classifiers.
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Int(value) => value as f64,
            FeatureValue::Real(value) => value,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(value) => write!(f, "{value}"),
            FeatureValue::Real(value) => write!(f, "{value}"),
        }
    }
}

/// Encoded submission, laid out in [`crate::schema::COLUMN_ORDER`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    values: Vec<FeatureValue>,
}

impl FeatureVector {
    pub fn new(values: Vec<FeatureValue>) -> Self {
        Self { values }
    }

    /// Value at `column`, or `None` past the end of the vector.
    pub fn value(&self, column: usize) -> Option<FeatureValue> {
        self.values.get(column).copied()
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Plain numeric row for models that take raw floats.
    pub fn to_f64_row(&self) -> Vec<f64> {
        self.values.iter().copied().map(FeatureValue::as_f64).collect()
    }
}
