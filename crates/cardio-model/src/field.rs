use serde::{Deserialize, Serialize};

/// Validation rule attached to a clinical field.
///
/// Categorical rules double as the encoding table: the position of a value
/// in `values` is the integer the encoder emits for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Exact-match membership in a fixed list of display strings.
    Categorical { values: Vec<String> },
    /// Whole number within an inclusive range.
    IntegerRange { min: i64, max: i64 },
    /// Decimal number within an inclusive range.
    RealRange { min: f64, max: f64 },
}

impl FieldKind {
    /// A categorical rule needs at least one value; range rules need ordered
    /// bounds.
    pub fn is_well_formed(&self) -> bool {
        match self {
            FieldKind::Categorical { values } => !values.is_empty(),
            FieldKind::IntegerRange { min, max } => min <= max,
            FieldKind::RealRange { min, max } => min <= max,
        }
    }
}

/// One clinical parameter: submission name, page label, validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Form parameter name, e.g. `trestbps`.
    pub name: String,
    /// Label shown on rendered pages and in rejection messages.
    pub label: String,
    /// Rule the submitted value must satisfy.
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn categorical(name: &str, label: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Categorical {
                values: values.iter().copied().map(String::from).collect(),
            },
        }
    }

    pub fn integer(name: &str, label: &str, min: i64, max: i64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::IntegerRange { min, max },
        }
    }

    pub fn real(name: &str, label: &str, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::RealRange { min, max },
        }
    }
}
