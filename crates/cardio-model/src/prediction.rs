use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    /// No elevated risk detected.
    Low,
    /// Elevated risk of heart disease.
    Elevated,
}

impl Prediction {
    /// Integer label downstream consumers expect: 0 for low, 1 for elevated.
    pub fn label(&self) -> u8 {
        match self {
            Prediction::Low => 0,
            Prediction::Elevated => 1,
        }
    }

    /// Sentence shown on the result page.
    pub fn description(&self) -> &'static str {
        match self {
            Prediction::Low => "No elevated risk of heart disease was detected.",
            Prediction::Elevated => "An elevated risk of heart disease was detected.",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
