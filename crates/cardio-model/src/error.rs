use thiserror::Error;

use crate::feature::FeatureValue;

/// Lookup of a field name the schema never declared.
///
/// Surfacing this as an error instead of panicking lets the HTTP layer turn
/// a schema/encoder mismatch into a 500 response while the process keeps
/// serving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {name}")]
pub struct UnknownField {
    pub name: String,
}

/// Why one submitted value was rejected.
///
/// The `Display` strings are shown to the user verbatim on the error page,
/// so wording changes here are user-visible changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Value is not in the field's allowed list. Matching is exact,
    /// including case.
    #[error("{label} must be one of: {}", .allowed.join(", "))]
    InvalidChoice { label: String, allowed: Vec<String> },
    /// Value failed integer parsing.
    #[error("{label} must be an integer")]
    InvalidInteger { label: String },
    /// Value failed decimal parsing, or parsed to a non-finite float.
    #[error("{label} must be a fractional number")]
    InvalidReal { label: String },
    /// Parsed fine but sits below the field minimum.
    #[error("{label} must not be less than {min}")]
    BelowMinimum { label: String, min: FeatureValue },
    /// Parsed fine but sits above the field maximum.
    #[error("{label} must not be greater than {max}")]
    AboveMaximum { label: String, max: FeatureValue },
}

/// First failure found while validating a whole submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestRejection {
    /// At least one schema field is absent from the submission. The message
    /// deliberately names no field: an incomplete submission is a form
    /// defect, not a user mistake.
    #[error("Not all parameters were supplied")]
    MissingParameters,
    /// Every field was present; this one failed its rule first.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Failure while encoding a submission that was supposed to be validated.
///
/// Any of these reaching a handler means the validate-before-encode
/// contract was broken somewhere upstream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error("no value supplied for field: {name}")]
    MissingValue { name: String },
    #[error("value {value:?} is not in the allowed list for field: {name}")]
    UnknownChoice { name: String, value: String },
    #[error("value {value:?} is not numeric for field: {name}")]
    NotNumeric { name: String, value: String },
}
