//! Submission validation for the screening form.
//!
//! Validation runs in two passes: presence of every schema field first, then
//! each field's rule in schema order. The first rule failure wins, so a
//! rejected submission always carries exactly one message.

use cardio_model::{
    FeatureValue, FieldError, FieldKind, FieldSpec, RawRequest, RequestRejection, Schema,
};

/// Validate one raw value against its field rule.
///
/// Values are taken exactly as submitted: no trimming, no case folding.
pub fn validate_field(raw: &str, spec: &FieldSpec) -> Result<(), FieldError> {
    match &spec.kind {
        FieldKind::Categorical { values } => {
            if values.iter().any(|allowed| allowed == raw) {
                Ok(())
            } else {
                Err(FieldError::InvalidChoice {
                    label: spec.label.clone(),
                    allowed: values.clone(),
                })
            }
        }
        FieldKind::IntegerRange { min, max } => {
            let value: i64 = raw.parse().map_err(|_| FieldError::InvalidInteger {
                label: spec.label.clone(),
            })?;
            if value < *min {
                return Err(FieldError::BelowMinimum {
                    label: spec.label.clone(),
                    min: FeatureValue::Int(*min),
                });
            }
            if value > *max {
                return Err(FieldError::AboveMaximum {
                    label: spec.label.clone(),
                    max: FeatureValue::Int(*max),
                });
            }
            Ok(())
        }
        FieldKind::RealRange { min, max } => {
            let value: f64 = raw.parse().map_err(|_| FieldError::InvalidReal {
                label: spec.label.clone(),
            })?;
            // The float parser accepts NaN and infinities; a decimal field
            // must not.
            if !value.is_finite() {
                return Err(FieldError::InvalidReal {
                    label: spec.label.clone(),
                });
            }
            if value < *min {
                return Err(FieldError::BelowMinimum {
                    label: spec.label.clone(),
                    min: FeatureValue::Real(*min),
                });
            }
            if value > *max {
                return Err(FieldError::AboveMaximum {
                    label: spec.label.clone(),
                    max: FeatureValue::Real(*max),
                });
            }
            Ok(())
        }
    }
}

/// Validate a whole submission against the schema.
///
/// The presence pass covers every field before any value is inspected: a
/// submission missing any parameter gets the generic rejection even when
/// some value that is present is also invalid. Parameters the schema does
/// not declare are ignored.
pub fn validate_request(schema: &Schema, raw: &RawRequest) -> Result<(), RequestRejection> {
    if schema.field_names().any(|name| !raw.contains_key(name)) {
        return Err(RequestRejection::MissingParameters);
    }
    for spec in schema.fields() {
        let Some(value) = raw.get(spec.name.as_str()) else {
            return Err(RequestRejection::MissingParameters);
        };
        validate_field(value, spec)?;
    }
    Ok(())
}
