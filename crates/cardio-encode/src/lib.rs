//! Turns a validated submission into the numeric feature vector classifiers
//! consume.
//!
//! Categorical values encode as their position in the field's allowed list;
//! integer and decimal values encode as the parsed number. Columns are laid
//! out in [`COLUMN_ORDER`], which is not the validation order.
//!
//! `encode` assumes the submission already passed validation. It still
//! re-checks everything it touches and reports [`EncodeError`] instead of
//! panicking, because a broken caller should cost one 500 response, not the
//! process.

use cardio_model::{
    COLUMN_ORDER, EncodeError, FeatureValue, FeatureVector, FieldKind, FieldSpec, RawRequest,
    Schema,
};

/// Encode a validated submission into a feature vector.
pub fn encode(schema: &Schema, raw: &RawRequest) -> Result<FeatureVector, EncodeError> {
    let mut values = Vec::with_capacity(COLUMN_ORDER.len());
    for name in COLUMN_ORDER {
        let spec = schema.get(name)?;
        let Some(value) = raw.get(name) else {
            return Err(EncodeError::MissingValue {
                name: name.to_string(),
            });
        };
        values.push(encode_field(value, spec)?);
    }
    Ok(FeatureVector::new(values))
}

fn encode_field(raw: &str, spec: &FieldSpec) -> Result<FeatureValue, EncodeError> {
    match &spec.kind {
        FieldKind::Categorical { values } => values
            .iter()
            .position(|allowed| allowed == raw)
            .map(|index| FeatureValue::Int(index as i64))
            .ok_or_else(|| EncodeError::UnknownChoice {
                name: spec.name.clone(),
                value: raw.to_string(),
            }),
        FieldKind::IntegerRange { .. } => {
            raw.parse()
                .map(FeatureValue::Int)
                .map_err(|_| EncodeError::NotNumeric {
                    name: spec.name.clone(),
                    value: raw.to_string(),
                })
        }
        FieldKind::RealRange { .. } => {
            raw.parse()
                .map(FeatureValue::Real)
                .map_err(|_| EncodeError::NotNumeric {
                    name: spec.name.clone(),
                    value: raw.to_string(),
                })
        }
    }
}
