pub mod error;
pub mod feature;
pub mod field;
pub mod prediction;
pub mod request;
pub mod schema;

pub use error::{EncodeError, FieldError, RequestRejection, UnknownField};
pub use feature::{FeatureValue, FeatureVector};
pub use field::{FieldKind, FieldSpec};
pub use prediction::Prediction;
pub use request::RawRequest;
pub use schema::{AGE_COLUMN, CHECK_ORDER, COLUMN_ORDER, FIELD_COUNT, Schema};
