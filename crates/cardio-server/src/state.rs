use std::sync::Arc;

use cardio_model::Schema;
use cardio_predict::{AgeThresholdClassifier, Classifier};

/// State shared across handlers.
///
/// The router clones this per request; both members sit behind `Arc`, so a
/// clone is two reference bumps.
#[derive(Clone)]
pub struct AppState {
    schema: Arc<Schema>,
    classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(schema: Schema, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            schema: Arc::new(schema),
            classifier,
        }
    }

    /// Production wiring: the clinical schema plus the age-threshold
    /// stand-in classifier.
    pub fn clinical() -> Self {
        Self::new(
            Schema::clinical(),
            Arc::new(AgeThresholdClassifier::default()),
        )
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }
}
