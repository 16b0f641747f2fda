//! Classification strategies over encoded feature vectors.
//!
//! The server holds a classifier as a trait object, so swapping the
//! placeholder for a trained model is a wiring change, not an interface
//! change.

use cardio_model::{AGE_COLUMN, FeatureVector, Prediction};

/// A binary screening classifier.
pub trait Classifier: Send + Sync {
    /// Classify an encoded submission.
    fn predict(&self, features: &FeatureVector) -> Prediction;
}

/// Stand-in strategy until a trained model is wired up: flags elevated risk
/// when the age feature reaches the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeThresholdClassifier {
    threshold: f64,
}

impl AgeThresholdClassifier {
    pub const DEFAULT_THRESHOLD: f64 = 40.0;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for AgeThresholdClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Classifier for AgeThresholdClassifier {
    /// A vector too short to carry an age column classifies as low risk;
    /// encoding guarantees full-length vectors, so that arm is never hit in
    /// normal operation.
    fn predict(&self, features: &FeatureVector) -> Prediction {
        match features.value(AGE_COLUMN) {
            Some(age) if age.as_f64() >= self.threshold => Prediction::Elevated,
            _ => Prediction::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardio_model::FeatureValue;

    fn vector_with_age(age: i64) -> FeatureVector {
        let mut values = vec![FeatureValue::Int(0); 13];
        values[AGE_COLUMN] = FeatureValue::Int(age);
        FeatureVector::new(values)
    }

    #[test]
    fn threshold_is_inclusive() {
        let classifier = AgeThresholdClassifier::default();
        assert_eq!(classifier.predict(&vector_with_age(39)), Prediction::Low);
        assert_eq!(
            classifier.predict(&vector_with_age(40)),
            Prediction::Elevated
        );
        assert_eq!(
            classifier.predict(&vector_with_age(41)),
            Prediction::Elevated
        );
    }

    #[test]
    fn custom_threshold_moves_the_boundary() {
        let classifier = AgeThresholdClassifier::new(65.0);
        assert_eq!(classifier.predict(&vector_with_age(64)), Prediction::Low);
        assert_eq!(
            classifier.predict(&vector_with_age(65)),
            Prediction::Elevated
        );
    }

    #[test]
    fn short_vector_classifies_low() {
        let classifier = AgeThresholdClassifier::default();
        let stub = FeatureVector::new(vec![FeatureValue::Int(1)]);
        assert_eq!(classifier.predict(&stub), Prediction::Low);
    }

    #[test]
    fn strategies_swap_behind_the_trait() {
        struct AlwaysElevated;

        impl Classifier for AlwaysElevated {
            fn predict(&self, _features: &FeatureVector) -> Prediction {
                Prediction::Elevated
            }
        }

        let classifier: &dyn Classifier = &AlwaysElevated;
        assert_eq!(
            classifier.predict(&vector_with_age(5)),
            Prediction::Elevated
        );
    }
}
