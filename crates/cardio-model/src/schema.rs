use std::collections::BTreeMap;

use crate::error::UnknownField;
use crate::field::FieldSpec;

/// Number of clinical parameters in a screening submission.
pub const FIELD_COUNT: usize = 13;

/// Field names in the order per-field validation runs.
///
/// Age is deliberately first: an out-of-range age is reported before any
/// other defect. [`Schema::clinical`] declares its fields in exactly this
/// order.
pub const CHECK_ORDER: [&str; FIELD_COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// Column order of the encoded feature vector.
///
/// This is the layout of the Cleveland training data and the contract every
/// classifier is written against. It differs from the validation order: age
/// is checked first but encoded second, after sex.
pub const COLUMN_ORDER: [&str; FIELD_COUNT] = [
    "sex", "age", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// Vector position of the age feature.
pub const AGE_COLUMN: usize = 1;

/// Immutable description of the screening form: which fields exist, what
/// each is called on rendered pages, and what rule each value must satisfy.
///
/// Field iteration order is the validation order. The first field whose
/// check fails decides the rejection message the user sees.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    index: BTreeMap<String, usize>,
}

impl Schema {
    /// Build a schema from an ordered field list.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let mut index = BTreeMap::new();
        for (position, spec) in fields.iter().enumerate() {
            let previous = index.insert(spec.name.clone(), position);
            debug_assert!(previous.is_none(), "duplicate field name {}", spec.name);
            debug_assert!(
                spec.kind.is_well_formed(),
                "malformed rule for field {}",
                spec.name
            );
        }
        Self { fields, index }
    }

    /// The thirteen-parameter heart-disease screening schema.
    ///
    /// Labels are what pages and rejection messages show. Categorical value
    /// lists are in Russian because that is the language of the intake form;
    /// they are index-encoded in the order given here.
    pub fn clinical() -> Self {
        Self::new(vec![
            FieldSpec::integer("age", "Age", 1, 120),
            FieldSpec::categorical("sex", "Sex", &["Мужской", "Женский"]),
            FieldSpec::categorical(
                "cp",
                "Chest pain type",
                &[
                    "Отсутствуют",
                    "Типичная стенокардия",
                    "Атипичная стенокардия",
                    "Неангинозная боль",
                ],
            ),
            FieldSpec::integer("trestbps", "Resting blood pressure", 80, 220),
            FieldSpec::integer("chol", "Serum cholesterol", 100, 600),
            FieldSpec::integer("fbs", "Fasting blood sugar", 50, 400),
            FieldSpec::categorical(
                "restecg",
                "Resting ECG result",
                &[
                    "В норме",
                    "Есть отклонения ST-T",
                    "Гипертрофия левого желудочка",
                ],
            ),
            FieldSpec::integer("thalach", "Maximum heart rate", 60, 220),
            FieldSpec::categorical("exang", "Exercise-induced angina", &["Нет", "Да"]),
            FieldSpec::real("oldpeak", "ST depression", 0.0, 7.0),
            FieldSpec::categorical(
                "slope",
                "ST segment slope",
                &["Ровный", "Восходящий", "Нисходящий"],
            ),
            FieldSpec::integer("ca", "Major vessels colored", 0, 3),
            FieldSpec::categorical(
                "thal",
                "Thalassemia",
                &["Нормальный", "Фиксированный дефект", "Обратимый дефект"],
            ),
        ])
    }

    /// Look up a field by its submission name.
    ///
    /// An `Err` means the caller asked for a field this schema never
    /// declared, which is a wiring bug rather than bad user input.
    pub fn get(&self, name: &str) -> Result<&FieldSpec, UnknownField> {
        self.index
            .get(name)
            .and_then(|position| self.fields.get(*position))
            .ok_or_else(|| UnknownField {
                name: name.to_string(),
            })
    }

    /// Fields in validation order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Submission names in validation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|spec| spec.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
