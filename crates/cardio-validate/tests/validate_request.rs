//! Whole-submission validation behavior: presence pass, check order,
//! boundary handling, and exact user-facing messages.

use cardio_model::{CHECK_ORDER, RawRequest, RequestRejection, Schema};
use cardio_validate::validate_request;

fn valid_payload() -> RawRequest {
    [
        ("age", "45"),
        ("sex", "Мужской"),
        ("cp", "Отсутствуют"),
        ("trestbps", "120"),
        ("chol", "200"),
        ("fbs", "90"),
        ("restecg", "В норме"),
        ("thalach", "150"),
        ("exang", "Нет"),
        ("oldpeak", "1.0"),
        ("slope", "Ровный"),
        ("ca", "0"),
        ("thal", "Нормальный"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

fn rejection_message(schema: &Schema, raw: &RawRequest) -> String {
    validate_request(schema, raw)
        .expect_err("payload should be rejected")
        .to_string()
}

#[test]
fn complete_payload_passes() {
    let schema = Schema::clinical();
    assert!(validate_request(&schema, &valid_payload()).is_ok());
}

#[test]
fn each_missing_field_gets_the_generic_message() {
    let schema = Schema::clinical();
    for name in CHECK_ORDER {
        let mut payload = valid_payload();
        payload.remove(name);
        let rejection = validate_request(&schema, &payload).expect_err("field is missing");
        assert_eq!(
            rejection,
            RequestRejection::MissingParameters,
            "dropping {name} should trip the presence pass"
        );
        assert_eq!(rejection.to_string(), "Not all parameters were supplied");
    }
}

#[test]
fn empty_payload_rejected() {
    let schema = Schema::clinical();
    assert_eq!(
        validate_request(&schema, &RawRequest::new()),
        Err(RequestRejection::MissingParameters)
    );
}

#[test]
fn missing_field_wins_over_invalid_value() {
    let schema = Schema::clinical();
    let mut payload = valid_payload();
    payload.remove("thal");
    payload.insert("chol".to_string(), "5000".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "Not all parameters were supplied"
    );
}

#[test]
fn categorical_match_is_case_sensitive() {
    let schema = Schema::clinical();
    let mut payload = valid_payload();
    payload.insert("sex".to_string(), "мужской".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "Sex must be one of: Мужской, Женский"
    );
}

#[test]
fn integer_bounds_are_inclusive() {
    let schema = Schema::clinical();

    for boundary in ["1", "120"] {
        let mut payload = valid_payload();
        payload.insert("age".to_string(), boundary.to_string());
        assert!(validate_request(&schema, &payload).is_ok());
    }

    let mut payload = valid_payload();
    payload.insert("age".to_string(), "0".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "Age must not be less than 1"
    );

    let mut payload = valid_payload();
    payload.insert("age".to_string(), "121".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "Age must not be greater than 120"
    );
}

#[test]
fn real_bounds_are_inclusive() {
    let schema = Schema::clinical();

    for boundary in ["0.0", "7.0", "0", "7"] {
        let mut payload = valid_payload();
        payload.insert("oldpeak".to_string(), boundary.to_string());
        assert!(validate_request(&schema, &payload).is_ok());
    }

    let mut payload = valid_payload();
    payload.insert("oldpeak".to_string(), "7.1".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "ST depression must not be greater than 7"
    );

    let mut payload = valid_payload();
    payload.insert("oldpeak".to_string(), "-0.5".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "ST depression must not be less than 0"
    );
}

#[test]
fn integer_parse_failures() {
    let schema = Schema::clinical();

    for bad in ["abc", "12.5", " 45", "45 ", ""] {
        let mut payload = valid_payload();
        payload.insert("chol".to_string(), bad.to_string());
        assert_eq!(
            rejection_message(&schema, &payload),
            "Serum cholesterol must be an integer",
            "value {bad:?} should fail integer parsing"
        );
    }
}

#[test]
fn real_parse_failures() {
    let schema = Schema::clinical();

    for bad in ["abc", "1,5", "", "NaN", "inf", "-inf"] {
        let mut payload = valid_payload();
        payload.insert("oldpeak".to_string(), bad.to_string());
        assert_eq!(
            rejection_message(&schema, &payload),
            "ST depression must be a fractional number",
            "value {bad:?} should fail decimal parsing"
        );
    }
}

#[test]
fn first_failure_follows_schema_order() {
    let schema = Schema::clinical();

    // age is checked before sex even though sex encodes first.
    let mut payload = valid_payload();
    payload.insert("age".to_string(), "200".to_string());
    payload.insert("sex".to_string(), "Other".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "Age must not be greater than 120"
    );

    // With age valid, the sex failure surfaces ahead of later fields.
    let mut payload = valid_payload();
    payload.insert("sex".to_string(), "Other".to_string());
    payload.insert("thal".to_string(), "Unknown".to_string());
    assert_eq!(
        rejection_message(&schema, &payload),
        "Sex must be one of: Мужской, Женский"
    );
}

#[test]
fn undeclared_parameters_are_ignored() {
    let schema = Schema::clinical();
    let mut payload = valid_payload();
    payload.insert("comment".to_string(), "<script>alert(1)</script>".to_string());
    assert!(validate_request(&schema, &payload).is_ok());
}
