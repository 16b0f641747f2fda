use std::collections::BTreeMap;

/// Raw form submission: parameter name to submitted string, untrimmed.
///
/// A `BTreeMap` keeps log output and test fixtures deterministic; validation
/// order comes from the schema, never from map order.
pub type RawRequest = BTreeMap<String, String>;
