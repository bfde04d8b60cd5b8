use error_ledger::MultiError;

#[test]
fn serialize_then_deserialize_preserves_messages() {
    let mut me = MultiError::new();
    me.push("one");
    me.push("two");

    let json = serde_json::to_string(&me).unwrap();
    let back: MultiError = serde_json::from_str(&json).unwrap();

    assert_eq!(back, me);
    assert_eq!(back.to_string(), "one\ntwo");
}

#[test]
fn empty_accumulator_survives_roundtrip() {
    let me = MultiError::new();

    let json = serde_json::to_string(&me).unwrap();
    let back: MultiError = serde_json::from_str(&json).unwrap();

    assert!(back.has_failures().is_ok());
}

#[test]
fn embedded_newlines_survive_roundtrip() {
    let mut me = MultiError::new();
    me.push("line1\nline2");

    let json = serde_json::to_string(&me).unwrap();
    let back: MultiError = serde_json::from_str(&json).unwrap();

    assert_eq!(back.to_string(), "line1\nline2");
}
