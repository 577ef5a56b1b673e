#![cfg(feature = "serde")]

use parsnip::prelude::*;

#[test]
fn value_round_trips_through_json() {
    let value = Value::Seq(vec![
        Value::from("port"),
        Value::from(8080),
        Value::Null,
    ]);

    let json = serde_json::to_string(&value).expect("serialize");
    let back: Value = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, value);
}

#[test]
fn errors_serialize_with_their_position_and_cause() {
    let state = sequence([literal("a"), literal("z")]).run("ab");
    let err = state.error().expect("should have failed");

    let json = serde_json::to_value(err).expect("serialize");
    assert_eq!(json["index"], 1);
    assert_eq!(
        json["kind"]["SequenceStepFailed"]["cause"]["kind"]["LiteralMismatch"]["expected"],
        "z",
    );
}
