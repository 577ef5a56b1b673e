use parsnip::prelude::*;

#[test]
fn sequence_collects_results_in_application_order() {
    let state = sequence([literal("a"), literal("n"), literal("i")]).run("ani");
    assert!(!state.has_failed());
    assert_eq!(
        state.result(),
        &Value::Seq(vec![
            Value::from("a"),
            Value::from("n"),
            Value::from("i"),
        ]),
    );
    assert_eq!(state.index(), 3);
}

#[test]
fn sequence_results_can_be_reshaped_with_map() {
    let decorated = sequence([literal("a"), literal("n"), literal("i")]).map(|value| {
        match value {
            Value::Seq(items) => Value::Seq(
                items
                    .into_iter()
                    .map(|item| Value::Str(format!("* - {}", item)))
                    .collect(),
            ),
            other => other,
        }
    });

    let state = decorated.run("ani");
    assert_eq!(
        state.result(),
        &Value::Seq(vec![
            Value::from("* - a"),
            Value::from("* - n"),
            Value::from("* - i"),
        ]),
    );
}

#[test]
fn sequence_stops_at_the_first_failing_step() {
    let state = sequence([literal("a"), literal("z")]).run("ab");
    let err = state.error().expect("should have failed");
    assert_eq!(err.index(), 1);
    match err.kind() {
        ErrorKind::SequenceStepFailed { step, cause } => {
            assert_eq!(*step, 1);
            assert_eq!(cause.index(), 1);
            assert_eq!(
                cause.kind(),
                &ErrorKind::LiteralMismatch {
                    expected: "z".to_string()
                },
            );
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn choice_returns_the_first_alternative_that_matches() {
    let ab = choice([literal("a"), literal("b")]);
    let state = ab.run("b");
    assert!(!state.has_failed());
    assert_eq!(state.result(), &Value::from("b"));
}

#[test]
fn choice_fails_at_the_original_index_when_nothing_matches() {
    let state = choice([literal("a"), literal("b")]).run("c");
    let err = state.error().expect("should have failed");
    assert_eq!(err.index(), 0);
    assert_eq!(err.kind(), &ErrorKind::NoAlternativeMatched);
}

#[test]
fn choice_retries_each_alternative_from_the_same_state() {
    // The first alternative consumes "a" before failing on "b"; the second
    // must still see the input from the original position
    let state = choice([literal("ab"), literal("ax"), literal("a")]).run("ay");
    assert!(!state.has_failed());
    assert_eq!(state.result(), &Value::from("a"));
    assert_eq!(state.index(), 1);
}

#[test]
fn failed_sequence_is_recoverable_inside_choice() {
    // The sequence consumes "a" and then fails; choice must treat that as a
    // candidate rejection and try the literal instead
    let parser = choice([
        sequence([literal("a"), literal("z")]).boxed(),
        literal("ab").boxed(),
    ]);

    let state = parser.run("ab");
    assert!(!state.has_failed());
    assert_eq!(state.result(), &Value::from("ab"));
    assert_eq!(state.index(), 2);
}

#[test]
fn map_carries_the_inner_failure_through_verbatim() {
    let plain = literal("a").run("b");
    let mapped = literal("a").map(|_| Value::from("never")).run("b");
    assert_eq!(mapped.error(), plain.error());
    assert_eq!(mapped.index(), plain.index());
}

#[test]
fn map_carries_index_and_input_through_on_success() {
    let doubled = digits().map(|value| match value {
        Value::Num(x) => Value::Num(x * 2),
        other => other,
    });

    let out = doubled.run("21!");
    assert_eq!(out.result(), &Value::from(42));
    assert_eq!(out.index(), 2);
    assert_eq!(out.input(), "21!");
}

#[test]
fn or_behaves_like_a_two_way_choice() {
    let yes_or_no = literal("yes").or(literal("no"));
    assert_eq!(yes_or_no.run("no").result(), &Value::from("no"));

    let state = yes_or_no.run("maybe");
    let err = state.error().expect("should have failed");
    assert_eq!(err.index(), 0);
    assert_eq!(err.kind(), &ErrorKind::NoAlternativeMatched);
}

#[test]
fn every_combinator_passes_a_failed_state_through_untouched() {
    let failed = literal("z").run("abc");
    assert!(failed.has_failed());

    let through_literal = literal("a").apply(failed.clone());
    let through_letters = letters().apply(failed.clone());
    let through_digit = digit().apply(failed.clone());
    let through_digits = digits().apply(failed.clone());
    let through_map = literal("a").map(|v| v).apply(failed.clone());
    let through_sequence = sequence([literal("a"), literal("b")]).apply(failed.clone());
    let through_choice = choice([literal("a"), literal("b")]).apply(failed.clone());
    let through_or = literal("a").or(literal("b")).apply(failed.clone());

    assert_eq!(through_literal, failed);
    assert_eq!(through_letters, failed);
    assert_eq!(through_digit, failed);
    assert_eq!(through_digits, failed);
    assert_eq!(through_map, failed);
    assert_eq!(through_sequence, failed);
    assert_eq!(through_choice, failed);
    assert_eq!(through_or, failed);
}

#[test]
fn composed_parsers_nest_arbitrarily() {
    // key=value pairs where the value is either letters or digits
    let pair = sequence([
        letters().boxed(),
        literal("=").boxed(),
        choice([letters().boxed(), digits().boxed()]).boxed(),
    ]);

    let state = pair.run("port=8080");
    assert_eq!(
        state.result(),
        &Value::Seq(vec![
            Value::from("port"),
            Value::from("="),
            Value::from(8080),
        ]),
    );

    let state = pair.run("host=local");
    assert_eq!(
        state.result(),
        &Value::Seq(vec![
            Value::from("host"),
            Value::from("="),
            Value::from("local"),
        ]),
    );
}

#[test]
fn a_shared_parser_can_run_on_many_threads() {
    use std::thread;

    let parser = sequence([literal("a"), literal("n"), literal("i")]);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let state = parser.run("ani");
                assert!(!state.has_failed());
                assert_eq!(state.index(), 3);
            });
        }
    });
}
