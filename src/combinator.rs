//! Combinators that build larger parsers out of existing ones.
//!
//! All of these signal failure the same way the primitives do: through the
//! error carried on the returned state. None of them panic or unwind on a
//! failed match, so any combinator can be nested inside any other — in
//! particular, a failing [`sequence`] inside a [`choice`] is rejected like
//! any other candidate and the next alternative is tried.

use crate::error::{Error, ErrorKind};
use crate::state::{ParseState, Value};
use crate::Parser;

/// See [`Parser::map`].
#[derive(Copy, Clone)]
pub struct Map<A, F>(pub(crate) A, pub(crate) F);

impl<A: Parser, F: Fn(Value) -> Value> Parser for Map<A, F> {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        let next = self.0.apply(state);
        if next.has_failed() {
            // Failure propagates; only successful results are transformed
            next
        } else {
            next.map_result(&self.1)
        }
    }
}

/// See [`Parser::or`].
#[derive(Copy, Clone)]
pub struct Or<A, B>(pub(crate) A, pub(crate) B);

impl<A: Parser, B: Parser> Parser for Or<A, B> {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        let attempt = self.0.apply(state.clone());
        if !attempt.has_failed() {
            return attempt;
        }
        let attempt = self.1.apply(state.clone());
        if !attempt.has_failed() {
            return attempt;
        }
        let index = state.index();
        state.with_error_at(index, ErrorKind::NoAlternativeMatched)
    }
}

/// See [`sequence`].
#[derive(Clone)]
pub struct Sequence<P>(Vec<P>);

impl<P: Parser> Parser for Sequence<P> {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        let mut results = Vec::with_capacity(self.0.len());
        let mut next = state;
        for (step, parser) in self.0.iter().enumerate() {
            next = parser.apply(next);
            if next.has_failed() {
                return next.map_error(|cause| {
                    Error::at(
                        cause.index(),
                        ErrorKind::SequenceStepFailed {
                            step,
                            cause: Box::new(cause),
                        },
                    )
                });
            }
            results.push(next.take_result());
        }
        next.with_result(Value::Seq(results))
    }
}

/// A parser that applies each of the given parsers in order, threading the
/// state from one into the next and collecting every result into a
/// [`Value::Seq`] in application order.
///
/// If a sub-parser fails, the sequence stops immediately and the returned
/// state carries an [`ErrorKind::SequenceStepFailed`] locating which step
/// aborted, with the failing sub-parser's own error preserved inside it as
/// the cause. The cursor is left at the position of that first failure.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let ani = sequence([literal("a"), literal("n"), literal("i")]);
///
/// let state = ani.run("ani");
/// assert_eq!(
///     state.result(),
///     &Value::Seq(vec![
///         Value::from("a"),
///         Value::from("n"),
///         Value::from("i"),
///     ]),
/// );
/// assert_eq!(state.index(), 3);
/// ```
///
/// To put parsers of different types into one sequence, box them first:
///
/// ```
/// # use parsnip::prelude::*;
/// let assignment = sequence([
///     letters().boxed(),
///     literal("=").boxed(),
///     digits().boxed(),
/// ]);
///
/// let state = assignment.run("x=10");
/// assert_eq!(
///     state.result(),
///     &Value::Seq(vec![Value::from("x"), Value::from("="), Value::from(10)]),
/// );
/// ```
pub fn sequence<P: Parser, I: IntoIterator<Item = P>>(parsers: I) -> Sequence<P> {
    Sequence(parsers.into_iter().collect())
}

/// See [`choice`].
#[derive(Clone)]
pub struct Choice<P>(Vec<P>);

impl<P: Parser> Parser for Choice<P> {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        for parser in &self.0 {
            // Every alternative starts from the same incoming state, not
            // from whatever a failed attempt left behind
            let attempt = parser.apply(state.clone());
            if !attempt.has_failed() {
                return attempt;
            }
        }
        let index = state.index();
        state.with_error_at(index, ErrorKind::NoAlternativeMatched)
    }
}

/// A parser that tries each of the given parsers in order against the same
/// incoming state, returning the first successful result.
///
/// A failing alternative is treated as a candidate rejection, never
/// escalated; if every alternative fails, the returned state carries
/// [`ErrorKind::NoAlternativeMatched`] at the original cursor position.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let ab = choice([literal("a"), literal("b")]);
///
/// assert_eq!(ab.run("b").result(), &Value::from("b"));
///
/// let state = ab.run("c");
/// assert!(state.has_failed());
/// assert_eq!(state.error().map(|e| e.index()), Some(0));
/// ```
pub fn choice<P: Parser, I: IntoIterator<Item = P>>(parsers: I) -> Choice<P> {
    Choice(parsers.into_iter().collect())
}
