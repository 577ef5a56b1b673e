//! Parse state and the dynamically-typed values that parsers produce.

use core::fmt;

use crate::error::{Error, ErrorKind};

/// A value produced by a successful parse step.
///
/// Different primitives produce differently-shaped results (`literal` and
/// `letters` produce text, `digit` and `digits` produce numbers, `sequence`
/// produces an ordered list of its sub-parsers' results), so the result slot
/// of [`ParseState`] is dynamically typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// No value has been produced yet. This is the result of a freshly
    /// created state, before any parser has run.
    #[default]
    Null,
    /// A matched piece of text.
    Str(String),
    /// A numeric value, as produced by [`digit`](crate::primitive::digit) and
    /// [`digits`](crate::primitive::digits).
    Num(u64),
    /// An ordered sequence of prior results, as produced by
    /// [`sequence`](crate::combinator::sequence).
    Seq(Vec<Value>),
}

impl Value {
    /// If this value is text, get it as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If this value is numeric, get the number.
    pub fn as_num(&self) -> Option<u64> {
        match self {
            Value::Num(x) => Some(*x),
            _ => None,
        }
    }

    /// If this value is a sequence, get its elements.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(xs) => Some(xs),
            _ => None,
        }
    }

    /// Returns `true` if no value has been produced.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<u64> for Value {
    fn from(x: u64) -> Self {
        Value::Num(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(xs: Vec<Value>) -> Self {
        Value::Seq(xs)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Str(s) => write!(f, "{}", s),
            Value::Num(x) => write!(f, "{}", x),
            Value::Seq(xs) => {
                write!(f, "[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", x)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// The immutable snapshot threaded through every parsing step.
///
/// A state borrows the full input text for the duration of a run and carries
/// a byte cursor into it, the last successfully produced [`Value`], and the
/// error of the first failure, if any. Parsers never mutate a state in
/// place: each step consumes the incoming state and returns a new one.
///
/// The cursor only ever increases, and only on success. Once a state has
/// failed, every later step must return it untouched, so the index and error
/// of the *first* failure survive to the end of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseState<'a> {
    input: &'a str,
    index: usize,
    result: Value,
    error: Option<Error>,
}

impl<'a> ParseState<'a> {
    /// Create the initial state for a run over the given input: cursor at
    /// zero, no result, no error.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            result: Value::Null,
            error: None,
        }
    }

    /// The full original input text.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The byte offset up to which input has been successfully consumed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The last successfully produced value.
    ///
    /// Once the state has failed this is no longer meaningful.
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// The error of the first failure, if the state has failed.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns `true` if a step has failed during this run.
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// The input remaining beyond the cursor. Matchers must anchor their
    /// patterns to the start of this slice.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.index..]
    }

    /// Advance the cursor by `len` bytes and set the result, yielding the
    /// successor state of a successful match.
    pub fn advance(mut self, len: usize, result: Value) -> Self {
        self.index += len;
        self.result = result;
        self
    }

    /// Replace the result, leaving the cursor where it is.
    pub fn with_result(mut self, result: Value) -> Self {
        self.result = result;
        self
    }

    /// Apply a transformation to the result, leaving the cursor where it is.
    pub fn map_result<F: FnOnce(Value) -> Value>(mut self, f: F) -> Self {
        self.result = f(core::mem::take(&mut self.result));
        self
    }

    /// Mark the state as failed with the given error kind at the current
    /// cursor position.
    pub fn with_error(self, kind: ErrorKind) -> Self {
        let index = self.index;
        self.with_error_at(index, kind)
    }

    /// Mark the state as failed with the given error kind at an explicit
    /// position.
    pub fn with_error_at(mut self, index: usize, kind: ErrorKind) -> Self {
        self.error = Some(Error::at(index, kind));
        self
    }

    /// Replace this state's error with a transformation of it. Has no effect
    /// on a healthy state.
    pub fn map_error<F: FnOnce(Error) -> Error>(mut self, f: F) -> Self {
        self.error = self.error.take().map(f);
        self
    }

    /// Take the result out of the state, leaving [`Value::Null`] behind.
    pub fn take_result(&mut self) -> Value {
        core::mem::take(&mut self.result)
    }

    /// Convert the final state of a run into a [`Result`], yielding the
    /// produced value on success or the first failure's error otherwise.
    pub fn into_result(self) -> Result<Value, Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_healthy_and_empty() {
        let state = ParseState::new("hello");
        assert_eq!(state.index(), 0);
        assert!(state.result().is_null());
        assert!(!state.has_failed());
        assert_eq!(state.remaining(), "hello");
    }

    #[test]
    fn advance_moves_the_cursor_and_sets_the_result() {
        let state = ParseState::new("hello").advance(2, Value::from("he"));
        assert_eq!(state.index(), 2);
        assert_eq!(state.remaining(), "llo");
        assert_eq!(state.result(), &Value::from("he"));
    }

    #[test]
    fn with_error_records_the_current_index() {
        let state = ParseState::new("hello")
            .advance(3, Value::from("hel"))
            .with_error(ErrorKind::EndOfInput);
        assert!(state.has_failed());
        assert_eq!(state.error().map(|e| e.index()), Some(3));
    }

    #[test]
    fn into_result_prefers_the_error() {
        let err = ParseState::new("x")
            .with_error(ErrorKind::NoAlternativeMatched)
            .into_result();
        assert!(err.is_err());

        let ok = ParseState::new("x")
            .with_result(Value::from(7))
            .into_result();
        assert_eq!(ok, Ok(Value::Num(7)));
    }

    #[test]
    fn value_display_is_compact() {
        let v = Value::Seq(vec![Value::from("a"), Value::from(1), Value::Null]);
        assert_eq!(v.to_string(), "[a, 1, null]");
    }
}
