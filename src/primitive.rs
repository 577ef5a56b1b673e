//! Parser primitives that match specific text patterns.
//!
//! Each primitive matches against the input remaining beyond the cursor and
//! is anchored to the start of that remainder: a pattern occurring later in
//! the remaining text is not a match. On success the cursor advances by
//! exactly the matched length; on failure the returned state carries the
//! error and the cursor stays put. A primitive handed an already-failed
//! state returns it untouched without attempting a match.

use crate::error::ErrorKind;
use crate::state::{ParseState, Value};
use crate::Parser;

/// See [`literal`].
#[derive(Clone, Debug)]
pub struct Literal(String);

impl Parser for Literal {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        let remaining = state.remaining();
        if remaining.is_empty() {
            state.with_error(ErrorKind::EndOfInput)
        } else if remaining.starts_with(&self.0) {
            let len = self.0.len();
            state.advance(len, Value::Str(self.0.clone()))
        } else {
            state.with_error(ErrorKind::LiteralMismatch {
                expected: self.0.clone(),
            })
        }
    }
}

/// A parser that matches the given text at the cursor.
///
/// On success the result is the matched text and the cursor advances past
/// it. Fails with [`ErrorKind::EndOfInput`] if no input remains, or
/// [`ErrorKind::LiteralMismatch`] if the remaining input starts with
/// anything else.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let hello = literal("hello");
///
/// assert_eq!(hello.run("hello").result(), &Value::from("hello"));
/// // Parsers do not eagerly consume input, so the suffix is left alone
/// assert_eq!(hello.run("hello!").index(), 5);
/// assert!(hello.run("goodbye").has_failed());
/// ```
pub fn literal(text: impl Into<String>) -> Literal {
    Literal(text.into())
}

/// See [`letters`].
#[derive(Copy, Clone, Debug)]
pub struct Letters;

impl Parser for Letters {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        let remaining = state.remaining();
        if remaining.is_empty() {
            return state.with_error(ErrorKind::EndOfInput);
        }
        let len = remaining
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if len == 0 {
            state.with_error(ErrorKind::NoMatch { expected: "letters" })
        } else {
            let run = &remaining[..len];
            state.advance(len, Value::Str(run.to_string()))
        }
    }
}

/// A parser that matches the maximal run of one or more ASCII letters at the
/// cursor.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let word = letters();
///
/// let state = word.run("abc123");
/// assert_eq!(state.result(), &Value::from("abc"));
/// assert_eq!(state.index(), 3);
///
/// assert!(word.run("123").has_failed());
/// assert!(word.run("").has_failed());
/// ```
pub fn letters() -> Letters {
    Letters
}

/// See [`digit`].
#[derive(Copy, Clone, Debug)]
pub struct Digit;

impl Parser for Digit {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        let remaining = state.remaining();
        match remaining.bytes().next() {
            None => state.with_error(ErrorKind::EndOfInput),
            Some(b) if b.is_ascii_digit() => {
                state.advance(1, Value::Num(u64::from(b - b'0')))
            }
            Some(_) => state.with_error(ErrorKind::NoMatch { expected: "digit" }),
        }
    }
}

/// A parser that matches exactly one ASCII digit at the cursor, producing
/// its numeric value.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let one = digit();
///
/// assert_eq!(one.run("7").result(), &Value::from(7));
/// // Only a single digit is consumed
/// assert_eq!(one.run("42").index(), 1);
/// assert!(one.run("x").has_failed());
/// ```
pub fn digit() -> Digit {
    Digit
}

/// See [`digits`].
#[derive(Copy, Clone, Debug)]
pub struct Digits;

impl Parser for Digits {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        if state.has_failed() {
            return state;
        }
        let remaining = state.remaining();
        if remaining.is_empty() {
            return state.with_error(ErrorKind::EndOfInput);
        }
        let len = remaining.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            state.with_error(ErrorKind::NoMatch { expected: "digits" })
        } else {
            // Saturates rather than panicking on runs longer than a u64
            let value = remaining[..len]
                .bytes()
                .fold(0u64, |n, b| {
                    n.saturating_mul(10).saturating_add(u64::from(b - b'0'))
                });
            state.advance(len, Value::Num(value))
        }
    }
}

/// A parser that matches the maximal run of one or more ASCII digits at the
/// cursor, producing the numeric value of the whole run.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let number = digits();
///
/// let state = number.run("123abc");
/// assert_eq!(state.result(), &Value::from(123));
/// assert_eq!(state.index(), 3);
///
/// assert!(number.run("abc").has_failed());
/// assert!(number.run("").has_failed());
/// ```
pub fn digits() -> Digits {
    Digits
}
