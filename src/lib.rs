#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

/// Combinators that build larger parsers out of existing ones.
pub mod combinator;
/// Parse error types.
pub mod error;
/// Parser primitives that match specific text patterns.
pub mod primitive;
/// Parse state and the values parsers produce.
pub mod state;

pub use crate::{
    error::{Error, ErrorKind},
    state::{ParseState, Value},
};

use crate::combinator::{Map, Or};
use std::rc::Rc;

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::{
        combinator::{choice, sequence},
        error::{Error, ErrorKind},
        primitive::{digit, digits, letters, literal},
        state::{ParseState, Value},
        BoxedParser, Parser,
    };
}

/// A trait implemented by parsers.
///
/// A parser is an immutable, stateless wrapper around a pure transformation
/// from one [`ParseState`] to another: a step either advances the cursor and
/// sets a result, or marks the state as failed, after which every remaining
/// step passes it through untouched. Parsers are built once by composition
/// and may be run against arbitrarily many inputs; each [`Parser::run`] call
/// allocates its own fresh state, so a composed parser can be shared freely
/// (including across threads, for every parser type other than the
/// deliberately single-threaded [`BoxedParser`]).
pub trait Parser {
    /// Apply this parser to a state, producing the successor state.
    ///
    /// This is the one capability a parser must provide; everything else is
    /// built on top of it. Implementations must return an already-failed
    /// incoming state untouched, must only ever move the cursor forwards,
    /// and on success must advance it by exactly the matched length.
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a>;

    /// Run this parser against an input from the beginning, returning the
    /// final state.
    ///
    /// This is the sole entry point for executing a parser: it builds the
    /// initial state (cursor at zero, no result, no error) and applies the
    /// composed transformation to it. Use [`ParseState::into_result`] on the
    /// returned state to get a [`Result`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let word = letters();
    ///
    /// assert_eq!(word.run("hey").into_result(), Ok(Value::from("hey")));
    /// assert!(word.run("123").into_result().is_err());
    /// ```
    fn run<'a>(&self, input: &'a str) -> ParseState<'a>
    where
        Self: Sized,
    {
        self.apply(ParseState::new(input))
    }

    /// Transform the result of this parser with the given function.
    ///
    /// If the inner parser fails, the failed state is returned as-is — the
    /// transformation is never applied to a failure and never discards one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let shouted = letters().map(|value| match value {
    ///     Value::Str(s) => Value::Str(s.to_uppercase()),
    ///     other => other,
    /// });
    ///
    /// assert_eq!(shouted.run("hey").result(), &Value::from("HEY"));
    /// ```
    fn map<F: Fn(Value) -> Value>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map(self, f)
    }

    /// Parse with this parser or, if it fails, with another.
    ///
    /// Both alternatives are tried from the same incoming state. If both
    /// fail, the error is [`ErrorKind::NoAlternativeMatched`] at the
    /// original cursor position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let yes_or_no = literal("yes").or(literal("no"));
    ///
    /// assert_eq!(yes_or_no.run("no").result(), &Value::from("no"));
    /// assert!(yes_or_no.run("maybe").has_failed());
    /// ```
    fn or<P: Parser>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Box the parser, erasing its concrete type.
    ///
    /// Boxing is how parsers of different types end up in one
    /// [`sequence`](crate::combinator::sequence) or
    /// [`choice`](crate::combinator::choice) list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let value = choice([letters().boxed(), digits().boxed()]);
    ///
    /// assert_eq!(value.run("abc").result(), &Value::from("abc"));
    /// assert_eq!(value.run("123").result(), &Value::from(123));
    /// ```
    fn boxed<'p>(self) -> BoxedParser<'p>
    where
        Self: Sized + 'p,
    {
        BoxedParser(Rc::new(self))
    }
}

impl<T: Parser + ?Sized> Parser for &T {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        (**self).apply(state)
    }
}

impl<T: Parser + ?Sized> Parser for Box<T> {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        (**self).apply(state)
    }
}

impl<T: Parser + ?Sized> Parser for Rc<T> {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        (**self).apply(state)
    }
}

/// See [`Parser::boxed`].
///
/// The inner value is an [`Rc`] rather than a [`Box`] so that cloning a
/// boxed parser is cheap and never re-runs composition.
pub struct BoxedParser<'p>(Rc<dyn Parser + 'p>);

impl<'p> Clone for BoxedParser<'p> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'p> Parser for BoxedParser<'p> {
    fn apply<'a>(&self, state: ParseState<'a>) -> ParseState<'a> {
        self.0.apply(state)
    }
}
