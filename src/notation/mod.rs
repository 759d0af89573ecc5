//! Human-readable interval notations: rendering intervals to strings
//! and reading them back.
//!
//! Notations are registered in a [`NotationRegistry`] under a string
//! key, built once at startup; the core model knows nothing about
//! them and they only go through its public accessors. Two notations
//! ship with the crate:
//!
//! - [`BracketNotation`](bracket::BracketNotation) under `"interval"`:
//!   `[0, 5)`, `(-∞, 3.5]`, `1..5`, `{2}`, `∅`.
//! - [`InequalityNotation`](inequality::InequalityNotation) under
//!   `"inequality"`: `0 <= x < 5`, `x > 3`, `x = 2`.
//!
//! The parsed domain follows the form of the literal: the double-dot
//! form is always [`Domain::Integer`](crate::Domain::Integer), the
//! degenerate form `{v}` follows the integer-ness of its value, and
//! every other form reads as a float interval. Rendering an
//! integral-valued float interval therefore does not round-trip its
//! domain; callers that care construct the interval directly.

pub mod bracket;
pub mod inequality;

use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

use crate::error::{EndpointError, ValidationError};
use crate::Interval;

/// A (format, parse) strategy pair for one textual interval
/// convention.
pub trait Notation {
	/// Renders an interval in this notation.
	fn format(&self, interval: &Interval) -> String;
	/// Reads an interval written in this notation.
	fn parse(&self, input: &str) -> Result<Interval, ParseError>;
}

/// The error returned when reading an interval from a string fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
	/// The input did not match the notation's syntax.
	#[error("`{0}` is not a valid interval literal")]
	Syntax(String),
	/// A token inside an otherwise well-formed literal failed
	/// validation.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// The parsed endpoints did not fit the inferred domain.
	#[error(transparent)]
	Endpoint(#[from] EndpointError),
	/// No notation is registered under the requested key.
	#[error("no notation registered under `{0}`")]
	UnknownNotation(String),
}

/// The startup-populated map from notation keys to strategies.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ie, ue};
/// use interval_algebra::notation::NotationRegistry;
///
/// let registry = NotationRegistry::standard();
///
/// assert_eq!(
/// 	registry.format("interval", &ie(0.0, 5.0)).unwrap(),
/// 	"[0, 5)"
/// );
/// assert_eq!(
/// 	registry.parse("inequality", "x < 2.5").unwrap(),
/// 	ue(2.5)
/// );
/// ```
pub struct NotationRegistry {
	notations: HashMap<String, Box<dyn Notation>>,
}

impl NotationRegistry {
	/// An empty registry.
	pub fn new() -> NotationRegistry {
		NotationRegistry {
			notations: HashMap::new(),
		}
	}

	/// A registry with the built-in notations registered under
	/// `"interval"` and `"inequality"`.
	pub fn standard() -> NotationRegistry {
		let mut registry = NotationRegistry::new();
		registry
			.register("interval", Box::new(bracket::BracketNotation::new()));
		registry.register(
			"inequality",
			Box::new(inequality::InequalityNotation::new()),
		);
		registry
	}

	/// Registers a notation under the given key, replacing any
	/// previous entry.
	pub fn register(
		&mut self,
		key: impl Into<String>,
		notation: Box<dyn Notation>,
	) {
		self.notations.insert(key.into(), notation);
	}

	/// Renders an interval with the notation registered under `key`.
	pub fn format(
		&self,
		key: &str,
		interval: &Interval,
	) -> Result<String, ParseError> {
		self.lookup(key).map(|notation| notation.format(interval))
	}

	/// Reads an interval with the notation registered under `key`.
	pub fn parse(&self, key: &str, input: &str) -> Result<Interval, ParseError> {
		self.lookup(key)?.parse(input)
	}

	fn lookup(&self, key: &str) -> Result<&dyn Notation, ParseError> {
		self.notations
			.get(key)
			.map(Box::as_ref)
			.ok_or_else(|| ParseError::UnknownNotation(key.to_owned()))
	}
}

impl Default for NotationRegistry {
	fn default() -> Self {
		NotationRegistry::new()
	}
}

/// Joins multiple operator result pieces with the union symbol.
///
/// # Examples
/// ```
/// use interval_algebra::interval::ii;
/// use interval_algebra::notation::{bracket::BracketNotation, format_pieces};
/// use interval_algebra::ops::complementary;
///
/// let notation = BracketNotation::new();
/// let pieces = complementary(&ii(0.0, 5.0));
///
/// assert_eq!(
/// 	format_pieces(&notation, &pieces),
/// 	"(-∞, 0) ∪ (5, ∞)"
/// );
/// ```
pub fn format_pieces<'a>(
	notation: &dyn Notation,
	pieces: impl IntoIterator<Item = &'a Interval>,
) -> String {
	pieces
		.into_iter()
		.map(|piece| notation.format(piece))
		.join(" ∪ ")
}

//plain rendering for endpoint values: infinities as the ∞ symbol,
//integral values without a trailing fraction
pub(crate) fn format_value(value: f64) -> String {
	if value == f64::INFINITY {
		"∞".to_owned()
	} else if value == f64::NEG_INFINITY {
		"-∞".to_owned()
	} else {
		format!("{value}")
	}
}
