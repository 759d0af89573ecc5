//! The error types raised by the validating constructors, mutators and
//! operators.
//!
//! All errors are synchronous values surfaced at the point of the
//! invalid operation; nothing is clamped or coerced. Callers that want
//! to avoid them validate before constructing.

use std::fmt;

use thiserror::Error;

use crate::interval::Domain;

/// Which endpoint of an interval an [`EndpointError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	/// The lower endpoint.
	From,
	/// The upper endpoint.
	To,
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Side::From => f.write_str("from"),
			Side::To => f.write_str("to"),
		}
	}
}

/// The error returned when a raw value lies outside the domain it is
/// being stored into.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
	/// An endpoint value was NaN.
	#[error("`{0}` is not a valid endpoint value")]
	Value(f64),
	/// A token could not be read as a number or an infinity.
	#[error("`{0}` is not a valid number")]
	Number(String),
	/// An inclusion token was neither `true` nor `false`.
	#[error("`{0}` is not a valid inclusion flag, use `true` or `false`")]
	Inclusion(String),
	/// A domain token was neither `integer` nor `float`.
	#[error("`{0}` is not a valid domain, use `integer` or `float`")]
	Domain(String),
	/// A value did not fit the domain it was checked against, such as a
	/// fractional endpoint value inside an integer interval.
	#[error("`{value}` is not a valid {domain} value")]
	NotInDomain {
		/// The offending value.
		value: f64,
		/// The domain the value was checked against.
		domain: Domain,
	},
}

/// The error returned when a probe value or a second operand disagrees
/// with an interval's domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainMismatchError {
	/// A membership probe whose integer-ness disagrees with the
	/// interval's domain.
	#[error("`{value}` is not a valid {domain} value")]
	Probe {
		/// The probe value.
		value: f64,
		/// The domain of the probed interval.
		domain: Domain,
	},
	/// Two operand intervals with differing domains.
	#[error("both interval domains must match")]
	Operands,
}

/// The error returned when setting an interval endpoint from an
/// invalid specification.
///
/// The underlying [`ValidationError`] is attached as
/// [`source`](std::error::Error::source) rather than discarded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {side} endpoint")]
pub struct EndpointError {
	/// The endpoint that was being set.
	pub side: Side,
	/// The validation failure that caused the rejection.
	#[source]
	pub source: ValidationError,
}
