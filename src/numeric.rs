//! Numeric token helpers shared by the core model and the notation
//! layer.
//!
//! The integer-ness rule is uniform across the crate: a value is
//! integer-typed iff it has no fractional part, regardless of the
//! token it was parsed from, and infinities count as integral.

use crate::error::ValidationError;

/// Reads a decimal number or an infinity token.
///
/// Accepts everything `f64` itself parses plus the `∞` symbol, with an
/// optional sign and surrounding whitespace. `inf` and `infinity` are
/// matched case-insensitively. NaN tokens are rejected, an interval
/// endpoint can never hold one.
///
/// # Examples
/// ```
/// use interval_algebra::numeric::parse_number;
///
/// assert_eq!(parse_number("-2.5"), Ok(-2.5));
/// assert_eq!(parse_number("INF"), Ok(f64::INFINITY));
/// assert_eq!(parse_number("-∞"), Ok(f64::NEG_INFINITY));
/// assert!(parse_number("five").is_err());
/// ```
pub fn parse_number(token: &str) -> Result<f64, ValidationError> {
	let trimmed = token.trim();

	if let Ok(value) = trimmed.parse::<f64>() {
		if value.is_nan() {
			return Err(ValidationError::Number(token.to_owned()));
		}
		return Ok(value);
	}

	let (sign, rest) = match trimmed.strip_prefix('-') {
		Some(rest) => (-1.0, rest),
		None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
	};
	if rest == "\u{221E}" {
		return Ok(sign * f64::INFINITY);
	}

	Err(ValidationError::Number(token.to_owned()))
}

/// Whether a value counts as an integer: infinite values do, NaN does
/// not, finite values iff they have no fractional part.
///
/// # Examples
/// ```
/// use interval_algebra::numeric::is_integral;
///
/// assert_eq!(is_integral(2.0), true);
/// assert_eq!(is_integral(2.5), false);
/// assert_eq!(is_integral(f64::NEG_INFINITY), true);
/// assert_eq!(is_integral(f64::NAN), false);
/// ```
pub fn is_integral(value: f64) -> bool {
	value.is_infinite() || value.fract() == 0.0
}

/// Lenient boolean coercion for endpoint specifications: `"true"` or
/// `"false"`, nothing else.
pub fn parse_inclusion(token: &str) -> Result<bool, ValidationError> {
	match token.trim() {
		"true" => Ok(true),
		"false" => Ok(false),
		_ => Err(ValidationError::Inclusion(token.to_owned())),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parse_number_accepts_decimals_and_infinities() {
		assert_eq!(parse_number("5"), Ok(5.0));
		assert_eq!(parse_number("+3"), Ok(3.0));
		assert_eq!(parse_number(" -2.25 "), Ok(-2.25));
		assert_eq!(parse_number("inf"), Ok(f64::INFINITY));
		assert_eq!(parse_number("Infinity"), Ok(f64::INFINITY));
		assert_eq!(parse_number("-INF"), Ok(f64::NEG_INFINITY));
		assert_eq!(parse_number("∞"), Ok(f64::INFINITY));
		assert_eq!(parse_number("+∞"), Ok(f64::INFINITY));
		assert_eq!(parse_number("-∞"), Ok(f64::NEG_INFINITY));
	}

	#[test]
	fn parse_number_rejects_junk_and_nan() {
		assert_eq!(
			parse_number("five"),
			Err(ValidationError::Number("five".to_owned()))
		);
		assert_eq!(
			parse_number(""),
			Err(ValidationError::Number(String::new()))
		);
		assert_eq!(
			parse_number("nan"),
			Err(ValidationError::Number("nan".to_owned()))
		);
	}

	#[test]
	fn integral_values() {
		assert_eq!(is_integral(0.0), true);
		assert_eq!(is_integral(-7.0), true);
		assert_eq!(is_integral(0.5), false);
		assert_eq!(is_integral(f64::INFINITY), true);
		assert_eq!(is_integral(f64::NEG_INFINITY), true);
		assert_eq!(is_integral(f64::NAN), false);
	}

	#[test]
	fn inclusion_tokens() {
		assert_eq!(parse_inclusion("true"), Ok(true));
		assert_eq!(parse_inclusion(" false "), Ok(false));
		assert_eq!(
			parse_inclusion("yes"),
			Err(ValidationError::Inclusion("yes".to_owned()))
		);
	}
}
