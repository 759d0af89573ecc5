//! The inequality notation: a single variable constrained by one or
//! two comparisons, such as `x < 5`, `3 <= x < 10` or `x = 2`.

use regex::Regex;

use crate::endpoint::Endpoint;
use crate::notation::{format_value, Notation, ParseError};
use crate::numeric::parse_number;
use crate::Interval;

/// Intervals written as variable constraints.
///
/// A two-term form bounds the variable on one side (`x < 5`,
/// `3 <= x`), the chained form on both (`3 < x <= 10`), and `=` pins
/// it to a single value. The variable may be any identifier and both
/// comparison directions are accepted; the rendered form always uses
/// `x` and ascending comparisons.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ei, ue};
/// use interval_algebra::notation::inequality::InequalityNotation;
/// use interval_algebra::notation::Notation;
///
/// let notation = InequalityNotation::new();
///
/// assert_eq!(notation.parse("x < 5").unwrap(), ue(5.0));
/// assert_eq!(notation.parse("3 < x <= 10").unwrap(), ei(3.0, 10.0));
/// assert_eq!(notation.format(&ei(3.0, 10.0)), "3 < x <= 10");
/// ```
pub struct InequalityNotation {
	regex: Regex,
}

impl InequalityNotation {
	/// Compiles the literal syntax.
	pub fn new() -> InequalityNotation {
		InequalityNotation {
			regex: Regex::new(
				r"(?i)^\s*([+-]?(?:\d+(?:\.\d+)?|inf(?:inity)?|∞)|[a-z]\w*)\s*(<=|>=|<|>|=)\s*([+-]?(?:\d+(?:\.\d+)?|inf(?:inity)?|∞)|[a-z]\w*)\s*(?:(<=|>=|<|>|=)\s*([+-]?(?:\d+(?:\.\d+)?|inf(?:inity)?|∞)))?\s*$",
			)
			.unwrap(),
		}
	}
}

impl Default for InequalityNotation {
	fn default() -> Self {
		InequalityNotation::new()
	}
}

impl Notation for InequalityNotation {
	fn format(&self, interval: &Interval) -> String {
		if let Some(value) = interval.single_value() {
			return format!("x = {}", format_value(value));
		}
		match (interval.is_left_bounded(), interval.is_right_bounded()) {
			(false, false) => "-∞ < x < ∞".to_owned(),
			(true, false) => format!(
				"x {} {}",
				if interval.is_left_closed() { ">=" } else { ">" },
				format_value(interval.from().value()),
			),
			(false, true) => format!(
				"x {} {}",
				if interval.is_right_closed() { "<=" } else { "<" },
				format_value(interval.to().value()),
			),
			(true, true) => format!(
				"{} {} x {} {}",
				format_value(interval.from().value()),
				if interval.is_left_closed() { "<=" } else { "<" },
				if interval.is_right_closed() { "<=" } else { "<" },
				format_value(interval.to().value()),
			),
		}
	}

	fn parse(&self, input: &str) -> Result<Interval, ParseError> {
		let captures = self
			.regex
			.captures(input)
			.ok_or_else(|| ParseError::Syntax(input.to_owned()))?;

		let term1 = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
		let op1 = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
		let term2 = captures.get(3).map(|m| m.as_str()).unwrap_or_default();
		let op2 = captures.get(4).map(|m| m.as_str());
		let term3 = captures.get(5).map(|m| m.as_str());

		let first = parse_number(term1).ok();
		let second = parse_number(term2).ok();

		let mut interval = Interval::new();

		match (first, second, op2, term3) {
			//chained form: number op variable op number
			(Some(lower), None, Some(op2), Some(term3)) => {
				let upper = parse_number(term3)?;
				match (op1, op2) {
					("<" | "<=", "<" | "<=") => {
						interval
							.set_from(Endpoint::new(lower, op1 == "<=")?)?;
						interval.set_to(Endpoint::new(upper, op2 == "<=")?)?;
					}
					(">" | ">=", ">" | ">=") => {
						interval
							.set_from(Endpoint::new(upper, op2 == ">=")?)?;
						interval.set_to(Endpoint::new(lower, op1 == ">=")?)?;
					}
					_ => return Err(ParseError::Syntax(input.to_owned())),
				}
			}
			//variable on the left: x op number
			(None, Some(bound), None, None) => match op1 {
				"=" => {
					let endpoint = Endpoint::new(bound, true)?;
					interval.set_from(endpoint)?;
					interval.set_to(endpoint)?;
				}
				"<" | "<=" => {
					interval.set_to(Endpoint::new(bound, op1 == "<=")?)?;
				}
				">" | ">=" => {
					interval.set_from(Endpoint::new(bound, op1 == ">=")?)?;
				}
				_ => return Err(ParseError::Syntax(input.to_owned())),
			},
			//variable on the right: number op variable
			(Some(bound), None, None, None) => match op1 {
				"=" => {
					let endpoint = Endpoint::new(bound, true)?;
					interval.set_from(endpoint)?;
					interval.set_to(endpoint)?;
				}
				"<" | "<=" => {
					interval.set_from(Endpoint::new(bound, op1 == "<=")?)?;
				}
				">" | ">=" => {
					interval.set_to(Endpoint::new(bound, op1 == ">=")?)?;
				}
				_ => return Err(ParseError::Syntax(input.to_owned())),
			},
			//exactly one of the first two terms must be the variable
			_ => return Err(ParseError::Syntax(input.to_owned())),
		}

		Ok(interval)
	}
}
