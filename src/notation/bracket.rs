//! The bracket notation: `[0, 5)`, `(-∞, 3.5]`, `]0, 1[`, the integer
//! double-dot form `1..5`, the degenerate form `{2}` and the empty set
//! symbol `∅`.

use regex::Regex;

use crate::endpoint::Endpoint;
use crate::error::ValidationError;
use crate::interval::Domain;
use crate::notation::{format_value, Notation, ParseError};
use crate::numeric::{is_integral, parse_number};
use crate::Interval;

/// The default textual convention for intervals.
///
/// A closing square bracket includes its endpoint, everything else
/// (round brackets, reversed square brackets, or no bracket at all)
/// excludes it. `1..5` reads as the closed integer interval `[1, 5]`,
/// `{v}` as the degenerate interval holding exactly `v`, and `∅` or
/// `{}` as the empty set.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ee, ie};
/// use interval_algebra::notation::bracket::BracketNotation;
/// use interval_algebra::notation::Notation;
///
/// let notation = BracketNotation::new();
///
/// assert_eq!(notation.parse("[0, 5)").unwrap(), ie(0.0, 5.0));
/// assert_eq!(notation.parse("]0, 1[").unwrap(), ee(0.0, 1.0));
/// assert_eq!(notation.format(&ie(0.0, 5.0)), "[0, 5)");
/// ```
pub struct BracketNotation {
	regex: Regex,
}

impl BracketNotation {
	/// Compiles the literal syntax.
	pub fn new() -> BracketNotation {
		BracketNotation {
			regex: Regex::new(
				r"(?i)^\s*([(\[\]{])?\s*([+-]?(?:\d+(?:\.\d+)?|inf(?:inity)?|∞)|∅)?\s*(,|\.\.)?\s*([+-]?(?:\d+(?:\.\d+)?|inf(?:inity)?|∞))?\s*([)\[\]}])?\s*$",
			)
			.unwrap(),
		}
	}
}

impl Default for BracketNotation {
	fn default() -> Self {
		BracketNotation::new()
	}
}

impl Notation for BracketNotation {
	fn format(&self, interval: &Interval) -> String {
		if interval.is_empty() {
			return "∅".to_owned();
		}
		if let Some(value) = interval.single_value() {
			return format!("{{{}}}", format_value(value));
		}
		if interval.domain() == Domain::Integer && interval.is_bounded() {
			//normalize open integer bounds to the closed equivalent
			let from = if interval.is_left_closed() {
				interval.from().value()
			} else {
				interval.from().value() + 1.0
			};
			let to = if interval.is_right_closed() {
				interval.to().value()
			} else {
				interval.to().value() - 1.0
			};
			return format!("{}..{}", format_value(from), format_value(to));
		}
		format!(
			"{}{}, {}{}",
			if interval.is_left_closed() { '[' } else { '(' },
			format_value(interval.from().value()),
			format_value(interval.to().value()),
			if interval.is_right_closed() { ']' } else { ')' },
		)
	}

	fn parse(&self, input: &str) -> Result<Interval, ParseError> {
		let captures = self
			.regex
			.captures(input)
			.ok_or_else(|| ParseError::Syntax(input.to_owned()))?;

		let open = captures.get(1).map(|m| m.as_str());
		let first = captures.get(2).map(|m| m.as_str());
		let separator = captures.get(3).map(|m| m.as_str());
		let second = captures.get(4).map(|m| m.as_str());
		let close = captures.get(5).map(|m| m.as_str());

		//the empty set symbol stands alone
		if first == Some("∅") {
			if open.is_none()
				&& separator.is_none()
				&& second.is_none()
				&& close.is_none()
			{
				return Ok(Interval::empty());
			}
			return Err(ParseError::Syntax(input.to_owned()));
		}

		//curly brackets: {} is empty, {v} is degenerate
		if open == Some("{") || close == Some("}") {
			if open != Some("{")
				|| close != Some("}")
				|| separator.is_some()
				|| second.is_some()
			{
				return Err(ParseError::Syntax(input.to_owned()));
			}
			let token = match first {
				Some(token) => token,
				None => return Ok(Interval::empty()),
			};
			let value = parse_number(token)?;
			let domain = if is_integral(value) {
				Domain::Integer
			} else {
				Domain::Float
			};
			let endpoint = Endpoint::new(value, true)?;
			return Ok(Interval::from_endpoints(domain, endpoint, endpoint)?);
		}

		//the double-dot form is the closed integer interval
		if separator == Some("..") {
			let (first, second) = match (first, second) {
				(Some(first), Some(second)) => (first, second),
				_ => return Err(ParseError::Syntax(input.to_owned())),
			};
			let from_value = parse_number(first)?;
			let to_value = parse_number(second)?;
			for value in [from_value, to_value] {
				if value.is_infinite() {
					return Err(ParseError::Syntax(input.to_owned()));
				}
				if !is_integral(value) {
					return Err(ParseError::Validation(
						ValidationError::NotInDomain {
							value,
							domain: Domain::Integer,
						},
					));
				}
			}
			return Ok(Interval::from_endpoints(
				Domain::Integer,
				Endpoint::new(from_value, true)?,
				Endpoint::new(to_value, true)?,
			)?);
		}

		//plain bracket form, both terms required
		let (first, second) = match (first, second) {
			(Some(first), Some(second)) if separator == Some(",") => {
				(first, second)
			}
			_ => return Err(ParseError::Syntax(input.to_owned())),
		};
		let from = Endpoint::new(parse_number(first)?, open == Some("["))?;
		let to = Endpoint::new(parse_number(second)?, close == Some("]"))?;
		Ok(Interval::from_endpoints(Domain::Float, from, to)?)
	}
}
