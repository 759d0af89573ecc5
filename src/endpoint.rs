//! A module containing [`Endpoint`], one boundary of an interval.

use crate::error::ValidationError;
use crate::numeric::{parse_inclusion, parse_number};

/// One boundary of an interval: a value on the extended real line plus
/// whether that boundary point belongs to the set.
///
/// Endpoints are cheap value objects with structural equality; the
/// operators build new ones rather than mutating their inputs. Whether
/// a value fits the owning interval's domain is checked by
/// [`Interval`](crate::Interval), not here.
///
/// # Examples
/// ```
/// use interval_algebra::Endpoint;
///
/// let lower = Endpoint::new(0.0, true).unwrap();
///
/// assert_eq!(lower.value(), 0.0);
/// assert_eq!(lower.included(), true);
/// assert!(Endpoint::new(f64::NAN, true).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
	value: f64,
	included: bool,
}

impl Endpoint {
	/// Creates an endpoint, rejecting NaN values. Infinities are
	/// valid.
	pub fn new(value: f64, included: bool) -> Result<Endpoint, ValidationError> {
		if value.is_nan() {
			return Err(ValidationError::Value(value));
		}
		Ok(Endpoint { value, included })
	}

	/// A closed endpoint, the boundary point belongs to the set.
	///
	/// # Panics
	///
	/// Panics if `value` is NaN.
	pub fn closed(value: f64) -> Endpoint {
		Endpoint::new(value, true).unwrap()
	}

	/// An open endpoint, the boundary point is excluded.
	///
	/// # Panics
	///
	/// Panics if `value` is NaN.
	pub fn open(value: f64) -> Endpoint {
		Endpoint::new(value, false).unwrap()
	}

	/// Reads an endpoint from raw tokens: the numeric and infinity
	/// forms of [`parse_number`](crate::numeric::parse_number) for the
	/// value, `"true"` or `"false"` for the inclusion flag.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::Endpoint;
	///
	/// assert_eq!(
	/// 	Endpoint::parse("-∞", "false").unwrap(),
	/// 	Endpoint::open(f64::NEG_INFINITY)
	/// );
	/// assert!(Endpoint::parse("2", "maybe").is_err());
	/// ```
	pub fn parse(value: &str, included: &str) -> Result<Endpoint, ValidationError> {
		Endpoint::new(parse_number(value)?, parse_inclusion(included)?)
	}

	/// The boundary value.
	pub fn value(&self) -> f64 {
		self.value
	}

	/// Whether the boundary point belongs to the set.
	pub fn included(&self) -> bool {
		self.included
	}

	/// Replaces the boundary value, with the same NaN check as
	/// [`new`](Endpoint::new).
	pub fn set_value(&mut self, value: f64) -> Result<(), ValidationError> {
		if value.is_nan() {
			return Err(ValidationError::Value(value));
		}
		self.value = value;
		Ok(())
	}

	/// Replaces the inclusion flag.
	pub fn set_included(&mut self, included: bool) {
		self.included = included;
	}

	//same value, inclusion flipped, as used by complements
	pub(crate) fn flipped(&self) -> Endpoint {
		Endpoint {
			value: self.value,
			included: !self.included,
		}
	}

	//same value, explicit inclusion, as used by tie-breaks
	pub(crate) fn with_included(&self, included: bool) -> Endpoint {
		Endpoint {
			value: self.value,
			included,
		}
	}
}

#[cfg(feature = "serde")]
mod serde_impls {
	use std::fmt;

	use serde::de::{MapAccess, Visitor};
	use serde::ser::SerializeStruct;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::Endpoint;

	impl Serialize for Endpoint {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut state = serializer.serialize_struct("Endpoint", 2)?;
			state.serialize_field("value", &self.value())?;
			state.serialize_field("included", &self.included())?;
			state.end()
		}
	}

	impl<'de> Deserialize<'de> for Endpoint {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_struct(
				"Endpoint",
				&["value", "included"],
				EndpointVisitor,
			)
		}
	}

	struct EndpointVisitor;

	impl<'de> Visitor<'de> for EndpointVisitor {
		type Value = Endpoint;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("an endpoint with `value` and `included` fields")
		}

		fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: MapAccess<'de>,
		{
			let mut value: Option<f64> = None;
			let mut included: Option<bool> = None;
			while let Some(key) = access.next_key::<String>()? {
				match key.as_str() {
					"value" => value = Some(access.next_value()?),
					"included" => included = Some(access.next_value()?),
					other => {
						return Err(serde::de::Error::unknown_field(
							other,
							&["value", "included"],
						))
					}
				}
			}
			let value =
				value.ok_or_else(|| serde::de::Error::missing_field("value"))?;
			let included = included
				.ok_or_else(|| serde::de::Error::missing_field("included"))?;
			Endpoint::new(value, included).map_err(serde::de::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::error::ValidationError;

	#[test]
	fn rejects_nan() {
		assert!(matches!(
			Endpoint::new(f64::NAN, false),
			Err(ValidationError::Value(_))
		));

		let mut endpoint = Endpoint::closed(1.0);
		assert!(endpoint.set_value(f64::NAN).is_err());
		assert_eq!(endpoint.value(), 1.0);
	}

	#[test]
	fn accepts_infinities() {
		let endpoint = Endpoint::open(f64::NEG_INFINITY);
		assert_eq!(endpoint.value(), f64::NEG_INFINITY);
		assert_eq!(endpoint.included(), false);

		let mut endpoint = Endpoint::closed(0.0);
		endpoint.set_value(f64::INFINITY).unwrap();
		assert_eq!(endpoint.value(), f64::INFINITY);
	}

	#[test]
	fn structural_equality() {
		assert_eq!(Endpoint::closed(2.0), Endpoint::new(2.0, true).unwrap());
		assert_ne!(Endpoint::closed(2.0), Endpoint::open(2.0));
		assert_ne!(Endpoint::closed(2.0), Endpoint::closed(3.0));
	}

	#[test]
	fn parses_raw_tokens() {
		assert_eq!(
			Endpoint::parse("2.5", "true"),
			Ok(Endpoint::closed(2.5))
		);
		assert_eq!(
			Endpoint::parse("inf", "false"),
			Ok(Endpoint::open(f64::INFINITY))
		);
		assert_eq!(
			Endpoint::parse("five", "true"),
			Err(ValidationError::Number("five".to_owned()))
		);
		assert_eq!(
			Endpoint::parse("5", "included"),
			Err(ValidationError::Inclusion("included".to_owned()))
		);
	}

	#[test]
	fn flipping() {
		assert_eq!(Endpoint::closed(2.0).flipped(), Endpoint::open(2.0));
		assert_eq!(
			Endpoint::open(2.0).with_included(true),
			Endpoint::closed(2.0)
		);
	}
}
