//! A module containing [`Interval`], its [`Domain`] tag, the
//! classification predicates and the shorthand constructor functions.

use std::str::FromStr;
use std::fmt;

use crate::endpoint::Endpoint;
use crate::error::{DomainMismatchError, EndpointError, Side, ValidationError};
use crate::numeric::is_integral;

/// The underlying number set an [`Interval`] ranges over.
///
/// Integer intervals only admit endpoint values without a fractional
/// part (infinities count as integral), float intervals admit any
/// non-NaN value. The distinction changes the emptiness rules: `(1, 2)`
/// over the integers contains nothing, while over the floats it
/// contains uncountably many values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Domain {
	/// The integers, ℤ.
	Integer,
	/// The reals, ℝ.
	#[default]
	Float,
}

impl Domain {
	/// The domain of an operator result: `Float` wins over `Integer`.
	pub fn merge(self, other: Domain) -> Domain {
		if self == Domain::Float || other == Domain::Float {
			Domain::Float
		} else {
			Domain::Integer
		}
	}

	/// Whether `value` belongs to this domain. NaN belongs to neither.
	pub fn admits(self, value: f64) -> bool {
		match self {
			Domain::Integer => is_integral(value),
			Domain::Float => !value.is_nan(),
		}
	}
}

impl fmt::Display for Domain {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Domain::Integer => f.write_str("integer"),
			Domain::Float => f.write_str("float"),
		}
	}
}

impl FromStr for Domain {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"integer" => Ok(Domain::Integer),
			"float" => Ok(Domain::Float),
			other => Err(ValidationError::Domain(other.to_owned())),
		}
	}
}

/// A contiguous subset of the reals or the integers, bounded by two
/// independently open or closed [`Endpoint`]s.
///
/// The bounds are plain data: an interval whose lower value exceeds
/// its upper value is a valid representation of the empty set, and
/// every classification predicate is recomputed from the current
/// endpoints on each call, nothing is cached.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ie, uu};
///
/// let interval = ie(0.0, 5.0);
///
/// assert_eq!(interval.test(0.0), true);
/// assert_eq!(interval.test(5.0), false);
/// assert_eq!(interval.is_bounded(), true);
///
/// assert_eq!(uu().is_bounded(), false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
	domain: Domain,
	from: Endpoint,
	to: Endpoint,
}

impl Interval {
	/// The unbounded float interval `(-∞, ∞)`.
	pub fn new() -> Interval {
		Interval {
			domain: Domain::Float,
			from: Endpoint::open(f64::NEG_INFINITY),
			to: Endpoint::open(f64::INFINITY),
		}
	}

	/// The unbounded interval `(-∞, ∞)` of the given domain.
	pub fn with_domain(domain: Domain) -> Interval {
		Interval {
			domain,
			..Interval::new()
		}
	}

	/// Builds an interval from its parts, validating that both
	/// endpoint values fit the domain.
	///
	/// The domain applies first, then `from`, then `to`; the first
	/// endpoint that fails reports which side it was via
	/// [`EndpointError`], with the underlying [`ValidationError`]
	/// attached as its source.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Domain, Endpoint, Interval};
	///
	/// let interval = Interval::from_endpoints(
	/// 	Domain::Integer,
	/// 	Endpoint::open(1.0),
	/// 	Endpoint::closed(2.0),
	/// )
	/// .unwrap();
	/// assert_eq!(interval.is_degenerate(), true);
	///
	/// let invalid = Interval::from_endpoints(
	/// 	Domain::Integer,
	/// 	Endpoint::open(0.5),
	/// 	Endpoint::closed(2.0),
	/// );
	/// assert!(invalid.is_err());
	/// ```
	pub fn from_endpoints(
		domain: Domain,
		from: Endpoint,
		to: Endpoint,
	) -> Result<Interval, EndpointError> {
		let mut interval = Interval::with_domain(domain);
		interval.set_from(from)?;
		interval.set_to(to)?;
		Ok(interval)
	}

	//invariant-preserving construction for operator results, both
	//endpoint values already known to fit the domain
	pub(crate) fn from_parts(
		domain: Domain,
		from: Endpoint,
		to: Endpoint,
	) -> Interval {
		debug_assert!(domain.admits(from.value()));
		debug_assert!(domain.admits(to.value()));
		Interval { domain, from, to }
	}

	/// The interval's domain tag.
	pub fn domain(&self) -> Domain {
		self.domain
	}

	/// The lower endpoint.
	pub fn from(&self) -> Endpoint {
		self.from
	}

	/// The upper endpoint.
	pub fn to(&self) -> Endpoint {
		self.to
	}

	/// Replaces the lower endpoint, validating its value against the
	/// domain.
	pub fn set_from(&mut self, from: Endpoint) -> Result<(), EndpointError> {
		self.check_endpoint(Side::From, from)?;
		self.from = from;
		Ok(())
	}

	/// Replaces the upper endpoint, validating its value against the
	/// domain.
	pub fn set_to(&mut self, to: Endpoint) -> Result<(), EndpointError> {
		self.check_endpoint(Side::To, to)?;
		self.to = to;
		Ok(())
	}

	fn check_endpoint(
		&self,
		side: Side,
		endpoint: Endpoint,
	) -> Result<(), EndpointError> {
		if self.domain.admits(endpoint.value()) {
			return Ok(());
		}
		Err(EndpointError {
			side,
			source: ValidationError::NotInDomain {
				value: endpoint.value(),
				domain: self.domain,
			},
		})
	}

	/// Switches the domain tag, failing when an existing endpoint
	/// value does not fit the new domain. The interval is left
	/// untouched on failure.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::ii;
	/// use interval_algebra::Domain;
	///
	/// let mut whole = ii(0.0, 5.0);
	/// whole.set_domain(Domain::Integer).unwrap();
	///
	/// let mut fractional = ii(0.0, 5.5);
	/// assert!(fractional.set_domain(Domain::Integer).is_err());
	/// assert_eq!(fractional.domain(), Domain::Float);
	/// ```
	pub fn set_domain(&mut self, domain: Domain) -> Result<(), ValidationError> {
		for endpoint in [self.from, self.to] {
			if !domain.admits(endpoint.value()) {
				return Err(ValidationError::NotInDomain {
					value: endpoint.value(),
					domain,
				});
			}
		}
		self.domain = domain;
		Ok(())
	}

	/// Resets both endpoints to the unbounded defaults `(-∞, ∞)`. The
	/// domain tag is left unchanged.
	pub fn clear(&mut self) {
		self.from = Endpoint::open(f64::NEG_INFINITY);
		self.to = Endpoint::open(f64::INFINITY);
	}

	// Classification predicates ==========================

	/// Whether neither endpoint is infinite.
	pub fn is_bounded(&self) -> bool {
		self.is_left_bounded() && self.is_right_bounded()
	}

	/// Whether both endpoints are included.
	pub fn is_closed(&self) -> bool {
		self.from.included() && self.to.included()
	}

	/// Whether both endpoints are excluded.
	pub fn is_open(&self) -> bool {
		!self.from.included() && !self.to.included()
	}

	/// Whether some real number is smaller than every member.
	pub fn is_left_bounded(&self) -> bool {
		self.from.value() > f64::NEG_INFINITY
	}

	/// Whether the interval has a minimum, that is, its lower endpoint
	/// is included.
	pub fn is_left_closed(&self) -> bool {
		self.from.included()
	}

	/// Whether some real number is larger than every member.
	pub fn is_right_bounded(&self) -> bool {
		self.to.value() < f64::INFINITY
	}

	/// Whether the interval has a maximum, that is, its upper endpoint
	/// is included.
	pub fn is_right_closed(&self) -> bool {
		self.to.included()
	}

	/// Whether the interval contains no value at all.
	///
	/// Covers reversed bounds `[b, a]` with `a < b`, single-value
	/// intervals with an excluded end like `(a, a]`, and the integer
	/// case `(a, a + 1)` with both ends excluded, which spans no
	/// integer.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ee, ii};
	/// use interval_algebra::Domain;
	///
	/// assert_eq!(ii(5.0, 3.0).is_empty(), true);
	/// assert_eq!(ee(1.0, 2.0).is_empty(), false);
	///
	/// let mut gap = ee(1.0, 2.0);
	/// gap.set_domain(Domain::Integer).unwrap();
	/// assert_eq!(gap.is_empty(), true);
	/// ```
	pub fn is_empty(&self) -> bool {
		if self.from.value() > self.to.value() {
			return true;
		}
		if self.from.value() == self.to.value()
			&& !(self.from.included() && self.to.included())
		{
			return true;
		}
		self.domain == Domain::Integer
			&& self.from.value().is_finite()
			&& self.from.value() + 1.0 == self.to.value()
			&& !self.from.included()
			&& !self.to.included()
	}

	/// Whether the interval contains exactly one value: `[a, a]`, or a
	/// unit-width integer interval with exactly one included end like
	/// `(1, 2]`.
	///
	/// An interval is never both empty and degenerate.
	pub fn is_degenerate(&self) -> bool {
		(self.is_closed() && self.from.value() == self.to.value())
			|| (self.domain == Domain::Integer
				&& self.from.value().is_finite()
				&& self.from.value() + 1.0 == self.to.value()
				&& self.from.included() != self.to.included())
	}

	/// The single member of a degenerate interval, `None` otherwise.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Domain, Endpoint, Interval};
	///
	/// let interval = Interval::from_endpoints(
	/// 	Domain::Integer,
	/// 	Endpoint::open(1.0),
	/// 	Endpoint::closed(2.0),
	/// )
	/// .unwrap();
	///
	/// assert_eq!(interval.single_value(), Some(2.0));
	/// ```
	pub fn single_value(&self) -> Option<f64> {
		if !self.is_degenerate() {
			return None;
		}
		if self.from.included() {
			Some(self.from.value())
		} else {
			Some(self.to.value())
		}
	}

	// Membership ==========================

	/// Permissive membership probe: `false` for the empty interval and
	/// for NaN, and no domain check on the probe value.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::interval::{ee, ii};
	///
	/// assert_eq!(ii(-5.0, 5.0).test(5.0), true);
	/// assert_eq!(ii(-5.0, 5.0).test(6.0), false);
	/// assert_eq!(ee(-5.0, 5.0).test(5.0), false);
	/// ```
	pub fn test(&self, value: f64) -> bool {
		if self.is_empty() {
			return false;
		}
		let above_from = value > self.from.value()
			|| (self.from.included() && value >= self.from.value());
		let below_to = value < self.to.value()
			|| (self.to.included() && value <= self.to.value());
		above_from && below_to
	}

	/// Strict membership: like [`test`](Interval::test), but the probe
	/// value's integer-ness must agree with the interval's domain.
	///
	/// # Examples
	/// ```
	/// use interval_algebra::{Domain, Endpoint, Interval};
	///
	/// let digits = Interval::from_endpoints(
	/// 	Domain::Integer,
	/// 	Endpoint::closed(0.0),
	/// 	Endpoint::closed(9.0),
	/// )
	/// .unwrap();
	///
	/// assert_eq!(digits.contains(7.0), Ok(true));
	/// assert_eq!(digits.contains(12.0), Ok(false));
	/// assert!(digits.contains(7.5).is_err());
	/// ```
	pub fn contains(&self, value: f64) -> Result<bool, DomainMismatchError> {
		if !self.domain.admits(value) {
			return Err(DomainMismatchError::Probe {
				value,
				domain: self.domain,
			});
		}
		Ok(self.test(value))
	}

	// Derived quantities ==========================

	/// The length of the interval: 0 when empty, infinite when
	/// unbounded, `|to - from|` otherwise.
	pub fn diameter(&self) -> f64 {
		if self.is_empty() {
			return 0.0;
		}
		if !self.is_bounded() {
			return f64::INFINITY;
		}
		(self.to.value() - self.from.value()).abs()
	}

	/// The centre of the interval, `None` when empty or unbounded.
	pub fn midpoint(&self) -> Option<f64> {
		if self.is_empty() || !self.is_bounded() {
			return None;
		}
		Some((self.from.value() + self.to.value()) / 2.0)
	}

	/// Half the diameter: 0 when empty or unbounded.
	pub fn radius(&self) -> f64 {
		if self.is_empty() || !self.is_bounded() {
			return 0.0;
		}
		self.diameter() / 2.0
	}

	// Named sets ==========================

	/// The canonical empty set, `(0, 0)` over the floats. A fresh
	/// value on every call, as are all the named sets.
	pub fn empty() -> Interval {
		Interval::from_parts(
			Domain::Float,
			Endpoint::open(0.0),
			Endpoint::open(0.0),
		)
	}

	/// ℝ, the full real line.
	pub fn reals() -> Interval {
		Interval::new()
	}

	/// ℤ, every integer.
	pub fn integers() -> Interval {
		Interval::with_domain(Domain::Integer)
	}

	/// ℕ, the integers greater than zero.
	pub fn naturals() -> Interval {
		Interval::from_parts(
			Domain::Integer,
			Endpoint::open(0.0),
			Endpoint::open(f64::INFINITY),
		)
	}

	/// ℕ₀, the integers greater than or equal to zero.
	pub fn naturals_with_zero() -> Interval {
		Interval::from_parts(
			Domain::Integer,
			Endpoint::closed(0.0),
			Endpoint::open(f64::INFINITY),
		)
	}
}

impl Default for Interval {
	fn default() -> Self {
		Interval::new()
	}
}

// Shorthand constructors ==========================

/// An unbounded-unbounded float interval, `(-∞, ∞)`.
pub fn uu() -> Interval {
	Interval::new()
}
/// An unbounded-included float interval, `(-∞, x]`.
pub fn ui(x: f64) -> Interval {
	Interval::from_parts(
		Domain::Float,
		Endpoint::open(f64::NEG_INFINITY),
		Endpoint::closed(x),
	)
}
/// An unbounded-excluded float interval, `(-∞, x)`.
pub fn ue(x: f64) -> Interval {
	Interval::from_parts(
		Domain::Float,
		Endpoint::open(f64::NEG_INFINITY),
		Endpoint::open(x),
	)
}
/// An included-unbounded float interval, `[x, ∞)`.
pub fn iu(x: f64) -> Interval {
	Interval::from_parts(
		Domain::Float,
		Endpoint::closed(x),
		Endpoint::open(f64::INFINITY),
	)
}
/// An excluded-unbounded float interval, `(x, ∞)`.
pub fn eu(x: f64) -> Interval {
	Interval::from_parts(
		Domain::Float,
		Endpoint::open(x),
		Endpoint::open(f64::INFINITY),
	)
}
/// An included-included float interval, `[x1, x2]`.
pub fn ii(x1: f64, x2: f64) -> Interval {
	Interval::from_parts(Domain::Float, Endpoint::closed(x1), Endpoint::closed(x2))
}
/// An included-excluded float interval, `[x1, x2)`.
pub fn ie(x1: f64, x2: f64) -> Interval {
	Interval::from_parts(Domain::Float, Endpoint::closed(x1), Endpoint::open(x2))
}
/// An excluded-included float interval, `(x1, x2]`.
pub fn ei(x1: f64, x2: f64) -> Interval {
	Interval::from_parts(Domain::Float, Endpoint::open(x1), Endpoint::closed(x2))
}
/// An excluded-excluded float interval, `(x1, x2)`.
pub fn ee(x1: f64, x2: f64) -> Interval {
	Interval::from_parts(Domain::Float, Endpoint::open(x1), Endpoint::open(x2))
}

// Trait Impls ==========================

#[cfg(feature = "serde")]
mod serde_impls {
	use std::fmt;
	use std::str::FromStr;

	use serde::de::{MapAccess, Visitor};
	use serde::ser::SerializeStruct;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::{Domain, Interval};
	use crate::endpoint::Endpoint;

	impl Serialize for Interval {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut state = serializer.serialize_struct("Interval", 3)?;
			state.serialize_field("domain", &self.domain().to_string())?;
			state.serialize_field("from", &self.from())?;
			state.serialize_field("to", &self.to())?;
			state.end()
		}
	}

	impl<'de> Deserialize<'de> for Interval {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_struct(
				"Interval",
				&["domain", "from", "to"],
				IntervalVisitor,
			)
		}
	}

	struct IntervalVisitor;

	impl<'de> Visitor<'de> for IntervalVisitor {
		type Value = Interval;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter
				.write_str("an interval with `domain`, `from` and `to` fields")
		}

		fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: MapAccess<'de>,
		{
			let mut domain: Option<String> = None;
			let mut from: Option<Endpoint> = None;
			let mut to: Option<Endpoint> = None;
			while let Some(key) = access.next_key::<String>()? {
				match key.as_str() {
					"domain" => domain = Some(access.next_value()?),
					"from" => from = Some(access.next_value()?),
					"to" => to = Some(access.next_value()?),
					other => {
						return Err(serde::de::Error::unknown_field(
							other,
							&["domain", "from", "to"],
						))
					}
				}
			}

			//missing fields keep the constructor defaults: an
			//unbounded float interval
			let mut interval = Interval::new();
			if let Some(domain) = domain {
				let domain = Domain::from_str(&domain)
					.map_err(serde::de::Error::custom)?;
				interval.set_domain(domain).map_err(serde::de::Error::custom)?;
			}
			if let Some(from) = from {
				interval.set_from(from).map_err(serde::de::Error::custom)?;
			}
			if let Some(to) = to {
				interval.set_to(to).map_err(serde::de::Error::custom)?;
			}
			Ok(interval)
		}
	}
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn intervals_round_trip_through_json() {
		let interval = Interval::from_endpoints(
			Domain::Integer,
			Endpoint::closed(0.0),
			Endpoint::open(5.0),
		)
		.unwrap();

		let json = serde_json::to_string(&interval).unwrap();
		assert_eq!(
			json,
			r#"{"domain":"integer","from":{"value":0.0,"included":true},"to":{"value":5.0,"included":false}}"#
		);
		assert_eq!(serde_json::from_str::<Interval>(&json).unwrap(), interval);
	}

	#[test]
	fn missing_fields_keep_the_defaults() {
		let interval: Interval = serde_json::from_str("{}").unwrap();
		assert_eq!(interval, Interval::new());

		let interval: Interval = serde_json::from_str(
			r#"{"domain":"integer","from":{"value":3.0,"included":true}}"#,
		)
		.unwrap();
		assert_eq!(interval.domain(), Domain::Integer);
		assert_eq!(interval.from(), Endpoint::closed(3.0));
		assert_eq!(interval.is_right_bounded(), false);
	}

	#[test]
	fn invalid_wire_data_is_rejected() {
		//fractional endpoint in an integer interval
		let result = serde_json::from_str::<Interval>(
			r#"{"domain":"integer","from":{"value":0.5,"included":true}}"#,
		);
		assert!(result.is_err());

		//unknown domain token
		let result =
			serde_json::from_str::<Interval>(r#"{"domain":"rational"}"#);
		assert!(result.is_err());

		//unknown field
		let result = serde_json::from_str::<Interval>(r#"{"kind":"float"}"#);
		assert!(result.is_err());
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn zii(x1: f64, x2: f64) -> Interval {
		Interval::from_endpoints(
			Domain::Integer,
			Endpoint::closed(x1),
			Endpoint::closed(x2),
		)
		.unwrap()
	}
	fn zee(x1: f64, x2: f64) -> Interval {
		Interval::from_endpoints(
			Domain::Integer,
			Endpoint::open(x1),
			Endpoint::open(x2),
		)
		.unwrap()
	}
	fn zei(x1: f64, x2: f64) -> Interval {
		Interval::from_endpoints(
			Domain::Integer,
			Endpoint::open(x1),
			Endpoint::closed(x2),
		)
		.unwrap()
	}

	#[test]
	fn default_is_the_real_line() {
		let interval = Interval::new();

		assert_eq!(interval.domain(), Domain::Float);
		assert_eq!(interval.is_empty(), false);
		assert_eq!(interval.is_bounded(), false);
		assert_eq!(interval.is_open(), true);
		assert_eq!(interval.test(123456.789), true);
	}

	#[test]
	fn reversed_bounds_are_empty() {
		assert_eq!(ii(5.0, 3.0).is_empty(), true);
		assert_eq!(ee(5.0, 3.0).is_empty(), true);
		assert_eq!(ii(0.1, 0.0).is_empty(), true);
		assert_eq!(zii(4.0, -4.0).is_empty(), true);
	}

	#[test]
	fn single_value_intervals() {
		//[a,a] holds exactly a, any excluded end empties it
		assert_eq!(ii(2.0, 2.0).is_degenerate(), true);
		assert_eq!(ii(2.0, 2.0).is_empty(), false);
		assert_eq!(ie(2.0, 2.0).is_empty(), true);
		assert_eq!(ei(2.0, 2.0).is_empty(), true);
		assert_eq!(ee(2.0, 2.0).is_empty(), true);
	}

	#[test]
	fn integer_unit_width_collapses() {
		//(1,2] over the integers is just {2}
		let interval = zei(1.0, 2.0);
		assert_eq!(interval.is_degenerate(), true);
		assert_eq!(interval.is_empty(), false);
		assert_eq!(interval.single_value(), Some(2.0));

		//(1,2) over the integers holds nothing
		assert_eq!(zee(1.0, 2.0).is_empty(), true);
		assert_eq!(zee(1.0, 2.0).is_degenerate(), false);

		//over the floats neither rule applies
		assert_eq!(ei(1.0, 2.0).is_degenerate(), false);
		assert_eq!(ee(1.0, 2.0).is_empty(), false);
	}

	#[test]
	fn empty_and_degenerate_are_disjoint() {
		let values = [
			f64::NEG_INFINITY,
			-2.0,
			-1.0,
			0.0,
			0.5,
			1.0,
			1.5,
			2.0,
			f64::INFINITY,
		];
		for domain in [Domain::Integer, Domain::Float] {
			for from_value in values {
				for to_value in values {
					for from_included in [false, true] {
						for to_included in [false, true] {
							if !domain.admits(from_value) || !domain.admits(to_value)
							{
								continue;
							}
							let interval = Interval::from_endpoints(
								domain,
								Endpoint::new(from_value, from_included).unwrap(),
								Endpoint::new(to_value, to_included).unwrap(),
							)
							.unwrap();
							assert!(
								!(interval.is_empty() && interval.is_degenerate()),
								"empty and degenerate at once: {interval:?}"
							);
						}
					}
				}
			}
		}
	}

	#[test]
	fn membership_boundaries() {
		let closed = zii(-5.0, 5.0);
		assert_eq!(closed.test(-5.0), true);
		assert_eq!(closed.test(5.0), true);
		assert_eq!(closed.test(-6.0), false);
		assert_eq!(closed.test(6.0), false);

		let open = zee(-5.0, 5.0);
		assert_eq!(open.test(-5.0), false);
		assert_eq!(open.test(5.0), false);
		assert_eq!(open.test(1.0), true);
	}

	#[test]
	fn test_is_permissive() {
		assert_eq!(Interval::empty().test(0.0), false);
		assert_eq!(ii(0.0, 1.0).test(f64::NAN), false);
		//no domain check on the probe
		assert_eq!(zii(0.0, 10.0).test(2.5), true);
	}

	#[test]
	fn contains_checks_the_probe_domain() {
		let digits = zii(0.0, 9.0);
		assert_eq!(digits.contains(7.0), Ok(true));
		assert_eq!(digits.contains(11.0), Ok(false));
		assert_eq!(
			digits.contains(7.5),
			Err(DomainMismatchError::Probe {
				value: 7.5,
				domain: Domain::Integer,
			})
		);

		let reals = ii(0.0, 9.0);
		assert_eq!(reals.contains(7.5), Ok(true));
		assert_eq!(reals.contains(7.0), Ok(true));
		assert!(reals.contains(f64::NAN).is_err());
	}

	#[test]
	fn derived_quantities() {
		assert_eq!(ii(1.0, 5.0).diameter(), 4.0);
		assert_eq!(ii(1.0, 5.0).midpoint(), Some(3.0));
		assert_eq!(ii(1.0, 5.0).radius(), 2.0);

		assert_eq!(Interval::empty().diameter(), 0.0);
		assert_eq!(Interval::empty().midpoint(), None);
		assert_eq!(Interval::empty().radius(), 0.0);

		assert_eq!(uu().diameter(), f64::INFINITY);
		assert_eq!(uu().midpoint(), None);
		assert_eq!(uu().radius(), 0.0);
		assert_eq!(iu(3.0).diameter(), f64::INFINITY);
	}

	#[test]
	fn clear_keeps_the_domain() {
		let mut interval = zii(0.0, 5.0);
		interval.clear();

		assert_eq!(interval.domain(), Domain::Integer);
		assert_eq!(interval.is_bounded(), false);
		assert_eq!(interval.is_open(), true);
	}

	#[test]
	fn endpoint_setters_validate_the_domain() {
		let mut interval = Interval::with_domain(Domain::Integer);
		let error = interval.set_from(Endpoint::closed(0.5)).unwrap_err();

		assert_eq!(error.side, Side::From);
		assert_eq!(
			error.source,
			ValidationError::NotInDomain {
				value: 0.5,
				domain: Domain::Integer,
			}
		);
		//untouched on failure
		assert_eq!(interval, Interval::with_domain(Domain::Integer));

		let error = interval.set_to(Endpoint::open(2.5)).unwrap_err();
		assert_eq!(error.side, Side::To);

		interval.set_from(Endpoint::closed(2.0)).unwrap();
		interval.set_to(Endpoint::closed(8.0)).unwrap();
		assert_eq!(interval.test(2.0), true);
	}

	#[test]
	fn domain_switch_validates_existing_endpoints() {
		let mut interval = ii(0.0, 5.5);
		assert_eq!(
			interval.set_domain(Domain::Integer),
			Err(ValidationError::NotInDomain {
				value: 5.5,
				domain: Domain::Integer,
			})
		);
		assert_eq!(interval.domain(), Domain::Float);

		let mut interval = ii(0.0, 5.0);
		interval.set_domain(Domain::Integer).unwrap();
		assert_eq!(interval.domain(), Domain::Integer);
	}

	#[test]
	fn domain_tokens() {
		assert_eq!("integer".parse::<Domain>(), Ok(Domain::Integer));
		assert_eq!("float".parse::<Domain>(), Ok(Domain::Float));
		assert_eq!(
			"rational".parse::<Domain>(),
			Err(ValidationError::Domain("rational".to_owned()))
		);
	}

	#[test]
	fn named_sets() {
		assert_eq!(Interval::empty().is_empty(), true);
		assert_eq!(Interval::reals(), uu());
		assert_eq!(Interval::integers().domain(), Domain::Integer);
		assert_eq!(Interval::integers().is_bounded(), false);

		let naturals = Interval::naturals();
		assert_eq!(naturals.test(0.0), false);
		assert_eq!(naturals.test(1.0), true);

		let with_zero = Interval::naturals_with_zero();
		assert_eq!(with_zero.test(0.0), true);
		assert_eq!(with_zero.test(-1.0), false);
	}
}
