//! The set-algebra operators over [`Interval`]s: complement,
//! intersection and union, together with their n-ary reductions.
//!
//! All operators are pure functions: inputs are never mutated and
//! results are freshly built intervals.

use std::collections::VecDeque;

use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

use crate::endpoint::Endpoint;
use crate::error::DomainMismatchError;
use crate::interval::Interval;

/// Operator results that are usually one or two intervals.
pub type Pieces = SmallVec<[Interval; 2]>;

/// Whether two intervals share at least one value.
///
/// Touching endpoints only count when at least one of the touching
/// ends is included, and the empty interval intersects nothing.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ee, ie, ii};
/// use interval_algebra::ops::intersects;
///
/// assert_eq!(intersects(&ii(0.0, 2.0), &ii(2.0, 4.0)), true);
/// assert_eq!(intersects(&ie(0.0, 2.0), &ee(2.0, 4.0)), false);
/// assert_eq!(intersects(&ii(0.0, 1.0), &ii(2.0, 3.0)), false);
/// ```
pub fn intersects(a: &Interval, b: &Interval) -> bool {
	if a.is_empty() || b.is_empty() {
		return false;
	}

	let d1 = a.from().value() - b.to().value();
	let d2 = a.to().value() - b.from().value();

	(d1 == 0.0 && (a.from().included() || b.to().included()))
		|| (d2 == 0.0 && (a.to().included() || b.from().included()))
		|| ((d1 <= 0.0) != (d2 <= 0.0))
}

/// The complement of an interval within its domain's full line.
///
/// The complement of the empty set is the whole line. A bounded
/// interval splits the line into two half-lines with the boundary
/// inclusions flipped, a half-bounded interval leaves a single
/// half-line. The complement of the full line itself falls out of the
/// same rules as an empty piece.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ie, iu, ue};
/// use interval_algebra::ops::complementary;
///
/// let pieces = complementary(&ie(0.0, 5.0));
///
/// assert_eq!(pieces.as_slice(), &[ue(0.0), iu(5.0)]);
/// ```
pub fn complementary(interval: &Interval) -> Pieces {
	if interval.is_empty() {
		return smallvec![Interval::with_domain(interval.domain())];
	}

	if interval.is_bounded() {
		return smallvec![
			Interval::from_parts(
				interval.domain(),
				Endpoint::open(f64::NEG_INFINITY),
				interval.from().flipped(),
			),
			Interval::from_parts(
				interval.domain(),
				interval.to().flipped(),
				Endpoint::open(f64::INFINITY),
			),
		];
	}

	if !interval.is_left_bounded() {
		// !(-∞, b) = [b, ∞)
		smallvec![Interval::from_parts(
			interval.domain(),
			interval.to().flipped(),
			Endpoint::open(f64::INFINITY),
		)]
	} else {
		// !(a, ∞) = (-∞, a]
		smallvec![Interval::from_parts(
			interval.domain(),
			Endpoint::open(f64::NEG_INFINITY),
			interval.from().flipped(),
		)]
	}
}

/// The intersection of two same-domain intervals.
///
/// Returns [`Interval::empty`] when the operands do not intersect.
/// Otherwise the tighter bound wins on each side; on an endpoint-value
/// tie both operands must include the point for the result to include
/// it. The result domain is `Float` if either operand is `Float`.
///
/// # Examples
/// ```
/// use interval_algebra::interval::{ei, ii};
/// use interval_algebra::ops::binary_intersection;
///
/// let overlap = binary_intersection(&ii(0.0, 2.0), &ii(1.0, 3.0)).unwrap();
/// assert_eq!(overlap, ii(1.0, 2.0));
///
/// //the tie at 0 is excluded because only one operand includes it
/// let tied = binary_intersection(&ii(0.0, 2.0), &ei(0.0, 3.0)).unwrap();
/// assert_eq!(tied, ei(0.0, 2.0));
/// ```
pub fn binary_intersection(
	a: &Interval,
	b: &Interval,
) -> Result<Interval, DomainMismatchError> {
	if a.domain() != b.domain() {
		return Err(DomainMismatchError::Operands);
	}

	if !intersects(a, b) {
		return Ok(Interval::empty());
	}

	let d = a.from().value() - b.from().value();
	let from = if d > 0.0 {
		a.from()
	} else if d < 0.0 {
		b.from()
	} else {
		a.from()
			.with_included(a.from().included() && b.from().included())
	};

	let d = a.to().value() - b.to().value();
	let to = if d < 0.0 {
		a.to()
	} else if d > 0.0 {
		b.to()
	} else {
		a.to().with_included(a.to().included() && b.to().included())
	};

	Ok(Interval::from_parts(a.domain().merge(b.domain()), from, to))
}

/// The intersection of every given interval, folded left in argument
/// order.
///
/// Returns `None` when called with no intervals, and a single interval
/// comes back unchanged. The fold short-circuits once the running
/// result is empty, since intersecting anything with the empty set
/// stays empty.
///
/// # Examples
/// ```
/// use interval_algebra::interval::ii;
/// use interval_algebra::ops::intersection;
///
/// let result = intersection(&[ii(0.0, 10.0), ii(5.0, 15.0), ii(6.0, 8.0)])
/// 	.unwrap();
///
/// assert_eq!(result, Some(ii(6.0, 8.0)));
/// ```
pub fn intersection(
	intervals: &[Interval],
) -> Result<Option<Interval>, DomainMismatchError> {
	let mut intervals = intervals.iter();
	let first = match intervals.next() {
		Some(first) => first,
		None => return Ok(None),
	};

	let mut result = *first;
	for current in intervals {
		result = binary_intersection(&result, current)?;
		if result.is_empty() {
			break;
		}
	}

	Ok(Some(result))
}

//the wider lower endpoint, ties include when either side does
fn union_from(a: Endpoint, b: Endpoint) -> Endpoint {
	if a.value() < b.value() {
		a
	} else if a.value() > b.value() {
		b
	} else {
		a.with_included(a.included() || b.included())
	}
}

//the wider upper endpoint, ties include when either side does
fn union_to(a: Endpoint, b: Endpoint) -> Endpoint {
	if a.value() < b.value() {
		b
	} else if a.value() > b.value() {
		a
	} else {
		a.with_included(a.included() || b.included())
	}
}

/// The union of two same-domain intervals.
///
/// Operands that do not intersect come back unchanged as two pieces.
/// Intersecting operands merge into a single piece with the wider
/// bound on each side; an endpoint-value tie includes the point when
/// either operand does. The merged domain is `Float` if either operand
/// is `Float`.
///
/// # Examples
/// ```
/// use interval_algebra::interval::ii;
/// use interval_algebra::ops::binary_union;
///
/// let merged = binary_union(&ii(0.0, 2.0), &ii(1.0, 3.0)).unwrap();
/// assert_eq!(merged.as_slice(), &[ii(0.0, 3.0)]);
///
/// let disjoint = binary_union(&ii(0.0, 1.0), &ii(2.0, 3.0)).unwrap();
/// assert_eq!(disjoint.as_slice(), &[ii(0.0, 1.0), ii(2.0, 3.0)]);
/// ```
pub fn binary_union(
	a: &Interval,
	b: &Interval,
) -> Result<Pieces, DomainMismatchError> {
	if a.domain() != b.domain() {
		return Err(DomainMismatchError::Operands);
	}

	if !intersects(a, b) {
		return Ok(smallvec![*a, *b]);
	}

	Ok(smallvec![Interval::from_parts(
		a.domain().merge(b.domain()),
		union_from(a.from(), b.from()),
		union_to(a.to(), b.to()),
	)])
}

/// The union of every given interval, merged down to disjoint pieces.
///
/// Each incoming interval is scanned against the accumulated result
/// list; when a pair merges into one piece the merged interval goes
/// back on the work queue, since it may now reach further pieces. The
/// output is sorted by lower endpoint value.
///
/// # Examples
/// ```
/// use interval_algebra::interval::ii;
/// use interval_algebra::ops::union;
///
/// let chained = union(&[ii(4.0, 6.0), ii(0.0, 1.0), ii(1.0, 5.0)]).unwrap();
/// assert_eq!(chained, vec![ii(0.0, 6.0)]);
///
/// let disjoint = union(&[ii(2.0, 3.0), ii(0.0, 1.0)]).unwrap();
/// assert_eq!(disjoint, vec![ii(0.0, 1.0), ii(2.0, 3.0)]);
/// ```
pub fn union(
	intervals: &[Interval],
) -> Result<Vec<Interval>, DomainMismatchError> {
	let mut result: Vec<Interval> = Vec::new();
	let mut queue: VecDeque<Interval> = intervals.iter().copied().collect();

	'queue: while let Some(current) = queue.pop_front() {
		for k in 0..result.len() {
			let united = binary_union(&result[k], &current)?;
			if united.len() == 1 {
				result.remove(k);
				queue.push_back(united[0]);
				continue 'queue;
			}
		}
		result.push(current);
	}

	Ok(result
		.into_iter()
		.sorted_by(|a, b| a.from().value().total_cmp(&b.from().value()))
		.collect())
}
