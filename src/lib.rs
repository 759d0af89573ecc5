//! This crate provides [`Interval`], a contiguous subset of the reals
//! or the integers bounded by two independently open or closed
//! [`Endpoint`]s, together with the set algebra over intervals
//! (classification, membership, complement, intersection, union) and
//! a registry of pluggable human-readable notations.
//!
//! ## Example
//!
//! ```rust
//! use interval_algebra::interval::{ii, ue};
//! use interval_algebra::ops::{intersects, union};
//!
//! let low = ue(0.0);
//! let middle = ii(0.0, 10.0);
//!
//! assert_eq!(intersects(&low, &middle), false);
//! assert_eq!(intersects(&ii(-1.0, 1.0), &middle), true);
//!
//! // (-∞, 0) and [0, 10] touch at an included 0, so they merge
//! let merged = union(&[low, middle]).unwrap();
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].test(10.0), true);
//! ```
//!
//! ## Endpoints are data
//!
//! An interval is just a [`Domain`] tag and two endpoints. Reversed or
//! otherwise contradictory bounds are valid data representing the
//! empty set; predicates like [`Interval::is_empty`] are recomputed
//! from the current endpoints on every call and never cached. What is
//! rejected, always at the point of mutation, is data no interval may
//! ever hold: NaN values, fractional endpoints inside an integer
//! interval, unknown domain tokens.
//!
//! ## Integer and float domains
//!
//! Common interval operations differ depending on whether the
//! underlying domain is discrete or continuous. `(1, 2)` over the
//! integers contains nothing and `(1, 2]` collapses to the single
//! value `2`, while their float counterparts contain uncountably many
//! values. Each interval therefore carries a [`Domain`] and the
//! classification predicates, membership tests and operators all
//! honour it. A value counts as an integer iff it has no fractional
//! part, so `2.0` fits an integer interval and infinities fit both
//! domains.
//!
//! ## Notations
//!
//! ```rust
//! use interval_algebra::notation::NotationRegistry;
//!
//! let registry = NotationRegistry::standard();
//!
//! let interval = registry.parse("interval", "[2, 6)").unwrap();
//! assert_eq!(registry.format("inequality", &interval).unwrap(), "2 <= x < 6");
//! ```
//!
//! ## Serde
//!
//! With the `serde` feature enabled, [`Endpoint`] and [`Interval`]
//! serialize as plain structs and deserialization runs through the
//! same validation as the constructors, so no invalid state can enter
//! over the wire.

#![allow(clippy::tabs_in_doc_comments)]

pub mod endpoint;
pub mod error;
pub mod interval;
pub mod notation;
pub mod numeric;
pub mod ops;

pub use crate::endpoint::Endpoint;
pub use crate::error::{
	DomainMismatchError, EndpointError, Side, ValidationError,
};
pub use crate::interval::{Domain, Interval};
pub use crate::notation::{Notation, NotationRegistry, ParseError};
pub use crate::ops::{
	binary_intersection, binary_union, complementary, intersection,
	intersects, union, Pieces,
};
