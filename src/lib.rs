// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Datetime Interval
//!
//! An [`Interval`] is a duration of time anchored at a specific point on the
//! timeline. It is built from any two of start, duration and end, validated
//! on construction, and immutable afterwards.
//!
//! # Core types
//!
//! - [`Interval<T>`] — a span over any [`TimeInstant`].
//! - [`TimeInstant`] — trait for points in time usable as interval bounds.
//! - [`DateInterval`], [`NaiveInterval`], [`UtcInterval`] — aliases over chrono instants.
//!
//! # Operations
//!
//! | Operation | Method | Failure |
//! |-----------|--------|---------|
//! | construct | [`Interval::from_bounds`], [`Interval::from_start_and_duration`], [`Interval::from_duration_and_end`], [`Interval::from_parts`] | [`ConstructionError`] |
//! | order | [`Interval::compare`], [`Interval::try_lt`], `PartialOrd` | [`ComparisonError`] on overlap |
//! | equality | `==`, [`Interval::ptr_eq`] | never |
//! | containment | [`Interval::contains`] (inclusive) | never |
//! | subset / superset | [`Interval::is_subset`], [`Interval::is_superset`] (strict) | never |
//! | intersection | [`Interval::intersection`] | [`IntervalError::Disjoint`] |
//! | translation | [`Interval::translate`], `+`, `-` | panics on overflow; see [`Interval::checked_translate`] |
//!
//! # Partial order
//!
//! Intervals are comparable only when they are equal or one precedes the
//! other. Overlapping, unequal intervals have no order:
//!
//! ```
//! use chrono::NaiveDate;
//! use datetime_interval::{ComparisonError, Interval};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2015, 1, d).unwrap();
//! let a = Interval::from_bounds(day(1), day(3))?;
//! let b = Interval::from_bounds(day(2), day(4))?;
//!
//! assert!(a != b);
//! assert_eq!(a.try_lt(&b), Err(ComparisonError));
//! assert_eq!(a.partial_cmp(&b), None);
//! # Ok::<(), datetime_interval::ConstructionError>(())
//! ```

mod compare;
mod error;
pub(crate) mod instant;
mod interval;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{ComparisonError, ConstructionError, IntervalError, Result};
pub use instant::TimeInstant;
pub use interval::{DateInterval, Interval, NaiveInterval, UtcInterval};
