// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for interval construction, ordering and intersection.

use thiserror::Error;

/// Result type for fallible interval operations.
pub type Result<T> = std::result::Result<T, IntervalError>;

/// Reasons a `(start, duration, end)` triple cannot form an [`Interval`](crate::Interval).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// Fewer than two of start, duration and end were supplied.
    #[error("an interval needs two of start, duration and end, {supplied} given")]
    Underspecified { supplied: usize },

    /// The supplied or derived duration is negative.
    #[error("interval duration is negative")]
    NegativeDuration,

    /// The start lies after the end.
    #[error("interval start is after its end")]
    StartAfterEnd,

    /// `start + duration` does not land on `end`.
    #[error("start, duration and end are inconsistent")]
    Inconsistent,

    /// A derived bound falls outside the instant type's representable range.
    #[error("derived interval bound is out of range")]
    OutOfRange,
}

/// Two unequal intervals overlap, so neither precedes the other.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("intervals overlap and are not comparable")]
pub struct ComparisonError;

/// Umbrella error for every interval operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// Invalid construction input.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Ordering requested between overlapping, unequal intervals.
    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    /// Intersection requested between disjoint intervals.
    #[error("intervals do not intersect")]
    Disjoint,
}
