// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Partial ordering between intervals.
//!
//! Two intervals are ordered only when they are equal or one precedes the
//! other on the timeline (touching at a single instant is allowed). Any other
//! pair overlaps and is incomparable: [`PartialOrd::partial_cmp`] returns
//! `None`, so `<`, `<=`, `>` and `>=` all evaluate to `false`, and the
//! fallible [`Interval::compare`] family reports a [`ComparisonError`].
//!
//! Equality is structural and total; it never fails.

use crate::error::ComparisonError;
use crate::instant::TimeInstant;
use crate::interval::Interval;
use std::cmp::Ordering;

impl<T: TimeInstant> Interval<T> {
    /// Whether `self` lies wholly before `other`.
    ///
    /// Both endpoints must be strictly earlier and `self` may end at most
    /// where `other` starts.
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool {
        self.start() < other.start() && self.end() < other.end() && self.end() <= other.start()
    }

    /// Three-way comparison under the interval partial order.
    ///
    /// # Errors
    ///
    /// [`ComparisonError`] if the intervals overlap without being equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datetime_interval::{ComparisonError, Interval};
    /// use std::cmp::Ordering;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2015, 1, d).unwrap();
    /// let first = Interval::from_bounds(day(1), day(2))?;
    /// let second = Interval::from_bounds(day(2), day(3))?;
    /// let across = Interval::from_bounds(day(1), day(3))?;
    ///
    /// assert_eq!(first.compare(&second), Ok(Ordering::Less));
    /// assert_eq!(first.compare(&first), Ok(Ordering::Equal));
    /// assert_eq!(first.compare(&across), Err(ComparisonError));
    /// # Ok::<(), datetime_interval::ConstructionError>(())
    /// ```
    pub fn compare(&self, other: &Self) -> Result<Ordering, ComparisonError> {
        self.partial_cmp(other).ok_or_else(|| {
            log::trace!("incomparable intervals {self:?} and {other:?}");
            ComparisonError
        })
    }

    /// Fallible `<`.
    pub fn try_lt(&self, other: &Self) -> Result<bool, ComparisonError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Fallible `<=`.
    pub fn try_le(&self, other: &Self) -> Result<bool, ComparisonError> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Fallible `>`.
    pub fn try_gt(&self, other: &Self) -> Result<bool, ComparisonError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Fallible `>=`.
    pub fn try_ge(&self, other: &Self) -> Result<bool, ComparisonError> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Identity: whether both references point at the same value in memory.
    ///
    /// Distinct values may still be equal; use `==` for structural equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datetime_interval::Interval;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2015, 1, d).unwrap();
    /// let a = Interval::from_bounds(day(1), day(2))?;
    /// let b = a;
    ///
    /// assert!(Interval::ptr_eq(&a, &a));
    /// assert!(!Interval::ptr_eq(&a, &b));
    /// assert_eq!(a, b);
    /// # Ok::<(), datetime_interval::ConstructionError>(())
    /// ```
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        std::ptr::eq(this, other)
    }
}

impl<T: TimeInstant> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
