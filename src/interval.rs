// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: a span of time anchored on the timeline, over any [`TimeInstant`]
//! - [`DateInterval`], [`NaiveInterval`], [`UtcInterval`]: aliases for chrono instants

use crate::error::{ConstructionError, IntervalError};
use crate::instant::TimeInstant;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::ops::{Add, Sub};

/// A duration of time at a specific point on the timeline.
///
/// An `Interval` stores a start instant, a non-negative duration and an end
/// instant such that `end = start + duration`. It is built from any two of
/// the three; the third is derived and the triple is validated before the
/// value exists. Intervals are immutable: translation and intersection return
/// new values.
///
/// Bounds are inclusive for [`contains`](Self::contains), while
/// [`is_subset`](Self::is_subset) and [`is_superset`](Self::is_superset) are
/// strict: an interval sharing an endpoint with another is neither inside nor
/// around it.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use datetime_interval::Interval;
///
/// let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2015, 1, 31).unwrap();
/// let january = Interval::from_bounds(start, end)?;
///
/// assert_eq!(january.duration(), TimeDelta::days(30));
/// assert!(january.contains(end));
/// # Ok::<(), datetime_interval::ConstructionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T: TimeInstant> {
    start: T,
    duration: T::Duration,
    end: T,
}

/// Interval between two calendar dates.
pub type DateInterval = Interval<NaiveDate>;

/// Interval between two naive date-times.
pub type NaiveInterval = Interval<NaiveDateTime>;

/// UTC interval alias.
pub type UtcInterval = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    // ── constructors ──────────────────────────────────────────────────

    /// Creates an interval from its start and end; the duration is derived.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::StartAfterEnd`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datetime_interval::{ConstructionError, Interval};
    ///
    /// let jan1 = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    /// let jan2 = NaiveDate::from_ymd_opt(2015, 1, 2).unwrap();
    ///
    /// assert!(Interval::from_bounds(jan1, jan2).is_ok());
    /// assert_eq!(
    ///     Interval::from_bounds(jan2, jan1),
    ///     Err(ConstructionError::StartAfterEnd)
    /// );
    /// ```
    pub fn from_bounds(start: T, end: T) -> Result<Self, ConstructionError> {
        Self::from_parts(Some(start), None, Some(end))
    }

    /// Creates an interval from its start and duration; the end is derived.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::NegativeDuration`] for a negative `duration`,
    /// [`ConstructionError::OutOfRange`] if the end is not representable and
    /// [`ConstructionError::Inconsistent`] if `T` cannot hold the duration
    /// exactly (e.g. a sub-day span on a [`NaiveDate`]).
    pub fn from_start_and_duration(
        start: T,
        duration: T::Duration,
    ) -> Result<Self, ConstructionError> {
        Self::from_parts(Some(start), Some(duration), None)
    }

    /// Creates an interval from its duration and end; the start is derived.
    ///
    /// # Errors
    ///
    /// Same as [`from_start_and_duration`](Self::from_start_and_duration).
    pub fn from_duration_and_end(
        duration: T::Duration,
        end: T,
    ) -> Result<Self, ConstructionError> {
        Self::from_parts(None, Some(duration), Some(end))
    }

    /// Creates an interval from whichever of start, duration and end are known.
    ///
    /// Any two derive the third. When all three are given they must agree
    /// (`start + duration == end`).
    ///
    /// # Errors
    ///
    /// [`ConstructionError::Underspecified`] when fewer than two are given,
    /// otherwise whatever the invariant check rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeDelta};
    /// use datetime_interval::{ConstructionError, Interval};
    ///
    /// let end = NaiveDate::from_ymd_opt(2015, 1, 31).unwrap();
    /// let interval = Interval::from_parts(None, Some(TimeDelta::days(30)), Some(end))?;
    /// assert_eq!(interval.start(), NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
    ///
    /// assert_eq!(
    ///     Interval::<NaiveDate>::from_parts(None, None, Some(end)),
    ///     Err(ConstructionError::Underspecified { supplied: 1 })
    /// );
    /// # Ok::<(), ConstructionError>(())
    /// ```
    pub fn from_parts(
        start: Option<T>,
        duration: Option<T::Duration>,
        end: Option<T>,
    ) -> Result<Self, ConstructionError> {
        Self::derive(start, duration, end).inspect_err(|err| {
            log::debug!(
                "rejected interval (start: {start:?}, duration: {duration:?}, end: {end:?}): {err}"
            );
        })
    }

    fn derive(
        start: Option<T>,
        duration: Option<T::Duration>,
        end: Option<T>,
    ) -> Result<Self, ConstructionError> {
        let zero = T::zero_duration();
        let (start, duration, end) = match (start, duration, end) {
            (Some(start), Some(duration), Some(end)) => (start, duration, end),
            (Some(start), None, Some(end)) => (start, end.difference(&start), end),
            (Some(start), Some(duration), None) => {
                if duration < zero {
                    return Err(ConstructionError::NegativeDuration);
                }
                let end = start
                    .checked_add_duration(duration)
                    .ok_or(ConstructionError::OutOfRange)?;
                (start, duration, end)
            }
            (None, Some(duration), Some(end)) => {
                if duration < zero {
                    return Err(ConstructionError::NegativeDuration);
                }
                let start = end
                    .checked_sub_duration(duration)
                    .ok_or(ConstructionError::OutOfRange)?;
                (start, duration, end)
            }
            (start, duration, end) => {
                let supplied = usize::from(start.is_some())
                    + usize::from(duration.is_some())
                    + usize::from(end.is_some());
                return Err(ConstructionError::Underspecified { supplied });
            }
        };

        if start > end {
            return Err(ConstructionError::StartAfterEnd);
        }
        if duration < zero {
            return Err(ConstructionError::NegativeDuration);
        }
        if end.difference(&start) != duration {
            return Err(ConstructionError::Inconsistent);
        }

        Ok(Interval {
            start,
            duration,
            end,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The first instant of the interval.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// The span between start and end, never negative.
    #[inline]
    pub fn duration(&self) -> T::Duration {
        self.duration
    }

    /// The last instant of the interval.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Whether the interval has zero length (`start == end`).
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    // ── set-like operations ───────────────────────────────────────────

    /// Whether `instant` lies in the interval, both endpoints included.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeDelta};
    /// use datetime_interval::Interval;
    ///
    /// let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    /// let week = Interval::from_start_and_duration(start, TimeDelta::days(7))?;
    ///
    /// assert!(week.contains(start));
    /// assert!(week.contains(week.end()));
    /// assert!(!week.contains(week.end() + TimeDelta::days(1)));
    /// # Ok::<(), datetime_interval::ConstructionError>(())
    /// ```
    #[inline]
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whether `other` lies strictly inside `self`.
    ///
    /// Shared endpoints disqualify, so an interval is never a superset of itself.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.start < other.start && self.end > other.end
    }

    /// Whether `self` lies strictly inside `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.start > other.start && self.end < other.end
    }

    /// Returns the span shared by `self` and `other`.
    ///
    /// Intervals touching at a single instant intersect in a zero-length
    /// interval at that instant.
    ///
    /// # Errors
    ///
    /// [`IntervalError::Disjoint`] if the intervals share no instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datetime_interval::{Interval, IntervalError};
    ///
    /// let date = |m, d| NaiveDate::from_ymd_opt(2015, m, d).unwrap();
    /// let jan_all = Interval::from_bounds(date(1, 1), date(1, 31))?;
    /// let jan_half = Interval::from_bounds(date(1, 1), date(1, 15))?;
    /// let mar_all = Interval::from_bounds(date(3, 1), date(3, 31))?;
    ///
    /// assert_eq!(jan_all.intersection(&jan_half)?, jan_half);
    /// assert_eq!(jan_all.intersection(&mar_all), Err(IntervalError::Disjoint));
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<Self, IntervalError> {
        let intersects = other.contains(self.start)
            || other.contains(self.end)
            || self.is_superset(other)
            || self.is_subset(other);
        if !intersects {
            log::debug!("no intersection between {self:?} and {other:?}");
            return Err(IntervalError::Disjoint);
        }

        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Ok(Self::from_bounds(start, end)?)
    }

    // ── translation ───────────────────────────────────────────────────

    /// Shifts the interval by `delta`, keeping its duration.
    ///
    /// A negative `delta` moves the interval back in time. Returns `None` if
    /// either bound leaves the representable range of `T`, or if `T` cannot
    /// hold the shift exactly (e.g. a sub-day `delta` on a [`NaiveDate`]).
    pub fn checked_translate(&self, delta: T::Duration) -> Option<Self> {
        let start = self.start.checked_add_duration(delta)?;
        if start.difference(&self.start) != delta {
            return None;
        }
        self.moved_to(start)
    }

    fn checked_translate_back(&self, delta: T::Duration) -> Option<Self> {
        let start = self.start.checked_sub_duration(delta)?;
        if self.start.difference(&start) != delta {
            return None;
        }
        self.moved_to(start)
    }

    /// Shifts the interval by `delta`, keeping its duration.
    ///
    /// # Panics
    ///
    /// Panics if either bound leaves the representable range of `T`, or if
    /// `T` cannot hold the shift exactly. Use
    /// [`checked_translate`](Self::checked_translate) to handle those cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeDelta};
    /// use datetime_interval::Interval;
    ///
    /// let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    /// let day = Interval::from_start_and_duration(start, TimeDelta::days(1))?;
    ///
    /// let next = day.translate(TimeDelta::days(1));
    /// assert_eq!(next.start(), day.end());
    /// assert_eq!(next.translate(TimeDelta::days(-1)), day);
    /// # Ok::<(), datetime_interval::ConstructionError>(())
    /// ```
    pub fn translate(&self, delta: T::Duration) -> Self {
        self.checked_translate(delta)
            .expect("`Interval + Duration` overflowed or lost precision")
    }

    fn moved_to(&self, start: T) -> Option<Self> {
        Self::from_start_and_duration(start, self.duration).ok()
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<T: TimeInstant> Add<T::Duration> for Interval<T> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the shifted interval is out of range or `T` cannot hold
    /// the shift exactly.
    #[inline]
    fn add(self, rhs: T::Duration) -> Self::Output {
        self.translate(rhs)
    }
}

impl<T: TimeInstant> Sub<T::Duration> for Interval<T> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the shifted interval is out of range or `T` cannot hold
    /// the shift exactly.
    fn sub(self, rhs: T::Duration) -> Self::Output {
        self.checked_translate_back(rhs)
            .expect("`Interval - Duration` overflowed or lost precision")
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<T> fmt::Display for Interval<T>
where
    T: TimeInstant + fmt::Display,
    T::Duration: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} ({})", self.start, self.end, self.duration)
    }
}
