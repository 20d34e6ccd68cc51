// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Points on a timeline usable as interval bounds.
//!
//! [`TimeInstant`] is implemented for chrono's timeline types:
//!
//! | Instant | Meaning | Duration |
//! |---------|---------|----------|
//! | [`NaiveDate`] | calendar date | [`TimeDelta`] (whole days) |
//! | [`NaiveDateTime`] | date and time without offset | [`TimeDelta`] |
//! | [`DateTime<Tz>`] | date and time with a fixed offset | [`TimeDelta`] |
//!
//! Offsets are carried along but never interpreted: ordering and arithmetic
//! use chrono's absolute-time semantics.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use std::fmt::Debug;
use std::hash::Hash;

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as bounds of
/// [`Interval<T>`](crate::Interval). Instants are totally ordered; the
/// partial order lives one level up, between intervals.
pub trait TimeInstant: Copy + Eq + Ord + Hash + Debug {
    /// The signed span between two instants.
    type Duration: Copy + Eq + Ord + Hash + Debug;

    /// The empty span, used as the non-negativity reference.
    fn zero_duration() -> Self::Duration;

    /// Compute `self - other`.
    fn difference(&self, other: &Self) -> Self::Duration;

    /// Add a duration, or `None` if the result is not representable.
    fn checked_add_duration(&self, duration: Self::Duration) -> Option<Self>;

    /// Subtract a duration, or `None` if the result is not representable.
    fn checked_sub_duration(&self, duration: Self::Duration) -> Option<Self>;
}

impl TimeInstant for NaiveDate {
    type Duration = TimeDelta;

    #[inline]
    fn zero_duration() -> Self::Duration {
        TimeDelta::zero()
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        self.signed_duration_since(*other)
    }

    /// Sub-day components of `duration` are truncated by chrono.
    #[inline]
    fn checked_add_duration(&self, duration: Self::Duration) -> Option<Self> {
        self.checked_add_signed(duration)
    }

    #[inline]
    fn checked_sub_duration(&self, duration: Self::Duration) -> Option<Self> {
        self.checked_sub_signed(duration)
    }
}

impl TimeInstant for NaiveDateTime {
    type Duration = TimeDelta;

    #[inline]
    fn zero_duration() -> Self::Duration {
        TimeDelta::zero()
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        self.signed_duration_since(*other)
    }

    #[inline]
    fn checked_add_duration(&self, duration: Self::Duration) -> Option<Self> {
        self.checked_add_signed(duration)
    }

    #[inline]
    fn checked_sub_duration(&self, duration: Self::Duration) -> Option<Self> {
        self.checked_sub_signed(duration)
    }
}

impl<Tz> TimeInstant for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    type Duration = TimeDelta;

    #[inline]
    fn zero_duration() -> Self::Duration {
        TimeDelta::zero()
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        self.signed_duration_since(other)
    }

    #[inline]
    fn checked_add_duration(&self, duration: Self::Duration) -> Option<Self> {
        self.checked_add_signed(duration)
    }

    #[inline]
    fn checked_sub_duration(&self, duration: Self::Duration) -> Option<Self> {
        self.checked_sub_signed(duration)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
