// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Closed ranges of civil date-times.

use std::fmt;
use std::str::FromStr;

use jiff::SignedDuration;
use jiff::civil::DateTime;

use crate::error::{Error, Result};
use crate::interval::parse_bounds;
use crate::period_duration::PeriodDuration;

/// The range between two date-times, including both of them.
///
/// Unlike [`crate::Interval`], the end belongs to the range: a range whose
/// start equals its end is empty in length yet still contains that one
/// date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDateTimeRange {
    start: DateTime,
    end: DateTime,
}

impl LocalDateTimeRange {
    /// Obtain a range.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if `end` is before `start`.
    pub fn of(start: DateTime, end: DateTime) -> Result<Self> {
        if end < start {
            return Err(Error::date_time(format!(
                "End date-time must be on or after start date-time: {start}/{end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Obtain a range from a start and a non-negative duration.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the duration is negative or the end is out of
    /// range.
    pub fn of_duration(start: DateTime, duration: SignedDuration) -> Result<Self> {
        if duration.is_negative() {
            return Err(Error::date_time(format!(
                "Duration must not be negative: {duration}"
            )));
        }
        Self::of(start, start.checked_add(duration)?)
    }

    /// Obtain a range from a start and an amount added to it.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the amount moves the end before the start or
    /// out of range.
    pub fn of_period_duration(start: DateTime, amount: &PeriodDuration) -> Result<Self> {
        Self::of(start, amount.add_to(start)?)
    }

    /// Parse `<start>/<end>` of ISO date-times such as `2024-01-01T10:00`,
    /// where either side, but not both, may be a [`PeriodDuration`].
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on malformed text, [`Error::DateTime`] if the start is
    /// after the end.
    pub fn parse(text: &str) -> Result<Self> {
        let (start, end) = parse_bounds::<DateTime>(text, "LocalDateTimeRange")?;
        Self::of(start, end)
    }

    /// The inclusive start.
    #[must_use]
    pub const fn start(&self) -> DateTime {
        self.start
    }

    /// The inclusive end.
    #[must_use]
    pub const fn end(&self) -> DateTime {
        self.end
    }

    /// Copy with the start replaced.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the new start is after the end.
    pub fn with_start(self, start: DateTime) -> Result<Self> {
        Self::of(start, self.end)
    }

    /// Copy with the end replaced.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the new end is before the start.
    pub fn with_end(self, end: DateTime) -> Result<Self> {
        Self::of(self.start, end)
    }

    /// Whether the range has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `start <= point <= end`.
    #[must_use]
    pub fn contains(&self, point: DateTime) -> bool {
        self.start <= point && point <= self.end
    }

    /// Whether `other` lies within this range.
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the range ends before `point`.
    #[must_use]
    pub fn is_before(&self, point: DateTime) -> bool {
        self.end < point
    }

    /// Whether the range starts after `point`.
    #[must_use]
    pub fn is_after(&self, point: DateTime) -> bool {
        point < self.start
    }

    /// Whether the range ends before `other` starts.
    #[must_use]
    pub fn is_before_range(&self, other: &Self) -> bool {
        self.end < other.start
    }

    /// Whether the range starts after `other` ends.
    #[must_use]
    pub fn is_after_range(&self, other: &Self) -> bool {
        self.start > other.end
    }

    /// Whether the ranges share at least one date-time.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.is_before_range(other) || self.is_after_range(other))
    }

    /// The shared part of two ranges, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }

    /// Whether the ranges meet in exactly one date-time, the end of one being
    /// the start of the other. Ranges of zero length never abut.
    #[must_use]
    pub fn abuts(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && ((self.end == other.start) ^ (self.start == other.end))
    }

    /// The union of two intersecting ranges.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the ranges do not intersect.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if !self.intersects(other) {
            return Err(Error::date_time(format!(
                "Ranges do not connect: {self} and {other}"
            )));
        }
        Ok(self.span(other))
    }

    /// The smallest range enclosing both.
    #[must_use]
    pub fn span(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The exact length of the range.
    #[must_use]
    pub fn to_duration(&self) -> SignedDuration {
        self.end.duration_since(self.start)
    }
}

impl FromStr for LocalDateTimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LocalDateTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

crate::serde_str::string_serde!(LocalDateTimeRange);
