// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Half-open intervals between two instants.

use std::fmt;
use std::str::FromStr;

use jiff::civil::{Date, Time};
use jiff::fmt::temporal::{Pieces, PiecesOffset};
use jiff::tz::Offset;
use jiff::{SignedDuration, Timestamp};

use crate::error::{Error, Result};
use crate::period::Period;
use crate::period_duration::PeriodDuration;
use crate::unit::Temporal;

/// The span between two instants, including the start and excluding the end.
///
/// An interval whose start equals its end is empty and contains nothing.
/// [`Timestamp::MIN`] and [`Timestamp::MAX`] stand for an unbounded start
/// and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    /// The interval of all instants.
    pub const ALL: Self = Self {
        start: Timestamp::MIN,
        end: Timestamp::MAX,
    };

    /// Obtain an interval.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if `end` is before `start`.
    pub fn of(start: Timestamp, end: Timestamp) -> Result<Self> {
        if end < start {
            return Err(Error::date_time(format!(
                "End instant must be equal or after start instant: {start}/{end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Obtain an interval from a start and a non-negative duration.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the duration is negative or the end is out of
    /// range.
    pub fn of_duration(start: Timestamp, duration: SignedDuration) -> Result<Self> {
        if duration.is_negative() {
            return Err(Error::date_time(format!(
                "Duration must not be negative: {duration}"
            )));
        }
        Self::of(start, start.checked_add(duration)?)
    }

    /// The interval from `start` with an unbounded end.
    #[must_use]
    pub const fn starting_at(start: Timestamp) -> Self {
        Self {
            start,
            end: Timestamp::MAX,
        }
    }

    /// The interval to `end` with an unbounded start.
    #[must_use]
    pub const fn ending_at(end: Timestamp) -> Self {
        Self {
            start: Timestamp::MIN,
            end,
        }
    }

    /// Parse `<start>/<end>`, where either side, but not both, may be a
    /// [`PeriodDuration`] relative to the other side. Instants are RFC 3339
    /// and periods are applied in UTC.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on malformed text, [`Error::DateTime`] if the start is
    /// after the end.
    pub fn parse(text: &str) -> Result<Self> {
        let (start, end) = parse_bounds::<OffsetInstant>(text, "Interval")?;
        Self::of(start.timestamp, end.timestamp)
    }

    /// The inclusive start.
    #[must_use]
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// The exclusive end.
    #[must_use]
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Copy with the start replaced.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the new start is after the end.
    pub fn with_start(self, start: Timestamp) -> Result<Self> {
        Self::of(start, self.end)
    }

    /// Copy with the end replaced.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the new end is before the start.
    pub fn with_end(self, end: Timestamp) -> Result<Self> {
        Self::of(self.start, end)
    }

    /// Whether the start equals the end.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the start is [`Timestamp::MIN`].
    #[must_use]
    pub fn is_unbounded_start(&self) -> bool {
        self.start == Timestamp::MIN
    }

    /// Whether the end is [`Timestamp::MAX`].
    #[must_use]
    pub fn is_unbounded_end(&self) -> bool {
        self.end == Timestamp::MAX
    }

    /// Whether `start <= instant < end`. An unbounded end also contains
    /// [`Timestamp::MAX`].
    #[must_use]
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start <= instant && (instant < self.end || self.is_unbounded_end())
    }

    /// Whether `other` lies within this interval.
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the end of one interval is exactly the start of the other.
    #[must_use]
    pub fn abuts(&self, other: &Self) -> bool {
        (self.end == other.start) ^ (self.start == other.end)
    }

    /// Whether the intervals overlap or abut.
    #[must_use]
    pub fn is_connected(&self, other: &Self) -> bool {
        self == other || (self.start <= other.end && other.start <= self.end)
    }

    /// Whether the intervals share at least one instant. Equal intervals
    /// overlap even when empty.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self == other || (self.start < other.end && other.start < self.end)
    }

    /// The overlapping part of two connected intervals.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the intervals are not connected.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        if !self.is_connected(other) {
            return Err(Error::date_time(format!(
                "Intervals do not connect: {self} and {other}"
            )));
        }
        Ok(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// The union of two connected intervals.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the intervals are not connected.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if !self.is_connected(other) {
            return Err(Error::date_time(format!(
                "Intervals do not connect: {self} and {other}"
            )));
        }
        Ok(self.span(other))
    }

    /// The smallest interval enclosing both, connected or not.
    #[must_use]
    pub fn span(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Whether the interval starts after `instant`.
    #[must_use]
    pub fn is_after(&self, instant: Timestamp) -> bool {
        self.start > instant
    }

    /// Whether the interval ends at or before `instant`. An empty interval is
    /// not before its own instant.
    #[must_use]
    pub fn is_before(&self, instant: Timestamp) -> bool {
        self.end <= instant && self.start < instant
    }

    /// Whether the interval starts at or after the end of `other`.
    #[must_use]
    pub fn is_after_interval(&self, other: &Self) -> bool {
        self.start >= other.end && self != other
    }

    /// Whether the interval ends at or before the start of `other`.
    #[must_use]
    pub fn is_before_interval(&self, other: &Self) -> bool {
        self.end <= other.start && self != other
    }

    /// The exact length of the interval.
    #[must_use]
    pub fn to_duration(&self) -> SignedDuration {
        self.end.duration_since(self.start)
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// `<start>/<end>` in RFC 3339.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

crate::serde_str::string_serde!(Interval);

/// An instant together with the offset it was written in. Calendar amounts
/// relative to it are applied to the local date-time in that offset.
#[derive(Debug, Clone, Copy)]
struct OffsetInstant {
    timestamp: Timestamp,
    offset: Offset,
}

impl FromStr for OffsetInstant {
    type Err = jiff::Error;

    fn from_str(s: &str) -> std::result::Result<Self, jiff::Error> {
        let timestamp: Timestamp = s.parse()?;
        let offset = match Pieces::parse(s)?.offset() {
            Some(PiecesOffset::Numeric(numeric)) => numeric.offset(),
            _ => Offset::UTC,
        };
        Ok(Self { timestamp, offset })
    }
}

impl Temporal for OffsetInstant {
    fn plus_period(self, period: &Period) -> Result<Self> {
        if period.is_zero() {
            return Ok(self);
        }
        let local = self.offset.to_datetime(self.timestamp).plus_period(period)?;
        Ok(Self {
            timestamp: self.offset.to_timestamp(local)?,
            ..self
        })
    }

    fn plus_duration(self, duration: SignedDuration) -> Result<Self> {
        Ok(Self {
            timestamp: self.timestamp.checked_add(duration)?,
            ..self
        })
    }

    fn date(&self) -> Option<Date> {
        Some(self.offset.to_datetime(self.timestamp).date())
    }

    fn time(&self) -> Option<Time> {
        Some(self.offset.to_datetime(self.timestamp).time())
    }
}

/// Split `<a>/<b>` into two points, where one side may be an amount relative
/// to the other.
pub(crate) fn parse_bounds<T>(text: &str, kind: &str) -> Result<(T, T)>
where
    T: Temporal + Copy + FromStr<Err = jiff::Error>,
{
    let Some((first, second)) = text.split_once('/') else {
        return Err(Error::parse(
            text,
            0,
            format!("{kind} cannot be parsed, no forward slash found"),
        ));
    };
    let offset = first.len() + 1;

    let point = |side: &str, index: usize| {
        side.parse::<T>().map_err(|e| {
            tracing::debug!(text, index, error = %e, "rejected span bound");
            Error::parse(text, index, e.to_string())
        })
    };
    let amount = |side: &str, index: usize| {
        PeriodDuration::parse(side).map_err(|e| match e {
            Error::Parse {
                index: inner,
                message,
                cause,
                ..
            } => Error::Parse {
                text: text.to_owned(),
                index: index + inner,
                message,
                cause,
            },
            e => e,
        })
    };

    match (is_amount(first), is_amount(second)) {
        (true, true) => Err(Error::parse(
            text,
            offset,
            format!("{kind} cannot be parsed, both sides are durations"),
        )),
        (true, false) => {
            let end = point(second, offset)?;
            Ok((amount(first, 0)?.subtract_from(end)?, end))
        }
        (false, true) => {
            let start = point(first, 0)?;
            Ok((start, amount(second, offset)?.add_to(start)?))
        }
        (false, false) => Ok((point(first, 0)?, point(second, offset)?)),
    }
}

fn is_amount(side: &str) -> bool {
    side.trim_start_matches(['+', '-']).starts_with(['P', 'p'])
}
