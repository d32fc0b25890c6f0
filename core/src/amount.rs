// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Amounts of time bound to a single unit: [`Years`], [`Months`], [`Weeks`],
//! [`Days`], [`Hours`], [`Minutes`] and [`Seconds`].
//!
//! Each type wraps an `i32` and only differs in its unit, its ISO-8601 form
//! and whether it is a calendar amount (convertible to a [`Period`]) or a
//! clock amount (convertible to a [`SignedDuration`]). Calendar and clock
//! amounts never mix.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use jiff::{SignedDuration, Timestamp, Unit};

use crate::error::{Error, Result};
use crate::math::{Exact, to_int_exact};
use crate::parser::{Field, FieldLayout, IsoAmount, Part};
use crate::period::Period;
use crate::unit::{Temporal, TemporalAmount, TemporalUnit, unsupported_unit};

/// Macro to define a fixed-unit amount type.
///
/// The common surface (construction, parsing, exact arithmetic, conversion
/// from other amounts) is generated here; the calendar/clock specific part is
/// selected by the last argument.
macro_rules! define_amount {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;

        unit = $unit:ident,
        display = $display:literal,
        fields = [$($part:ident $designator:literal => $factor:literal),+ $(,)?],
        between = ($between_unit:ident, $between_get:ident),
        calendar = $to_period:expr $(,)?
    ) => {
        define_amount! {
            @common $(#[$meta])* $name, $unit, $display, [$($part $designator => $factor),+]
        }

        impl $name {
            /// Convert to a calendar [`Period`].
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] if the period field overflows.
            pub fn to_period(self) -> Result<Period> {
                let convert: fn(i32) -> Result<Period> = $to_period;
                convert(self.0)
            }

            #[doc = concat!("The number of whole ", stringify!($name), " from `start` (inclusive) to `end` (exclusive).")]
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] if the result does not fit in `i32`,
            /// calendar failures from `jiff` otherwise.
            pub fn between(start: Date, end: Date) -> Result<Self> {
                let span = start.until((Unit::$between_unit, end))?;
                Ok(Self::of(to_int_exact(i64::from(span.$between_get()))?))
            }

            /// Add this amount to a point in time.
            ///
            /// # Errors
            ///
            /// Whatever [`Temporal::plus_period`] reports.
            pub fn add_to<T: Temporal>(self, temporal: T) -> Result<T> {
                temporal.plus_period(&self.to_period()?)
            }

            /// Subtract this amount from a point in time.
            ///
            /// # Errors
            ///
            /// Whatever [`Temporal::minus_period`] reports.
            pub fn subtract_from<T: Temporal>(self, temporal: T) -> Result<T> {
                temporal.minus_period(&self.to_period()?)
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident;

        unit = $unit:ident,
        display = $display:literal,
        fields = [$($part:ident $designator:literal => $factor:literal),+ $(,)?],
        clock = $seconds:literal $(,)?
    ) => {
        define_amount! {
            @common $(#[$meta])* $name, $unit, $display, [$($part $designator => $factor),+]
        }

        impl $name {
            /// Convert to an exact [`SignedDuration`]; never overflows.
            #[must_use]
            pub fn to_duration(self) -> SignedDuration {
                SignedDuration::from_secs(i64::from(self.0) * $seconds)
            }

            #[doc = concat!("The number of whole ", stringify!($name), " from `start` to `end`, truncated toward zero.")]
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] if the result does not fit in `i32`.
            pub fn between(start: Timestamp, end: Timestamp) -> Result<Self> {
                let seconds = end.duration_since(start).as_secs();
                Ok(Self::of(to_int_exact(seconds / $seconds)?))
            }

            /// Add this amount to a point in time.
            ///
            /// # Errors
            ///
            /// Whatever [`Temporal::plus_duration`] reports.
            pub fn add_to<T: Temporal>(self, temporal: T) -> Result<T> {
                temporal.plus_duration(self.to_duration())
            }

            /// Subtract this amount from a point in time.
            ///
            /// # Errors
            ///
            /// Whatever [`Temporal::minus_duration`] reports.
            pub fn subtract_from<T: Temporal>(self, temporal: T) -> Result<T> {
                temporal.minus_duration(self.to_duration())
            }
        }
    };

    (
        @common $(#[$meta:meta])* $name:ident, $unit:ident, $display:literal,
        [$($part:ident $designator:literal => $factor:literal),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            #[doc = concat!("A constant for zero ", stringify!($name), ".")]
            pub const ZERO: Self = Self(0);

            #[doc = concat!("A constant for one of ", stringify!($name), ".")]
            pub const ONE: Self = Self(1);

            /// The unit of this amount.
            pub const UNIT: TemporalUnit = TemporalUnit::$unit;

            const LAYOUT: FieldLayout = &[$((Part::$part, $designator)),+];

            #[doc = concat!("Obtain an amount of ", stringify!($name), "; every `i32` is valid.")]
            #[must_use]
            pub const fn of(amount: i32) -> Self {
                match amount {
                    0 => Self::ZERO,
                    1 => Self::ONE,
                    _ => Self(amount),
                }
            }

            #[doc = concat!("Obtain an amount of ", stringify!($name), " from any other amount.")]
            ///
            /// Every non-zero unit of `amount` must convert exactly into this
            /// unit.
            ///
            /// # Errors
            ///
            /// [`Error::DateTime`] if a unit cannot be converted or leaves a
            /// remainder, [`Error::Arithmetic`] on overflow.
            pub fn from<A: TemporalAmount + ?Sized>(amount: &A) -> Result<Self> {
                let mut total = 0_i32;
                for &unit in amount.units() {
                    let value = amount.get(unit)?;
                    if value == 0 {
                        continue;
                    }
                    let (whole, remainder) = unit.convert_amount(value, Self::UNIT)?;
                    if remainder != 0 {
                        return Err(Error::date_time(format!(
                            "Amount could not be converted to a whole number of {}: {value} {unit}",
                            Self::UNIT,
                        )));
                    }
                    total = total.add_exact(to_int_exact(whole)?)?;
                }
                Ok(Self::of(total))
            }

            /// Like [`Self::from`], but rejecting amounts of the other category
            /// (calendar versus clock) before converting.
            fn from_compatible<A: TemporalAmount + ?Sized>(amount: &A) -> Result<Self> {
                let date_based = Self::UNIT.is_date_based();
                let foreign = |unit: &TemporalUnit| unit.is_date_based() != date_based;
                let units = amount.units();
                let mixed = units.iter().all(foreign)
                    || units
                        .iter()
                        .filter(|unit| foreign(*unit))
                        .any(|&unit| amount.get(unit).is_ok_and(|v| v != 0));
                if mixed {
                    return Err(Error::date_time(format!(
                        "{} cannot be combined with an amount in {}",
                        stringify!($name),
                        units.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
                    )));
                }
                Self::from(amount)
            }

            #[doc = concat!("Parse text such as `", $display, "`.")]
            ///
            /// A leading sign before `P` negates the total; each field may
            /// carry its own sign. Letters are case-insensitive.
            ///
            /// # Errors
            ///
            /// [`Error::Parse`] at index 0 on a grammar violation or when the
            /// amount overflows.
            pub fn parse(text: &str) -> Result<Self> {
                let message = concat!("Text cannot be parsed to a ", stringify!($name));
                let amount = IsoAmount::parse(text, Self::LAYOUT)
                    .map_err(|_| Error::parse(text, 0, message))?;
                Self::total(&amount)
                    .map(Self::of)
                    .map_err(|e| e.into_parse(text, message))
            }

            fn total(amount: &IsoAmount) -> Result<i32> {
                let mut total = 0_i32;
                for field in amount.fields() {
                    if field.has_fraction() {
                        return Err(Error::date_time("fractions are not allowed"));
                    }
                    let value = field.to_i32()?.multiply_exact(Self::factor(field))?;
                    total = total.add_exact(value)?;
                }
                if amount.is_negative() {
                    total = total.negate_exact()?;
                }
                Ok(total)
            }

            fn factor(field: &Field) -> i32 {
                match (field.part, field.designator) {
                    $((Part::$part, $designator) => $factor,)+
                    _ => 0,
                }
            }

            /// The signed amount.
            #[must_use]
            pub const fn amount(self) -> i32 {
                self.0
            }

            /// The unit of this amount.
            #[must_use]
            pub const fn unit(self) -> TemporalUnit {
                Self::UNIT
            }

            /// Whether the amount is zero.
            #[must_use]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }

            /// Whether the amount is greater than zero.
            #[must_use]
            pub const fn is_positive(self) -> bool {
                self.0 > 0
            }

            /// Whether the amount is less than zero.
            #[must_use]
            pub const fn is_negative(self) -> bool {
                self.0 < 0
            }

            /// Add a number of units.
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] on overflow.
            pub fn plus(self, amount: i32) -> Result<Self> {
                if amount == 0 {
                    return Ok(self);
                }
                Ok(Self::of(self.0.add_exact(amount)?))
            }

            /// Add another amount, which must convert exactly into this unit.
            ///
            /// # Errors
            ///
            /// [`Error::DateTime`] if the amount is of the other category or
            /// does not convert, [`Error::Arithmetic`] on overflow.
            pub fn plus_amount<A: TemporalAmount + ?Sized>(self, amount: &A) -> Result<Self> {
                self.plus(Self::from_compatible(amount)?.0)
            }

            /// Subtract a number of units.
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] on overflow.
            pub fn minus(self, amount: i32) -> Result<Self> {
                if amount == 0 {
                    return Ok(self);
                }
                Ok(Self::of(self.0.subtract_exact(amount)?))
            }

            /// Subtract another amount, which must convert exactly into this
            /// unit.
            ///
            /// # Errors
            ///
            /// [`Error::DateTime`] if the amount is of the other category or
            /// does not convert, [`Error::Arithmetic`] on overflow.
            pub fn minus_amount<A: TemporalAmount + ?Sized>(self, amount: &A) -> Result<Self> {
                self.minus(Self::from_compatible(amount)?.0)
            }

            /// Multiply by a scalar.
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] on overflow.
            pub fn multiplied_by(self, scalar: i32) -> Result<Self> {
                if scalar == 1 {
                    return Ok(self);
                }
                Ok(Self::of(self.0.multiply_exact(scalar)?))
            }

            /// Divide by a divisor, truncating toward zero.
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] when dividing by zero or overflowing.
            pub fn divided_by(self, divisor: i32) -> Result<Self> {
                if divisor == 1 {
                    return Ok(self);
                }
                Ok(Self::of(self.0.divide(divisor)?))
            }

            /// Negate the amount.
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] for `i32::MIN`.
            pub fn negated(self) -> Result<Self> {
                Ok(Self::of(self.0.negate_exact()?))
            }

            /// The absolute amount.
            ///
            /// # Errors
            ///
            /// [`Error::Arithmetic`] for `i32::MIN`.
            pub fn abs(self) -> Result<Self> {
                if self.0 >= 0 {
                    return Ok(self);
                }
                self.negated()
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $display, self.0)
            }
        }

        impl TemporalAmount for $name {
            fn units(&self) -> &'static [TemporalUnit] {
                &[TemporalUnit::$unit]
            }

            fn get(&self, unit: TemporalUnit) -> Result<i64> {
                if unit == Self::UNIT {
                    Ok(i64::from(self.0))
                } else {
                    Err(unsupported_unit(unit))
                }
            }
        }

        crate::serde_str::string_serde!($name);
    };
}

define_amount! {
    /// A year-based amount of time, such as '12 years'.
    pub struct Years;

    unit = Years,
    display = "P{}Y",
    fields = [Date 'Y' => 1],
    between = (Year, get_years),
    calendar = |years| Ok(Period::of_years(years)),
}

define_amount! {
    /// A month-based amount of time, such as '12 months'.
    ///
    /// Parsing also accepts years, converted at twelve months each.
    pub struct Months;

    unit = Months,
    display = "P{}M",
    fields = [Date 'Y' => 12, Date 'M' => 1],
    between = (Month, get_months),
    calendar = |months| Ok(Period::of_months(months)),
}

define_amount! {
    /// A week-based amount of time, such as '6 weeks'.
    pub struct Weeks;

    unit = Weeks,
    display = "P{}W",
    fields = [Date 'W' => 1],
    between = (Week, get_weeks),
    calendar = Period::of_weeks,
}

define_amount! {
    /// A day-based amount of time, such as '12 days'.
    ///
    /// Parsing also accepts weeks, converted at seven days each.
    pub struct Days;

    unit = Days,
    display = "P{}D",
    fields = [Date 'W' => 7, Date 'D' => 1],
    between = (Day, get_days),
    calendar = |days| Ok(Period::of_days(days)),
}

define_amount! {
    /// An hour-based amount of time, such as '4 hours'.
    ///
    /// Parsing also accepts days, converted at 24 hours each.
    pub struct Hours;

    unit = Hours,
    display = "PT{}H",
    fields = [Date 'D' => 24, Time 'H' => 1],
    clock = 3_600,
}

define_amount! {
    /// A minute-based amount of time, such as '8 minutes'.
    pub struct Minutes;

    unit = Minutes,
    display = "PT{}M",
    fields = [Date 'D' => 1_440, Time 'H' => 60, Time 'M' => 1],
    clock = 60,
}

define_amount! {
    /// A second-based amount of time, such as '8 seconds'.
    pub struct Seconds;

    unit = Seconds,
    display = "PT{}S",
    fields = [Date 'D' => 86_400, Time 'H' => 3_600, Time 'M' => 60, Time 'S' => 1],
    clock = 1,
}

impl Weeks {
    /// The number of days in this amount.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the days overflow `i32`.
    pub fn to_days(self) -> Result<Days> {
        Ok(Days::of(self.0.multiply_exact(7)?))
    }
}

impl Days {
    /// Days as a number of weeks, truncated toward zero.
    #[must_use]
    pub const fn to_weeks(self) -> Weeks {
        Weeks::of(self.0 / 7)
    }
}

impl Hours {
    /// The number of minutes in this amount.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the minutes overflow `i32`.
    pub fn to_minutes(self) -> Result<Minutes> {
        Ok(Minutes::of(self.0.multiply_exact(60)?))
    }
}

impl Minutes {
    /// The number of seconds in this amount.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the seconds overflow `i32`.
    pub fn to_seconds(self) -> Result<Seconds> {
        Ok(Seconds::of(self.0.multiply_exact(60)?))
    }
}
