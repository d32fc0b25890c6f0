// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! ISO-8601 grammars: the period and duration grammar shared by every amount
//! type, and the `yyyy-Www` / `yyyy-Qn` forms of the year-based types.
//!
//! The text is first tokenized into signed fields by a single grammar, then
//! validated against the [`FieldLayout`] of the type being parsed. The
//! layout decides which designators are accepted and in which order.

use chumsky::extra::ParserExtra;
use chumsky::prelude::*;

use crate::error::{ArithmeticError, Error, Result};

/// Whether a field appears before or after the `T` separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Part {
    Date,
    Time,
}

/// Accepted fields, in the order they must appear.
pub(crate) type FieldLayout = &'static [(Part, char)];

/// Maximum number of fraction digits, nanosecond precision.
const MAX_FRACTION_DIGITS: usize = 9;

/// A single `[+-]?<digits>[.<fraction>]<designator>` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field {
    pub part: Part,
    /// Upper-cased designator letter
    pub designator: char,
    negative: bool,
    digits: String,
    fraction: Option<String>,
    span: SimpleSpan,
}

impl Field {
    fn signed_digits(&self) -> String {
        let mut s = String::with_capacity(self.digits.len() + 1);
        if self.negative {
            s.push('-');
        }
        s.push_str(&self.digits);
        s
    }

    /// The signed integer part as `i32`.
    pub fn to_i32(&self) -> Result<i32> {
        lexical::parse::<i32, _>(self.signed_digits()).map_err(|_| ArithmeticError::Overflow.into())
    }

    /// The signed integer part as `i64`.
    pub fn to_i64(&self) -> Result<i64> {
        lexical::parse::<i64, _>(self.signed_digits()).map_err(|_| ArithmeticError::Overflow.into())
    }

    pub const fn has_fraction(&self) -> bool {
        self.fraction.is_some()
    }

    /// The fraction in nanoseconds, carrying the sign of the field.
    pub fn fraction_nanos(&self) -> i64 {
        let Some(fraction) = &self.fraction else {
            return 0;
        };
        let mut padded = fraction.clone();
        while padded.len() < MAX_FRACTION_DIGITS {
            padded.push('0');
        }
        // at most 9 digits, always fits
        let nanos = lexical::parse::<i64, _>(padded).unwrap_or_default();
        if self.negative { -nanos } else { nanos }
    }
}

/// A tokenized amount: a leading sign and its fields in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IsoAmount {
    negative: bool,
    fields: Vec<Field>,
}

impl IsoAmount {
    /// Tokenize `text` and validate it against `layout`.
    pub fn parse(text: &str, layout: FieldLayout) -> Result<Self> {
        let (negative, fields) = iso_amount::<extra::Err<Rich<'_, char>>>()
            .parse(text)
            .into_result()
            .map_err(|errs| {
                let (index, message) = errs.first().map_or_else(
                    || (0, "invalid amount".to_owned()),
                    |e| (e.span().start, e.to_string()),
                );
                tracing::debug!(text, index, %message, "rejected ISO-8601 amount");
                Error::parse(text, index, message)
            })?;

        if fields.is_empty() {
            return Err(Error::parse(text, 0, "at least one field is required"));
        }

        let mut next = 0;
        for field in &fields {
            let position = layout.get(next..).and_then(|rest| {
                rest.iter()
                    .position(|&(part, d)| part == field.part && d == field.designator)
            });
            let Some(position) = position else {
                return Err(Error::parse(
                    text,
                    field.span.start,
                    format!("unexpected field '{}'", field.designator),
                ));
            };
            next += position + 1;

            if let Some(fraction) = &field.fraction {
                if field.part != Part::Time || field.designator != 'S' {
                    return Err(Error::parse(
                        text,
                        field.span.start,
                        "fractions are only allowed for seconds",
                    ));
                }
                if fraction.len() > MAX_FRACTION_DIGITS {
                    return Err(Error::parse(
                        text,
                        field.span.start,
                        "fraction exceeds nanosecond precision",
                    ));
                }
            }
        }

        Ok(Self { negative, fields })
    }

    /// Whether the whole amount is negated by a leading `-`.
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Grammar:
///
/// ```txt
/// amount     = [sign] "P" *date-field ["T" 1*time-field]
/// date-field = [sign] 1*DIGIT designator
/// time-field = [sign] 1*DIGIT [("." / ",") 1*DIGIT] designator
/// sign       = "+" / "-"
/// designator = ALPHA
/// ```
///
/// Letters are case-insensitive. Which designators are valid is decided by
/// the caller's layout, not here.
fn iso_amount<'src, E>() -> impl Parser<'src, &'src str, (bool, Vec<Field>), E>
where
    E: ParserExtra<'src, &'src str>,
{
    let negative = one_of("+-").or_not().map(|sign| sign == Some('-'));
    let time = one_of("Tt").ignore_then(field(Part::Time).repeated().at_least(1).collect::<Vec<_>>());

    negative
        .then_ignore(one_of("Pp"))
        .then(field(Part::Date).repeated().collect::<Vec<_>>())
        .then(time.or_not())
        .then_ignore(end())
        .map(|((negative, mut fields), time)| {
            fields.extend(time.unwrap_or_default());
            (negative, fields)
        })
}

fn field<'src, E>(part: Part) -> impl Parser<'src, &'src str, Field, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    let negative = one_of("+-").or_not().map(|sign| sign == Some('-'));
    let digits = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .collect::<String>();
    let fraction = one_of(".,").ignore_then(digits.clone());
    let designator = any()
        .filter(char::is_ascii_alphabetic)
        .map(|c: char| c.to_ascii_uppercase());

    negative
        .then(digits)
        .then(fraction.or_not())
        .then(designator)
        .map_with(move |(((negative, digits), fraction), designator), e| Field {
            part,
            designator,
            negative,
            digits,
            fraction,
            span: e.span(),
        })
}

/// Tokenize `[+-]?yyyy-Ln`, where `L` is `letter` in either case followed by
/// `width` digits, into the signed year and the value after the letter.
///
/// Years of more than four digits need a sign, `+` is only accepted then.
pub(crate) fn parse_year_and_value(text: &str, letter: char, width: usize) -> Result<(i64, u32)> {
    let ((sign, year), value) = year_and_value::<extra::Err<Rich<'_, char>>>(letter, width)
        .parse(text)
        .into_result()
        .map_err(|errs| {
            let (index, message) = errs.first().map_or_else(
                || (0, "invalid text".to_owned()),
                |e| (e.span().start, e.to_string()),
            );
            tracing::debug!(text, index, %message, "rejected year-based text");
            Error::parse(text, index, message)
        })?;

    match (sign, year.len() > 4) {
        (None, true) => return Err(Error::parse(text, 0, "years above 9999 need a sign")),
        (Some('+'), false) => return Err(Error::parse(text, 0, "unexpected sign")),
        _ => {}
    }

    let mut signed = year;
    if sign == Some('-') {
        signed.insert(0, '-');
    }
    let year = lexical::parse::<i64, _>(signed).map_err(|_| Error::parse(text, 0, "invalid year"))?;
    let value = lexical::parse::<u32, _>(value)
        .map_err(|_| Error::parse(text, text.len().saturating_sub(width), "invalid value"))?;
    Ok((year, value))
}

fn year_and_value<'src, E>(
    letter: char,
    width: usize,
) -> impl Parser<'src, &'src str, ((Option<char>, String), String), E>
where
    E: ParserExtra<'src, &'src str>,
{
    let digit = select! { c @ '0'..='9' => c };
    let year = digit.repeated().at_least(4).at_most(10).collect::<String>();
    let value = digit.repeated().exactly(width).collect::<String>();

    one_of("+-")
        .or_not()
        .then(year)
        .then_ignore(just('-'))
        .then_ignore(any().filter(move |c: &char| c.eq_ignore_ascii_case(&letter)))
        .then(value)
        .then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: FieldLayout = &[
        (Part::Date, 'Y'),
        (Part::Date, 'M'),
        (Part::Date, 'W'),
        (Part::Date, 'D'),
        (Part::Time, 'H'),
        (Part::Time, 'M'),
        (Part::Time, 'S'),
    ];

    fn designators(amount: &IsoAmount) -> Vec<(Part, char)> {
        amount.fields().iter().map(|f| (f.part, f.designator)).collect()
    }

    #[test]
    fn tokenizes_amounts() {
        use Part::{Date, Time};

        #[rustfmt::skip]
        let success_cases = [
            ("P1Y2M3W4DT5H6M7S", false, vec![(Date, 'Y'), (Date, 'M'), (Date, 'W'), (Date, 'D'), (Time, 'H'), (Time, 'M'), (Time, 'S')]),
            ("-P1D",             true,  vec![(Date, 'D')]),
            ("+PT1M",            false, vec![(Time, 'M')]),
            ("p2y-3m",           false, vec![(Date, 'Y'), (Date, 'M')]),
            ("PT1.5S",           false, vec![(Time, 'S')]),
            ("PT-0,25S",         false, vec![(Time, 'S')]),
        ];
        for (src, negative, expected) in success_cases {
            let amount = IsoAmount::parse(src, FULL).unwrap();
            assert_eq!(amount.is_negative(), negative, "sign of {src}");
            assert_eq!(designators(&amount), expected, "fields of {src}");
        }
    }

    #[test]
    fn rejects_malformed_amounts() {
        let fail_cases = [
            "",           // empty
            "P",          // no field
            "PT",         // no time field
            "P1",         // missing designator
            "1D",         // missing P
            "P1DT",       // dangling T
            "P1D1Y",      // wrong order
            "P1M1M",      // repeated
            "P1X",        // unknown designator
            "P1.5D",      // fraction on a date field
            "PT1.5M",     // fraction on minutes
            "PT1.1234567891S", // more than nanosecond precision
            "P--1D",      // doubled sign
            "P1D ",       // trailing garbage
        ];
        for src in fail_cases {
            let err = IsoAmount::parse(src, FULL).unwrap_err();
            assert!(err.is_parse(), "Parse {src} should fail: {err}");
        }
    }

    #[test]
    fn reports_error_index() {
        let Error::Parse { index, .. } = IsoAmount::parse("P1D1Y", FULL).unwrap_err() else {
            panic!("expected a parse error");
        };
        assert_eq!(index, 3);
    }

    #[test]
    fn converts_field_values() {
        let amount = IsoAmount::parse("P-12DT1.5S", FULL).unwrap();
        let [days, seconds] = amount.fields() else {
            panic!("expected two fields");
        };
        assert_eq!(days.to_i32().unwrap(), -12);
        assert_eq!(seconds.to_i64().unwrap(), 1);
        assert_eq!(seconds.fraction_nanos(), 500_000_000);

        let amount = IsoAmount::parse("PT-0.000000001S", FULL).unwrap();
        let [seconds] = amount.fields() else {
            panic!("expected one field");
        };
        assert_eq!(seconds.to_i64().unwrap(), 0);
        assert_eq!(seconds.fraction_nanos(), -1);

        let amount = IsoAmount::parse("P2147483648D", FULL).unwrap();
        let [days] = amount.fields() else {
            panic!("expected one field");
        };
        assert_eq!(
            days.to_i32(),
            Err(Error::Arithmetic(ArithmeticError::Overflow))
        );
        assert_eq!(days.to_i64().unwrap(), 2_147_483_648);
    }

    #[test]
    fn parses_year_based_text() {
        #[rustfmt::skip]
        let success_cases = [
            ("2015-W01",     'W', 2, (2015, 1)),
            ("2015-w53",     'W', 2, (2015, 53)),
            ("-0001-W10",    'W', 2, (-1, 10)),
            ("+10000-W01",   'W', 2, (10_000, 1)),
            ("2024-Q3",      'Q', 1, (2024, 3)),
            ("0000-q1",      'Q', 1, (0, 1)),
        ];
        for (src, letter, width, expected) in success_cases {
            assert_eq!(parse_year_and_value(src, letter, width).unwrap(), expected, "Failed to parse: {src}");
        }

        let fail_cases = [
            ("15-W01",     'W', 2),
            ("2015-W1",    'W', 2),
            ("2015W01",    'W', 2),
            ("2015-Q1",    'W', 2),
            ("10000-W01",  'W', 2),
            ("+2015-W01",  'W', 2),
            ("2015-W01 ",  'W', 2),
            ("2024-Q12",   'Q', 1),
        ];
        for (src, letter, width) in fail_cases {
            let err = parse_year_and_value(src, letter, width).unwrap_err();
            assert!(err.is_parse(), "Parse {src} should fail: {err}");
        }
    }
}
