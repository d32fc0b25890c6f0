// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chumsky::extra::ParserExtra;
use chumsky::prelude::*;
use jiff::SignedDuration;
use timex_core::ArithmeticError;
use timex_core::math::Exact;

use crate::error::FormatError;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A `<digits>[.<fraction>]<unit>` component, unit in nanoseconds.
#[derive(Debug, Clone)]
struct Component {
    whole: String,
    fraction: Option<String>,
    unit: i128,
}

impl Component {
    fn to_nanos(&self) -> Result<i128, ArithmeticError> {
        let whole = lexical::parse::<i128, _>(&self.whole).map_err(|_| ArithmeticError::Overflow)?;
        let mut nanos = whole.checked_mul(self.unit).ok_or(ArithmeticError::Overflow)?;
        if let Some(fraction) = &self.fraction {
            let digits = lexical::parse::<i128, _>(fraction).map_err(|_| ArithmeticError::Overflow)?;
            let scale = 10_i128.pow(u32::try_from(fraction.len()).map_err(|_| ArithmeticError::Overflow)?);
            nanos = nanos
                .checked_add(digits * self.unit / scale)
                .ok_or(ArithmeticError::Overflow)?;
        }
        Ok(nanos)
    }
}

/// Parse a duration written with unit suffixes, such as `1h 30m`, `-1.5s` or
/// `2d4h`.
///
/// The text is an optional sign followed by one or more components, each a
/// number with an optional fraction and one of the units `d`, `h`, `m`, `s`,
/// `ms`, `us` (or `µs`) and `ns`. Components may be separated by whitespace
/// and may repeat units. A lone `0` is accepted as zero. Fractions finer than
/// a nanosecond are truncated.
///
/// # Errors
///
/// [`FormatError::Parse`] on a grammar violation,
/// [`FormatError::Core`] if the duration overflows.
pub fn parse_unit_based_duration(text: &str) -> Result<SignedDuration, FormatError> {
    if text == "0" {
        return Ok(SignedDuration::ZERO);
    }

    let (negative, components) = unit_based::<extra::Err<Rich<'_, char>>>()
        .parse(text)
        .into_result()
        .map_err(|errs| {
            let (index, message) = errs.first().map_or_else(
                || (0, "invalid duration".to_owned()),
                |e| (e.span().start, e.to_string()),
            );
            tracing::debug!(text, index, %message, "rejected unit-based duration");
            FormatError::parse(text, index, message)
        })?;

    let mut total = 0_i128;
    for component in &components {
        let nanos = component.to_nanos().map_err(timex_core::Error::from)?;
        total = total.add_exact(nanos)?;
    }
    if negative {
        total = total.negate_exact()?;
    }

    let seconds = i64::try_from(total / NANOS_PER_SECOND)
        .map_err(|_| timex_core::Error::from(ArithmeticError::Overflow))?;
    // |total % 1e9| < 1e9
    #[allow(clippy::cast_possible_truncation)]
    let nanos = (total % NANOS_PER_SECOND) as i32;
    Ok(SignedDuration::new(seconds, nanos))
}

/// Grammar:
///
/// ```txt
/// duration  = [sign] 1*(*WSP component *WSP)
/// component = 1*DIGIT ["." 1*DIGIT] unit
/// unit      = "d" / "h" / "m" / "s" / "ms" / "us" / "µs" / "ns"
/// ```
fn unit_based<'src, E>() -> impl Parser<'src, &'src str, (bool, Vec<Component>), E>
where
    E: ParserExtra<'src, &'src str>,
{
    let digit = select! { c @ '0'..='9' => c };
    let whole = digit.repeated().at_least(1).at_most(30).collect::<String>();
    let fraction = just('.').ignore_then(digit.repeated().at_least(1).at_most(18).collect::<String>());
    let unit = choice((
        just("ns").to(1),
        just("us").to(1_000),
        just("µs").to(1_000),
        just("ms").to(1_000_000),
        just("s").to(NANOS_PER_SECOND),
        just("m").to(60 * NANOS_PER_SECOND),
        just("h").to(3_600 * NANOS_PER_SECOND),
        just("d").to(86_400 * NANOS_PER_SECOND),
    ));
    let component = whole
        .then(fraction.or_not())
        .then(unit)
        .map(|((whole, fraction), unit)| Component {
            whole,
            fraction,
            unit,
        });

    one_of("+-")
        .or_not()
        .map(|sign| sign == Some('-'))
        .then(component.padded().repeated().at_least(1).collect::<Vec<_>>())
        .then_ignore(end())
}
