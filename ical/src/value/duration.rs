// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type as defined in RFC 5545 Section 3.3.6.

use std::fmt::{self, Display};

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

#[cfg(feature = "jiff")]
use crate::error::IcsError;
#[cfg(feature = "jiff")]
use crate::keyword::KW_DURATION;
use crate::value::miscellaneous::ValueExpected;

/// Duration Value defined in RFC 5545 Section 3.3.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDuration {
    /// Date and Time Duration
    DateTime {
        /// Whether the duration is positive
        positive: bool,
        /// Day Duration
        day: u32,
        /// Hour Duration
        hour: u32,
        /// Minute Duration
        minute: u32,
        /// Second Duration
        second: u32,
    },

    /// Week Duration
    Week {
        /// Whether the duration is positive
        positive: bool,
        /// Week Duration
        week: u32,
    },
}

impl ValueDuration {
    /// Whether the duration is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        match self {
            Self::DateTime { positive, .. } | Self::Week { positive, .. } => *positive,
        }
    }

    /// Convert to a `jiff::Span` with the same units.
    ///
    /// ## Errors
    /// Returns an error if a unit exceeds the range of a span.
    #[cfg(feature = "jiff")]
    pub fn to_span(self) -> Result<jiff::Span, jiff::Error> {
        let span = match self {
            Self::Week { week, .. } => jiff::Span::new().try_weeks(i64::from(week))?,
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => jiff::Span::new()
                .try_days(i64::from(day))?
                .try_hours(i64::from(hour))?
                .try_minutes(i64::from(minute))?
                .try_seconds(i64::from(second))?,
        };
        Ok(if self.is_positive() {
            span
        } else {
            span.negate()
        })
    }
}

impl Display for ValueDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive() {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        match *self {
            Self::Week { week, .. } => write!(f, "{week}W"),
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => {
                if day > 0 {
                    write!(f, "{day}D")?;
                }
                if hour == 0 && minute == 0 && second == 0 {
                    return if day == 0 { write!(f, "T0S") } else { Ok(()) };
                }

                write!(f, "T")?;
                // dur-hour = H [dur-minute], dur-minute = M [dur-second]
                if hour > 0 {
                    write!(f, "{hour}H")?;
                }
                if minute > 0 || (hour > 0 && second > 0) {
                    write!(f, "{minute}M")?;
                }
                if second > 0 {
                    write!(f, "{second}S")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "jiff")]
impl TryFrom<jiff::Span> for ValueDuration {
    type Error = IcsError;

    /// Only weeks, days, hours, minutes and seconds can be carried.
    fn try_from(span: jiff::Span) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| IcsError::invalid_value(KW_DURATION, span.to_string(), reason);
        if span.get_years() != 0 || span.get_months() != 0 {
            return Err(invalid("calendar units cannot be represented"));
        }
        if span.get_milliseconds() != 0
            || span.get_microseconds() != 0
            || span.get_nanoseconds() != 0
        {
            return Err(invalid("sub-second units cannot be represented"));
        }

        let unit = |v: i64| u32::try_from(v.unsigned_abs()).map_err(|_| invalid("out of range"));
        let positive = span.signum() >= 0;
        let week = unit(i64::from(span.get_weeks()))?;
        let day = unit(i64::from(span.get_days()))?;
        let hour = unit(i64::from(span.get_hours()))?;
        let minute = unit(span.get_minutes())?;
        let second = unit(span.get_seconds())?;

        if day == 0 && hour == 0 && minute == 0 && second == 0 && week > 0 {
            return Ok(Self::Week { positive, week });
        }
        let day = week
            .checked_mul(7)
            .and_then(|d| d.checked_add(day))
            .ok_or_else(|| invalid("out of range"))?;
        Ok(Self::DateTime {
            positive,
            day,
            hour,
            minute,
            second,
        })
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
pub fn value_duration<'src, I, E>() -> impl Parser<'src, I, ValueDuration, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // case-sensitive
    let int = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits: 4_294_967_295
        .collect::<String>()
        .try_map_with(|digits, e| {
            lexical::parse::<u32, _>(&digits)
                .map_err(|_| E::Error::expected_found([ValueExpected::U32], None, e.span()))
        });

    let second = int.then_ignore(just('S'));
    let minute = int.then_ignore(just('M'));
    let hour = int.then_ignore(just('H'));

    let second_only = second.map(|s| (0, 0, s));
    let minute_with_second = minute
        .then(second.or_not())
        .map(|(m, s)| (0, m, s.unwrap_or(0)));
    let hour_with_minute = hour
        .then(minute.then(second.or_not()).or_not())
        .map(|(h, ms)| match ms {
            Some((m, s)) => (h, m, s.unwrap_or(0)),
            None => (h, 0, 0),
        });

    let time = just('T').ignore_then(choice((hour_with_minute, minute_with_second, second_only)));
    let date = int.then_ignore(just('D')).then(time.or_not());
    let week = int.then_ignore(just('W'));

    let sign = select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|sign| !matches!(sign, Some('-')));

    sign.then_ignore(just('P')).then(choice((
        date.map(|(day, time)| {
            let (hour, minute, second) = time.unwrap_or((0, 0, 0));
            (day, hour, minute, second, None)
        }),
        time.map(|(hour, minute, second)| (0, hour, minute, second, None)),
        week.map(|w| (0, 0, 0, 0, Some(w))),
    )))
    .map(|(positive, (day, hour, minute, second, week))| match week {
        Some(week) => ValueDuration::Week { positive, week },
        None => ValueDuration::DateTime {
            positive,
            day,
            hour,
            minute,
            second,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<ValueDuration, Vec<Rich<'_, char>>> {
        value_duration::<'_, _, extra::Err<_>>()
            .parse(src)
            .into_result()
    }

    #[test]
    fn parses_duration() {
        use ValueDuration::Week;

        let dt = |positive, day, hour, minute, second| ValueDuration::DateTime {
            positive,
            day,
            hour,
            minute,
            second,
        };
        #[rustfmt::skip]
        let success_cases = [
            ("P15DT5H0M20S", dt(true,  15, 5,  0,  20)),
            ("P2W",          Week { positive: true,  week: 2 }),
            ("-P1W",         Week { positive: false, week: 1 }),
            ("+P3DT4H5M6S",  dt(true,  3,  4,  5,  6)),
            ("-PT10H11M12S", dt(false, 0,  10, 11, 12)),
            ("PT15M",        dt(true,  0,  0,  15, 0)),
            ("P7D",          dt(true,  7,  0,  0,  0)),
        ];
        for (src, expected) in success_cases {
            assert_eq!(parse(src).unwrap(), expected, "Failed to parse: {src}");
        }

        for src in ["P", "PT", "P3X", "P-3W", "P3DT4H5M6", "3W", "P10H11M12S3", "P99999999999D"] {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn displays_in_canonical_form() {
        for (src, expected) in [
            ("P15DT5H0M20S", "P15DT5H0M20S"),
            ("PT1H0M0S", "PT1H"),
            ("+P2W", "P2W"),
            ("-PT15M", "-PT15M"),
            ("P1D", "P1D"),
            ("PT0S", "PT0S"),
            ("PT0H0M0S", "PT0S"),
            ("PT90S", "PT90S"),
        ] {
            assert_eq!(parse(src).unwrap().to_string(), expected, "{src}");
        }
    }

    #[test]
    fn display_reads_back() {
        for src in ["P15DT5H0M20S", "-P3W", "PT1H30M", "P2DT45S", "-PT5S"] {
            let value = parse(src).unwrap();
            assert_eq!(parse(&value.to_string()).unwrap(), value, "{src}");
        }
    }

    #[cfg(feature = "jiff")]
    #[test]
    fn converts_to_and_from_span() {
        let value = parse("-P1DT2H").unwrap();
        let span = value.to_span().unwrap();
        assert_eq!(span.get_days(), -1);
        assert_eq!(span.get_hours(), -2);
        assert_eq!(ValueDuration::try_from(span).unwrap(), value);

        let weeks = jiff::Span::new().weeks(2);
        assert_eq!(ValueDuration::try_from(weeks).unwrap().to_string(), "P2W");

        assert!(ValueDuration::try_from(jiff::Span::new().months(1)).is_err());
    }
}
