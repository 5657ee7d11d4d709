// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! FLOAT and INTEGER values (RFC 5545 Sections 3.3.7 and 3.3.8) and the
//! GEO pair built on them.

use std::fmt::{self, Display};

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;

use crate::value::miscellaneous::ValueExpected;

/// Geographic position, RFC 5545 Section 3.8.1.6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueGeo {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Display for ValueGeo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.latitude, self.longitude)
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// float      = (["+"] / "-") 1*DIGIT ["." 1*DIGIT]
/// ```
pub fn value_float<'src, I, E>() -> impl Parser<'src, I, f64, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let digits = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .collect::<String>();

    sign()
        .or_not()
        .then(digits)
        .then(just('.').ignore_then(digits).or_not())
        .try_map_with(|((sign, int_part), frac_part), e| {
            let mut s = String::with_capacity(int_part.len() + 16);
            if let Some(sign) = sign {
                s.push(sign);
            }
            s.push_str(&int_part);
            if let Some(frac) = frac_part {
                s.push('.');
                s.push_str(&frac);
            }

            match lexical::parse::<f64, _>(&s) {
                Ok(f) if f.is_finite() => Ok(f),
                _ => Err(E::Error::expected_found([ValueExpected::F64], None, e.span())),
            }
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// integer    = (["+"] / "-") 1*DIGIT
/// ```
pub fn value_integer<'src, I, E>() -> impl Parser<'src, I, i32, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    sign()
        .or_not()
        .then(
            select! { c @ '0'..='9' => c }
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .try_map_with(|(sign, digits), e| {
            let mut s = String::with_capacity(digits.len() + 1);
            if let Some(sign) = sign {
                s.push(sign);
            }
            s.push_str(&digits);

            lexical::parse::<i32, _>(&s)
                .map_err(|_| E::Error::expected_found([ValueExpected::I32], None, e.span()))
        })
}

/// Format Definition:
///
/// ```txt
/// geovalue = float ";" float
/// ;Latitude and Longitude components
/// ```
pub fn value_geo<'src, I, E>() -> impl Parser<'src, I, ValueGeo, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_float()
        .then_ignore(just(';'))
        .then(value_float())
        .map(|(latitude, longitude)| ValueGeo {
            latitude,
            longitude,
        })
}

const fn sign<'src, I, E>() -> impl Parser<'src, I, char, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c @ ('+' | '-') => c }
}
