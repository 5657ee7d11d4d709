// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed property values as defined in RFC 5545 Section 3.3.
//!
//! Each value type comes with a `chumsky` parser over one already unescaped
//! value string, and a `Display` implementation producing the fixed output
//! format used by the writer.

mod cal_address;
mod datetime;
mod duration;
mod miscellaneous;
mod numeric;

pub use crate::value::cal_address::MailAddress;
pub use crate::value::datetime::{ValueDate, ValueDateTime, ValueTime, ValueUtcOffset};
pub use crate::value::duration::ValueDuration;
pub use crate::value::numeric::ValueGeo;

pub(crate) use crate::value::datetime::{value_date, value_date_time, value_time, value_utc_offset};
pub(crate) use crate::value::duration::value_duration;
pub(crate) use crate::value::miscellaneous::{value_binary, value_boolean};
pub(crate) use crate::value::numeric::{value_float, value_geo, value_integer};

use chumsky::prelude::*;

use crate::error::{IcsError, Result};

/// Run a value parser over the whole of `src`.
///
/// The first parser error becomes the reason of an [`IcsError::InvalidValue`].
pub(crate) fn parse_value<'src, T, P>(
    parser: P,
    expected: &'static str,
    src: &'src str,
) -> Result<T>
where
    P: Parser<'src, &'src str, T, extra::Err<Rich<'src, char>>>,
{
    parser.parse(src).into_result().map_err(|errs| {
        let reason = errs
            .first()
            .map_or_else(|| "malformed value".to_string(), ToString::to_string);
        IcsError::invalid_value(expected, src, reason)
    })
}
