// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! One logical content line: a name, optional parameters and a list of
//! unescaped values.

use std::borrow::Cow;
use std::fmt::{self, Display};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{IcsError, Result};
use crate::escape::decode_values;
use crate::formatter::{FormatOptions, Formatter, write_content_line};
use crate::keyword::{
    KW_BINARY, KW_BOOLEAN, KW_CAL_ADDRESS, KW_CN, KW_DATE, KW_DATETIME, KW_DURATION, KW_ENCODING,
    KW_FLOAT, KW_INTEGER, KW_LANGUAGE, KW_TIME, KW_TZID, KW_UTC_OFFSET, KW_VALUE,
};
use crate::language::{LanguageTag, LanguageTagRegistry};
use crate::parameter::{Encoding, Parameters, ValueType};
use crate::value::{
    MailAddress, ValueDate, ValueDateTime, ValueDuration, ValueGeo, ValueTime, ValueUtcOffset,
    parse_value, value_binary, value_boolean, value_date, value_date_time, value_duration,
    value_float, value_geo, value_integer, value_time, value_utc_offset,
};

/// A logical content line as defined in RFC 5545 Section 3.1.
///
/// The name is matched case-insensitively but kept as written. Parameters
/// are only allocated when first needed. Values are stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    name: String,
    parameters: Option<Parameters>,
    values: Vec<String>,
}

impl ContentLine {
    /// Create a content line with a single value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
            values: vec![value.into()],
        }
    }

    /// Create a content line with a list of values.
    pub fn with_values<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameters: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn from_parts(
        name: String,
        parameters: Option<Parameters>,
        values: Vec<String>,
    ) -> Self {
        Self {
            name,
            parameters,
            values,
        }
    }

    /// Append a parameter value, builder style.
    #[must_use]
    pub fn with_parameter(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parameters_mut().append(name, value);
        self
    }

    /// The name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name matches, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The unescaped values.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Mutable access to the values.
    pub fn values_mut(&mut self) -> &mut Vec<String> {
        &mut self.values
    }

    /// The values joined with `,`.
    ///
    /// Joining is not reversible when a value itself contains a comma, so
    /// this is only a faithful view of lines with at most one value.
    #[must_use]
    pub fn value(&self) -> Cow<'_, str> {
        match self.values.as_slice() {
            [single] => Cow::Borrowed(single),
            values => Cow::Owned(values.join(",")),
        }
    }

    /// Replace the values by splitting `raw` with the value escape grammar.
    ///
    /// ## Errors
    /// Returns [`IcsError::EmptyValue`] if any value in `raw` is blank; the
    /// line is left unchanged in that case.
    pub fn set_value(&mut self, raw: &str) -> Result<()> {
        self.values = decode_values(&self.name, raw)?;
        Ok(())
    }

    /// Whether any parameter is present, without allocating.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        self.parameters.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// The parameters, if any were ever set.
    #[must_use]
    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    /// The parameters, allocated on first use.
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        self.parameters.get_or_insert_with(Parameters::new)
    }

    /// First value of the named parameter.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.as_ref().and_then(|p| p.first(name))
    }

    fn single(&self, expected: &'static str) -> Result<&str> {
        match self.values.as_slice() {
            [single] => Ok(single),
            _ => Err(IcsError::invalid_value(
                expected,
                self.value(),
                format!("expected one value, found {}", self.values.len()),
            )),
        }
    }

    /// The TEXT value; multiple values are joined with `,`.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        self.value()
    }

    /// The value as a DATE.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one valid date.
    pub fn as_date(&self) -> Result<ValueDate> {
        parse_value(value_date(), KW_DATE, self.single(KW_DATE)?)
    }

    /// The value as a TIME.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one valid time.
    pub fn as_time(&self) -> Result<ValueTime> {
        parse_value(value_time(), KW_TIME, self.single(KW_TIME)?)
    }

    /// The value as a DATE-TIME.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one valid
    /// date-time.
    pub fn as_date_time(&self) -> Result<ValueDateTime> {
        parse_value(value_date_time(), KW_DATETIME, self.single(KW_DATETIME)?)
    }

    /// Every value as a DATE-TIME, as in `EXDATE` or `RDATE`.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] for the first malformed value.
    pub fn as_date_times(&self) -> Result<Vec<ValueDateTime>> {
        self.values
            .iter()
            .map(|v| parse_value(value_date_time(), KW_DATETIME, v))
            .collect()
    }

    /// The value as a DURATION.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one valid
    /// duration.
    pub fn as_duration(&self) -> Result<ValueDuration> {
        parse_value(value_duration(), KW_DURATION, self.single(KW_DURATION)?)
    }

    /// The value as a UTC-OFFSET.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one valid
    /// offset.
    pub fn as_utc_offset(&self) -> Result<ValueUtcOffset> {
        parse_value(value_utc_offset(), KW_UTC_OFFSET, self.single(KW_UTC_OFFSET)?)
    }

    /// The value as a `latitude;longitude` pair.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one valid pair.
    pub fn as_geo(&self) -> Result<ValueGeo> {
        const GEO: &str = "GEO";
        parse_value(value_geo(), GEO, self.single(GEO)?)
    }

    /// The value as a `mailto:` address, with the `CN` parameter as name.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one `mailto:`
    /// URI.
    pub fn as_mail_address(&self) -> Result<MailAddress> {
        MailAddress::from_uri(self.single(KW_CAL_ADDRESS)?, self.parameter(KW_CN))
    }

    /// The value as a BOOLEAN.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the value is `TRUE` or `FALSE`.
    pub fn as_boolean(&self) -> Result<bool> {
        parse_value(value_boolean(), KW_BOOLEAN, self.single(KW_BOOLEAN)?)
    }

    /// The value as an INTEGER.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one integer.
    pub fn as_integer(&self) -> Result<i32> {
        parse_value(value_integer(), KW_INTEGER, self.single(KW_INTEGER)?)
    }

    /// The value as a FLOAT.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] unless the line holds one float.
    pub fn as_float(&self) -> Result<f64> {
        parse_value(value_float(), KW_FLOAT, self.single(KW_FLOAT)?)
    }

    /// The `LANGUAGE` parameter, resolved through `registry`.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] if the tag is malformed.
    pub fn language(&self, registry: &mut LanguageTagRegistry) -> Result<Option<LanguageTag>> {
        self.parameter(KW_LANGUAGE)
            .map(|tag| registry.resolve(tag))
            .transpose()
    }

    /// The `TZID` parameter.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.parameter(KW_TZID)
    }

    /// The `VALUE` parameter.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] for a value type this crate does
    /// not know.
    pub fn value_type(&self) -> Result<Option<ValueType>> {
        self.parameter(KW_VALUE)
            .map(|v| {
                v.parse()
                    .map_err(|_| IcsError::invalid_value(KW_VALUE, v, "unknown value type"))
            })
            .transpose()
    }

    /// The `ENCODING` parameter.
    ///
    /// ## Errors
    /// Returns [`IcsError::UnknownEncoding`] for anything but `8BIT` and
    /// `BASE64`.
    pub fn encoding(&self) -> Result<Option<Encoding>> {
        self.parameter(KW_ENCODING)
            .map(|v| v.parse().map_err(|_| IcsError::UnknownEncoding(v.to_string())))
            .transpose()
    }

    /// Decode the inline value according to its `ENCODING` parameter.
    ///
    /// Without an encoding, or with `8BIT`, the bytes of the text are
    /// returned as they are.
    ///
    /// ## Errors
    /// - [`IcsError::UnknownEncoding`] for an unsupported encoding
    /// - [`IcsError::InvalidValue`] if the `BASE64` text is malformed
    pub fn decode_inline(&self) -> Result<Vec<u8>> {
        match self.encoding()? {
            None | Some(Encoding::Bit8) => Ok(self.value().into_owned().into_bytes()),
            Some(Encoding::Base64) => {
                let text = self.single(KW_BINARY)?;
                parse_value(value_binary(), KW_BINARY, text)?;
                STANDARD
                    .decode(text)
                    .map_err(|e| IcsError::invalid_value(KW_BINARY, text, e))
            }
        }
    }
}

impl Display for ContentLine {
    /// Renders the line unfolded and without the trailing line break.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        let mut formatter = Formatter::new(&mut buffer, FormatOptions::unfolded());
        write_content_line(&mut formatter, self).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}
