// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed convenience writers.
//!
//! Every writer here omits the content line when the value is absent,
//! empty or blank, so optional properties can be written unconditionally.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::content_line::ContentLine;
use crate::error::Result;
use crate::escape::is_blank;
use crate::formatter::IcsWriter;
use crate::keyword::{
    KW_BINARY, KW_BOOLEAN_FALSE, KW_BOOLEAN_TRUE, KW_CN, KW_DATE, KW_ENCODING, KW_ENCODING_BASE64,
    KW_FMTTYPE, KW_LANGUAGE, KW_TZID, KW_VALUE,
};
use crate::language::LanguageTag;
use crate::value::{
    MailAddress, ValueDate, ValueDateTime, ValueDuration, ValueGeo, ValueUtcOffset,
};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_blank(v))
}

impl<W: Write> IcsWriter<W> {
    /// Write a TEXT property.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_text(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        self.write_text_with_language(name, value, None)
    }

    /// Write a TEXT property with an optional `LANGUAGE` parameter.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_text_with_language(
        &mut self,
        name: &str,
        value: Option<&str>,
        language: Option<&LanguageTag>,
    ) -> Result<()> {
        let Some(value) = non_blank(value) else {
            return Ok(());
        };
        let mut line = ContentLine::new(name, value);
        if let Some(language) = language {
            line = line.with_parameter(KW_LANGUAGE, language.as_str());
        }
        self.write(&line)
    }

    /// Write a multi-valued TEXT property such as `CATEGORIES`; blank items
    /// are skipped.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_texts<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Result<()> {
        let values: Vec<&str> = values
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| !is_blank(v))
            .collect();
        if values.is_empty() {
            return Ok(());
        }
        self.write(&ContentLine::with_values(name, values))
    }

    /// Write a DATE property, marked with `VALUE=DATE`.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_date(&mut self, name: &str, value: Option<ValueDate>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };
        self.write(&ContentLine::new(name, value.to_string()).with_parameter(KW_VALUE, KW_DATE))
    }

    /// Write a DATE-TIME property.
    ///
    /// `tzid` is attached only to local times; a UTC value carries its `Z`.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_date_time(
        &mut self,
        name: &str,
        value: Option<ValueDateTime>,
        tzid: Option<&str>,
    ) -> Result<()> {
        match value {
            Some(value) => self.write_date_times(name, &[value], tzid),
            None => Ok(()),
        }
    }

    /// Write a list of DATE-TIME values, as in `EXDATE` or `RDATE`.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_date_times(
        &mut self,
        name: &str,
        values: &[ValueDateTime],
        tzid: Option<&str>,
    ) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        let mut line = ContentLine::with_values(name, values.iter().map(ToString::to_string));
        let tzid = non_blank(tzid).filter(|_| !values.iter().all(ValueDateTime::is_utc));
        if let Some(tzid) = tzid {
            line = line.with_parameter(KW_TZID, tzid);
        }
        self.write(&line)
    }

    /// Write a DURATION property.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_duration(&mut self, name: &str, value: Option<ValueDuration>) -> Result<()> {
        self.write_display(name, value)
    }

    /// Write a UTC-OFFSET property such as `TZOFFSETFROM`.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_utc_offset(&mut self, name: &str, value: Option<ValueUtcOffset>) -> Result<()> {
        self.write_display(name, value)
    }

    /// Write a `latitude;longitude` pair.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_geo(&mut self, name: &str, value: Option<ValueGeo>) -> Result<()> {
        self.write_display(name, value)
    }

    /// Write a CAL-ADDRESS property with the display name as `CN`.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_mail_address(&mut self, name: &str, value: Option<&MailAddress>) -> Result<()> {
        let Some(value) = value.filter(|v| !is_blank(&v.address)) else {
            return Ok(());
        };
        let mut line = ContentLine::new(name, value.uri());
        if let Some(cn) = non_blank(value.name.as_deref()) {
            line = line.with_parameter(KW_CN, cn);
        }
        self.write(&line)
    }

    /// Write a BOOLEAN property.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_boolean(&mut self, name: &str, value: Option<bool>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };
        let text = if value { KW_BOOLEAN_TRUE } else { KW_BOOLEAN_FALSE };
        self.write(&ContentLine::new(name, text))
    }

    /// Write an INTEGER property.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_integer(&mut self, name: &str, value: Option<i32>) -> Result<()> {
        self.write_display(name, value)
    }

    /// Write a URI property with an optional `FMTTYPE` parameter.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_uri(
        &mut self,
        name: &str,
        value: Option<&str>,
        fmttype: Option<&str>,
    ) -> Result<()> {
        let Some(value) = non_blank(value) else {
            return Ok(());
        };
        let mut line = ContentLine::new(name, value);
        if let Some(fmttype) = non_blank(fmttype) {
            line = line.with_parameter(KW_FMTTYPE, fmttype);
        }
        self.write(&line)
    }

    /// Write inline binary data as `BASE64`.
    ///
    /// ## Errors
    /// Same as [`IcsWriter::write`].
    pub fn write_binary(&mut self, name: &str, data: &[u8], fmttype: Option<&str>) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        let mut line = ContentLine::new(name, STANDARD.encode(data));
        if let Some(fmttype) = non_blank(fmttype) {
            line = line.with_parameter(KW_FMTTYPE, fmttype);
        }
        let line = line
            .with_parameter(KW_ENCODING, KW_ENCODING_BASE64)
            .with_parameter(KW_VALUE, KW_BINARY);
        self.write(&line)
    }

    fn write_display<T: ToString>(&mut self, name: &str, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => self.write(&ContentLine::new(name, value.to_string())),
            None => Ok(()),
        }
    }
}
