// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) writer.
//!
//! Content lines are written to any `std::io::Write` implementer, folded to
//! a maximum number of octets per physical line.
//!
//! # Example
//!
//! ```
//! use icsline_ical::{ContentLine, IcsWriter};
//!
//! let mut writer = IcsWriter::new(Vec::new());
//! writer.write_begin_component("VCALENDAR")?;
//! writer.write(&ContentLine::new("summary", "a,b"))?;
//! writer.write_end_component()?;
//! let out = writer.finish()?;
//! assert_eq!(out, b"BEGIN:VCALENDAR\r\nSUMMARY:a\\,b\r\nEND:VCALENDAR\r\n");
//! # Ok::<(), icsline_ical::IcsError>(())
//! ```

mod component;
mod parameter;
mod property;
mod value;

use std::io::{self, Write};

use crate::component::Component;
use crate::error::{IcsError, Result};
use crate::escape::{Unit, escape_units};

pub use crate::formatter::component::IcsWriter;
pub(crate) use crate::formatter::property::write_content_line;

/// Format components to a `String` with default options.
///
/// ## Errors
/// Returns the first error of [`IcsWriter::write_component`].
pub fn format(components: &[Component]) -> Result<String> {
    FormatOptions::default().write_to_string(components)
}

/// Formatting options for the iCalendar writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Options that never fold, used for diagnostics and `Display`.
    #[must_use]
    pub fn unfolded() -> Self {
        Self::default().folding(None)
    }

    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Write components to any `Write` implementer.
    ///
    /// ## Errors
    /// Returns the first error of [`IcsWriter::write_component`].
    pub fn write(&self, components: &[Component], w: &mut impl Write) -> Result<()> {
        let mut writer = IcsWriter::with_options(w, *self);
        for component in components {
            writer.write_component(component)?;
        }
        writer.finish()?;
        Ok(())
    }

    /// Write components to a `String`.
    ///
    /// ## Errors
    /// Returns the first error of [`IcsWriter::write_component`].
    pub fn write_to_string(&self, components: &[Component]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(components, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| IcsError::Syntax(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// Octet-counting line writer shared by the content-line and component
/// writers.
///
/// Output is written in units that are never split by a fold: a single
/// `char`, or a two-character escape sequence.
#[derive(Debug)]
pub(crate) struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
}

impl<W: Write> Formatter<W> {
    pub(crate) fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
        }
    }

    pub(crate) fn options(&self) -> FormatOptions {
        self.options
    }

    /// Consumes this formatter, returning the underlying writer.
    pub(crate) fn into_writer(self) -> W {
        self.writer
    }

    /// Write one unit, folding first if it would overflow the line.
    ///
    /// At most one fold is inserted per unit, so a continuation line always
    /// carries content even when a unit is wider than the limit.
    pub(crate) fn write_unit(&mut self, unit: &str) -> io::Result<()> {
        let overflows = self
            .options
            .folding
            .is_some_and(|max_len| max_len > 0 && self.line_length + unit.len() > max_len);
        if overflows && self.line_length > 0 {
            self.insert_fold()?;
        }
        self.writer.write_all(unit.as_bytes())?;
        self.line_length += unit.len();
        Ok(())
    }

    /// Write text verbatim, one `char` per unit.
    pub(crate) fn write_str(&mut self, s: &str) -> io::Result<()> {
        let mut buf = [0; 4];
        for c in s.chars() {
            self.write_unit(c.encode_utf8(&mut buf))?;
        }
        Ok(())
    }

    /// Write a value with backslash escapes applied.
    pub(crate) fn write_escaped(&mut self, value: &str) -> io::Result<()> {
        let mut buf = [0; 4];
        for unit in escape_units(value) {
            match unit {
                Unit::Char(c) => self.write_unit(c.encode_utf8(&mut buf))?,
                Unit::Escaped(s) => self.write_unit(s)?,
            }
        }
        Ok(())
    }

    /// Write a CRLF line ending.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Insert line folding: CRLF + whitespace.
    ///
    /// The whitespace after CRLF counts as 1 byte of the new line.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = FoldingStyle::continuation_len();
        Ok(())
    }
}
