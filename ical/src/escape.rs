// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Backslash escapes inside values and quoting of parameter values.
//!
//! Reading recognises `\n`/`\N` as a line break and degrades every other
//! `\X` to a literal `X`. Writing escapes `\`, `,` and line breaks. A
//! semicolon is left as-is in values, although it forces quoting in
//! parameter values.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{IcsError, Result};

/// Line break produced when decoding `\n` in a value.
pub const CRLF: &str = "\r\n";

/// Returns `true` if the string is empty or only whitespace.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Smallest piece of escaped output that must not be split by folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// A character written verbatim
    Char(char),
    /// A two-character escape sequence
    Escaped(&'static str),
}

/// Iterator over the escaped units of a value.
#[derive(Debug, Clone)]
pub(crate) struct EscapeUnits<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for EscapeUnits<'_> {
    type Item = Unit;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        let unit = match c {
            '\\' => Unit::Escaped(r"\\"),
            ',' => Unit::Escaped(r"\,"),
            '\r' => {
                self.chars.next_if_eq(&'\n');
                Unit::Escaped(r"\n")
            }
            '\n' => Unit::Escaped(r"\n"),
            c => Unit::Char(c),
        };
        Some(unit)
    }
}

pub(crate) fn escape_units(value: &str) -> EscapeUnits<'_> {
    EscapeUnits {
        chars: value.chars().peekable(),
    }
}

/// Escape a single value for output.
///
/// `\` becomes `\\`, `,` becomes `\,` and a line break (CRLF, or a lone CR
/// or LF) becomes `\n`. `;` is written unescaped.
#[must_use]
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', ',', '\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for unit in escape_units(value) {
        match unit {
            Unit::Char(c) => out.push(c),
            Unit::Escaped(s) => out.push_str(s),
        }
    }
    Cow::Owned(out)
}

/// Split and decode a raw value list.
///
/// `name` is only used to describe errors.
///
/// ## Errors
/// Returns [`IcsError::EmptyValue`] if any value in the list is empty or
/// whitespace-only.
pub fn decode_values(name: &str, raw: &str) -> Result<Vec<String>> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n' | 'N') => current.push_str(CRLF),
                Some(other) => current.push(other),
                None => current.push('\\'),
            },
            ',' => values.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    values.push(current);

    if values.iter().any(|v| is_blank(v)) {
        return Err(IcsError::EmptyValue {
            name: name.to_string(),
        });
    }
    Ok(values)
}

/// Check that a property or parameter name can be written as-is.
///
/// A name must be non-empty and free of whitespace, control characters and
/// the delimiters `:`, `;`, `=`, `,` and `"`, all of which would end the name
/// early or start a new physical line when read back.
///
/// ## Errors
/// Returns [`IcsError::InvalidName`] for any other name.
pub fn check_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, ':' | ';' | '=' | ',' | '"')
        });
    if invalid {
        return Err(IcsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Prepare a parameter value for output.
///
/// Line breaks are normalised to LF and written as the two characters `\n`.
/// The value is wrapped in double quotes if it contains `,`, `;`, `:` or a
/// line break.
///
/// ## Errors
/// Returns [`IcsError::InvalidParameterValue`] if the value contains a
/// double quote, which no form of parameter value can carry.
pub fn quote_parameter_value<'a>(parameter: &str, value: &'a str) -> Result<Cow<'a, str>> {
    if value.contains('"') {
        return Err(IcsError::InvalidParameterValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
        });
    }

    let has_newline = value.contains(['\r', '\n']);
    if !has_newline && !value.contains([',', ';', ':']) {
        return Ok(Cow::Borrowed(value));
    }

    let normalized = if has_newline {
        value
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\n', r"\n")
    } else {
        value.to_string()
    };
    Ok(Cow::Owned(format!("\"{normalized}\"")))
}
