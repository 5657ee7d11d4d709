// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Content line formatting (RFC 5545 Section 3.1).

use std::io::Write;

use crate::content_line::ContentLine;
use crate::error::{IcsError, Result};
use crate::escape::{check_name, is_blank};
use crate::formatter::Formatter;
use crate::formatter::parameter::{prepare_parameters, write_parameters};

/// Write one content line without the trailing line break.
///
/// The line is validated before the first octet is written, so a rejected
/// line leaves the output untouched.
///
/// ## Errors
/// - [`IcsError::InvalidName`] if the property or a parameter name cannot be
///   written as-is
/// - [`IcsError::EmptyValue`] if there is no value or any value is blank
/// - [`IcsError::InvalidParameterValue`] if a parameter value contains `"`
/// - [`IcsError::Syntax`] if the underlying writer fails
pub(crate) fn write_content_line<W: Write>(
    f: &mut Formatter<W>,
    line: &ContentLine,
) -> Result<()> {
    check_name(line.name())?;
    let values = line.values();
    if values.is_empty() || values.iter().any(|v| is_blank(v)) {
        return Err(IcsError::EmptyValue {
            name: line.name().to_string(),
        });
    }
    let parameters = prepare_parameters(line.parameters())?;

    f.write_str(&line.name().to_ascii_uppercase())?;
    write_parameters(f, &parameters)?;
    f.write_unit(":")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_unit(",")?;
        }
        f.write_escaped(value)?;
    }
    Ok(())
}
