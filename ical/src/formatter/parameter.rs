// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter formatting (RFC 5545 Section 3.2).

use std::borrow::Cow;
use std::io::Write;

use crate::error::Result;
use crate::escape::{check_name, is_blank, quote_parameter_value};
use crate::formatter::Formatter;
use crate::parameter::Parameters;

/// A parameter ready to be written: upper-cased name and quoted values.
#[derive(Debug)]
pub(crate) struct PreparedParameter<'a> {
    name: String,
    values: Vec<Cow<'a, str>>,
}

/// Quote every parameter value up front, so that a value the grammar cannot
/// carry fails the line before anything is written.
///
/// Blank values are dropped, and so is a parameter left without values.
/// Every name is checked, including names of dropped parameters.
pub(crate) fn prepare_parameters(
    parameters: Option<&Parameters>,
) -> Result<Vec<PreparedParameter<'_>>> {
    let mut prepared = Vec::new();
    for parameter in parameters.into_iter().flatten() {
        check_name(&parameter.name)?;
        let values = parameter
            .values
            .iter()
            .filter(|v| !is_blank(v))
            .map(|v| quote_parameter_value(&parameter.name, v))
            .collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            continue;
        }
        prepared.push(PreparedParameter {
            name: parameter.name.to_ascii_uppercase(),
            values,
        });
    }
    Ok(prepared)
}

/// Write `;NAME=value[,value...]` for each prepared parameter.
pub(crate) fn write_parameters<W: Write>(
    f: &mut Formatter<W>,
    parameters: &[PreparedParameter<'_>],
) -> Result<()> {
    for parameter in parameters {
        f.write_unit(";")?;
        f.write_str(&parameter.name)?;
        f.write_unit("=")?;
        for (i, value) in parameter.values.iter().enumerate() {
            if i > 0 {
                f.write_unit(",")?;
            }
            f.write_str(value)?;
        }
    }
    Ok(())
}
