// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reading iCalendar text (RFC 5545 Section 3.1), untyped.
//!
//! The [`reader`] unfolds physical lines, the [`lexer`] splits one logical
//! line into tokens, and the [`scanner`] turns those tokens into a
//! [`ContentLine`].

pub mod lexer;
pub mod reader;
pub mod scanner;

use crate::component::Component;
use crate::content_line::ContentLine;
use crate::error::Result;

pub use crate::syntax::reader::IcsReader;
pub use crate::syntax::scanner::scan_content_line;

/// Parse one content line, folded or not.
///
/// ## Errors
/// Returns the first error of [`IcsReader::read_content_line`]. Input
/// without any content line is reported as a missing `:`.
pub fn parse_content_line(src: &str) -> Result<ContentLine> {
    match IcsReader::new(src.as_bytes()).read_content_line()? {
        Some(line) => Ok(line),
        None => scan_content_line(src),
    }
}

/// Parse every top-level component in `src`.
///
/// ## Errors
/// Returns the first error of [`IcsReader::read_component`].
pub fn parse(src: &str) -> Result<Vec<Component>> {
    let mut reader = IcsReader::new(src.as_bytes());
    let mut components = Vec::new();
    while let Some(component) = reader.read_component()? {
        components.push(component);
    }
    Ok(components)
}
