// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Streaming reader that unfolds physical lines and assembles components.
//!
//! A physical line ends with CRLF or a bare LF. A following line starting
//! with SPACE or HTAB continues the previous one: the fold character is
//! dropped and the rest is appended without a separator. Unfolding works on
//! bytes, so a fold may fall inside a multi-byte UTF-8 sequence.

use std::io::{self, BufRead};

use crate::component::Component;
use crate::content_line::ContentLine;
use crate::error::{IcsError, Result};
use crate::keyword::{KW_BEGIN, KW_END};
use crate::syntax::scanner::scan_content_line;

/// Reads content lines and components from a buffered stream.
///
/// The reader owns its stream; use [`IcsReader::into_inner`] to take it
/// back, or hand in `&mut R` to keep ownership with the caller.
#[derive(Debug)]
pub struct IcsReader<R> {
    inner: R,
    line_number: usize,
}

impl<R: BufRead> IcsReader<R> {
    /// Wrap a buffered stream.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_number: 0,
        }
    }

    /// Number of the last physical line consumed, starting at 1.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Release the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read the next logical content line, or `None` at end of input.
    ///
    /// ## Errors
    /// - any error of [`scan_content_line`]
    /// - [`IcsError::Syntax`] for stream faults and invalid UTF-8
    pub fn read_content_line(&mut self) -> Result<Option<ContentLine>> {
        let Some(logical) = self.read_logical_line()? else {
            return Ok(None);
        };
        let line = scan_content_line(&logical)?;
        tracing::trace!(line = self.line_number, name = line.name(), "read content line");
        Ok(Some(line))
    }

    /// Deepest component nesting accepted by [`IcsReader::read_component`];
    /// the outermost component is level 1.
    pub const MAX_DEPTH: usize = 1024;

    /// Read the next `BEGIN`/`END` block with everything nested in it, or
    /// `None` at end of input.
    ///
    /// ## Errors
    /// - [`IcsError::ExpectedBegin`] if the next line is not `BEGIN`
    /// - [`IcsError::MismatchedEnd`] if an `END` closes the wrong component
    /// - [`IcsError::UnexpectedEof`] if the input ends inside a component
    /// - [`IcsError::TooDeep`] past [`IcsReader::MAX_DEPTH`] nested components
    /// - any error of [`IcsReader::read_content_line`]
    pub fn read_component(&mut self) -> Result<Option<Component>> {
        let Some(line) = self.read_content_line()? else {
            return Ok(None);
        };
        if !line.is(KW_BEGIN) {
            return Err(IcsError::ExpectedBegin {
                found: line.name().to_string(),
            });
        }

        // Open components, innermost last.
        let mut stack = vec![Component::new(line.value().into_owned())];
        loop {
            let Some(line) = self.read_content_line()? else {
                let component = stack.pop().map(|c| c.name).unwrap_or_default();
                return Err(IcsError::UnexpectedEof { component });
            };

            if line.is(KW_BEGIN) {
                let name = line.value().into_owned();
                if stack.len() >= Self::MAX_DEPTH {
                    return Err(IcsError::TooDeep {
                        component: name,
                        limit: Self::MAX_DEPTH,
                    });
                }
                stack.push(Component::new(name));
            } else if line.is(KW_END) {
                let Some(component) = stack.pop() else {
                    return Err(IcsError::UnbalancedEnd);
                };
                let found = line.value();
                if !found.eq_ignore_ascii_case(&component.name) {
                    return Err(IcsError::MismatchedEnd {
                        expected: component.name,
                        found: found.into_owned(),
                    });
                }
                tracing::debug!(
                    name = %component.name,
                    properties = component.properties.len(),
                    children = component.children.len(),
                    "read component"
                );
                match stack.last_mut() {
                    Some(parent) => parent.push_child(component),
                    None => return Ok(Some(component)),
                }
            } else if let Some(current) = stack.last_mut() {
                current.push_property(line);
            }
        }
    }

    /// Next non-blank logical line with folds removed.
    fn read_logical_line(&mut self) -> Result<Option<String>> {
        loop {
            let mut buf = Vec::new();
            if self.read_physical_line(&mut buf)? == 0 {
                return Ok(None);
            }

            while matches!(self.inner.fill_buf()?.first(), Some(b' ' | b'\t')) {
                self.inner.consume(1);
                self.read_physical_line(&mut buf)?;
            }

            if buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            return String::from_utf8(buf)
                .map(Some)
                .map_err(|e| IcsError::Syntax(io::Error::new(io::ErrorKind::InvalidData, e)));
        }
    }

    /// Append one physical line to `buf` without its line break.
    fn read_physical_line(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let start = buf.len();
        let read = self.inner.read_until(b'\n', buf)?;
        if read > 0 {
            self.line_number += 1;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.len() > start && buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(read)
    }
}

impl<R: BufRead> Iterator for IcsReader<R> {
    type Item = Result<ContentLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_content_line().transpose()
    }
}
