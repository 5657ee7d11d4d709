// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component nesting on top of the content-line writer.

use std::io::{self, Write};
use std::slice;

use crate::component::Component;
use crate::content_line::ContentLine;
use crate::error::{IcsError, Result};
use crate::escape::check_name;
use crate::formatter::{FormatOptions, Formatter, write_content_line};
use crate::keyword::{KW_BEGIN, KW_END};

/// Writes content lines and components as folded physical lines.
///
/// The writer keeps a stack of open components. [`IcsWriter::finish`] fails
/// if a component is still open; dropping such a writer logs an error.
///
/// The writer owns its stream and hands it back from `finish`. Pass
/// `&mut W` to keep ownership with the caller.
#[derive(Debug)]
pub struct IcsWriter<W: Write> {
    formatter: Option<Formatter<W>>,
    stack: Vec<String>,
}

impl<W: Write> IcsWriter<W> {
    /// Create a writer folding at 75 octets.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, FormatOptions::default())
    }

    /// Create a writer with explicit options.
    pub fn with_options(writer: W, options: FormatOptions) -> Self {
        Self {
            formatter: Some(Formatter::new(writer, options)),
            stack: Vec::new(),
        }
    }

    /// The options this writer was created with.
    #[must_use]
    pub fn options(&self) -> FormatOptions {
        self.formatter
            .as_ref()
            .map(Formatter::options)
            .unwrap_or_default()
    }

    /// Names of the open components, outermost first.
    #[must_use]
    pub fn open_components(&self) -> &[String] {
        &self.stack
    }

    /// Write one content line followed by CRLF.
    ///
    /// ## Errors
    /// - [`IcsError::InvalidName`] if a property or parameter name contains a
    ///   delimiter, whitespace or a control character
    /// - [`IcsError::EmptyValue`] if the line has no value or a blank one
    /// - [`IcsError::InvalidParameterValue`] if a parameter value contains `"`
    /// - [`IcsError::Syntax`] if the underlying writer fails
    pub fn write(&mut self, line: &ContentLine) -> Result<()> {
        let f = self.formatter()?;
        write_content_line(f, line)?;
        f.writeln()?;
        tracing::trace!(name = line.name(), "wrote content line");
        Ok(())
    }

    /// Write `BEGIN:<name>` and open the component.
    ///
    /// ## Errors
    /// - [`IcsError::InvalidName`] if `name` is not a valid name
    /// - any error of [`IcsWriter::write`]; the component is only opened once
    ///   the line is written
    pub fn write_begin_component(&mut self, name: &str) -> Result<()> {
        check_name(name)?;
        self.write(&ContentLine::new(KW_BEGIN, name))?;
        self.stack.push(name.to_string());
        Ok(())
    }

    /// Write `END:<name>` for the innermost open component and close it.
    ///
    /// ## Errors
    /// - [`IcsError::UnbalancedEnd`] if no component is open
    /// - any error of [`IcsWriter::write`]
    pub fn write_end_component(&mut self) -> Result<()> {
        let name = self.stack.last().ok_or(IcsError::UnbalancedEnd)?.clone();
        self.write(&ContentLine::new(KW_END, name.as_str()))?;
        self.stack.pop();
        tracing::debug!(name = %name, "closed component");
        Ok(())
    }

    /// Write a whole component tree, properties before children.
    ///
    /// ## Errors
    /// Returns the first error of [`IcsWriter::write`].
    pub fn write_component(&mut self, component: &Component) -> Result<()> {
        // Children still to write for each component opened here.
        let mut pending = vec![self.open_component(component)?];
        while let Some(children) = pending.last_mut() {
            match children.next() {
                Some(child) => {
                    let grandchildren = self.open_component(child)?;
                    pending.push(grandchildren);
                }
                None => {
                    pending.pop();
                    self.write_end_component()?;
                }
            }
        }
        Ok(())
    }

    /// Write `BEGIN` and the properties of `component`.
    fn open_component<'c>(
        &mut self,
        component: &'c Component,
    ) -> Result<slice::Iter<'c, Component>> {
        self.write_begin_component(&component.name)?;
        for property in &component.properties {
            self.write(property)?;
        }
        Ok(component.children.iter())
    }

    /// Flush the underlying stream.
    ///
    /// ## Errors
    /// Returns [`IcsError::Syntax`] if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.formatter()?.flush()?;
        Ok(())
    }

    /// Check that every component is closed, flush, and release the stream.
    ///
    /// ## Errors
    /// - [`IcsError::UnclosedComponent`] naming the innermost open component
    /// - [`IcsError::Syntax`] if flushing fails
    pub fn finish(mut self) -> Result<W> {
        let stack = std::mem::take(&mut self.stack);
        let formatter = self.formatter.take();
        if let Some(component) = stack.last() {
            return Err(IcsError::UnclosedComponent {
                component: component.clone(),
            });
        }

        let mut formatter = formatter.ok_or_else(finished)?;
        formatter.flush()?;
        Ok(formatter.into_writer())
    }

    fn formatter(&mut self) -> Result<&mut Formatter<W>> {
        self.formatter.as_mut().ok_or_else(finished)
    }
}

impl<W: Write> Drop for IcsWriter<W> {
    fn drop(&mut self) {
        if let Some(component) = self.stack.last() {
            tracing::error!(
                component = %component,
                open = self.stack.len(),
                "writer dropped with unclosed component"
            );
        }
    }
}

fn finished() -> IcsError {
    IcsError::Syntax(io::Error::other("writer already finished"))
}
