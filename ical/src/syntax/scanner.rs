// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scanner for iCalendar content lines.
//!
//! Converts the token stream of one unfolded logical line into a
//! [`ContentLine`] in a single left-to-right pass.
//!
//! # Content Line Format
//!
//! ```text
//! contentline = name *(";" param) ":" value-list
//! param       = pname "=" pvalue *("," pvalue)
//! pvalue      = quoted-value / unquoted-value
//! ```

use std::iter::Peekable;
use std::ops::Range;

use crate::content_line::ContentLine;
use crate::error::{IcsError, Result};
use crate::escape::decode_values;
use crate::parameter::Parameters;
use crate::syntax::lexer::{Token, tokenize};

type Spanned<'src> = (Option<Token<'src>>, Range<usize>);

struct Scanner<'src, I: Iterator<Item = Spanned<'src>>> {
    src: &'src str,
    tokens: Peekable<I>,
}

/// Scan one unfolded logical line into a content line.
///
/// ## Errors
/// - [`IcsError::MissingEquals`] if a parameter name is not followed by `=`
/// - [`IcsError::UnterminatedQuote`] if a quoted parameter value is not closed
/// - [`IcsError::MissingColon`] if the parameters are not followed by `:`
/// - [`IcsError::EmptyValue`] if any value in the value list is blank
pub fn scan_content_line(line: &str) -> Result<ContentLine> {
    let mut scanner = Scanner {
        src: line,
        tokens: tokenize(line).peekable(),
    };

    let name = scanner.name();
    let mut parameters: Option<Parameters> = None;

    while scanner.next_is(Token::Semicolon) {
        scanner.tokens.next();
        let param_name = scanner.name();
        if !scanner.next_is(Token::Equal) {
            return Err(IcsError::MissingEquals {
                parameter: param_name,
            });
        }
        scanner.tokens.next();

        let params = parameters.get_or_insert_with(Parameters::new);
        loop {
            let value = scanner.parameter_value(&param_name)?;
            params.append(&param_name, value);
            if scanner.next_is(Token::Comma) {
                scanner.tokens.next();
            } else {
                break;
            }
        }
    }

    match scanner.tokens.next() {
        Some((Some(Token::Colon), span)) => {
            let raw = line.get(span.end..).unwrap_or_default();
            let values = decode_values(&name, raw)?;
            Ok(ContentLine::from_parts(name, parameters, values))
        }
        Some((_, span)) => Err(IcsError::MissingColon {
            found: format!("'{}'", line.get(span).unwrap_or_default()),
        }),
        None => Err(IcsError::MissingColon {
            found: "end of line".to_string(),
        }),
    }
}

impl<'src, I: Iterator<Item = Spanned<'src>>> Scanner<'src, I> {
    fn next_is(&mut self, expected: Token<'_>) -> bool {
        matches!(self.tokens.peek(), Some((Some(tok), _)) if *tok == expected)
    }

    fn slice(&self, span: Range<usize>) -> &'src str {
        self.src.get(span).unwrap_or_default()
    }

    /// Property or parameter name: everything up to `:`, `=` or `;`.
    fn name(&mut self) -> String {
        let mut name = String::new();
        while let Some((tok, span)) = self.tokens.peek() {
            if matches!(tok, Some(Token::Colon | Token::Equal | Token::Semicolon)) {
                break;
            }
            let span = span.clone();
            name.push_str(self.slice(span));
            self.tokens.next();
        }
        name
    }

    fn parameter_value(&mut self, param_name: &str) -> Result<String> {
        if self.next_is(Token::DQuote) {
            self.tokens.next();
            self.quoted_value(param_name)
        } else {
            Ok(self.unquoted_value())
        }
    }

    /// Raw characters up to the closing quote; only `\n` is translated.
    fn quoted_value(&mut self, param_name: &str) -> Result<String> {
        let mut value = String::new();
        loop {
            match self.tokens.next() {
                Some((Some(Token::DQuote), _)) => return Ok(value),
                Some((Some(Token::NewlineEscape), _)) => value.push('\n'),
                Some((_, span)) => value.push_str(self.slice(span)),
                None => {
                    return Err(IcsError::UnterminatedQuote {
                        parameter: param_name.to_string(),
                    });
                }
            }
        }
    }

    /// Characters up to `;`, `:`, `,` or the end of line.
    fn unquoted_value(&mut self) -> String {
        let mut value = String::new();
        while let Some((tok, span)) = self.tokens.peek() {
            if matches!(tok, Some(Token::Semicolon | Token::Colon | Token::Comma)) {
                break;
            }
            let span = span.clone();
            value.push_str(self.slice(span));
            self.tokens.next();
        }
        value
    }
}
