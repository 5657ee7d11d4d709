// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The single error type shared by the reader, the writer and the typed
//! value conversions.

use std::io;

/// Result alias used throughout the crate.
pub type Result<T, E = IcsError> = std::result::Result<T, E>;

/// Errors raised while reading, writing or converting content lines.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum IcsError {
    /// A parameter name was not followed by `=`.
    #[error("Expected '=' <parameter value> after parameter `{parameter}`")]
    MissingEquals {
        /// Name of the parameter being read
        parameter: String,
    },

    /// The name and parameters were not followed by `:`.
    #[error("Expecting a Parameter or Value, found {found}")]
    MissingColon {
        /// Description of what was found instead
        found: String,
    },

    /// A quoted parameter value ran to the end of the line.
    #[error("unterminated quoted value for parameter `{parameter}`")]
    UnterminatedQuote {
        /// Name of the parameter being read
        parameter: String,
    },

    /// An empty or whitespace-only value token.
    #[error("empty value in property `{name}`")]
    EmptyValue {
        /// Name of the property carrying the value
        name: String,
    },

    /// A component was expected but another content line was found.
    #[error("expected BEGIN, found `{found}`")]
    ExpectedBegin {
        /// Name of the content line found instead
        found: String,
    },

    /// An `END` line does not close the innermost open component.
    #[error("END:{found} does not match BEGIN:{expected}")]
    MismatchedEnd {
        /// Name of the innermost open component
        expected: String,
        /// Name carried by the `END` line
        found: String,
    },

    /// Input ended before a component was closed.
    #[error("unexpected end of input inside component `{component}`")]
    UnexpectedEof {
        /// Name of the component left open
        component: String,
    },

    /// Components nested deeper than the reader allows.
    #[error("component `{component}` is nested deeper than {limit} levels")]
    TooDeep {
        /// Name of the component that crossed the limit
        component: String,
        /// The maximum nesting depth
        limit: usize,
    },

    /// A writer was finished while a component was still open.
    #[error("component `{component}` was never closed")]
    UnclosedComponent {
        /// Name of the innermost open component
        component: String,
    },

    /// `END` was requested with no open component.
    #[error("END without a matching BEGIN")]
    UnbalancedEnd,

    /// A property or parameter name that cannot be represented in the grammar.
    #[error("invalid name `{name}`")]
    InvalidName {
        /// The offending name
        name: String,
    },

    /// A parameter value that cannot be represented in the grammar.
    #[error("value `{value}` of parameter `{parameter}` cannot contain a double quote")]
    InvalidParameterValue {
        /// Name of the parameter
        parameter: String,
        /// The offending value
        value: String,
    },

    /// Inline decoding requested with an unrecognised `ENCODING`.
    #[error("unknown encoding `{0}`")]
    UnknownEncoding(String),

    /// A value could not be converted to the requested type.
    #[error("invalid {expected} value `{value}`: {reason}")]
    InvalidValue {
        /// Name of the expected value type
        expected: &'static str,
        /// The raw value
        value: String,
        /// Why the conversion failed
        reason: String,
    },

    /// A fault of the underlying stream.
    #[error("syntax error")]
    Syntax(#[source] io::Error),
}

impl IcsError {
    pub(crate) fn invalid_value(
        expected: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            expected,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<io::Error> for IcsError {
    fn from(err: io::Error) -> Self {
        if err.get_ref().is_some_and(|inner| inner.is::<IcsError>()) {
            if let Some(inner) = err.into_inner() {
                return match inner.downcast::<IcsError>() {
                    Ok(ics) => *ics,
                    Err(other) => Self::Syntax(io::Error::other(other)),
                };
            }
            return Self::Syntax(io::Error::other("stream fault"));
        }
        Self::Syntax(err)
    }
}
