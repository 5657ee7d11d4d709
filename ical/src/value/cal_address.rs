// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar user addresses carried as `mailto:` URIs (RFC 5545 Section 3.3.3).

use std::fmt::{self, Display};

use crate::error::{IcsError, Result};
use crate::keyword::{KW_CAL_ADDRESS, KW_MAILTO};

/// An e-mail address with an optional display name.
///
/// The address is written as a `mailto:` URI and the display name goes into
/// the `CN` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MailAddress {
    /// The address without the `mailto:` scheme
    pub address: String,
    /// Common name of the calendar user
    pub name: Option<String>,
}

impl MailAddress {
    /// Create an address without display name.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse a `mailto:` URI, the scheme being matched case-insensitively.
    ///
    /// ## Errors
    /// Returns [`IcsError::InvalidValue`] if the URI is not a `mailto:` URI
    /// or carries no address.
    pub fn from_uri(uri: &str, name: Option<&str>) -> Result<Self> {
        let scheme = uri.get(..KW_MAILTO.len());
        let address = match scheme {
            Some(s) if s.eq_ignore_ascii_case(KW_MAILTO) => uri.get(KW_MAILTO.len()..),
            _ => None,
        };
        match address.map(str::trim) {
            Some(address) if !address.is_empty() => Ok(Self {
                address: address.to_string(),
                name: name.map(ToString::to_string),
            }),
            Some(_) => Err(IcsError::invalid_value(KW_CAL_ADDRESS, uri, "missing address")),
            None => Err(IcsError::invalid_value(
                KW_CAL_ADDRESS,
                uri,
                "expected a mailto: URI",
            )),
        }
    }

    /// The address as a `mailto:` URI.
    #[must_use]
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl Display for MailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KW_MAILTO}{}", self.address)
    }
}
