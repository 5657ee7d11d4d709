// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use strum::{AsRefStr, Display, EnumString};

/// Inline encoding of a property value (RFC 5545 Section 3.2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Encoding {
    /// 8-bit text encoding, the default for text values
    #[strum(serialize = "8BIT")]
    Bit8,
    /// Base64 encoding of binary data
    #[strum(serialize = "BASE64")]
    Base64,
}

/// Value data type declared by the `VALUE` parameter (RFC 5545 Section 3.2.20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING-KEBAB-CASE")]
#[expect(missing_docs)]
pub enum ValueType {
    Binary,
    Boolean,
    CalAddress,
    Date,
    DateTime,
    Duration,
    Float,
    Integer,
    Period,
    Recur,
    Text,
    Time,
    Uri,
    UtcOffset,
}
