// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

/// Opens a component
pub const KW_BEGIN: &str = "BEGIN";
/// Closes a component
pub const KW_END: &str = "END";

// Section 3.2 - Property Parameters
/// Common name of a calendar user
pub const KW_CN: &str = "CN";
/// Inline encoding
pub const KW_ENCODING: &str = "ENCODING";
/// `ENCODING` value for 8-bit text
pub const KW_ENCODING_8BIT: &str = "8BIT";
/// `ENCODING` value for base64 binary data
pub const KW_ENCODING_BASE64: &str = "BASE64";
/// Format type of a referenced or inline object
pub const KW_FMTTYPE: &str = "FMTTYPE";
/// Language of a text value
pub const KW_LANGUAGE: &str = "LANGUAGE";
/// Time zone identifier
pub const KW_TZID: &str = "TZID";
/// Explicit value data type
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
/// Inline binary data
pub const KW_BINARY: &str = "BINARY";
/// `TRUE` or `FALSE`
pub const KW_BOOLEAN: &str = "BOOLEAN";
/// Calendar user address, usually a `mailto:` URI
pub const KW_CAL_ADDRESS: &str = "CAL-ADDRESS";
/// Calendar date
pub const KW_DATE: &str = "DATE";
/// Calendar date with time of day
pub const KW_DATETIME: &str = "DATE-TIME";
/// Duration of time
pub const KW_DURATION: &str = "DURATION";
/// Real number
pub const KW_FLOAT: &str = "FLOAT";
/// Signed integer
pub const KW_INTEGER: &str = "INTEGER";
/// Time of day
pub const KW_TIME: &str = "TIME";
/// Offset from UTC
pub const KW_UTC_OFFSET: &str = "UTC-OFFSET";

/// Boolean true
pub const KW_BOOLEAN_TRUE: &str = "TRUE";
/// Boolean false
pub const KW_BOOLEAN_FALSE: &str = "FALSE";

/// Scheme prefix of a mail address
pub const KW_MAILTO: &str = "mailto:";
