// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read and write iCalendar (RFC 5545) content lines.
//!
//! [`IcsReader`] unfolds physical lines and scans them into [`ContentLine`]s
//! or whole [`Component`] trees. [`IcsWriter`] is its inverse: it escapes,
//! quotes and folds content lines to a fixed octet budget per line.
//!
//! ```
//! use icsline_ical::{IcsReader, IcsWriter};
//!
//! let src = "BEGIN:VEVENT\r\nSUMMARY:Lunch\\, maybe\r\nEND:VEVENT\r\n";
//! let event = IcsReader::new(src.as_bytes()).read_component()?.unwrap();
//! assert_eq!(event.property("summary").unwrap().value(), "Lunch, maybe");
//!
//! let mut writer = IcsWriter::new(Vec::new());
//! writer.write_component(&event)?;
//! assert_eq!(writer.finish()?, src.as_bytes());
//! # Ok::<(), icsline_ical::IcsError>(())
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod component;
pub mod content_line;
pub mod error;
pub mod escape;
pub mod formatter;
pub mod keyword;
pub mod language;
pub mod parameter;
pub mod syntax;
pub mod value;

pub use crate::component::Component;
pub use crate::content_line::ContentLine;
pub use crate::error::{IcsError, Result};
pub use crate::formatter::{FoldingStyle, FormatOptions, IcsWriter, format};
pub use crate::language::{LanguageTag, LanguageTagRegistry};
pub use crate::parameter::{Encoding, Parameter, Parameters, ValueType};
pub use crate::syntax::{IcsReader, parse, parse_content_line};
pub use crate::value::{
    MailAddress, ValueDate, ValueDateTime, ValueDuration, ValueGeo, ValueTime, ValueUtcOffset,
};
