// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of icsline: format, list, outline and check
//! iCalendar files.

mod cli;
mod cmd_check;
mod cmd_fmt;
mod cmd_generate_completion;
mod cmd_lines;
mod cmd_tree;
mod config;
mod input;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_check::{CheckSummary, check};
pub use crate::cmd_fmt::format_input;
pub use crate::config::{Config, FormatConfig, parse_config};

const APP_NAME: &str = "icsline";
