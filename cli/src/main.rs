// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! icsline - read, check and re-fold iCalendar content lines

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    icsline_cli::run().await
}
