// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::{ArgMatches, Command};
use colored::Colorize;
use icsline_ical::ContentLine;

use crate::input::{file_arg, get_file, read_content_lines, read_input};

/// List the unfolded content lines of a stream.
#[derive(Debug, Clone)]
pub struct CmdLines {
    pub file: Option<PathBuf>,
}

impl CmdLines {
    pub const NAME: &str = "lines";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List content lines with their parameters and decoded values")
            .arg(file_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: get_file(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing content lines...");
        let input = read_input(self.file.as_deref()).await?;

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        list_lines(&input, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Write one row per content line: physical line number, name, parameters
/// and the decoded values.
pub fn list_lines(input: &[u8], out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    for (number, line) in read_content_lines(input)? {
        writeln!(out, "{}  {}", format!("{number:>5}").dimmed(), describe(&line))?;
    }
    Ok(())
}

fn describe(line: &ContentLine) -> String {
    let mut row = line.name().to_ascii_uppercase().bold().to_string();
    for parameter in line.parameters().into_iter().flatten() {
        let name = parameter.name.to_ascii_uppercase();
        let pair = format!(" {}={}", name, parameter.values.join(","));
        row.push_str(&pair.cyan().to_string());
    }
    for value in line.values() {
        row.push_str(&format!(" {value:?}"));
    }
    row
}
