// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use icsline_ical::Component;

use crate::input::{file_arg, get_file, read_components, read_input};

/// Print the component outline of a stream.
#[derive(Debug, Clone)]
pub struct CmdTree {
    pub file: Option<PathBuf>,
    pub verbose: bool,
}

impl CmdTree {
    pub const NAME: &str = "tree";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the nesting of components")
            .arg(file_arg())
            .arg(arg!(-v --verbose "List property names under each component"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: get_file(matches),
            verbose: matches.get_flag("verbose"),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing component tree...");
        let input = read_input(self.file.as_deref()).await?;
        let components = read_components(&input)?;

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        for component in &components {
            write_tree(&mut out, component, 0, self.verbose)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Write `component` and its children, two spaces of indent per level.
pub fn write_tree(
    out: &mut impl Write,
    component: &Component,
    depth: usize,
    verbose: bool,
) -> io::Result<()> {
    let mut pending = vec![(component, depth)];
    while let Some((component, depth)) = pending.pop() {
        let indent = "  ".repeat(depth);
        let count = component.properties.len();
        let noun = if count == 1 { "property" } else { "properties" };
        writeln!(
            out,
            "{indent}{} {}",
            component.name.to_ascii_uppercase().green().bold(),
            format!("({count} {noun})").dimmed()
        )?;

        if verbose {
            for property in &component.properties {
                writeln!(out, "{indent}  - {}", property.name().to_ascii_uppercase())?;
            }
        }
        pending.extend(component.children.iter().rev().map(|child| (child, depth + 1)));
    }
    Ok(())
}
