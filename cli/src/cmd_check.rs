// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;
use icsline_ical::{Component, FormatOptions, IcsWriter};

use crate::input::{file_arg, get_file, read_components, read_input};

/// Validate a stream without producing output beyond a summary.
#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub file: Option<PathBuf>,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check that a file reads cleanly and can be written back")
            .arg(file_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: get_file(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking...");
        let input = read_input(self.file.as_deref()).await?;
        let summary = check(&input)?;
        println!(
            "{} {} components, {} content lines",
            "OK:".green(),
            summary.components,
            summary.content_lines
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub components: usize,
    pub content_lines: usize,
}

/// Read every component, then write it to a sink so that lines the writer
/// would refuse are reported too.
pub fn check(input: &[u8]) -> Result<CheckSummary, Box<dyn Error>> {
    let components = read_components(input)?;

    let mut writer = IcsWriter::with_options(io::sink(), FormatOptions::unfolded());
    let mut summary = CheckSummary {
        components: 0,
        content_lines: 0,
    };
    for component in &components {
        writer.write_component(component)?;
        count(component, &mut summary);
    }
    writer.finish()?;
    Ok(summary)
}

fn count(component: &Component, summary: &mut CheckSummary) {
    let mut pending = vec![component];
    while let Some(component) = pending.pop() {
        summary.components += 1;
        summary.content_lines += component.properties.len() + 2;
        pending.extend(&component.children);
    }
}

#[cfg(test)]
mod tests {
    use icsline_ical::{ContentLine, IcsReader};

    use super::*;

    #[test]
    fn counts_components_and_lines() {
        let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\n\
                     BEGIN:VEVENT\r\nUID:1\r\nSUMMARY:x\r\nEND:VEVENT\r\n\
                     END:VCALENDAR\r\n";
        let summary = check(input.as_bytes()).unwrap();
        assert_eq!(
            summary,
            CheckSummary {
                components: 2,
                content_lines: 7,
            }
        );
    }

    #[test]
    fn counts_deeply_nested_tree() {
        let depth = 100_000;
        let mut tree = Component::new("X");
        tree.push_property(ContentLine::new("UID", "1"));
        for _ in 1..depth {
            let mut parent = Component::new("X");
            parent.push_child(tree);
            tree = parent;
        }

        let mut summary = CheckSummary {
            components: 0,
            content_lines: 0,
        };
        count(&tree, &mut summary);
        assert_eq!(summary.components, depth);
        assert_eq!(summary.content_lines, 2 * depth + 1);

        while let Some(child) = tree.children.pop() {
            tree = child;
        }
    }

    #[test]
    fn checks_nesting_at_the_reader_limit() {
        let depth = IcsReader::<&[u8]>::MAX_DEPTH;
        let input = format!("{}{}", "BEGIN:X\r\n".repeat(depth), "END:X\r\n".repeat(depth));
        let summary = check(input.as_bytes()).unwrap();
        assert_eq!(summary.components, depth);

        let input = format!("BEGIN:X\r\n{input}END:X\r\n");
        let err = check(input.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with(&format!("line {}: ", depth + 1)), "{err}");
    }

    #[test]
    fn reports_reader_errors_with_line() {
        let input = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEND:VTODO\r\n";
        let err = check(input.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("line 3: "), "{err}");
    }

    #[test]
    fn reports_unwritable_lines() {
        let input = "BEGIN:VEVENT\r\nX-NOTE;X-P=\"a\":b\r\nSUMMARY: \r\nEND:VEVENT\r\n";
        assert!(check(input.as_bytes()).is_err());
    }
}
