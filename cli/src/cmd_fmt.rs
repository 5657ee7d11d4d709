// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::{ArgMatches, Command, arg, value_parser};
use icsline_ical::{FormatOptions, IcsWriter};

use crate::config::Config;
use crate::input::{file_arg, get_file, read_components, read_input};

/// Re-emit an iCalendar stream with normalised names, escapes and folding.
#[derive(Debug, Clone)]
pub struct CmdFmt {
    pub file: Option<PathBuf>,
    pub max_octets: Option<usize>,
    pub no_fold: bool,
}

impl CmdFmt {
    pub const NAME: &str = "fmt";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("format")
            .about("Rewrite an iCalendar file with normalised folding and escaping")
            .arg(file_arg())
            .arg(
                arg!(--"max-octets" <OCTETS> "Fold lines longer than this many octets")
                    .value_parser(value_parser!(usize))
                    .conflicts_with("no-fold"),
            )
            .arg(arg!(--"no-fold" "Write every content line on a single physical line"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: get_file(matches),
            max_octets: matches.get_one("max-octets").copied(),
            no_fold: matches.get_flag("no-fold"),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "formatting...");
        let options = self.options(config);
        let input = read_input(self.file.as_deref()).await?;

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        format_input(&input, options, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Command-line flags take precedence over the configuration file.
    pub fn options(&self, config: &Config) -> FormatOptions {
        let options = config.format.options();
        if self.no_fold {
            options.folding(None)
        } else if let Some(max) = self.max_octets {
            options.folding((max > 0).then_some(max))
        } else {
            options
        }
    }
}

/// Parse `input` and write it back with `options`.
pub fn format_input(
    input: &[u8],
    options: FormatOptions,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let components = read_components(input)?;
    let mut writer = IcsWriter::with_options(out, options);
    for component in &components {
        writer.write_component(component)?;
    }
    writer.finish()?;
    Ok(())
}
