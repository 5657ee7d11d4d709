// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::APP_NAME;
use crate::cmd_check::CmdCheck;
use crate::cmd_fmt::CmdFmt;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_lines::CmdLines;
use crate::cmd_tree::CmdTree;
use crate::config::parse_config;

/// Run the icsline command-line interface.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Read, check and re-fold iCalendar (RFC 5545) content lines.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $ICSLINE_CONFIG, then \
$XDG_CONFIG_HOME/icsline/config.toml on Linux and MacOS, \
%APPDATA%/icsline/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdFmt::command())
            .subcommand(CmdLines::command())
            .subcommand(CmdTree::command())
            .subcommand(CmdCheck::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdFmt::NAME, matches)) => Fmt(CmdFmt::from(matches)),
            Some((CmdLines::NAME, matches)) => Lines(CmdLines::from(matches)),
            Some((CmdTree::NAME, matches)) => Tree(CmdTree::from(matches)),
            Some((CmdCheck::NAME, matches)) => Check(CmdCheck::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Re-emit a normalised, folded stream
    Fmt(CmdFmt),

    /// List content lines
    Lines(CmdLines),

    /// Show the component outline
    Tree(CmdTree),

    /// Validate a stream
    Check(CmdCheck),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command; only `fmt` reads the configuration file.
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Fmt(a) => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                a.run(&config).await
            }
            Lines(a) => a.run().await,
            Tree(a) => a.run().await,
            Check(a) => a.run().await,
            GenerateCompletion(a) => a.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml", "check"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Check(_)));

        let cli = Cli::try_parse_from(vec!["test", "fmt", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(vec!["test"]).is_err());
    }

    #[test]
    fn test_parse_fmt() {
        let args = vec!["test", "fmt", "cal.ics", "--max-octets", "60"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Fmt(cmd) => {
                assert_eq!(cmd.file, Some(PathBuf::from("cal.ics")));
                assert_eq!(cmd.max_octets, Some(60));
            }
            _ => panic!("Expected Fmt command"),
        }

        let cli = Cli::try_parse_from(vec!["test", "format", "--no-fold"]).unwrap();
        assert!(matches!(cli.command, Commands::Fmt(CmdFmt { no_fold: true, .. })));
    }

    #[test]
    fn test_parse_lines() {
        let cli = Cli::try_parse_from(vec!["test", "lines"]).unwrap();
        match cli.command {
            Commands::Lines(cmd) => assert_eq!(cmd.file, None),
            _ => panic!("Expected Lines command"),
        }
        let cli = Cli::try_parse_from(vec!["test", "ls", "a.ics"]).unwrap();
        assert!(matches!(cli.command, Commands::Lines(_)));
    }

    #[test]
    fn test_parse_tree() {
        let cli = Cli::try_parse_from(vec!["test", "tree", "--verbose"]).unwrap();
        assert!(matches!(cli.command, Commands::Tree(CmdTree { verbose: true, .. })));
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(vec!["test", "check", "-"]).unwrap();
        match cli.command {
            Commands::Check(cmd) => assert_eq!(cmd.file, None),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }

    #[tokio::test]
    async fn test_run_check_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.ics");
        std::fs::write(&good, "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n").unwrap();
        let bad = dir.path().join("bad.ics");
        std::fs::write(&bad, "BEGIN:VCALENDAR\r\nVERSION\r\n").unwrap();

        let cli = Cli::try_parse_from(["test", "check", good.to_str().unwrap()]).unwrap();
        cli.run().await.unwrap();

        let cli = Cli::try_parse_from(["test", "check", bad.to_str().unwrap()]).unwrap();
        let err = cli.run().await.unwrap_err();
        assert!(err.to_string().starts_with("line 2: "), "{err}");
    }

    #[tokio::test]
    async fn test_fmt_with_broken_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "[format]\nmax_line_octets = \"wide\"\n").unwrap();
        let input = dir.path().join("a.ics");
        std::fs::write(&input, "BEGIN:A\r\nEND:A\r\n").unwrap();

        let cli = Cli::try_parse_from([
            "test",
            "-c",
            config.to_str().unwrap(),
            "fmt",
            input.to_str().unwrap(),
        ])
        .unwrap();
        assert!(cli.run().await.is_err());
    }
}
