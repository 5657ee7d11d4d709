// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use icsline_ical::{Component, ContentLine, IcsReader};
use tokio::{fs, io::AsyncReadExt};

/// Positional `[FILE]` argument shared by every reading command.
pub fn file_arg() -> Arg {
    arg!(file: [FILE] "iCalendar file to read, `-` or omitted for stdin")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

pub fn get_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<PathBuf>("file")
        .filter(|path| path.as_os_str() != "-")
        .cloned()
}

/// Read the whole input, from `file` or from stdin.
pub async fn read_input(file: Option<&Path>) -> Result<Vec<u8>, Box<dyn Error>> {
    match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading file...");
            fs::read(path)
                .await
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
        }
        None => {
            tracing::debug!("reading stdin...");
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Read every top-level component, reporting the physical line of a failure.
pub fn read_components(input: &[u8]) -> Result<Vec<Component>, Box<dyn Error>> {
    let mut reader = IcsReader::new(input);
    let mut components = Vec::new();
    loop {
        match reader.read_component() {
            Ok(Some(component)) => components.push(component),
            Ok(None) => return Ok(components),
            Err(e) => return Err(format!("line {}: {}", reader.line_number(), e).into()),
        }
    }
}

/// Read every content line together with the physical line it ends on.
pub fn read_content_lines(input: &[u8]) -> Result<Vec<(usize, ContentLine)>, Box<dyn Error>> {
    let mut reader = IcsReader::new(input);
    let mut lines = Vec::new();
    loop {
        match reader.read_content_line() {
            Ok(Some(line)) => lines.push((reader.line_number(), line)),
            Ok(None) => return Ok(lines),
            Err(e) => return Err(format!("line {}: {}", reader.line_number(), e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_failing_line() {
        let src = b"BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBROKEN\r\nEND:VCALENDAR\r\n";
        let err = read_components(src).unwrap_err();
        assert!(err.to_string().starts_with("line 3: "), "{err}");

        let err = read_content_lines(src).unwrap_err();
        assert!(err.to_string().starts_with("line 3: "), "{err}");
    }

    #[test]
    fn numbers_logical_lines_by_last_physical_line() {
        let src = b"A:1\r\nB:2\r\n more\r\nC:3\r\n";
        let lines = read_content_lines(src).unwrap();
        let numbers: Vec<usize> = lines.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, [1, 3, 4]);
        assert_eq!(lines[1].1.value(), "2more");
    }

    #[tokio::test]
    async fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ics");
        std::fs::write(&path, "A:1\r\n").unwrap();
        assert_eq!(read_input(Some(&path)).await.unwrap(), b"A:1\r\n");

        let missing = dir.path().join("missing.ics");
        assert!(read_input(Some(&missing)).await.is_err());
    }
}
