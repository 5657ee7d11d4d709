// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for reading content lines.

use icsline_ical::{IcsError, IcsReader, parse, parse_content_line};

#[test]
fn reads_attachment_line() {
    let line = parse_content_line(
        "ATTACH;FMTTYPE=text/plain;ENCODING=BASE64;VALUE=BINARY:VGhlIHF1aWNr",
    )
    .unwrap();

    assert_eq!(line.name(), "ATTACH");
    assert_eq!(line.parameter("FMTTYPE"), Some("text/plain"));
    assert_eq!(line.parameter("ENCODING"), Some("BASE64"));
    assert_eq!(line.parameter("VALUE"), Some("BINARY"));
    assert_eq!(line.values(), ["VGhlIHF1aWNr"]);
    assert_eq!(line.decode_inline().unwrap(), b"The quick");
}

#[test]
fn reads_multi_valued_member_parameter() {
    let line =
        parse_content_line(r#"ATTENDEE;MEMBER="mailto:a@x","mailto:b@y":mailto:c@z"#).unwrap();
    let members: Vec<_> = line.parameters().unwrap().values("MEMBER").collect();
    assert_eq!(members, ["mailto:a@x", "mailto:b@y"]);
}

#[test]
fn error_triggers() {
    assert!(matches!(
        parse_content_line("NAME;PARAM VALUE"),
        Err(IcsError::MissingEquals { .. })
    ));
    assert!(matches!(
        parse_content_line("NAME;P=V"),
        Err(IcsError::MissingColon { .. })
    ));
    assert!(matches!(
        parse_content_line("NAME:,"),
        Err(IcsError::EmptyValue { .. })
    ));
    assert!(matches!(
        parse_content_line("NAME;P=\"open:value"),
        Err(IcsError::UnterminatedQuote { .. })
    ));
}

#[test]
fn error_messages_are_descriptive() {
    let err = parse_content_line("NAME;PARAM VALUE").unwrap_err();
    assert!(err.to_string().starts_with("Expected '=' <parameter value>"));

    let err = parse_content_line("NAME;P=V").unwrap_err();
    assert!(err.to_string().starts_with("Expecting a Parameter or Value"));
}

#[test]
fn over_escaped_values_degrade_to_literals() {
    let line = parse_content_line(r"X-NOTE:\a\b\;c\Nd").unwrap();
    assert_eq!(line.values(), ["ab;c\r\nd"]);
}

#[test]
fn reads_crlf_and_lf_input_alike() {
    let crlf = "BEGIN:VEVENT\r\nSUMMARY:Long\r\n  text\r\nEND:VEVENT\r\n";
    let lf = crlf.replace("\r\n", "\n");
    assert_eq!(parse(crlf).unwrap(), parse(&lf).unwrap());
    assert_eq!(
        parse(&lf).unwrap()[0].property("SUMMARY").unwrap().value(),
        "Long text"
    );
}

#[test]
fn reads_tab_folded_lines() {
    let src = "DESCRIPTION:one\r\n\ttwo\r\n\t three\r\n";
    let line = parse_content_line(src).unwrap();
    assert_eq!(line.value(), "onetwo three");
}

#[test]
fn iterates_over_content_lines() {
    let src = "BEGIN:VTODO\r\nUID:1\r\nSTATUS:NEEDS-ACTION\r\nEND:VTODO\r\n";
    let names: Vec<String> = IcsReader::new(src.as_bytes())
        .map(|line| line.unwrap().name().to_string())
        .collect();
    assert_eq!(names, ["BEGIN", "UID", "STATUS", "END"]);
}

#[test]
fn reports_line_numbers() {
    let src = "A:1\r\nB:2\r\n 2\r\nC:\r\n";
    let mut reader = IcsReader::new(src.as_bytes());
    reader.read_content_line().unwrap();
    reader.read_content_line().unwrap();
    assert_eq!(reader.line_number(), 3);
    assert!(reader.read_content_line().is_err());
    assert_eq!(reader.line_number(), 4);
}

#[test]
fn component_errors() {
    assert!(matches!(
        parse("BEGIN:VCALENDAR\r\nEND:VEVENT\r\n"),
        Err(IcsError::MismatchedEnd { .. })
    ));
    assert!(matches!(
        parse("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\n"),
        Err(IcsError::UnexpectedEof { component }) if component == "VEVENT"
    ));
    assert!(matches!(
        parse("VERSION:2.0\r\n"),
        Err(IcsError::ExpectedBegin { .. })
    ));
}
