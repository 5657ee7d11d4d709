// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the iCalendar writer.

use icsline_ical::{
    Component, ContentLine, FoldingStyle, FormatOptions, IcsError, IcsWriter, format, parse,
};

fn write_line(line: &ContentLine, options: FormatOptions) -> String {
    let mut writer = IcsWriter::with_options(Vec::new(), options);
    writer.write(line).unwrap();
    String::from_utf8(writer.finish().unwrap()).unwrap()
}

#[test]
fn escapes_summary() {
    let line = ContentLine::new("SUMMARY", "a,b\\c");
    assert_eq!(write_line(&line, FormatOptions::default()), "SUMMARY:a\\,b\\\\c\r\n");
}

#[test]
fn semicolon_in_value_is_written_unescaped() {
    // Known deviation from RFC 5545 Section 3.3.11, kept for compatibility
    // with existing readers of this format.
    let line = ContentLine::new("LOCATION", "Room 1; Floor 2");
    assert_eq!(
        write_line(&line, FormatOptions::default()),
        "LOCATION:Room 1; Floor 2\r\n"
    );
}

#[test]
fn quotes_parameter_values_with_delimiters() {
    let line = ContentLine::new("ATTENDEE", "mailto:jane@example.com")
        .with_parameter("cn", "Doe, Jane")
        .with_parameter("member", "mailto:a@x")
        .with_parameter("member", "mailto:b@y")
        .with_parameter("x-note", "line one\r\nline two");
    assert_eq!(
        write_line(&line, FormatOptions::unfolded()),
        "ATTENDEE;CN=\"Doe, Jane\";MEMBER=\"mailto:a@x\",\"mailto:b@y\";\
         X-NOTE=\"line one\\nline two\":mailto:jane@example.com\r\n"
    );
}

#[test]
fn folds_at_75_octets_by_default() {
    let prefix = "DESCRIPTION:";
    let at_limit = ContentLine::new("DESCRIPTION", "a".repeat(75 - prefix.len()));
    let out = write_line(&at_limit, FormatOptions::default());
    assert_eq!(out.len(), 75 + 2);
    assert_eq!(out.matches("\r\n").count(), 1);

    let over = ContentLine::new("DESCRIPTION", "a".repeat(76 - prefix.len()));
    let out = write_line(&over, FormatOptions::default());
    let physical: Vec<&str> = out.trim_end_matches("\r\n").split("\r\n").collect();
    assert_eq!(physical.len(), 2);
    assert_eq!(physical[0].len(), 75);
    assert_eq!(physical[1], " a");
}

#[test]
fn every_physical_line_fits_the_budget() {
    let value = "\u{1F4C5} Kalenderwoche f\u{fc}r \u{65e5}\u{672c} ".repeat(20);
    let line = ContentLine::new("SUMMARY", value.as_str()).with_parameter("LANGUAGE", "de");
    for max in [10, 40, 75] {
        let out = write_line(&line, FormatOptions::default().folding(Some(max)));
        for physical in out.trim_end_matches("\r\n").split("\r\n") {
            assert!(physical.len() <= max, "{max}: {physical:?}");
            assert!(physical.len() > 1, "{max}: {physical:?}");
        }
    }
}

#[test]
fn folds_with_tab_when_asked() {
    let line = ContentLine::new("X", "abcdefgh");
    let options = FormatOptions::default()
        .folding(Some(6))
        .folding_style(FoldingStyle::Tab);
    assert_eq!(write_line(&line, options), "X:abcd\r\n\tefgh\r\n");
}

#[test]
fn skips_blank_parameters() {
    let line = ContentLine::new("SUMMARY", "x")
        .with_parameter("LANGUAGE", " ")
        .with_parameter("X-A", "1");
    assert_eq!(write_line(&line, FormatOptions::default()), "SUMMARY;X-A=1:x\r\n");
}

#[test]
fn rejects_unwritable_lines() {
    let mut writer = IcsWriter::new(Vec::new());
    assert!(matches!(
        writer.write(&ContentLine::new("SUMMARY", "   ")),
        Err(IcsError::EmptyValue { .. })
    ));
    assert!(matches!(
        writer.write(&ContentLine::new("X", "v").with_parameter("P", "say \"hi\"")),
        Err(IcsError::InvalidParameterValue { .. })
    ));
    assert!(writer.finish().unwrap().is_empty());
}

#[test]
fn rejects_names_that_would_break_the_stream() {
    let mut writer = IcsWriter::with_options(Vec::new(), FormatOptions::unfolded());
    writer.write_begin_component("VCALENDAR").unwrap();

    let injected = ContentLine::new("X-A\r\nEND:VCALENDAR\r\nX-B", "v");
    assert!(matches!(
        writer.write(&injected),
        Err(IcsError::InvalidName { name }) if name == injected.name()
    ));
    assert!(matches!(
        writer.write(&ContentLine::new("X;Y", "v")),
        Err(IcsError::InvalidName { .. })
    ));
    assert!(matches!(
        writer.write(&ContentLine::new("X", "v").with_parameter("P:Q", "w")),
        Err(IcsError::InvalidName { name }) if name == "P:Q"
    ));
    assert!(matches!(
        writer.write_begin_component("VEVENT\r\nEND:VCALENDAR"),
        Err(IcsError::InvalidName { .. })
    ));

    writer.write(&ContentLine::new("X-B", "v")).unwrap();
    writer.write_end_component().unwrap();
    let out = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(out, "BEGIN:VCALENDAR\r\nX-B:v\r\nEND:VCALENDAR\r\n");

    let components = parse(&out).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].properties.len(), 1);
    assert!(components[0].children.is_empty());
}

#[test]
fn nesting_errors() {
    let mut writer = IcsWriter::new(Vec::new());
    assert!(matches!(
        writer.write_end_component(),
        Err(IcsError::UnbalancedEnd)
    ));

    writer.write_begin_component("VCALENDAR").unwrap();
    writer.write_begin_component("VEVENT").unwrap();
    writer.write_end_component().unwrap();
    assert_eq!(writer.open_components(), ["VCALENDAR"]);
    assert!(matches!(
        writer.finish(),
        Err(IcsError::UnclosedComponent { component }) if component == "VCALENDAR"
    ));
}

#[test]
fn formats_parsed_calendar() {
    let input = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp.//Cal Client 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:12345@example.com\r\n\
DTSTAMP:20250110T120000Z\r\n\
SUMMARY:Test Event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    let calendars = parse(input).unwrap();
    assert_eq!(format(&calendars).unwrap(), input);
}

#[test]
fn formats_with_options_to_string() {
    let mut calendar = Component::new("vcalendar");
    calendar.push_property(ContentLine::new("x-long", "y".repeat(20)));
    let out = FormatOptions::default()
        .folding(Some(10))
        .write_to_string(&[calendar])
        .unwrap();
    assert_eq!(
        out,
        "BEGIN:vcal\r\n endar\r\nX-LONG:yyy\r\n yyyyyyyyy\r\n yyyyyyyy\r\nEND:vcalen\r\n dar\r\n"
    );
}
