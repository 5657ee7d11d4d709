// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed values read from parsed content lines and written back through the
//! typed writers.

use icsline_ical::{
    Encoding, IcsError, IcsReader, IcsWriter, LanguageTagRegistry, MailAddress, ValueDuration,
    ValueType, ValueUtcOffset, parse,
};

const CALENDAR: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
DTSTART;TZID=Europe/Berlin:20260123T120000\r\n\
DTSTAMP:20260101T080000Z\r\n\
DURATION:PT1H30M\r\n\
SUMMARY;LANGUAGE=de-de:Besprechung\\, Raum 1\r\n\
GEO:52.52;13.405\r\n\
ORGANIZER;CN=\"Smith, John\":MAILTO:jsmith@example.com\r\n\
EXDATE:20260130T120000,20260206T120000\r\n\
PRIORITY:5\r\n\
X-FLAG;VALUE=BOOLEAN:true\r\n\
END:VEVENT\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
END:VCALENDAR\r\n";

#[test]
fn reads_typed_values() {
    let calendars = parse(CALENDAR).unwrap();
    let calendar = &calendars[0];
    let event = calendar.children_named("VEVENT").next().unwrap();

    let dtstart = event.property("DTSTART").unwrap();
    assert_eq!(dtstart.tzid(), Some("Europe/Berlin"));
    let start = dtstart.as_date_time().unwrap();
    assert!(!start.is_utc());
    assert_eq!(start.to_string(), "20260123T120000");

    assert!(event.property("DTSTAMP").unwrap().as_date_time().unwrap().is_utc());

    let duration = event.property("DURATION").unwrap().as_duration().unwrap();
    assert_eq!(
        duration,
        ValueDuration::DateTime {
            positive: true,
            day: 0,
            hour: 1,
            minute: 30,
            second: 0,
        }
    );

    let mut registry = LanguageTagRegistry::new();
    let summary = event.property("SUMMARY").unwrap();
    assert_eq!(summary.as_text(), "Besprechung, Raum 1");
    assert_eq!(summary.language(&mut registry).unwrap().unwrap().as_str(), "de-DE");

    let geo = event.property("GEO").unwrap().as_geo().unwrap();
    assert!((geo.latitude - 52.52).abs() < 1e-9);
    assert!((geo.longitude - 13.405).abs() < 1e-9);

    let organizer = event.property("ORGANIZER").unwrap().as_mail_address().unwrap();
    assert_eq!(
        organizer,
        MailAddress::new("jsmith@example.com").with_name("Smith, John")
    );

    let exdates = event.property("EXDATE").unwrap().as_date_times().unwrap();
    assert_eq!(exdates.len(), 2);

    assert_eq!(event.property("PRIORITY").unwrap().as_integer().unwrap(), 5);

    let flag = event.property("X-FLAG").unwrap();
    assert_eq!(flag.value_type().unwrap(), Some(ValueType::Boolean));
    assert!(flag.as_boolean().unwrap());

    let standard = calendar
        .children_named("VTIMEZONE")
        .next()
        .unwrap()
        .children_named("STANDARD")
        .next()
        .unwrap();
    let to = standard.property("TZOFFSETTO").unwrap().as_utc_offset().unwrap();
    assert_eq!(to.seconds(), 3600);
}

#[test]
fn typed_conversion_errors() {
    let calendars = parse(CALENDAR).unwrap();
    let event = &calendars[0].children[0];
    assert!(matches!(
        event.property("SUMMARY").unwrap().as_date(),
        Err(IcsError::InvalidValue { .. })
    ));
    assert!(matches!(
        event.property("EXDATE").unwrap().as_date_time(),
        Err(IcsError::InvalidValue { .. })
    ));
    assert!(matches!(
        event.property("GEO").unwrap().as_integer(),
        Err(IcsError::InvalidValue { .. })
    ));
    assert_eq!(event.property("GEO").unwrap().encoding().unwrap(), None);
}

#[test]
fn typed_writers_read_back() {
    let calendars = parse(CALENDAR).unwrap();
    let event = &calendars[0].children[0];
    let mut registry = LanguageTagRegistry::new();
    let summary = event.property("SUMMARY").unwrap();
    let organizer = event.property("ORGANIZER").unwrap().as_mail_address().unwrap();

    let mut writer = IcsWriter::new(Vec::new());
    writer.write_begin_component("VEVENT").unwrap();
    writer
        .write_date_time(
            "DTSTART",
            Some(event.property("DTSTART").unwrap().as_date_time().unwrap()),
            Some("Europe/Berlin"),
        )
        .unwrap();
    writer
        .write_text_with_language(
            "SUMMARY",
            Some(summary.as_text().as_ref()),
            summary.language(&mut registry).unwrap().as_ref(),
        )
        .unwrap();
    writer.write_mail_address("ORGANIZER", Some(&organizer)).unwrap();
    writer
        .write_utc_offset("TZOFFSETTO", Some(ValueUtcOffset::from_seconds(0)))
        .unwrap();
    writer
        .write_binary("ATTACH", b"The quick", Some("text/plain"))
        .unwrap();
    writer.write_end_component().unwrap();
    let bytes = writer.finish().unwrap();

    let written = IcsReader::new(bytes.as_slice())
        .read_component()
        .unwrap()
        .unwrap();
    assert_eq!(
        written.property("DTSTART").unwrap(),
        event.property("DTSTART").unwrap()
    );
    assert_eq!(written.property("SUMMARY").unwrap().as_text(), "Besprechung, Raum 1");
    assert_eq!(
        written.property("SUMMARY").unwrap().parameter("LANGUAGE"),
        Some("de-DE")
    );
    assert_eq!(
        written.property("ORGANIZER").unwrap().as_mail_address().unwrap(),
        organizer
    );

    let offset = written.property("TZOFFSETTO").unwrap();
    assert_eq!(offset.value(), "0000");
    assert!(offset.as_utc_offset().unwrap().is_zero());

    let attach = written.property("ATTACH").unwrap();
    assert_eq!(attach.encoding().unwrap(), Some(Encoding::Base64));
    assert_eq!(attach.decode_inline().unwrap(), b"The quick");
}

#[cfg(feature = "jiff")]
#[test]
fn converts_to_and_from_jiff() {
    use icsline_ical::{ValueDate, ValueDateTime};

    let date = ValueDate::from(jiff::civil::date(2026, 2, 28));
    assert_eq!(date.to_string(), "20260228");
    assert_eq!(date.civil_date().unwrap(), jiff::civil::date(2026, 2, 28));

    let dt = ValueDateTime::from(jiff::civil::date(2026, 1, 23).at(12, 30, 0, 0));
    assert_eq!(dt.to_string(), "20260123T123000");
    assert_eq!(
        dt.civil_date_time().unwrap(),
        jiff::civil::date(2026, 1, 23).at(12, 30, 0, 0)
    );

    let ts: jiff::Timestamp = "2026-01-23T11:00:00Z".parse().unwrap();
    assert_eq!(ValueDateTime::from(ts).to_string(), "20260123T110000Z");

    let offset = ValueUtcOffset::from(jiff::tz::offset(-5));
    assert_eq!(offset.to_string(), "-0500");
    assert_eq!(jiff::tz::Offset::try_from(offset).unwrap(), jiff::tz::offset(-5));

    let duration = ValueDuration::try_from(jiff::Span::new().hours(1).minutes(30)).unwrap();
    assert_eq!(duration.to_string(), "PT1H30M");
    let span = duration.to_span().unwrap();
    assert_eq!(span.get_hours(), 1);
    assert_eq!(span.get_minutes(), 30);

    assert!(ValueDuration::try_from(jiff::Span::new().months(1)).is_err());
}
