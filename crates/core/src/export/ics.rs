//! iCalendar (RFC 5545) serialization
//!
//! Start/end instants are written as UTC date-times, which need no
//! VTIMEZONE component and denote the same instants as the +09:00 times.

use chrono::{DateTime, TimeZone, Utc};
use routine_domain::constants::CALENDAR_PRODID;
use routine_domain::CalendarEvent;

/// Content lines are limited to 75 octets, excluding the line break.
const MAX_LINE_OCTETS: usize = 75;
const UTC_DATE_TIME: &str = "%Y%m%dT%H%M%SZ";

/// Serialize events into a VCALENDAR document.
pub fn serialize(events: &[CalendarEvent], dtstamp: DateTime<Utc>) -> String {
    let mut writer = ContentWriter::default();
    let stamp = format_utc(&dtstamp);

    writer.line("BEGIN", "VCALENDAR");
    writer.line("VERSION", "2.0");
    writer.line("PRODID", CALENDAR_PRODID);
    writer.line("CALSCALE", "GREGORIAN");

    for event in events {
        writer.line("BEGIN", "VEVENT");
        writer.line("UID", &event.uid);
        writer.line("DTSTAMP", &stamp);
        writer.line("DTSTART", &format_utc(&event.start));
        writer.line("DTEND", &format_utc(&event.end));
        writer.line("SUMMARY", &escape_text(&event.name));
        if !event.description.is_empty() {
            writer.line("DESCRIPTION", &escape_text(&event.description));
        }
        writer.line("END", "VEVENT");
    }

    writer.line("END", "VCALENDAR");
    writer.finish()
}

fn format_utc<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format(UTC_DATE_TIME).to_string()
}

/// Escape a TEXT property value.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Default)]
struct ContentWriter {
    buffer: String,
}

impl ContentWriter {
    fn line(&mut self, name: &str, value: &str) {
        let mut width = 0;
        for ch in name.chars().chain(std::iter::once(':')).chain(value.chars()) {
            let octets = ch.len_utf8();
            // Never split a multi-byte character across a fold
            if width + octets > MAX_LINE_OCTETS {
                self.buffer.push_str("\r\n ");
                width = 1;
            }
            self.buffer.push(ch);
            width += octets;
        }
        self.buffer.push_str("\r\n");
    }

    fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeDelta};

    use super::*;

    fn event(name: &str, description: &str) -> CalendarEvent {
        let kst = FixedOffset::east_opt(9 * 3600).expect("offset");
        let start = kst.with_ymd_and_hms(2026, 10, 17, 18, 0, 0).single().expect("valid");
        CalendarEvent {
            uid: "fixed-uid@routine-master".into(),
            name: name.into(),
            description: description.into(),
            start,
            end: start + TimeDelta::hours(1),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).single().expect("valid")
    }

    #[test]
    fn writes_calendar_envelope_with_crlf() {
        let text = serialize(&[], stamp());

        assert_eq!(
            text,
            format!(
                "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:{CALENDAR_PRODID}\r\nCALSCALE:GREGORIAN\r\nEND:VCALENDAR\r\n"
            )
        );
    }

    #[test]
    fn writes_event_as_utc_instants() {
        let text = serialize(&[event("[루틴] 운동", "헬스장")], stamp());

        assert!(text.contains(
            "BEGIN:VEVENT\r\nUID:fixed-uid@routine-master\r\nDTSTAMP:20261017T000000Z\r\n\
             DTSTART:20261017T090000Z\r\nDTEND:20261017T100000Z\r\nSUMMARY:[루틴] 운동\r\n\
             DESCRIPTION:헬스장\r\nEND:VEVENT\r\n"
        ));
    }

    #[test]
    fn omits_empty_description() {
        let text = serialize(&[event("[루틴] 휴식", "")], stamp());
        assert!(!text.contains("DESCRIPTION"));
    }

    #[test]
    fn escapes_text_values() {
        assert_eq!(escape_text("a,b;c\\d\ne\r"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn folds_long_lines_on_character_boundaries() {
        let long = "가".repeat(60);
        let text = serialize(&[event(&long, "")], stamp());

        for line in text.split("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS, "line too long: {} octets", line.len());
        }

        let unfolded = text.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("SUMMARY:{long}\r\n")));
    }
}
