//! Event records and start-time handling.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use icalendar::{CalendarDateTime, DatePerhapsTime};

/// When an event starts, as written in the source file.
///
/// Mirrors the four shapes a DTSTART value can take. Zoned and floating
/// times keep their civil date as-is; the splitter never converts between
/// timezones.
#[derive(Debug, Clone, PartialEq)]
pub enum EventTime {
    Date(NaiveDate),
    DateTimeUtc(DateTime<Utc>),
    DateTimeFloating(NaiveDateTime),
    DateTimeZoned { datetime: NaiveDateTime, tzid: String },
}

impl EventTime {
    /// Calendar year of the civil date as written.
    pub fn year(&self) -> i32 {
        match self {
            EventTime::Date(d) => d.year(),
            EventTime::DateTimeUtc(dt) => dt.year(),
            EventTime::DateTimeFloating(dt) => dt.year(),
            EventTime::DateTimeZoned { datetime, .. } => datetime.year(),
        }
    }
}

/// Convert icalendar's DatePerhapsTime to an EventTime, preserving timezone info
pub(crate) fn to_event_time(dpt: DatePerhapsTime) -> EventTime {
    match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => EventTime::DateTimeUtc(dt),
            CalendarDateTime::Floating(naive) => EventTime::DateTimeFloating(naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => EventTime::DateTimeZoned {
                datetime: date_time,
                tzid,
            },
        },
    }
}

/// One calendar event, immutable once parsed.
///
/// The parsed VEVENT component rides along so output files re-emit exactly
/// what the parser saw; `start` and `size` are the two values the splitter
/// derives from it up front.
#[derive(Debug, Clone)]
pub struct Event {
    /// The parsed VEVENT, re-emitted into whichever output file the packer
    /// assigns it to.
    pub inner: icalendar::Event,
    pub uid: Option<String>,
    pub summary: Option<String>,
    /// Start time per the DTSTART/DTSTAMP/CREATED fallback chain, or None
    /// when no usable field exists.
    pub start: Option<EventTime>,
    /// Incremental serialized size in bytes when added to a chunk.
    pub size: usize,
}

impl Event {
    pub fn year(&self) -> Option<i32> {
        self.start.as_ref().map(|t| t.year())
    }

    /// Human-readable handle for error and warning messages.
    pub fn label(&self) -> String {
        match (&self.summary, &self.uid) {
            (Some(summary), Some(uid)) => format!("'{summary}' ({uid})"),
            (Some(summary), None) => format!("'{summary}'"),
            (None, Some(uid)) => format!("({uid})"),
            (None, None) => "(unidentified event)".to_string(),
        }
    }
}
