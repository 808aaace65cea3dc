//! ICS file parsing using the icalendar crate's parser.

use chrono::{NaiveDate, NaiveDateTime};
use icalendar::{Calendar, CalendarComponent, Component, EventLike};

use crate::calendar::SourceCalendar;
use crate::error::{SplitError, SplitResult};
use crate::event::{to_event_time, Event, EventTime};
use crate::ics::generate;

/// Parse a whole ICS export into a `SourceCalendar`.
///
/// Fails fast on a malformed container. Events missing a start field are
/// still returned (with `start: None`); classification decides what to do
/// with them.
pub fn parse_calendar(content: &str) -> SplitResult<SourceCalendar> {
    let parsed: Calendar = content.parse().map_err(SplitError::Parse)?;

    let properties = parsed.properties.clone();
    let mut extras = Vec::new();
    let mut raw_events = Vec::new();
    for component in &parsed.components {
        match component {
            CalendarComponent::Event(event) => raw_events.push(event.clone()),
            other => extras.push(other.clone()),
        }
    }

    let base_size = generate::base_size(&properties, &extras);
    let events = raw_events
        .into_iter()
        .map(|inner| {
            let size = generate::event_size(&properties, &extras, base_size, &inner);
            build_event(inner, size)
        })
        .collect();

    Ok(SourceCalendar {
        properties,
        extras,
        events,
    })
}

fn build_event(inner: icalendar::Event, size: usize) -> Event {
    let uid = prop_value(&inner, "UID").map(str::to_string);
    let summary = inner.get_summary().map(str::to_string);
    let start = extract_start(&inner);

    Event {
        inner,
        uid,
        summary,
        start,
        size,
    }
}

fn prop_value<'a>(event: &'a icalendar::Event, key: &str) -> Option<&'a str> {
    event.properties().get(key).map(|p| p.value())
}

/// DTSTART, falling back to DTSTAMP then CREATED when a feed omits it.
fn extract_start(event: &icalendar::Event) -> Option<EventTime> {
    if let Some(start) = event.get_start() {
        return Some(to_event_time(start));
    }

    for key in ["DTSTAMP", "CREATED"] {
        if let Some(time) = prop_value(event, key).and_then(parse_date_value) {
            return Some(time);
        }
    }

    None
}

/// Parse a raw ICS date or date-time value.
///
/// Handles the three bare shapes: `20240108`, `20240108T100000` and
/// `20240108T100000Z`. DTSTAMP and CREATED carry no TZID parameter, so this
/// is all the fallback fields need.
fn parse_date_value(value: &str) -> Option<EventTime> {
    let value = value.trim();

    if let Some(stripped) = value.strip_suffix('Z') {
        return NaiveDateTime::parse_from_str(stripped, "%Y%m%dT%H%M%S")
            .ok()
            .map(|dt| EventTime::DateTimeUtc(dt.and_utc()));
    }

    if value.contains('T') {
        return NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S")
            .ok()
            .map(EventTime::DateTimeFloating);
    }

    NaiveDate::parse_from_str(value, "%Y%m%d")
        .ok()
        .map(EventTime::Date)
}
