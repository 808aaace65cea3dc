//! ICS output generation.
//!
//! Each chunk becomes its own VCALENDAR: the source calendar's properties
//! and non-event components followed by the chunk's events. Rendering is
//! concatenative, so a chunk's size is the skeleton size plus the sum of its
//! events' sizes, byte for byte.

use icalendar::{Calendar, CalendarComponent, Property};

use crate::calendar::SourceCalendar;
use crate::event::Event;

/// Build the chunk skeleton: wrapper, calendar properties, extras, no events.
fn skeleton(properties: &[Property], extras: &[CalendarComponent]) -> Calendar {
    let mut cal = Calendar::new();
    for prop in properties {
        cal.append_property(prop.clone());
    }
    for component in extras {
        cal.push(component.clone());
    }
    cal
}

/// Render a complete output file for one chunk's events.
pub fn render_chunk(source: &SourceCalendar, events: &[Event]) -> String {
    let mut cal = skeleton(&source.properties, &source.extras);
    for event in events {
        cal.push(event.inner.clone());
    }
    cal.done().to_string()
}

/// Serialized size of an output file containing no events.
pub fn base_size(properties: &[Property], extras: &[CalendarComponent]) -> usize {
    skeleton(properties, extras).done().to_string().len()
}

/// Incremental size of one event: the length of (skeleton + event) minus the
/// skeleton length, which is exactly what the event adds to any chunk.
pub fn event_size(
    properties: &[Property],
    extras: &[CalendarComponent],
    base_size: usize,
    event: &icalendar::Event,
) -> usize {
    let mut cal = skeleton(properties, extras);
    cal.push(event.clone());
    cal.done().to_string().len() - base_size
}
