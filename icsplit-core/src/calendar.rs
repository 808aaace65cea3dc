//! The parsed source calendar.

use icalendar::{CalendarComponent, Property};

use crate::event::Event;

/// A fully parsed input calendar.
///
/// `properties` and `extras` are reproduced at the top of every output file
/// so each part stands alone as an importable calendar; `events` carries the
/// VEVENTs in input order.
#[derive(Debug, Clone)]
pub struct SourceCalendar {
    /// Calendar-level properties (VERSION, PRODID, CALSCALE, METHOD, X-WR-*).
    pub properties: Vec<Property>,
    /// Non-event components, VTIMEZONE in particular. Every part needs these
    /// to resolve TZID references on its own.
    pub extras: Vec<CalendarComponent>,
    /// Every VEVENT in input order.
    pub events: Vec<Event>,
}
