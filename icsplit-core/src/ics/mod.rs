//! ICS file parsing and generation.
//!
//! This module adapts the icalendar crate: reading one big export into a
//! `SourceCalendar`, and writing each chunk back out as a standalone file.

mod generate;
mod parse;

pub use generate::{base_size, render_chunk};
pub use parse::parse_calendar;
