//! Colored terminal rendering for split results.

use owo_colors::OwoColorize;

use icsplit_core::split::{ChunkFile, OversizedEvent};

/// Extension trait for rendering report items with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ChunkFile {
    fn render(&self) -> String {
        format!(
            "Created {} {}",
            self.path.display(),
            format!("({} events, {})", self.events, format_size(self.size)).dimmed()
        )
    }
}

impl Render for OversizedEvent {
    fn render(&self) -> String {
        format!(
            "{} event {} in {} is {} over the {} ceiling; written as its own part",
            "warning:".yellow().bold(),
            self.label,
            self.year,
            format_size(self.excess()),
            format_size(self.ceiling),
        )
    }
}

/// Format a byte count the way the reports print sizes (e.g. "0.43 MB").
pub fn format_size(bytes: usize) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
