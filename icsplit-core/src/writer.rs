//! Output file writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::SourceCalendar;
use crate::error::SplitResult;
use crate::ics;
use crate::pack::Chunk;

/// Deterministic output name for one chunk: `{stem}_{year}_part{index}.ics`,
/// with a 1-based index per year.
pub fn chunk_filename(stem: &str, year: i32, index: usize) -> String {
    format!("{stem}_{year}_part{index}.ics")
}

/// Render one chunk and persist it under `dir`, creating the directory if
/// needed. I/O failures surface unretried.
pub fn write_chunk(
    dir: &Path,
    stem: &str,
    year: i32,
    index: usize,
    source: &SourceCalendar,
    chunk: &Chunk,
) -> SplitResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(chunk_filename(stem, year, index));
    let content = ics::render_chunk(source, chunk.events());
    fs::write(&path, content)?;

    Ok(path)
}
