//! The split pipeline: parse, classify, pack, write.

use std::path::{Path, PathBuf};

use crate::calendar::SourceCalendar;
use crate::error::SplitResult;
use crate::group::group_by_year;
use crate::ics;
use crate::pack::{pack, Chunk};
use crate::writer;

/// A single event too large to honor the ceiling, shipped as its own part.
#[derive(Debug, Clone)]
pub struct OversizedEvent {
    pub year: i32,
    pub label: String,
    /// Projected size of the singleton output file.
    pub size: usize,
    pub ceiling: usize,
}

impl OversizedEvent {
    /// How far past the ceiling the singleton part lands.
    pub fn excess(&self) -> usize {
        self.size.saturating_sub(self.ceiling)
    }
}

/// One written output file.
#[derive(Debug, Clone)]
pub struct ChunkFile {
    pub path: PathBuf,
    pub year: i32,
    pub index: usize,
    pub events: usize,
    pub size: usize,
}

/// Outcome of a completed split.
pub struct SplitReport {
    pub files: Vec<ChunkFile>,
    pub warnings: Vec<OversizedEvent>,
    pub total_events: usize,
}

/// The computed layout of a split, before anything touches the disk.
pub struct SplitPlan {
    source: SourceCalendar,
    years: Vec<(i32, Vec<Chunk>)>,
    warnings: Vec<OversizedEvent>,
    ceiling: usize,
    total_events: usize,
}

/// Parse `content` and lay out every year's chunks against `ceiling` bytes.
///
/// Classification failures (an event with no usable date) abort here, so a
/// malformed event never leaves partial output behind.
pub fn plan(content: &str, ceiling: usize) -> SplitResult<SplitPlan> {
    let mut source = ics::parse_calendar(content)?;
    let events = std::mem::take(&mut source.events);
    let total_events = events.len();

    let base_size = ics::base_size(&source.properties, &source.extras);
    let buckets = group_by_year(events)?;

    let mut years = Vec::new();
    let mut warnings = Vec::new();
    for (year, bucket) in buckets {
        let chunks = pack(bucket, ceiling, base_size);
        for chunk in &chunks {
            if chunk.exceeds(ceiling) {
                let label = chunk
                    .events()
                    .first()
                    .map(|e| e.label())
                    .unwrap_or_default();
                warnings.push(OversizedEvent {
                    year,
                    label,
                    size: chunk.size(),
                    ceiling,
                });
            }
        }
        years.push((year, chunks));
    }

    Ok(SplitPlan {
        source,
        years,
        warnings,
        ceiling,
        total_events,
    })
}

impl SplitPlan {
    pub fn is_empty(&self) -> bool {
        self.total_events == 0
    }

    pub fn total_events(&self) -> usize {
        self.total_events
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Years in ascending order, each with its chunks in part order.
    pub fn years(&self) -> &[(i32, Vec<Chunk>)] {
        &self.years
    }

    pub fn warnings(&self) -> &[OversizedEvent] {
        &self.warnings
    }

    /// Write every chunk, ascending year then part index.
    ///
    /// Not atomic across the run: files already written stay on disk if a
    /// later write fails.
    pub fn write(&self, dir: &Path, stem: &str) -> SplitResult<SplitReport> {
        let mut files = Vec::new();

        for (year, chunks) in &self.years {
            for (i, chunk) in chunks.iter().enumerate() {
                let index = i + 1;
                let path = writer::write_chunk(dir, stem, *year, index, &self.source, chunk)?;
                files.push(ChunkFile {
                    path,
                    year: *year,
                    index,
                    events: chunk.len(),
                    size: chunk.size(),
                });
            }
        }

        Ok(SplitReport {
            files,
            warnings: self.warnings.clone(),
            total_events: self.total_events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;
    use std::fs;

    /// Two years, two events each, interleaved in input order.
    const TWO_YEARS: &str = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:a2010@test
SUMMARY:January planning
DTSTART:20100115T100000Z
DTEND:20100115T110000Z
END:VEVENT
BEGIN:VEVENT
UID:a2011@test
SUMMARY:Spring review
DTSTART:20110310T100000Z
DTEND:20110310T110000Z
END:VEVENT
BEGIN:VEVENT
UID:b2010@test
SUMMARY:Summer party
DTSTART:20100620T180000Z
DTEND:20100620T210000Z
END:VEVENT
BEGIN:VEVENT
UID:b2011@test
SUMMARY:Autumn retro
DTSTART:20111005T100000Z
DTEND:20111005T110000Z
END:VEVENT
END:VCALENDAR"#;

    fn input_uids_by_year(plan: &SplitPlan) -> Vec<(i32, Vec<String>)> {
        plan.years()
            .iter()
            .map(|(year, chunks)| {
                let uids = chunks
                    .iter()
                    .flat_map(|c| c.events())
                    .map(|e| e.uid.clone().unwrap())
                    .collect();
                (*year, uids)
            })
            .collect()
    }

    #[test]
    fn test_plan_buckets_years_and_keeps_input_order() {
        let plan = plan(TWO_YEARS, 10 * 1024 * 1024).unwrap();

        assert_eq!(plan.total_events(), 4);
        assert_eq!(
            input_uids_by_year(&plan),
            vec![
                (2010, vec!["a2010@test".to_string(), "b2010@test".to_string()]),
                (2011, vec!["a2011@test".to_string(), "b2011@test".to_string()]),
            ]
        );
        // Roomy ceiling: one part per year, nothing oversized.
        assert!(plan.years().iter().all(|(_, chunks)| chunks.len() == 1));
        assert!(plan.warnings().is_empty());
    }

    #[test]
    fn test_write_produces_one_importable_file_per_chunk() {
        // Learn real event sizes first, then pick a ceiling that fits
        // exactly one event per part.
        let probe = plan(TWO_YEARS, 10 * 1024 * 1024).unwrap();
        let base = ics::base_size(&probe.source.properties, &probe.source.extras);
        let max_event = probe
            .years()
            .iter()
            .flat_map(|(_, chunks)| chunks.iter().flat_map(|c| c.events()))
            .map(|e| e.size)
            .max()
            .unwrap();

        let tight = plan(TWO_YEARS, base + max_event).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let report = tight.write(dir.path(), "export").unwrap();

        assert_eq!(report.files.len(), 4);
        assert_eq!(report.total_events, 4);

        let names: Vec<String> = report
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "export_2010_part1.ics",
                "export_2010_part2.ics",
                "export_2011_part1.ics",
                "export_2011_part2.ics",
            ]
        );

        for file in &report.files {
            let written = fs::read_to_string(&file.path).unwrap();
            assert_eq!(
                written.len(),
                file.size,
                "projected chunk size must equal the written file's length"
            );
            assert_eq!(written.matches("BEGIN:VCALENDAR").count(), 1);
            assert_eq!(written.matches("BEGIN:VEVENT").count(), file.events);
        }
    }

    #[test]
    fn test_no_loss_across_written_files() {
        let probe = plan(TWO_YEARS, 10 * 1024 * 1024).unwrap();
        let base = ics::base_size(&probe.source.properties, &probe.source.extras);
        let max_event = probe
            .years()
            .iter()
            .flat_map(|(_, chunks)| chunks.iter().flat_map(|c| c.events()))
            .map(|e| e.size)
            .max()
            .unwrap();

        let tight = plan(TWO_YEARS, base + max_event).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let report = tight.write(dir.path(), "export").unwrap();

        // Re-parse every output and collect UIDs in file order.
        let mut recovered = Vec::new();
        for file in &report.files {
            let written = fs::read_to_string(&file.path).unwrap();
            let reparsed = ics::parse_calendar(&written).unwrap();
            recovered.extend(reparsed.events.iter().map(|e| e.uid.clone().unwrap()));
        }

        recovered.sort();
        assert_eq!(
            recovered,
            vec!["a2010@test", "a2011@test", "b2010@test", "b2011@test"]
        );
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let ceiling = 10 * 1024 * 1024;
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();

        let report_a = plan(TWO_YEARS, ceiling).unwrap().write(dir_a.path(), "export").unwrap();
        let report_b = plan(TWO_YEARS, ceiling).unwrap().write(dir_b.path(), "export").unwrap();

        assert_eq!(report_a.files.len(), report_b.files.len());
        for (a, b) in report_a.files.iter().zip(report_b.files.iter()) {
            assert_eq!(a.path.file_name(), b.path.file_name());
            assert_eq!(
                fs::read(&a.path).unwrap(),
                fs::read(&b.path).unwrap(),
                "same input and ceiling must produce identical bytes"
            );
        }
    }

    #[test]
    fn test_oversized_singleton_is_written_and_reported() {
        // Ceiling below the skeleton size forces every event over it.
        let plan = plan(TWO_YEARS, 10).unwrap();

        assert_eq!(plan.warnings().len(), 4);
        for warning in plan.warnings() {
            assert!(warning.excess() > 0);
            assert_eq!(warning.ceiling, 10);
        }

        let dir = tempfile::tempdir().unwrap();
        let report = plan.write(dir.path(), "export").unwrap();
        assert_eq!(report.files.len(), 4, "oversized events still get written");
        assert_eq!(report.warnings.len(), 4);
    }

    #[test]
    fn test_malformed_event_aborts_before_any_write() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:fine@test
SUMMARY:Fine
DTSTART:20100115T100000Z
END:VEVENT
BEGIN:VEVENT
UID:broken@test
SUMMARY:No dates at all
END:VEVENT
END:VCALENDAR"#;

        let result = plan(ics, 1024 * 1024);

        match result {
            Err(SplitError::MalformedEvent(label)) => assert!(label.contains("broken@test")),
            _ => panic!("Expected MalformedEvent"),
        }
        // plan() owns all classification; nothing can have been written.
    }

    #[test]
    fn test_empty_calendar_plans_nothing() {
        let ics = "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:TEST\nEND:VCALENDAR";

        let plan = plan(ics, 1024 * 1024).unwrap();

        assert!(plan.is_empty());
        assert!(plan.years().is_empty());
        assert!(plan.warnings().is_empty());
    }
}
