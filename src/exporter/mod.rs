// ==========================================
// Course Planner - schedule exporter
// ==========================================
// Terminal phase of a run: serialize the finished schedule to
// the per-user JSON file downstream delivery reads. Sentinel
// slots are representable, never an export failure.
// ==========================================

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::defaults::EXPORT_FILE_PREFIX;
use crate::domain::{Catalog, CourseCode, Schedule, SENTINEL_CODE, SENTINEL_NAME};
use crate::engine::RecommendationOutcome;

// ==========================================
// Error types
// ==========================================
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write schedule file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize schedule: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

// ==========================================
// GradeExport - one record per grade
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeExport {
    pub grade: u8,
    /// `"CODE - Name"` entries in slot order; empty slots are omitted.
    pub courses: Vec<String>,
}

/// Render one slot entry. The sentinel has no catalog row but must stay
/// representable; a code the catalog no longer carries renders bare.
fn render_entry(catalog: &Catalog, code: &CourseCode) -> String {
    if code.as_str() == SENTINEL_CODE {
        return format!("{SENTINEL_CODE} - {SENTINEL_NAME}");
    }
    match catalog.get(code) {
        Some(course) => format!("{} - {}", course.code, course.name),
        None => code.to_string(),
    }
}

/// Grade records for a schedule, ascending by grade.
pub fn grade_records(catalog: &Catalog, schedule: &Schedule) -> Vec<GradeExport> {
    schedule
        .iter()
        .map(|(grade, slots)| GradeExport {
            grade,
            courses: slots
                .iter()
                .flatten()
                .map(|code| render_entry(catalog, code))
                .collect(),
        })
        .collect()
}

// ==========================================
// ScheduleExporter
// ==========================================
pub struct ScheduleExporter {
    catalog: Arc<Catalog>,
    output_dir: PathBuf,
}

impl ScheduleExporter {
    pub fn new(catalog: Arc<Catalog>, output_dir: impl Into<PathBuf>) -> Self {
        ScheduleExporter {
            catalog,
            output_dir: output_dir.into(),
        }
    }

    /// Path the schedule for a username lands at.
    pub fn export_path(&self, username: &str) -> PathBuf {
        self.output_dir
            .join(format!("{EXPORT_FILE_PREFIX}{username}.json"))
    }

    /// Write the run's schedule and flip the outcome to its terminal
    /// phase. Returns the file written.
    #[instrument(skip(self, outcome), fields(username = %outcome.username))]
    pub fn export(&self, outcome: &mut RecommendationOutcome) -> ExportResult<PathBuf> {
        let path = self.write_schedule(&outcome.username, &outcome.schedule)?;
        outcome.mark_exported();
        Ok(path)
    }

    /// Serialize one schedule to its per-user file.
    pub fn write_schedule(&self, username: &str, schedule: &Schedule) -> ExportResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let records = grade_records(&self.catalog, schedule);
        let json = serde_json::to_string_pretty(&records)?;

        let path = self.export_path(username);
        let mut file = File::create(&path)?;
        file.write_all(json.as_bytes())?;

        info!(path = %path.display(), grades = records.len(), "schedule exported");
        Ok(path)
    }
}

/// Read a previously exported schedule file back into grade records.
pub fn read_exported(path: &Path) -> ExportResult<Vec<GradeExport>> {
    let file = File::open(path)?;
    let records: Vec<GradeExport> = serde_json::from_reader(file)?;
    Ok(records)
}
