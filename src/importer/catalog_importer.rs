// ==========================================
// Course Planner - catalog importer
// ==========================================
// Maps parsed catalog rows to Course entries and validates the
// result. A catalog that fails here is unusable; the engine is
// never run against a partial or cyclic course table.
// ==========================================

use crate::domain::course::{Catalog, Course, CourseCode};
use crate::domain::types::{Track, GRADE_MAX, GRADE_MIN};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use std::path::Path;
use tracing::{info, instrument, warn};

// ==========================================
// Column layout (positional, fixed by contract)
// ==========================================
pub mod columns {
    pub const CODE: usize = 0;
    pub const NAME: usize = 1;
    // column 2 is a free-text description; the planner ignores it
    pub const AREA: usize = 3;
    pub const PREREQUISITE: usize = 4;
    pub const GRADE_LEVEL: usize = 5;
    pub const TRACK: usize = 6;
    pub const GRADUATION_REQUIREMENT: usize = 7;
}

// ==========================================
// CatalogImporter
// ==========================================
pub struct CatalogImporter {}

impl CatalogImporter {
    pub fn new() -> Self {
        CatalogImporter {}
    }

    /// Load and validate a catalog file (.xlsx/.xls/.csv).
    #[instrument(skip(self), fields(path = %file_path.as_ref().display()))]
    pub fn load<P: AsRef<Path> + std::fmt::Debug>(&self, file_path: P) -> ImportResult<Catalog> {
        let rows = UniversalFileParser.parse(file_path.as_ref())?;
        self.build(rows)
    }

    /// Build a catalog from positional rows (header already stripped).
    pub fn build(&self, rows: Vec<Vec<String>>) -> ImportResult<Catalog> {
        let mut catalog = Catalog::new();
        let mut skipped_rows = 0usize;

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;

            let code = cell(row, columns::CODE);
            if code.is_empty() {
                warn!(row = row_number, "catalog row has no course code, skipped");
                skipped_rows += 1;
                continue;
            }

            let grade_raw = cell(row, columns::GRADE_LEVEL);
            let grade_level: u8 = grade_raw
                .parse()
                .map_err(|_| ImportError::GradeLevelError {
                    row: row_number,
                    value: grade_raw.to_string(),
                })?;
            if !(GRADE_MIN..=GRADE_MAX).contains(&grade_level) {
                return Err(ImportError::GradeLevelError {
                    row: row_number,
                    value: grade_raw.to_string(),
                });
            }

            let track_raw = cell(row, columns::TRACK);
            let track = Track::parse(track_raw).ok_or_else(|| ImportError::UnknownTrack {
                row: row_number,
                value: track_raw.to_string(),
            })?;

            let prerequisite = parse_prerequisite(cell(row, columns::PREREQUISITE));

            let course = Course::new(
                code,
                cell(row, columns::NAME),
                cell(row, columns::AREA),
                prerequisite,
                grade_level,
                track,
                cell(row, columns::GRADUATION_REQUIREMENT),
            );

            if let Some(replaced) = catalog.insert(course) {
                warn!(
                    row = row_number,
                    code = %replaced.code,
                    "duplicate course code, keeping the later row"
                );
            }
        }

        self.validate(&catalog)?;

        info!(
            courses = catalog.len(),
            skipped_rows, "catalog loaded and validated"
        );
        Ok(catalog)
    }

    /// Load-time invariants. An empty or cyclic catalog is fatal;
    /// a dangling prerequisite only degrades the affected chain walk.
    fn validate(&self, catalog: &Catalog) -> ImportResult<()> {
        if catalog.is_empty() {
            return Err(ImportError::EmptyCatalog);
        }

        for (course, missing) in catalog.dangling_prerequisites() {
            warn!(
                course = %course,
                prerequisite = %missing,
                "prerequisite not in catalog, chain will stop there"
            );
        }

        if let Some(cycle) = catalog.find_prerequisite_cycle() {
            let path = cycle
                .iter()
                .map(|code| code.as_str())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(ImportError::PrerequisiteCycle { path });
        }

        Ok(())
    }
}

impl Default for CatalogImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|s| s.as_str()).unwrap_or("")
}

/// `"none"` (any casing) and blank cells both mean no prerequisite.
fn parse_prerequisite(raw: &str) -> Option<CourseCode> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(CourseCode::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn math_rows() -> Vec<Vec<String>> {
        vec![
            row(&["MTH1W", "Mathematics 9", "", "Mathematics", "none", "9", "Open", ""]),
            row(&["MPM2D", "Principles of Mathematics", "", "Mathematics", "MTH1W", "10", "University", ""]),
            row(&["MCR3U", "Functions", "", "Mathematics", "MPM2D", "11", "University", ""]),
        ]
    }

    #[test]
    fn test_build_maps_columns() {
        let catalog = CatalogImporter::new().build(math_rows()).unwrap();
        assert_eq!(catalog.len(), 3);

        let course = catalog.get_by_str("MPM2D").unwrap();
        assert_eq!(course.name, "Principles of Mathematics");
        assert_eq!(course.grade_level, 10);
        assert_eq!(course.track, Track::University);
        assert_eq!(course.prerequisite, Some(CourseCode::from("MTH1W")));

        let root = catalog.get_by_str("MTH1W").unwrap();
        assert_eq!(root.prerequisite, None);
    }

    #[test]
    fn test_blank_and_none_prerequisites() {
        assert_eq!(parse_prerequisite("none"), None);
        assert_eq!(parse_prerequisite("NONE"), None);
        assert_eq!(parse_prerequisite("  "), None);
        assert_eq!(parse_prerequisite("MTH1W"), Some(CourseCode::from("MTH1W")));
    }

    #[test]
    fn test_rows_without_code_are_skipped() {
        let mut rows = math_rows();
        rows.push(row(&["", "Ghost", "", "Arts", "none", "9", "Open", ""]));
        let catalog = CatalogImporter::new().build(rows).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_unparsable_grade_is_fatal() {
        let rows = vec![row(&["MTH1W", "Math", "", "Mathematics", "none", "nine", "Open", ""])];
        let result = CatalogImporter::new().build(rows);
        assert!(matches!(
            result,
            Err(ImportError::GradeLevelError { row: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_range_grade_is_fatal() {
        let rows = vec![row(&["MTH1W", "Math", "", "Mathematics", "none", "8", "Open", ""])];
        assert!(matches!(
            CatalogImporter::new().build(rows),
            Err(ImportError::GradeLevelError { .. })
        ));
    }

    #[test]
    fn test_unknown_track_is_fatal() {
        let rows = vec![row(&["MTH1W", "Math", "", "Mathematics", "none", "9", "Apprentice", ""])];
        assert!(matches!(
            CatalogImporter::new().build(rows),
            Err(ImportError::UnknownTrack { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        assert!(matches!(
            CatalogImporter::new().build(Vec::new()),
            Err(ImportError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_prerequisite_cycle_is_fatal() {
        let rows = vec![
            row(&["AAA1O", "A", "", "Arts", "BBB1O", "9", "Open", ""]),
            row(&["BBB1O", "B", "", "Arts", "AAA1O", "9", "Open", ""]),
        ];
        let result = CatalogImporter::new().build(rows);
        match result {
            Err(ImportError::PrerequisiteCycle { path }) => {
                assert!(path.contains("AAA1O"));
                assert!(path.contains("->"));
            }
            other => panic!("expected cycle error, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_short_rows_default_missing_cells() {
        let rows = vec![row(&["MTH1W", "Math", "", "Mathematics", "none", "9", "Open"])];
        let catalog = CatalogImporter::new().build(rows).unwrap();
        assert_eq!(catalog.get_by_str("MTH1W").unwrap().graduation_requirement, "");
    }
}
