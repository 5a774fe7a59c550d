// ==========================================
// Course Planner - importer error types
// ==========================================

use thiserror::Error;

/// Catalog import errors. Row numbers are 1-based data-row positions
/// (the header row is not counted).
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("csv parse failed: {0}")]
    CsvParseError(String),

    // ===== Row mapping errors =====
    #[error("grade level unparsable (row {row}): expected 9-12, got {value:?}")]
    GradeLevelError { row: usize, value: String },

    #[error("unknown track (row {row}): {value:?}")]
    UnknownTrack { row: usize, value: String },

    // ===== Catalog validation errors =====
    #[error("catalog loaded no courses")]
    EmptyCatalog,

    #[error("prerequisite cycle in catalog: {path}")]
    PrerequisiteCycle { path: String },

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias for the importer layer.
pub type ImportResult<T> = Result<T, ImportError>;
