// ==========================================
// Course Planner - engine error types
// ==========================================

use thiserror::Error;

/// Fatal conditions for a recommendation run. Everything else in the
/// engine degrades in place: skipped courses, sentinel slots, and
/// unfulfilled categories are diagnostics, not errors.
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== Preconditions =====
    #[error("catalog is empty, cannot run a recommendation")]
    EmptyCatalog,

    #[error("student grade {0} is outside the supported range 9-12")]
    GradeOutOfRange(u8),

    // ===== Passthrough =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for the engine layer.
pub type EngineResult<T> = Result<T, EngineError>;
