// ==========================================
// Course Planner - domain model layer
// ==========================================
// Entities and value types only. No I/O, no engine logic:
// the catalog is read here, never loaded here.
// ==========================================

pub mod course;
pub mod credit;
pub mod schedule;
pub mod student;
pub mod types;

// Core type re-exports
pub use course::{Catalog, Course, CourseCode};
pub use credit::CreditLedger;
pub use schedule::{Placement, Schedule};
pub use student::{parse_completed_courses, StudentProfile};
pub use types::{
    RunPhase, Track, GRADE_MAX, GRADE_MIN, MAX_COURSES_PER_GRADE, SENTINEL_CODE, SENTINEL_NAME,
};
