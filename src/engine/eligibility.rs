// ==========================================
// Course Planner - eligibility gate
// ==========================================
// Pure track/grade/already-taken check applied before the
// expansion engine places a course. No state, no side effects,
// no I/O.
// ==========================================

use crate::domain::{Course, StudentProfile};

// ==========================================
// EligibilityGate - pure rule set
// ==========================================
pub struct EligibilityGate;

impl EligibilityGate {
    /// Decide whether a course may be placed for a student.
    ///
    /// # Rules
    /// 1. The course's track must be Open or equal the student's track.
    /// 2. The student's current grade must not exceed the course's grade
    ///    level (courses below the student's grade are behind them).
    /// 3. The course must not already be completed.
    ///
    /// # Returns
    /// - `(bool, Vec<String>)`: verdict + decision reasons
    pub fn evaluate(course: &Course, student: &StudentProfile) -> (bool, Vec<String>) {
        let mut reasons = Vec::new();

        // Rule 1: track admission
        if !student.track.admits(course.track) {
            reasons.push(format!(
                "TRACK_MISMATCH: {} is {}, student is {}",
                course.code, course.track, student.track
            ));
            return (false, reasons);
        }

        // Rule 2: grade window
        if student.grade > course.grade_level {
            reasons.push(format!(
                "GRADE_PASSED: {} is offered in grade {}, student is in grade {}",
                course.code, course.grade_level, student.grade
            ));
            return (false, reasons);
        }

        // Rule 3: already completed
        if student.has_completed(&course.code) {
            reasons.push(format!("ALREADY_COMPLETED: {}", course.code));
            return (false, reasons);
        }

        reasons.push(format!("ELIGIBLE: {}", course.code));
        (true, reasons)
    }
}
