// ==========================================
// Course Planner - schedule seeder
// ==========================================
// Phase 1 of a recommendation run: lay down the track skeleton,
// then fold in the student's completed courses and consume the
// credits they earned.
// ==========================================

use tracing::{debug, instrument, warn};

use crate::config::skeleton_codes;
use crate::domain::{Catalog, Placement, RunPhase};
use crate::engine::context::{PhaseReport, RunContext};

// ==========================================
// ScheduleSeeder
// ==========================================
pub struct ScheduleSeeder;

impl ScheduleSeeder {
    pub fn new() -> Self {
        ScheduleSeeder
    }

    /// Seed the schedule for one run.
    ///
    /// Skeleton codes missing from the catalog are skipped with a
    /// diagnostic. A completed course consumes its credit whether or not
    /// the skeleton already lists it; one whose grade row is full is
    /// skipped entirely.
    #[instrument(skip(self, catalog, ctx), fields(
        username = %ctx.student.username,
        track = %ctx.student.track,
        completed = ctx.student.completed_courses.len()
    ))]
    pub fn seed(&self, catalog: &Catalog, ctx: &mut RunContext) -> PhaseReport {
        let mut report = PhaseReport::new(RunPhase::Seeded);

        // 1. Track skeleton, grade by grade.
        for code in skeleton_codes(ctx.student.track) {
            let Some(course) = catalog.get(&code) else {
                warn!(%code, "skeleton course missing from catalog");
                report.diagnostics.push(format!("SKELETON_MISS: {code}"));
                continue;
            };

            if ctx.schedule.place(course).is_placed() {
                report.placed.push(code);
            }
        }

        // 2. Completed courses: place and credit.
        for code in &ctx.student.completed_courses {
            let Some(course) = catalog.get(code) else {
                debug!(%code, "completed course not in catalog");
                report.diagnostics.push(format!("COMPLETED_MISS: {code}"));
                continue;
            };

            match ctx.schedule.place(course) {
                placement @ (Placement::Placed { .. } | Placement::AlreadyPresent) => {
                    if let Some(category) = ctx.ledger.consume_for_course(course) {
                        debug!(%code, %category, "credit consumed for completed course");
                    }
                    if placement.is_placed() {
                        report.placed.push(code.clone());
                    }
                }
                Placement::GradeFull => {
                    warn!(%code, grade = course.grade_level, "grade row full, completed course skipped");
                    report.diagnostics.push(format!("GRADE_FULL: {code}"));
                }
                Placement::GradeOutOfRange => {
                    warn!(%code, grade = course.grade_level, "completed course grade outside 9-12");
                    report.diagnostics.push(format!("GRADE_RANGE: {code}"));
                }
            }
        }

        report
    }
}

impl Default for ScheduleSeeder {
    fn default() -> Self {
        Self::new()
    }
}
