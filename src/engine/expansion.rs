// ==========================================
// Course Planner - interest-driven expansion engine
// ==========================================
// Phase 2 of a recommendation run: for every interest candidate,
// walk its single-link prerequisite chain root-ward and place
// each course that passes the eligibility gate. The first
// ineligible, missing, or revisited link abandons the chain;
// courses placed before that point stay placed.
// ==========================================

use std::collections::BTreeSet;

use tracing::{debug, instrument, warn};

use crate::domain::{Catalog, CourseCode, Placement, RunPhase};
use crate::engine::context::{PhaseReport, RunContext};
use crate::engine::eligibility::EligibilityGate;

// ==========================================
// InterestExpander
// ==========================================
pub struct InterestExpander;

impl InterestExpander {
    pub fn new() -> Self {
        InterestExpander
    }

    #[instrument(skip(self, catalog, ctx, candidates), fields(
        username = %ctx.student.username,
        candidates = candidates.len()
    ))]
    pub fn expand(
        &self,
        catalog: &Catalog,
        ctx: &mut RunContext,
        candidates: &[CourseCode],
    ) -> PhaseReport {
        let mut report = PhaseReport::new(RunPhase::Expanded);

        for code in candidates {
            if !catalog.contains(code) {
                debug!(%code, "interest candidate not in catalog");
                report.diagnostics.push(format!("CANDIDATE_MISS: {code}"));
                continue;
            }
            self.walk_chain(catalog, ctx, code.clone(), &mut report);
        }

        report
    }

    /// Place the chain rooted at `start`, one link at a time.
    ///
    /// The visited set guards against a cyclic catalog slipping past load
    /// validation; the walk never revisits a code.
    fn walk_chain(
        &self,
        catalog: &Catalog,
        ctx: &mut RunContext,
        start: CourseCode,
        report: &mut PhaseReport,
    ) {
        let mut visited: BTreeSet<CourseCode> = BTreeSet::new();
        let mut current = Some(start);

        while let Some(code) = current {
            if !visited.insert(code.clone()) {
                warn!(%code, "prerequisite chain revisits a course, abandoning");
                report.diagnostics.push(format!("PREREQ_CYCLE: {code}"));
                break;
            }

            let Some(course) = catalog.get(&code) else {
                debug!(%code, "prerequisite not in catalog, chain ends");
                report.diagnostics.push(format!("PREREQ_MISS: {code}"));
                break;
            };

            let (eligible, reasons) = EligibilityGate::evaluate(course, &ctx.student);
            if !eligible {
                debug!(%code, reasons = reasons.join("; "), "chain abandoned at ineligible course");
                report.diagnostics.extend(reasons);
                break;
            }

            match ctx.schedule.place(course) {
                Placement::Placed { grade, slot } => {
                    debug!(%code, grade, slot, "placed from interest chain");
                    report.placed.push(code.clone());
                }
                Placement::AlreadyPresent => {
                    debug!(%code, "already scheduled, walking on");
                }
                Placement::GradeFull => {
                    debug!(%code, grade = course.grade_level, "grade row full, walking on");
                    report.diagnostics.push(format!("GRADE_FULL: {code}"));
                }
                Placement::GradeOutOfRange => {
                    warn!(%code, grade = course.grade_level, "course grade outside 9-12");
                    report.diagnostics.push(format!("GRADE_RANGE: {code}"));
                }
            }

            current = course.prerequisite.clone();
        }
    }
}

impl Default for InterestExpander {
    fn default() -> Self {
        Self::new()
    }
}
