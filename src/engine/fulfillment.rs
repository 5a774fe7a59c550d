// ==========================================
// Course Planner - requirement fulfillment pass
// ==========================================
// Phase 3 of a recommendation run: one pass over the credit
// categories still owed, placing a no-prerequisite course for
// each where a grade row has room. A category with no match is
// left owed; the gap filler does not retry it.
// ==========================================

use std::collections::BTreeSet;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Catalog, Course, Placement, RunPhase, Schedule};
use crate::engine::context::{PhaseReport, RunContext};

// ==========================================
// RequirementFulfiller
// ==========================================
pub struct RequirementFulfiller;

impl RequirementFulfiller {
    pub fn new() -> Self {
        RequirementFulfiller
    }

    /// Fulfill owed credit categories.
    ///
    /// # Rules
    /// 1. Categories are taken as a snapshot of positive balances, in key
    ///    order, each visited once.
    /// 2. Open grades are recomputed for every category, ascending; the
    ///    first grade yielding a match wins.
    /// 3. A candidate must match the category by area or requirement tag,
    ///    have no prerequisite, sit at the open grade, not already be
    ///    scheduled, and not carry an area naming a category this pass
    ///    already satisfied.
    /// 4. Placement consumes one credit, area key first.
    #[instrument(skip(self, catalog, ctx), fields(
        username = %ctx.student.username,
        owed = ctx.ledger.total_outstanding()
    ))]
    pub fn fulfill(&self, catalog: &Catalog, ctx: &mut RunContext) -> PhaseReport {
        let mut report = PhaseReport::new(RunPhase::RequirementsFulfilled);

        let pending: Vec<String> = ctx
            .ledger
            .unfulfilled()
            .into_iter()
            .map(|(category, _)| category)
            .collect();

        // Categories satisfied by this pass. A later candidate whose area
        // names one of them is rejected, so one subject cannot cover two
        // categories.
        let mut used_categories: BTreeSet<String> = BTreeSet::new();

        for category in pending {
            let open_grades = ctx.schedule.open_grades();
            let found = open_grades.iter().find_map(|&grade| {
                Self::find_category_course(catalog, &ctx.schedule, &category, grade, &used_categories)
            });

            let Some(course) = found else {
                warn!(%category, "no open grade offers a matching no-prerequisite course");
                report
                    .diagnostics
                    .push(format!("UNFULFILLED: category={category}"));
                continue;
            };

            match ctx.schedule.place(course) {
                Placement::Placed { grade, slot } => {
                    used_categories.insert(category.clone());
                    let consumed = ctx.ledger.consume_for_course(course);
                    info!(
                        code = %course.code,
                        %category,
                        consumed = consumed.as_deref().unwrap_or("-"),
                        grade,
                        slot,
                        "requirement course placed"
                    );
                    report.placed.push(course.code.clone());
                }
                other => {
                    // The finder checked the schedule; reaching this means
                    // the grade filled mid-pass.
                    debug!(code = %course.code, ?other, "placement rejected after search");
                    report
                        .diagnostics
                        .push(format!("PLACEMENT_REJECTED: {}", course.code));
                }
            }
        }

        report
    }

    /// First catalog course satisfying rule 3 for a category at a grade,
    /// in code order.
    fn find_category_course<'a>(
        catalog: &'a Catalog,
        schedule: &Schedule,
        category: &str,
        grade: u8,
        used_categories: &BTreeSet<String>,
    ) -> Option<&'a Course> {
        catalog.iter().find(|course| {
            course.matches_category(category)
                && course.prerequisite.is_none()
                && course.grade_level == grade
                && !schedule.contains(&course.code)
                && !used_categories.contains(&course.area)
        })
    }
}

impl Default for RequirementFulfiller {
    fn default() -> Self {
        Self::new()
    }
}
