// ==========================================
// Course Planner - gap filler
// ==========================================
// Phase 4 of a recommendation run: no slot leaves this phase
// empty. Supplementary interest candidates are tried first,
// then a uniform random draw from the eligible pool, then the
// sentinel code. The random pool is materialized up front so an
// empty pool fails over to the sentinel instead of spinning.
// ==========================================

use std::collections::BTreeSet;

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::domain::{
    Catalog, CourseCode, RunPhase, Schedule, Track, GRADE_MAX, GRADE_MIN, MAX_COURSES_PER_GRADE,
    SENTINEL_CODE,
};
use crate::engine::context::{PhaseReport, RunContext};

// ==========================================
// GapFiller
// ==========================================
pub struct GapFiller;

impl GapFiller {
    pub fn new() -> Self {
        GapFiller
    }

    /// Fill every empty slot, grade by grade.
    ///
    /// `api_candidates` is the supplementary interest resolution, already
    /// fetched once for the whole pass; it may be empty.
    #[instrument(skip(self, catalog, ctx, api_candidates, rng), fields(
        username = %ctx.student.username,
        empty_slots = ctx.schedule.empty_slot_count(),
        api_candidates = api_candidates.len()
    ))]
    pub fn fill<R: Rng>(
        &self,
        catalog: &Catalog,
        ctx: &mut RunContext,
        api_candidates: &[CourseCode],
        rng: &mut R,
    ) -> PhaseReport {
        let mut report = PhaseReport::new(RunPhase::GapFilled);

        if ctx.schedule.empty_slot_count() == 0 {
            debug!("no open slots, nothing to fill");
            return report;
        }

        for grade in GRADE_MIN..=GRADE_MAX {
            self.fill_grade(catalog, ctx, grade, api_candidates, rng, &mut report);
        }

        report
    }

    fn fill_grade<R: Rng>(
        &self,
        catalog: &Catalog,
        ctx: &mut RunContext,
        grade: u8,
        api_candidates: &[CourseCode],
        rng: &mut R,
        report: &mut PhaseReport,
    ) {
        // Codes drawn for this grade in this pass.
        let mut picked: BTreeSet<CourseCode> = BTreeSet::new();

        // Areas already on the grade row; random draws must not repeat
        // them, interest candidates may.
        let mut taken_areas: BTreeSet<String> = match ctx.schedule.grade_slots(grade) {
            Some(slots) => slots
                .iter()
                .flatten()
                .filter_map(|code| catalog.get(code))
                .map(|course| course.area.clone())
                .collect(),
            None => return,
        };

        for slot in 0..MAX_COURSES_PER_GRADE {
            let occupied = ctx
                .schedule
                .grade_slots(grade)
                .map_or(true, |slots| slots[slot].is_some());
            if occupied {
                continue;
            }

            if let Some(code) =
                Self::pick_interest_candidate(catalog, &ctx.schedule, ctx.student.track, grade, api_candidates, &picked)
            {
                debug!(%code, grade, slot, "slot filled from supplementary interests");
                ctx.schedule.fill_slot(grade, slot, code.clone());
                picked.insert(code.clone());
                report.placed.push(code);
                continue;
            }

            if let Some((code, area)) =
                Self::pick_random_candidate(catalog, &ctx.schedule, ctx.student.track, grade, &picked, &taken_areas, rng)
            {
                debug!(%code, grade, slot, "slot filled at random");
                ctx.schedule.fill_slot(grade, slot, code.clone());
                picked.insert(code.clone());
                taken_areas.insert(area);
                report.placed.push(code);
                continue;
            }

            warn!(grade, slot, "no eligible course left, slot marked unavailable");
            ctx.schedule.fill_slot(grade, slot, CourseCode::from(SENTINEL_CODE));
            report
                .diagnostics
                .push(format!("SENTINEL: grade={grade} slot={slot}"));
        }
    }

    /// First supplementary candidate offered at this grade, on the
    /// student's track or Open, and not yet scheduled or drawn.
    fn pick_interest_candidate(
        catalog: &Catalog,
        schedule: &Schedule,
        student_track: Track,
        grade: u8,
        api_candidates: &[CourseCode],
        picked: &BTreeSet<CourseCode>,
    ) -> Option<CourseCode> {
        api_candidates
            .iter()
            .filter_map(|code| catalog.get(code))
            .find(|course| {
                course.grade_level == grade
                    && student_track.admits(course.track)
                    && !schedule.contains(&course.code)
                    && !picked.contains(&course.code)
            })
            .map(|course| course.code.clone())
    }

    /// Uniform draw from the catalog courses still eligible for this slot.
    /// Returns the code and its area; `None` when the pool is empty.
    fn pick_random_candidate<R: Rng>(
        catalog: &Catalog,
        schedule: &Schedule,
        student_track: Track,
        grade: u8,
        picked: &BTreeSet<CourseCode>,
        taken_areas: &BTreeSet<String>,
        rng: &mut R,
    ) -> Option<(CourseCode, String)> {
        let pool: Vec<_> = catalog
            .iter()
            .filter(|course| {
                course.grade_level == grade
                    && student_track.admits(course.track)
                    && !schedule.contains(&course.code)
                    && !picked.contains(&course.code)
                    && !taken_areas.contains(&course.area)
            })
            .collect();

        pool.choose(rng)
            .map(|course| (course.code.clone(), course.area.clone()))
    }
}

impl Default for GapFiller {
    fn default() -> Self {
        Self::new()
    }
}
