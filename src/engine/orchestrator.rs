// ==========================================
// Course Planner - recommendation orchestrator
// ==========================================
// Drives the four phases of a run in their only legal order:
// seed, expand, fulfill, fill. A phase that comes up empty
// degrades the result, it never aborts the run.
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::GraduationPolicy;
use crate::domain::{
    Catalog, CreditLedger, RunPhase, Schedule, StudentProfile, Track, GRADE_MAX, GRADE_MIN,
    SENTINEL_CODE,
};
use crate::engine::context::{PhaseReport, RunContext};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::expansion::InterestExpander;
use crate::engine::fulfillment::RequirementFulfiller;
use crate::engine::gap_filler::GapFiller;
use crate::engine::seeder::ScheduleSeeder;
use crate::resolver::InterestSource;

// ==========================================
// RecommendationOutcome - result of one run
// ==========================================
#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub run_id: Uuid,
    pub username: String,
    pub grade: u8,
    pub track: Track,

    // ===== Final state =====
    pub phase: RunPhase,
    pub schedule: Schedule,
    pub ledger: CreditLedger,

    // ===== Diagnostics =====
    pub unfulfilled_credits: Vec<(String, u32)>,
    pub sentinel_slots: usize,
    pub reports: Vec<PhaseReport>,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RecommendationOutcome {
    fn from_context(ctx: RunContext) -> Self {
        let unfulfilled_credits = ctx.ledger.unfulfilled();
        let sentinel_slots = ctx
            .schedule
            .placed_codes()
            .filter(|code| code.as_str() == SENTINEL_CODE)
            .count();

        RecommendationOutcome {
            run_id: ctx.run_id,
            username: ctx.student.username,
            grade: ctx.student.grade,
            track: ctx.student.track,
            phase: ctx.phase.unwrap_or(RunPhase::Seeded),
            schedule: ctx.schedule,
            ledger: ctx.ledger,
            unfulfilled_credits,
            sentinel_slots,
            reports: ctx.reports,
            started_at: ctx.started_at,
            finished_at: Utc::now(),
        }
    }

    /// Flip to the terminal phase once the exporter has written the run.
    pub fn mark_exported(&mut self) {
        self.phase = RunPhase::Exported;
    }
}

// ==========================================
// RecommendationOrchestrator
// ==========================================
pub struct RecommendationOrchestrator<S>
where
    S: InterestSource,
{
    catalog: Arc<Catalog>,
    policy: GraduationPolicy,
    interest_source: S,
    seeder: ScheduleSeeder,
    expander: InterestExpander,
    fulfiller: RequirementFulfiller,
    gap_filler: GapFiller,
}

impl<S> RecommendationOrchestrator<S>
where
    S: InterestSource,
{
    /// The catalog is shared read-only; runs for different students may
    /// hold the same one concurrently.
    pub fn new(catalog: Arc<Catalog>, policy: GraduationPolicy, interest_source: S) -> Self {
        Self {
            catalog,
            policy,
            interest_source,
            seeder: ScheduleSeeder::new(),
            expander: InterestExpander::new(),
            fulfiller: RequirementFulfiller::new(),
            gap_filler: GapFiller::new(),
        }
    }

    /// Run the full recommendation for one student.
    ///
    /// `supplementary_interests` is the optional second round of free text
    /// collected when gaps remain; it is resolved once, only if any slot
    /// is still open after fulfillment.
    #[instrument(skip(self, student, supplementary_interests), fields(
        username = %student.username,
        grade = student.grade,
        track = %student.track
    ))]
    pub async fn recommend(
        &self,
        student: StudentProfile,
        supplementary_interests: Option<&str>,
    ) -> EngineResult<RecommendationOutcome> {
        if self.catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        if !(GRADE_MIN..=GRADE_MAX).contains(&student.grade) {
            return Err(EngineError::GradeOutOfRange(student.grade));
        }

        let run_id = Uuid::new_v4();
        info!(%run_id, "starting recommendation run");

        let mut ctx = RunContext::new(run_id, student, &self.policy);

        // ==========================================
        // Phase 1: seed skeleton and completed courses
        // ==========================================
        let report = self.seeder.seed(&self.catalog, &mut ctx);
        info!(
            placed = report.placed.len(),
            skipped = report.diagnostics.len(),
            "seeding complete"
        );
        ctx.advance(report);

        // ==========================================
        // Phase 2: interest-driven expansion
        // ==========================================
        let candidates = self
            .interest_source
            .resolve_interests(&ctx.student.interests)
            .await;
        debug!(candidates = candidates.len(), "interest candidates resolved");

        let report = self.expander.expand(&self.catalog, &mut ctx, &candidates);
        info!(
            placed = report.placed.len(),
            abandoned = report.diagnostics.len(),
            "expansion complete"
        );
        ctx.advance(report);

        // ==========================================
        // Phase 3: requirement fulfillment
        // ==========================================
        let report = self.fulfiller.fulfill(&self.catalog, &mut ctx);
        info!(
            placed = report.placed.len(),
            owed = ctx.ledger.total_outstanding(),
            "fulfillment complete"
        );
        ctx.advance(report);

        // ==========================================
        // Phase 4: gap filling
        // ==========================================
        let api_candidates = match supplementary_interests {
            Some(text) if !text.trim().is_empty() && ctx.schedule.empty_slot_count() > 0 => {
                self.interest_source.resolve_interests(text).await
            }
            _ => Vec::new(),
        };

        let mut rng = SmallRng::from_os_rng();
        let report = self
            .gap_filler
            .fill(&self.catalog, &mut ctx, &api_candidates, &mut rng);
        info!(
            placed = report.placed.len(),
            sentinels = report.diagnostics.len(),
            "gap filling complete"
        );
        ctx.advance(report);

        let outcome = RecommendationOutcome::from_context(ctx);
        info!(
            run_id = %outcome.run_id,
            phase = %outcome.phase,
            unfulfilled = outcome.unfulfilled_credits.len(),
            sentinel_slots = outcome.sentinel_slots,
            "recommendation run finished"
        );

        Ok(outcome)
    }

    /// Run recommendations for a batch of students concurrently against
    /// the shared catalog. Outcomes come back in input order; one
    /// student's failure does not fail the batch.
    #[instrument(skip(self, students), fields(students = students.len()))]
    pub async fn recommend_many(
        &self,
        students: Vec<StudentProfile>,
    ) -> Vec<EngineResult<RecommendationOutcome>> {
        use futures::future::join_all;

        let runs = students
            .into_iter()
            .map(|student| self.recommend(student, None));

        let outcomes = join_all(runs).await;

        info!(
            total = outcomes.len(),
            succeeded = outcomes.iter().filter(|r| r.is_ok()).count(),
            failed = outcomes.iter().filter(|r| r.is_err()).count(),
            "batch recommendation complete"
        );

        outcomes
    }
}
