// ==========================================
// Course Planner - per-run engine context
// ==========================================
// All mutable state of one recommendation run lives here and
// nowhere else. A context is built fresh per student and walked
// through the four phases in order; it is never reused.
// ==========================================

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::GraduationPolicy;
use crate::domain::{CourseCode, CreditLedger, RunPhase, Schedule, StudentProfile};

// ==========================================
// PhaseReport - what one phase did
// ==========================================
#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub phase: RunPhase,
    /// Codes newly written into the schedule by this phase.
    pub placed: Vec<CourseCode>,
    /// Non-fatal findings, `"CODE: detail"` form.
    pub diagnostics: Vec<String>,
}

impl PhaseReport {
    pub fn new(phase: RunPhase) -> Self {
        PhaseReport {
            phase,
            placed: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

// ==========================================
// RunContext
// ==========================================
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: Uuid,
    pub student: StudentProfile,

    // ===== Mutable run state =====
    pub schedule: Schedule,
    pub ledger: CreditLedger,

    // ===== Progress =====
    pub phase: Option<RunPhase>, // None until seeding completes
    pub reports: Vec<PhaseReport>,
    pub started_at: DateTime<Utc>,
}

impl RunContext {
    /// Fresh state for one student: empty schedule, full credit ledger.
    pub fn new(run_id: Uuid, student: StudentProfile, policy: &GraduationPolicy) -> Self {
        RunContext {
            run_id,
            student,
            schedule: Schedule::new(),
            ledger: policy.ledger(),
            phase: None,
            reports: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Record a completed phase. Phases are strictly sequential; a
    /// regression indicates an orchestration bug.
    pub fn advance(&mut self, report: PhaseReport) {
        debug_assert!(
            self.phase.map_or(true, |current| current < report.phase),
            "phase must advance monotonically"
        );
        self.phase = Some(report.phase);
        self.reports.push(report);
    }
}
