// ==========================================
// Course Planner - engine layer
// ==========================================
// The four recommendation phases plus their shared run context.
// Every rule outputs its reasons; rejection is data, not an
// error.
// ==========================================

pub mod context;
pub mod eligibility;
pub mod error;
pub mod expansion;
pub mod fulfillment;
pub mod gap_filler;
pub mod orchestrator;
pub mod seeder;

// Re-export the engine surface
pub use context::{PhaseReport, RunContext};
pub use eligibility::EligibilityGate;
pub use error::{EngineError, EngineResult};
pub use expansion::InterestExpander;
pub use fulfillment::RequirementFulfiller;
pub use gap_filler::GapFiller;
pub use orchestrator::{RecommendationOrchestrator, RecommendationOutcome};
pub use seeder::ScheduleSeeder;
