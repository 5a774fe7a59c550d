// ==========================================
// Course Planner - core library
// ==========================================
// Four-year high-school schedule recommendation:
// catalog import, interest resolution, phased
// recommendation engine, JSON export.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - recommendation phases
pub mod engine;

// Importer layer - catalog and student intake
pub mod importer;

// Resolver layer - interest service clients
pub mod resolver;

// Exporter layer - schedule files
pub mod exporter;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::{
    Catalog, Course, CourseCode, CreditLedger, Placement, RunPhase, Schedule, StudentProfile,
    Track,
};

// Engine
pub use engine::{
    EligibilityGate, EngineError, GapFiller, InterestExpander, RecommendationOrchestrator,
    RecommendationOutcome, RequirementFulfiller, ScheduleSeeder,
};

// Importer
pub use importer::{CatalogImporter, ImportError};

// Resolver
pub use resolver::{HttpInterestResolver, InterestSource, ResolverError};

// Exporter
pub use exporter::{ExportError, GradeExport, ScheduleExporter};

// Config
pub use config::{GraduationPolicy, ResolverConfig};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Display name
pub const APP_NAME: &str = "Course Planner";
