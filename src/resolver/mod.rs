// ==========================================
// Course Planner - resolver module
// ==========================================
//
// Resolves free-text student interests into candidate course codes via
// the external matching service, with a primary/backup endpoint race.

pub mod error;
pub mod interest_client;

pub use error::{ResolverError, ResolverResult};
pub use interest_client::{HttpInterestResolver, InterestSource};
