// ==========================================
// Course Planner - configuration layer
// ==========================================
// Policy tables and service endpoints. Everything here has a
// production default; callers override per deployment, never
// per run.
// ==========================================

use crate::domain::course::CourseCode;
use crate::domain::credit::CreditLedger;
use crate::domain::types::Track;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ==========================================
// Default values
// ==========================================
pub mod defaults {
    // Interest-matching service
    pub const PRIMARY_INTEREST_ENDPOINT: &str =
        "https://coursesapi-84sd.onrender.com/recommend-courses/";
    pub const BACKUP_INTEREST_ENDPOINT: &str = "http://127.0.0.1:8000/recommend-courses/";
    pub const INTEREST_REQUEST_TIMEOUT_SECS: u64 = 20;

    // Exported schedule file name, formatted with the username
    pub const EXPORT_FILE_PREFIX: &str = "recommended_course_name_";
}

// ==========================================
// ResolverConfig - interest service endpoints
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub primary_url: String,
    pub backup_url: String,
    /// Per-endpoint budget; both the connect and the full round trip
    /// share it.
    pub timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            primary_url: defaults::PRIMARY_INTEREST_ENDPOINT.to_string(),
            backup_url: defaults::BACKUP_INTEREST_ENDPOINT.to_string(),
            timeout: Duration::from_secs(defaults::INTEREST_REQUEST_TIMEOUT_SECS),
        }
    }
}

// ==========================================
// GraduationPolicy - credit-category table
// ==========================================
// One credit each: three named subject categories plus three
// generic elective groups whose names match the catalog's
// graduation-requirement tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraduationPolicy {
    pub required_credits: Vec<(String, u32)>,
}

impl GraduationPolicy {
    /// Fresh ledger for one recommendation run.
    pub fn ledger(&self) -> CreditLedger {
        CreditLedger::new(self.required_credits.iter().cloned())
    }
}

impl Default for GraduationPolicy {
    fn default() -> Self {
        GraduationPolicy {
            required_credits: vec![
                ("Arts".to_string(), 1),
                ("Health & Physical Education".to_string(), 1),
                ("French".to_string(), 1),
                // Elective groups
                ("1.0".to_string(), 1),
                ("2.0".to_string(), 1),
                ("3.0".to_string(), 1),
            ],
        }
    }
}

// ==========================================
// Track skeletons - per-grade mandatory courses
// ==========================================
// Grades 9-10 are common; tracks diverge at 11-12. The Open
// track seeds the College skeleton.

const UNIVERSITY_SKELETON: &[(u8, &[&str])] = &[
    (9, &["ENL1W", "MTH1W", "SNC1W", "CGC1W"]),
    (10, &["ENG2D", "MPM2D", "SNC2D", "CHC2D", "CHV2O"]),
    (11, &["NBE3U", "MCR3U"]),
    (12, &["ENG4U", "MHF4U", "MCV4U"]),
];

const COLLEGE_SKELETON: &[(u8, &[&str])] = &[
    (9, &["ENL1W", "MTH1W", "SNC1W", "CGC1W"]),
    (10, &["ENG2D", "MPM2D", "SNC2D", "CHC2D", "CHV2O"]),
    (11, &["NBE3C", "MBF3C"]),
    (12, &["ENG4C"]),
];

/// Mandatory course codes per grade for a track.
pub fn track_skeleton(track: Track) -> &'static [(u8, &'static [&'static str])] {
    match track {
        Track::University => UNIVERSITY_SKELETON,
        Track::College | Track::Open => COLLEGE_SKELETON,
    }
}

/// Flattened skeleton codes for a track, in grade-then-slot order.
pub fn skeleton_codes(track: Track) -> Vec<CourseCode> {
    track_skeleton(track)
        .iter()
        .flat_map(|(_, codes)| codes.iter().map(|code| CourseCode::from(*code)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_totals_six_credits() {
        let policy = GraduationPolicy::default();
        let ledger = policy.ledger();
        assert_eq!(ledger.total_outstanding(), 6);
        assert_eq!(ledger.remaining("French"), Some(1));
        assert_eq!(ledger.remaining("2.0"), Some(1));
    }

    #[test]
    fn test_skeletons_share_grades_nine_and_ten() {
        let university = track_skeleton(Track::University);
        let college = track_skeleton(Track::College);
        assert_eq!(university[0], college[0]);
        assert_eq!(university[1], college[1]);
        assert_ne!(university[2], college[2]);
    }

    #[test]
    fn test_open_track_uses_college_skeleton() {
        assert_eq!(skeleton_codes(Track::Open), skeleton_codes(Track::College));
    }

    #[test]
    fn test_university_skeleton_size() {
        assert_eq!(skeleton_codes(Track::University).len(), 14);
    }

    #[test]
    fn test_resolver_defaults() {
        let config = ResolverConfig::default();
        assert!(config.primary_url.starts_with("https://"));
        assert_eq!(config.timeout, Duration::from_secs(20));
    }
}
