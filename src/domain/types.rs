// ==========================================
// Course Planner - domain type definitions
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Grade range and slot capacity
// ==========================================

// Lowest grade a schedule covers
pub const GRADE_MIN: u8 = 9;

// Highest grade a schedule covers
pub const GRADE_MAX: u8 = 12;

// Fixed number of course slots per grade
pub const MAX_COURSES_PER_GRADE: usize = 8;

// Slot marker used when no eligible course exists for an open slot
pub const SENTINEL_CODE: &str = "E404";

// Display name the sentinel renders under in exports
pub const SENTINEL_NAME: &str = "No Course Available";

// ==========================================
// Track
// ==========================================
// A student's post-secondary path. Open-track courses are
// eligible regardless of the student's declared track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Track {
    University, // university-bound
    College,    // college-bound
    Open,       // no restriction
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::University => write!(f, "UNIVERSITY"),
            Track::College => write!(f, "COLLEGE"),
            Track::Open => write!(f, "OPEN"),
        }
    }
}

impl Track {
    /// Parse a track label as it appears in catalog cells and UI input.
    /// Case-insensitive; unknown labels yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "university" => Some(Track::University),
            "college" => Some(Track::College),
            "open" => Some(Track::Open),
            _ => None,
        }
    }

    /// Whether a course offered on `course_track` is open to a student on
    /// this track.
    pub fn admits(&self, course_track: Track) -> bool {
        course_track == Track::Open || course_track == *self
    }
}

// ==========================================
// Run phase
// ==========================================
// Strictly sequential per recommendation run:
// SEEDED -> EXPANDED -> REQUIREMENTS_FULFILLED -> GAP_FILLED -> EXPORTED.
// A phase that finds nothing to do still advances the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunPhase {
    Seeded,                // track skeleton + completed courses placed
    Expanded,              // interest candidates and prerequisite chains placed
    RequirementsFulfilled, // graduation-credit categories consumed
    GapFilled,             // remaining slots filled or sentinel-marked
    Exported,              // schedule handed to the exporter
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Seeded => write!(f, "SEEDED"),
            RunPhase::Expanded => write!(f, "EXPANDED"),
            RunPhase::RequirementsFulfilled => write!(f, "REQUIREMENTS_FULFILLED"),
            RunPhase::GapFilled => write!(f, "GAP_FILLED"),
            RunPhase::Exported => write!(f, "EXPORTED"),
        }
    }
}
