// ==========================================
// Course Planner - student input record
// ==========================================
// Supplied whole by the UI layer; opaque to the engines apart
// from the fields the eligibility gate and seeder read.
// ==========================================

use crate::domain::course::CourseCode;
use crate::domain::types::Track;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub username: String,
    pub grade: u8,
    pub track: Track,
    pub interests: String,
    pub completed_courses: Vec<CourseCode>,
}

impl StudentProfile {
    pub fn new(
        username: impl Into<String>,
        grade: u8,
        track: Track,
        interests: impl Into<String>,
        completed_courses: Vec<CourseCode>,
    ) -> Self {
        StudentProfile {
            username: username.into(),
            grade,
            track,
            interests: interests.into(),
            completed_courses,
        }
    }

    pub fn has_completed(&self, code: &CourseCode) -> bool {
        self.completed_courses.contains(code)
    }
}

/// Normalize the completed-courses field as the account layer stores it.
///
/// Two historical formats exist: a JSON string array (entries possibly in
/// `"CODE - Name"` form) and a bare comma-separated code list. Anything
/// else yields no codes; a missing transcript must not fail a run.
pub fn parse_completed_courses(raw: &str) -> Vec<CourseCode> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    // Bracketed input is JSON or nothing; bare input is a comma list.
    let entries: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
    } else {
        raw.split(',').map(|s| s.to_string()).collect()
    };

    entries
        .iter()
        .map(|entry| entry.split(" - ").next().unwrap_or(entry).trim())
        .filter(|code| !code.is_empty())
        .map(CourseCode::from)
        .collect()
}
