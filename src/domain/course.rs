// ==========================================
// Course Planner - course catalog domain model
// ==========================================
// Catalog is loaded once by the importer and read-only for
// the life of a recommendation run. Engines never mutate it.
// ==========================================

use crate::domain::types::Track;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

// ==========================================
// CourseCode - catalog key
// ==========================================
// Ministry-style code, e.g. "MCR3U". Uniqueness is the
// catalog's responsibility, not the type's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new(code: impl Into<String>) -> Self {
        CourseCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseCode {
    fn from(s: &str) -> Self {
        CourseCode(s.to_string())
    }
}

impl From<String> for CourseCode {
    fn from(s: String) -> Self {
        CourseCode(s)
    }
}

// Allows `&str` lookups against `BTreeMap<CourseCode, _>`.
impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ==========================================
// Course - catalog entry
// ==========================================
// Immutable once loaded. `prerequisite` is a single back-link,
// not a list: the catalog models chains, not dependency graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // ===== Identity =====
    pub code: CourseCode, // unique catalog key
    pub name: String,     // display name

    // ===== Classification =====
    pub area: String,                      // subject area, elective-credit matching
    pub track: Track,                      // offering track (OPEN admits every student)
    pub graduation_requirement: String,    // credit-category tag, empty if none

    // ===== Placement constraints =====
    pub prerequisite: Option<CourseCode>, // at most one direct prerequisite
    pub grade_level: u8,                  // grade the course is offered in (9-12)
}

impl Course {
    pub fn new(
        code: impl Into<CourseCode>,
        name: impl Into<String>,
        area: impl Into<String>,
        prerequisite: Option<CourseCode>,
        grade_level: u8,
        track: Track,
        graduation_requirement: impl Into<String>,
    ) -> Self {
        Course {
            code: code.into(),
            name: name.into(),
            area: area.into(),
            prerequisite,
            grade_level,
            track,
            graduation_requirement: graduation_requirement.into(),
        }
    }

    /// Whether this course satisfies a credit category, by subject area or
    /// by graduation-requirement tag. Category tags in the catalog are not
    /// consistently cased, so the match is case-insensitive.
    pub fn matches_category(&self, category: &str) -> bool {
        self.area.eq_ignore_ascii_case(category)
            || self.graduation_requirement.eq_ignore_ascii_case(category)
    }

    pub fn has_prerequisite(&self) -> bool {
        self.prerequisite.is_some()
    }
}

// ==========================================
// Catalog - course table keyed by code
// ==========================================
// BTreeMap so scans (requirement fulfillment, gap-fill candidate
// materialization) run in stable code order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    courses: BTreeMap<CourseCode, Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            courses: BTreeMap::new(),
        }
    }

    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Catalog::new();
        for course in courses {
            catalog.insert(course);
        }
        catalog
    }

    /// Insert a course, returning the entry it replaced if the code was
    /// already present (the importer logs that as a duplicate row).
    pub fn insert(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.code.clone(), course)
    }

    pub fn get(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.get(code.as_str())
    }

    pub fn get_by_str(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.courses.contains_key(code.as_str())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Prerequisite codes that do not resolve to a catalog entry.
    /// Tolerated at runtime (a chain walk simply stops there) but worth
    /// surfacing at load time.
    pub fn dangling_prerequisites(&self) -> Vec<(CourseCode, CourseCode)> {
        self.courses
            .values()
            .filter_map(|course| {
                course.prerequisite.as_ref().and_then(|prereq| {
                    if self.courses.contains_key(prereq.as_str()) {
                        None
                    } else {
                        Some((course.code.clone(), prereq.clone()))
                    }
                })
            })
            .collect()
    }

    /// Walk every prerequisite chain looking for a cycle. Returns the codes
    /// on the first cycle found, in walk order. A cyclic catalog must be
    /// rejected at load time; the expansion engine assumes chains terminate.
    pub fn find_prerequisite_cycle(&self) -> Option<Vec<CourseCode>> {
        // Chains are single-link, so a walk from each course with a
        // terminated-set memo visits every edge once overall.
        let mut terminated: HashSet<&CourseCode> = HashSet::new();

        for start in self.courses.values() {
            if terminated.contains(&start.code) {
                continue;
            }

            let mut path: Vec<CourseCode> = Vec::new();
            let mut on_path: HashSet<CourseCode> = HashSet::new();
            let mut current = Some(&start.code);

            while let Some(code) = current {
                if terminated.contains(code) {
                    break;
                }
                if on_path.contains(code) {
                    // Trim the lead-in so only the cycle itself is reported.
                    let cycle_start = path.iter().position(|c| c == code).unwrap_or(0);
                    return Some(path.split_off(cycle_start));
                }
                path.push(code.clone());
                on_path.insert(code.clone());
                current = self
                    .courses
                    .get(code.as_str())
                    .and_then(|course| course.prerequisite.as_ref());
            }

            for code in &path {
                if let Some((key, _)) = self.courses.get_key_value(code.as_str()) {
                    terminated.insert(key);
                }
            }
        }

        None
    }
}
