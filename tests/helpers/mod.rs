#![allow(dead_code)]

// ==========================================
// Shared test fixtures for integration tests
// ==========================================

use async_trait::async_trait;
use course_planner::domain::{Catalog, Course, CourseCode, StudentProfile, Track};
use course_planner::resolver::InterestSource;

// ==========================================
// Interest source test double
// ==========================================

/// Returns the same fixed candidate list for every query.
pub struct FixedInterestSource(pub Vec<CourseCode>);

#[async_trait]
impl InterestSource for FixedInterestSource {
    async fn resolve_interests(&self, _interests: &str) -> Vec<CourseCode> {
        self.0.clone()
    }
}

pub fn no_interests() -> FixedInterestSource {
    FixedInterestSource(Vec::new())
}

/// Answers only the query whose text equals `key`; any other query
/// resolves to no candidates.
pub struct KeyedInterestSource {
    pub key: String,
    pub candidates: Vec<CourseCode>,
}

#[async_trait]
impl InterestSource for KeyedInterestSource {
    async fn resolve_interests(&self, interests: &str) -> Vec<CourseCode> {
        if interests == self.key {
            self.candidates.clone()
        } else {
            Vec::new()
        }
    }
}

// ==========================================
// Students
// ==========================================

pub fn university_student(username: &str) -> StudentProfile {
    StudentProfile::new(username, 9, Track::University, "math and science", vec![])
}

pub fn college_student(username: &str) -> StudentProfile {
    StudentProfile::new(username, 9, Track::College, "trades", vec![])
}

// ==========================================
// Catalog fixture
// ==========================================
// Covers both track skeletons in full, one no-prerequisite course
// per graduation-credit category, and enough open-track electives
// per grade that a university run can fill every slot while a
// college run exhausts the grade-12 pool two slots short.

fn entry(
    code: &str,
    name: &str,
    area: &str,
    prerequisite: Option<&str>,
    grade_level: u8,
    track: Track,
    requirement: &str,
) -> Course {
    Course::new(
        code,
        name,
        area,
        prerequisite.map(CourseCode::from),
        grade_level,
        track,
        requirement,
    )
}

pub fn ontario_courses() -> Vec<Course> {
    vec![
        // ===== Grade 9-10 skeleton (shared by both tracks) =====
        entry("ENL1W", "English 9", "English", None, 9, Track::Open, ""),
        entry("MTH1W", "Mathematics 9", "Mathematics", None, 9, Track::Open, ""),
        entry("SNC1W", "Science 9", "Science", None, 9, Track::Open, ""),
        entry("CGC1W", "Geography of Canada", "Geography", None, 9, Track::Open, ""),
        entry("ENG2D", "English 10", "English", Some("ENL1W"), 10, Track::Open, ""),
        entry("MPM2D", "Principles of Mathematics", "Mathematics", Some("MTH1W"), 10, Track::Open, ""),
        entry("SNC2D", "Science 10", "Science", Some("SNC1W"), 10, Track::Open, ""),
        entry("CHC2D", "Canadian History", "History", None, 10, Track::Open, ""),
        entry("CHV2O", "Civics and Citizenship", "Civics", None, 10, Track::Open, ""),
        // ===== Grade 11-12 skeleton, university track =====
        entry("NBE3U", "Contemporary Indigenous Voices", "English", Some("ENG2D"), 11, Track::University, ""),
        entry("MCR3U", "Functions", "Mathematics", Some("MPM2D"), 11, Track::University, ""),
        entry("ENG4U", "English 12", "English", Some("NBE3U"), 12, Track::University, ""),
        entry("MHF4U", "Advanced Functions", "Mathematics", Some("MCR3U"), 12, Track::University, ""),
        entry("MCV4U", "Calculus and Vectors", "Mathematics", Some("MHF4U"), 12, Track::University, ""),
        // ===== Grade 11-12 skeleton, college track =====
        entry("NBE3C", "Contemporary Indigenous Voices College", "English", Some("ENG2D"), 11, Track::College, ""),
        entry("MBF3C", "Foundations for College Mathematics", "Mathematics", Some("MPM2D"), 11, Track::College, ""),
        entry("ENG4C", "English 12 College", "English", Some("NBE3C"), 12, Track::College, ""),
        // ===== Graduation-credit categories, one course each =====
        entry("AVI1O", "Visual Arts", "Arts", None, 9, Track::Open, ""),
        entry("PPL1O", "Healthy Active Living Education", "Health & Physical Education", None, 9, Track::Open, ""),
        entry("FSF1D", "Core French", "French", None, 9, Track::Open, ""),
        entry("BEM1O", "Building the Entrepreneurial Mindset", "Business", None, 9, Track::Open, "1.0"),
        entry("HFN2O", "Food and Nutrition", "Family Studies", None, 10, Track::Open, "2.0"),
        entry("ICS3O", "Introduction to Computer Studies", "Computer Studies", None, 11, Track::Open, "3.0"),
        // ===== Open electives, grade 10 =====
        entry("GLC2O", "Career Studies", "Guidance", None, 10, Track::Open, ""),
        entry("AMU2O", "Music 10", "Arts", None, 10, Track::Open, ""),
        // ===== Open electives, grade 11 =====
        entry("PPL3O", "Healthy Active Living Education 11", "Health & Physical Education", None, 11, Track::Open, ""),
        entry("SVN3O", "Environmental Science", "Science", None, 11, Track::Open, ""),
        entry("AVI3O", "Visual Arts 11", "Arts", None, 11, Track::Open, ""),
        entry("GWL3O", "Designing Your Future", "Guidance", None, 11, Track::Open, ""),
        entry("HPC3O", "Raising Healthy Children", "Family Studies", None, 11, Track::Open, ""),
        // ===== Open electives, grade 12 =====
        entry("PPL4O", "Healthy Active Living Education 12", "Health & Physical Education", None, 12, Track::Open, ""),
        entry("AWQ4O", "Photography", "Arts", None, 12, Track::Open, ""),
        entry("FSF4O", "French 12", "French", None, 12, Track::Open, ""),
        entry("SES4O", "Earth and Space Science", "Science", None, 12, Track::Open, ""),
        entry("CGW4O", "World Issues", "Geography", None, 12, Track::Open, ""),
    ]
}

pub fn ontario_catalog() -> Catalog {
    Catalog::from_courses(ontario_courses())
}

/// The same fixture rendered in the catalog file layout, header included.
pub fn ontario_catalog_csv() -> String {
    let mut csv = String::from(
        "Course Code,Course Name,Description,Course Area,Prerequisites,Grade Level,Track,Graduation Requirement\n",
    );
    for course in ontario_courses() {
        let track = match course.track {
            Track::University => "University",
            Track::College => "College",
            Track::Open => "Open",
        };
        let prerequisite = course
            .prerequisite
            .as_ref()
            .map(|code| code.as_str().to_string())
            .unwrap_or_else(|| "none".to_string());
        csv.push_str(&format!(
            "{},{},,{},{},{},{},{}\n",
            course.code,
            course.name,
            course.area,
            prerequisite,
            course.grade_level,
            track,
            course.graduation_requirement
        ));
    }
    csv
}
