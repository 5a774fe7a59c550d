// ==========================================
// Full pipeline end-to-end tests
// ==========================================
// CSV file in, per-user JSON file out: import the catalog,
// run a recommendation, export it, and read the file back the
// way downstream delivery would.
// ==========================================

mod helpers;

use std::io::Write;
use std::sync::Arc;

use course_planner::config::GraduationPolicy;
use course_planner::domain::{RunPhase, StudentProfile, Track};
use course_planner::engine::RecommendationOrchestrator;
use course_planner::exporter::{read_exported, ScheduleExporter};
use course_planner::importer::CatalogImporter;
use course_planner::logging;
use tempfile::{Builder, NamedTempFile};

use helpers::{no_interests, ontario_catalog_csv};

fn catalog_file() -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(ontario_catalog_csv().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==========================================
// Test 1: university student, file to file
// ==========================================
#[tokio::test]
async fn test_csv_to_schedule_file_for_a_university_student() {
    logging::init_test();

    let file = catalog_file();
    let catalog = Arc::new(CatalogImporter::new().load(file.path()).unwrap());

    let orchestrator = RecommendationOrchestrator::new(
        Arc::clone(&catalog),
        GraduationPolicy::default(),
        no_interests(),
    );
    let student = StudentProfile::new("morgan", 9, Track::University, "math and science", vec![]);
    let mut outcome = orchestrator.recommend(student, None).await.unwrap();

    assert!(outcome.ledger.is_satisfied());
    assert_eq!(outcome.sentinel_slots, 0);

    let out_dir = tempfile::tempdir().unwrap();
    let exporter = ScheduleExporter::new(Arc::clone(&catalog), out_dir.path());
    let path = exporter.export(&mut outcome).unwrap();

    assert_eq!(outcome.phase, RunPhase::Exported);
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "recommended_course_name_morgan.json"
    );

    let records = read_exported(&path).unwrap();
    assert_eq!(records.len(), 4);
    for record in &records {
        assert_eq!(record.courses.len(), 8);
    }
    assert_eq!(records[0].courses[0], "ENL1W - English 9");
}

// ==========================================
// Test 2: college student, placeholders in the file
// ==========================================
#[tokio::test]
async fn test_csv_to_schedule_file_for_a_college_student() {
    logging::init_test();

    let file = catalog_file();
    let catalog = Arc::new(CatalogImporter::new().load(file.path()).unwrap());

    let orchestrator = RecommendationOrchestrator::new(
        Arc::clone(&catalog),
        GraduationPolicy::default(),
        no_interests(),
    );
    let student = StudentProfile::new("casey", 9, Track::College, "trades", vec![]);
    let mut outcome = orchestrator.recommend(student, None).await.unwrap();

    assert_eq!(outcome.sentinel_slots, 2);

    let out_dir = tempfile::tempdir().unwrap();
    let exporter = ScheduleExporter::new(Arc::clone(&catalog), out_dir.path());
    let path = exporter.export(&mut outcome).unwrap();

    let records = read_exported(&path).unwrap();
    let grade_12 = records.iter().find(|record| record.grade == 12).unwrap();
    let placeholders = grade_12
        .courses
        .iter()
        .filter(|course_entry| course_entry.as_str() == "E404 - No Course Available")
        .count();
    assert_eq!(placeholders, 2);
}

// ==========================================
// Test 3: concurrent runs share one catalog
// ==========================================
#[tokio::test]
async fn test_concurrent_runs_share_one_catalog() {
    logging::init_test();

    let file = catalog_file();
    let catalog = Arc::new(CatalogImporter::new().load(file.path()).unwrap());

    let orchestrator = RecommendationOrchestrator::new(
        Arc::clone(&catalog),
        GraduationPolicy::default(),
        no_interests(),
    );

    let first = StudentProfile::new("ana", 9, Track::University, "science", vec![]);
    let second = StudentProfile::new("ben", 9, Track::College, "trades", vec![]);

    let (first_outcome, second_outcome) = tokio::join!(
        orchestrator.recommend(first, None),
        orchestrator.recommend(second, None),
    );
    let mut first_outcome = first_outcome.unwrap();
    let mut second_outcome = second_outcome.unwrap();

    assert!(first_outcome.ledger.is_satisfied());
    assert!(second_outcome.ledger.is_satisfied());
    assert_ne!(first_outcome.run_id, second_outcome.run_id);

    // Both runs export side by side without clobbering each other.
    let out_dir = tempfile::tempdir().unwrap();
    let exporter = ScheduleExporter::new(Arc::clone(&catalog), out_dir.path());
    let first_path = exporter.export(&mut first_outcome).unwrap();
    let second_path = exporter.export(&mut second_outcome).unwrap();

    assert_ne!(first_path, second_path);
    assert!(first_path.exists());
    assert!(second_path.exists());
}
