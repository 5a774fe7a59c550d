// ==========================================
// Course Planner - recommendation schedule grid
// ==========================================
// Mutable state of one recommendation run: four grade arrays
// of eight optional course-code slots each. Fresh per run,
// never shared between students.
// ==========================================

use crate::domain::course::{Course, CourseCode};
use crate::domain::types::{GRADE_MAX, GRADE_MIN, MAX_COURSES_PER_GRADE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Placement - outcome of a slot insert
// ==========================================
// Rejections are expected control flow, not errors: each phase
// skips and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed { grade: u8, slot: usize }, // written to the first empty slot
    AlreadyPresent,                    // code exists somewhere in the grid
    GradeFull,                         // all 8 slots of the target grade taken
    GradeOutOfRange,                   // course grade outside 9-12
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

// ==========================================
// Schedule
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    // BTreeMap keeps grade iteration ascending (9 before 10 before 11
    // before 12), which the fulfillment scan and the export order rely on.
    grades: BTreeMap<u8, [Option<CourseCode>; MAX_COURSES_PER_GRADE]>,
}

impl Schedule {
    /// Empty grid covering grades 9 through 12.
    pub fn new() -> Self {
        let mut grades = BTreeMap::new();
        for grade in GRADE_MIN..=GRADE_MAX {
            grades.insert(grade, Default::default());
        }
        Schedule { grades }
    }

    /// Insert a course into the first empty slot of the array keyed by the
    /// course's own grade level. Duplicate codes and full grades are
    /// rejected, never overwritten.
    pub fn place(&mut self, course: &Course) -> Placement {
        if self.contains(&course.code) {
            return Placement::AlreadyPresent;
        }

        let grade = course.grade_level;
        let slots = match self.grades.get_mut(&grade) {
            Some(slots) => slots,
            None => return Placement::GradeOutOfRange,
        };

        for (index, slot) in slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(course.code.clone());
                return Placement::Placed { grade, slot: index };
            }
        }

        Placement::GradeFull
    }

    /// Write a code into one known-empty slot. Used by the gap filler,
    /// which picks the slot itself and may write the sentinel more than
    /// once. Returns false without writing if the slot is occupied.
    pub fn fill_slot(&mut self, grade: u8, slot: usize, code: CourseCode) -> bool {
        match self.grades.get_mut(&grade).and_then(|s| s.get_mut(slot)) {
            Some(entry) if entry.is_none() => {
                *entry = Some(code);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.grades
            .values()
            .any(|slots| slots.iter().flatten().any(|c| c == code))
    }

    pub fn grade_slots(&self, grade: u8) -> Option<&[Option<CourseCode>; MAX_COURSES_PER_GRADE]> {
        self.grades.get(&grade)
    }

    /// Grade arrays in ascending grade order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (u8, &[Option<CourseCode>; MAX_COURSES_PER_GRADE])> {
        self.grades.iter().map(|(grade, slots)| (*grade, slots))
    }

    /// Every placed code, grade by grade, slot by slot.
    pub fn placed_codes(&self) -> impl Iterator<Item = &CourseCode> {
        self.grades.values().flat_map(|slots| slots.iter().flatten())
    }

    /// Grades that still have at least one empty slot, ascending.
    pub fn open_grades(&self) -> Vec<u8> {
        self.grades
            .iter()
            .filter(|(_, slots)| slots.iter().any(|slot| slot.is_none()))
            .map(|(grade, _)| *grade)
            .collect()
    }

    pub fn has_open_slot(&self, grade: u8) -> bool {
        self.grades
            .get(&grade)
            .map(|slots| slots.iter().any(|slot| slot.is_none()))
            .unwrap_or(false)
    }

    pub fn empty_slot_count(&self) -> usize {
        self.grades
            .values()
            .map(|slots| slots.iter().filter(|slot| slot.is_none()).count())
            .sum()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}
