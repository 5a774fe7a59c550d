// ==========================================
// Course Planner - graduation credit ledger
// ==========================================
// Remaining-credits-needed counters per requirement category.
// Created fresh per run from the graduation policy; only ever
// decremented, never below zero.
// ==========================================

use crate::domain::course::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditLedger {
    balances: BTreeMap<String, u32>,
}

impl CreditLedger {
    pub fn new(initial: impl IntoIterator<Item = (String, u32)>) -> Self {
        CreditLedger {
            balances: initial.into_iter().collect(),
        }
    }

    /// Remaining credits for a category, `None` if the category is not part
    /// of the policy at all.
    pub fn remaining(&self, category: &str) -> Option<u32> {
        self.balances.get(category).copied()
    }

    /// Decrement a category by exactly 1 if its balance is positive.
    /// Returns whether a credit was consumed.
    pub fn consume(&mut self, category: &str) -> bool {
        match self.balances.get_mut(category) {
            Some(balance) if *balance > 0 => {
                *balance -= 1;
                true
            }
            _ => false,
        }
    }

    /// Credit a placed course against the ledger: the subject area is tried
    /// first, then the graduation-requirement tag. At most one category is
    /// decremented. Returns the category consumed, if any.
    pub fn consume_for_course(&mut self, course: &Course) -> Option<String> {
        if self.consume(&course.area) {
            return Some(course.area.clone());
        }
        if self.consume(&course.graduation_requirement) {
            return Some(course.graduation_requirement.clone());
        }
        None
    }

    /// Categories still carrying a positive balance, in key order.
    pub fn unfulfilled(&self) -> Vec<(String, u32)> {
        self.balances
            .iter()
            .filter(|(_, balance)| **balance > 0)
            .map(|(category, balance)| (category.clone(), *balance))
            .collect()
    }

    pub fn total_outstanding(&self) -> u32 {
        self.balances.values().sum()
    }

    pub fn is_satisfied(&self) -> bool {
        self.balances.values().all(|balance| *balance == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Track;

    fn ledger() -> CreditLedger {
        CreditLedger::new([
            ("Arts".to_string(), 1),
            ("French".to_string(), 1),
            ("1.0".to_string(), 1),
        ])
    }

    #[test]
    fn test_consume_stops_at_zero() {
        let mut ledger = ledger();
        assert!(ledger.consume("Arts"));
        assert!(!ledger.consume("Arts"));
        assert_eq!(ledger.remaining("Arts"), Some(0));
    }

    #[test]
    fn test_consume_unknown_category_is_noop() {
        let mut ledger = ledger();
        assert!(!ledger.consume("Robotics"));
        assert_eq!(ledger.total_outstanding(), 3);
    }

    #[test]
    fn test_consume_for_course_prefers_area() {
        let mut ledger = ledger();
        let course = Course::new("AMU1O", "Music", "Arts", None, 9, Track::Open, "1.0");
        assert_eq!(ledger.consume_for_course(&course), Some("Arts".to_string()));
        assert_eq!(ledger.remaining("Arts"), Some(0));
        assert_eq!(ledger.remaining("1.0"), Some(1));
    }

    #[test]
    fn test_consume_for_course_falls_back_to_requirement_tag() {
        let mut ledger = ledger();
        let course = Course::new("BEM1O", "Business", "Business", None, 9, Track::Open, "1.0");
        assert_eq!(ledger.consume_for_course(&course), Some("1.0".to_string()));
        assert_eq!(ledger.remaining("1.0"), Some(0));
    }

    #[test]
    fn test_consume_for_course_exhausted_areas_leave_ledger_untouched() {
        let mut ledger = ledger();
        let course = Course::new("AMU1O", "Music", "Arts", None, 9, Track::Open, "");
        assert!(ledger.consume_for_course(&course).is_some());
        assert_eq!(ledger.consume_for_course(&course), None);
        assert_eq!(ledger.remaining("Arts"), Some(0));
    }

    #[test]
    fn test_unfulfilled_lists_positive_balances() {
        let mut ledger = ledger();
        ledger.consume("French");
        let outstanding = ledger.unfulfilled();
        assert_eq!(outstanding.len(), 2);
        assert!(outstanding.iter().any(|(c, _)| c == "Arts"));
        assert!(!ledger.is_satisfied());
    }
}
