//! Fuzzy name lookup over the registry.
//!
//! Front-desk queries rarely match stored names exactly, so lookups
//! score candidates with Jaro-Winkler similarity instead of requiring
//! exact IDs.

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use super::Hospital;

/// Minimum similarity to be considered a match.
const MIN_SCORE: f64 = 0.6;

/// A scored search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredMatch {
    /// ID of the matched entity
    pub id: String,
    /// Name of the matched entity
    pub name: String,
    /// Similarity score in 0.0..=1.0
    pub score: f64,
}

impl Hospital {
    /// Search doctors by name or specialization.
    pub fn search_doctors(&self, query: &str, limit: usize) -> Vec<ScoredMatch> {
        let matches = self.doctors.values().filter_map(|d| {
            let score = score_field(query, &d.name).max(score_field(query, &d.specialization));
            (score >= MIN_SCORE).then(|| ScoredMatch {
                id: d.id.clone(),
                name: d.name.clone(),
                score,
            })
        });
        rank(matches.collect(), limit)
    }

    /// Search patients by name.
    pub fn search_patients(&self, query: &str, limit: usize) -> Vec<ScoredMatch> {
        let matches = self.patients.values().filter_map(|p| {
            let score = score_field(query, &p.name);
            (score >= MIN_SCORE).then(|| ScoredMatch {
                id: p.id.clone(),
                name: p.name.clone(),
                score,
            })
        });
        rank(matches.collect(), limit)
    }
}

/// Score a query against one field (0.0 - 1.0). Substring hits count
/// as exact.
fn score_field(query: &str, candidate: &str) -> f64 {
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    if candidate.contains(&query) {
        return 1.0;
    }
    jaro_winkler(&query, &candidate)
}

/// Sort by score descending and truncate.
fn rank(mut matches: Vec<ScoredMatch>, limit: usize) -> Vec<ScoredMatch> {
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Doctor, Patient};

    fn populated() -> Hospital {
        let mut hospital = Hospital::new("City Hospital");
        hospital.add_doctor(Doctor::new("D1", "Dr. Grey", 45, "Cardiology").unwrap());
        hospital.add_doctor(Doctor::new("D2", "Dr. Shepherd", 50, "Neurology").unwrap());
        hospital.add_patient(Patient::new("P1", "Alice Cooper", 30, "Chest Pain").unwrap());
        hospital.add_patient(Patient::new("P2", "Alison Cooper", 28, "Headache").unwrap());
        hospital
    }

    #[test]
    fn test_exact_substring_match() {
        let hospital = populated();
        let hits = hospital.search_doctors("grey", 5);
        assert_eq!(hits[0].id, "D1");
        assert_eq!(hits[0].score, 1.0);
    }

    #[test]
    fn test_specialization_match() {
        let hospital = populated();
        let hits = hospital.search_doctors("cardio", 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "D1");
    }

    #[test]
    fn test_fuzzy_patient_match() {
        let hospital = populated();
        let hits = hospital.search_patients("alice cooper", 5);
        assert!(hits.len() >= 2);
        // Exact hit ranks above the near-miss
        assert_eq!(hits[0].id, "P1");
    }

    #[test]
    fn test_limit_and_miss() {
        let hospital = populated();
        assert_eq!(hospital.search_patients("alis", 1).len(), 1);
        assert!(hospital.search_doctors("zzzzqqqq", 5).is_empty());
    }
}
