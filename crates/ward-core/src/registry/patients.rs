//! Patient registry operations.

use tracing::{info, warn};

use super::Hospital;
use crate::models::{Patient, Person};

impl Hospital {
    /// Register a patient. Returns `false` without touching the
    /// registry if the ID is already taken (idempotent registration).
    pub fn add_patient(&mut self, patient: Patient) -> bool {
        if self.patients.contains_key(&patient.id) {
            warn!(id = %patient.id, "patient already registered");
            return false;
        }
        info!(
            id = %patient.id,
            name = %patient.name,
            ailment = %patient.ailment,
            "added patient"
        );
        self.patients.insert(patient.id.clone(), patient);
        true
    }

    /// Look up a patient by ID.
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// All patients, in registration order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    /// Number of registered patients.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// One detail line per patient, in registration order.
    pub fn patient_report(&self) -> Vec<String> {
        self.patients.values().map(|p| p.details()).collect()
    }
}
