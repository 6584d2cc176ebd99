//! Doctor registry operations.

use tracing::{info, warn};

use super::Hospital;
use crate::models::{Doctor, Person};

impl Hospital {
    /// Register a doctor. Returns `false` without touching the
    /// registry if the ID is already taken (idempotent registration).
    pub fn add_doctor(&mut self, doctor: Doctor) -> bool {
        if self.doctors.contains_key(&doctor.id) {
            warn!(id = %doctor.id, "doctor already registered");
            return false;
        }
        info!(
            id = %doctor.id,
            name = %doctor.name,
            specialization = %doctor.specialization,
            "added doctor"
        );
        self.doctors.insert(doctor.id.clone(), doctor);
        true
    }

    /// Look up a doctor by ID.
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    /// All doctors, in registration order.
    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.doctors.values()
    }

    /// Number of registered doctors.
    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    /// One detail line per doctor, in registration order.
    pub fn doctor_report(&self) -> Vec<String> {
        self.doctors.values().map(|d| d.details()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Doctor {
        Doctor::new("D1", "Dr. Grey", 45, "Cardiology").unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut hospital = Hospital::new("City Hospital");
        assert!(hospital.add_doctor(grey()));

        let doctor = hospital.doctor("D1").unwrap();
        assert_eq!(doctor.name, "Dr. Grey");
        assert!(hospital.doctor("D2").is_none());
    }

    #[test]
    fn test_duplicate_is_noop() {
        let mut hospital = Hospital::new("City Hospital");
        assert!(hospital.add_doctor(grey()));

        let mut imposter = grey();
        imposter.name = "Dr. Imposter".into();
        assert!(!hospital.add_doctor(imposter));

        assert_eq!(hospital.doctor_count(), 1);
        assert_eq!(hospital.doctor("D1").unwrap().name, "Dr. Grey");
    }

    #[test]
    fn test_report_preserves_registration_order() {
        let mut hospital = Hospital::new("City Hospital");
        hospital.add_doctor(Doctor::new("D2", "Dr. Shepherd", 50, "Neurology").unwrap());
        hospital.add_doctor(grey());

        let report = hospital.doctor_report();
        assert_eq!(report.len(), 2);
        assert!(report[0].contains("Shepherd"));
        assert!(report[1].contains("Grey"));
    }
}
