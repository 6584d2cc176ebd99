//! Appointment booking and reporting.

use tracing::info;

use super::{EntityKind, Hospital, RegistryError, RegistryResult};
use crate::models::{parse_datetime, Appointment};

impl Hospital {
    /// Book an appointment with a caller-chosen ID.
    ///
    /// Both parties must already be registered and the datetime must
    /// parse (see [`parse_datetime`]). On any failure nothing is
    /// mutated. On success the appointment is stored and its ID is
    /// appended to the doctor's schedule; a clone of the stored
    /// record is returned.
    pub fn book_appointment(
        &mut self,
        appointment_id: &str,
        doctor_id: &str,
        patient_id: &str,
        scheduled_at: &str,
    ) -> RegistryResult<Appointment> {
        if self.appointments.contains_key(appointment_id) {
            return Err(RegistryError::DuplicateId {
                kind: EntityKind::Appointment,
                id: appointment_id.to_string(),
            });
        }
        if !self.doctors.contains_key(doctor_id) {
            return Err(RegistryError::EntityNotFound {
                kind: EntityKind::Doctor,
                id: doctor_id.to_string(),
            });
        }
        if !self.patients.contains_key(patient_id) {
            return Err(RegistryError::EntityNotFound {
                kind: EntityKind::Patient,
                id: patient_id.to_string(),
            });
        }
        if parse_datetime(scheduled_at).is_none() {
            return Err(RegistryError::InvalidDateTime(scheduled_at.to_string()));
        }

        let appointment = Appointment::new(appointment_id, doctor_id, patient_id, scheduled_at);
        info!(
            id = %appointment.id,
            doctor = %doctor_id,
            patient = %patient_id,
            at = %scheduled_at,
            "booked appointment"
        );

        self.appointments
            .insert(appointment.id.clone(), appointment.clone());
        if let Some(doctor) = self.doctors.get_mut(doctor_id) {
            doctor.schedule.push(appointment.id.clone());
        }
        Ok(appointment)
    }

    /// Book an appointment under a freshly generated UUID.
    pub fn book_next(
        &mut self,
        doctor_id: &str,
        patient_id: &str,
        scheduled_at: &str,
    ) -> RegistryResult<Appointment> {
        let id = uuid::Uuid::new_v4().to_string();
        self.book_appointment(&id, doctor_id, patient_id, scheduled_at)
    }

    /// Look up an appointment by ID.
    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.get(id)
    }

    /// All appointments, in booking order.
    pub fn appointments(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.values()
    }

    /// Number of booked appointments.
    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// One summary line per appointment, in booking order, with the
    /// participant names resolved.
    pub fn appointment_report(&self) -> Vec<String> {
        self.appointments
            .values()
            .map(|a| a.summary(self.doctor_name(&a.doctor_id), self.patient_name(&a.patient_id)))
            .collect()
    }

    /// Schedule lines for one doctor: either the no-appointments
    /// indicator or one line per appointment in booking order.
    pub fn schedule_report(&self, doctor_id: &str) -> RegistryResult<Vec<String>> {
        let doctor = self
            .doctors
            .get(doctor_id)
            .ok_or_else(|| RegistryError::EntityNotFound {
                kind: EntityKind::Doctor,
                id: doctor_id.to_string(),
            })?;

        if doctor.schedule.is_empty() {
            return Ok(vec!["No appointments scheduled.".to_string()]);
        }

        Ok(doctor
            .schedule
            .iter()
            .filter_map(|id| self.appointments.get(id))
            .map(|a| format!("{} with {}", a.scheduled_at, self.patient_name(&a.patient_id)))
            .collect())
    }

    // Booking guarantees both parties exist; "unknown" is unreachable
    // for records created through the registry.
    fn doctor_name(&self, id: &str) -> &str {
        self.doctors.get(id).map(|d| d.name.as_str()).unwrap_or("unknown")
    }

    fn patient_name(&self, id: &str) -> &str {
        self.patients.get(id).map(|p| p.name.as_str()).unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Doctor, Patient};

    fn populated() -> Hospital {
        let mut hospital = Hospital::new("City Hospital");
        hospital.add_doctor(Doctor::new("D1", "Dr. Grey", 45, "Cardiology").unwrap());
        hospital.add_patient(Patient::new("P1", "Alice", 30, "Chest Pain").unwrap());
        hospital
    }

    #[test]
    fn test_book_success() {
        let mut hospital = populated();
        let appt = hospital
            .book_appointment("A1", "D1", "P1", "2024-01-01T10:00")
            .unwrap();

        assert_eq!(appt.doctor_id, "D1");
        assert_eq!(hospital.appointment("A1").unwrap(), &appt);
        assert_eq!(hospital.doctor("D1").unwrap().schedule(), ["A1"]);
    }

    #[test]
    fn test_book_unknown_doctor() {
        let mut hospital = populated();
        let err = hospital
            .book_appointment("A1", "D9", "P1", "2024-01-01T10:00")
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::EntityNotFound {
                kind: EntityKind::Doctor,
                id: "D9".into()
            }
        );
        assert_eq!(hospital.appointment_count(), 0);
    }

    #[test]
    fn test_book_unknown_patient() {
        let mut hospital = populated();
        let err = hospital
            .book_appointment("A1", "D1", "P9", "2024-01-01T10:00")
            .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::EntityNotFound {
                kind: EntityKind::Patient,
                ..
            }
        ));
        assert!(!hospital.doctor("D1").unwrap().has_appointments());
    }

    #[test]
    fn test_book_duplicate_id() {
        let mut hospital = populated();
        hospital
            .book_appointment("A1", "D1", "P1", "2024-01-01T10:00")
            .unwrap();
        let err = hospital
            .book_appointment("A1", "D1", "P1", "2024-01-02T10:00")
            .unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateId { .. }));
        assert_eq!(hospital.doctor("D1").unwrap().schedule().len(), 1);
    }

    #[test]
    fn test_book_invalid_datetime() {
        let mut hospital = populated();
        let err = hospital
            .book_appointment("A1", "D1", "P1", "whenever")
            .unwrap_err();

        assert_eq!(err, RegistryError::InvalidDateTime("whenever".into()));
        assert_eq!(hospital.appointment_count(), 0);
    }

    #[test]
    fn test_book_next_generates_uuid() {
        let mut hospital = populated();
        let appt = hospital.book_next("D1", "P1", "2024-01-01T10:00").unwrap();
        assert_eq!(appt.id.len(), 36); // UUID format
        assert_eq!(hospital.doctor("D1").unwrap().schedule(), [appt.id]);
    }

    #[test]
    fn test_schedule_report_empty() {
        let hospital = populated();
        let lines = hospital.schedule_report("D1").unwrap();
        assert_eq!(lines, ["No appointments scheduled."]);
    }

    #[test]
    fn test_schedule_report_ordering() {
        let mut hospital = populated();
        hospital
            .book_appointment("A1", "D1", "P1", "2024-01-02T14:00")
            .unwrap();
        hospital
            .book_appointment("A2", "D1", "P1", "2024-01-01T10:00")
            .unwrap();

        // Booking order, not chronological order
        let lines = hospital.schedule_report("D1").unwrap();
        assert_eq!(
            lines,
            ["2024-01-02T14:00 with Alice", "2024-01-01T10:00 with Alice"]
        );
    }

    #[test]
    fn test_schedule_report_unknown_doctor() {
        let hospital = populated();
        assert!(hospital.schedule_report("D9").is_err());
    }

    #[test]
    fn test_appointment_report() {
        let mut hospital = populated();
        hospital
            .book_appointment("A1", "D1", "P1", "2024-01-01T10:00")
            .unwrap();

        let report = hospital.appointment_report();
        assert_eq!(
            report,
            ["Appointment[ID: A1, Patient: Alice, Doctor: Dr. Grey, Time: 2024-01-01T10:00]"]
        );
    }
}
