//! Appointment model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An immutable record linking one doctor and one patient at a time.
///
/// Only the registry constructs appointments; the doctor and patient
/// are referenced by ID, never owned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique appointment ID
    pub id: String,
    /// ID of the doctor seeing the patient
    pub doctor_id: String,
    /// ID of the patient being seen
    pub patient_id: String,
    /// Scheduled date/time, stored exactly as given after validation
    pub scheduled_at: String,
    /// Creation timestamp
    pub created_at: String,
}

impl Appointment {
    /// Create a new appointment. The caller validates `scheduled_at`
    /// with [`parse_datetime`] first.
    pub(crate) fn new(
        id: impl Into<String>,
        doctor_id: impl Into<String>,
        patient_id: impl Into<String>,
        scheduled_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            doctor_id: doctor_id.into(),
            patient_id: patient_id.into(),
            scheduled_at: scheduled_at.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// One-line description with the participant names resolved by
    /// the registry.
    pub fn summary(&self, doctor_name: &str, patient_name: &str) -> String {
        format!(
            "Appointment[ID: {}, Patient: {}, Doctor: {}, Time: {}]",
            self.id, patient_name, doctor_name, self.scheduled_at
        )
    }
}

/// Parse a scheduled date/time. Accepts RFC 3339 as well as the
/// seconds-optional local form used by the booking interface.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}
