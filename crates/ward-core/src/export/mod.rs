//! Registry snapshot export for hand-off to external systems.

use serde::{Deserialize, Serialize};

use crate::models::{Doctor, Patient};
use crate::registry::Hospital;

/// A complete, serializable snapshot of a hospital registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalExport {
    /// Export metadata
    pub metadata: ExportMetadata,
    /// All registered doctors, in registration order
    pub doctors: Vec<Doctor>,
    /// All registered patients, in registration order
    pub patients: Vec<Patient>,
    /// All appointments, in booking order, with names resolved
    pub appointments: Vec<AppointmentRow>,
}

/// Export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Hospital name
    pub hospital: String,
    /// Number of doctors at export time
    pub doctor_count: usize,
    /// Number of patients at export time
    pub patient_count: usize,
    /// Number of appointments at export time
    pub appointment_count: usize,
    /// Export timestamp
    pub exported_at: String,
}

/// One appointment ledger row with both party names resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    /// Appointment ID
    pub id: String,
    /// Doctor ID
    pub doctor_id: String,
    /// Doctor name
    pub doctor_name: String,
    /// Patient ID
    pub patient_id: String,
    /// Patient name
    pub patient_name: String,
    /// Scheduled date/time as given at booking
    pub scheduled_at: String,
}

impl HospitalExport {
    /// Snapshot a registry.
    pub fn from_registry(hospital: &Hospital) -> Self {
        let appointments = hospital
            .appointments()
            .map(|a| AppointmentRow {
                id: a.id.clone(),
                doctor_id: a.doctor_id.clone(),
                doctor_name: name_of(hospital.doctor(&a.doctor_id).map(|d| d.name.as_str())),
                patient_id: a.patient_id.clone(),
                patient_name: name_of(hospital.patient(&a.patient_id).map(|p| p.name.as_str())),
                scheduled_at: a.scheduled_at.clone(),
            })
            .collect();

        Self {
            metadata: ExportMetadata {
                hospital: hospital.name.clone(),
                doctor_count: hospital.doctor_count(),
                patient_count: hospital.patient_count(),
                appointment_count: hospital.appointment_count(),
                exported_at: chrono::Utc::now().to_rfc3339(),
            },
            doctors: hospital.doctors().cloned().collect(),
            patients: hospital.patients().cloned().collect(),
            appointments,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export the appointment ledger to CSV.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("appointment_id,doctor_id,doctor_name,patient_id,patient_name,scheduled_at\n");

        // Lines
        for row in &self.appointments {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                escape_csv(&row.id),
                escape_csv(&row.doctor_id),
                escape_csv(&row.doctor_name),
                escape_csv(&row.patient_id),
                escape_csv(&row.patient_name),
                escape_csv(&row.scheduled_at),
            ));
        }

        csv
    }
}

fn name_of(name: Option<&str>) -> String {
    name.unwrap_or("unknown").to_string()
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
