//! The sample registry scenario.

use anyhow::Result;
use ward_core::{Doctor, Hospital, Patient};

use crate::terminal::print;

/// Build the sample hospital: two doctors, two patients, one
/// appointment with each doctor.
pub fn sample_hospital(name: &str) -> Result<Hospital> {
    let mut hospital = Hospital::new(name);

    hospital.add_doctor(Doctor::new("D1", "Dr. Grey", 45, "Cardiology")?);
    hospital.add_doctor(Doctor::new("D2", "Dr. Shepherd", 50, "Neurology")?);

    hospital.add_patient(Patient::new("P1", "Alice", 30, "Chest Pain")?);
    hospital.add_patient(Patient::new("P2", "Bob", 45, "Headache")?);

    hospital.book_appointment("A1", "D1", "P1", "2024-11-26T10:00")?;
    hospital.book_appointment("A2", "D2", "P2", "2024-11-26T14:00")?;

    Ok(hospital)
}

/// Run the scenario and print every report.
pub fn demo(name: &str) -> Result<()> {
    let hospital = sample_hospital(name)?;

    print::header("doctors");
    for line in hospital.doctor_report() {
        print::line(&line);
    }

    print::header("patients");
    for line in hospital.patient_report() {
        print::line(&line);
    }

    print::header("appointments");
    for line in hospital.appointment_report() {
        print::line(&line);
    }

    for doctor in hospital.doctors() {
        print::header(&format!(
            "schedule: {} ({})",
            doctor.name, doctor.specialization
        ));
        for line in hospital.schedule_report(&doctor.id)? {
            print::line(&line);
        }
    }

    print::header("summary");
    print::line(&hospital.summary());

    Ok(())
}
