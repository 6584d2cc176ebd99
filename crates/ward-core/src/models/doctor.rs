//! Doctor model.

use serde::{Deserialize, Serialize};

use super::person::{validate_age, InvalidAgeError, Person};

/// A doctor with a specialization and an append-only schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Unique doctor ID
    pub id: String,
    /// Doctor name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Area of specialization (e.g., "Cardiology")
    pub specialization: String,
    /// Appointment IDs in booking order. Grown only by the registry;
    /// the appointments themselves live in the hospital's map.
    pub(crate) schedule: Vec<String>,
}

impl Doctor {
    /// Create a new doctor. Fails if the age is not positive.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        specialization: impl Into<String>,
    ) -> Result<Self, InvalidAgeError> {
        let name = name.into();
        validate_age(&name, age)?;
        Ok(Self {
            id: id.into(),
            name,
            age,
            specialization: specialization.into(),
            schedule: Vec::new(),
        })
    }

    /// Appointment IDs on this doctor's schedule, in booking order.
    pub fn schedule(&self) -> &[String] {
        &self.schedule
    }

    /// Whether any appointment has been booked for this doctor.
    pub fn has_appointments(&self) -> bool {
        !self.schedule.is_empty()
    }
}

impl Person for Doctor {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn details(&self) -> String {
        format!(
            "Doctor[ID: {}, Name: {}, Specialization: {}]",
            self.id, self.name, self.specialization
        )
    }
}

impl std::fmt::Display for Doctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.details())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_doctor() {
        let doctor = Doctor::new("D1", "Dr. Grey", 45, "Cardiology").unwrap();
        assert_eq!(doctor.id, "D1");
        assert_eq!(doctor.age(), 45);
        assert!(!doctor.has_appointments());
    }

    #[test]
    fn test_invalid_age() {
        let err = Doctor::new("D1", "Dr. Grey", 0, "Cardiology").unwrap_err();
        assert_eq!(err.name, "Dr. Grey");
    }

    #[test]
    fn test_details_format() {
        let doctor = Doctor::new("D1", "Dr. Grey", 45, "Cardiology").unwrap();
        assert_eq!(
            doctor.details(),
            "Doctor[ID: D1, Name: Dr. Grey, Specialization: Cardiology]"
        );
        assert_eq!(doctor.to_string(), doctor.details());
    }
}
