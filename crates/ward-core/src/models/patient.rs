//! Patient model.

use serde::{Deserialize, Serialize};

use super::person::{validate_age, InvalidAgeError, Person};

/// A patient with an ailment description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique patient ID
    pub id: String,
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Presenting ailment (e.g., "Chest Pain")
    pub ailment: String,
}

impl Patient {
    /// Create a new patient. Fails if the age is not positive.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        ailment: impl Into<String>,
    ) -> Result<Self, InvalidAgeError> {
        let name = name.into();
        validate_age(&name, age)?;
        Ok(Self {
            id: id.into(),
            name,
            age,
            ailment: ailment.into(),
        })
    }
}

impl Person for Patient {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn details(&self) -> String {
        format!(
            "Patient[ID: {}, Name: {}, Ailment: {}]",
            self.id, self.name, self.ailment
        )
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.details())
    }
}
