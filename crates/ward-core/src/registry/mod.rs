//! In-memory hospital registry.
//!
//! The [`Hospital`] is the single owner of every doctor, patient, and
//! appointment, keyed by ID in insertion-ordered maps. Cross-links
//! (an appointment's parties, a doctor's schedule) are stored as IDs
//! and resolved through the registry, so there are no ownership
//! cycles.

mod appointments;
mod doctors;
mod patients;
mod search;

pub use search::ScoredMatch;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Appointment, Doctor, InvalidAgeError, Patient};

/// The kind of entity an operation failed to find or insert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntityKind {
    Doctor,
    Patient,
    Appointment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Doctor => "doctor",
            EntityKind::Patient => "patient",
            EntityKind::Appointment => "appointment",
        };
        f.write_str(s)
    }
}

/// Registry errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: EntityKind, id: String },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("invalid datetime: {0}")]
    InvalidDateTime(String),

    #[error(transparent)]
    InvalidAge(#[from] InvalidAgeError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// The aggregate root owning all hospital entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    /// Hospital name
    pub name: String,
    pub(crate) doctors: IndexMap<String, Doctor>,
    pub(crate) patients: IndexMap<String, Patient>,
    pub(crate) appointments: IndexMap<String, Appointment>,
}

impl Hospital {
    /// Create an empty hospital.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doctors: IndexMap::new(),
            patients: IndexMap::new(),
            appointments: IndexMap::new(),
        }
    }

    /// One-line summary of the registry state.
    pub fn summary(&self) -> String {
        format!(
            "Hospital[{}]: {} doctors, {} patients, {} appointments.",
            self.name,
            self.doctors.len(),
            self.patients.len(),
            self.appointments.len()
        )
    }
}

impl fmt::Display for Hospital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
