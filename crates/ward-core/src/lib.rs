//! Ward Core Library
//!
//! In-memory hospital registry: doctors, patients, and appointments
//! owned by a single [`Hospital`] aggregate.
//!
//! # Architecture
//!
//! ```text
//!                ┌──────────────────────────────┐
//!                │           Hospital           │
//!                │  doctors / patients /        │
//!                │  appointments (id-keyed,     │
//!                │  insertion-ordered maps)     │
//!                └──────┬───────────┬───────────┘
//!                       │           │
//!            add / book │           │ reports, fuzzy search
//!                       ▼           ▼
//!                 mutation     Vec<String> lines,
//!                 + tracing    ScoredMatch hits
//!                       │
//!                       ▼
//!               HospitalExport (JSON / CSV)
//! ```
//!
//! # Core Principle
//!
//! **The registry is the single owner.** Doctors, patients, and
//! appointments reference each other by ID only; every cross-link is
//! resolved through the owning [`Hospital`].
//!
//! # Modules
//!
//! - [`models`]: Domain types (Doctor, Patient, Appointment, Person)
//! - [`registry`]: The Hospital aggregate, booking, reports, search
//! - [`export`]: JSON and CSV snapshot export

pub mod export;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use export::HospitalExport;
pub use models::{Appointment, Doctor, InvalidAgeError, Patient, Person};
pub use registry::{EntityKind, Hospital, RegistryError, RegistryResult, ScoredMatch};
