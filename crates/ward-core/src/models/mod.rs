//! Domain models for the ward registry.

mod appointment;
mod doctor;
mod patient;
mod person;

pub use appointment::*;
pub use doctor::*;
pub use patient::*;
pub use person::*;
