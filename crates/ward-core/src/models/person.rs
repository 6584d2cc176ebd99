//! The shared person capability.

use thiserror::Error;

/// Raised when a person is constructed with a non-positive age.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid age {age} for {name}: age must be a positive integer")]
pub struct InvalidAgeError {
    /// Name of the person being constructed
    pub name: String,
    /// The rejected age
    pub age: u32,
}

/// Common surface for every human entity in the registry.
///
/// `Doctor` and `Patient` both implement this; nothing is ever a bare
/// person.
pub trait Person {
    /// The person's name.
    fn name(&self) -> &str;

    /// The person's age in years.
    fn age(&self) -> u32;

    /// A one-line, human-readable description.
    fn details(&self) -> String;
}

/// Validate an age at construction time.
pub(crate) fn validate_age(name: &str, age: u32) -> Result<(), InvalidAgeError> {
    if age == 0 {
        return Err(InvalidAgeError {
            name: name.to_string(),
            age,
        });
    }
    Ok(())
}
