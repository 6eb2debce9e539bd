//! RotorCatalog: the named pool of rotors a machine draws from.
//!
//! A catalog is loaded once (usually from a machine description) and
//! never mutated afterwards. Machines clone rotors out of it rather than
//! borrowing, so one catalog can feed any number of machines and per-run
//! stepping state never leaks back into the pool.

use crate::error::EnigmaError;
use crate::rotor::Rotor;

/// Collection of rotors addressed by case-insensitive name.
///
/// Holds a handful of entries at most, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RotorCatalog {
    rotors: Vec<Rotor>,
}

impl RotorCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        RotorCatalog { rotors: Vec::new() }
    }

    /// Registers a rotor.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateRotor`] if a rotor with the same
    /// name (case-insensitive) is already registered.
    pub fn add(&mut self, rotor: Rotor) -> Result<(), EnigmaError> {
        if self.get(rotor.name()).is_some() {
            return Err(EnigmaError::DuplicateRotor(rotor.name().to_string()));
        }
        self.rotors.push(rotor);
        Ok(())
    }

    /// Looks up a rotor by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Rotor> {
        self.rotors
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Returns the number of registered rotors.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Returns true if no rotors are registered.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Iterates the rotors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rotor> {
        self.rotors.iter()
    }
}
