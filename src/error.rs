//! Error types for the enigma library.

use std::fmt;

/// Errors produced by the enigma library.
///
/// Every kind describes a configuration or input problem detected eagerly,
/// before any state it could corrupt is built. There are no transient
/// failure modes: an error is fatal to the operation that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Symbol is not part of the working alphabet.
    InvalidSymbol(char),
    /// Symbol appears more than once in an alphabet or cycle set.
    DuplicateSymbol(char),
    /// Cycle notation could not be parsed.
    MalformedCycles(String),
    /// Requested rotor name has no catalog entry.
    UnknownRotor(String),
    /// Rotor name referenced, or registered, more than once.
    DuplicateRotor(String),
    /// Initial-position string does not cover exactly the non-reflector slots.
    BadSettingLength { expected: usize, actual: usize },
    /// Pawl count must stay below the rotor count.
    InvalidPawlCount { pawls: usize, rotors: usize },
    /// Machine was asked for fewer than two rotor slots.
    InvalidRotorCount(usize),
    /// Reflector wiring leaves at least one contact fixed.
    ReflectorNotDerangement(String),
    /// Reflector placed outside slot 0, or slot 0 given a non-reflector.
    MisplacedReflector { name: String, slot: usize },
    /// Machine description text could not be parsed.
    MalformedConfig(String),
    /// Setting line could not be parsed.
    MalformedSetting(String),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::InvalidSymbol(c) => {
                write!(f, "Character '{}' is not in the alphabet", c)
            }
            EnigmaError::DuplicateSymbol(c) => {
                write!(f, "Character '{}' appears more than once", c)
            }
            EnigmaError::MalformedCycles(detail) => {
                write!(f, "Malformed cycle notation: {}", detail)
            }
            EnigmaError::UnknownRotor(name) => {
                write!(f, "No rotor named '{}' in the catalog", name)
            }
            EnigmaError::DuplicateRotor(name) => {
                write!(f, "Rotor '{}' is used more than once", name)
            }
            EnigmaError::BadSettingLength { expected, actual } => {
                write!(f, "Setting has {} symbols, expected {}", actual, expected)
            }
            EnigmaError::InvalidPawlCount { pawls, rotors } => {
                write!(
                    f,
                    "Pawl count {} is not below the rotor count {}",
                    pawls, rotors
                )
            }
            EnigmaError::InvalidRotorCount(rotors) => {
                write!(f, "A machine needs at least 2 rotor slots, got {}", rotors)
            }
            EnigmaError::ReflectorNotDerangement(name) => {
                write!(f, "Reflector '{}' maps a contact to itself", name)
            }
            EnigmaError::MisplacedReflector { name, slot } => {
                write!(
                    f,
                    "Rotor '{}' cannot occupy slot {}: reflectors go in slot 0 only",
                    name, slot
                )
            }
            EnigmaError::MalformedConfig(detail) => {
                write!(f, "Malformed machine description: {}", detail)
            }
            EnigmaError::MalformedSetting(detail) => {
                write!(f, "Malformed setting line: {}", detail)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
