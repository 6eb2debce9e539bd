//! Rotor cipher machine simulator.
//!
//! Simulates the classic electromechanical rotor machines: each
//! keystroke steps a bank of wired rotors, then sends a signal through
//! the plugboard, the rotors right to left, a reflector, and back out
//! again. Encryption and decryption are the same operation on the same
//! settings. Machine geometry — alphabet, rotor wirings, notch
//! positions, slot and pawl counts — is configuration data, never code.
//!
//! # Architecture
//!
//! ```text
//! Alphabet      (symbol <-> dense index mapping)
//!      |
//! Permutation   (cycle notation -> forward/inverse lookup tables)
//!      |
//! Rotor         (wiring + rotational setting; moving / fixed / reflector)
//!      |
//! Machine       (slot bank + pawls + plugboard: stepping and signal path)
//!      |
//! Session       (setting lines, message lines, five-symbol grouping)
//! ```
//!
//! [`MachineConfig`] parses the machine-description text format into the
//! [`RotorCatalog`] a [`Machine`] draws from; a [`Session`] drives one
//! machine through an input of setting and message records.
//!
//! # Examples
//!
//! Driving a machine directly:
//!
//! ```
//! use enigma::{Alphabet, Machine, Permutation, Rotor, RotorCatalog};
//!
//! let upper = Alphabet::upper();
//! let reflector_b =
//!     Permutation::new("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)", &upper)
//!         .unwrap();
//! let rotor_i =
//!     Permutation::new("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", &upper).unwrap();
//!
//! let mut catalog = RotorCatalog::new();
//! catalog.add(Rotor::reflector("B", reflector_b).unwrap()).unwrap();
//! catalog.add(Rotor::moving("I", rotor_i, "Q").unwrap()).unwrap();
//!
//! let mut machine = Machine::new(upper, 2, 1).unwrap();
//! machine.insert_rotors(&catalog, &["B", "I"]).unwrap();
//! machine.set_rotors("A").unwrap();
//! assert_eq!(machine.convert_message("HELLO").unwrap(), "ERKNK");
//!
//! // Same settings decrypt what they encrypted.
//! machine.set_rotors("A").unwrap();
//! assert_eq!(machine.convert_message("ERKNK").unwrap(), "HELLO");
//! ```
//!
//! Full text-to-text processing:
//!
//! ```
//! use enigma::{MachineConfig, Session};
//!
//! let config = MachineConfig::parse("\
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! I    MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! II   ME (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
//! III  MV (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
//! Beta N  (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B    R  (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)").unwrap();
//!
//! let mut session = Session::new(config).unwrap();
//! let output = session.process("* B Beta I II III AAAA\nhello world").unwrap();
//! assert_eq!(output, "ILBDA AMTAZ\n");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod catalog;
mod config;
mod machine;
mod permutation;
mod rotor;
mod session;

pub use alphabet::Alphabet;
pub use catalog::RotorCatalog;
pub use config::MachineConfig;
pub use error::EnigmaError;
pub use machine::Machine;
pub use permutation::{parse_cycles, Permutation};
pub use rotor::{Rotor, RotorKind};
pub use session::{group_message, Session};
