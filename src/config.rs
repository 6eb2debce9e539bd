//! MachineConfig: the machine-description text format.
//!
//! A description is a whitespace-tokenized document: the alphabet, the
//! slot and pawl counts, then one entry per available rotor. Tokens may
//! be split across lines however the author likes; wiring cycles in
//! particular often continue onto a second line.
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! I   MQ  (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! II  ME  (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
//! Beta N  (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B   R   (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! ```
//!
//! A rotor entry is a name (no parentheses), a type token — `M` plus the
//! notch symbols, `N` for fixed, `R` for reflector — and then every
//! following token that opens with `(` as its wiring cycles. Parsing is
//! pure text-in, values-out; opening files is the caller's business.

use crate::alphabet::Alphabet;
use crate::catalog::RotorCatalog;
use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// A parsed machine description: alphabet, slot counts, and the rotor
/// catalog. One config can build any number of machines.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    alphabet: Alphabet,
    num_rotors: usize,
    num_pawls: usize,
    catalog: RotorCatalog,
}

impl MachineConfig {
    /// Parses a machine description.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedConfig`] for structural problems:
    ///   truncated input, counts that are not numbers, an unrecognized
    ///   rotor type token, a rotor name containing parentheses, or an
    ///   alphabet containing `(`, `)`, or `*`.
    /// - [`EnigmaError::InvalidRotorCount`] / [`EnigmaError::InvalidPawlCount`]
    ///   for count values no machine accepts.
    /// - Alphabet, wiring, and notch problems surface as the core
    ///   errors: [`EnigmaError::DuplicateSymbol`],
    ///   [`EnigmaError::MalformedCycles`], [`EnigmaError::InvalidSymbol`],
    ///   [`EnigmaError::ReflectorNotDerangement`],
    ///   [`EnigmaError::DuplicateRotor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let text = "\
    /// ABCDEFGHIJKLMNOPQRSTUVWXYZ
    /// 2 1
    /// B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
    /// I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";
    ///
    /// let config = MachineConfig::parse(text).unwrap();
    /// assert_eq!(config.num_rotors(), 2);
    /// assert_eq!(config.num_pawls(), 1);
    /// assert_eq!(config.catalog().len(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self, EnigmaError> {
        let mut tokens = text.split_whitespace().peekable();

        let symbols = tokens
            .next()
            .ok_or_else(|| EnigmaError::MalformedConfig("missing alphabet".to_string()))?;
        if symbols.contains(['(', ')', '*']) {
            return Err(EnigmaError::MalformedConfig(
                "alphabet may not contain '(', ')', or '*'".to_string(),
            ));
        }
        let alphabet = Alphabet::new(symbols)?;

        let num_rotors = count_token(tokens.next(), "rotor count")?;
        let num_pawls = count_token(tokens.next(), "pawl count")?;
        if num_rotors < 2 {
            return Err(EnigmaError::InvalidRotorCount(num_rotors));
        }
        if num_pawls >= num_rotors {
            return Err(EnigmaError::InvalidPawlCount {
                pawls: num_pawls,
                rotors: num_rotors,
            });
        }

        let mut catalog = RotorCatalog::new();
        while let Some(name) = tokens.next() {
            if name.contains(['(', ')']) {
                return Err(EnigmaError::MalformedConfig(format!(
                    "rotor name '{}' contains parentheses",
                    name
                )));
            }
            let kind = tokens.next().ok_or_else(|| {
                EnigmaError::MalformedConfig(format!("rotor '{}' is missing its type", name))
            })?;

            let mut cycles = String::new();
            while let Some(tok) = tokens.peek() {
                if !tok.starts_with('(') {
                    break;
                }
                cycles.push_str(tok);
                cycles.push(' ');
                tokens.next();
            }
            let permutation = Permutation::new(&cycles, &alphabet)?;

            let rotor = if let Some(notches) = kind.strip_prefix('M') {
                Rotor::moving(name, permutation, notches)?
            } else if kind == "N" {
                Rotor::fixed(name, permutation)
            } else if kind == "R" {
                Rotor::reflector(name, permutation)?
            } else {
                return Err(EnigmaError::MalformedConfig(format!(
                    "unrecognized rotor type '{}' for rotor '{}'",
                    kind, name
                )));
            };
            catalog.add(rotor)?;
        }

        Ok(MachineConfig {
            alphabet,
            num_rotors,
            num_pawls,
            catalog,
        })
    }

    /// Builds an empty-slotted machine for this description.
    ///
    /// # Errors
    /// The count checks of [`Machine::new`]; a parsed config always
    /// passes them.
    pub fn build_machine(&self) -> Result<Machine, EnigmaError> {
        Machine::new(self.alphabet.clone(), self.num_rotors, self.num_pawls)
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls.
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// Returns the rotor catalog.
    pub fn catalog(&self) -> &RotorCatalog {
        &self.catalog
    }
}

fn count_token(token: Option<&str>, what: &str) -> Result<usize, EnigmaError> {
    let token =
        token.ok_or_else(|| EnigmaError::MalformedConfig(format!("missing {}", what)))?;
    token.parse::<usize>().map_err(|_| {
        EnigmaError::MalformedConfig(format!("{} '{}' is not a number", what, token))
    })
}
