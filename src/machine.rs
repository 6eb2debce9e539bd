//! Machine: the assembled cipher machine.
//!
//! A machine owns a bank of rotor slots (reflector in slot 0, fastest
//! rotor in the last slot), a plugboard, and the pawl count that governs
//! stepping. Rotors are cloned out of a [`RotorCatalog`] at insertion,
//! positioned from a setting string, and then advanced implicitly by
//! each conversion.

use crate::alphabet::Alphabet;
use crate::catalog::RotorCatalog;
use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// A complete rotor cipher machine.
///
/// # Signal path
///
/// Each keystroke first advances the rotors, then traces:
///
/// ```text
/// keyboard ──> plugboard ──> slot n-1 ──> ... ──> slot 1 ──> reflector
///                                                                │
/// lamps    <── plugboard <── slot n-1 <── ... <── slot 1 <──────┘
/// ```
///
/// # Stepping
///
/// Only the rightmost `num_pawls` slots can ever move. The rightmost
/// slot steps on every keystroke. A moving rotor sitting at a notch
/// steps together with the rotor to its left when that neighbor's pawl
/// can engage, which produces the characteristic double step of the
/// middle rotor. All stepping decisions for one keystroke are taken
/// from the positions before any rotor has moved.
#[derive(Debug)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    num_pawls: usize,
    slots: Vec<Rotor>,
    plugboard: Permutation,
}

impl Machine {
    /// Creates a machine with empty rotor slots and an identity plugboard.
    ///
    /// # Parameters
    /// - `alphabet`: the symbol set all rotors must share.
    /// - `num_rotors`: number of slots, reflector included.
    /// - `num_pawls`: number of stepping pawls; the rightmost
    ///   `num_pawls` slots are the ones that can ever move.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidRotorCount`] if `num_rotors < 2`.
    /// - [`EnigmaError::InvalidPawlCount`] if `num_pawls >= num_rotors`.
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        num_pawls: usize,
    ) -> Result<Self, EnigmaError> {
        if num_rotors < 2 {
            return Err(EnigmaError::InvalidRotorCount(num_rotors));
        }
        if num_pawls >= num_rotors {
            return Err(EnigmaError::InvalidPawlCount {
                pawls: num_pawls,
                rotors: num_rotors,
            });
        }
        let plugboard = Permutation::identity(&alphabet);
        Ok(Machine {
            alphabet,
            num_rotors,
            num_pawls,
            slots: Vec::new(),
            plugboard,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls.
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// Returns the machine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Fills the slots with the catalog rotors named in `names`,
    /// `names[0]` being the reflector. Every inserted rotor starts at
    /// setting 0, whatever state previous runs left behind.
    ///
    /// All catalog rotors are expected to be wired over the machine's
    /// alphabet; the setup layer guarantees this by building both from
    /// one description.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedSetting`] if `names` does not name
    ///   exactly one rotor per slot.
    /// - [`EnigmaError::UnknownRotor`] if a name has no catalog entry.
    /// - [`EnigmaError::DuplicateRotor`] if a name is used twice.
    /// - [`EnigmaError::MisplacedReflector`] if slot 0 does not receive
    ///   a reflector, or a reflector lands in any other slot.
    pub fn insert_rotors(
        &mut self,
        catalog: &RotorCatalog,
        names: &[&str],
    ) -> Result<(), EnigmaError> {
        if names.len() != self.num_rotors {
            return Err(EnigmaError::MalformedSetting(format!(
                "{} rotors named, machine has {} slots",
                names.len(),
                self.num_rotors
            )));
        }
        let mut slots: Vec<Rotor> = Vec::with_capacity(self.num_rotors);
        for (slot, &name) in names.iter().enumerate() {
            let rotor = catalog
                .get(name)
                .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
            if slots.iter().any(|r| r.name().eq_ignore_ascii_case(name)) {
                return Err(EnigmaError::DuplicateRotor(name.to_string()));
            }
            if (slot == 0) != rotor.reflecting() {
                return Err(EnigmaError::MisplacedReflector {
                    name: rotor.name().to_string(),
                    slot,
                });
            }
            let mut rotor = rotor.clone();
            rotor.set(0);
            slots.push(rotor);
        }
        self.slots = slots;
        Ok(())
    }

    /// Positions the non-reflector slots from `setting`, whose first
    /// symbol goes to slot 1 (the leftmost rotor after the reflector).
    ///
    /// Validation is atomic: on error no slot has moved.
    ///
    /// # Errors
    /// - [`EnigmaError::BadSettingLength`] if `setting` does not hold
    ///   exactly `num_rotors - 1` symbols.
    /// - [`EnigmaError::InvalidSymbol`] if a symbol is outside the
    ///   alphabet.
    ///
    /// # Panics
    /// Panics if no rotors have been inserted.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), EnigmaError> {
        let symbols: Vec<char> = setting.chars().collect();
        if symbols.len() != self.num_rotors - 1 {
            return Err(EnigmaError::BadSettingLength {
                expected: self.num_rotors - 1,
                actual: symbols.len(),
            });
        }
        let mut positions = Vec::with_capacity(symbols.len());
        for &c in &symbols {
            positions.push(self.alphabet.to_index(c)?);
        }
        for (i, &posn) in positions.iter().enumerate() {
            self.slots[i + 1].set(posn);
        }
        Ok(())
    }

    /// Installs `plugboard` between the keyboard/lamps and the rotor
    /// train. Machines start with the identity plugboard.
    ///
    /// Reciprocity (encryption and decryption being the same operation)
    /// holds exactly when the plugboard swaps disjoint pairs; other
    /// permutations are accepted and simply make the machine
    /// non-reciprocal.
    pub fn set_plugboard(&mut self, plugboard: Permutation) {
        self.plugboard = plugboard;
    }

    /// Converts one index: advances the rotors, then traces the signal
    /// path. Out-of-range `c` wraps modulo the alphabet size.
    ///
    /// # Panics
    /// Panics if no rotors have been inserted.
    pub fn convert(&mut self, c: usize) -> usize {
        assert!(!self.slots.is_empty(), "no rotors inserted");
        self.advance_rotors();
        let mut c = self.plugboard.permute(c);
        for rotor in self.slots.iter().rev() {
            c = rotor.convert_forward(c);
        }
        for rotor in self.slots.iter().skip(1) {
            c = rotor.convert_backward(c);
        }
        self.plugboard.permute(c)
    }

    /// Converts a whole message, carrying rotor state across characters.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] on the first character
    /// outside the alphabet; rotors keep any steps taken before the
    /// offending character.
    ///
    /// # Panics
    /// Panics if no rotors have been inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Machine, Permutation, Rotor, RotorCatalog};
    ///
    /// let upper = Alphabet::upper();
    /// let reflector_b =
    ///     Permutation::new("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)", &upper)
    ///         .unwrap();
    /// let rotor_i =
    ///     Permutation::new("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", &upper).unwrap();
    ///
    /// let mut catalog = RotorCatalog::new();
    /// catalog.add(Rotor::reflector("B", reflector_b).unwrap()).unwrap();
    /// catalog.add(Rotor::moving("I", rotor_i, "Q").unwrap()).unwrap();
    ///
    /// let mut machine = Machine::new(upper, 2, 1).unwrap();
    /// machine.insert_rotors(&catalog, &["B", "I"]).unwrap();
    /// machine.set_rotors("A").unwrap();
    /// assert_eq!(machine.convert_message("HELLO").unwrap(), "ERKNK");
    ///
    /// machine.set_rotors("A").unwrap();
    /// assert_eq!(machine.convert_message("ERKNK").unwrap(), "HELLO");
    /// ```
    pub fn convert_message(&mut self, msg: &str) -> Result<String, EnigmaError> {
        let mut out = String::with_capacity(msg.len());
        for c in msg.chars() {
            let p = self.alphabet.to_index(c)?;
            let q = self.convert(p);
            out.push(self.alphabet.to_char(q));
        }
        Ok(out)
    }

    /// Returns the current settings of slots 1 onward as symbols, the
    /// reflector excluded. Empty before rotors are inserted.
    pub fn positions(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .map(|r| self.alphabet.to_char(r.setting()))
            .collect()
    }

    /// Computes and applies one keystroke's worth of stepping.
    ///
    /// Decisions come from a snapshot of the pre-keystroke positions:
    /// a slot steps if it sits at a notch with a pawl-capable neighbor
    /// to its left (which also carries that neighbor), and the rightmost
    /// slot steps unconditionally. Only slots inside the pawl range ever
    /// actually move, whatever the notch cascade marked.
    fn advance_rotors(&mut self) {
        let n = self.num_rotors;
        let first_pawled = n - self.num_pawls;
        let mut moves = vec![false; n];
        let mut carried_from_right = false;
        for i in (1..n).rev() {
            if self.slots[i].at_notch() && i - 1 >= first_pawled {
                moves[i] = true;
                carried_from_right = true;
            } else if carried_from_right {
                moves[i] = true;
                carried_from_right = false;
            }
        }
        moves[n - 1] = true;
        for i in first_pawled..n {
            if moves[i] {
                self.slots[i].advance();
            }
        }
    }
}
