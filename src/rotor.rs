//! Rotor: one wired wheel of the machine.
//!
//! A rotor is a named [`Permutation`] plus a rotational setting. Three
//! behaviors exist: moving rotors step under pawl control and carry
//! their left neighbor when a notch is under the pawl, fixed rotors are
//! set once per message and never move, and reflectors bounce the signal
//! back through the rotor train. The behavior split is a flat enum, not
//! a trait hierarchy: the variants differ in two predicates and one
//! validation rule, nothing that warrants dynamic dispatch.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;

/// How a rotor behaves in its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Steps under pawl control; the notch symbols are the settings at
    /// which it carries its left neighbor along.
    Moving { notches: Vec<char> },
    /// Positioned once per message, never steps.
    Fixed,
    /// Turns the signal around. Never steps, never holds a setting other
    /// than its construction default.
    Reflector,
}

/// One wheel: a named wiring with a rotational setting.
///
/// The setting shifts the wiring relative to the machine frame: a signal
/// entering at frame position `p` meets the wiring contact at
/// `p + setting`, and the wired output shifts back by the same amount.
/// Construction leaves the setting at 0.
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    setting: usize,
    kind: RotorKind,
}

impl Rotor {
    /// Creates a moving rotor.
    ///
    /// # Parameters
    /// - `name`: catalog identity, matched case-insensitively.
    /// - `permutation`: the wiring.
    /// - `notches`: the settings (as symbols) at which this rotor sits at
    ///   a notch; may be empty for a rotor that never carries.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if a notch symbol is not in
    /// the wiring's alphabet.
    pub fn moving(
        name: impl Into<String>,
        permutation: Permutation,
        notches: &str,
    ) -> Result<Self, EnigmaError> {
        let notches: Vec<char> = notches.chars().collect();
        for &c in &notches {
            if !permutation.alphabet().contains(c) {
                return Err(EnigmaError::InvalidSymbol(c));
            }
        }
        Ok(Rotor {
            name: name.into(),
            permutation,
            setting: 0,
            kind: RotorKind::Moving { notches },
        })
    }

    /// Creates a fixed (non-rotating) rotor.
    pub fn fixed(name: impl Into<String>, permutation: Permutation) -> Self {
        Rotor {
            name: name.into(),
            permutation,
            setting: 0,
            kind: RotorKind::Fixed,
        }
    }

    /// Creates a reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ReflectorNotDerangement`] if the wiring has
    /// a fixed point. A fixed contact would send the signal straight back
    /// out the path it came in on, which the machine cannot represent.
    pub fn reflector(
        name: impl Into<String>,
        permutation: Permutation,
    ) -> Result<Self, EnigmaError> {
        let name = name.into();
        if !permutation.derangement() {
            return Err(EnigmaError::ReflectorNotDerangement(name));
        }
        Ok(Rotor {
            name,
            permutation,
            setting: 0,
            kind: RotorKind::Reflector,
        })
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the behavior variant.
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// Returns true if this rotor can step.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true if this rotor is a reflector.
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// Returns true if a moving rotor's current setting is one of its
    /// notch symbols. Fixed rotors and reflectors are never at a notch.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => {
                let current = self.permutation.alphabet().to_char(self.setting);
                notches.contains(&current)
            }
            _ => false,
        }
    }

    /// Returns the current rotational setting.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Sets the rotational setting to `posn`, wrapping modulo the
    /// alphabet size.
    pub fn set(&mut self, posn: usize) {
        self.setting = posn % self.permutation.size();
    }

    /// Sets the rotational setting to the position of symbol `c`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `c` is outside the
    /// alphabet.
    pub fn set_symbol(&mut self, c: char) -> Result<(), EnigmaError> {
        self.setting = self.permutation.alphabet().to_index(c)?;
        Ok(())
    }

    /// Steps a moving rotor one position, wrapping after a full turn.
    /// No-op for fixed rotors and reflectors.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = (self.setting + 1) % self.permutation.size();
        }
    }

    /// Converts an index entering from the right (the keyboard side).
    ///
    /// The setting offsets the wiring against the machine frame: the
    /// signal enters the wiring at `p + setting`, and the wired result
    /// shifts back by `setting`, both modulo the alphabet size.
    pub fn convert_forward(&self, p: usize) -> usize {
        let n = self.permutation.size();
        let contact = (p % n + self.setting) % n;
        let wired = self.permutation.permute(contact);
        (wired + n - self.setting) % n
    }

    /// Converts an index entering from the left (the reflector side),
    /// through the inverse wiring with the same setting offset.
    ///
    /// The machine never routes a returning signal through slot 0, so
    /// this is not called on reflectors; doing so is a caller bug.
    pub fn convert_backward(&self, e: usize) -> usize {
        debug_assert!(
            !self.reflecting(),
            "a returning signal never re-enters the reflector"
        );
        let n = self.permutation.size();
        let contact = (e % n + self.setting) % n;
        let wired = self.permutation.invert(contact);
        (wired + n - self.setting) % n
    }

    /// Returns the wiring.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the alphabet this rotor operates over.
    pub fn alphabet(&self) -> &Alphabet {
        self.permutation.alphabet()
    }
}
