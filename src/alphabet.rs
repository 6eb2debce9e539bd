//! Alphabet: the ordered symbol set a machine operates over.
//!
//! Every index flowing through permutations, rotors, and the machine is a
//! position in one of these. Distinctness is validated once at
//! construction; afterwards both lookup directions are table-driven.

use std::collections::HashMap;

use crate::error::EnigmaError;

/// Ordered set of distinct symbols with dense `usize` indexing.
///
/// Index `i` maps to the `i`-th character of the construction string.
/// `to_char` is a vector index, `to_index` a precomputed hash lookup;
/// neither scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    indices: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates an alphabet from the characters of `symbols`, in order.
    ///
    /// # Parameters
    /// - `symbols`: the symbol sequence; index `i` maps to its `i`-th character.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateSymbol`] if any character repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let digits = Alphabet::new("0123456789").unwrap();
    /// assert_eq!(digits.size(), 10);
    /// assert_eq!(digits.to_index('7').unwrap(), 7);
    /// assert!(Alphabet::new("ABBA").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, EnigmaError> {
        let chars: Vec<char> = symbols.chars().collect();
        let mut indices = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if indices.insert(c, i).is_some() {
                return Err(EnigmaError::DuplicateSymbol(c));
            }
        }
        Ok(Alphabet { chars, indices })
    }

    /// The standard upper-case alphabet `A` through `Z`.
    pub fn upper() -> Self {
        let chars: Vec<char> = ('A'..='Z').collect();
        let indices = chars.iter().copied().enumerate().map(|(i, c)| (c, i)).collect();
        Alphabet { chars, indices }
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if `c` is one of the alphabet's symbols.
    pub fn contains(&self, c: char) -> bool {
        self.indices.contains_key(&c)
    }

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= size()`. Indices produced by this library are
    /// always in range; passing an arbitrary index is a caller bug.
    pub fn to_char(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Returns the index of symbol `c`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `c` is not in the alphabet.
    pub fn to_index(&self, c: char) -> Result<usize, EnigmaError> {
        self.indices
            .get(&c)
            .copied()
            .ok_or(EnigmaError::InvalidSymbol(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::upper()
    }
}
