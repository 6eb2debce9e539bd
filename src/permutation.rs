//! Permutation: a bijection on alphabet indices built from disjoint cycles.
//!
//! Cycle notation is the classic wiring shorthand: `"(AELTPHQXRU) (BKNW)"`
//! means A maps to E, E to L, ..., U back to A, and so on per group. Any
//! symbol no cycle names is a fixed point. Text parsing is a separate,
//! pure step ([`parse_cycles`]); the permutation itself is two lookup
//! tables, forward and inverse, both built once at construction.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;

/// Parses cycle notation into its symbol groups.
///
/// Accepts whitespace-separated parenthesized groups. No symbol
/// validation happens here; this is text to structure only, so it can be
/// exercised without an alphabet in hand.
///
/// # Errors
/// Returns [`EnigmaError::MalformedCycles`] for unbalanced or nested
/// parentheses, an empty `()` group, whitespace inside a group, or any
/// stray character between groups.
///
/// # Examples
///
/// ```
/// use enigma::parse_cycles;
///
/// let cycles = parse_cycles("(AE) (BN) (S)").unwrap();
/// assert_eq!(cycles.len(), 3);
/// assert_eq!(cycles[0], vec!['A', 'E']);
/// assert!(parse_cycles("(AE").is_err());
/// ```
pub fn parse_cycles(notation: &str) -> Result<Vec<Vec<char>>, EnigmaError> {
    let mut cycles = Vec::new();
    let mut current: Option<Vec<char>> = None;
    for c in notation.chars() {
        match c {
            '(' => {
                if current.is_some() {
                    return Err(EnigmaError::MalformedCycles(
                        "'(' inside a cycle".to_string(),
                    ));
                }
                current = Some(Vec::new());
            }
            ')' => match current.take() {
                None => {
                    return Err(EnigmaError::MalformedCycles(
                        "')' without a matching '('".to_string(),
                    ));
                }
                Some(cycle) if cycle.is_empty() => {
                    return Err(EnigmaError::MalformedCycles(
                        "empty cycle '()'".to_string(),
                    ));
                }
                Some(cycle) => cycles.push(cycle),
            },
            c if c.is_whitespace() => {
                if current.is_some() {
                    return Err(EnigmaError::MalformedCycles(
                        "whitespace inside a cycle".to_string(),
                    ));
                }
            }
            c => match current.as_mut() {
                Some(cycle) => cycle.push(c),
                None => {
                    return Err(EnigmaError::MalformedCycles(format!(
                        "character '{}' outside parentheses",
                        c
                    )));
                }
            },
        }
    }
    if current.is_some() {
        return Err(EnigmaError::MalformedCycles(
            "unclosed '(' at end of input".to_string(),
        ));
    }
    Ok(cycles)
}

/// Bijection on `[0, size)` over a fixed [`Alphabet`].
///
/// Both directions are precomputed tables, so `permute` and `invert` are
/// single indexed loads. Out-of-range indices wrap modulo the alphabet
/// size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Alphabet,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Creates a permutation from cycle notation.
    ///
    /// # Parameters
    /// - `cycles`: cycle notation, e.g. `"(AE) (BN)"`; may be empty for
    ///   the identity.
    /// - `alphabet`: the symbol set the cycles draw from.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedCycles`] if the notation does not parse.
    /// - [`EnigmaError::InvalidSymbol`] if a cycle names a symbol outside
    ///   the alphabet.
    /// - [`EnigmaError::DuplicateSymbol`] if a symbol appears twice
    ///   across all cycles (the map would not be a bijection).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let upper = Alphabet::upper();
    /// let p = Permutation::new("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", &upper).unwrap();
    /// assert_eq!(p.permute_char('A').unwrap(), 'E');
    /// assert_eq!(p.permute_char('U').unwrap(), 'A');
    /// assert_eq!(p.invert_char('E').unwrap(), 'A');
    /// ```
    pub fn new(cycles: &str, alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let parsed = parse_cycles(cycles)?;
        Self::from_cycles(&parsed, alphabet)
    }

    /// Creates a permutation from already-parsed cycles.
    ///
    /// This is the structural constructor [`Permutation::new`] delegates
    /// to; callers that build cycles programmatically skip the notation
    /// round-trip. An empty cycle list yields the identity.
    ///
    /// # Errors
    /// Same symbol validation as [`Permutation::new`]:
    /// [`EnigmaError::InvalidSymbol`] and [`EnigmaError::DuplicateSymbol`].
    pub fn from_cycles(cycles: &[Vec<char>], alphabet: &Alphabet) -> Result<Self, EnigmaError> {
        let size = alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut seen = vec![false; size];
        for cycle in cycles {
            let mut indices = Vec::with_capacity(cycle.len());
            for &c in cycle {
                let i = alphabet.to_index(c)?;
                if seen[i] {
                    return Err(EnigmaError::DuplicateSymbol(c));
                }
                seen[i] = true;
                indices.push(i);
            }
            for (k, &i) in indices.iter().enumerate() {
                forward[i] = indices[(k + 1) % indices.len()];
            }
        }
        let mut inverse = vec![0usize; size];
        for (i, &f) in forward.iter().enumerate() {
            inverse[f] = i;
        }
        Ok(Permutation {
            alphabet: alphabet.clone(),
            forward,
            inverse,
        })
    }

    /// The identity permutation: every index a fixed point.
    pub fn identity(alphabet: &Alphabet) -> Self {
        let size = alphabet.size();
        Permutation {
            alphabet: alphabet.clone(),
            forward: (0..size).collect(),
            inverse: (0..size).collect(),
        }
    }

    /// Returns the alphabet size this permutation acts on.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Maps index `p` forward through the permutation, wrapping `p`
    /// modulo the size first.
    pub fn permute(&self, p: usize) -> usize {
        self.forward[p % self.size()]
    }

    /// Maps index `e` backward through the permutation (the inverse map),
    /// wrapping `e` modulo the size first.
    pub fn invert(&self, e: usize) -> usize {
        self.inverse[e % self.size()]
    }

    /// Maps symbol `c` forward through the permutation.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `c` is outside the alphabet.
    pub fn permute_char(&self, c: char) -> Result<char, EnigmaError> {
        let p = self.alphabet.to_index(c)?;
        Ok(self.alphabet.to_char(self.permute(p)))
    }

    /// Maps symbol `c` backward through the permutation.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `c` is outside the alphabet.
    pub fn invert_char(&self, c: char) -> Result<char, EnigmaError> {
        let e = self.alphabet.to_index(c)?;
        Ok(self.alphabet.to_char(self.invert(e)))
    }

    /// Returns true if no index maps to itself.
    ///
    /// Reflector wirings must satisfy this: a fixed contact would send a
    /// signal straight back out the contact it came in on.
    pub fn derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &f)| i != f)
    }

    /// Returns the alphabet this permutation acts over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
