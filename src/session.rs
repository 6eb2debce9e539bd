//! Session: drives one machine through setting and message records.
//!
//! Input is line-oriented. A line whose first non-blank character is `*`
//! is a setting line: it picks rotors from the catalog, positions them,
//! and installs the plugboard. Any other non-blank line is a message:
//! whitespace is dropped, symbols are folded into the alphabet, and the
//! converted text comes back regrouped in five-symbol blocks. Blank
//! lines pass through untouched. Rotor state carries across message
//! lines and resets only on the next setting line.

use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::permutation::Permutation;

/// Regroups a converted message into space-separated blocks of five
/// symbols; the last block keeps whatever is left over.
///
/// # Examples
///
/// ```
/// use enigma::group_message;
///
/// assert_eq!(
///     group_message("QVPQSOKOILPUBKJZPISFXDW"),
///     "QVPQS OKOIL PUBKJ ZPISF XDW"
/// );
/// ```
pub fn group_message(msg: &str) -> String {
    let chars: Vec<char> = msg.chars().collect();
    chars
        .chunks(5)
        .map(|block| block.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}

/// One machine working through a sequence of records.
///
/// # Examples
///
/// ```
/// use enigma::{MachineConfig, Session};
///
/// let config = MachineConfig::parse("\
/// ABCDEFGHIJKLMNOPQRSTUVWXYZ
/// 2 1
/// B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
/// I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)").unwrap();
///
/// let mut session = Session::new(config).unwrap();
/// let output = session.process("* B I A\nHELLO\n* B I A\nERKNK").unwrap();
/// assert_eq!(output, "ERKNK\nHELLO\n");
/// ```
#[derive(Debug)]
pub struct Session {
    config: MachineConfig,
    machine: Machine,
    configured: bool,
}

impl Session {
    /// Creates a session for `config`. No conversion is possible until
    /// the first setting line arrives.
    ///
    /// # Errors
    /// The count checks of [`Machine::new`]; a parsed config always
    /// passes them.
    pub fn new(config: MachineConfig) -> Result<Self, EnigmaError> {
        let machine = config.build_machine()?;
        Ok(Session {
            config,
            machine,
            configured: false,
        })
    }

    /// Processes a whole input text, returning one output line (with
    /// trailing newline) per blank or message line. Setting lines
    /// produce no output.
    ///
    /// # Errors
    /// Stops at the first bad record: any setting-line or message error
    /// from [`Session::process_line`].
    pub fn process(&mut self, input: &str) -> Result<String, EnigmaError> {
        let mut out = String::new();
        for line in input.lines() {
            if let Some(converted) = self.process_line(line)? {
                out.push_str(&converted);
                out.push('\n');
            }
        }
        Ok(out)
    }

    /// Processes one record. Returns `None` for a setting line, the
    /// (possibly empty) output line otherwise.
    ///
    /// A failed setting line leaves the session unconfigured: message
    /// lines are rejected until a later setting line succeeds.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedSetting`] for a broken setting line or
    ///   a message line arriving before any setting line.
    /// - [`EnigmaError::InvalidSymbol`] for a message character that is
    ///   in the alphabet neither as itself nor upper-cased.
    /// - Rotor selection and positioning errors from the machine:
    ///   [`EnigmaError::UnknownRotor`], [`EnigmaError::DuplicateRotor`],
    ///   [`EnigmaError::MisplacedReflector`],
    ///   [`EnigmaError::BadSettingLength`],
    ///   [`EnigmaError::MalformedCycles`].
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>, EnigmaError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Some(String::new()));
        }
        if trimmed.starts_with('*') {
            self.configured = false;
            self.apply_setting_line(trimmed)?;
            self.configured = true;
            return Ok(None);
        }
        if !self.configured {
            return Err(EnigmaError::MalformedSetting(
                "message line before any setting line".to_string(),
            ));
        }
        self.convert_message_line(trimmed).map(Some)
    }

    /// Returns the machine, for inspection of positions and counts.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Applies `* NAME... SETTING [(PAIR)...]`: rotor choice, initial
    /// positions, plugboard. The plugboard is parsed before the machine
    /// is touched, so a bad cycle leaves the previous state intact.
    fn apply_setting_line(&mut self, line: &str) -> Result<(), EnigmaError> {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("*") {
            return Err(EnigmaError::MalformedSetting(
                "'*' must be the line's first token".to_string(),
            ));
        }
        let tokens: Vec<&str> = tokens.collect();

        let num_rotors = self.machine.num_rotors();
        if tokens.len() < num_rotors + 1 {
            return Err(EnigmaError::MalformedSetting(format!(
                "expected {} rotor names and a setting, found {} tokens",
                num_rotors,
                tokens.len()
            )));
        }
        let (names, rest) = tokens.split_at(num_rotors);
        for &name in names {
            if name.starts_with('(') {
                return Err(EnigmaError::MalformedSetting(format!(
                    "cycle '{}' where a rotor name was expected",
                    name
                )));
            }
        }
        let setting = rest[0];
        if setting.starts_with('(') {
            return Err(EnigmaError::MalformedSetting(format!(
                "cycle '{}' where the setting was expected",
                setting
            )));
        }
        let mut cycles = String::new();
        for &tok in &rest[1..] {
            if !tok.starts_with('(') {
                return Err(EnigmaError::MalformedSetting(format!(
                    "unexpected token '{}' after the setting",
                    tok
                )));
            }
            cycles.push_str(tok);
            cycles.push(' ');
        }
        let plugboard = Permutation::new(&cycles, self.config.alphabet())?;

        self.machine.insert_rotors(self.config.catalog(), names)?;
        self.machine.set_rotors(setting)?;
        self.machine.set_plugboard(plugboard);
        Ok(())
    }

    /// Strips whitespace, folds each character into the alphabet (as
    /// itself, else upper-cased), converts, and regroups the result.
    fn convert_message_line(&mut self, line: &str) -> Result<String, EnigmaError> {
        let alphabet = self.machine.alphabet();
        let mut cleaned = String::with_capacity(line.len());
        for c in line.chars() {
            if c.is_whitespace() {
                continue;
            }
            if alphabet.contains(c) {
                cleaned.push(c);
            } else {
                let upper = c.to_ascii_uppercase();
                if alphabet.contains(upper) {
                    cleaned.push(upper);
                } else {
                    return Err(EnigmaError::InvalidSymbol(c));
                }
            }
        }
        let converted = self.machine.convert_message(&cleaned)?;
        Ok(group_message(&converted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROTOR: &str = "\
ABCDEFGHIJKLMNOPQRSTUVWXYZ
2 1
B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
";

    fn session() -> Session {
        Session::new(MachineConfig::parse(TWO_ROTOR).unwrap()).unwrap()
    }

    #[test]
    fn test_group_message_blocks_of_five() {
        assert_eq!(group_message("ILBDAAMTAZ"), "ILBDA AMTAZ");
        assert_eq!(group_message("ERKNK"), "ERKNK");
        assert_eq!(group_message("ERKNKQ"), "ERKNK Q");
        assert_eq!(group_message(""), "");
    }

    #[test]
    fn test_setting_line_produces_no_output() {
        let mut s = session();
        assert_eq!(s.process_line("* B I A").unwrap(), None);
    }

    #[test]
    fn test_message_line_converts_and_groups() {
        let mut s = session();
        s.process_line("* B I A").unwrap();
        assert_eq!(s.process_line("HELLO").unwrap(), Some("ERKNK".to_string()));
    }

    #[test]
    fn test_rotor_state_carries_across_message_lines() {
        let mut s = session();
        let out = s.process("* B I A\nHE\nLLO").unwrap();
        assert_eq!(out, "ER\nKNK\n");
    }

    #[test]
    fn test_setting_line_resets_state() {
        let mut s = session();
        let out = s.process("* B I A\nHELLO\n* B I A\nHELLO").unwrap();
        assert_eq!(out, "ERKNK\nERKNK\n");
    }

    #[test]
    fn test_lowercase_folds_into_alphabet() {
        let mut s = session();
        let out = s.process("* B I A\nhello").unwrap();
        assert_eq!(out, "ERKNK\n");
    }

    #[test]
    fn test_inner_whitespace_stripped() {
        let mut s = session();
        let out = s.process("* B I A\nHE L\tLO").unwrap();
        assert_eq!(out, "ERKNK\n");
    }

    #[test]
    fn test_blank_lines_echoed() {
        let mut s = session();
        let out = s.process("\n* B I A\n\nHELLO").unwrap();
        assert_eq!(out, "\n\nERKNK\n");
    }

    #[test]
    fn test_message_before_setting_rejected() {
        let mut s = session();
        assert!(matches!(
            s.process("HELLO").unwrap_err(),
            EnigmaError::MalformedSetting(_)
        ));
    }

    #[test]
    fn test_foreign_symbol_rejected_as_original_character() {
        let mut s = session();
        s.process_line("* B I A").unwrap();
        assert_eq!(
            s.process_line("HI!").unwrap_err(),
            EnigmaError::InvalidSymbol('!')
        );
    }

    #[test]
    fn test_too_few_setting_tokens_rejected() {
        let mut s = session();
        assert!(matches!(
            s.process_line("* B I").unwrap_err(),
            EnigmaError::MalformedSetting(_)
        ));
    }

    #[test]
    fn test_star_must_stand_alone() {
        let mut s = session();
        assert!(matches!(
            s.process_line("*B I A").unwrap_err(),
            EnigmaError::MalformedSetting(_)
        ));
    }

    #[test]
    fn test_stray_token_after_setting_rejected() {
        let mut s = session();
        assert!(matches!(
            s.process_line("* B I A EXTRA").unwrap_err(),
            EnigmaError::MalformedSetting(_)
        ));
    }

    #[test]
    fn test_unknown_rotor_surfaces_from_machine() {
        let mut s = session();
        assert_eq!(
            s.process_line("* B IX A").unwrap_err(),
            EnigmaError::UnknownRotor("IX".to_string())
        );
    }

    #[test]
    fn test_failed_setting_line_deconfigures() {
        let mut s = session();
        s.process_line("* B I A").unwrap();
        assert!(s.process_line("* B IX A").is_err());
        assert!(matches!(
            s.process_line("HELLO").unwrap_err(),
            EnigmaError::MalformedSetting(_)
        ));
        s.process_line("* B I A").unwrap();
        assert_eq!(s.process_line("HELLO").unwrap(), Some("ERKNK".to_string()));
    }

    #[test]
    fn test_bad_plugboard_cycle_keeps_previous_configuration_state() {
        let mut s = session();
        s.process_line("* B I A").unwrap();
        assert!(matches!(
            s.process_line("* B I A (H").unwrap_err(),
            EnigmaError::MalformedCycles(_)
        ));
        assert_eq!(s.machine().positions(), "A", "machine must be untouched");
    }
}
