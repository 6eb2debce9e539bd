//! Frozen-vector regression tests for the machine core.
//!
//! Every expected string below is a frozen snapshot for the classic
//! rotor set wired in `standard_catalog`. Any change in these outputs
//! means the stepping rule or the signal path has regressed.
//!
//! Coverage:
//! - Thirteen-line message trip on `B Beta III IV I` at `AXLE`, rotor
//!   state carried across lines
//! - Reciprocity: resetting the rotors and feeding the ciphertext back
//! - Pawl range: notches outside it never engage
//! - Machines over a non-standard four-symbol alphabet

use enigma::{Alphabet, Machine, Permutation, Rotor, RotorCatalog};

// ═══════════════════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════════════════

const ROTOR_I: &str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";
const ROTOR_III: &str = "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)";
const ROTOR_IV: &str = "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)";
const BETA: &str = "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)";
const REFLECTOR_B: &str =
    "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";

/// Plaintext/ciphertext pairs for `B Beta III IV I` at `AXLE` with
/// plugboard `(HQ) (EX) (IP) (TR) (BY)`. The pairs are sequential: each
/// line starts from the rotor positions the previous line left behind.
const TRIP: [(&str, &str); 13] = [
    ("FROMHISSHOULDERHIAWATHA", "QVPQSOKOILPUBKJZPISFXDW"),
    ("TOOKTHECAMERAOFROSEWOOD", "BHCNSCXNUOAATZXSRCFYDGU"),
    ("MADEOFSLIDINGFOLDINGROSEWOOD", "FLPNXGXIXTYJUJRCAUGEUNCFMKUF"),
    ("NEATLYPUTITALLTOGETHER", "WJFGKCIIRGXODJGVCGPQOH"),
    ("INITSCASEITLAYCOMPACTLY", "ALWEBUHTZMOXIIVXUEFPRPR"),
    ("FOLDEDINTONEARLYNOTHING", "KCGVPFPYKIKITLBURVGTSFU"),
    ("BUTHEOPENEDOUTTHEHINGES", "SMBNKFRIIMPDOFJVTTUGRZM"),
    ("PUSHEDANDPULLEDTHEJOINTS", "UVCYLFDZPGIBXREWXUEBZQJO"),
    ("ANDHINGES", "YMHIPGRRE"),
    ("TILLITLOOKEDALLSQUARES", "GOHETUXDTWLCMMWAVNVJVH"),
    ("ANDOBLONGS", "OUFANTQACK"),
    ("LIKEACOMPLICATEDFIGURE", "KTOZZRDABQNNVPOIEFQAFS"),
    ("INTHESECONDBOOKOFEUCLID", "VVICVUDUEREYNPFFMNBJVGQ"),
];

/// Wires the rotors the trip draws from.
fn standard_catalog() -> RotorCatalog {
    let upper = Alphabet::upper();
    let perm = |cycles: &str| Permutation::new(cycles, &upper).unwrap();
    let mut catalog = RotorCatalog::new();
    catalog
        .add(Rotor::reflector("B", perm(REFLECTOR_B)).unwrap())
        .unwrap();
    catalog.add(Rotor::fixed("Beta", perm(BETA))).unwrap();
    catalog
        .add(Rotor::moving("I", perm(ROTOR_I), "Q").unwrap())
        .unwrap();
    catalog
        .add(Rotor::moving("III", perm(ROTOR_III), "V").unwrap())
        .unwrap();
    catalog
        .add(Rotor::moving("IV", perm(ROTOR_IV), "J").unwrap())
        .unwrap();
    catalog
}

/// The trip machine: `B Beta III IV I` at `AXLE` with the trip plugboard.
fn trip_machine() -> Machine {
    let upper = Alphabet::upper();
    let mut machine = Machine::new(upper.clone(), 5, 3).unwrap();
    machine
        .insert_rotors(&standard_catalog(), &["B", "Beta", "III", "IV", "I"])
        .unwrap();
    machine.set_rotors("AXLE").unwrap();
    machine.set_plugboard(Permutation::new("(HQ) (EX) (IP) (TR) (BY)", &upper).unwrap());
    machine
}

// ═══════════════════════════════════════════════════════════════════════
// Frozen message trip
// ═══════════════════════════════════════════════════════════════════════

/// Encrypts all thirteen lines on one machine. Because rotor positions
/// carry from line to line, a single mis-step shows up in every line
/// that follows it.
#[test]
fn trip_encrypts_every_line() {
    let mut machine = trip_machine();
    for (i, (plain, cipher)) in TRIP.iter().enumerate() {
        assert_eq!(
            machine.convert_message(plain).unwrap(),
            *cipher,
            "trip line {} diverged",
            i + 1
        );
    }
    assert_eq!(
        machine.positions(),
        "AXWT",
        "positions after 275 keystrokes from AXLE"
    );
}

/// Resetting the rotors and feeding the ciphertext back must reproduce
/// the plaintext: conversion is its own inverse.
#[test]
fn trip_decrypts_after_reset() {
    let mut machine = trip_machine();
    let ciphers: Vec<String> = TRIP
        .iter()
        .map(|(plain, _)| machine.convert_message(plain).unwrap())
        .collect();

    machine.set_rotors("AXLE").unwrap();
    for (i, cipher) in ciphers.iter().enumerate() {
        assert_eq!(
            machine.convert_message(cipher).unwrap(),
            TRIP[i].0,
            "trip line {} did not decrypt back",
            i + 1
        );
    }
}

/// Conversion state lives in the rotor positions and nowhere else, so a
/// second pass after `set_rotors` reproduces the first exactly.
#[test]
fn trip_repeats_after_reset() {
    let mut machine = trip_machine();
    let first: Vec<String> = TRIP
        .iter()
        .map(|(plain, _)| machine.convert_message(plain).unwrap())
        .collect();

    machine.set_rotors("AXLE").unwrap();
    let second: Vec<String> = TRIP
        .iter()
        .map(|(plain, _)| machine.convert_message(plain).unwrap())
        .collect();

    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════
// Pawl range
// ═══════════════════════════════════════════════════════════════════════

/// With a single pawl only the rightmost rotor ever steps.
#[test]
fn single_pawl_moves_only_the_fastest_rotor() {
    let mut machine = Machine::new(Alphabet::upper(), 5, 1).unwrap();
    machine
        .insert_rotors(&standard_catalog(), &["B", "Beta", "III", "IV", "I"])
        .unwrap();
    machine.set_rotors("AAAA").unwrap();
    for _ in 0..3 {
        machine.convert(0);
    }
    assert_eq!(machine.positions(), "AAAD");
}

/// A notch only engages when the slot to its left is inside the pawl
/// range. Here every moving rotor sits at its notch, yet one pawl still
/// moves exactly one rotor.
#[test]
fn notches_outside_pawl_range_do_not_carry() {
    let mut machine = Machine::new(Alphabet::upper(), 5, 1).unwrap();
    machine
        .insert_rotors(&standard_catalog(), &["B", "Beta", "III", "IV", "I"])
        .unwrap();
    machine.set_rotors("AVJQ").unwrap();
    machine.convert(0);
    assert_eq!(machine.positions(), "AVJR");
}

// ═══════════════════════════════════════════════════════════════════════
// Non-standard alphabet
// ═══════════════════════════════════════════════════════════════════════

/// A two-slot machine over the four-symbol alphabet `ABCD`.
fn four_symbol_machine() -> Machine {
    let abcd = Alphabet::new("ABCD").unwrap();
    let mut catalog = RotorCatalog::new();
    catalog
        .add(Rotor::reflector("R", Permutation::new("(AB) (CD)", &abcd).unwrap()).unwrap())
        .unwrap();
    catalog
        .add(Rotor::moving("M", Permutation::new("(ABCD)", &abcd).unwrap(), "A").unwrap())
        .unwrap();
    let mut machine = Machine::new(abcd, 2, 1).unwrap();
    machine.insert_rotors(&catalog, &["R", "M"]).unwrap();
    machine
}

/// Frozen vector over `ABCD`.
#[test]
fn four_symbol_frozen_vector() {
    let mut machine = four_symbol_machine();
    machine.set_rotors("A").unwrap();
    assert_eq!(machine.convert_message("DABA").unwrap(), "ADCD");
}

/// Reciprocity holds over any alphabet, not just the classic 26 letters.
#[test]
fn four_symbol_reciprocity() {
    let mut machine = four_symbol_machine();
    machine.set_rotors("B").unwrap();
    let cipher = machine.convert_message("CCCC").unwrap();
    assert_eq!(cipher, "BBBB");

    machine.set_rotors("B").unwrap();
    assert_eq!(machine.convert_message(&cipher).unwrap(), "CCCC");
}
