//! Lookup tables for medication sentence parsing.
//!
//! Every table is a plain static slice. Orderings and regexes derived from
//! them are built once on first use and never mutated afterwards.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;

/// Raw frequency phrase → canonical frequency label, in declaration order.
/// Declaration order breaks ties between keys of equal length.
pub const FREQUENCY_PATTERNS: &[(&str, &str)] = &[
    ("once daily", "once daily"),
    ("once a day", "once daily"),
    ("daily", "once daily"),
    ("twice daily", "twice daily"),
    ("twice a day", "twice daily"),
    ("2 times a day", "twice daily"),
    ("2 times daily", "twice daily"),
    ("three times daily", "3 times daily"),
    ("three times a day", "3 times daily"),
    ("3 times a day", "3 times daily"),
    ("every morning", "every morning"),
    ("every night", "every night"),
    ("at bedtime", "at bedtime"),
    ("before bed", "at bedtime"),
    ("as needed", "as needed"),
    ("when needed", "as needed"),
    ("every 4 hours", "every 4 hours"),
    ("every 6 hours", "every 6 hours"),
    ("every 8 hours", "every 8 hours"),
    ("every 12 hours", "every 12 hours"),
];

/// Dosage units, tried in this order. The first unit that matches wins,
/// so "mg" must stay ahead of "g".
pub const DOSAGE_UNITS: &[&str] = &[
    "mg", "mcg", "g", "ml", "iu", "units",
    "tablet", "tablets", "capsule", "capsules",
    "pill", "pills", "puff", "puffs", "drop", "drops",
];

/// Administration notes, reported in this order regardless of where they
/// appear in the sentence.
pub const NOTE_PHRASES: &[&str] = &[
    "with food",
    "without food",
    "on empty stomach",
    "with water",
    "before meals",
    "after meals",
    "in the morning",
    "at night",
    "with breakfast",
    "with dinner",
];

/// Leading verbs and possessives that never belong to a medication name.
pub const ACTION_WORDS: &[&str] = &["add", "take", "remind me to take", "using", "use", "my"];

/// Frequency table sorted longest key first. `sort_by_key` is stable, so
/// equal-length keys keep their declaration order.
pub static FREQUENCY_BY_LENGTH: LazyLock<Vec<(&'static str, &'static str)>> =
    LazyLock::new(|| {
        let mut sorted = FREQUENCY_PATTERNS.to_vec();
        sorted.sort_by_key(|(phrase, _)| Reverse(phrase.len()));
        sorted
    });

/// One `number + optional space + unit + optional s` regex per entry of
/// [`DOSAGE_UNITS`], same order.
pub static UNIT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DOSAGE_UNITS
        .iter()
        .map(|unit| compile(&format!(r"(?i)\d+\.?\d*\s*{}s?", regex::escape(unit))))
        .collect()
});

/// Fallback for bare measurement units when no table unit matched.
pub static FALLBACK_DOSAGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\d+\.?\d*\s*(?:mg|mcg|g|ml|iu|units?)"));

/// Whole-word alternation over [`ACTION_WORDS`].
pub static ACTION_WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = ACTION_WORDS
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!(r"(?i)\b(?:{alternation})\b"))
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid intake regex pattern")
}
