//! Free-text medication sentence parser.
//!
//! Four passes over a lower-cased copy of the sentence: notes, frequency,
//! dosage, then name. The name is whatever survives once action words and the
//! text attributed to the other three fields are removed.

use super::patterns::{
    ACTION_WORD_PATTERN, FALLBACK_DOSAGE, FREQUENCY_BY_LENGTH, NOTE_PHRASES, UNIT_PATTERNS,
};
use super::types::ParsedMedicationInput;
use crate::config::DEFAULT_FREQUENCY;

/// Parse a sentence such as "Add aspirin 500mg twice daily" into its
/// name, dosage, frequency and notes. Never fails; fields that could not be
/// found are `None` (frequency falls back to "as directed").
pub fn parse_medication_input(text: &str) -> ParsedMedicationInput {
    let lower = text.to_lowercase();

    let notes = extract_notes(&lower);
    let frequency = extract_frequency(&lower);
    let dosage = extract_dosage(&lower);
    let name = extract_medication_name(&lower, dosage.as_deref(), notes_found(&lower), frequency);

    tracing::debug!(
        name = name.as_deref(),
        dosage = dosage.as_deref(),
        frequency,
        notes = notes.as_deref(),
        "Parsed medication sentence"
    );

    ParsedMedicationInput {
        name,
        dosage,
        frequency: frequency.to_string(),
        notes,
    }
}

fn notes_found(text: &str) -> impl Iterator<Item = &'static str> + '_ {
    NOTE_PHRASES.iter().copied().filter(move |phrase| text.contains(phrase))
}

/// Collect every known note phrase present in the text, in table order.
pub fn extract_notes(text: &str) -> Option<String> {
    let found: Vec<&str> = notes_found(text).collect();
    if found.is_empty() {
        None
    } else {
        Some(found.join(", "))
    }
}

/// Longest frequency phrase contained in the text, mapped to its canonical
/// label. Checking "twice daily" before "daily" is what keeps the generic
/// phrase from shadowing the specific one.
pub fn extract_frequency(text: &str) -> &'static str {
    FREQUENCY_BY_LENGTH
        .iter()
        .find(|(phrase, _)| text.contains(phrase))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_FREQUENCY)
}

/// First number + unit found, trying units in table order, then the bare
/// measurement fallback. Returned as written (no spacing normalisation).
pub fn extract_dosage(text: &str) -> Option<String> {
    UNIT_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .or_else(|| FALLBACK_DOSAGE.find(text))
        .map(|m| m.as_str().trim().to_string())
}

/// Whatever is left once action words, dosage, notes and frequency are
/// stripped, cut down to at most three words.
fn extract_medication_name<'a>(
    text: &str,
    dosage: Option<&str>,
    notes: impl Iterator<Item = &'a str>,
    frequency: &str,
) -> Option<String> {
    let mut working = ACTION_WORD_PATTERN.replace_all(text, "").into_owned();

    if let Some(dosage) = dosage {
        working = working.replacen(dosage, "", 1);
    }

    for note in notes {
        working = working.replace(note, "");
    }

    // Only one raw phrase is stripped, so "daily" survives next to "twice daily".
    if let Some((phrase, _)) = FREQUENCY_BY_LENGTH
        .iter()
        .find(|(phrase, _)| working.contains(phrase))
    {
        working = working.replace(phrase, "");
    }

    if frequency != DEFAULT_FREQUENCY {
        working = working.replace(frequency, "");
    }

    let collapsed = working.split_whitespace().collect::<Vec<_>>().join(" ");
    let remainder = collapsed.trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?'));

    let words: Vec<&str> = remainder.split_whitespace().collect();
    match words.len() {
        0 => None,
        1 => Some(words[0].to_string()),
        2..=3 => Some(words[..2].join(" ")),
        _ => Some(words[..3].join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedMedicationInput {
        parse_medication_input(text)
    }

    #[test]
    fn parses_full_sentence() {
        let parsed = parse("Add aspirin 500mg twice daily");
        assert_eq!(parsed.name.as_deref(), Some("aspirin"));
        assert_eq!(parsed.dosage.as_deref(), Some("500mg"));
        assert_eq!(parsed.frequency, "twice daily");
        assert_eq!(parsed.notes, None);
    }

    #[test]
    fn longer_frequency_wins_over_contained_phrase() {
        assert_eq!(parse("twice daily").frequency, "twice daily");
        assert_eq!(parse("aspirin daily").frequency, "once daily");
        assert_eq!(parse("three times daily").frequency, "3 times daily");
    }

    #[test]
    fn dosage_kept_verbatim() {
        assert_eq!(parse("aspirin 500mg twice daily").dosage.as_deref(), Some("500mg"));
        assert_eq!(parse("aspirin 500 mg twice daily").dosage.as_deref(), Some("500 mg"));
        assert_eq!(parse("aspirin 2.5mg").dosage.as_deref(), Some("2.5mg"));
    }

    #[test]
    fn dosage_is_lower_cased() {
        let parsed = parse("Take vitamin D 1000 IU every morning");
        assert_eq!(parsed.dosage.as_deref(), Some("1000 iu"));
        assert_eq!(parsed.frequency, "every morning");
        assert_eq!(parsed.name.as_deref(), Some("vitamin d"));
    }

    #[test]
    fn notes_removed_from_name() {
        let parsed = parse("metformin 850mg three times a day with food");
        assert_eq!(parsed.name.as_deref(), Some("metformin"));
        assert_eq!(parsed.dosage.as_deref(), Some("850mg"));
        assert_eq!(parsed.frequency, "3 times daily");
        assert_eq!(parsed.notes.as_deref(), Some("with food"));
    }

    #[test]
    fn notes_follow_table_order() {
        let parsed = parse("take ibuprofen at night with water");
        assert_eq!(parsed.notes.as_deref(), Some("with water, at night"));
        assert_eq!(parsed.name.as_deref(), Some("ibuprofen"));
    }

    #[test]
    fn unknown_word_becomes_name() {
        let parsed = parse("xyz");
        assert_eq!(parsed.name.as_deref(), Some("xyz"));
        assert_eq!(parsed.dosage, None);
        assert_eq!(parsed.frequency, "as directed");
        assert_eq!(parsed.notes, None);
    }

    #[test]
    fn three_leftover_words_keep_first_two() {
        let parsed = parse("take blood pressure medication 10mg once daily");
        assert_eq!(parsed.name.as_deref(), Some("blood pressure"));
        assert_eq!(parsed.dosage.as_deref(), Some("10mg"));
        assert_eq!(parsed.frequency, "once daily");
    }

    #[test]
    fn more_than_three_leftover_words_keep_first_three() {
        let parsed = parse("Remind me to use my inhaler 2 puffs as needed");
        assert_eq!(parsed.dosage.as_deref(), Some("2 puffs"));
        assert_eq!(parsed.frequency, "as needed");
        assert_eq!(parsed.name.as_deref(), Some("remind me to"));
    }

    #[test]
    fn remind_me_to_take_is_stripped() {
        let parsed = parse("Remind me to take lisinopril 10mg daily");
        assert_eq!(parsed.name.as_deref(), Some("lisinopril"));
        assert_eq!(parsed.frequency, "once daily");
    }

    #[test]
    fn tablet_units_pluralise() {
        assert_eq!(parse("take 2 tablets tylenol").dosage.as_deref(), Some("2 tablets"));
        assert_eq!(parse("take 1 capsule omeprazole").dosage.as_deref(), Some("1 capsule"));
    }

    #[test]
    fn singular_unit_matched_by_fallback() {
        let parsed = parse("insulin 10 unit daily");
        assert_eq!(parsed.dosage.as_deref(), Some("10 unit"));
        assert_eq!(parsed.name.as_deref(), Some("insulin"));
        assert_eq!(parsed.frequency, "once daily");
    }

    #[test]
    fn table_unit_wins_over_earlier_fallback_match() {
        let parsed = parse("insulin 10 unit and 2 drops");
        assert_eq!(parsed.dosage.as_deref(), Some("2 drops"));
    }

    #[test]
    fn dosage_removed_from_name_once() {
        let parsed = parse("aspirin 500mg then 500mg");
        assert_eq!(parsed.dosage.as_deref(), Some("500mg"));
        assert_eq!(parsed.name.as_deref(), Some("aspirin then"));
    }

    #[test]
    fn mg_checked_before_tablets() {
        let parsed = parse("take 2 tablets of 500mg paracetamol");
        assert_eq!(parsed.dosage.as_deref(), Some("500mg"));
    }

    #[test]
    fn surrounding_punctuation_dropped_from_name() {
        let parsed = parse("Add aspirin 500mg twice daily!");
        assert_eq!(parsed.name.as_deref(), Some("aspirin"));
    }

    #[test]
    fn empty_and_punctuation_only_degrade_to_absence() {
        for input in ["", "   ", "?!.,", "add my"] {
            let parsed = parse(input);
            assert_eq!(parsed.name, None, "input {input:?}");
            assert_eq!(parsed.dosage, None);
            assert_eq!(parsed.frequency, "as directed");
            assert_eq!(parsed.notes, None);
        }
    }

    #[test]
    fn long_input_does_not_panic() {
        let input = "aspirin ".repeat(10_000);
        let parsed = parse(&input);
        assert_eq!(parsed.name.as_deref(), Some("aspirin aspirin aspirin"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = parse("Add metformin 850mg twice a day with breakfast");
        for _ in 0..5 {
            assert_eq!(parse("Add metformin 850mg twice a day with breakfast"), first);
        }
    }

    #[test]
    fn bedtime_phrases_share_label() {
        assert_eq!(parse("melatonin before bed").frequency, "at bedtime");
        assert_eq!(parse("melatonin at bedtime").frequency, "at bedtime");
        assert_eq!(parse("melatonin before bed").name.as_deref(), Some("melatonin"));
    }

    #[test]
    fn extract_notes_absent_when_none() {
        assert_eq!(extract_notes("aspirin 500mg"), None);
    }

    #[test]
    fn fallback_frequency_is_sentinel() {
        assert_eq!(extract_frequency("whenever"), "as directed");
    }
}
