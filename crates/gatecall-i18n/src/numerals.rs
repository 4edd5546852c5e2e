//! Spelling numbers out as words.
//!
//! Flight numbers are read digit by digit ("5240" is "five two four zero"),
//! gate numbers from 1 to 31 are read as whole words ("21" is "twenty-one").
//! Both tables are hand-written per language so irregular forms such as
//! Spanish "dieciséis" or Portuguese "quatorze" come out exactly right.

use gatecall_common::Language;

const DIGITS_ES: [&str; 10] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

const DIGITS_EN: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const DIGITS_PT: [&str; 10] = [
    "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

/// Highest gate number that has a spelled form.
pub const MAX_SPELLED_GATE: u32 = 31;

const GATES_ES: [&str; MAX_SPELLED_GATE as usize] = [
    "uno",
    "dos",
    "tres",
    "cuatro",
    "cinco",
    "seis",
    "siete",
    "ocho",
    "nueve",
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
    "treinta",
    "treinta y uno",
];

const GATES_EN: [&str; MAX_SPELLED_GATE as usize] = [
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "twenty-one",
    "twenty-two",
    "twenty-three",
    "twenty-four",
    "twenty-five",
    "twenty-six",
    "twenty-seven",
    "twenty-eight",
    "twenty-nine",
    "thirty",
    "thirty-one",
];

const GATES_PT: [&str; MAX_SPELLED_GATE as usize] = [
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
    "vinte",
    "vinte e um",
    "vinte e dois",
    "vinte e três",
    "vinte e quatro",
    "vinte e cinco",
    "vinte e seis",
    "vinte e sete",
    "vinte e oito",
    "vinte e nove",
    "trinta",
    "trinta e um",
];

const fn digit_table(language: Language) -> &'static [&'static str; 10] {
    match language {
        Language::Spanish => &DIGITS_ES,
        Language::English => &DIGITS_EN,
        Language::Portuguese => &DIGITS_PT,
    }
}

const fn gate_table(language: Language) -> &'static [&'static str; MAX_SPELLED_GATE as usize] {
    match language {
        Language::Spanish => &GATES_ES,
        Language::English => &GATES_EN,
        Language::Portuguese => &GATES_PT,
    }
}

/// Read every digit of `text` as a word, ignoring anything that is not a digit.
///
/// Returns `text` unchanged when it contains no digits at all, so codes like
/// `"FO"` pass through.
///
/// ```rust
/// use gatecall_common::Language;
/// use gatecall_i18n::spell_digits;
///
/// assert_eq!(spell_digits("5240", Language::Spanish), "cinco dos cuatro cero");
/// assert_eq!(spell_digits("FO 52", Language::English), "five two");
/// ```
pub fn spell_digits(text: &str, language: Language) -> String {
    let table = digit_table(language);
    let words: Vec<&str> = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| table[d as usize])
        .collect();

    if words.is_empty() {
        text.to_string()
    } else {
        words.join(" ")
    }
}

/// Leading run of ASCII digits, after any leading whitespace, as a number.
fn leading_number(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Spell a gate number between 1 and 31 as a word.
///
/// The number is read from the leading digits, so `"12A"` is spelled as
/// twelve. Text that does not start with a digit, such as `"A12"`, or a
/// number outside 1..=31 comes back unchanged.
pub fn spell_ordinal_gate(text: &str, language: Language) -> String {
    match leading_number(text) {
        Some(n @ 1..=MAX_SPELLED_GATE) => gate_table(language)[(n - 1) as usize].to_string(),
        _ => text.to_string(),
    }
}

/// [`spell_digits`] for a raw language code; unknown codes return `text` unchanged.
pub fn spell_digits_for_code(text: &str, code: &str) -> String {
    Language::from_code(code).map_or_else(|| text.to_string(), |lang| spell_digits(text, lang))
}

/// [`spell_ordinal_gate`] for a raw language code; unknown codes return `text` unchanged.
pub fn spell_ordinal_gate_for_code(text: &str, code: &str) -> String {
    Language::from_code(code)
        .map_or_else(|| text.to_string(), |lang| spell_ordinal_gate(text, lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_digits_per_language() {
        assert_eq!(spell_digits("5240", Language::Spanish), "cinco dos cuatro cero");
        assert_eq!(spell_digits("5240", Language::English), "five two four zero");
        assert_eq!(spell_digits("5240", Language::Portuguese), "cinco dois quatro zero");
    }

    #[test]
    fn test_spell_digits_strips_non_digits() {
        assert_eq!(spell_digits("FO-5 2", Language::English), "five two");
        assert_eq!(spell_digits("007", Language::Portuguese), "zero zero sete");
    }

    #[test]
    fn test_spell_digits_without_digits_passes_through() {
        assert_eq!(spell_digits("XXXX", Language::Spanish), "XXXX");
        assert_eq!(spell_digits("", Language::Spanish), "");
    }

    #[test]
    fn test_gate_compound_forms() {
        assert_eq!(spell_ordinal_gate("21", Language::Spanish), "veintiuno");
        assert_eq!(spell_ordinal_gate("31", Language::Spanish), "treinta y uno");
        assert_eq!(spell_ordinal_gate("16", Language::Spanish), "dieciséis");
        assert_eq!(spell_ordinal_gate("21", Language::English), "twenty-one");
        assert_eq!(spell_ordinal_gate("21", Language::Portuguese), "vinte e um");
        assert_eq!(spell_ordinal_gate("31", Language::Portuguese), "trinta e um");
        assert_eq!(spell_ordinal_gate("14", Language::Portuguese), "quatorze");
    }

    #[test]
    fn test_gate_bounds() {
        assert_eq!(spell_ordinal_gate("1", Language::English), "one");
        assert_eq!(spell_ordinal_gate("05", Language::English), "five");
        assert_eq!(spell_ordinal_gate("0", Language::English), "0");
        assert_eq!(spell_ordinal_gate("32", Language::English), "32");
        assert_eq!(spell_ordinal_gate("-3", Language::English), "-3");
    }

    #[test]
    fn test_gate_labels_pass_through() {
        assert_eq!(spell_ordinal_gate("A1", Language::English), "A1");
        assert_eq!(spell_ordinal_gate("A12", Language::Spanish), "A12");
        assert_eq!(spell_ordinal_gate("", Language::Portuguese), "");
        assert_eq!(spell_ordinal_gate("40B", Language::English), "40B");
    }

    #[test]
    fn test_gate_reads_leading_digits() {
        assert_eq!(spell_ordinal_gate("12A", Language::Spanish), "doce");
        assert_eq!(spell_ordinal_gate("12B", Language::English), "twelve");
        assert_eq!(spell_ordinal_gate("3.5", Language::Portuguese), "três");
        assert_eq!(spell_ordinal_gate(" 7", Language::English), "seven");
        assert_eq!(spell_ordinal_gate("99999999999", Language::English), "99999999999");
    }

    #[test]
    fn test_code_entry_points() {
        assert_eq!(spell_digits_for_code("42", "pt-BR"), "quatro dois");
        assert_eq!(spell_digits_for_code("42", "fr"), "42");
        assert_eq!(spell_ordinal_gate_for_code("3", "es"), "tres");
        assert_eq!(spell_ordinal_gate_for_code("3", "de"), "3");
    }

    #[test]
    fn test_tables_have_no_blank_entries() {
        for language in Language::ALL {
            assert!(digit_table(language).iter().all(|w| !w.is_empty()));
            assert!(gate_table(language).iter().all(|w| !w.is_empty()));
        }
    }
}
