//! Gate clause construction.

use crate::numerals::spell_ordinal_gate;
use gatecall_common::Language;

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn single_gate(language: Language, gate: &str) -> String {
    match language {
        Language::Spanish => format!("por la puerta {gate}"),
        Language::English => format!("through gate {gate}"),
        Language::Portuguese => format!("pelo portão {gate}"),
    }
}

fn gate_change(language: Language, old: &str, new: &str) -> String {
    match language {
        Language::Spanish => format!(
            "por la puerta {new}. Se informa el cambio de puerta: el embarque se realizará por la puerta {new} en lugar de la puerta {old}"
        ),
        Language::English => format!(
            "through gate {new}. Please note the gate change: boarding will take place at gate {new} instead of gate {old}"
        ),
        Language::Portuguese => format!(
            "pelo portão {new}. Informamos a alteração de portão: o embarque será realizado pelo portão {new} em vez do portão {old}"
        ),
    }
}

/// Build the clause naming the boarding gate.
///
/// - no gates: empty string
/// - only `gate`: "through gate twelve"
/// - `secondary_gate` set: the new gate plus a sentence announcing the change
///   from `gate`; when there is no original gate the new one is announced
///   as a plain single gate
///
/// The clause carries no terminal punctuation; the announcement script
/// closes the sentence.
pub fn build_gate_clause(language: Language, gate: &str, secondary_gate: &str) -> String {
    if gate.is_empty() && secondary_gate.is_empty() {
        return String::new();
    }

    let gate_words = spell_ordinal_gate(gate, language);

    if secondary_gate.is_empty() {
        return single_gate(language, &gate_words);
    }

    let secondary_words = if is_numeric(secondary_gate) {
        spell_ordinal_gate(secondary_gate, language)
    } else {
        secondary_gate.to_string()
    };

    if gate.is_empty() {
        single_gate(language, &secondary_words)
    } else {
        gate_change(language, &gate_words, &secondary_words)
    }
}

/// [`build_gate_clause`] prefixed with a space, ready to splice after a word.
///
/// Empty when there is no gate, so nothing stray ends up in the announcement.
pub fn gate_sentence(language: Language, gate: &str, secondary_gate: &str) -> String {
    let clause = build_gate_clause(language, gate, secondary_gate);
    if clause.is_empty() {
        clause
    } else {
        format!(" {clause}")
    }
}
