//! Printing rendered announcements

use gatecall_common::{Language, RenderedOutput};

/// One block per enabled language, headed by the language name.
///
/// Languages that were not rendered are skipped; blocks are separated by a
/// blank line.
pub fn format_text(output: &RenderedOutput, languages: &[Language]) -> String {
    languages
        .iter()
        .map(|&language| format!("[{}]\n{}", language.display_name(), output.get(language)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// All three output slots as a JSON object
pub fn format_json(output: &RenderedOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> RenderedOutput {
        let mut output = RenderedOutput::default();
        output.set(Language::Spanish, "Hola".to_string());
        output.set(Language::Portuguese, "Olá".to_string());
        output
    }

    #[test]
    fn test_text_lists_requested_languages_in_order() {
        let text = format_text(&output(), &[Language::Portuguese, Language::Spanish]);
        assert_eq!(text, "[Português]\nOlá\n\n[Español]\nHola");
    }

    #[test]
    fn test_text_with_no_languages_is_empty() {
        assert_eq!(format_text(&output(), &[]), "");
    }

    #[test]
    fn test_json_has_every_slot() {
        let json = format_json(&output()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["es"], "Hola");
        assert_eq!(value["en"], "");
        assert_eq!(value["pt"], "Olá");
    }
}
