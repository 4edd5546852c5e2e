//! Build script for gatecall-i18n
//!
//! Validates the bundled Fluent locale files at compile time:
//! - every file parses
//! - every locale defines the same message keys
//! - every message uses the same variables in every locale
//! - every announcement template has a message

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

/// Messages every locale must provide.
const REQUIRED_MESSAGES: &[&str] = &[
    "destination-fallback",
    "pre-boarding",
    "boarding-start",
    "group-call",
    "final-call",
    "delay",
    "cancellation",
    "weather-hold",
];

type MessageParams = BTreeMap<String, BTreeSet<String>>;

/// Extract message keys and their parameters from a Fluent file
fn extract_messages_and_params(content: &str) -> Result<MessageParams, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    let mut messages = BTreeMap::new();

    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let key = message.id.name.to_string();
            let mut params = BTreeSet::new();

            if let Some(Pattern { elements }) = message.value {
                extract_params_from_pattern(&elements, &mut params);
            }

            for attribute in message.attributes {
                let Pattern { elements } = attribute.value;
                extract_params_from_pattern(&elements, &mut params);
            }

            messages.insert(key, params);
        }
    }

    Ok(messages)
}

fn extract_params_from_pattern<S>(elements: &[PatternElement<S>], params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            extract_params_from_expression(expression, params);
        }
    }
}

fn extract_params_from_expression<S>(expression: &Expression<S>, params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    match expression {
        Expression::Select { selector, variants } => {
            extract_params_from_inline_expression(selector, params);
            for variant in variants {
                let Pattern { elements } = &variant.value;
                extract_params_from_pattern(elements, params);
            }
        }
        Expression::Inline(inline) => {
            extract_params_from_inline_expression(inline, params);
        }
    }
}

fn extract_params_from_inline_expression<S>(
    expression: &InlineExpression<S>,
    params: &mut BTreeSet<String>,
) where
    S: AsRef<str> + ToString,
{
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for arg in &arguments.positional {
                extract_params_from_inline_expression(arg, params);
            }
            for arg in &arguments.named {
                extract_params_from_inline_expression(&arg.value, params);
            }
        }
        InlineExpression::Placeable { expression } => {
            extract_params_from_expression(expression, params);
        }
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}

fn validate_locale_file(path: &Path) -> Result<MessageParams, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    extract_messages_and_params(&content)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Find `locales/<lang>/main.ftl` next to this crate's manifest
fn find_locale_files() -> Result<BTreeMap<String, PathBuf>, String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");

    if !locales_dir.exists() {
        return Err(format!("Locales directory not found: {}", locales_dir.display()));
    }

    let mut locale_files = BTreeMap::new();

    for entry in
        fs::read_dir(&locales_dir).map_err(|e| format!("Failed to read locales directory: {e}"))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {e}"))?;
        let path = entry.path();

        if path.is_dir() {
            let locale_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?;

            let main_ftl = path.join("main.ftl");
            if main_ftl.exists() {
                locale_files.insert(locale_name.to_string(), main_ftl);
            }
        }
    }

    if locale_files.is_empty() {
        return Err("No locale files found".to_string());
    }

    Ok(locale_files)
}

fn validate_locales() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");

    let locale_files = find_locale_files()?;

    let mut all_messages: BTreeMap<String, MessageParams> = BTreeMap::new();
    let mut errors = Vec::new();

    for (locale, path) in &locale_files {
        println!("cargo:rerun-if-changed={}", path.display());
        match validate_locale_file(path) {
            Ok(messages) => {
                all_messages.insert(locale.clone(), messages);
            }
            Err(e) => errors.push(format!("{locale}: {e}")),
        }
    }

    if !errors.is_empty() {
        return Err(format!("Validation errors:\n{}", errors.join("\n")));
    }

    for (locale, messages) in &all_messages {
        for required in REQUIRED_MESSAGES {
            if !messages.contains_key(*required) {
                errors.push(format!("{locale}: Missing message key '{required}'"));
            }
        }
    }

    if let Some((reference_locale, reference_messages)) = all_messages.iter().next() {
        for (locale, messages) in all_messages.iter().skip(1) {
            for key in reference_messages.keys() {
                if !messages.contains_key(key) {
                    errors.push(format!("{locale}: Missing message key '{key}'"));
                }
            }

            for key in messages.keys() {
                if !reference_messages.contains_key(key) {
                    errors.push(format!(
                        "{locale}: Extra message key '{key}' not present in {reference_locale}"
                    ));
                }
            }

            for (key, ref_params) in reference_messages {
                if let Some(locale_params) = messages.get(key) {
                    if ref_params != locale_params {
                        errors.push(format!(
                            "{locale}: Parameter mismatch for '{key}'. Expected: {ref_params:?}, Found: {locale_params:?}"
                        ));
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(format!("Consistency errors:\n{}", errors.join("\n")));
    }

    Ok(())
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
