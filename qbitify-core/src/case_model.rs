use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Every spelling of a QBit name the template needs, derived from one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameForms {
    pub raw: String,
    pub kebab: String,
    pub pascal: String,
    pub camel: String,
    pub package: String,
}

impl NameForms {
    pub fn derive(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            kebab: to_kebab_case(raw),
            pascal: to_pascal_case(raw),
            camel: to_camel_case(raw),
            package: to_package_name(raw),
        }
    }
}

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_\s]+").unwrap())
}

fn title_word_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap())
}

fn lower_upper_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

/// `my-qbit`, `my_qbit` and `my qbit` all become `MyQbit`.
///
/// Only the first character of each word is touched, so `MyFeature` stays
/// `MyFeature` rather than collapsing to `Myfeature`.
pub fn to_pascal_case(name: &str) -> String {
    separator_runs()
        .split(name)
        .map(capitalize_first)
        .collect::<String>()
}

/// `my-qbit` or `MyQbit` become `myQbit`. Empty when there is nothing to case.
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// `MyQbit`, `myQbit` or `my_qbit` become `my-qbit`.
pub fn to_kebab_case(name: &str) -> String {
    let split_words = title_word_boundary().replace_all(name, "${1}-${2}");
    let split_humps = lower_upper_boundary().replace_all(&split_words, "${1}-${2}");
    split_humps
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

/// `my-qbit` becomes `myqbit`: safe as a single Java package segment.
pub fn to_package_name(name: &str) -> String {
    separator_runs().replace_all(name, "").to_lowercase()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
