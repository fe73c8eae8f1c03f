use crate::graph::Literal;

/// Separator between label text and language tag in a key.
pub const KEY_SEPARATOR: char = '_';

/// Label text plus language tag. A missing tag is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    pub value: String,
    pub language: String,
}

impl Label {
    pub fn new(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self { value: value.into(), language: language.into() }
    }

    /// Composite index key: `value + "_" + adjusted tag`.
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(self.value.len() + self.language.len() + 1);
        key.push_str(&self.value);
        key.push(KEY_SEPARATOR);
        key.push_str(&adjust_tag(&self.value, &self.language));
        key
    }
}

impl From<&Literal> for Label {
    fn from(lit: &Literal) -> Self {
        Self {
            value: lit.value.clone(),
            language: lit.language.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextCase {
    Upper,
    Lower,
    Mixed,
}

/// Casing of a text, judged on its cased characters only. Text with no
/// cased characters at all (digits, CJK, punctuation) counts as mixed.
fn text_case(text: &str) -> TextCase {
    let mut upper = false;
    let mut lower = false;
    for ch in text.chars() {
        if ch.is_uppercase() {
            upper = true;
        } else if ch.is_lowercase() {
            lower = true;
        }
        if upper && lower {
            return TextCase::Mixed;
        }
    }
    match (upper, lower) {
        (true, false) => TextCase::Upper,
        (false, true) => TextCase::Lower,
        _ => TextCase::Mixed,
    }
}

/// Follow the label's casing: all-caps text gets an upper-case tag,
/// all-lower text a lower-case tag, anything else keeps the tag as-is.
pub fn adjust_tag(text: &str, tag: &str) -> String {
    match text_case(text) {
        TextCase::Upper => tag.to_uppercase(),
        TextCase::Lower => tag.to_lowercase(),
        TextCase::Mixed => tag.to_string(),
    }
}
