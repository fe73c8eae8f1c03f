use serde::Serialize;

use crate::index::LabelIndex;

/// One way of deriving a lookup key from a left-side key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrategy {
    Exact,
    Upper,
    Lower,
}

impl KeyStrategy {
    /// Lookup order. The first strategy that resolves wins.
    pub const FALLBACK_ORDER: [KeyStrategy; 3] = [Self::Exact, Self::Upper, Self::Lower];

    pub fn transform(&self, key: &str) -> String {
        match self {
            Self::Exact => key.to_string(),
            Self::Upper => key.to_uppercase(),
            Self::Lower => key.to_lowercase(),
        }
    }
}

impl std::fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
        }
    }
}

/// A resolved lookup on the other side's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHit<'a> {
    pub resource: &'a str,
    pub key: String,
    pub strategy: KeyStrategy,
}

/// Try each strategy in `strategies` in order and return the first hit.
pub fn lookup_with<'a>(
    key: &str,
    other: &'a LabelIndex,
    strategies: &[KeyStrategy],
) -> Option<KeyHit<'a>> {
    strategies.iter().find_map(|strategy| {
        let candidate = strategy.transform(key);
        other.get(&candidate).map(|resource| KeyHit {
            resource,
            key: candidate,
            strategy: *strategy,
        })
    })
}

/// Exact key, then upper-cased, then lower-cased. `None` means no match.
pub fn lookup<'a>(key: &str, other: &'a LabelIndex) -> Option<KeyHit<'a>> {
    lookup_with(key, other, &KeyStrategy::FALLBACK_ORDER)
}
