use std::collections::BTreeSet;

use serde::Serialize;

/// Well-known relation IRIs.
pub mod vocab {
    pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
}

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// A literal object. `language` is `None` for plain and datatyped literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Literal {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl Literal {
    pub fn simple(value: impl Into<String>) -> Self {
        Self { value: value.into(), language: None, datatype: None }
    }

    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }
}

/// Object position of a triple: another resource or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Object {
    Resource(String),
    Literal(Literal),
}

impl Object {
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            Self::Resource(_) => None,
        }
    }
}

/// Subjects and predicates are resource identifiers: IRIs, or `_:id` for
/// blank nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Object,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// In-memory triple set. Iteration order is the sorted triple order, so every
/// traversal of the same graph is identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns false if it was already present.
    pub fn add(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: Object,
    ) -> bool {
        self.triples.insert(Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        })
    }

    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    pub fn contains(&self, subject: &str, predicate: &str, object: &Object) -> bool {
        self.triples.contains(&Triple {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Every (subject, object) pair connected by `predicate`.
    pub fn subject_objects<'a>(
        &'a self,
        predicate: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Object)> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate)
            .map(|t| (t.subject.as_str(), &t.object))
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self { triples: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::vocab::SKOS_PREF_LABEL;

    #[test]
    fn add_is_set_semantics() {
        let mut g = Graph::new();
        assert!(g.add("http://a/1", SKOS_PREF_LABEL, Object::Literal(Literal::lang("cat", "en"))));
        assert!(!g.add("http://a/1", SKOS_PREF_LABEL, Object::Literal(Literal::lang("cat", "en"))));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn subject_objects_filters_by_predicate() {
        let mut g = Graph::new();
        g.add("http://a/1", SKOS_PREF_LABEL, Object::Literal(Literal::lang("cat", "en")));
        g.add("http://a/1", "http://x.org/broader", Object::Resource("http://a/2".into()));
        g.add("http://a/2", SKOS_PREF_LABEL, Object::Literal(Literal::simple("animal")));

        let pairs: Vec<_> = g.subject_objects(SKOS_PREF_LABEL).collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "http://a/1");
        assert_eq!(pairs[1].0, "http://a/2");
        assert_eq!(pairs[1].1.as_literal().unwrap().value, "animal");
    }

    #[test]
    fn contains_checks_all_positions() {
        let mut g = Graph::new();
        let obj = Object::Resource("http://b/1".into());
        g.add("http://a/1", "http://x.org/p", obj.clone());
        assert!(g.contains("http://a/1", "http://x.org/p", &obj));
        assert!(!g.contains("http://b/1", "http://x.org/p", &Object::Resource("http://a/1".into())));
    }

    #[test]
    fn contains_compares_literal_tags() {
        let mut g = Graph::new();
        g.add("http://a/1", SKOS_PREF_LABEL, Object::Literal(Literal::lang("chat", "fr")));
        assert!(g.contains("http://a/1", SKOS_PREF_LABEL, &Object::Literal(Literal::lang("chat", "fr"))));
        assert!(!g.contains("http://a/1", SKOS_PREF_LABEL, &Object::Literal(Literal::lang("chat", "en"))));
        assert!(!g.contains("http://a/1", SKOS_PREF_LABEL, &Object::Literal(Literal::simple("chat"))));
    }
}
