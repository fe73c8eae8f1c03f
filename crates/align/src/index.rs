use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::graph::Graph;
use crate::label::Label;

/// Diagnostics collected while building one side's index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Label statements seen on the preferred-label relation.
    pub labels_seen: usize,
    /// Objects on the relation that were not literals.
    pub skipped_non_literal: usize,
    /// Keys whose resource was replaced by a different one.
    pub overwritten: usize,
    /// Distinct keys in the finished index.
    pub keys: usize,
}

/// Label key → resource identifier. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    entries: BTreeMap<String, String>,
    stats: IndexStats,
}

impl LabelIndex {
    /// Scan `graph` for labels on `relation`.
    pub fn build(side: &str, graph: &Graph, relation: &str) -> Self {
        let mut index = Self::default();

        for (subject, object) in graph.subject_objects(relation) {
            index.stats.labels_seen += 1;
            let Some(lit) = object.as_literal() else {
                debug!(side, subject, "label object is not a literal, skipped");
                index.stats.skipped_non_literal += 1;
                continue;
            };
            index.insert(side, Label::from(lit).key(), subject);
        }

        index.stats.keys = index.entries.len();
        if index.stats.overwritten > 0 {
            warn!(
                side,
                overwritten = index.stats.overwritten,
                "label keys shared by more than one resource; last one kept"
            );
        }
        index
    }

    fn insert(&mut self, side: &str, key: String, resource: &str) {
        debug!(side, key = %key, resource, "index label");
        if let Some(previous) = self.entries.insert(key.clone(), resource.to_string()) {
            if previous != resource {
                debug!(side, key = %key, previous = %previous, resource, "label key overwritten");
                self.stats.overwritten += 1;
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Keys in sorted order with their resource.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries: BTreeMap<String, String> =
            iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        let stats = IndexStats { keys: entries.len(), ..IndexStats::default() };
        Self { entries, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::vocab::SKOS_PREF_LABEL;
    use crate::graph::{Literal, Object};

    fn label(g: &mut Graph, s: &str, value: &str, lang: &str) {
        g.add(s, SKOS_PREF_LABEL, Object::Literal(Literal::lang(value, lang)));
    }

    #[test]
    fn builds_adjusted_keys() {
        let mut g = Graph::new();
        label(&mut g, "http://a/1", "cat", "EN");
        label(&mut g, "http://a/1", "GATO", "es");
        label(&mut g, "http://a/2", "Dog", "en");

        let index = LabelIndex::build("left", &g, SKOS_PREF_LABEL);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("cat_en"), Some("http://a/1"));
        assert_eq!(index.get("GATO_ES"), Some("http://a/1"));
        assert_eq!(index.get("Dog_en"), Some("http://a/2"));
        assert_eq!(index.stats().labels_seen, 3);
        assert_eq!(index.stats().overwritten, 0);
    }

    #[test]
    fn ignores_other_relations() {
        let mut g = Graph::new();
        label(&mut g, "http://a/1", "cat", "en");
        g.add(
            "http://a/1",
            "http://www.w3.org/2004/02/skos/core#altLabel",
            Object::Literal(Literal::lang("kitty", "en")),
        );
        let index = LabelIndex::build("left", &g, SKOS_PREF_LABEL);
        assert_eq!(index.len(), 1);
        assert!(index.get("kitty_en").is_none());
    }

    #[test]
    fn duplicate_key_last_write_wins_and_is_counted() {
        let mut g = Graph::new();
        // Graph order is sorted by subject, so a/2 is inserted after a/1.
        label(&mut g, "http://a/1", "cat", "en");
        label(&mut g, "http://a/2", "cat", "EN");

        let index = LabelIndex::build("left", &g, SKOS_PREF_LABEL);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("cat_en"), Some("http://a/2"));
        assert_eq!(index.stats().overwritten, 1);
        assert_eq!(index.stats().keys, 1);
    }

    #[test]
    fn same_resource_rewrite_is_not_an_overwrite() {
        let mut g = Graph::new();
        label(&mut g, "http://a/1", "cat", "en");
        label(&mut g, "http://a/1", "cat", "EN");
        let index = LabelIndex::build("left", &g, SKOS_PREF_LABEL);
        assert_eq!(index.len(), 1);
        assert_eq!(index.stats().overwritten, 0);
    }

    #[test]
    fn non_literal_objects_are_skipped() {
        let mut g = Graph::new();
        g.add("http://a/1", SKOS_PREF_LABEL, Object::Resource("http://a/label/1".into()));
        label(&mut g, "http://a/2", "dog", "en");
        let index = LabelIndex::build("left", &g, SKOS_PREF_LABEL);
        assert_eq!(index.len(), 1);
        assert_eq!(index.stats().skipped_non_literal, 1);
        assert_eq!(index.stats().labels_seen, 2);
    }

    #[test]
    fn untagged_literal_indexed_with_empty_tag() {
        let mut g = Graph::new();
        g.add("http://a/1", SKOS_PREF_LABEL, Object::Literal(Literal::simple("cat")));
        let index = LabelIndex::build("left", &g, SKOS_PREF_LABEL);
        assert_eq!(index.get("cat_"), Some("http://a/1"));
    }
}
