use crate::DocId;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

/// Id of the transient document a query is turned into. Never issued by
/// [`DocIdAllocator`] in practice and never part of a corpus.
pub const QUERY_DOC_ID: DocId = DocId::MAX;

/// An indexed unit of text: id, normalized terms and their counts.
///
/// The bag of words is derived once at construction; documents are
/// immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    #[serde(rename = "doc_id")]
    id: DocId,
    terms: Vec<String>,
    #[serde(skip)]
    bag_of_words: HashMap<String, u32>,
}

impl Document {
    pub fn new(id: DocId, terms: Vec<String>) -> Self {
        let mut bag_of_words: HashMap<String, u32> = HashMap::new();
        for term in &terms {
            *bag_of_words.entry(term.clone()).or_insert(0) += 1;
        }
        Self { id, terms, bag_of_words }
    }

    pub fn id(&self) -> DocId {
        self.id
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Term -> occurrence count. Counts sum to `terms().len()`.
    pub fn bag_of_words(&self) -> &HashMap<String, u32> {
        &self.bag_of_words
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Issues unique, monotonically increasing document ids for one corpus load.
#[derive(Debug, Default)]
pub struct DocIdAllocator {
    next: AtomicU32,
}

impl DocIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> DocId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn bag_of_words_counts_terms() {
        let doc = Document::new(7, terms("fish sea fish fish"));
        assert_eq!(doc.id(), 7);
        assert_eq!(doc.bag_of_words()["fish"], 3);
        assert_eq!(doc.bag_of_words()["sea"], 1);
        let total: u32 = doc.bag_of_words().values().sum();
        assert_eq!(total as usize, doc.len());
    }

    #[test]
    fn empty_document() {
        let doc = Document::new(0, Vec::new());
        assert!(doc.is_empty());
        assert!(doc.bag_of_words().is_empty());
    }

    #[test]
    fn allocator_is_monotonic() {
        let ids = DocIdAllocator::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn allocators_are_independent() {
        let a = DocIdAllocator::new();
        let b = DocIdAllocator::new();
        a.next_id();
        assert_eq!(b.next_id(), 0);
    }
}
