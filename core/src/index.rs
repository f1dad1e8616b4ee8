use crate::document::Document;
use crate::error::Error;
use crate::DocId;
use std::collections::{HashMap, HashSet};

/// Statistics of one term inside one document.
#[derive(Debug, Clone)]
pub struct DocumentStats {
    /// Occurrences of the term in the document, at least 1.
    pub term_count: u32,
    /// `term_count / document length`
    pub term_frequency: f64,
    tfidf: Option<f64>,
}

impl DocumentStats {
    fn new(term_count: u32, document_len: usize) -> Self {
        Self {
            term_count,
            term_frequency: term_count as f64 / document_len as f64,
            tfidf: None,
        }
    }

    /// Weight assigned by the second build pass.
    pub fn tfidf(&self) -> Result<f64, Error> {
        self.tfidf.ok_or(Error::TfIdfNotComputed)
    }

    fn set_tfidf(&mut self, value: f64) {
        debug_assert!(self.tfidf.is_none(), "tf-idf assigned twice");
        self.tfidf = Some(value);
    }
}

/// Corpus-wide statistics of one term.
#[derive(Debug, Clone, Default)]
pub struct TermStats {
    /// Number of documents containing the term.
    pub document_frequency: u32,
    /// Total occurrences across the corpus.
    pub collection_frequency: u64,
    pub documents: HashMap<DocId, DocumentStats>,
}

/// Term -> statistics map with finalized tf-idf weights.
///
/// Only [`InvertedIndex::build`] creates a non-empty index, and it returns
/// once every weight is assigned, so callers never observe a partial index.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, TermStats>,
    total_documents: u32,
}

/// `ln(total_documents / document_frequency)`
pub fn idf(total_documents: u32, document_frequency: u32) -> f64 {
    (total_documents as f64 / document_frequency as f64).ln()
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-pass build. Pass one gathers counts per (term, document); pass
    /// two, once the corpus size is known, assigns
    /// `tfidf = ln(1 + tf) * ln(N / df)` to every entry.
    ///
    /// Document ids must be unique. A repeated id is logged and skipped;
    /// only its first occurrence is indexed and counted.
    pub fn build(documents: &[Document]) -> Self {
        let mut terms: HashMap<String, TermStats> = HashMap::new();
        let mut seen: HashSet<DocId> = HashSet::with_capacity(documents.len());
        for doc in documents {
            if !seen.insert(doc.id()) {
                tracing::warn!(doc_id = doc.id(), "duplicate document id, skipping");
                continue;
            }
            for (term, &count) in doc.bag_of_words() {
                let stats = terms.entry(term.clone()).or_default();
                stats.document_frequency += 1;
                stats.collection_frequency += u64::from(count);
                stats.documents.insert(doc.id(), DocumentStats::new(count, doc.len()));
            }
        }

        let total_documents = seen.len() as u32;
        for stats in terms.values_mut() {
            let term_idf = idf(total_documents, stats.document_frequency);
            for doc_stats in stats.documents.values_mut() {
                let tf = doc_stats.term_frequency.ln_1p();
                doc_stats.set_tfidf(tf * term_idf);
            }
        }

        tracing::info!(documents = total_documents, terms = terms.len(), "built inverted index");
        Self { terms, total_documents }
    }

    pub fn get(&self, term: &str) -> Option<&TermStats> {
        self.terms.get(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Corpus size at build time.
    pub fn total_documents(&self) -> u32 {
        self.total_documents
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TermStats)> {
        self.terms.iter()
    }

    /// Inverse document frequency of an indexed term.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.get(term).map(|s| idf(self.total_documents, s.document_frequency))
    }

    pub fn tfidf(&self, term: &str, doc_id: DocId) -> Result<f64, Error> {
        self.get(term)
            .and_then(|s| s.documents.get(&doc_id))
            .ok_or_else(|| Error::NotIndexed { term: term.to_string(), doc_id })?
            .tfidf()
    }
}
