//! Cosine-similarity ranking over a finalized [`InvertedIndex`].
//!
//! Every indexed term owns one dimension (terms sorted, so dimensions are
//! stable across runs). Documents are projected onto it once, from their
//! tf-idf entries, when the engine is built; a query becomes a transient
//! document projected with `tf = raw count` and the same idf.

use crate::document::{Document, QUERY_DOC_ID};
use crate::error::Error;
use crate::index::InvertedIndex;
use crate::preprocessor::Preprocessor;
use std::collections::HashMap;

/// Sparse vector over the shared dimension space, sorted by dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
    norm: f64,
}

impl TermVector {
    fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(dim, _)| dim);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self { entries, norm }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            if a == b {
                sum += wa * wb;
                i += 1;
                j += 1;
            } else if a < b {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }

    /// Cosine similarity; 0 when either vector has zero norm.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        self.dot(other) / (self.norm * other.norm)
    }
}

pub struct SimilarityEngine {
    index: InvertedIndex,
    documents: Vec<Document>,
    preprocessor: Preprocessor,
    dimensions: HashMap<String, usize>,
    doc_vectors: Vec<TermVector>,
}

impl SimilarityEngine {
    /// Index `documents` and bind `preprocessor` for queries. The
    /// preprocessor must be the one that produced the documents' terms.
    pub fn build(documents: Vec<Document>, preprocessor: Preprocessor) -> Result<Self, Error> {
        let index = InvertedIndex::build(&documents);
        Self::new(index, documents, preprocessor)
    }

    /// Wrap an index built over exactly `documents`.
    pub fn new(index: InvertedIndex, documents: Vec<Document>, preprocessor: Preprocessor) -> Result<Self, Error> {
        let mut vocabulary: Vec<&String> = index.iter().map(|(term, _)| term).collect();
        vocabulary.sort();
        let dimensions: HashMap<String, usize> =
            vocabulary.into_iter().enumerate().map(|(dim, term)| (term.clone(), dim)).collect();

        let mut doc_vectors = Vec::with_capacity(documents.len());
        for doc in &documents {
            let mut entries = Vec::with_capacity(doc.bag_of_words().len());
            for term in doc.bag_of_words().keys() {
                let dim = *dimensions
                    .get(term)
                    .ok_or_else(|| Error::NotIndexed { term: term.clone(), doc_id: doc.id() })?;
                entries.push((dim, index.tfidf(term, doc.id())?));
            }
            doc_vectors.push(TermVector::from_entries(entries));
        }

        tracing::debug!(documents = documents.len(), dimensions = dimensions.len(), "similarity engine ready");
        Ok(Self { index, documents, preprocessor, dimensions, doc_vectors })
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    /// Query weights: `count * idf` per indexed term. Terms outside the
    /// vocabulary have no dimension and are dropped.
    pub fn query_vector(&self, query: &str) -> TermVector {
        let query_doc = Document::new(QUERY_DOC_ID, self.preprocessor.normalize(query));
        let entries = query_doc
            .bag_of_words()
            .iter()
            .filter_map(|(term, &count)| {
                let dim = *self.dimensions.get(term)?;
                let idf = self.index.idf(term)?;
                Some((dim, f64::from(count) * idf))
            })
            .collect();
        TermVector::from_entries(entries)
    }

    /// Score every document against `query`.
    pub fn scores(&self, query: &str) -> Vec<(f64, &Document)> {
        let query_vector = self.query_vector(query);
        self.documents
            .iter()
            .zip(&self.doc_vectors)
            .map(|(doc, vector)| (query_vector.cosine(vector), doc))
            .collect()
    }

    /// Every document, highest score first; equal scores are ordered by
    /// ascending document id.
    pub fn rank(&self, query: &str) -> Vec<(f64, &Document)> {
        let mut scored = self.scores(query);
        scored.sort_unstable_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.id().cmp(&b.1.id())));
        scored
    }

    /// The `n` best documents in [`rank`](Self::rank) order. Returns
    /// `min(n, corpus size)` hits.
    pub fn get_top_n(&self, query: &str, n: usize) -> Vec<(f64, &Document)> {
        if n == 0 || self.documents.is_empty() {
            return Vec::new();
        }
        let mut scored = self.rank(query);
        scored.truncate(n);
        scored
    }
}
