use crate::document::{DocIdAllocator, Document};
use crate::error::Error;
use crate::preprocessor::Preprocessor;
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One record as supplied by a corpus source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(alias = "body")]
    pub text: String,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl RawDocument {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }
}

/// What a search hit shows besides its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocMeta {
    pub external_id: Option<String>,
    pub title: Option<String>,
    pub text: String,
    pub meta: Option<serde_json::Value>,
}

/// Normalized documents of one corpus load plus their metadata.
#[derive(Debug, Default)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub docs: HashMap<DocId, DocMeta>,
    /// Records dropped by the language gate.
    pub skipped: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// One exported document: its terms plus the record's metadata.
#[derive(Debug, Serialize)]
pub struct PreprocessedDocument<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub external_id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub meta: Option<&'a serde_json::Value>,
}

/// Serializable view of a whole [`Corpus`].
#[derive(Debug, Serialize)]
pub struct PreprocessedCorpus<'a> {
    pub documents: Vec<PreprocessedDocument<'a>>,
    pub skipped: usize,
}

impl Corpus {
    pub fn preprocessed(&self) -> PreprocessedCorpus<'_> {
        let documents = self
            .documents
            .iter()
            .map(|document| {
                let meta = self.docs.get(&document.id());
                PreprocessedDocument {
                    document,
                    external_id: meta.and_then(|m| m.external_id.as_deref()),
                    title: meta.and_then(|m| m.title.as_deref()),
                    meta: meta.and_then(|m| m.meta.as_ref()),
                }
            })
            .collect();
        PreprocessedCorpus { documents, skipped: self.skipped }
    }
}

/// Normalize every record and assign ids.
///
/// Ids are drawn only for records that pass preprocessing. A language
/// mismatch skips the record; any other error aborts the load.
pub fn ingest<I>(records: I, preprocessor: &Preprocessor, ids: &DocIdAllocator) -> Result<Corpus, Error>
where
    I: IntoIterator<Item = RawDocument>,
{
    let mut corpus = Corpus::default();
    for record in records {
        let terms = match preprocessor.get_processed_tokens(&record.text) {
            Ok(terms) => terms,
            Err(e) if e.is_skippable() => {
                tracing::debug!(id = ?record.id, error = %e, "skipping document");
                corpus.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        let doc_id = ids.next_id();
        corpus.documents.push(Document::new(doc_id, terms));
        corpus.docs.insert(
            doc_id,
            DocMeta { external_id: record.id, title: record.title, text: record.text, meta: record.meta },
        );
    }
    if corpus.skipped > 0 {
        tracing::warn!(skipped = corpus.skipped, kept = corpus.len(), "documents skipped by language gate");
    }
    Ok(corpus)
}
