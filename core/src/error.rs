use crate::language::Language;
use crate::stemmer::StemmerKind;
use crate::DocId;
use std::path::PathBuf;

/// Errors raised by normalization, indexing and ranking.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Detected language of a text differs from the preprocessor's language.
    /// Bulk ingestion skips the document instead of aborting.
    #[error("language mismatch: expected {expected}, detected {detected}")]
    LanguageMismatch { expected: Language, detected: String },
    /// Configuration names a language code with no pipeline support.
    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),
    /// Configuration asks for a stemmer that does not exist for the language.
    #[error("stemmer {stemmer} is not available for {language}")]
    UnsupportedStemmer { stemmer: StemmerKind, language: Language },
    /// A tf-idf weight was read before the second build pass assigned it.
    #[error("tf-idf weight read before the index was finalized")]
    TfIdfNotComputed,
    /// A document term has no entry in the index.
    #[error("term {term:?} has no statistics for document {doc_id}")]
    NotIndexed { term: String, doc_id: DocId },
    /// Custom stopword list could not be read.
    #[error("failed to read stopwords from {}: {source}", path.display())]
    Stopwords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for failures that only concern the current document.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Error::LanguageMismatch { .. })
    }
}
