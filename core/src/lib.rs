//! Text normalization, TF-IDF inverted index and cosine-similarity ranking
//! for small in-memory corpora.
//!
//! Raw text flows through a [`Preprocessor`] into [`Document`]s, the whole
//! corpus is indexed in one batch by [`InvertedIndex::build`], and a
//! [`SimilarityEngine`] ranks documents against free-text queries.

pub mod accents;
pub mod corpus;
pub mod document;
pub mod error;
pub mod index;
pub mod language;
pub mod preprocessor;
pub mod similarity;
pub mod source;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use corpus::{ingest, Corpus, DocMeta, RawDocument};
pub use document::{DocIdAllocator, Document};
pub use error::Error;
pub use index::{DocumentStats, InvertedIndex, TermStats};
pub use language::Language;
pub use preprocessor::{Preprocessor, PreprocessorConfig};
pub use similarity::SimilarityEngine;

pub type DocId = u32;
