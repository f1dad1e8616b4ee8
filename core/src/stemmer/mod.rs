//! Stemmers reduce a single lowercase token to an approximate root form.
//!
//! The pipeline only depends on the [`Stemmer`] capability; which
//! implementation backs it is decided once, from configuration, when the
//! [`Preprocessor`](crate::Preprocessor) is built.

mod czech;
mod porter;
mod snowball;

pub use czech::CzechStemmer;
pub use porter::PorterStemmer;
pub use snowball::SnowballStemmer;

use crate::error::Error;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait Stemmer: Send + Sync {
    /// Stem one token. Must not fail on any input; tokens the algorithm
    /// does not understand come back unchanged.
    fn stem(&self, word: &str) -> String;
}

/// Stemmer selection as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Language default: Porter for English, the light stemmer for Czech.
    #[default]
    Default,
    Porter,
    Snowball,
    Czech,
    None,
}

impl fmt::Display for StemmerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StemmerKind::Default => "default",
            StemmerKind::Porter => "porter",
            StemmerKind::Snowball => "snowball",
            StemmerKind::Czech => "czech",
            StemmerKind::None => "none",
        };
        f.write_str(name)
    }
}

/// Resolve a configured stemmer for `language`. `Ok(None)` means stemming is off.
pub fn create(kind: StemmerKind, language: Language) -> Result<Option<Box<dyn Stemmer>>, Error> {
    let stemmer: Box<dyn Stemmer> = match (kind, language) {
        (StemmerKind::None, _) => return Ok(None),
        (StemmerKind::Default, Language::English) | (StemmerKind::Porter, Language::English) => {
            Box::new(PorterStemmer)
        }
        (StemmerKind::Default, Language::Czech) | (StemmerKind::Czech, Language::Czech) => {
            Box::new(CzechStemmer)
        }
        (StemmerKind::Snowball, Language::English) => Box::new(SnowballStemmer::english()),
        (stemmer, language) => return Err(Error::UnsupportedStemmer { stemmer, language }),
    };
    Ok(Some(stemmer))
}
