//! Supported pipeline languages and the language gate used during ingestion.

use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Czech,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Czech => "cs",
        }
    }

    fn to_whatlang(self) -> whatlang::Lang {
        match self {
            Language::English => whatlang::Lang::Eng,
            Language::Czech => whatlang::Lang::Ces,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "cs" | "cz" | "ces" | "czech" => Ok(Language::Czech),
            _ => Err(Error::UnsupportedLanguage(code.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classifies the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// Returns a language code, or `None` when the text cannot be classified.
    fn detect(&self, text: &str) -> Option<String>;

    /// Fails with [`Error::LanguageMismatch`] unless `text` is in `expected`.
    fn check(&self, text: &str, expected: Language) -> Result<(), Error> {
        match self.detect(text) {
            Some(code) if code.parse::<Language>().ok() == Some(expected) => Ok(()),
            detected => Err(Error::LanguageMismatch {
                expected,
                detected: detected.unwrap_or_else(|| "unknown".to_string()),
            }),
        }
    }
}

/// Trigram-based detection backed by `whatlang`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        whatlang::detect(text).map(|info| {
            let lang = info.lang();
            if lang == Language::English.to_whatlang() {
                Language::English.code().to_string()
            } else if lang == Language::Czech.to_whatlang() {
                Language::Czech.code().to_string()
            } else {
                lang.code().to_string()
            }
        })
    }
}
