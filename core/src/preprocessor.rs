use crate::accents::fold_accents;
use crate::error::Error;
use crate::language::{Language, LanguageDetector, WhatlangDetector};
use crate::stemmer::{self, Stemmer, StemmerKind};
use crate::stopwords::StopwordFilter;
use crate::tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

lazy_static! {
    static ref PUNCTUATION_ONLY: Regex = Regex::new(r"^\p{P}+$").expect("valid regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    #[default]
    Regex,
    Whitespace,
}

/// Pipeline switches. Deserializable so it can come from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    /// ISO 639-1 code, validated when the preprocessor is built.
    pub language: String,
    pub to_lowercase: bool,
    pub remove_accents_before_stemming: bool,
    pub remove_accents_after_stemming: bool,
    pub remove_stopwords: bool,
    pub remove_punctuation: bool,
    pub recognize_language: bool,
    pub stemmer: StemmerKind,
    pub tokenizer: TokenizerKind,
    /// Replaces the built-in stopword list.
    pub stopwords_path: Option<PathBuf>,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            language: Language::English.code().to_string(),
            to_lowercase: true,
            remove_accents_before_stemming: false,
            remove_accents_after_stemming: true,
            remove_stopwords: true,
            remove_punctuation: false,
            recognize_language: false,
            stemmer: StemmerKind::Default,
            tokenizer: TokenizerKind::Regex,
            stopwords_path: None,
        }
    }
}

impl PreprocessorConfig {
    pub fn english() -> Self {
        Self::default()
    }

    pub fn czech() -> Self {
        Self { language: Language::Czech.code().to_string(), ..Self::default() }
    }

    /// User-review corpora: accents folded on both sides of stemming,
    /// punctuation dropped, Snowball stemming.
    pub fn reviews() -> Self {
        Self {
            remove_accents_before_stemming: true,
            remove_punctuation: true,
            stemmer: StemmerKind::Snowball,
            ..Self::default()
        }
    }
}

/// Text -> ordered terms. The same instance must normalize both the corpus
/// and the queries run against it.
pub struct Preprocessor {
    config: PreprocessorConfig,
    language: Language,
    stemmer: Option<Box<dyn Stemmer>>,
    tokenizer: Option<Box<dyn Tokenizer>>,
    stopwords: StopwordFilter,
    detector: Box<dyn LanguageDetector>,
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
            .field("config", &self.config)
            .field("stemmer", &self.stemmer.is_some())
            .field("tokenizer", &self.tokenizer.is_some())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl Preprocessor {
    /// Validates the configuration and binds the components it selects.
    pub fn new(config: PreprocessorConfig) -> Result<Self, Error> {
        let language: Language = config.language.parse()?;
        let stemmer = stemmer::create(config.stemmer, language)?;
        let tokenizer: Box<dyn Tokenizer> = match config.tokenizer {
            TokenizerKind::Regex => Box::new(RegexTokenizer::new()),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        };
        let mut stopwords = match &config.stopwords_path {
            Some(path) => StopwordFilter::load(path)?,
            None => StopwordFilter::for_language(language),
        };
        if config.remove_accents_before_stemming {
            stopwords = stopwords.folded();
        }
        tracing::debug!(%language, stemmer = %config.stemmer, stopwords = stopwords.len(), "preprocessor ready");
        Ok(Self {
            config,
            language,
            stemmer,
            tokenizer: Some(tokenizer),
            stopwords,
            detector: Box::new(WhatlangDetector),
        })
    }

    pub fn with_stemmer(mut self, stemmer: Option<Box<dyn Stemmer>>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Option<Box<dyn Tokenizer>>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replaces the stopword list. Folded like the built-in list when
    /// accents are removed before stemming.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = if self.config.remove_accents_before_stemming { stopwords.folded() } else { stopwords };
        self
    }

    pub fn with_detector(mut self, detector: Box<dyn LanguageDetector>) -> Self {
        self.detector = detector;
        self
    }

    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Full pipeline including the language gate. Fails with
    /// [`Error::LanguageMismatch`] when recognition is on and the text is
    /// in another language.
    pub fn get_processed_tokens(&self, text: &str) -> Result<Vec<String>, Error> {
        if self.config.recognize_language {
            self.detector.check(text, self.language)?;
        }
        Ok(self.normalize(text))
    }

    /// Pipeline without the language gate; used for queries.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let mut text = if self.config.to_lowercase { text.to_lowercase() } else { text.to_string() };
        if self.config.remove_accents_before_stemming {
            text = fold_accents(&text);
        }

        let mut tokens = match &self.tokenizer {
            Some(tokenizer) => tokenizer.tokenize(&text),
            None => text.split_whitespace().map(str::to_string).collect(),
        };
        if self.config.remove_punctuation {
            tokens.retain(|t| !PUNCTUATION_ONLY.is_match(t));
        }
        if self.config.remove_stopwords {
            tokens = self.stopwords.filter(tokens);
        }
        if let Some(stemmer) = &self.stemmer {
            tokens = tokens.iter().map(|t| stemmer.stem(t)).collect();
        }
        if self.config.remove_accents_after_stemming {
            tokens = tokens.iter().map(|t| fold_accents(t)).collect();
        }
        tokens
    }
}
