use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Scripts stripped before tokenizing: Cyrillic, CJK and Arabic.
    static ref EXCLUDED_SCRIPTS: Regex =
        Regex::new(r"[\p{Cyrillic}\p{Han}\p{Hiragana}\p{Katakana}\x{0600}-\x{06FF}]").expect("valid regex");
    /// Decimal numbers, words, HTML tags, single punctuation marks.
    static ref WORD: Regex = Regex::new(r"\d+[.,]\d*|[\p{L}\d]+|<.*?>|\p{P}").expect("valid regex");
    static ref URL: Regex = Regex::new(
        r"https?://(?:www\.)?[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.\S{2,}|www\.[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.\S{2,}|https?://(?:www\.)?[a-zA-Z0-9]+\.\S{2,}|www\.[a-zA-Z0-9]+\.\S{2,}"
    ).expect("valid regex");
    /// Words with an inner `*`, e.g. `f*ck`.
    static ref CENSORED: Regex =
        Regex::new(r"[\w+À-ž]+\*[\w+À-ž]*|[\w+À-ž]*\*[\w+À-ž]+").expect("valid regex");
    /// `24.12.`, `24. 12. 2023`
    static ref DATE: Regex = Regex::new(r"\d{1,2}\.\s?\d{1,2}\.\s*\d{0,4}").expect("valid regex");
}

/// Splits normalized text into an ordered sequence of raw terms.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Layered pattern tokenizer.
///
/// Every pattern scans every whitespace fragment, so one piece of text can
/// yield several overlapping tokens (`12.5.2020` is both a number run and a
/// date). Output order is pattern-major, then fragment order, and duplicates
/// are kept.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    excluded: Option<Regex>,
    patterns: Vec<Regex>,
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self {
            excluded: Some(EXCLUDED_SCRIPTS.clone()),
            patterns: vec![WORD.clone(), URL.clone(), CENSORED.clone(), DATE.clone()],
        }
    }
}

impl RegexTokenizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = match &self.excluded {
            Some(re) => re.replace_all(text, ""),
            None => text.into(),
        };
        let fragments: Vec<&str> = text.split_whitespace().collect();
        let mut tokens = Vec::new();
        for pattern in &self.patterns {
            for fragment in &fragments {
                tokens.extend(pattern.find_iter(fragment).map(|m| m.as_str().to_string()));
            }
        }
        tokens
    }
}

/// Plain whitespace split.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
