use super::Stemmer;
use rust_stemmers::Algorithm;

/// Snowball stemmer from `rust-stemmers`.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
    algorithm: Algorithm,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { inner: rust_stemmers::Stemmer::create(algorithm), algorithm }
    }

    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer").field("algorithm", &self.algorithm).finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_snowball() {
        let s = SnowballStemmer::english();
        assert_eq!(s.stem("running"), "run");
        assert_eq!(s.stem("cats"), "cat");
    }
}
