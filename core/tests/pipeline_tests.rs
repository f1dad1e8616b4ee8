use search_core::{Preprocessor, PreprocessorConfig};

#[test]
fn it_normalizes_and_stems() {
    let p = Preprocessor::new(PreprocessorConfig::english()).unwrap();
    let words = p.get_processed_tokens("Running Runners RUN! The café's menu.").unwrap();
    assert!(words.contains(&"run".to_string()));
    // café is stemmed as-is, then folded
    assert!(words.contains(&"cafe".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let p = Preprocessor::new(PreprocessorConfig::english()).unwrap();
    let words = p.get_processed_tokens("The quick brown fox and the lazy dog").unwrap();
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["quick", "brown", "fox", "lazi", "dog"]);
}

#[test]
fn reviews_preset_drops_punctuation() {
    let p = Preprocessor::new(PreprocessorConfig::reviews()).unwrap();
    let words = p.get_processed_tokens("This game is an absolute masterpiece!!! Naïve critics...").unwrap();
    assert!(words.iter().all(|w| w.chars().any(char::is_alphanumeric)));
    assert!(words.contains(&"game".to_string()));
    assert!(words.iter().all(|w| w.is_ascii()));
}

#[test]
fn czech_preset() {
    let p = Preprocessor::new(PreprocessorConfig::czech()).unwrap();
    let words = p.get_processed_tokens("Plzeň je krásné město a je to krásné místo").unwrap();
    assert_eq!(words, vec!["plzn", "krasn", "mest", "krasn", "mist"]);
}

#[test]
fn language_recognition_rejects_foreign_text() {
    let config = PreprocessorConfig { recognize_language: true, ..PreprocessorConfig::english() };
    let p = Preprocessor::new(config).unwrap();
    let czech = "Plzeň je krásné město v západních Čechách a každý rok ho navštíví mnoho turistů z celého světa.";
    let err = p.get_processed_tokens(czech).unwrap_err();
    assert!(err.is_skippable());
    let english = "The quick brown fox jumps over the lazy dog while the children are playing in the garden.";
    assert!(p.get_processed_tokens(english).is_ok());
}
