//! Light Czech stemmer: strips case endings and possessive suffixes, then
//! normalises a few consonant alternations. Lengths are counted in chars.

use super::Stemmer;

#[derive(Debug, Default, Clone, Copy)]
pub struct CzechStemmer;

impl Stemmer for CzechStemmer {
    fn stem(&self, word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        let len = remove_case(&chars);
        chars.truncate(len);
        let len = remove_possessive(&chars);
        chars.truncate(len);
        if !chars.is_empty() {
            normalize(&mut chars);
        }
        chars.into_iter().collect()
    }
}

const CASE_ENDINGS_3: &[&str] = &[
    "ech", "ich", "ích", "ého", "ěmi", "emi", "ému", "ěte", "ete", "ěti", "eti", "ího", "iho", "ími",
    "ímu", "imu", "ách", "ata", "aty", "ých", "ama", "ami", "ové", "ovi", "ými",
];

const CASE_ENDINGS_2: &[&str] = &[
    "em", "es", "ém", "ím", "ům", "at", "ám", "os", "us", "ým", "mi", "ou",
];

fn ends_with(chars: &[char], suffix: &str) -> bool {
    let suffix: Vec<char> = suffix.chars().collect();
    chars.ends_with(&suffix)
}

fn ends_with_any(chars: &[char], suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| ends_with(chars, s))
}

fn remove_case(chars: &[char]) -> usize {
    let len = chars.len();
    if len > 7 && ends_with(chars, "atech") {
        return len - 5;
    }
    if len > 6 && ends_with_any(chars, &["ětem", "etem", "atům"]) {
        return len - 4;
    }
    if len > 5 && ends_with_any(chars, CASE_ENDINGS_3) {
        return len - 3;
    }
    if len > 4 && ends_with_any(chars, CASE_ENDINGS_2) {
        return len - 2;
    }
    if len > 3
        && matches!(
            chars[len - 1],
            'a' | 'e' | 'i' | 'o' | 'u' | 'ů' | 'y' | 'á' | 'é' | 'í' | 'ý' | 'ě'
        )
    {
        return len - 1;
    }
    len
}

fn remove_possessive(chars: &[char]) -> usize {
    let len = chars.len();
    if len > 5 && ends_with_any(chars, &["ov", "in", "ův"]) {
        return len - 2;
    }
    len
}

fn normalize(chars: &mut Vec<char>) {
    let len = chars.len();
    if ends_with(chars, "čt") {
        chars[len - 2] = 'c';
        chars[len - 1] = 'k';
        return;
    }
    if ends_with(chars, "št") {
        chars[len - 2] = 's';
        chars[len - 1] = 'k';
        return;
    }
    match chars[len - 1] {
        'c' | 'č' => {
            chars[len - 1] = 'k';
            return;
        }
        'z' | 'ž' => {
            chars[len - 1] = 'h';
            return;
        }
        _ => {}
    }
    if len > 1 && chars[len - 2] == 'e' {
        chars.remove(len - 2);
    } else if len > 2 && chars[len - 2] == 'ů' {
        chars[len - 2] = 'o';
    }
}
