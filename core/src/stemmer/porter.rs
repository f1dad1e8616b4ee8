//! Porter suffix-stripping stemmer (M.F. Porter, 1980).
//!
//! Works on lowercase ASCII words. Anything else, and words of one or two
//! letters, is returned unchanged.

use super::Stemmer;

#[derive(Debug, Default, Clone, Copy)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        stem(word)
    }
}

pub fn stem(word: &str) -> String {
    if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }
    let mut w = word.as_bytes().to_vec();
    step1a(&mut w);
    step1b(&mut w);
    step1c(&mut w);
    step2(&mut w);
    step3(&mut w);
    step4(&mut w);
    step5a(&mut w);
    step5b(&mut w);
    // Only ASCII bytes are ever removed or appended.
    String::from_utf8(w).unwrap_or_else(|_| word.to_string())
}

/// Consonant flag per letter. `y` counts as a vowel when it follows a
/// consonant.
fn consonants(w: &[u8]) -> Vec<bool> {
    let mut cons: Vec<bool> = Vec::with_capacity(w.len());
    for (i, &b) in w.iter().enumerate() {
        let c = match b {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !cons[i - 1],
            _ => true,
        };
        cons.push(c);
    }
    cons
}

/// Consonant/vowel shape with runs collapsed, e.g. `balloon` -> `CVCVC`.
fn shape(w: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(w.len());
    for c in consonants(w) {
        let class = if c { b'C' } else { b'V' };
        if out.last() != Some(&class) {
            out.push(class);
        }
    }
    out
}

/// The measure `m`: number of `VC` groups in the shape.
fn measure(w: &[u8]) -> usize {
    shape(w)
        .windows(2)
        .filter(|pair| pair[0] == b'V' && pair[1] == b'C')
        .count()
}

fn contains_vowel(w: &[u8]) -> bool {
    consonants(w).iter().any(|c| !c)
}

fn ends_with_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && consonants(w)[n - 1]
}

/// `*o`: ends consonant-vowel-consonant with the last letter not w, x or y.
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    if n < 3 || matches!(w[n - 1], b'w' | b'x' | b'y') {
        return false;
    }
    let cons = consonants(w);
    cons[n - 3] && !cons[n - 2] && cons[n - 1]
}

fn stem_len(w: &[u8], suffix: &str) -> Option<usize> {
    w.ends_with(suffix.as_bytes()).then(|| w.len() - suffix.len())
}

fn replace_suffix(w: &mut Vec<u8>, stem: usize, replacement: &str) {
    w.truncate(stem);
    w.extend_from_slice(replacement.as_bytes());
}

/// Applies the first rule whose suffix matches, if the stem's measure is
/// above `min_measure`. Later rules are not tried once a suffix matched.
fn apply_rules(w: &mut Vec<u8>, rules: &[(&str, &str)], min_measure: usize) {
    for (suffix, replacement) in rules {
        if let Some(stem) = stem_len(w, suffix) {
            if measure(&w[..stem]) > min_measure {
                replace_suffix(w, stem, replacement);
            }
            return;
        }
    }
}

fn step1a(w: &mut Vec<u8>) {
    if let Some(stem) = stem_len(w, "sses") {
        replace_suffix(w, stem, "ss");
    } else if let Some(stem) = stem_len(w, "ies") {
        replace_suffix(w, stem, "i");
    } else if w.ends_with(b"s") && !w.ends_with(b"ss") {
        w.pop();
    }
}

fn step1b(w: &mut Vec<u8>) {
    if let Some(stem) = stem_len(w, "eed") {
        if measure(&w[..stem]) > 0 {
            replace_suffix(w, stem, "ee");
        }
        return;
    }
    let Some(stem) = stem_len(w, "ed").or(stem_len(w, "ing")) else {
        return;
    };
    if !contains_vowel(&w[..stem]) {
        return;
    }
    w.truncate(stem);
    if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
        w.push(b'e');
    } else if ends_with_double_consonant(w) && !matches!(w[w.len() - 1], b'l' | b's' | b'z') {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

fn step1c(w: &mut Vec<u8>) {
    if let Some(stem) = stem_len(w, "y") {
        if contains_vowel(&w[..stem]) {
            replace_suffix(w, stem, "i");
        }
    }
}

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

fn step2(w: &mut Vec<u8>) {
    apply_rules(w, STEP2_RULES, 0);
}

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ful", ""),
    ("ness", ""),
];

fn step3(w: &mut Vec<u8>) {
    apply_rules(w, STEP3_RULES, 0);
}

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ou", "ism",
    "ate", "iti", "ous", "ive", "ize",
];

fn step4(w: &mut Vec<u8>) {
    for suffix in STEP4_SUFFIXES {
        if let Some(stem) = stem_len(w, suffix) {
            if measure(&w[..stem]) > 1 {
                w.truncate(stem);
            }
            return;
        }
    }
    if let Some(stem) = stem_len(w, "ion") {
        let base = &w[..stem];
        if measure(base) > 1 && (base.ends_with(b"s") || base.ends_with(b"t")) {
            w.truncate(stem);
        }
    }
}

fn step5a(w: &mut Vec<u8>) {
    if let Some(stem) = stem_len(w, "e") {
        let base = &w[..stem];
        let m = measure(base);
        if m > 1 || (m == 1 && !ends_cvc(base)) {
            w.truncate(stem);
        }
    }
}

fn step5b(w: &mut Vec<u8>) {
    if measure(w) > 1 && w.ends_with(b"ll") {
        w.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(step: fn(&mut Vec<u8>), word: &str) -> String {
        let mut w = word.as_bytes().to_vec();
        step(&mut w);
        String::from_utf8(w).unwrap()
    }

    #[test]
    fn measure_counts_vc_groups() {
        assert_eq!(measure(b"tr"), 0);
        assert_eq!(measure(b"tree"), 0);
        assert_eq!(measure(b"trouble"), 1);
        assert_eq!(measure(b"oats"), 1);
        assert_eq!(measure(b"troubles"), 2);
        assert_eq!(measure(b"private"), 2);
        assert_eq!(shape(b"balloon"), b"CVCVC".to_vec());
    }

    #[test]
    fn y_after_consonant_is_vowel() {
        assert!(consonants(b"yes")[0]);
        assert!(!consonants(b"syzygy")[1]);
        assert!(consonants(b"toy")[2]);
        assert_eq!(consonants(b"yyyy"), vec![true, false, true, false]);
    }

    #[test]
    fn long_runs_of_y_stem_in_linear_time() {
        let word = "y".repeat(100_000);
        let stemmed = stem(&word);
        assert!(stemmed.len() <= word.len());
        assert!(stemmed.bytes().all(|b| b == b'y' || b == b'i'));
    }

    #[test]
    fn plural_collapse() {
        assert_eq!(run(step1a, "caresses"), "caress");
        assert_eq!(run(step1a, "ponies"), "poni");
        assert_eq!(run(step1a, "ties"), "ti");
        assert_eq!(run(step1a, "caress"), "caress");
        assert_eq!(run(step1a, "cats"), "cat");
    }

    #[test]
    fn past_and_progressive() {
        assert_eq!(run(step1b, "feed"), "feed");
        assert_eq!(run(step1b, "agreed"), "agree");
        assert_eq!(run(step1b, "plastered"), "plaster");
        assert_eq!(run(step1b, "bled"), "bled");
        assert_eq!(run(step1b, "motoring"), "motor");
        assert_eq!(run(step1b, "sing"), "sing");
        assert_eq!(run(step1b, "conflated"), "conflate");
        assert_eq!(run(step1b, "troubled"), "trouble");
        assert_eq!(run(step1b, "sized"), "size");
        assert_eq!(run(step1b, "hopping"), "hop");
        assert_eq!(run(step1b, "falling"), "fall");
        assert_eq!(run(step1b, "hissing"), "hiss");
        assert_eq!(run(step1b, "fizzed"), "fizz");
        assert_eq!(run(step1b, "failing"), "fail");
        assert_eq!(run(step1b, "filing"), "file");
        assert_eq!(run(step1b, "meeting"), "meet");
    }

    #[test]
    fn terminal_y() {
        assert_eq!(run(step1c, "happy"), "happi");
        assert_eq!(run(step1c, "sky"), "sky");
    }

    #[test]
    fn double_suffixes() {
        assert_eq!(run(step2, "relational"), "relate");
        assert_eq!(run(step2, "conditional"), "condition");
        assert_eq!(run(step2, "rational"), "rational");
        assert_eq!(run(step2, "valenci"), "valence");
        assert_eq!(run(step2, "digitizer"), "digitize");
        assert_eq!(run(step2, "vietnamization"), "vietnamize");
        assert_eq!(run(step2, "predication"), "predicate");
        assert_eq!(run(step2, "operator"), "operate");
        assert_eq!(run(step2, "hopefulness"), "hopeful");
        assert_eq!(run(step2, "sensibiliti"), "sensible");
    }

    #[test]
    fn step3_and_step4_suffixes() {
        assert_eq!(run(step3, "triplicate"), "triplic");
        assert_eq!(run(step3, "formative"), "form");
        assert_eq!(run(step3, "formalize"), "formal");
        assert_eq!(run(step3, "hopeful"), "hope");
        assert_eq!(run(step3, "goodness"), "good");
        assert_eq!(run(step4, "revival"), "reviv");
        assert_eq!(run(step4, "allowance"), "allow");
        assert_eq!(run(step4, "airliner"), "airlin");
        assert_eq!(run(step4, "adjustable"), "adjust");
        assert_eq!(run(step4, "replacement"), "replac");
        assert_eq!(run(step4, "adoption"), "adopt");
        assert_eq!(run(step4, "communion"), "communion");
        assert_eq!(run(step4, "homologou"), "homolog");
        assert_eq!(run(step4, "effective"), "effect");
    }

    #[test]
    fn final_e_and_ll() {
        assert_eq!(run(step5a, "probate"), "probat");
        assert_eq!(run(step5a, "rate"), "rate");
        assert_eq!(run(step5a, "cease"), "ceas");
        assert_eq!(run(step5b, "controll"), "control");
        assert_eq!(run(step5b, "roll"), "roll");
    }

    #[test]
    fn full_stems() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("meeting"), "meet");
        assert_eq!(stem("meetings"), "meet");
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("generalization"), "gener");
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("hoping"), "hope");
        // Step 5a drops the `e` that step 1b restored.
        assert_eq!(stem("agreed"), "agre");
    }

    #[test]
    fn reduced_forms_are_stable() {
        for word in ["caress", "poni", "meet", "run", "tropic", "fish"] {
            assert_eq!(stem(word), word);
        }
    }

    #[test]
    fn leaves_unsupported_input_alone() {
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("3.14"), "3.14");
        assert_eq!(stem("naïve"), "naïve");
        assert_eq!(stem("Running"), "Running");
        assert_eq!(stem(""), "");
    }
}
