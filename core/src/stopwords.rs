use crate::accents::fold_accents;
use crate::error::Error;
use crate::language::Language;
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::path::Path;

lazy_static! {
    static ref ENGLISH: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
    static ref CZECH: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","aby","aj","ale","ani","aniž","ano","asi","až",
            "bez","bude","budem","budeš","by","byl","byla","byli","bylo","být",
            "co","což","či",
            "do",
            "ho",
            "i",
            "já","jak","jako","je","jeho","jej","její","jejich","jen","ještě","ji","jiné","již","jsem","jsi","jsme","jsou","jste",
            "k","kam","kde","kdo","když","ke","která","které","který","kteří","ku",
            "má","mají","mě","mezi","mi","mít","mně","mnou","můj","může","my",
            "na","nad","nám","náš","naši","ne","nebo","neboť","nejsou","není","než","nic",
            "o","od","ode","on","ona","oni","ono",
            "pak","po","pod","podle","pokud","pouze","právě","pro","proč","proto","protože","před","přes","při",
            "s","se","si","sice","své","svůj","svých",
            "ta","tak","také","takže","tato","te","tě","tedy","ten","tento","této","tím","tímto","to","tohle","toho","tohoto","tom","tomto","tomuto","toto","tu","tuto","ty","tyto",
            "u","už",
            "v","vám","váš","vaše","ve","více","však","všechen","vy",
            "z","za","zda","zde","ze","že"
        ];
        words.iter().copied().collect()
    };
}

/// Membership filter over a configured stopword set.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    /// Built-in list for `language`.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::from_words(ENGLISH.iter().copied()),
            Language::Czech => Self::from_words(CZECH.iter().copied()),
        }
    }

    /// Newline-separated list, one word per line. Blank lines are ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| Error::Stopwords { path: path.to_path_buf(), source })?;
        Ok(Self::from_words(
            contents.lines().map(str::trim).filter(|l| !l.is_empty()),
        ))
    }

    /// Same list with accents folded, for pipelines that fold before filtering.
    pub fn folded(&self) -> Self {
        Self::from_words(self.words.iter().map(|w| fold_accents(w)))
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.is_stopword(t)).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
