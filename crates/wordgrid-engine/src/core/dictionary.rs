use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Shortest word the scanner will ever match.
pub const MIN_WORD_LEN: usize = 3;

/// Words used when the word list resource cannot be read.
const BUILTIN_WORDS: &[&str] = &[
    "ACE", "ACT", "ADD", "AGE", "AGO", "AID", "AIM", "AIR", "ALL", "AND", "ANY", "ARM", "ART",
    "ASK", "BAD", "BAG", "BAR", "BED", "BEE", "BIG", "BIT", "BOX", "BOY", "BUY", "CAR", "CAT",
    "CUT", "DAD", "DAY", "DIE", "DOG", "DRY", "EAR", "EAT", "EGG", "END", "EYE", "FAR", "FIT",
    "FLY", "FOR", "GET", "GOD", "GUN", "HAT", "HIT", "HOT", "HOW", "ICE", "JOB", "KEY", "KID",
    "LAW", "LAY", "LEG", "LET", "LIE", "LOT", "LOW", "MAP", "MEN", "MOM", "NEW", "NOW", "OFF",
    "OIL", "OLD", "ONE", "OUT", "OWN", "PAY", "PEN", "PET", "PIE", "PIN", "PUT", "RED", "RUN",
    "SAY", "SEA", "SEE", "SET", "SIT", "SKY", "SON", "SUN", "TAX", "TEA", "TEN", "TOP", "TRY",
    "TWO", "USE", "WAR", "WAY", "WHO", "WHY", "WIN", "YES", "YET", "YOU", "GAME", "WORD", "LIST",
    "TEST", "CODE", "PLAY", "GOOD", "LUCK",
];

/// Failure to read a word list resource.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to read word list {}", path.display())]
pub struct DictionaryLoadError {
    path: PathBuf,
    source: io::Error,
}

impl DictionaryLoadError {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The read-only set of valid words.
///
/// Words are stored trimmed and upper-cased; entries shorter than
/// [`MIN_WORD_LEN`] are dropped. An empty dictionary is valid and simply never
/// matches anything.
///
/// # Example
///
/// ```
/// use wordgrid_engine::Dictionary;
///
/// let dictionary = Dictionary::parse("cat\n  Dog \nox\n");
/// assert!(dictionary.contains("CAT"));
/// assert!(dictionary.contains("DOG"));
/// assert!(!dictionary.contains("OX"));
/// assert_eq!(dictionary.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from raw words, normalizing each one.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| word.chars().count() >= MIN_WORD_LEN)
            .collect();
        Self { words }
    }

    /// Parses newline-delimited text (`\n` or `\r\n`).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::new(lines))
    }

    /// Reads a newline-delimited word list from `path`.
    pub fn load<P>(path: P) -> Result<Self, DictionaryLoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        File::open(path)
            .and_then(|file| Self::from_reader(BufReader::new(file)))
            .map_err(|source| DictionaryLoadError {
                path: path.to_owned(),
                source,
            })
    }

    /// Reads the word list at `path`, falling back to [`Self::builtin`] when
    /// it cannot be read.
    ///
    /// A readable list that yields no words is kept as is.
    pub fn load_or_builtin<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        match Self::load(path) {
            Ok(dictionary) => {
                if dictionary.is_empty() {
                    tracing::warn!("word list contained no words of {MIN_WORD_LEN}+ letters");
                } else {
                    tracing::info!(words = dictionary.len(), "loaded word list");
                }
                dictionary
            }
            Err(e) => {
                let dictionary = Self::builtin();
                tracing::warn!(
                    error = %e,
                    source = %std::error::Error::source(&e).map_or_else(String::new, ToString::to_string),
                    words = dictionary.len(),
                    "using built-in word list",
                );
                dictionary
            }
        }
    }

    /// The small embedded word list.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_normalization() {
        let dictionary = Dictionary::parse("  cat\r\nDOG\nox\n\nhello world\n");
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("DOG"));
        assert!(dictionary.contains("HELLO WORLD"));
        assert!(!dictionary.contains("OX"));
        assert!(!dictionary.contains("cat"));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_from_reader() {
        let dictionary = Dictionary::from_reader(Cursor::new("dad\nmom\n")).unwrap();
        assert!(dictionary.contains("DAD"));
        assert!(dictionary.contains("MOM"));
    }

    #[test]
    fn test_builtin_words() {
        let dictionary = Dictionary::builtin();
        assert_eq!(dictionary.len(), BUILTIN_WORDS.len());
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("LUCK"));
        assert!(dictionary.words().all(|w| w.len() >= MIN_WORD_LEN));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let path = "/definitely/not/here/wordlist.txt";
        let err = Dictionary::load(path).unwrap_err();
        assert_eq!(err.path(), Path::new(path));

        let dictionary = Dictionary::load_or_builtin(path);
        assert_eq!(dictionary, Dictionary::builtin());
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("CAT"));
    }
}
