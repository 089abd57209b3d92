use std::borrow::Cow;
use std::fmt::Debug;

use rust_stemmers::{Algorithm, Stemmer as SnowballAlgorithm};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::StemLanguage;

/// Splits raw text into word tokens, in order.
pub trait WordTokenizer: Send + Sync {
    fn tokenize_words<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits raw text into sentences, in order.
/// Every returned slice is verbatim text of the input.
pub trait SentenceTokenizer: Send + Sync {
    fn tokenize_sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Maps a lowercase word to its stem.
pub trait Stemmer: Send + Sync {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// UAX #29 word and sentence segmentation
///
/// Words are `unicode_words` (punctuation and whitespace dropped).
/// Sentences are `unicode_sentences` with surrounding whitespace trimmed;
/// segments without any alphanumeric character are skipped.
///
/// # Examples
/// ```
/// use tfidf_summarizer::summarizer::analyzer::{SentenceTokenizer, UnicodeTokenizer, WordTokenizer};
/// let tokenizer = UnicodeTokenizer;
/// assert_eq!(tokenizer.tokenize_sentences("One cat. Two dogs."), vec!["One cat.", "Two dogs."]);
/// assert_eq!(tokenizer.tokenize_words("Two dogs."), vec!["Two", "dogs"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeTokenizer;

impl WordTokenizer for UnicodeTokenizer {
    fn tokenize_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}

impl SentenceTokenizer for UnicodeTokenizer {
    fn tokenize_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Snowball stemmer backed by `rust-stemmers`
/// `StemLanguage::None` leaves words untouched.
pub struct SnowballStemmer {
    language: StemLanguage,
    inner: Option<SnowballAlgorithm>,
}

impl SnowballStemmer {
    pub fn new(language: StemLanguage) -> Self {
        let inner = match language {
            StemLanguage::None => None,
            StemLanguage::English => Some(Algorithm::English),
            StemLanguage::French => Some(Algorithm::French),
            StemLanguage::German => Some(Algorithm::German),
            StemLanguage::Spanish => Some(Algorithm::Spanish),
            StemLanguage::Italian => Some(Algorithm::Italian),
            StemLanguage::Portuguese => Some(Algorithm::Portuguese),
            StemLanguage::Dutch => Some(Algorithm::Dutch),
            StemLanguage::Swedish => Some(Algorithm::Swedish),
            StemLanguage::Russian => Some(Algorithm::Russian),
        }
        .map(SnowballAlgorithm::create);
        Self { language, inner }
    }

    pub fn language(&self) -> StemLanguage {
        self.language
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new(StemLanguage::English)
    }
}

impl Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match &self.inner {
            Some(stemmer) => stemmer.stem(word),
            None => Cow::Borrowed(word),
        }
    }
}

/// Whether the token parses as a finite number
/// "3.14", "-5" and "1e10" do; "NaN" and "Infinity" do not.
#[inline]
pub fn is_finite_number(token: &str) -> bool {
    token
        .parse::<f64>()
        .map(|value| value.is_finite())
        .unwrap_or(false)
}

/// Whether a raw token survives normalization
/// It needs an alphabetic character and must not be a finite number.
#[inline]
pub fn keep_token(token: &str) -> bool {
    if is_finite_number(token) {
        return false;
    }
    token.chars().any(char::is_alphabetic)
}

/// Filter, lowercase and stem raw tokens
/// Order and duplicates are preserved.
///
/// # Arguments
/// * `tokens` - raw word tokens
/// * `stemmer` - stemmer applied to each lowercased token
///
/// # Returns
/// * `Vec<String>` - normalized terms
pub fn normalize<T, S>(tokens: &[T], stemmer: &S) -> Vec<String>
where
    T: AsRef<str>,
    S: Stemmer + ?Sized,
{
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| keep_token(token))
        .map(|token| {
            let lower = token.to_lowercase();
            stemmer.stem(&lower).into_owned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tokens_are_dropped() {
        for token in ["3.14", "-5", "42", "1e10", "2E-3"] {
            assert!(!keep_token(token), "{token} should be dropped");
        }
    }

    #[test]
    fn non_finite_words_are_kept() {
        assert!(keep_token("NaN"));
        assert!(keep_token("Infinity"));
        assert!(keep_token("inf"));
    }

    #[test]
    fn tokens_without_letters_are_dropped() {
        assert!(!keep_token("--"));
        assert!(!keep_token("1,000"));
        assert!(!keep_token(""));
        assert!(keep_token("b2b"));
    }

    #[test]
    fn normalize_lowercases_and_stems_in_order() {
        let stemmer = SnowballStemmer::new(StemLanguage::English);
        let terms = normalize(&["Running", "42", "DOGS", "running"], &stemmer);
        assert_eq!(terms, vec!["run", "dog", "run"]);
    }

    #[test]
    fn no_stemming_only_lowercases() {
        let stemmer = SnowballStemmer::new(StemLanguage::None);
        let terms = normalize(&["Running", "Dogs"], &stemmer);
        assert_eq!(terms, vec!["running", "dogs"]);
    }

    #[test]
    fn sentences_keep_surface_text() {
        let text = "The cat sat.  The cat sat on the mat!\nDogs bark loudly at night?";
        let sentences = UnicodeTokenizer.tokenize_sentences(text);
        assert_eq!(
            sentences,
            vec!["The cat sat.", "The cat sat on the mat!", "Dogs bark loudly at night?"]
        );
    }

    #[test]
    fn words_skip_punctuation() {
        let words = UnicodeTokenizer.tokenize_words("Pi is 3.14, roughly.");
        assert_eq!(words, vec!["Pi", "is", "3.14", "roughly"]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(UnicodeTokenizer.tokenize_sentences("").is_empty());
        assert!(UnicodeTokenizer.tokenize_sentences("   \n\t ").is_empty());
    }
}
