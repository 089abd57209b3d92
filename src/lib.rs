//! This crate is an extractive text summarizer built on tf-idf weighted
//! cosine similarity between every sentence and the whole document.

pub mod config;
pub mod error;
pub mod summarizer;
pub mod utils;

/// Summarizer
/// The top-level struct of this crate. It splits a document into sentences,
/// turns the document and every sentence into tf-idf vectors, scores each
/// sentence by its angle to the document vector and keeps the sentences that
/// reach a threshold.
///
/// It holds only the pluggable collaborators:
/// - A word tokenizer
/// - A sentence tokenizer
/// - A stemmer
///
/// `Summarizer<E>` is generic over the weighting engine `E`
/// (default `DefaultTfIdfEngine`).
///
/// Three calling conventions share one computation:
/// - `summarize` returns a `Result`
/// - `summarize_with_callback` reports `(summary, error)` to a closure
/// - `summarize_async` returns a future
pub use summarizer::Summarizer;

/// TF IDF Calculation Engine Trait
/// Defines how term counts become weights, the idf table and tf-idf values.
/// `DefaultTfIdfEngine` uses `1 + log10(count)` and `log10(N / df)` with `N`
/// the vocabulary size of the document.
pub use summarizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Scoring results
/// - `ScoredDocument`: every sentence record plus the vocabulary size
/// - `SentenceRecord`: original text, position, tf-idf vector, angle and score
pub use summarizer::scoring::{ScoredDocument, SentenceRecord};

/// Collaborator traits and their default implementations
pub use summarizer::analyzer::{SentenceTokenizer, SnowballStemmer, Stemmer, UnicodeTokenizer, WordTokenizer};

pub use config::{StemLanguage, SummarizerConfig, DEFAULT_THRESHOLD};
pub use error::{ErrorKind, Result, SummarizeError};

/// Summarize with the default summarizer (Unicode tokenizers, English stemmer)
///
/// # Examples
/// ```
/// let summary = tfidf_summarizer::summarize("Only one sentence here.", 0.9).unwrap();
/// assert_eq!(summary, "Only one sentence here.");
/// ```
pub fn summarize(document: &str, threshold: f64) -> Result<String> {
    Summarizer::new().summarize(document, threshold)
}

/// Callback form of [`summarize`]
pub fn summarize_with_callback<F>(document: impl Into<String>, threshold: f64, callback: F)
where
    F: FnOnce(Option<String>, Option<SummarizeError>) + Send + 'static,
{
    Summarizer::new().summarize_with_callback(document, threshold, callback)
}

/// Future form of [`summarize`]
pub async fn summarize_async(document: impl Into<String>, threshold: f64) -> Result<String> {
    Summarizer::new().summarize_async(document, threshold).await
}
