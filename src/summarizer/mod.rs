pub mod adapter;
pub mod analyzer;
pub mod scoring;
pub mod select;
pub mod term;
pub mod tfidf;

use std::{fmt::Debug, marker::PhantomData, sync::Arc};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::SummarizerConfig,
    error::{Result, SummarizeError},
    summarizer::{
        analyzer::{normalize, SentenceTokenizer, SnowballStemmer, Stemmer, UnicodeTokenizer, WordTokenizer},
        scoring::{DocumentScorer, ScoredDocument, SentenceRecord},
        term::TermCounts,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine},
    },
};

/// Extractive tf-idf summarizer
///
/// Holds only the injected collaborators (word tokenizer, sentence tokenizer,
/// stemmer) and the weighting engine type `E`. Every call builds its vectors
/// and idf table from scratch, so one instance can be shared freely across
/// threads and calls never influence each other.
///
/// # Examples
/// ```
/// use tfidf_summarizer::Summarizer;
/// let summarizer = Summarizer::new();
/// let summary = summarizer
///     .summarize("The cat sat on the mat. The cat sat on the warm mat. Dogs bark.", 0.5)
///     .unwrap();
/// assert_eq!(summary, "The cat sat on the mat.\nThe cat sat on the warm mat.");
/// ```
pub struct Summarizer<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    words: Arc<dyn WordTokenizer>,
    sentences: Arc<dyn SentenceTokenizer>,
    stemmer: Arc<dyn Stemmer>,
    _marker: PhantomData<fn() -> E>,
}

impl Summarizer<DefaultTfIdfEngine> {
    /// Unicode tokenizers with the English Snowball stemmer
    pub fn new() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }

    /// Unicode tokenizers with the configured stemming language
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Summarizer {
            words: Arc::new(UnicodeTokenizer),
            sentences: Arc::new(UnicodeTokenizer),
            stemmer: Arc::new(SnowballStemmer::new(config.language)),
            _marker: PhantomData,
        }
    }
}

impl Default for Summarizer<DefaultTfIdfEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Summarizer<E>
where
    E: TfIdfEngine,
{
    fn clone(&self) -> Self {
        Summarizer {
            words: Arc::clone(&self.words),
            sentences: Arc::clone(&self.sentences),
            stemmer: Arc::clone(&self.stemmer),
            _marker: PhantomData,
        }
    }
}

impl<E> Debug for Summarizer<E>
where
    E: TfIdfEngine,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("engine", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

/// Collaborator injection
impl<E> Summarizer<E>
where
    E: TfIdfEngine,
{
    pub fn with_word_tokenizer<W>(mut self, tokenizer: W) -> Self
    where
        W: WordTokenizer + 'static,
    {
        self.words = Arc::new(tokenizer);
        self
    }

    pub fn with_sentence_tokenizer<S>(mut self, tokenizer: S) -> Self
    where
        S: SentenceTokenizer + 'static,
    {
        self.sentences = Arc::new(tokenizer);
        self
    }

    pub fn with_stemmer<S>(mut self, stemmer: S) -> Self
    where
        S: Stemmer + 'static,
    {
        self.stemmer = Arc::new(stemmer);
        self
    }

    /// Swap the weighting engine, keeping the collaborators
    pub fn with_engine<E2>(self) -> Summarizer<E2>
    where
        E2: TfIdfEngine,
    {
        Summarizer {
            words: self.words,
            sentences: self.sentences,
            stemmer: self.stemmer,
            _marker: PhantomData,
        }
    }
}

/// Pipeline
impl<E> Summarizer<E>
where
    E: TfIdfEngine,
{
    /// Normalized terms of a text fragment
    pub fn terms(&self, text: &str) -> Vec<String> {
        let tokens = self.words.tokenize_words(text);
        normalize(&tokens, self.stemmer.as_ref())
    }

    /// Term counts of a text fragment
    pub fn term_counts(&self, text: &str) -> TermCounts {
        TermCounts::from(self.terms(text).as_slice())
    }

    /// Score every sentence of `document` against the whole document
    ///
    /// # Errors
    /// * `EmptyInput` - no sentences or no document terms
    /// * `ZeroDocumentFrequency`, `MissingIdf` - the sentence vectors do not
    ///   cover the document vector
    /// * `NumericDomain`, `InvalidNorm` - the cosine computation left its domain
    pub fn score(&self, document: &str) -> Result<ScoredDocument> {
        let sentences = self.sentences.tokenize_sentences(document);
        if sentences.is_empty() {
            debug!("document has no sentences");
            return Err(SummarizeError::EmptyInput);
        }
        let document_counts = self.term_counts(document);
        if document_counts.is_empty() {
            debug!(sentences = sentences.len(), "document has no terms");
            return Err(SummarizeError::EmptyInput);
        }
        let sentence_counts: Vec<TermCounts> = sentences.iter().map(|s| self.term_counts(s)).collect();
        debug!(
            sentences = sentences.len(),
            vocab_size = document_counts.term_num(),
            "vectors built"
        );

        let idf = E::idf_table(&document_counts, &sentence_counts)?;
        let document_vector = E::tf_idf(&E::weights(&document_counts), &idf)?;
        let scorer = DocumentScorer::new(&document_vector)?;

        let records = sentences
            .iter()
            .zip(&sentence_counts)
            .enumerate()
            .map(|(index, (original, counts))| {
                let vector = E::tf_idf(&E::weights(counts), &idf)?;
                let similarity = scorer.score(index, &vector)?;
                Ok(SentenceRecord {
                    original: original.to_string(),
                    index,
                    vector,
                    theta: similarity.theta,
                    score: similarity.score,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ScoredDocument {
            sentences: records,
            vocab_size: idf.vocab_size(),
        })
    }

    /// Summarize `document`, keeping the first sentence and every sentence
    /// whose score reaches `threshold`
    ///
    /// # Arguments
    /// * `document` - text to summarize
    /// * `threshold` - minimum score, any real number; values above 1 keep
    ///   only the first sentence
    ///
    /// # Returns
    /// * `Ok(String)` - selected sentences joined with newlines, in document order
    pub fn summarize(&self, document: &str, threshold: f64) -> Result<String> {
        let scored = self.score(document)?;
        let summary = scored.select(threshold);
        debug!(
            threshold,
            sentences = scored.sentences.len(),
            selected = summary.lines().count(),
            "summary selected"
        );
        Ok(summary)
    }

    /// Summarize independent documents in parallel
    /// Results are in input order, each equal to a direct `summarize` call.
    pub fn summarize_many<D>(&self, documents: &[D], threshold: f64) -> Vec<Result<String>>
    where
        D: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|document| self.summarize(document.as_ref(), threshold))
            .collect()
    }
}
