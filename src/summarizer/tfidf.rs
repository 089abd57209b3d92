use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::{Result, SummarizeError}, summarizer::term::TermCounts, utils::math::{checked_norm, log_weight}};

/// Log-scaled term frequency per term
/// Second stage after [`TermCounts`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermWeights {
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, f64>,
}

impl TermWeights {
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Inverse document frequency per document term
/// Valid for one summarize call only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfTable {
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<String, f64>,
    /// number of distinct terms in the document vector
    vocab_size: usize,
}

impl IdfTable {
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(term, &idf)| (term.as_str(), idf))
    }
}

/// Final tf-idf value per term
/// Third stage, weight * idf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermTfIdf {
    #[serde(with = "indexmap::map::serde_seq")]
    values: IndexMap<String, f64>,
}

impl TermTfIdf {
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.values.get(term).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(term, &v)| (term.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Euclidean norm of the tf-idf values
    pub fn norm(&self) -> Result<f64> {
        checked_norm(self.values.values().copied())
            .map_err(|value| SummarizeError::InvalidNorm { value })
    }

    /// Dot product over the terms shared with `other`
    /// Terms missing on either side contribute zero.
    pub fn dot(&self, other: &TermTfIdf) -> f64 {
        self.values
            .iter()
            .filter_map(|(term, &a)| other.get(term).map(|b| a * b))
            .sum()
    }
}

/// Trait for tf-idf weighting strategies
///
/// Every stage consumes the previous stage by reference and builds a new value.
pub trait TfIdfEngine {
    /// Term frequency weights of one vector
    fn weights(counts: &TermCounts) -> TermWeights;

    /// IDF table for every term of the document vector
    ///
    /// # Arguments
    /// * `document` - term counts of the whole document
    /// * `sentences` - term counts of each sentence
    ///
    /// # Errors
    /// * `ZeroDocumentFrequency` - a document term occurs in no sentence
    fn idf_table(document: &TermCounts, sentences: &[TermCounts]) -> Result<IdfTable>;

    /// Combine weights with the shared idf table
    ///
    /// # Errors
    /// * `MissingIdf` - a weighted term has no idf entry
    fn tf_idf(weights: &TermWeights, idf: &IdfTable) -> Result<TermTfIdf> {
        let values = weights
            .iter()
            .map(|(term, weight)| {
                idf.get(term)
                    .map(|idf| (term.to_string(), weight * idf))
                    .ok_or_else(|| SummarizeError::MissingIdf { term: term.to_string() })
            })
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(TermTfIdf { values })
    }
}

/// Default tf-idf engine
///
/// - weight = 1 + log10(count)
/// - idf = log10(N / df), N is the document vocabulary size and df the
///   number of sentences containing the term
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    fn weights(counts: &TermCounts) -> TermWeights {
        let weights = counts
            .iter()
            .map(|(term, count)| (term.to_string(), log_weight::<f64>(count)))
            .collect();
        TermWeights { weights }
    }

    fn idf_table(document: &TermCounts, sentences: &[TermCounts]) -> Result<IdfTable> {
        // df per term, counted once per sentence
        let mut doc_freq: IndexMap<&str, u64> = IndexMap::with_capacity(document.term_num());
        for sentence in sentences {
            for term in sentence.term_set_iter() {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let vocab_size = document.term_num();
        let n = vocab_size as f64;
        let idf = document
            .term_set_iter()
            .map(|term| match doc_freq.get(term) {
                Some(&df) if df > 0 => Ok((term.to_string(), (n / df as f64).log10())),
                _ => Err(SummarizeError::ZeroDocumentFrequency { term: term.to_string() }),
            })
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(IdfTable { idf, vocab_size })
    }
}
