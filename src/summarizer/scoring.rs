use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{error::{Result, SummarizeError}, summarizer::{select, tfidf::TermTfIdf}, utils::math::bounded_angle};

/// Cosine ratios may overshoot [-1, 1] by this much before it is an error.
pub const ANGLE_TOLERANCE: f64 = 1e-9;

/// Angular distance of a sentence to the document and the score derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Similarity {
    /// radians, within [0, π/2]
    pub theta: f64,
    /// (π/2 - θ) / (π/2), within [0, 1]
    pub score: f64,
}

impl Similarity {
    /// Similarity of a sentence without any weighted term
    pub const EMPTY: Similarity = Similarity { theta: 0.0, score: 0.0 };

    #[inline]
    fn from_theta(theta: f64) -> Self {
        Similarity {
            theta,
            score: (FRAC_PI_2 - theta) / FRAC_PI_2,
        }
    }
}

/// Cosine similarity against a fixed document vector
/// The document norm is computed once and shared by every sentence.
#[derive(Debug)]
pub struct DocumentScorer<'a> {
    document: &'a TermTfIdf,
    norm: f64,
}

impl<'a> DocumentScorer<'a> {
    pub fn new(document: &'a TermTfIdf) -> Result<Self> {
        let norm = document.norm()?;
        Ok(Self { document, norm })
    }

    #[inline]
    pub fn document_norm(&self) -> f64 {
        self.norm
    }

    /// Score one sentence vector
    ///
    /// # Arguments
    /// * `index` - sentence position, used in errors
    /// * `sentence` - tf-idf values of the sentence
    ///
    /// # Errors
    /// * `NumericDomain` - the cosine ratio is not finite or overshoots [-1, 1]
    /// * `InvalidNorm` - the sentence norm cannot be computed
    pub fn score(&self, index: usize, sentence: &TermTfIdf) -> Result<Similarity> {
        let sent_norm = sentence.norm()?;
        if sent_norm == 0.0 {
            return Ok(Similarity::EMPTY);
        }
        let dot = sentence.dot(self.document);
        let ratio = dot / (sent_norm * self.norm);
        let theta = bounded_angle(ratio, ANGLE_TOLERANCE)
            .ok_or(SummarizeError::NumericDomain { index, value: ratio })?;
        let similarity = Similarity::from_theta(theta);
        trace!(index, dot, sent_norm, theta, score = similarity.score, "sentence scored");
        Ok(similarity)
    }
}

/// One sentence of the document with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// verbatim sentence text
    pub original: String,
    /// 0-based position in the document
    pub index: usize,
    /// tf-idf values of the sentence
    pub vector: TermTfIdf,
    pub theta: f64,
    pub score: f64,
}

/// All sentence records of a document, in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub sentences: Vec<SentenceRecord>,
    /// distinct terms of the document vector
    pub vocab_size: usize,
}

impl ScoredDocument {
    /// Apply the selector: first sentence always, others when `score >= threshold`
    pub fn select(&self, threshold: f64) -> String {
        select::select(&self.sentences, threshold)
    }

    /// Lowest sentence score, `None` for an empty record list
    pub fn min_score(&self) -> Option<f64> {
        self.sentences.iter().map(|s| s.score).reduce(f64::min)
    }
}
