use crate::summarizer::scoring::SentenceRecord;

/// Separator placed between selected sentences.
pub const SENTENCE_SEPARATOR: &str = "\n";

/// Whether the sentence at `index` with `score` makes it into the summary
/// The first sentence is always kept; the threshold is not validated.
#[inline]
pub fn is_selected(index: usize, score: f64, threshold: f64) -> bool {
    index == 0 || score >= threshold
}

/// Join the selected sentences in document order
///
/// # Arguments
/// * `records` - sentence records in document order
/// * `threshold` - minimum score, any real number
///
/// # Returns
/// * `String` - newline-joined original text of the kept sentences
pub fn select(records: &[SentenceRecord], threshold: f64) -> String {
    records
        .iter()
        .filter(|record| is_selected(record.index, record.score, threshold))
        .map(|record| record.original.as_str())
        .collect::<Vec<_>>()
        .join(SENTENCE_SEPARATOR)
}
