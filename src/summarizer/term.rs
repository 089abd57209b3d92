use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermCounts struct
/// Bag of terms for one sentence or for the whole document.
/// Counts the number of times each term appears.
/// A present term always has a count of at least 1.
///
/// # Examples
/// ```
/// use tfidf_summarizer::summarizer::term::TermCounts;
/// let mut counts = TermCounts::new();
/// counts.add_term("cat");
/// counts.add_term("mat");
/// counts.add_term("cat");
///
/// assert_eq!(counts.term_count("cat"), 2);
/// assert_eq!(counts.term_num(), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermCounts {
    /// Create an empty TermCounts
    pub fn new() -> Self {
        TermCounts {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermCounts
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut counts = TermCounts::new();
        counts.add_terms(terms);
        counts
    }
}

/// Implementation for retrieving information from TermCounts
impl TermCounts {
    /// Iterate over terms and counts in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
    }

    /// Iterate over the distinct terms
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }

    /// Get the occurrence count for a term, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Check if a term exists
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Number of distinct terms (vocabulary size)
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Total number of term occurrences
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_occurrences() {
        let counts = TermCounts::from(&["the", "cat", "the", "mat", "the"][..]);
        assert_eq!(counts.term_count("the"), 3);
        assert_eq!(counts.term_count("cat"), 1);
        assert_eq!(counts.term_count("dog"), 0);
        assert_eq!(counts.term_num(), 3);
        assert_eq!(counts.term_sum(), 5);
    }

    #[test]
    fn absent_terms_are_not_stored() {
        let counts = TermCounts::from(&["cat"][..]);
        assert!(!counts.contains_term("dog"));
        assert!(counts.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn input_order_does_not_change_counts() {
        let a = TermCounts::from(&["a", "b", "a", "c"][..]);
        let b = TermCounts::from(&["c", "a", "b", "a"][..]);
        for (term, count) in a.iter() {
            assert_eq!(b.term_count(term), count);
        }
        assert_eq!(a.term_num(), b.term_num());
    }

    #[test]
    fn iteration_is_first_occurrence_order() {
        let counts = TermCounts::from(&["b", "a", "b", "c"][..]);
        let terms: Vec<&str> = counts.term_set_iter().collect();
        assert_eq!(terms, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_counts() {
        let counts = TermCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.term_sum(), 0);
    }
}
