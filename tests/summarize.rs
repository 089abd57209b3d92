use std::f64::consts::FRAC_PI_2;

use tfidf_summarizer::{summarize, ErrorKind, SummarizeError, Summarizer};

const CATS: &str = "The cat sat. The cat sat on the mat. Dogs bark loudly at night.";
const THEME: &str = "The cat sat on the mat. The cat sat on the warm mat. Dogs bark.";
const ARTICLE: &str = "Rust is a systems programming language focused on safety. \
    The borrow checker enforces memory safety in Rust without a garbage collector. \
    Many developers enjoy cooking pasta on weekends. \
    Rust programs avoid data races because the borrow checker rejects unsafe sharing. \
    The weather was mild in April. \
    Safety and speed make Rust popular for systems programming.";

fn sentence_count(summary: &str) -> usize {
    summary.lines().count()
}

#[test]
fn low_threshold_keeps_every_scored_sentence() {
    let scored = Summarizer::new().score(CATS).unwrap();
    assert_eq!(scored.sentences.len(), 3);
    assert!(scored.sentences.iter().all(|s| s.score >= 0.1));
    assert_eq!(
        summarize(CATS, 0.1).unwrap(),
        "The cat sat.\nThe cat sat on the mat.\nDogs bark loudly at night."
    );
}

#[test]
fn theme_sentence_outscores_unrelated_sentence() {
    let scored = Summarizer::new().score(THEME).unwrap();
    let s2 = scored.sentences[1].score;
    let s3 = scored.sentences[2].score;
    assert!(s2 > s3, "expected {s2} > {s3}");
    assert_eq!(
        summarize(THEME, 0.5).unwrap(),
        "The cat sat on the mat.\nThe cat sat on the warm mat."
    );
}

#[test]
fn threshold_above_one_returns_first_sentence() {
    for document in [CATS, THEME, ARTICLE] {
        let first = Summarizer::new().score(document).unwrap().sentences[0].original.clone();
        assert_eq!(summarize(document, 1.5).unwrap(), first);
    }
}

#[test]
fn first_sentence_is_always_first_line() {
    for threshold in [-1.0, 0.0, 0.25, 0.5, 0.75, 1.0, 2.0] {
        let summary = summarize(ARTICLE, threshold).unwrap();
        assert_eq!(
            summary.lines().next(),
            Some("Rust is a systems programming language focused on safety.")
        );
    }
}

#[test]
fn raising_threshold_never_adds_sentences() {
    let mut previous = usize::MAX;
    for step in 0..=20 {
        let threshold = step as f64 * 0.05;
        let count = sentence_count(&summarize(ARTICLE, threshold).unwrap());
        assert!(count <= previous, "count grew at threshold {threshold}");
        previous = count;
    }
}

#[test]
fn output_preserves_document_order() {
    let scored = Summarizer::new().score(ARTICLE).unwrap();
    let originals: Vec<&str> = scored.sentences.iter().map(|s| s.original.as_str()).collect();
    for threshold in [0.2, 0.4, 0.6] {
        let summary = summarize(ARTICLE, threshold).unwrap();
        let positions: Vec<usize> = summary
            .lines()
            .map(|line| originals.iter().position(|o| *o == line).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }
}

#[test]
fn non_positive_threshold_returns_whole_document() {
    let scored = Summarizer::new().score(ARTICLE).unwrap();
    let all = scored
        .sentences
        .iter()
        .map(|s| s.original.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(summarize(ARTICLE, 0.0).unwrap(), all);
    assert_eq!(summarize(ARTICLE, -0.5).unwrap(), all);
    let min = scored.min_score().unwrap();
    assert_eq!(summarize(ARTICLE, min).unwrap(), all);
}

#[test]
fn single_sentence_is_returned_unchanged() {
    let document = "Rust makes systems programming safer.";
    for threshold in [-1.0, 0.0, 0.5, 1.0, 1.5] {
        assert_eq!(summarize(document, threshold).unwrap(), document);
    }
}

#[test]
fn scores_and_angles_are_bounded() {
    for document in [CATS, THEME, ARTICLE] {
        let scored = Summarizer::new().score(document).unwrap();
        for record in &scored.sentences {
            assert!((0.0..=1.0).contains(&record.score), "score {}", record.score);
            assert!((0.0..=FRAC_PI_2).contains(&record.theta), "theta {}", record.theta);
        }
    }
}

#[test]
fn unrelated_sentences_drop_out_first() {
    let summary = summarize(ARTICLE, 0.3).unwrap();
    assert!(summary.contains("garbage collector"));
    assert!(summary.contains("data races"));
    assert!(!summary.contains("pasta"));
    assert!(!summary.contains("weather"));
}

#[test]
fn empty_and_blank_documents_fail() {
    for document in ["", "   ", "\n\t\n"] {
        assert_eq!(summarize(document, 0.1), Err(SummarizeError::EmptyInput));
    }
}

#[test]
fn document_without_words_fails() {
    let err = summarize("3.14 2.71. 42!", 0.1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}

#[test]
fn repeated_calls_are_identical() {
    let summarizer = Summarizer::new();
    let first = summarizer.summarize(ARTICLE, 0.3).unwrap();
    for _ in 0..5 {
        assert_eq!(summarizer.summarize(ARTICLE, 0.3).unwrap(), first);
    }
}
