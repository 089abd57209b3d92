//! Callback and future calling conventions over [`Summarizer::summarize`].
//!
//! Both adapters run the same synchronous computation on the rayon pool and
//! only differ in how completion is reported. A panic inside the computation
//! is caught and reported as [`SummarizeError::TaskFailed`].

use std::panic::{self, AssertUnwindSafe};

use tokio::sync::oneshot;
use tracing::warn;

use crate::{error::{Result, SummarizeError}, summarizer::{tfidf::TfIdfEngine, Summarizer}};

/// Split a result into the `(summary, error)` pair handed to callbacks
/// Exactly one side is `Some`.
#[inline]
pub fn into_parts(result: Result<String>) -> (Option<String>, Option<SummarizeError>) {
    match result {
        Ok(summary) => (Some(summary), None),
        Err(err) => (None, Some(err)),
    }
}

fn run_guarded<E>(summarizer: &Summarizer<E>, document: &str, threshold: f64) -> Result<String>
where
    E: TfIdfEngine,
{
    panic::catch_unwind(AssertUnwindSafe(|| summarizer.summarize(document, threshold)))
        .unwrap_or_else(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "summarize panicked".to_string());
            warn!(%message, "summarize task panicked");
            Err(SummarizeError::TaskFailed(message))
        })
}

impl<E> Summarizer<E>
where
    E: TfIdfEngine + 'static,
{
    /// Summarize on the rayon pool and hand the outcome to `callback`
    ///
    /// The callback receives `(Some(summary), None)` on success and
    /// `(None, Some(error))` on failure.
    ///
    /// # Examples
    /// ```
    /// use std::sync::mpsc;
    /// use tfidf_summarizer::Summarizer;
    ///
    /// let (tx, rx) = mpsc::channel();
    /// Summarizer::new().summarize_with_callback("", 0.1, move |summary, error| {
    ///     tx.send((summary, error)).unwrap();
    /// });
    /// let (summary, error) = rx.recv().unwrap();
    /// assert!(summary.is_none());
    /// assert!(error.is_some());
    /// ```
    pub fn summarize_with_callback<D, F>(&self, document: D, threshold: f64, callback: F)
    where
        D: Into<String>,
        F: FnOnce(Option<String>, Option<SummarizeError>) + Send + 'static,
    {
        let summarizer = self.clone();
        let document = document.into();
        rayon::spawn(move || {
            let (summary, error) = into_parts(run_guarded(&summarizer, &document, threshold));
            callback(summary, error);
        });
    }

    /// Summarize on the rayon pool and await the outcome
    ///
    /// The returned future does not depend on a particular async runtime.
    pub async fn summarize_async<D>(&self, document: D, threshold: f64) -> Result<String>
    where
        D: Into<String>,
    {
        let (tx, rx) = oneshot::channel();
        self.summarize_with_callback(document, threshold, move |summary, error| {
            let result = match (summary, error) {
                (Some(summary), _) => Ok(summary),
                (None, Some(err)) => Err(err),
                (None, None) => Err(SummarizeError::TaskFailed("no outcome".to_string())),
            };
            // receiver gone means the caller stopped waiting
            let _ = tx.send(result);
        });
        rx.await
            .map_err(|_| SummarizeError::TaskFailed("summarize task dropped its result".to_string()))?
    }
}
