//! Concurrent gather for relationship lookups
//!
//! Relationship fields issue one upstream lookup per membership record. The
//! lookups run as independent Tokio tasks so the total latency is that of the
//! slowest lookup, and a task that panics only empties its own slot.

use std::future::Future;

use futures_util::future::join_all;

/// Run every lookup concurrently and collect the results in input order
///
/// Each slot is `None` when its lookup produced nothing or its task panicked.
/// Sibling tasks are never cancelled.
pub async fn gather<T, F>(lookups: impl IntoIterator<Item = F>) -> Vec<Option<T>>
where
    T: Send + 'static,
    F: Future<Output = Option<T>> + Send + 'static,
{
    let handles: Vec<_> = lookups.into_iter().map(tokio::spawn).collect();

    join_all(handles)
        .await
        .into_iter()
        .map(|joined| match joined {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, "Relationship lookup task failed");
                None
            }
        })
        .collect()
}

/// Like [`gather`], but drops the empty slots
pub async fn gather_present<T, F>(lookups: impl IntoIterator<Item = F>) -> Vec<T>
where
    T: Send + 'static,
    F: Future<Output = Option<T>> + Send + 'static,
{
    gather(lookups).await.into_iter().flatten().collect()
}
