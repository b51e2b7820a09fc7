//! Indexed fan-out/join

use futures::stream::{FuturesUnordered, StreamExt};
use std::fmt::Display;
use std::future::Future;
use tracing::debug;

/// Run every future concurrently and collect the outputs by input position.
///
/// All futures run to completion before this returns; a failure does not
/// cancel its siblings. If any failed, the first failure to complete is
/// returned and every successful output is discarded.
pub async fn join_indexed<I, F, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut pending: FuturesUnordered<_> = futures
        .into_iter()
        .enumerate()
        .map(|(index, future)| async move { (index, future.await) })
        .collect();

    let mut slots: Vec<Option<T>> = Vec::with_capacity(pending.len());
    slots.resize_with(pending.len(), || None);
    let mut first_error: Option<E> = None;

    while let Some((index, result)) = pending.next().await {
        match result {
            Ok(value) => slots[index] = Some(value),
            Err(e) if first_error.is_none() => first_error = Some(e),
            Err(e) => debug!("Dropping later sibling error at {}: {}", index, e),
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(slots.into_iter().flatten().collect()),
    }
}
