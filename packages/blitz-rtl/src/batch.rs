//! Batch processing
//!
//! One result per input; a failing item never affects its neighbours.
//! Synchronous batches run on scoped worker threads sized to the
//! available cores, the async variant hands each item to tokio's blocking
//! pool.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::analysis::{analyze, TextDirectionResult};
use crate::bidi::{process, BidiOptions, BidiProcessingResult};
use crate::error::{RtlError, RtlResult};

/// Analyze every text independently
pub fn analyze_batch<S>(texts: &[S], language_hint: Option<&str>) -> Vec<RtlResult<TextDirectionResult>>
where
    S: AsRef<str> + Sync,
{
    run_parallel(texts, |text| analyze(text.as_ref(), language_hint))
}

/// Process every text independently with the same options
pub fn process_batch<S>(texts: &[S], options: &BidiOptions) -> Vec<RtlResult<BidiProcessingResult>>
where
    S: AsRef<str> + Sync,
{
    run_parallel(texts, |text| process(text.as_ref(), options))
}

/// Process texts on the tokio blocking pool
///
/// Must be awaited inside a tokio runtime. A task that fails to join
/// yields `ProcessingError` for its item only.
pub async fn process_batch_async(
    texts: Vec<String>,
    options: BidiOptions,
) -> Vec<RtlResult<BidiProcessingResult>> {
    let options = Arc::new(options);
    let handles: Vec<_> = texts
        .into_iter()
        .map(|text| {
            let options = Arc::clone(&options);
            tokio::task::spawn_blocking(move || process(&text, &options))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.unwrap_or_else(|err| {
            Err(RtlError::ProcessingError(format!(
                "blocking task failed: {}",
                err
            )))
        }));
    }
    results
}

fn worker_count(items: usize) -> usize {
    std::thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(items)
        .max(1)
}

fn worker_panicked<R>() -> RtlResult<R> {
    Err(RtlError::ProcessingError(
        "batch worker thread panicked".to_string(),
    ))
}

fn run_parallel<T, R, F>(items: &[T], work: F) -> Vec<RtlResult<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> RtlResult<R> + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }

    let chunk_size = items.len().div_ceil(worker_count(items.len()));
    let work = &work;

    let outcome = crossbeam::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move |_| chunk.iter().map(work).collect::<Vec<_>>()))
            .collect();

        handles
            .into_iter()
            .zip(items.chunks(chunk_size))
            .flat_map(|(handle, chunk)| {
                handle
                    .join()
                    .unwrap_or_else(|_| chunk.iter().map(|_| worker_panicked()).collect())
            })
            .collect::<Vec<_>>()
    });

    log::trace!(
        "batch of {} items in chunks of {}",
        items.len(),
        chunk_size
    );

    outcome.unwrap_or_else(|_| items.iter().map(|_| worker_panicked()).collect())
}
