use crate::{
    Partition, Prober,
    dispatch::report::{ProbeFailure, WorkerReport},
};
use futures::FutureExt;
use std::{panic::AssertUnwindSafe, sync::Arc};
use tokio_util::sync::CancellationToken;

/// Probes every endpoint of `partition` in order, one at a time.
///
/// This function is designed to be spawned as a Tokio task, one per
/// partition. It owns its partition and shares nothing mutable with other
/// workers; everything it observed is returned in a [`WorkerReport`] once the
/// partition is exhausted.
///
/// # Arguments
///
/// - `worker_id`: Index of this worker's partition (used for logs/tracing).
/// - `partition`: The endpoints this worker is responsible for.
/// - `prober`: Shared probe implementation.
/// - `cancel`: Checked before every probe. Once cancelled, the rest of the
///   partition is recorded as skipped and the worker returns.
///
/// # Failures
///
/// - A probe returning `Err` is recorded and the loop continues.
/// - A probe that panics is caught here. The worker is marked panicked and
///   stops; endpoints after the panicking one are not probed and not counted
///   as skipped.
pub async fn worker_loop<P: Prober>(
    worker_id: usize,
    partition: Partition,
    prober: Arc<P>,
    cancel: CancellationToken,
) -> WorkerReport {
    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} started with {} endpoints", partition.len());

    let mut report = WorkerReport::new(worker_id, partition.len());

    for (position, endpoint) in partition.iter().enumerate() {
        if cancel.is_cancelled() {
            report.skipped = partition.len() - position;

            #[cfg(feature = "tracing")]
            tracing::debug!("Worker {worker_id} cancelled, skipping {} endpoints", report.skipped);
            break;
        }

        report.probed += 1;
        match AssertUnwindSafe(prober.probe(endpoint)).catch_unwind().await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Worker {worker_id} probe of {endpoint:?} failed: {error}");

                report.failures.push(ProbeFailure {
                    endpoint: endpoint.clone(),
                    index: partition.offset() + position,
                    error,
                });
            }
            Err(_payload) => {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "Worker {worker_id} panicked probing {endpoint:?}: {}",
                    panic_message(&*_payload)
                );

                report.panicked = true;
                break;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} stopped");

    report
}

#[cfg(feature = "tracing")]
fn panic_message(payload: &(dyn core::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
