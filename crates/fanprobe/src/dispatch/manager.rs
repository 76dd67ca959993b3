//! Fan-out/join over a partition set.
//!
//! [`Dispatcher`] launches one Tokio task per [`Partition`], each running
//! [`worker_loop`] against a shared [`Prober`], and returns only once every
//! task has finished. Workers share no mutable state; their individual
//! [`WorkerReport`]s are gathered after the join into a [`DispatchReport`].
//!
//! Cancellation is cooperative: a shared [`CancellationToken`] is checked by
//! each worker between probes. Cancelling never shortens the join itself,
//! the dispatcher still waits for every worker to notice and return.

use crate::{
    Partition, Prober,
    dispatch::{
        report::{DispatchReport, WorkerReport},
        worker::worker_loop,
    },
};
use futures::future::join_all;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs a [`Prober`] over a set of partitions, one concurrent worker per
/// partition.
pub struct Dispatcher<P> {
    prober: Arc<P>,
    cancel: CancellationToken,
}

impl<P: Prober> Dispatcher<P> {
    pub fn new(prober: P) -> Self {
        Self::with_cancellation(prober, CancellationToken::new())
    }

    /// Builds a dispatcher whose workers stop early once `cancel` fires.
    pub fn with_cancellation(prober: P, cancel: CancellationToken) -> Self {
        Self {
            prober: Arc::new(prober),
            cancel,
        }
    }

    /// Token observed by every worker between probes.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Probes every endpoint of every partition and waits for all workers.
    ///
    /// Exactly one task is spawned per partition; an empty partition set
    /// spawns nothing and returns an empty report immediately. Within a
    /// partition endpoints are probed sequentially in order; across partitions
    /// there is no ordering.
    ///
    /// This never fails as a whole. Failed probes and panicked workers are
    /// listed in the returned [`DispatchReport`], and a panic in one worker
    /// does not stop the others. A task that fails to join without reporting
    /// is recorded as panicked with no probes counted.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn dispatch(&self, partitions: Vec<Partition>) -> DispatchReport {
        #[cfg(feature = "tracing")]
        tracing::debug!("Dispatching {} partitions", partitions.len());

        let mut assigned = Vec::with_capacity(partitions.len());
        let mut handles = Vec::with_capacity(partitions.len());

        for (worker_id, partition) in partitions.into_iter().enumerate() {
            assigned.push(partition.len());
            handles.push(tokio::spawn(worker_loop(
                worker_id,
                partition,
                Arc::clone(&self.prober),
                self.cancel.clone(),
            )));
        }

        let workers = join_all(handles)
            .await
            .into_iter()
            .zip(assigned)
            .enumerate()
            .map(|(worker_id, (joined, assigned))| match joined {
                Ok(report) => report,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Worker {worker_id} aborted: {_e}");

                    WorkerReport::panicked(worker_id, assigned)
                }
            })
            .collect();

        let report = DispatchReport { workers };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Dispatch complete: {} workers, {} probed, {} failed, {} skipped",
            report.workers_launched(),
            report.probed(),
            report.failure_count(),
            report.skipped()
        );

        report
    }
}
