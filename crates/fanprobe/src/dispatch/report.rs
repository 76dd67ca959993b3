use crate::{Endpoint, ProbeError};

/// One failed probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeFailure {
    pub endpoint: Endpoint,
    /// Position of the endpoint in the full, unpartitioned sequence.
    pub index: usize,
    pub error: ProbeError,
}

/// What a single worker did with its partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Number of endpoints in the worker's partition.
    pub assigned: usize,
    /// Number of probes started. Includes a probe that panicked.
    pub probed: usize,
    /// Endpoints left untouched because the run was cancelled.
    pub skipped: usize,
    pub failures: Vec<ProbeFailure>,
    /// A probe panicked and the worker stopped there. `probed` includes the
    /// panicking probe; later endpoints are neither probed nor skipped.
    pub panicked: bool,
}

impl WorkerReport {
    pub(crate) const fn new(worker_id: usize, assigned: usize) -> Self {
        Self {
            worker_id,
            assigned,
            probed: 0,
            skipped: 0,
            failures: Vec::new(),
            panicked: false,
        }
    }

    /// Report for a task that never returned its own report.
    pub(crate) const fn panicked(worker_id: usize, assigned: usize) -> Self {
        let mut report = Self::new(worker_id, assigned);
        report.panicked = true;
        report
    }

    pub fn is_success(&self) -> bool {
        !self.panicked && self.failures.is_empty()
    }
}

/// Aggregated outcome of a dispatch, available once every worker has
/// finished.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// One entry per launched worker, ordered by partition.
    pub workers: Vec<WorkerReport>,
}

impl DispatchReport {
    pub fn workers_launched(&self) -> usize {
        self.workers.len()
    }

    pub fn probed(&self) -> usize {
        self.workers.iter().map(|w| w.probed).sum()
    }

    pub fn skipped(&self) -> usize {
        self.workers.iter().map(|w| w.skipped).sum()
    }

    /// All failed probes, ordered by position in the original sequence.
    pub fn failures(&self) -> impl Iterator<Item = &ProbeFailure> {
        self.workers.iter().flat_map(|w| w.failures.iter())
    }

    pub fn failure_count(&self) -> usize {
        self.workers.iter().map(|w| w.failures.len()).sum()
    }

    pub fn panicked_workers(&self) -> impl Iterator<Item = &WorkerReport> {
        self.workers.iter().filter(|w| w.panicked)
    }

    /// True when no probe failed and no worker panicked. A cancelled run with
    /// no failures still counts as successful.
    pub fn is_success(&self) -> bool {
        self.workers.iter().all(WorkerReport::is_success)
    }
}
