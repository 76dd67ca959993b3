use crate::{Endpoint, Error, Partition, Result};
use std::sync::Arc;

/// Worker bound used by the command line when none is configured.
pub const DEFAULT_MAX_WORKERS: usize = 20;

/// Splits `endpoints` into at most `max_workers` contiguous partitions.
///
/// The chunk size is `ceil(N / max_workers)`. Every partition except the last
/// holds exactly that many endpoints and the last holds the remainder, so the
/// number of partitions is `ceil(N / chunk_size)` and may be smaller than
/// `max_workers` when there are few endpoints. Concatenating the result in
/// order yields the input unchanged.
///
/// An empty input yields no partitions.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if `max_workers` is zero.
pub fn partition(
    endpoints: impl Into<Arc<[Endpoint]>>,
    max_workers: usize,
) -> Result<Vec<Partition>> {
    if max_workers == 0 {
        return Err(Error::InvalidConfiguration {
            reason: "max_workers must be greater than 0".to_string(),
        });
    }

    let endpoints = endpoints.into();
    let total = endpoints.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let chunk_size = total.div_ceil(max_workers);
    let partitions = (0..total)
        .step_by(chunk_size)
        .map(|start| {
            let end = (start + chunk_size).min(total);
            Partition::new(Arc::clone(&endpoints), start..end)
        })
        .collect();

    Ok(partitions)
}
