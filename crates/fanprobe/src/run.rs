use crate::{DispatchReport, Dispatcher, EndpointSource, Error, Prober, Result, partition};

/// Reads `source`, splits it into at most `max_workers` partitions and probes
/// every endpoint through `dispatcher`.
///
/// The worker bound is checked before the source is read, and a source error
/// aborts the run before any worker is launched.
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`] if `max_workers` is zero.
/// - [`Error::Io`] if the source cannot be read.
///
/// Probe failures are not errors; inspect the returned [`DispatchReport`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(source, dispatcher)))]
pub async fn run<S, P>(
    source: &S,
    dispatcher: &Dispatcher<P>,
    max_workers: usize,
) -> Result<DispatchReport>
where
    S: EndpointSource,
    P: Prober,
{
    if max_workers == 0 {
        return Err(Error::InvalidConfiguration {
            reason: "max_workers must be greater than 0".to_string(),
        });
    }

    let endpoints = source.read().await?;
    let partitions = partition(endpoints, max_workers)?;

    Ok(dispatcher.dispatch(partitions).await)
}
