use crate::{Endpoint, ProbeError};
use core::future::Future;
use std::io::Write;

/// The action performed against every endpoint.
///
/// A prober is shared by all workers of a dispatch, so it must be `Send +
/// Sync`. Each worker awaits one probe at a time; probes from different
/// workers run concurrently.
///
/// Returning `Err` marks that single endpoint as failed and the worker moves
/// on to the next one. Panicking aborts the calling worker only; see
/// [`crate::Dispatcher`].
pub trait Prober: Send + Sync + 'static {
    fn probe(&self, endpoint: &Endpoint) -> impl Future<Output = Result<(), ProbeError>> + Send;
}

/// Prints `Calling endpoint: <endpoint>` to stdout for every endpoint.
///
/// This is the stand-in used by the command line until a real network probe
/// is wired in. A failed write to stdout, such as a closed pipe, fails the
/// probe for that endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProber;

impl Prober for LogProber {
    async fn probe(&self, endpoint: &Endpoint) -> Result<(), ProbeError> {
        announce(&mut std::io::stdout().lock(), endpoint)
    }
}

fn announce(out: &mut impl Write, endpoint: &Endpoint) -> Result<(), ProbeError> {
    writeln!(out, "Calling endpoint: {endpoint}")?;
    Ok(())
}

/// A [`Prober`] backed by a closure. Built with [`from_fn`].
#[derive(Clone, Debug)]
pub struct FromFn<F> {
    f: F,
}

/// Builds a [`Prober`] from an async closure.
///
/// ```
/// use fanprobe::{Endpoint, ProbeError, from_fn};
///
/// let prober = from_fn(|endpoint: Endpoint| async move {
///     if endpoint.as_str().is_empty() {
///         return Err(ProbeError::new("empty endpoint"));
///     }
///     Ok(())
/// });
/// # let _ = prober;
/// ```
pub const fn from_fn<F, Fut>(f: F) -> FromFn<F>
where
    F: Fn(Endpoint) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ProbeError>> + Send,
{
    FromFn { f }
}

impl<F, Fut> Prober for FromFn<F>
where
    F: Fn(Endpoint) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ProbeError>> + Send,
{
    fn probe(&self, endpoint: &Endpoint) -> impl Future<Output = Result<(), ProbeError>> + Send {
        (self.f)(endpoint.clone())
    }
}
