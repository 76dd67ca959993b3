//! Error types for endpoint probing runs.
//!
//! [`Error`] covers everything that is fatal to a run: a bad worker count, an
//! unreadable endpoint source, or a missing kubeconfig. These are surfaced
//! before any worker is launched.
//!
//! Failures of individual probes are *not* represented here. A prober returns
//! a [`ProbeError`], which the dispatcher records in the
//! [`crate::DispatchReport`] instead of aborting the run.
//!
//! ## Error Cases
//! - `InvalidConfiguration`: the worker bound is zero.
//! - `Io`: a file backing an endpoint source or kubeconfig could not be read.
//! - `KubeconfigNotFound`: no home directory to resolve the default kubeconfig.

use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for fatal run failures.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A configuration value is outside its valid range.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A file could not be opened or decoded.
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The default kubeconfig location could not be resolved.
    #[error("Could not find kubeconfig: no home directory")]
    KubeconfigNotFound,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure reported by a single probe.
///
/// Probers are free to build this from whatever went wrong on their side; the
/// dispatcher only stores and logs it.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[error("{reason}")]
pub struct ProbeError {
    pub reason: String,
}

impl ProbeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}
