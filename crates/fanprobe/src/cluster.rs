//! Cluster connection acquisition.
//!
//! Nothing in the dispatch path uses a cluster connection. It exists for
//! probers that need cluster context: build the client up front and move it
//! into the prober, e.g. via [`crate::from_fn`].

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A loaded cluster connection configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterClient {
    kubeconfig: PathBuf,
    raw_config: String,
}

impl ClusterClient {
    /// Path of the kubeconfig this client was built from.
    pub fn kubeconfig(&self) -> &Path {
        &self.kubeconfig
    }

    /// Unparsed kubeconfig contents.
    pub fn raw_config(&self) -> &str {
        &self.raw_config
    }
}

/// Produces a [`ClusterClient`].
pub trait ClusterClientProvider {
    /// # Errors
    ///
    /// Returns an error if the connection configuration cannot be located or
    /// read.
    fn connect(&self) -> Result<ClusterClient>;
}

/// Loads a kubeconfig file, by default `$HOME/.kube/config`.
#[derive(Clone, Debug)]
pub struct KubeconfigProvider {
    path: Option<PathBuf>,
}

impl KubeconfigProvider {
    /// Resolves `.kube/config` under the user's home directory at connect
    /// time.
    pub const fn from_home() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The kubeconfig location this provider would read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KubeconfigNotFound`] when no explicit path was given
    /// and neither `HOME` nor `USERPROFILE` is set.
    pub fn resolve(&self) -> Result<PathBuf> {
        self.resolve_with(home_dir())
    }

    fn resolve_with(&self, home: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }

        home.map(|home| home.join(".kube").join("config"))
            .ok_or(Error::KubeconfigNotFound)
    }
}

impl Default for KubeconfigProvider {
    fn default() -> Self {
        Self::from_home()
    }
}

impl ClusterClientProvider for KubeconfigProvider {
    fn connect(&self) -> Result<ClusterClient> {
        let kubeconfig = self.resolve()?;
        let raw_config =
            std::fs::read_to_string(&kubeconfig).map_err(|e| Error::io(&kubeconfig, e))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Loaded kubeconfig from {}", kubeconfig.display());

        Ok(ClusterClient {
            kubeconfig,
            raw_config,
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(std::env::var_os)
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}
