use crate::{Endpoint, Error, Result};
use core::future::Future;
use std::path::{Path, PathBuf};

/// Supplies the ordered list of endpoints for a run.
///
/// A source is read exactly once per run, before any worker is started.
pub trait EndpointSource {
    /// Reads every endpoint in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the backing resource cannot be read.
    fn read(&self) -> impl Future<Output = Result<Vec<Endpoint>>> + Send;
}

/// Reads endpoints from a text file, one per line.
///
/// Line terminators (`\n` or `\r\n`) are stripped and nothing else is touched:
/// blank lines become empty endpoints and surrounding whitespace is kept. A
/// final newline does not produce a trailing empty endpoint, and an
/// unterminated last line loses one trailing `\r`.
///
/// The file must be valid UTF-8. A single undecodable line fails the whole
/// read with [`Error::Io`] rather than being probed as raw bytes.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EndpointSource for FileSource {
    async fn read(&self) -> Result<Vec<Endpoint>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;

        let endpoints: Vec<Endpoint> = split_lines(&contents).map(Endpoint::from).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!("Read {} endpoints from {}", endpoints.len(), self.path.display());

        Ok(endpoints)
    }
}

/// Splits on `\n` and drops one `\r` before each terminator or at end of
/// input.
fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.split_inclusive('\n').map(|line| {
        let line = line.strip_suffix('\n').unwrap_or(line);
        line.strip_suffix('\r').unwrap_or(line)
    })
}

/// An in-memory endpoint list.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    endpoints: Vec<Endpoint>,
}

impl MemorySource {
    pub fn new<I>(endpoints: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Endpoint>,
    {
        Self {
            endpoints: endpoints.into_iter().map(Into::into).collect(),
        }
    }
}

impl EndpointSource for MemorySource {
    async fn read(&self) -> Result<Vec<Endpoint>> {
        Ok(self.endpoints.clone())
    }
}
