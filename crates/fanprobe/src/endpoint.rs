use core::{
    fmt,
    ops::{Deref, Range},
};
use std::sync::Arc;

/// An opaque probe target, usually a URL or `host:port` string.
///
/// The contents are never parsed or validated. Cloning is cheap: the string is
/// shared behind an [`Arc`], so the same endpoint can be handed to a worker
/// task and to a prober without copying.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint(Arc<str>);

impl Endpoint {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Endpoint {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A contiguous run of endpoints assigned to a single worker.
///
/// Partitions produced by [`crate::partition`] share one backing sequence and
/// only differ in the range they cover, so handing a partition to a spawned
/// task never copies the endpoint list.
#[derive(Clone, Debug)]
pub struct Partition {
    endpoints: Arc<[Endpoint]>,
    range: Range<usize>,
}

impl Partition {
    /// # Panics
    ///
    /// Panics if `range` is out of bounds for `endpoints`.
    pub(crate) fn new(endpoints: Arc<[Endpoint]>, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= endpoints.len(),
            "partition range {range:?} out of bounds for {} endpoints",
            endpoints.len()
        );
        Self { endpoints, range }
    }

    /// Position of the first endpoint of this partition in the original
    /// sequence.
    pub const fn offset(&self) -> usize {
        self.range.start
    }
}

impl Deref for Partition {
    type Target = [Endpoint];

    fn deref(&self) -> &Self::Target {
        &self.endpoints[self.range.clone()]
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for Partition {}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Endpoint;
    type IntoIter = core::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
