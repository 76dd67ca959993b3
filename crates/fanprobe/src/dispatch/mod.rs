//! Concurrent fan-out of partitions to probe workers.
//!
//! ## Structure
//!
//! - [`manager`] - [`Dispatcher`], which spawns one worker per partition and
//!   waits for all of them.
//! - [`worker`] - the per-partition probe loop.
//! - [`report`] - outcomes collected after the join.

mod manager;
mod report;
mod worker;

pub use manager::*;
pub use report::*;
