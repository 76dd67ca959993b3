#![doc = include_str!("../README.md")]

mod cluster;
mod dispatch;
mod endpoint;
mod error;
mod partition;
mod prober;
mod run;
mod source;

pub use crate::cluster::*;
pub use crate::dispatch::*;
pub use crate::endpoint::*;
pub use crate::error::*;
pub use crate::partition::*;
pub use crate::prober::*;
pub use crate::run::*;
pub use crate::source::*;
