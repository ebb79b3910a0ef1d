//! Provides input/output functionality for polymer builds.
//!
//! Inputs are plain-text coordinate, sequence and cut-point lists ([`raw`]); output
//! goes through the [`traits::TopologyWriter`] interface, with a moltemplate
//! renderer in [`lt`].

pub mod lt;
pub mod raw;
pub mod traits;
