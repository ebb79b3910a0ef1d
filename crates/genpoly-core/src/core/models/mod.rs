//! # Core Models Module
//!
//! Plain data types shared by the engine and the writers.
//!
//! - [`template`] - Connection templates and the interaction kinds they generate
//! - [`chain`] - A contiguous run of monomer coordinates
//! - [`assembly`] - Placement and connectivity records making up a finished polymer

pub mod assembly;
pub mod chain;
pub mod template;
