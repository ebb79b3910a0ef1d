//! # Engine Module
//!
//! The algorithmic core of a polymer build: configuration, the chain segmenter,
//! the direction-field builder and the connectivity emitter, together with the
//! error and progress types the workflow reports through.
//!
//! - **Configuration** ([`config`]) - Build settings, the topology tri-state and validation
//! - **Segmentation** ([`segmenter`]) - Splitting coordinates into independent chains at cut points
//! - **Directions** ([`directions`]) - Unit direction per monomer from its neighbors
//! - **Connectivity** ([`connectivity`]) - Template expansion into bonds, angles, dihedrals and impropers
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Configuration, input and geometry failures

pub mod config;
pub mod connectivity;
pub mod directions;
pub mod error;
pub mod progress;
pub mod segmenter;
