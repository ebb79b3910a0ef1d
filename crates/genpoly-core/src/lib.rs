//! # genpoly
//!
//! Builds polymer topologies from a list of 3-D monomer positions.
//!
//! Given the coordinates of successive monomer centers, the library orients every
//! monomer along its chain, optionally twists it into a helix, and expands a set of
//! connection templates into the bonds, angles, dihedrals and impropers linking the
//! monomers together. Chains may be open, connected end-to-end, or fully circular,
//! and a single coordinate list can be cut into several independent chains.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** Data models (templates, chains, assembled
//!   records), geometry helpers, and I/O: plain-text input readers and the
//!   [`TopologyWriter`](core::io::traits::TopologyWriter) interface with its
//!   moltemplate renderer.
//!
//! - **[`engine`]: The Logic Core.** Configuration and validation, chain
//!   segmentation, direction fields, and connectivity emission.
//!
//! - **[`workflows`]: The Public API.** [`workflows::assemble::run`] takes coordinates
//!   and a [`PolymerConfig`](engine::config::PolymerConfig) and returns a finished
//!   [`PolymerAssembly`](core::models::assembly::PolymerAssembly).

pub mod core;
pub mod engine;
pub mod workflows;
