//! # Templates Module
//!
//! Loading of reusable connection-template collections from TOML files, so a
//! monomer's bond/angle/dihedral/improper pattern can be kept next to its
//! moltemplate definition instead of being spelled out on the command line.

pub mod library;
