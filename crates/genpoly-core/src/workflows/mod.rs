//! # Workflows Module
//!
//! High-level entry points tying the engine together.
//!
//! - **Assembly Workflow** ([`assemble`]) - From raw coordinates and settings to a
//!   complete [`PolymerAssembly`](crate::core::models::assembly::PolymerAssembly),
//!   ready for a topology writer.

pub mod assemble;
