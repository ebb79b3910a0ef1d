//! # Core Module
//!
//! Stateless building blocks shared by the engine and by callers.
//!
//! - **Data Models** ([`models`]) - Connection templates, chains, and assembled placement/connectivity records
//! - **File I/O** ([`io`]) - Coordinate, sequence and cut-point readers; topology writers
//! - **Template Libraries** ([`templates`]) - Connection templates loaded from TOML files
//! - **Utilities** ([`utils`]) - Periodic index wrapping and rotation geometry

pub mod io;
pub mod models;
pub mod templates;
pub mod utils;
