//! Small numerical helpers shared by the engine: periodic index arithmetic and
//! vector/rotation geometry built on `nalgebra`.

pub mod geometry;
pub mod periodic;
