//! Orchestration layer: wires the domain pieces into one resolution pass.

pub mod pipeline;

pub use pipeline::{Pipeline, Resolution};
