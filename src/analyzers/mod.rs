//! Group analysis: averaging, the risk model, and the end-to-end pipeline.

pub mod aggregate;
pub mod analyzer;
pub mod risk;
pub mod types;
pub mod utility;
