pub mod analyzers;
pub mod config;
pub mod encoding;
pub mod error;
pub mod output;
pub mod parser;
pub mod stats;
