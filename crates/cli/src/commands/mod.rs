//! CLI command implementations.

pub mod paths;
pub mod resolve;
