//! gallerist - personal archive maintenance library
//!
//! Shared modules for the gallerist CLI tool.

pub mod config;
pub mod errors;
pub mod filters;
pub mod indexer;
pub mod mover;
