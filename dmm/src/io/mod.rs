//! File-backed inputs: tool configuration and batch request files.

pub mod batch;
pub mod config;
