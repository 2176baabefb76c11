//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: Resolve the input, build the word cloud, apply the count range
//! - [`dto`]: Report handed to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{ReportEntry, WordCloudReport};
pub use orchestrator::BuildWordCloud;
