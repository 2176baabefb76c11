//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`input`]: Resolving the user's input string into the text to analyse
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod input;
