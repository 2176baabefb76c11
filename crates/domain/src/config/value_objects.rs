pub mod filtering;

pub use filtering::{CountRange, Prefix};
