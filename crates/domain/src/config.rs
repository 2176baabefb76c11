pub mod aggregates;
pub mod value_objects;

pub use aggregates::Config;
pub use value_objects::{CountRange, Prefix};
