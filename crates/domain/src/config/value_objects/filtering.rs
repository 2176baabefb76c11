pub mod prefix;
pub mod range;

pub use prefix::Prefix;
pub use range::CountRange;
