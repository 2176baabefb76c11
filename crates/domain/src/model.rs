pub mod entities;

pub use entities::WordCloud;
