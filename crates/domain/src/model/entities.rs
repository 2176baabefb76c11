pub mod word_cloud;

pub use word_cloud::WordCloud;
