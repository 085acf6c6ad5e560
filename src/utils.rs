pub mod normalize;
pub mod rank_words;
pub mod summarize;

pub use normalize::{normalize, split_line};
pub use rank_words::{rank_words, top_words};
pub use summarize::summarize;
