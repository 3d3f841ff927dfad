mod cache;
mod feed_error;
mod fetcher;
mod table;

pub use cache::FeedCache;
pub use feed_error::FeedError;
pub use fetcher::{FeedClient, FeedSource};
pub use table::parse_table;
