//! Entities - Objects with identity

mod search;

pub use search::{SearchRequest, SearchResult};
