//! Request extractors that turn malformed input into 400 responses

pub mod id;
pub mod json;

pub use id::ItemId;
pub use json::JsonBody;
