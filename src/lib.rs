pub mod author;
pub mod block;
pub mod collection;
pub mod config;
pub mod errors;
pub mod loader;
pub mod logger;
pub mod paginator;
pub mod post;
mod test_data;
