pub mod client;
pub mod error;

pub use client::SearchClient;
pub use error::{Error, Result};
