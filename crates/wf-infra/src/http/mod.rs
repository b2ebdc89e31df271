//! REST adapter for the console backend.

mod client;
mod dto;
mod error;

pub use client::{HttpClientConfig, HttpConsoleClient};
pub use error::HttpClientError;
