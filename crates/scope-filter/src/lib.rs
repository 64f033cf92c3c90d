mod cache;
pub mod config;
mod error;
pub mod operations;
pub mod providers;
pub mod traits;

#[cfg(test)]
pub(crate) mod mocks;

pub use config::{DEFAULT_MAX_CONCURRENCY, FilterConfig, MAX_CONCURRENCY_ENV};
pub use error::{FilterError, Result};
