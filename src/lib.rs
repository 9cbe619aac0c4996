pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod handler;
pub mod model;
pub mod pipeline;
pub mod tracing;
pub mod utils;

pub use engine::*;
pub use error::*;

#[cfg(test)]
pub mod test_utils;

pub use error::Result;
