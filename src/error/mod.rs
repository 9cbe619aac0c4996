pub mod assessment;
pub mod config;
pub mod fetch;

pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use anyhow::anyhow;
pub use assessment::AssessmentError;
pub use assessment::Endpoint;
pub use config::ConfigError;
pub use fetch::FetchError;

// For consistent error handling with location info
#[macro_export]
macro_rules! err_with_loc {
    ($err:expr) => {
        anyhow::anyhow!($err).context(format!("at {}:{}", file!(), line!()))
    };
}
