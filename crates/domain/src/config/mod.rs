pub mod aws;
pub mod errors;
pub mod logging;
pub mod root;
pub mod tags;

pub use aws::AwsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use tags::TagsConfig;
