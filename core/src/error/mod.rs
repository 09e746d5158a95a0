#[allow(clippy::module_inception)]
pub mod error;
pub mod api;
pub mod config;
pub mod engine;
pub mod report;

pub use api::ApiError;
pub use config::ConfigError;
pub use engine::EngineError;
pub use error::CliError;
pub use report::ReportError;
