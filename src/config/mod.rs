#[cfg(feature = "cli")]
pub mod cli;
pub mod client_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use client_config::ClientConfig;
