//! Configuration for the vanguard client.
//!
//! Runtime-configurable settings persisted to disk as RON, with CLI
//! overrides via clap. Action bindings are compiled-in and deliberately not
//! part of this config; only device tuning (gamepad slot, stick deadzone)
//! and shell settings live here.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, InputConfig, WindowConfig};
pub use error::ConfigError;
