//! keyview CLI - inspect stored keys and multisig addresses
//!
//! This crate provides the `keyview show` command: it resolves key names or
//! addresses against a key store, optionally aggregates several keys into a
//! K-of-N multisig key, and renders the result with bech32 prefixes.

pub mod commands;
pub mod config;
pub mod device;
pub mod error;
pub mod gate;
pub mod output;
pub mod resolve;
pub mod show;

pub use commands::{run, Cli, Commands};
pub use config::{ClientConfig, KeyringBackend, OutputFormat};
pub use device::{AddressVerifier, DeviceError};
pub use error::{CliError, ConfigError, FlagConflict, ShowError};
pub use show::{ShowArgs, ShowCommand};
