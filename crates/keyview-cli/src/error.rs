//! Error types for the keyview CLI

use thiserror::Error;

use keyview_core::ThresholdError;

use crate::device::DeviceError;

/// Result type alias for the show command
pub type Result<T> = std::result::Result<T, ShowError>;

/// Device flag combinations that can never be honoured
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FlagConflict {
    #[error("the device flag (-d) can only be used for addresses not pubkeys")]
    DeviceWithPubkey,

    #[error("the device flag (-d) can only be used for accounts")]
    DeviceWithNonAccountPrefix,

    #[error("the device flag (-d) can only be used for accounts stored in devices")]
    DeviceWithoutDeviceKey,
}

/// Failures of `keyview show`
#[derive(Debug, Error)]
pub enum ShowError {
    /// Token is neither a known address nor a known name
    #[error("{token} is not a valid name or address: {reason}")]
    NotFound {
        token: String,
        reason: keyview_core::Error,
    },

    #[error("invalid Bech32 prefix encoding provided: {0}")]
    InvalidPrefix(String),

    #[error(transparent)]
    InvalidThreshold(#[from] ThresholdError),

    #[error(transparent)]
    FlagConflict(#[from] FlagConflict),

    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Key store failure other than a missing key
    #[error("Keyring error: {0}")]
    Keyring(keyview_core::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<keyview_core::Error> for ShowError {
    fn from(e: keyview_core::Error) -> Self {
        match e {
            keyview_core::Error::Threshold(t) => ShowError::InvalidThreshold(t),
            keyview_core::Error::InvalidPrefix(p) => ShowError::InvalidPrefix(p),
            other => ShowError::Keyring(other),
        }
    }
}

impl From<serde_json::Error> for ShowError {
    fn from(e: serde_json::Error) -> Self {
        ShowError::Render(e.to_string())
    }
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid bech32 prefix in config: {0}")]
    Prefix(keyview_core::Error),

    #[error("Cannot determine home directory; pass --home or set {0}")]
    NoHome(&'static str),
}

/// Anything the binary can fail with
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Show(#[from] ShowError),
}
