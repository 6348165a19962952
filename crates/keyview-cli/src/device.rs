//! Hardware device seam
//!
//! Keys held on a device are shown on the device screen so the user can
//! compare them with what the terminal prints. The transport itself lives
//! outside this crate; implementations plug in through [`AddressVerifier`].

use thiserror::Error;

use keyview_core::{DerivationPath, PublicKey};

/// Errors reported by a device
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no hardware device available to verify the address")]
    NotConnected,

    #[error("device rejected the request: {0}")]
    Rejected(String),

    #[error("the key's pubkey does not match the one retrieved from the device")]
    KeyMismatch,
}

/// Something that can display an account address on a hardware device
pub trait AddressVerifier {
    /// Public key the device derives at `path`
    fn public_key(&self, path: &DerivationPath) -> Result<PublicKey, DeviceError>;

    /// Show the address of the key at `path` on the device, encoded with `hrp`
    fn show_address(&self, path: &DerivationPath, hrp: &str) -> Result<(), DeviceError>;
}
