//! Name and address resolution
//!
//! A token is tried as an address first (bech32 with the account prefix, or
//! 40 hex digits) and only looked up by name when it does not decode. A stored
//! name that is itself a valid address can therefore only be reached through
//! the address it decodes to.

use tracing::debug;

use keyview_core::{prefix, Address, Bech32Config, Error, KeyRecord, Keyring};

use crate::error::{Result, ShowError};

const HEX_ADDRESS_LEN: usize = 40;

/// Reason given when a token is neither bech32 nor hex
pub const NOT_AN_ADDRESS: &str = "must provide bech32 or hex address";

/// Decode `token` as an account address
pub fn decode_address(token: &str, config: &Bech32Config) -> keyview_core::Result<Address> {
    if prefix::decode(token).is_ok() {
        return config.decode_account_address(token);
    }
    if token.len() == HEX_ADDRESS_LEN && token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Address::from_hex(token);
    }
    Err(Error::InvalidAddress(NOT_AN_ADDRESS.to_string()))
}

/// Find the record `token` refers to
pub fn resolve(keyring: &dyn Keyring, config: &Bech32Config, token: &str) -> Result<KeyRecord> {
    match decode_address(token, config) {
        Ok(address) => {
            debug!(token, address = %address, "Resolving by address");
            keyring.key_by_address(&address).map_err(|e| not_found(token, e))
        }
        Err(decode_err) => {
            debug!(token, "Not an address, resolving by name");
            keyring.key(token).map_err(|e| {
                if e.is_not_found() {
                    not_found(token, decode_err)
                } else {
                    ShowError::Keyring(e)
                }
            })
        }
    }
}

/// Resolve every token, stopping at the first failure
pub fn resolve_all(
    keyring: &dyn Keyring,
    config: &Bech32Config,
    tokens: &[String],
) -> Result<Vec<KeyRecord>> {
    tokens
        .iter()
        .map(|token| resolve(keyring, config, token))
        .collect()
}

fn not_found(token: &str, reason: Error) -> ShowError {
    if reason.is_not_found() || matches!(reason, Error::InvalidAddress(_)) {
        ShowError::NotFound {
            token: token.to_string(),
            reason,
        }
    } else {
        ShowError::Keyring(reason)
    }
}
