//! Flag compatibility rules for `keyview show`
//!
//! The rules run in table order and the first one that fails decides the
//! error. Everything except the stored-on-device check is decided from the
//! flags alone, before the key store is touched.

use tracing::debug;

use keyview_core::{AccountKind, KeyRecord, KeyType, ThresholdError};

use crate::error::{FlagConflict, Result, ShowError};

/// The flags the rules look at
#[derive(Debug, Clone, Copy)]
pub struct FlagSet<'a> {
    pub num_identifiers: usize,
    pub device: bool,
    pub pubkey_only: bool,
    pub bech_prefix: &'a str,
    pub multisig_threshold: Option<i64>,
}

pub type Rule = fn(&FlagSet<'_>) -> Result<()>;

/// Rules checked before resolution, in precedence order
pub const PRE_RESOLUTION_RULES: [(&str, Rule); 4] = [
    ("multisig-threshold", threshold_is_positive),
    ("bech-prefix", prefix_is_known),
    ("device-pubkey", device_not_for_pubkeys),
    ("device-account", device_only_for_accounts),
];

/// Run every pre-resolution rule and return the selected account kind
pub fn check_flags(flags: &FlagSet<'_>) -> Result<AccountKind> {
    for (name, rule) in PRE_RESOLUTION_RULES {
        if let Err(e) = rule(flags) {
            debug!(rule = name, "Flag rule rejected the command");
            return Err(e);
        }
    }
    parse_prefix(flags.bech_prefix)
}

/// Post-resolution pass: the device flag needs a device-backed key
pub fn check_record(device: bool, record: &KeyRecord) -> Result<()> {
    if !device {
        return Ok(());
    }
    match record.key_type() {
        KeyType::Ledger => Ok(()),
        KeyType::Local | KeyType::Offline | KeyType::Multi => {
            Err(FlagConflict::DeviceWithoutDeviceKey.into())
        }
    }
}

fn parse_prefix(token: &str) -> Result<AccountKind> {
    token
        .parse()
        .map_err(|_| ShowError::InvalidPrefix(token.to_string()))
}

fn threshold_is_positive(flags: &FlagSet<'_>) -> Result<()> {
    if flags.num_identifiers > 1 && !matches!(flags.multisig_threshold, Some(k) if k > 0) {
        return Err(ThresholdError::NotPositive.into());
    }
    Ok(())
}

fn prefix_is_known(flags: &FlagSet<'_>) -> Result<()> {
    parse_prefix(flags.bech_prefix).map(|_| ())
}

fn device_not_for_pubkeys(flags: &FlagSet<'_>) -> Result<()> {
    if flags.device && flags.pubkey_only {
        return Err(FlagConflict::DeviceWithPubkey.into());
    }
    Ok(())
}

fn device_only_for_accounts(flags: &FlagSet<'_>) -> Result<()> {
    if flags.device && parse_prefix(flags.bech_prefix)? != AccountKind::Account {
        return Err(FlagConflict::DeviceWithNonAccountPrefix.into());
    }
    Ok(())
}
