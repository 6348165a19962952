//! Human-readable key records
//!
//! A [`KeyOutput`] is a key record with its address and public key rendered
//! as bech32 under the HRPs of one [`AccountKind`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keyring::{KeyRecord, KeyType};
use crate::prefix::{encode, AccountKind, Bech32Config};

/// Renders a record for one account kind
pub type BechKeyOutFn = fn(&KeyRecord, &Bech32Config) -> Result<KeyOutput>;

/// Display form of a key record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOutput {
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: KeyType,
    pub address: String,
    pub pubkey: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pubkeys: Vec<MultisigPubKeyOutput>,
}

/// One member of a multisig key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigPubKeyOutput {
    pub address: String,
    pub pubkey: String,
    pub weight: u32,
}

/// Render `record` with the HRPs of `kind`
pub fn mk_key_output(
    record: &KeyRecord,
    kind: AccountKind,
    config: &Bech32Config,
) -> Result<KeyOutput> {
    let public_key = record.public_key();
    let address = encode(&config.address_hrp(kind), record.address().as_bytes())?;
    let pubkey = encode(&config.pubkey_hrp(kind), &public_key.amino_bytes())?;

    let (threshold, pubkeys) = match public_key.as_multisig() {
        Some(multi) => {
            // Members are always shown as plain accounts
            let members = multi
                .public_keys()
                .iter()
                .map(|member| {
                    Ok(MultisigPubKeyOutput {
                        address: config.encode_address(AccountKind::Account, &member.address())?,
                        pubkey: encode(
                            &config.pubkey_hrp(AccountKind::Account),
                            &member.amino_bytes(),
                        )?,
                        weight: 1,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            (Some(multi.threshold()), members)
        }
        None => (None, Vec::new()),
    };

    Ok(KeyOutput {
        name: record.name().to_string(),
        key_type: record.key_type(),
        address,
        pubkey,
        threshold,
        pubkeys,
    })
}

/// Account address and pubkey
pub fn mk_acc_key_output(record: &KeyRecord, config: &Bech32Config) -> Result<KeyOutput> {
    mk_key_output(record, AccountKind::Account, config)
}

/// Validator operator address and pubkey
pub fn mk_val_key_output(record: &KeyRecord, config: &Bech32Config) -> Result<KeyOutput> {
    mk_key_output(record, AccountKind::Validator, config)
}

/// Validator consensus address and pubkey
pub fn mk_cons_key_output(record: &KeyRecord, config: &Bech32Config) -> Result<KeyOutput> {
    mk_key_output(record, AccountKind::Consensus, config)
}

/// The formatter for `kind`
pub fn formatter_for(kind: AccountKind) -> BechKeyOutFn {
    match kind {
        AccountKind::Account => mk_acc_key_output,
        AccountKind::Validator => mk_val_key_output,
        AccountKind::Consensus => mk_cons_key_output,
    }
}
