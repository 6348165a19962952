//! Public keys, amino encoding and address derivation

use k256::elliptic_curve::bigint::{ArrayEncoding, U256};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::Curve;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::multisig::LegacyAminoPubKey;
use crate::types::{hex_bytes_32, Address, ADDRESS_LEN};

/// Amino registration prefix of `tendermint/PubKeySecp256k1`
pub const SECP256K1_AMINO_PREFIX: [u8; 4] = [0xeb, 0x5a, 0xe9, 0x87];

/// Amino registration prefix of `tendermint/PubKeyEd25519`
pub const ED25519_AMINO_PREFIX: [u8; 4] = [0x16, 0x24, 0xde, 0x64];

/// Compressed secp256k1 public key (33 bytes)
///
/// Serialized as hex; deserializing checks the point is on the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Create from compressed SEC1 bytes, checking the point is on the curve
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self> {
        k256::PublicKey::from_sec1_bytes(&bytes)
            .map_err(|e| Error::InvalidPublicKey(format!("secp256k1: {}", e)))?;
        Ok(Self(bytes))
    }

    /// Create from hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; 33];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        Self::from_bytes(bytes)
    }

    /// Public key whose private scalar is `(SHA256(secret) mod (n - 1)) + 1`
    ///
    /// Deterministic, so it doubles as a fixture generator for tests. The
    /// scalar matches the Cosmos SDK's `GenPrivKeyFromSecret`.
    pub fn from_secret(secret: &[u8]) -> Result<Self> {
        let mut digest = sha256(secret);
        let order_minus_one = k256::Secp256k1::ORDER.wrapping_sub(&U256::ONE);
        let mut scalar = U256::from_be_slice(&digest);
        digest.zeroize();
        if scalar >= order_minus_one {
            scalar = scalar.wrapping_sub(&order_minus_one);
        }
        let mut bytes: [u8; 32] = scalar.wrapping_add(&U256::ONE).to_be_byte_array().into();
        let secret_key = k256::SecretKey::from_slice(&bytes);
        bytes.zeroize();
        let secret_key = secret_key.map_err(|e| Error::Crypto(e.to_string()))?;

        let encoded = secret_key.public_key().to_encoded_point(true);
        let bytes: [u8; 33] = encoded
            .as_bytes()
            .try_into()
            .map_err(|_| Error::Crypto("Failed to encode public key".to_string()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// RIPEMD160(SHA256(key))
    pub fn address(&self) -> Address {
        let sha = sha256(&self.0);
        let hash: [u8; ADDRESS_LEN] = Ripemd160::digest(sha).into();
        Address::new(hash)
    }
}

impl From<Secp256k1PublicKey> for String {
    fn from(key: Secp256k1PublicKey) -> Self {
        key.to_hex()
    }
}

impl TryFrom<String> for Secp256k1PublicKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

/// Ed25519 public key (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ed25519PublicKey(#[serde(with = "hex_bytes_32")] pub [u8; 32]);

impl Ed25519PublicKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// SHA256(key) truncated to 20 bytes
    pub fn address(&self) -> Address {
        truncated_sha256(&self.0)
    }
}

/// Any public key a key record can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PublicKey {
    Secp256k1 { key: Secp256k1PublicKey },
    Ed25519 { key: Ed25519PublicKey },
    Multisig(LegacyAminoPubKey),
}

impl PublicKey {
    /// Short algorithm name
    pub fn algorithm(&self) -> &'static str {
        match self {
            PublicKey::Secp256k1 { .. } => "secp256k1",
            PublicKey::Ed25519 { .. } => "ed25519",
            PublicKey::Multisig(_) => "multisig",
        }
    }

    /// Derive the 20-byte address for this key
    pub fn address(&self) -> Address {
        match self {
            PublicKey::Secp256k1 { key } => key.address(),
            PublicKey::Ed25519 { key } => key.address(),
            PublicKey::Multisig(multi) => multi.address(),
        }
    }

    /// Amino binary encoding, the payload of bech32 pubkey strings
    pub fn amino_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Secp256k1 { key } => {
                let mut out = Vec::with_capacity(4 + 1 + 33);
                out.extend_from_slice(&SECP256K1_AMINO_PREFIX);
                out.push(33);
                out.extend_from_slice(key.as_bytes());
                out
            }
            PublicKey::Ed25519 { key } => {
                let mut out = Vec::with_capacity(4 + 1 + 32);
                out.extend_from_slice(&ED25519_AMINO_PREFIX);
                out.push(32);
                out.extend_from_slice(key.as_bytes());
                out
            }
            PublicKey::Multisig(multi) => multi.amino_bytes(),
        }
    }

    /// Member keys if this is a multisig key
    pub fn as_multisig(&self) -> Option<&LegacyAminoPubKey> {
        match self {
            PublicKey::Multisig(multi) => Some(multi),
            _ => None,
        }
    }
}

impl From<Secp256k1PublicKey> for PublicKey {
    fn from(key: Secp256k1PublicKey) -> Self {
        PublicKey::Secp256k1 { key }
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        PublicKey::Ed25519 { key }
    }
}

impl From<LegacyAminoPubKey> for PublicKey {
    fn from(key: LegacyAminoPubKey) -> Self {
        PublicKey::Multisig(key)
    }
}

/// Hash data using SHA256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA256 truncated to an address
pub fn truncated_sha256(data: &[u8]) -> Address {
    let hash = sha256(data);
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes.copy_from_slice(&hash[..ADDRESS_LEN]);
    Address::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_secret_is_deterministic() {
        let a = Secp256k1PublicKey::from_secret(b"mySecret").unwrap();
        let b = Secp256k1PublicKey::from_secret(b"mySecret").unwrap();
        let c = Secp256k1PublicKey::from_secret(b"otherSecret").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.0[0] == 0x02 || a.0[0] == 0x03);
    }

    #[test]
    fn test_from_bytes_rejects_off_curve_point() {
        assert!(Secp256k1PublicKey::from_bytes([0x05; 33]).is_err());
    }

    #[test]
    fn test_from_secret_matches_cosmos_derivation() {
        // scalar = SHA256("mySecret") + 1, as GenPrivKeyFromSecret computes it
        let mut scalar = sha256(b"mySecret");
        for byte in scalar.iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;
            if !carry {
                break;
            }
        }
        let expected = k256::SecretKey::from_slice(&scalar)
            .unwrap()
            .public_key()
            .to_encoded_point(true);

        let key = Secp256k1PublicKey::from_secret(b"mySecret").unwrap();
        assert_eq!(&key.as_bytes()[..], expected.as_bytes());
    }

    #[test]
    fn test_deserialize_rejects_off_curve_point() {
        let json = serde_json::json!({ "type": "secp256k1", "key": hex::encode([0x05u8; 33]) });
        assert!(serde_json::from_value::<PublicKey>(json).is_err());

        let key = PublicKey::from(Secp256k1PublicKey::from_secret(b"valid").unwrap());
        let back: PublicKey = serde_json::from_value(serde_json::to_value(&key).unwrap()).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_secp256k1_amino_layout() {
        let key = Secp256k1PublicKey::from_secret(b"amino").unwrap();
        let bytes = PublicKey::from(key).amino_bytes();
        assert_eq!(bytes.len(), 38);
        assert_eq!(&bytes[..4], &SECP256K1_AMINO_PREFIX);
        assert_eq!(bytes[4], 0x21);
        assert_eq!(&bytes[5..], key.as_bytes());
    }

    #[test]
    fn test_ed25519_amino_layout_and_address() {
        let key = Ed25519PublicKey::new([7u8; 32]);
        let bytes = PublicKey::from(key).amino_bytes();
        assert_eq!(&bytes[..4], &ED25519_AMINO_PREFIX);
        assert_eq!(bytes[4], 0x20);
        assert_eq!(key.address().as_bytes()[..], sha256(&[7u8; 32])[..20]);
    }

    #[test]
    fn test_secp256k1_address_differs_from_plain_sha256() {
        let key = Secp256k1PublicKey::from_secret(b"addr").unwrap();
        assert_ne!(key.address(), truncated_sha256(key.as_bytes()));
    }

    #[test]
    fn test_public_key_json_is_tagged() {
        let key = PublicKey::from(Ed25519PublicKey::new([1u8; 32]));
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["type"], "ed25519");
        assert_eq!(json["key"], hex::encode([1u8; 32]));
        let back: PublicKey = serde_json::from_value(json).unwrap();
        assert_eq!(back, key);
    }
}
