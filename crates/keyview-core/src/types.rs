//! Core newtypes and serde helpers

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Length of a derived account address in bytes
pub const ADDRESS_LEN: usize = 20;

/// Account address (20 bytes) derived from a public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Create a new Address from bytes
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the address bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Upper-case hex, the form used outside bech32
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parse exactly 40 hex digits (either case)
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| Error::InvalidAddress(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            Error::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde helper for 32-byte arrays as hex strings
pub mod hex_bytes_32 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&s, &mut bytes).map_err(serde::de::Error::custom)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_hex_is_upper_case() {
        let addr = Address::new([0xab; ADDRESS_LEN]);
        assert_eq!(addr.to_hex(), "AB".repeat(ADDRESS_LEN));
        assert_eq!(addr.to_string(), addr.to_hex());
    }

    #[test]
    fn test_address_from_hex_accepts_lower_case() {
        let addr: Address = "d3923267fa8a3dd367bb768fa8bdc8ff7f89da3f".parse().unwrap();
        assert_eq!(addr.to_hex(), "D3923267FA8A3DD367BB768FA8BDC8FF7F89DA3F");
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        assert!(Address::from_hex("abcd").is_err());
        assert!(Address::try_from(&[0u8; 19][..]).is_err());
        assert!(Address::try_from(&[0u8; 20][..]).is_ok());
    }
}
