//! Property-based tests for keyview-core using proptest
//!
//! These tests verify invariants that should hold for all valid inputs.

use proptest::prelude::*;
use keyview_core::{
    aggregate, validate_threshold, AccountKind, Address, Bech32Config, Ed25519PublicKey,
    KeyRecord, LegacyAminoPubKey, PublicKey, Secp256k1PublicKey,
};

// ============================================
// Strategies
// ============================================

fn arb_secp256k1_key() -> impl Strategy<Value = PublicKey> {
    "[a-z]{1,16}".prop_map(|secret| {
        Secp256k1PublicKey::from_secret(secret.as_bytes())
            .unwrap()
            .into()
    })
}

fn arb_ed25519_key() -> impl Strategy<Value = PublicKey> {
    any::<[u8; 32]>().prop_map(|bytes| Ed25519PublicKey::new(bytes).into())
}

fn arb_public_key() -> impl Strategy<Value = PublicKey> {
    prop_oneof![arb_secp256k1_key(), arb_ed25519_key()]
}

fn arb_account_kind() -> impl Strategy<Value = AccountKind> {
    prop_oneof![
        Just(AccountKind::Account),
        Just(AccountKind::Validator),
        Just(AccountKind::Consensus),
    ]
}

// ============================================
// Threshold Properties
// ============================================

proptest! {
    #[test]
    fn threshold_valid_iff_between_one_and_n(k in -5i64..40, n in 0usize..32) {
        let valid = k >= 1 && (k as usize) <= n;
        prop_assert_eq!(validate_threshold(k, n).is_ok(), valid);
    }

    #[test]
    fn valid_threshold_is_returned_unchanged(n in 1usize..32, pick in any::<prop::sample::Index>()) {
        let k = pick.index(n) as i64 + 1;
        prop_assert_eq!(validate_threshold(k, n).unwrap() as i64, k);
    }
}

// ============================================
// Multisig Properties
// ============================================

proptest! {
    #[test]
    fn aggregation_is_deterministic(
        keys in prop::collection::vec(arb_public_key(), 2..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let threshold = pick.index(keys.len()) as i64 + 1;
        let first = LegacyAminoPubKey::new(threshold, keys.clone()).unwrap();
        let second = LegacyAminoPubKey::new(threshold, keys).unwrap();

        prop_assert_eq!(first.amino_bytes(), second.amino_bytes());
        prop_assert_eq!(first.address(), second.address());
    }

    #[test]
    fn swapping_distinct_members_changes_address(a in arb_public_key(), b in arb_public_key()) {
        prop_assume!(a != b);
        let ab = LegacyAminoPubKey::new(2, vec![a.clone(), b.clone()]).unwrap();
        let ba = LegacyAminoPubKey::new(2, vec![b, a]).unwrap();
        prop_assert_ne!(ab.address(), ba.address());
    }

    #[test]
    fn threshold_changes_address(keys in prop::collection::vec(arb_public_key(), 2..6)) {
        let one = LegacyAminoPubKey::new(1, keys.clone()).unwrap();
        let all = LegacyAminoPubKey::new(keys.len() as i64, keys).unwrap();
        prop_assert_ne!(one.address(), all.address());
    }

    #[test]
    fn aggregate_record_matches_raw_key(keys in prop::collection::vec(arb_secp256k1_key(), 2..5)) {
        let records: Vec<KeyRecord> = keys
            .iter()
            .enumerate()
            .map(|(i, key)| KeyRecord::offline(format!("k{}", i), key.clone()))
            .collect();
        let record = aggregate(2, &records).unwrap();
        let raw = LegacyAminoPubKey::new(2, keys).unwrap();
        prop_assert_eq!(record.address(), raw.address());
    }
}

// ============================================
// Bech32 Properties
// ============================================

proptest! {
    #[test]
    fn account_addresses_decode_back(bytes in any::<[u8; 20]>()) {
        let config = Bech32Config::default();
        let address = Address::new(bytes);
        let encoded = config.encode_address(AccountKind::Account, &address).unwrap();
        prop_assert_eq!(config.decode_account_address(&encoded).unwrap(), address);
    }

    #[test]
    fn only_account_hrp_decodes_as_account(bytes in any::<[u8; 20]>(), kind in arb_account_kind()) {
        let config = Bech32Config::default();
        let encoded = config.encode_address(kind, &Address::new(bytes)).unwrap();
        prop_assert_eq!(
            config.decode_account_address(&encoded).is_ok(),
            kind == AccountKind::Account
        );
    }
}
