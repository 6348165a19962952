//! Formatter selection and rendering

use keyview_core::output::formatter_for;
use keyview_core::{AccountKind, BechKeyOutFn, KeyOutput};

use crate::config::OutputFormat;
use crate::error::{Result, ShowError};

/// What a successful `show` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// The bech32 address alone
    Address,
    /// The bech32 public key alone
    PubKey,
    /// The whole record
    Info(OutputFormat),
}

impl Rendering {
    /// Address wins when both bare forms are requested
    pub fn from_flags(address_only: bool, pubkey_only: bool, format: OutputFormat) -> Self {
        if address_only {
            Rendering::Address
        } else if pubkey_only {
            Rendering::PubKey
        } else {
            Rendering::Info(format)
        }
    }
}

/// Map `acc` / `val` / `cons` to its formatter
pub fn select_formatter(token: &str) -> Result<BechKeyOutFn> {
    let kind: AccountKind = token
        .parse()
        .map_err(|_| ShowError::InvalidPrefix(token.to_string()))?;
    Ok(formatter_for(kind))
}

/// Render one key output
pub fn render(output: &KeyOutput, rendering: Rendering) -> Result<String> {
    match rendering {
        Rendering::Address => Ok(output.address.clone()),
        Rendering::PubKey => Ok(output.pubkey.clone()),
        Rendering::Info(OutputFormat::Text) => Ok(render_text(output)),
        Rendering::Info(OutputFormat::Json) => Ok(serde_json::to_string(output)?),
    }
}

/// YAML-style block, one list item per record
pub fn render_text(output: &KeyOutput) -> String {
    let mut lines = vec![
        format!("- name: {}", output.name),
        format!("  type: {}", output.key_type),
        format!("  address: {}", output.address),
        format!("  pubkey: {}", output.pubkey),
    ];
    if let Some(threshold) = output.threshold {
        lines.push(format!("  threshold: {}", threshold));
    }
    if !output.pubkeys.is_empty() {
        lines.push("  pubkeys:".to_string());
        for member in &output.pubkeys {
            lines.push(format!("  - address: {}", member.address));
            lines.push(format!("    pubkey: {}", member.pubkey));
            lines.push(format!("    weight: {}", member.weight));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyview_core::{aggregate, Bech32Config, KeyRecord, Secp256k1PublicKey};

    fn record(name: &str) -> KeyRecord {
        KeyRecord::local(name, Secp256k1PublicKey::from_secret(name.as_bytes()).unwrap())
    }

    #[test]
    fn test_select_formatter() {
        for token in ["acc", "val", "cons"] {
            assert!(select_formatter(token).is_ok(), "token {}", token);
        }
        for token in ["", "???", "ACC", "account"] {
            let err = select_formatter(token).err().unwrap();
            assert_eq!(
                err.to_string(),
                format!("invalid Bech32 prefix encoding provided: {}", token)
            );
        }
    }

    #[test]
    fn test_selected_formatter_uses_kind_hrp() {
        let config = Bech32Config::default();
        let alice = record("alice");
        let acc = select_formatter("acc").unwrap()(&alice, &config).unwrap();
        let cons = select_formatter("cons").unwrap()(&alice, &config).unwrap();
        assert!(acc.address.starts_with("cosmos1"));
        assert!(cons.address.starts_with("cosmosvalcons1"));
    }

    #[test]
    fn test_rendering_from_flags() {
        use OutputFormat::*;
        assert_eq!(Rendering::from_flags(true, false, Text), Rendering::Address);
        assert_eq!(Rendering::from_flags(false, true, Text), Rendering::PubKey);
        assert_eq!(Rendering::from_flags(true, true, Json), Rendering::Address);
        assert_eq!(Rendering::from_flags(false, false, Json), Rendering::Info(Json));
    }

    #[test]
    fn test_render_text_single() {
        let config = Bech32Config::default();
        let out = select_formatter("acc").unwrap()(&record("alice"), &config).unwrap();
        let text = render(&out, Rendering::Info(OutputFormat::Text)).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "- name: alice");
        assert_eq!(lines[1], "  type: local");
        assert_eq!(lines[2], format!("  address: {}", out.address));
        assert_eq!(lines[3], format!("  pubkey: {}", out.pubkey));
    }

    #[test]
    fn test_render_text_multisig() {
        let config = Bech32Config::default();
        let multi = aggregate(2, &[record("a"), record("b")]).unwrap();
        let out = select_formatter("acc").unwrap()(&multi, &config).unwrap();
        let text = render_text(&out);
        assert!(text.contains("  type: multi"));
        assert!(text.contains("  threshold: 2"));
        assert!(text.contains("  pubkeys:"));
        assert_eq!(text.matches("    weight: 1").count(), 2);
        assert!(!text.ends_with('\n'));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5 + 1 + 3 * 2);
        assert_eq!(lines[4], "  threshold: 2");
        assert_eq!(lines[5], "  pubkeys:");
        assert_eq!(lines[6], format!("  - address: {}", out.pubkeys[0].address));
    }

    #[test]
    fn test_render_json_and_bare_forms() {
        let config = Bech32Config::default();
        let out = select_formatter("val").unwrap()(&record("alice"), &config).unwrap();

        let json = render(&out, Rendering::Info(OutputFormat::Json)).unwrap();
        let parsed: KeyOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, out);

        assert_eq!(render(&out, Rendering::Address).unwrap(), out.address);
        assert_eq!(render(&out, Rendering::PubKey).unwrap(), out.pubkey);
    }
}
