//! `keyview show`: display one key, or the multisig key of several

use clap::{ArgAction, Args};
use tracing::{debug, info};

use keyview_core::{aggregate, AccountKind, Bech32Config, KeyRecord, Keyring};

use crate::config::OutputFormat;
use crate::device::{AddressVerifier, DeviceError};
use crate::error::Result;
use crate::gate::{self, FlagSet};
use crate::output::{render, select_formatter, Rendering};
use crate::resolve::resolve_all;

/// Arguments of `keyview show`
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Key names or addresses; several keys show their multisig key
    #[arg(required = true, num_args = 1.., value_name = "NAME|ADDRESS")]
    pub keys: Vec<String>,

    /// Output the address only
    #[arg(
        short = 'a',
        long = "address",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub address: bool,

    /// Output the public key only
    #[arg(
        short = 'p',
        long = "pubkey",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub pubkey: bool,

    /// Bech32 prefix encoding for the key (acc|val|cons)
    #[arg(long = "bech", default_value = "acc")]
    pub bech: String,

    /// K out of N required signatures when several keys are given
    #[arg(
        long = "multisig-threshold",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub multisig_threshold: i64,

    /// Show the address on a hardware device
    #[arg(
        short = 'd',
        long = "device",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub device: bool,

    /// Output format for the full record
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ShowArgs {
    /// Arguments for the given keys with every flag at its default
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            address: false,
            pubkey: false,
            bech: AccountKind::Account.token().to_string(),
            multisig_threshold: 1,
            device: false,
            output: None,
        }
    }

    /// The subset of flags the compatibility rules inspect
    pub fn flag_set(&self) -> FlagSet<'_> {
        FlagSet {
            num_identifiers: self.keys.len(),
            device: self.device,
            pubkey_only: self.pubkey,
            bech_prefix: &self.bech,
            multisig_threshold: Some(self.multisig_threshold),
        }
    }
}

/// Runs `show` against one key store
pub struct ShowCommand<'a> {
    keyring: &'a dyn Keyring,
    bech32: &'a Bech32Config,
    verifier: Option<&'a dyn AddressVerifier>,
    default_output: OutputFormat,
}

impl<'a> ShowCommand<'a> {
    pub fn new(keyring: &'a dyn Keyring, bech32: &'a Bech32Config) -> Self {
        Self {
            keyring,
            bech32,
            verifier: None,
            default_output: OutputFormat::default(),
        }
    }

    /// Use `verifier` for `--device`
    pub fn with_verifier(mut self, verifier: &'a dyn AddressVerifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Format used when `--output` is not given
    pub fn with_default_output(mut self, output: OutputFormat) -> Self {
        self.default_output = output;
        self
    }

    /// Validate, resolve, aggregate and render; nothing is returned on failure
    pub fn execute(&self, args: &ShowArgs) -> Result<String> {
        let kind = gate::check_flags(&args.flag_set())?;

        let record = self.load_record(args)?;
        gate::check_record(args.device, &record)?;

        if args.device {
            self.verify_on_device(&record)?;
        }

        let formatter = select_formatter(&args.bech)?;
        let output = formatter(&record, self.bech32)?;
        debug!(name = record.name(), kind = %kind, "Rendering key");

        let rendering = Rendering::from_flags(
            args.address,
            args.pubkey,
            args.output.unwrap_or(self.default_output),
        );
        render(&output, rendering)
    }

    fn load_record(&self, args: &ShowArgs) -> Result<KeyRecord> {
        let mut records = resolve_all(self.keyring, self.bech32, &args.keys)?;
        if records.len() == 1 {
            return Ok(records.remove(0));
        }

        let record = aggregate(args.multisig_threshold, &records)?;
        info!(
            members = records.len(),
            threshold = args.multisig_threshold,
            address = %record.address(),
            "Built multisig key"
        );
        Ok(record)
    }

    /// The device must hold the stored key before it is asked to show it
    fn verify_on_device(&self, record: &KeyRecord) -> Result<()> {
        let verifier = self.verifier.ok_or(DeviceError::NotConnected)?;
        let path = record.path()?;

        if verifier.public_key(path)? != *record.public_key() {
            return Err(DeviceError::KeyMismatch.into());
        }

        let hrp = self.bech32.address_hrp(AccountKind::Account);
        info!(name = record.name(), path = %path, "Showing address on device");
        verifier.show_address(path, &hrp)?;
        Ok(())
    }
}
