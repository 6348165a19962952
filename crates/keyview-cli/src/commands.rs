//! CLI command implementations

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::{resolve_home, ClientConfig, KeyringBackend};
use crate::error::CliError;
use crate::show::{ShowArgs, ShowCommand};

/// keyview - inspect stored keys and multisig addresses
#[derive(Parser, Debug)]
#[command(name = "keyview")]
#[command(about = "Inspect stored keys and multisig addresses")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the config and key store
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Key store backend
    #[arg(long = "keyring-backend", value_enum, global = true)]
    pub keyring_backend: Option<KeyringBackend>,

    /// Account bech32 prefix (validator and consensus prefixes derive from it)
    #[arg(long = "bech32-prefix", global = true)]
    pub bech32_prefix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show key info for the given name or address
    ///
    /// Given several keys, show the K-of-N multisig key they form, in the
    /// order given.
    Show(ShowArgs),
}

/// Run the CLI, returning what should be printed on success
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let home = resolve_home(cli.home.as_deref())?;
    let mut config = ClientConfig::load_or_default(&home)?;
    if let Some(backend) = cli.keyring_backend {
        config.keyring_backend = backend;
    }
    if let Some(prefix) = &cli.bech32_prefix {
        config.bech32_prefix = prefix.clone();
    }
    let bech32 = config.bech32()?;

    let keyring = config.keyring_backend.open(&home);
    info!(
        backend = keyring.backend(),
        home = %home.display(),
        "Opened key store"
    );

    match &cli.command {
        Commands::Show(args) => {
            let command =
                ShowCommand::new(keyring.as_ref(), &bech32).with_default_output(config.output);
            Ok(command.execute(args)?)
        }
    }
}
