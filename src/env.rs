//! A module for parsing the environment variables and initializing the
//! [`Env`] struct.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http;
use anyhow::Context;
use clap::Parser;

use crate::{AggregatorContract, IVolumeAggregator};

/// Configuration options for the reporter.
///
/// The options can be set by environment variables or command line arguments.
#[derive(Debug, Parser)]
pub struct Env {
    /// The log level to use.
    #[clap(long, env, default_value = "INFO")]
    pub log_level: tracing::Level,

    /// The URL of the JSON-RPC HTTP endpoint to use.
    #[clap(long, env, default_value = "https://mainnet.base.org")]
    pub base_rpc_url: String,

    /// The private key used to sign report transactions.
    #[clap(long, env, default_value = "")]
    #[clap(hide_env_values = true, hide_default_value = true)]
    pub reporter_private_key: String,

    /// The address of the deployed VolumeAggregator contract.
    #[clap(long, env, default_value = "", hide_default_value = true)]
    pub contract_address: String,

    /// The URL of the volume API to fetch samples from.
    #[clap(long, env)]
    #[clap(default_value = "https://api.basescan.org/dex/aerodrome/volumes")]
    pub volume_api_url: String,

    /// The number of trailing days of volume data to request from the API.
    #[clap(long, env, default_value = "7")]
    pub days: u32,
}

impl Env {
    /// Read the configuration from the environment and set up logging.
    pub fn init() -> Self {
        dotenv::dotenv().ok();
        let env = Env::parse();
        let env_filter =
            format!("none,aerovolume={log_level}", log_level = &env.log_level);

        tracing_subscriber::fmt()
            .with_max_level(env.log_level)
            .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
            .init();

        env
    }

    /// Check that the credentials required for reporting are present.
    ///
    /// Both values default to empty strings so that a missing variable can
    /// be reported by name instead of failing deep inside key parsing.
    pub fn ensure_reporter_config(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.reporter_private_key.is_empty(),
            "REPORTER_PRIVATE_KEY is not set"
        );
        anyhow::ensure!(
            !self.contract_address.is_empty(),
            "CONTRACT_ADDRESS is not set"
        );

        Ok(())
    }

    /// Create an instance of the aggregator contract connected to the
    /// blockchain via the configured JSON-RPC HTTP URL, with transactions
    /// signed by the reporter key.
    pub fn connect_contract(
        &self,
    ) -> anyhow::Result<AggregatorContract<impl Provider<http::Http<http::Client>>>>
    {
        self.ensure_reporter_config()?;

        let signer: PrivateKeySigner = self
            .reporter_private_key
            .parse()
            .context("invalid REPORTER_PRIVATE_KEY")?;
        let wallet = EthereumWallet::from(signer);

        let rpc_url = self.base_rpc_url.parse()?;
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(rpc_url);

        let aggregator = self
            .contract_address
            .parse::<Address>()
            .context("invalid CONTRACT_ADDRESS")?;
        let aggregator = IVolumeAggregator::new(aggregator, provider);

        Ok(aggregator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_env() -> Env {
        Env {
            log_level: tracing::Level::INFO,
            base_rpc_url: "https://mainnet.base.org".to_string(),
            reporter_private_key:
                "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                    .to_string(),
            contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                .to_string(),
            volume_api_url: "https://api.basescan.org/dex/aerodrome/volumes"
                .to_string(),
            days: 7,
        }
    }

    #[test]
    fn missing_private_key_is_reported_by_name() {
        let mut env = valid_env();
        env.reporter_private_key = String::new();

        let err = env.ensure_reporter_config().unwrap_err();
        assert!(err.to_string().contains("REPORTER_PRIVATE_KEY"));
    }

    #[test]
    fn missing_contract_address_is_reported_by_name() {
        let mut env = valid_env();
        env.contract_address = String::new();

        let err = env.ensure_reporter_config().unwrap_err();
        assert!(err.to_string().contains("CONTRACT_ADDRESS"));
    }

    #[test]
    fn complete_config_passes_the_precondition_check() {
        assert!(valid_env().ensure_reporter_config().is_ok());
    }

    #[test]
    fn connect_contract_refuses_incomplete_config() {
        let mut env = valid_env();
        env.contract_address = String::new();

        assert!(env.connect_contract().is_err());
    }

    #[test]
    fn connect_contract_rejects_malformed_address() {
        let mut env = valid_env();
        env.contract_address = "not-an-address".to_string();

        let err = env.connect_contract().unwrap_err();
        assert!(err.to_string().contains("CONTRACT_ADDRESS"));
    }

    #[test]
    fn connect_contract_accepts_complete_config() {
        assert!(valid_env().connect_contract().is_ok());
    }
}
