//! A CLI tool for fetching daily DEX trading volumes from the Aerodrome
//! volume API and reporting them to the VolumeAggregator contract on Base.

use alloy::{sol, transports::http};
use tracing::*;

sol! {
    #[sol(rpc)]
    interface IVolumeAggregator {
        function reportVolume(uint256 day, uint256 volume) external;
        function bulkReport(uint256[] calldata _days, uint256[] calldata vols) external;
    }
}

pub mod env;
pub mod onchain;
pub mod volumes;

use onchain::OnChain;
use volumes::VolumeSource;

/// Type alias for a VolumeAggregator contract instance connected over
/// JSON-RPC HTTP.
pub type AggregatorContract<P> =
    IVolumeAggregator::IVolumeAggregatorInstance<http::Http<http::Client>, P>;

/// Fetch the latest volume samples from the configured data source and
/// record them on-chain with a single bulkReport transaction.
///
/// The fetch strictly precedes the submission: if the data source fails,
/// nothing is broadcast. The returned future resolves only once the
/// transaction is confirmed.
#[allow(private_bounds)]
pub async fn report_volumes(
    env: &env::Env,
    source: &impl VolumeSource,
    onchain: &impl OnChain,
) -> anyhow::Result<()> {
    let samples = source.fetch_volumes().await?;

    let (days, volumes) = volumes::split_samples(&samples)?;

    #[cfg(debug_assertions)]
    assert_eq!(days.len(), volumes.len());

    info!("Reporting {} entries to {}", days.len(), env.contract_address);
    let tx_hash = onchain.submit_bulk_report(days, volumes).await?;

    info!(
        "Reported {count} volume entries in transaction {tx_hash}",
        count = samples.len()
    );

    Ok(())
}
