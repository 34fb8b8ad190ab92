use alloy::primitives::{TxHash, U256};
use alloy::providers::Provider;
use alloy::transports::http;
use tracing::*;

use super::OnChain;
use crate::AggregatorContract;

/// [`OnChain`] implementation backed by the deployed VolumeAggregator
/// contract.
pub struct RealChain<P> {
    contract: AggregatorContract<P>,
}

impl<P> RealChain<P> {
    pub fn new(contract: AggregatorContract<P>) -> Self {
        Self { contract }
    }
}

impl<P> OnChain for RealChain<P>
where
    P: Provider<http::Http<http::Client>>,
{
    async fn submit_bulk_report(
        &self,
        days: Vec<U256>,
        volumes: Vec<U256>,
    ) -> anyhow::Result<TxHash> {
        let call = self.contract.bulkReport(days, volumes);
        let pending = call.send().await?;

        let tx_hash = *pending.tx_hash();
        info!("Submitted bulkReport transaction {tx_hash}");

        let confirmed = pending.watch().await?;
        debug!("Transaction {confirmed} confirmed");

        Ok(confirmed)
    }
}
