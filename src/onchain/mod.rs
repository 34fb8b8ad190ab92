//! A layer of abstraction for controlling interactions with the blockchain
//! depending on whether we are running in a test environment or not.

use alloy::primitives::{TxHash, U256};

#[cfg(test)]
pub mod mock;
pub mod real;

/// A trait for submitting volume reports to the deployed VolumeAggregator
/// contract.
pub(crate) trait OnChain {
    /// Broadcast one bulkReport transaction carrying the given day and
    /// volume sequences, block until the network confirms it, and return
    /// its hash.
    async fn submit_bulk_report(
        &self,
        days: Vec<U256>,
        volumes: Vec<U256>,
    ) -> anyhow::Result<TxHash>;
}
