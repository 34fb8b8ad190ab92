//! A mock implementation of the [`OnChain`] trait that records submitted
//! reports for deterministic testing.

use alloy::primitives::{TxHash, U256};
use std::sync::Mutex;

use super::OnChain;

/// An in-memory chain that accepts (or rejects) bulk reports without
/// touching the network.
pub(crate) struct MockChain {
    reports: Mutex<Vec<(Vec<U256>, Vec<U256>)>>,
    reject_submissions: bool,
}

impl MockChain {
    pub(crate) fn new() -> Self {
        Self { reports: Mutex::new(vec![]), reject_submissions: false }
    }

    /// A chain that rejects every submission, as if the transaction
    /// reverted.
    pub(crate) fn rejecting() -> Self {
        Self { reject_submissions: true, ..Self::new() }
    }

    /// All bulk reports accepted so far, in submission order.
    pub(crate) fn submitted_reports(&self) -> Vec<(Vec<U256>, Vec<U256>)> {
        self.reports.lock().unwrap().clone()
    }
}

impl OnChain for MockChain {
    async fn submit_bulk_report(
        &self,
        days: Vec<U256>,
        volumes: Vec<U256>,
    ) -> anyhow::Result<TxHash> {
        if self.reject_submissions {
            anyhow::bail!("transaction rejected by the RPC node");
        }

        self.reports.lock().unwrap().push((days, volumes));
        Ok(TxHash::repeat_byte(0xab))
    }
}
