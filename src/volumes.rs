//! Fetching and shaping of DEX volume samples from the external volume API.

use alloy::primitives::U256;
use anyhow::Context;
use tracing::*;

use crate::env::Env;

/// One day of DEX trading volume as returned by the volume API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct VolumeSample {
    /// Calendar date encoded as YYYYMMDD.
    pub day: u64,
    /// Traded volume in the token's smallest-unit denomination.
    pub volume: RawVolume,
}

/// A volume amount as it appears on the wire.
///
/// The API emits amounts as decimal strings once they exceed what fits in
/// a JSON number, and as plain numbers otherwise.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum RawVolume {
    Number(u64),
    Text(String),
}

/// A trait for acquiring volume samples from the external data source.
pub(crate) trait VolumeSource {
    /// Fetch the trailing window of daily volume samples, in the order
    /// the API returns them.
    async fn fetch_volumes(&self) -> anyhow::Result<Vec<VolumeSample>>;
}

/// [`VolumeSource`] backed by the HTTP volume API.
pub struct HttpVolumeSource {
    client: reqwest::Client,
    api_url: String,
    days: u32,
}

impl HttpVolumeSource {
    pub fn new(env: &Env) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: env.volume_api_url.clone(),
            days: env.days,
        }
    }
}

impl VolumeSource for HttpVolumeSource {
    async fn fetch_volumes(&self) -> anyhow::Result<Vec<VolumeSample>> {
        debug!(
            "Requesting the last {} days of volumes from {}",
            self.days, self.api_url
        );

        let samples: Vec<VolumeSample> = self
            .client
            .get(&self.api_url)
            .query(&[("days", self.days)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!("Volume API returned {} samples", samples.len());
        Ok(samples)
    }
}

/// Split samples into index-aligned day and volume sequences, the argument
/// shape of the contract's bulkReport operation. Input order is preserved.
pub(crate) fn split_samples(
    samples: &[VolumeSample],
) -> anyhow::Result<(Vec<U256>, Vec<U256>)> {
    itertools::process_results(samples.iter().map(report_entry), |pairs| {
        pairs.unzip()
    })
}

fn report_entry(sample: &VolumeSample) -> anyhow::Result<(U256, U256)> {
    let volume = match &sample.volume {
        RawVolume::Number(volume) => U256::from(*volume),
        RawVolume::Text(text) => text.parse::<U256>().with_context(|| {
            format!("invalid volume {text:?} for day {day}", day = sample.day)
        })?,
    };

    Ok((U256::from(sample.day), volume))
}
