#![warn(clippy::complexity)]

use ::aerovolume::env::Env;
use ::aerovolume::onchain::real::RealChain;
use ::aerovolume::report_volumes;
use ::aerovolume::volumes::HttpVolumeSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Env::init();
    let aggregator = env.connect_contract()?;

    let onchain = RealChain::new(aggregator);
    let source = HttpVolumeSource::new(&env);

    report_volumes(&env, &source, &onchain).await?;

    Ok(())
}
