use anyhow::Result;
use tokio::task;

use ipprobe::utils::get_hostname;
use ipprobe::{resolve_hostname_address, resolve_outbound_address, AddressReport};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    log::info!("Resolving local addresses...");

    let outbound = task::spawn_blocking(resolve_outbound_address);
    let by_hostname = task::spawn_blocking(resolve_hostname_address);

    let report = AddressReport::from_parts(get_hostname(), outbound.await?, by_hostname.await?);

    log::info!(
        "Outbound address {}, hostname address {}",
        report.outbound_address,
        report.hostname_address
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
