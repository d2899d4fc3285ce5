use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::rpc::InventoryDirectory;

/// What a walk over the inventory visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryWalk {
    pub pops: usize,
    pub devices: usize,
}

/// Lists every point-of-presence, then the devices of each one.
///
/// The devices are not transformed or stored; the walk only confirms that
/// every point-of-presence can be enumerated.
#[instrument(level = "info", skip_all)]
pub async fn walk(directory: &dyn InventoryDirectory) -> Result<InventoryWalk> {
    let pops = directory.pops().await?;
    info!(pop_count = pops.len(), "listed points-of-presence");

    let mut summary = InventoryWalk::default();
    for pop in &pops {
        let devices = directory.devices(&pop.id).await?;
        debug!(pop = %pop.id, name = %pop.name, device_count = devices.len(), "listed devices");
        summary.pops += 1;
        summary.devices += devices.len();
    }

    info!(pops = summary.pops, devices = summary.devices, "inventory walk finished");
    Ok(summary)
}
