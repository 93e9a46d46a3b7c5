//! Infrastructure layer: snapshot storage adapters, config, and wiring.

pub mod config;
pub mod snapshot_store;

use anyhow::Context;
use stockroom_inventory::InventoryStore;

pub use config::StoreConfig;
pub use snapshot_store::FileSnapshotStore;

/// Build the file-backed inventory store described by `config`.
///
/// The caller owns the returned store and passes it to whatever needs it.
pub fn open_store(config: &StoreConfig) -> anyhow::Result<InventoryStore<FileSnapshotStore>> {
    let port = FileSnapshotStore::open(&config.data_dir)?;
    let store = InventoryStore::open(port).with_context(|| {
        format!(
            "failed to load inventory snapshot from {:?}",
            config.data_dir
        )
    })?;

    tracing::info!(data_dir = ?config.data_dir, "inventory store ready");
    Ok(store)
}
