use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use stockroom_inventory::{SnapshotError, SnapshotStore};

/// Directory-backed snapshot store: `<dir>/<key>.json` per key.
///
/// Writes land in a temp file that is then renamed over the target, so a
/// reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    /// Use `dir`, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create snapshot directory at {:?}", dir))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::unavailable(key, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|e| SnapshotError::unavailable(key, e))?;
        fs::rename(&tmp, &target).map_err(|e| SnapshotError::unavailable(key, e))?;

        tracing::debug!(key, bytes = value.len(), "snapshot key written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, SnapshotError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(SnapshotError::unavailable(key, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("stockroom-file-{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn open_creates_directory() {
        let dir = scratch_dir();
        let store = FileSnapshotStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn set_get_remove() {
        let dir = scratch_dir();
        let store = FileSnapshotStore::open(&dir).unwrap();

        assert!(store.get("products").unwrap().is_none());
        store.set("products", "[]").unwrap();
        store.set("products", "[1]").unwrap();
        assert_eq!(store.get("products").unwrap().as_deref(), Some("[1]"));
        assert!(!dir.join("products.json.tmp").exists());

        assert!(store.remove("products").unwrap());
        assert!(!store.remove("products").unwrap());
        assert!(store.get("products").unwrap().is_none());

        fs::remove_dir_all(dir).unwrap();
    }
}
