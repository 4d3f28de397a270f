//! Snapshot persistence: a single named slot in a local key-value store.
//!
//! The slot holds the serialized entry list and nothing else (visibility is
//! ephemeral and never persisted). Implementations deal in raw serialized
//! strings; the store owns the (de)serialization, so corrupt data degrades
//! the same way regardless of backend.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;

/// Single-slot persistence for the serialized cart.
///
/// Both operations are synchronous and best-effort from the store's point of
/// view: a failed `save` loses at most the writes since the last successful
/// one, and a failed `load` degrades to an empty cart.
pub trait SnapshotStore: Send {
    /// Read the slot. `Ok(None)` means no snapshot has ever been written.
    fn load(&self) -> anyhow::Result<Option<String>>;

    /// Overwrite the slot with a full serialization of the cart.
    fn save(&self, snapshot: &str) -> anyhow::Result<()>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + Sync + ?Sized,
{
    fn load(&self) -> anyhow::Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, snapshot: &str) -> anyhow::Result<()> {
        (**self).save(snapshot)
    }
}

/// In-memory slot for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: Mutex<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-seeded slot contents (e.g. a corrupt snapshot in tests).
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(contents.into())),
        }
    }

    /// Current slot contents, if any.
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot slot lock poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &str) -> anyhow::Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot slot lock poisoned"))?;
        *slot = Some(snapshot.to_string());
        Ok(())
    }
}

/// File-backed slot: one JSON file under the user-local data directory.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default slot location: `<local data dir>/shopfront/cart.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = dirs::data_local_dir()
            .context("failed to determine local data directory for cart snapshot")?;
        Ok(base.join("shopfront").join("cart.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read cart snapshot at {:?}", self.path))?;
        Ok(Some(contents))
    }

    fn save(&self, snapshot: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create snapshot directory at {parent:?}"))?;
        }
        std::fs::write(&self.path, snapshot)
            .with_context(|| format!("failed to write cart snapshot at {:?}", self.path))?;
        Ok(())
    }
}
