//! Snapshot persistence port and its adapters.
//!
//! The store is handed a [`SnapshotStore`] at construction and never touches
//! storage directly. Two adapters ship with the crate: a JSON file for real
//! use and an in-memory slot for tests and memory-only operation.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::SnapshotError;
use crate::state::CartState;

/// Durable key-value persistence port for the cart snapshot.
///
/// Implementations hold exactly one snapshot record: the serialized cart
/// line array.
pub trait SnapshotStore {
    /// Read the most recent snapshot. `Ok(None)` when none has been written.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the record cannot be read or does not
    /// parse into valid cart lines.
    fn load(&self) -> Result<Option<CartState>, SnapshotError>;

    /// Replace the snapshot with the given state.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the record cannot be written.
    fn save(&self, state: &CartState) -> Result<(), SnapshotError>;
}

impl<S: SnapshotStore> SnapshotStore for Rc<S> {
    fn load(&self) -> Result<Option<CartState>, SnapshotError> {
        (**self).load()
    }

    fn save(&self, state: &CartState) -> Result<(), SnapshotError> {
        (**self).save(state)
    }
}

/// File-backed snapshot: a JSON array of line items at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to `path`. Nothing is touched until the first
    /// `load`/`save`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<CartState>, SnapshotError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_str(&raw)?;
        Ok(Some(state))
    }

    fn save(&self, state: &CartState) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec(state)?;

        // Write-then-rename so a crash mid-write never leaves a truncated
        // snapshot behind. The temp file lives next to the target so the
        // rename stays on one filesystem.
        let tmp = self.tmp_path();
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&json)?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory snapshot slot.
///
/// Used by tests and by memory-only carts (e.g., when the platform offers no
/// durable storage).
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<CartState>>,
}

impl MemoryStore {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved state, if any.
    #[must_use]
    pub fn saved(&self) -> Option<CartState> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<CartState>, SnapshotError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, state: &CartState) -> Result<(), SnapshotError> {
        *self.slot.borrow_mut() = Some(state.clone());
        Ok(())
    }
}
