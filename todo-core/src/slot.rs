use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;

/// Error type for durable-slot reads and writes.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single named key-value entry mirroring the collection across sessions.
///
/// Reading a slot that has never been written yields `None`; the store treats
/// that as an empty collection.
pub trait StorageSlot {
    fn read(&self) -> Result<Option<String>, SlotError>;

    fn write(&mut self, value: &str) -> Result<(), SlotError>;
}

/// Durable slot backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, value: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// In-memory slot for tests and other non-durable callers.
///
/// Clones share the same buffer, so a test can keep a handle to the slot it
/// handed to a store and inspect what got persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    /// Creates a slot pre-populated with the given value, as if a previous
    /// session had written it.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.into()))),
        }
    }

    /// Returns a copy of the currently stored value, if any.
    pub fn contents(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.value.borrow().clone())
    }

    fn write(&mut self, value: &str) -> Result<(), SlotError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    #[test]
    fn file_slot_reads_none_when_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("todos.json"));

        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn file_slot_reads_back_what_it_wrote() {
        let dir = TempDir::new().unwrap();
        let mut slot = FileSlot::new(dir.path().join("todos.json"));

        slot.write("[]").unwrap();

        assert_eq!(slot.read().unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn file_slot_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut slot = FileSlot::new(dir.path().join("nested").join("todos.json"));

        slot.write("[]").unwrap();

        assert_eq!(slot.read().unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn memory_slot_clones_share_the_buffer() {
        let slot = MemorySlot::default();
        let mut writer = slot.clone();

        writer.write("hello").unwrap();

        assert_eq!(slot.contents(), Some("hello".to_string()));
    }
}
