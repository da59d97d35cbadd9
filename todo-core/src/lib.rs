//! Core list-store logic for the todo exercises: the record model, the
//! ordered collection with its sort views, and the durable slot that mirrors
//! the collection across sessions.

pub mod record;
pub mod slot;
pub mod store;

pub use record::Record;
pub use slot::{FileSlot, MemorySlot, SlotError, StorageSlot};
pub use store::{SortOrder, TodoStore};
