//! Pick the best available storage backend.
//!
//! Priority: sessionStorage → Memory (fallback).

use std::rc::Rc;

use widget_core::ports::StoragePort;

use super::{MemoryStorage, SessionStorageBackend};

/// Open the tab's session storage, or fall back to a volatile in-memory
/// backend. Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match SessionStorageBackend::open() {
        Ok(storage) => {
            log::info!("Storage backend: sessionStorage");
            Rc::new(storage)
        }
        Err(e) => {
            log::warn!("sessionStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
