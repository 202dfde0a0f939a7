//! Browser `sessionStorage` backend.
//! Tab-scoped: state survives reloads within the tab and is cleared when the
//! browsing session ends. Nothing is shared across tabs.

use widget_core::ports::StoragePort;
use widget_types::{Result, WidgetError};

pub struct SessionStorageBackend {
    storage: web_sys::Storage,
}

impl SessionStorageBackend {
    /// Grab the tab's `sessionStorage`. Fails outside a browsing context or
    /// when storage is disabled (e.g. some private-browsing modes).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| WidgetError::PersistenceFailed("no window object".to_string()))?;

        let storage = window
            .session_storage()
            .map_err(|e| WidgetError::PersistenceFailed(format!("{:?}", e)))?
            .ok_or_else(|| {
                WidgetError::PersistenceFailed("sessionStorage not available".to_string())
            })?;

        Ok(Self { storage })
    }
}

impl StoragePort for SessionStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| WidgetError::PersistenceFailed(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // quota exhaustion surfaces here as a JS exception
        self.storage
            .set_item(key, value)
            .map_err(|e| WidgetError::PersistenceFailed(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| WidgetError::PersistenceFailed(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "session-storage"
    }
}
