use std::collections::HashMap;

use crate::classpath::version_label;

/// Key-value state keys owned by the host. The whole per-session footprint
/// of this module is these three entries.
pub const IMPORTED_KEY: &str = "java.importLombok";
pub const PATH_KEY: &str = "java.lombokPath";
pub const VERSION_KEY: &str = "java.lombokVersion";

/// Host-owned key-value storage. The host decides where the values live
/// and how long they survive; this module only reads and writes them.
pub trait StateStore: std::fmt::Debug + Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: Option<&str>);
}

/// Plain map-backed store for tests and for hosts without persistence.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    values: HashMap<String, String>,
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.values.insert(key.to_string(), value.to_string());
            }
            None => {
                self.values.remove(key);
            }
        }
    }
}

/// Per-session Lombok import state.
///
/// `imported` is monotonic for the lifetime of a session: once Lombok has
/// been observed on any runtime classpath it stays observed, even if a
/// later reconcile pass finds no entry. The resolved path is only ever set
/// while `imported` is true.
#[derive(Debug)]
pub struct SessionState {
    store: Box<dyn StateStore>,
}

impl SessionState {
    #[must_use]
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Session state over a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryStateStore::default()))
    }

    #[must_use]
    pub fn is_imported(&self) -> bool {
        self.store.get(IMPORTED_KEY).as_deref() == Some("true")
    }

    /// Record the first observation of Lombok: sets the imported flag and
    /// the resolved path together.
    pub fn mark_imported(&mut self, entry: &str) {
        self.store.set(IMPORTED_KEY, Some("true"));
        self.store.set(PATH_KEY, Some(entry));
    }

    #[must_use]
    pub fn resolved_path(&self) -> Option<String> {
        self.store.get(PATH_KEY)
    }

    /// Replace the resolved path. Callers must have marked the session as
    /// imported first.
    pub fn set_resolved_path(&mut self, entry: &str) {
        debug_assert!(self.is_imported());
        self.store.set(PATH_KEY, Some(entry));
    }

    #[must_use]
    pub fn agent_version(&self) -> Option<String> {
        self.store.get(VERSION_KEY)
    }

    pub fn set_agent_version(&mut self, value: &str) {
        self.store.set(VERSION_KEY, Some(value));
    }

    pub fn clear_agent_version(&mut self) {
        self.store.set(VERSION_KEY, Some(""));
    }

    /// Display label of the resolved Lombok artifact ("lombok-1.18.20"),
    /// or `None` when nothing has been resolved yet.
    #[must_use]
    pub fn version_label(&self) -> Option<String> {
        let path = self.resolved_path()?;
        version_label(&path).ok()
    }

    /// Wipe all three keys. Test support only; production sessions never
    /// un-import.
    pub fn reset(&mut self) {
        self.store.set(IMPORTED_KEY, None);
        self.store.set(PATH_KEY, None);
        self.store.set(VERSION_KEY, None);
    }
}
