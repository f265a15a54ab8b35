//! Persistent string-keyed store and the repository-list mirror kept in it.
//!
//! The store has the shape of a browser's local storage: string keys, string
//! values, read and overwritten whole. The repository list is one JSON array
//! under one application-namespaced key.

mod list;
mod local;

pub use list::{load_repositories, save_repositories, serialize_repositories};
pub use local::{default_path, LocalStore};

use anyhow::Result;
use std::collections::BTreeMap;

/// Key the repository list lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@GithubExplorer:repositories";

/// Durable string key-value store.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for &mut T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// Process-local store; contents vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
