//! Lookup-and-persist flow behind the dashboard.
//!
//! Holds the input text, the ordered repository list and the single error
//! message. A submit validates the input, asks the lookup service, appends
//! the result and mirrors the whole list to the store.

mod error;

pub use error::FlowError;

use crate::lookup::RepositoryLookup;
use crate::repository::RepositoryRecord;
use crate::store::{self, Storage};

pub struct Explorer<L, S> {
    lookup: L,
    store: S,
    key: String,
    repositories: Vec<RepositoryRecord>,
    input: String,
    error: Option<FlowError>,
}

impl<L: RepositoryLookup, S: Storage> Explorer<L, S> {
    /// Rehydrate the list from `store` under `key` (empty if absent or
    /// malformed) and write it back.
    pub fn open(lookup: L, store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let repositories = store::load_repositories(&store, &key);
        tracing::debug!(key = %key, count = repositories.len(), "loaded repositories");
        let mut explorer = Self {
            lookup,
            store,
            key,
            repositories,
            input: String::new(),
            error: None,
        };
        explorer.persist();
        explorer
    }

    pub fn repositories(&self) -> &[RepositoryRecord] {
        &self.repositories
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn error(&self) -> Option<&FlowError> {
        self.error.as_ref()
    }

    /// The one user-visible message, whatever the error kind.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// First record with this `full_name`.
    pub fn find(&self, full_name: &str) -> Option<&RepositoryRecord> {
        self.repositories.iter().find(|r| r.full_name == full_name)
    }

    /// Submit the current input.
    ///
    /// On success the record is appended (duplicates allowed), the input and
    /// error are cleared and the list is persisted. On failure the list, the
    /// store and the input are left as they were and the error is set.
    pub fn submit(&mut self) -> Result<&RepositoryRecord, FlowError> {
        let identifier = self.input.trim().to_string();
        if identifier.is_empty() {
            tracing::debug!("submit rejected: empty identifier");
            return Err(self.fail(FlowError::Validation));
        }

        // The lookup blocks inside this call; `&mut self` rules out a second
        // submit while it is pending.
        tracing::info!(identifier = %identifier, "looking up repository");
        match self.lookup.fetch(&identifier) {
            Ok(record) => {
                tracing::info!(full_name = %record.full_name, "repository added");
                self.repositories.push(record);
                self.input.clear();
                self.error = None;
                self.persist();
                Ok(&self.repositories[self.repositories.len() - 1])
            }
            Err(e) => {
                tracing::warn!(identifier = %identifier, "lookup failed: {}", e);
                Err(self.fail(FlowError::LookupFailed))
            }
        }
    }

    fn fail(&mut self, err: FlowError) -> FlowError {
        self.error = Some(err.clone());
        err
    }

    /// Write the full list. Failures are logged and otherwise ignored.
    fn persist(&mut self) {
        if let Err(e) = store::save_repositories(&mut self.store, &self.key, &self.repositories) {
            tracing::warn!(key = %self.key, "could not persist repositories: {:#}", e);
        }
    }
}
