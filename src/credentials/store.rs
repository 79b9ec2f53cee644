//! The credential store.
//!
//! [`CredentialStore`] is the only component that touches durable storage.
//! Every mutation follows the same order: normalize, write the durable
//! entries of the field-group, then replace the in-memory snapshot and
//! publish it once. If any durable write of a group fails, the entries
//! already written are restored, memory keeps its previous value, and
//! nothing is published.

use thiserror::Error;
use tokio::sync::watch;

use super::fields::{mask_secret, WorkflowVersion};
use super::snapshot::{CredentialSnapshot, Lifecycle};
use crate::traits::{KeyValueStorage, StorageError};

/// Storage key of the API key.
pub const API_KEY_STORAGE: &str = "openai_api_key";

/// Storage key of the workflow identifier.
pub const WORKFLOW_ID_STORAGE: &str = "chatkit_workflow_id";

/// Storage key of the workflow version (decimal string).
pub const WORKFLOW_VERSION_STORAGE: &str = "chatkit_workflow_version";

/// One published state of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Published {
    /// Incremented by one for every publish.
    pub revision: u64,
    pub lifecycle: Lifecycle,
}

/// What happened to a requested mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Persisted and published.
    Applied,
    /// Nothing changed: the store is not hydrated or storage is unavailable.
    Deferred,
}

/// Errors from durable writes that are not mere unavailability.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// Writing an entry failed; earlier entries of the group were restored.
    #[error("Failed to persist {key}: {source}")]
    Write {
        key: &'static str,
        #[source]
        source: StorageError,
    },

    /// Writing failed and restoring an earlier entry failed as well.
    ///
    /// `diverged` lists the entries whose durable value no longer matches
    /// the in-memory snapshot.
    #[error("Failed to persist {key}: {source} (restoring {restore_key} also failed: {restore})")]
    RollbackFailed {
        key: &'static str,
        source: StorageError,
        restore_key: &'static str,
        restore: StorageError,
        diverged: Vec<&'static str>,
    },
}

/// Pending durable change: `None` deletes the entry.
type EntryWrite = (&'static str, Option<String>);

/// Authoritative holder of the credential snapshot.
pub struct CredentialStore<S> {
    storage: S,
    state: Lifecycle,
    revision: u64,
    tx: watch::Sender<Published>,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    /// Create an unhydrated store over `storage`.
    pub fn new(storage: S) -> Self {
        let (tx, _rx) = watch::channel(Published::default());
        Self {
            storage,
            state: Lifecycle::Uninitialized,
            revision: 0,
            tx,
        }
    }

    /// Hydrate from durable storage.
    ///
    /// Runs at most once successfully; later calls are no-ops. When storage
    /// cannot be read the store stays [`Lifecycle::Uninitialized`] and the
    /// call may be repeated.
    ///
    /// Returns whether the store is loaded afterwards.
    pub fn load(&mut self) -> bool {
        if self.state.is_loaded() {
            return true;
        }

        match self.read_snapshot() {
            Ok(snapshot) => {
                tracing::info!(
                    "Credentials hydrated (valid={}, version={:?})",
                    snapshot.is_valid(),
                    snapshot.workflow_version.map(WorkflowVersion::get)
                );
                self.state = Lifecycle::Loaded(snapshot);
                self.publish();
                true
            }
            Err(StorageError::Unavailable) => {
                tracing::debug!("Storage unavailable, hydration deferred");
                false
            }
            Err(e) => {
                tracing::warn!("Failed to read credentials, hydration deferred: {}", e);
                false
            }
        }
    }

    fn read_snapshot(&self) -> Result<CredentialSnapshot, StorageError> {
        let api_key = self.storage.get(API_KEY_STORAGE)?.unwrap_or_default();
        let workflow_id = self.storage.get(WORKFLOW_ID_STORAGE)?.unwrap_or_default();
        let workflow_version = self
            .storage
            .get(WORKFLOW_VERSION_STORAGE)?
            .as_deref()
            .and_then(WorkflowVersion::parse);

        Ok(CredentialSnapshot::new(
            api_key.trim(),
            workflow_id.trim(),
            workflow_version,
        ))
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.state
    }

    /// Current snapshot, `None` until hydrated.
    pub fn snapshot(&self) -> Option<&CredentialSnapshot> {
        self.state.snapshot()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Hydrated and holding well-formed credentials.
    pub fn is_valid(&self) -> bool {
        self.state.is_ready()
    }

    /// Revision of the last publish.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Observe every publish.
    pub fn subscribe(&self) -> watch::Receiver<Published> {
        self.tx.subscribe()
    }

    /// Access the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn set_api_key(&mut self, value: &str) -> Result<WriteOutcome, CredentialStoreError> {
        let api_key = value.trim().to_string();
        self.mutate(&[Field::ApiKey], |current| CredentialSnapshot {
            api_key,
            ..current.clone()
        })
    }

    pub fn set_workflow_id(&mut self, value: &str) -> Result<WriteOutcome, CredentialStoreError> {
        let workflow_id = value.trim().to_string();
        self.mutate(&[Field::WorkflowId], |current| CredentialSnapshot {
            workflow_id,
            ..current.clone()
        })
    }

    /// Pin a workflow version, or go back to latest with `None`.
    pub fn set_workflow_version(
        &mut self,
        version: Option<WorkflowVersion>,
    ) -> Result<WriteOutcome, CredentialStoreError> {
        self.mutate(&[Field::WorkflowVersion], |current| CredentialSnapshot {
            workflow_version: version,
            ..current.clone()
        })
    }

    /// Replace key and workflow id together, published as one update.
    pub fn set_credentials(
        &mut self,
        api_key: &str,
        workflow_id: &str,
    ) -> Result<WriteOutcome, CredentialStoreError> {
        let api_key = api_key.trim().to_string();
        let workflow_id = workflow_id.trim().to_string();
        self.mutate(&[Field::ApiKey, Field::WorkflowId], |current| {
            CredentialSnapshot {
                api_key,
                workflow_id,
                workflow_version: current.workflow_version,
            }
        })
    }

    /// Delete all durable entries and reset to the empty snapshot.
    pub fn clear(&mut self) -> Result<WriteOutcome, CredentialStoreError> {
        let outcome = self.mutate(&Field::ALL, |_| CredentialSnapshot::empty())?;
        if outcome == WriteOutcome::Applied {
            tracing::info!("Credentials cleared");
        }
        Ok(outcome)
    }

    /// Rewrite `fields` from `change(current)` as one transaction.
    fn mutate<F>(&mut self, fields: &[Field], change: F) -> Result<WriteOutcome, CredentialStoreError>
    where
        F: FnOnce(&CredentialSnapshot) -> CredentialSnapshot,
    {
        let Lifecycle::Loaded(current) = &self.state else {
            tracing::warn!("Credential update ignored: store not hydrated");
            return Ok(WriteOutcome::Deferred);
        };

        let next = change(current);
        let writes: Vec<EntryWrite> = fields.iter().map(|f| f.entry(&next)).collect();
        let restores: Vec<EntryWrite> = fields.iter().map(|f| f.entry(current)).collect();

        if let Err(failure) = self.write_group(&writes, &restores) {
            return match failure {
                GroupFailure::Unavailable => {
                    tracing::warn!("Storage unavailable, credential update deferred");
                    Ok(WriteOutcome::Deferred)
                }
                GroupFailure::Store(e) => {
                    tracing::error!("{}", e);
                    Err(e)
                }
            };
        }

        tracing::debug!(
            "Credentials updated (api_key={}, workflow_id={}, version={:?})",
            mask_secret(&next.api_key),
            next.workflow_id,
            next.workflow_version.map(WorkflowVersion::get)
        );
        self.state = Lifecycle::Loaded(next);
        self.publish();
        Ok(WriteOutcome::Applied)
    }

    fn write_group(
        &mut self,
        writes: &[EntryWrite],
        restores: &[EntryWrite],
    ) -> Result<(), GroupFailure> {
        for (index, &(key, ref value)) in writes.iter().enumerate() {
            let Err(source) = apply_entry(&mut self.storage, key, value.as_deref()) else {
                continue;
            };

            // Undo in reverse order; `restores` lines up with `writes`.
            for (undo, &(restore_key, ref restore_value)) in
                restores[..index].iter().enumerate().rev()
            {
                if let Err(restore) =
                    apply_entry(&mut self.storage, restore_key, restore_value.as_deref())
                {
                    let diverged: Vec<&'static str> =
                        restores[..=undo].iter().map(|(k, _)| *k).collect();
                    tracing::error!(
                        "Storage diverged from memory: {:?} still hold unsaved values",
                        diverged
                    );
                    return Err(GroupFailure::Store(CredentialStoreError::RollbackFailed {
                        key,
                        source,
                        restore_key,
                        restore,
                        diverged,
                    }));
                }
            }

            return Err(if source.is_unavailable() {
                GroupFailure::Unavailable
            } else {
                GroupFailure::Store(CredentialStoreError::Write { key, source })
            });
        }
        Ok(())
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.tx.send_replace(Published {
            revision: self.revision,
            lifecycle: self.state.clone(),
        });
    }
}

enum GroupFailure {
    Unavailable,
    Store(CredentialStoreError),
}

/// A persisted field of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ApiKey,
    WorkflowId,
    WorkflowVersion,
}

impl Field {
    const ALL: [Field; 3] = [Field::ApiKey, Field::WorkflowId, Field::WorkflowVersion];

    fn key(self) -> &'static str {
        match self {
            Field::ApiKey => API_KEY_STORAGE,
            Field::WorkflowId => WORKFLOW_ID_STORAGE,
            Field::WorkflowVersion => WORKFLOW_VERSION_STORAGE,
        }
    }

    /// Durable form of this field; empty or absent values remove the entry.
    fn entry(self, snapshot: &CredentialSnapshot) -> EntryWrite {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        let value = match self {
            Field::ApiKey => non_empty(&snapshot.api_key),
            Field::WorkflowId => non_empty(&snapshot.workflow_id),
            Field::WorkflowVersion => snapshot.workflow_version.map(|v| v.to_string()),
        };
        (self.key(), value)
    }
}

fn apply_entry<S: KeyValueStorage>(
    storage: &mut S,
    key: &str,
    value: Option<&str>,
) -> Result<(), StorageError> {
    match value {
        Some(value) => storage.set(key, value),
        None => storage.delete(key),
    }
}
