//! Credential snapshot and store lifecycle.

use std::fmt;

use super::fields::{is_well_formed_api_key, is_well_formed_workflow_id, mask_secret, WorkflowVersion};

/// The full credential state at one instant.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialSnapshot {
    /// Secret token for the hosted service.
    pub api_key: String,
    /// Identifier of the workflow to run.
    pub workflow_id: String,
    /// Pinned workflow version, `None` for latest.
    pub workflow_version: Option<WorkflowVersion>,
}

impl CredentialSnapshot {
    /// Create a snapshot from its parts.
    pub fn new(
        api_key: impl Into<String>,
        workflow_id: impl Into<String>,
        workflow_version: Option<WorkflowVersion>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            workflow_id: workflow_id.into(),
            workflow_version,
        }
    }

    /// The empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing at all is stored.
    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() && self.workflow_id.is_empty() && self.workflow_version.is_none()
    }

    pub fn has_valid_api_key(&self) -> bool {
        is_well_formed_api_key(&self.api_key)
    }

    pub fn has_valid_workflow_id(&self) -> bool {
        is_well_formed_workflow_id(&self.workflow_id)
    }

    /// Both primary fields are well-formed. The version never counts.
    pub fn is_valid(&self) -> bool {
        self.has_valid_api_key() && self.has_valid_workflow_id()
    }
}

impl fmt::Debug for CredentialSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSnapshot")
            .field("api_key", &mask_secret(&self.api_key))
            .field("workflow_id", &self.workflow_id)
            .field("workflow_version", &self.workflow_version)
            .finish()
    }
}

/// Lifecycle of the credential store.
///
/// Snapshot fields are only reachable once hydration finished, so nothing
/// can mistake "not read yet" for "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Durable storage has not been read yet
    #[default]
    Uninitialized,
    /// Hydrated; the snapshot is authoritative
    Loaded(CredentialSnapshot),
}

impl Lifecycle {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Lifecycle::Loaded(_))
    }

    /// The snapshot, if hydrated.
    pub fn snapshot(&self) -> Option<&CredentialSnapshot> {
        match self {
            Lifecycle::Uninitialized => None,
            Lifecycle::Loaded(snapshot) => Some(snapshot),
        }
    }

    /// Readiness: hydrated and holding valid credentials.
    pub fn is_ready(&self) -> bool {
        self.snapshot().is_some_and(CredentialSnapshot::is_valid)
    }
}
