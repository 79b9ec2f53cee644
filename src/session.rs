//! Gate for the downstream chat session.
//!
//! The hosted chat widget is constructed from `(api_key, workflow_id)` and
//! has to be rebuilt when that pair changes. [`SessionGate`] keeps at most
//! one [`ChatSession`] and rebuilds it only on a pair change; a version
//! change is handed to the live session instead.

use crate::credentials::{mask_secret, CredentialSnapshot, Lifecycle, WorkflowVersion};

/// Identity of a session.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub api_key: String,
    pub workflow_id: String,
}

impl SessionKey {
    fn of(snapshot: &CredentialSnapshot) -> Self {
        Self {
            api_key: snapshot.api_key.clone(),
            workflow_id: snapshot.workflow_id.clone(),
        }
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", mask_secret(&self.api_key), self.workflow_id)
    }
}

/// A constructed downstream session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    key: SessionKey,
    workflow_version: Option<WorkflowVersion>,
    generation: u64,
}

impl ChatSession {
    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn workflow_id(&self) -> &str {
        &self.key.workflow_id
    }

    pub fn workflow_version(&self) -> Option<WorkflowVersion> {
        self.workflow_version
    }

    /// How many sessions were built before and including this one.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a [`SessionGate::sync`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateChange {
    Unchanged,
    /// First session built
    Started,
    /// Old session dropped, new one built for a different pair
    Restarted,
    /// Same pair, new workflow version
    Updated,
    /// Credentials no longer valid; session dropped
    Stopped,
}

#[derive(Debug, Default)]
pub struct SessionGate {
    session: Option<ChatSession>,
    generation: u64,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live session, if credentials are ready.
    pub fn session(&self) -> Option<&ChatSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Bring the session in line with the store.
    pub fn sync(&mut self, lifecycle: &Lifecycle) -> GateChange {
        let Some(snapshot) = lifecycle.snapshot().filter(|s| s.is_valid()) else {
            return match self.session.take() {
                Some(old) => {
                    tracing::info!("Chat session {} stopped", old.generation);
                    GateChange::Stopped
                }
                None => GateChange::Unchanged,
            };
        };

        let key = SessionKey::of(snapshot);
        if let Some(session) = self.session.as_mut() {
            if session.key == key {
                if session.workflow_version == snapshot.workflow_version {
                    return GateChange::Unchanged;
                }
                session.workflow_version = snapshot.workflow_version;
                tracing::debug!(
                    "Chat session {} now on version {:?}",
                    session.generation,
                    session.workflow_version.map(WorkflowVersion::get)
                );
                return GateChange::Updated;
            }
        }

        let change = if self.session.is_some() {
            GateChange::Restarted
        } else {
            GateChange::Started
        };
        self.generation += 1;
        tracing::info!("Chat session {} built for {:?}", self.generation, key);
        self.session = Some(ChatSession {
            key,
            workflow_version: snapshot.workflow_version,
            generation: self.generation,
        });
        change
    }
}
