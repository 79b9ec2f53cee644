//! Settings surface: visibility state machine over a draft.
//!
//! ```text
//!            open()                         commit() / cancel()
//!   Hidden ─────────► Open ──┐   Open ───────────────────────► Hidden
//!                      ▲     │ clear(), edits
//!                      └─────┘
//! ```
//!
//! A surface is created from a hydrated snapshot, so it cannot exist while
//! the store is still loading.

use thiserror::Error;

use super::draft::{validate_and_commit, version_text, Draft, DraftField, ValidationError};
use crate::credentials::{
    CredentialSnapshot, CredentialStore, CredentialStoreError, WorkflowVersion, WriteOutcome,
};
use crate::traits::KeyValueStorage;

/// Whether the settings panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Collapsed to a re-open affordance
    Hidden,
    /// Draft editable
    Open,
}

/// Why a commit did not go through.
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("Settings are not open")]
    NotOpen,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] CredentialStoreError),

    /// Key and id failed, and putting the previous version back failed too.
    #[error("{source} (restoring the workflow version also failed: {restore})")]
    VersionRestoreFailed {
        source: CredentialStoreError,
        restore: CredentialStoreError,
    },
}

/// Draft/commit protocol plus visibility.
#[derive(Debug, Clone)]
pub struct SettingsSurface {
    visibility: Visibility,
    draft: Draft,
    focus: DraftField,
    show_secret: bool,
    /// Committed workflow id the draft last followed.
    seen_workflow_id: String,
    /// Committed version the draft last followed.
    seen_version: Option<WorkflowVersion>,
}

impl SettingsSurface {
    /// Build the surface once hydration finished.
    ///
    /// Starts [`Visibility::Open`] unless both primary fields are
    /// well-formed. This decision is not re-evaluated later.
    pub fn new(snapshot: &CredentialSnapshot) -> Self {
        let visibility = if snapshot.is_valid() {
            Visibility::Hidden
        } else {
            Visibility::Open
        };
        tracing::debug!("Settings surface created {:?}", visibility);

        Self {
            visibility,
            draft: Draft::from_snapshot(snapshot),
            focus: first_invalid_field(snapshot),
            show_secret: false,
            seen_workflow_id: snapshot.workflow_id.clone(),
            seen_version: snapshot.workflow_version,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    /// Whether the API key draft is shown in plaintext.
    pub fn shows_secret(&self) -> bool {
        self.show_secret
    }

    /// Save is enabled only for a well-formed draft.
    pub fn can_save(&self) -> bool {
        self.is_open() && self.draft.is_saveable()
    }

    /// Dismissing without saving requires valid committed credentials.
    pub fn can_dismiss(&self, snapshot: &CredentialSnapshot) -> bool {
        self.is_open() && snapshot.is_valid()
    }

    /// The clear affordance is offered once there is something to clear.
    pub fn can_clear(&self) -> bool {
        self.is_open() && (!self.draft.api_key.is_empty() || !self.draft.workflow_id.is_empty())
    }

    /// Label of the committed version.
    pub fn active_version_label(snapshot: &CredentialSnapshot) -> String {
        match snapshot.workflow_version {
            Some(version) => version.to_string(),
            None => "Latest".to_string(),
        }
    }

    /// Hidden to Open, discarding stale edits.
    ///
    /// Returns whether a transition happened.
    pub fn open(&mut self, snapshot: &CredentialSnapshot) -> bool {
        if self.is_open() {
            return false;
        }
        self.resync(snapshot);
        self.focus = first_invalid_field(snapshot);
        self.visibility = Visibility::Open;
        tracing::debug!("Settings opened");
        true
    }

    /// Open to Hidden without saving, if valid credentials already exist.
    ///
    /// Returns whether a transition happened.
    pub fn cancel(&mut self, snapshot: &CredentialSnapshot) -> bool {
        if !self.can_dismiss(snapshot) {
            return false;
        }
        self.resync(snapshot);
        self.visibility = Visibility::Hidden;
        tracing::debug!("Settings dismissed without saving");
        true
    }

    /// Validate the draft and push it into the store.
    ///
    /// The version goes first, then key and id as one combined update.
    /// The surface hides only when both were applied. If the combined
    /// update is deferred or fails, the previous version is written back
    /// and the surface stays open with the draft intact.
    pub fn commit<S: KeyValueStorage>(
        &mut self,
        store: &mut CredentialStore<S>,
    ) -> Result<WriteOutcome, CommitError> {
        if !self.is_open() {
            return Err(CommitError::NotOpen);
        }
        let credentials = validate_and_commit(&self.draft)?;
        let previous = store.snapshot().and_then(|s| s.workflow_version);

        if store.set_workflow_version(credentials.workflow_version)? == WriteOutcome::Deferred {
            return Ok(WriteOutcome::Deferred);
        }
        match store.set_credentials(&credentials.api_key, &credentials.workflow_id) {
            Ok(WriteOutcome::Applied) => {}
            Ok(WriteOutcome::Deferred) => {
                restore_version(store, previous, credentials.workflow_version)?;
                return Ok(WriteOutcome::Deferred);
            }
            Err(source) => {
                return Err(
                    match restore_version(store, previous, credentials.workflow_version) {
                        Ok(()) => CommitError::Store(source),
                        Err(restore) => CommitError::VersionRestoreFailed { source, restore },
                    },
                );
            }
        }

        if let Some(snapshot) = store.snapshot() {
            self.resync(snapshot);
        }
        self.visibility = Visibility::Hidden;
        tracing::info!(
            "Settings saved (workflow_id={}, version={:?})",
            credentials.workflow_id,
            credentials.workflow_version.map(WorkflowVersion::get)
        );
        Ok(WriteOutcome::Applied)
    }

    /// Empty the draft and clear the store. Visibility is unchanged.
    pub fn clear<S: KeyValueStorage>(
        &mut self,
        store: &mut CredentialStore<S>,
    ) -> Result<WriteOutcome, CredentialStoreError> {
        self.draft.clear();
        self.focus = DraftField::ApiKey;
        let outcome = store.clear()?;
        if let (WriteOutcome::Applied, Some(snapshot)) = (outcome, store.snapshot()) {
            self.remember(snapshot);
        }
        Ok(outcome)
    }

    /// Let the draft follow committed changes of workflow id and version.
    ///
    /// The API key draft is never overwritten here.
    pub fn observe(&mut self, snapshot: &CredentialSnapshot) {
        if snapshot.workflow_id != self.seen_workflow_id {
            self.draft.workflow_id = snapshot.workflow_id.clone();
        }
        if snapshot.workflow_version != self.seen_version {
            self.draft.version_text = version_text(snapshot.workflow_version);
        }
        self.remember(snapshot);
    }

    pub fn toggle_secret(&mut self) {
        self.show_secret = !self.show_secret;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_open() && !c.is_control() {
            self.draft.field_mut(self.focus).push(c);
        }
    }

    /// Insert pasted text; line breaks and other control characters are dropped.
    pub fn insert_str(&mut self, text: &str) {
        if !self.is_open() {
            return;
        }
        let field = self.draft.field_mut(self.focus);
        field.extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn backspace(&mut self) {
        if self.is_open() {
            self.draft.field_mut(self.focus).pop();
        }
    }

    /// Empty the focused field only.
    pub fn clear_field(&mut self) {
        if self.is_open() {
            self.draft.field_mut(self.focus).clear();
        }
    }

    fn resync(&mut self, snapshot: &CredentialSnapshot) {
        self.draft = Draft::from_snapshot(snapshot);
        self.remember(snapshot);
    }

    fn remember(&mut self, snapshot: &CredentialSnapshot) {
        self.seen_workflow_id = snapshot.workflow_id.clone();
        self.seen_version = snapshot.workflow_version;
    }
}

fn first_invalid_field(snapshot: &CredentialSnapshot) -> DraftField {
    if snapshot.has_valid_api_key() && !snapshot.has_valid_workflow_id() {
        DraftField::WorkflowId
    } else {
        DraftField::ApiKey
    }
}

/// Put back the version a failed commit replaced.
fn restore_version<S: KeyValueStorage>(
    store: &mut CredentialStore<S>,
    previous: Option<WorkflowVersion>,
    attempted: Option<WorkflowVersion>,
) -> Result<(), CredentialStoreError> {
    if previous == attempted {
        return Ok(());
    }
    if store.set_workflow_version(previous)? == WriteOutcome::Deferred {
        tracing::warn!(
            "Workflow version {:?} could not be restored: storage unavailable",
            previous.map(WorkflowVersion::get)
        );
    }
    Ok(())
}
