//! Draft buffer and the single validation step into committed credentials.

use std::fmt;

use thiserror::Error;

use crate::credentials::{
    is_well_formed_api_key, is_well_formed_workflow_id, mask_secret, CredentialSnapshot,
    WorkflowVersion,
};

/// Editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    ApiKey,
    WorkflowId,
    WorkflowVersion,
}

impl DraftField {
    /// Fields in focus order.
    pub const ALL: [DraftField; 3] = [
        DraftField::ApiKey,
        DraftField::WorkflowId,
        DraftField::WorkflowVersion,
    ];

    pub fn next(self) -> Self {
        match self {
            DraftField::ApiKey => DraftField::WorkflowId,
            DraftField::WorkflowId => DraftField::WorkflowVersion,
            DraftField::WorkflowVersion => DraftField::ApiKey,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DraftField::ApiKey => DraftField::WorkflowVersion,
            DraftField::WorkflowId => DraftField::ApiKey,
            DraftField::WorkflowVersion => DraftField::WorkflowId,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::ApiKey => "OpenAI API Key",
            DraftField::WorkflowId => "Workflow ID",
            DraftField::WorkflowVersion => "Workflow Version",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::ApiKey => "sk-proj-...",
            DraftField::WorkflowId => "wf_...",
            DraftField::WorkflowVersion => "(Latest)",
        }
    }

    /// Where the operator finds the value.
    pub fn hint(self) -> &'static str {
        match self {
            DraftField::ApiKey => "Get your key from platform.openai.com/api-keys",
            DraftField::WorkflowId => "Get your workflow ID from Agent Builder",
            DraftField::WorkflowVersion => "Leave empty to always run the latest version",
        }
    }
}

/// Uncommitted edits. Fields hold raw text, including invalid intermediate
/// states such as a lone minus sign in the version.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub api_key: String,
    pub workflow_id: String,
    pub version_text: String,
}

impl Draft {
    /// A draft mirroring the committed snapshot.
    pub fn from_snapshot(snapshot: &CredentialSnapshot) -> Self {
        Self {
            api_key: snapshot.api_key.clone(),
            workflow_id: snapshot.workflow_id.clone(),
            version_text: version_text(snapshot.workflow_version),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::ApiKey => &self.api_key,
            DraftField::WorkflowId => &self.workflow_id,
            DraftField::WorkflowVersion => &self.version_text,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::ApiKey => &mut self.api_key,
            DraftField::WorkflowId => &mut self.workflow_id,
            DraftField::WorkflowVersion => &mut self.version_text,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.api_key.clear();
        self.workflow_id.clear();
        self.version_text.clear();
    }

    /// Whether a field is acceptable for saving. The version always is.
    pub fn field_is_valid(&self, field: DraftField) -> bool {
        match field {
            DraftField::ApiKey => is_well_formed_api_key(self.api_key.trim()),
            DraftField::WorkflowId => is_well_formed_workflow_id(self.workflow_id.trim()),
            DraftField::WorkflowVersion => true,
        }
    }

    /// Both primary fields are well-formed after trimming.
    pub fn is_saveable(&self) -> bool {
        self.field_is_valid(DraftField::ApiKey) && self.field_is_valid(DraftField::WorkflowId)
    }
}

impl fmt::Debug for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draft")
            .field("api_key", &mask_secret(&self.api_key))
            .field("workflow_id", &self.workflow_id)
            .field("version_text", &self.version_text)
            .finish()
    }
}

/// Text form of a committed version: empty for latest.
pub fn version_text(version: Option<WorkflowVersion>) -> String {
    version.map(|v| v.to_string()).unwrap_or_default()
}

/// Fully normalized values ready for the credential store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub workflow_id: String,
    pub workflow_version: Option<WorkflowVersion>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask_secret(&self.api_key))
            .field("workflow_id", &self.workflow_id)
            .field("workflow_version", &self.workflow_version)
            .finish()
    }
}

/// Why a draft cannot be committed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API key must start with \"sk-\"")]
    MalformedApiKey,

    #[error("Workflow ID must start with \"wf_\"")]
    MalformedWorkflowId,
}

/// Turn a draft into committed credentials.
///
/// Key and id are trimmed before the check; the version text normalizes
/// through [`WorkflowVersion::parse`] and never fails validation.
pub fn validate_and_commit(draft: &Draft) -> Result<Credentials, ValidationError> {
    let api_key = draft.api_key.trim();
    if !is_well_formed_api_key(api_key) {
        return Err(ValidationError::MalformedApiKey);
    }

    let workflow_id = draft.workflow_id.trim();
    if !is_well_formed_workflow_id(workflow_id) {
        return Err(ValidationError::MalformedWorkflowId);
    }

    Ok(Credentials {
        api_key: api_key.to_string(),
        workflow_id: workflow_id.to_string(),
        workflow_version: WorkflowVersion::parse(&draft.version_text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(api_key: &str, workflow_id: &str, version_text: &str) -> Draft {
        Draft {
            api_key: api_key.to_string(),
            workflow_id: workflow_id.to_string(),
            version_text: version_text.to_string(),
        }
    }

    #[test]
    fn test_field_focus_cycle() {
        for field in DraftField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(DraftField::WorkflowVersion.next(), DraftField::ApiKey);
    }

    #[test]
    fn test_from_snapshot() {
        let snapshot = CredentialSnapshot::new("sk-a", "wf_b", WorkflowVersion::new(3));
        let draft = Draft::from_snapshot(&snapshot);
        assert_eq!(draft.api_key, "sk-a");
        assert_eq!(draft.workflow_id, "wf_b");
        assert_eq!(draft.version_text, "3");

        let latest = Draft::from_snapshot(&CredentialSnapshot::new("sk-a", "wf_b", None));
        assert_eq!(latest.version_text, "");
    }

    #[test]
    fn test_validate_rejects_bad_prefix() {
        assert_eq!(
            validate_and_commit(&draft("abc", "wf_1", "")),
            Err(ValidationError::MalformedApiKey)
        );
        assert_eq!(
            validate_and_commit(&draft("sk-1", "1", "")),
            Err(ValidationError::MalformedWorkflowId)
        );
    }

    #[test]
    fn test_validate_trims_and_normalizes() {
        let creds = validate_and_commit(&draft("  sk-1 ", "\twf_1\n", "3.7")).unwrap();
        assert_eq!(creds.api_key, "sk-1");
        assert_eq!(creds.workflow_id, "wf_1");
        assert_eq!(creds.workflow_version, WorkflowVersion::new(3));
    }

    #[test]
    fn test_validate_drops_unusable_versions() {
        for text in ["", "0", "-5", "-", "abc"] {
            let creds = validate_and_commit(&draft("sk-1", "wf_1", text)).unwrap();
            assert_eq!(creds.workflow_version, None, "version text {:?}", text);
        }
    }

    #[test]
    fn test_is_saveable() {
        assert!(draft(" sk-1", "wf_1 ", "garbage").is_saveable());
        assert!(!draft("", "wf_1", "").is_saveable());
        assert!(!draft("sk-1", "", "").is_saveable());
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MalformedApiKey.to_string(),
            "API key must start with \"sk-\""
        );
        assert_eq!(
            ValidationError::MalformedWorkflowId.to_string(),
            "Workflow ID must start with \"wf_\""
        );
    }

    #[test]
    fn test_debug_masks_secret() {
        let rendered = format!("{:?}", draft("sk-proj-topsecret-0000", "wf_1", ""));
        assert!(!rendered.contains("topsecret"));
    }
}
