//! Credential snapshot and its authoritative store.
//!
//! - [`fields`] - well-formedness rules and the workflow version type
//! - [`snapshot`] - [`CredentialSnapshot`] and the two-state [`Lifecycle`]
//! - [`store`] - [`CredentialStore`], the single writer of durable state

pub mod fields;
pub mod snapshot;
pub mod store;

pub use fields::{
    is_well_formed_api_key, is_well_formed_workflow_id, mask_secret, well_formed,
    WorkflowVersion, API_KEY_PREFIX, WORKFLOW_ID_PREFIX,
};
pub use snapshot::{CredentialSnapshot, Lifecycle};
pub use store::{
    CredentialStore, CredentialStoreError, Published, WriteOutcome, API_KEY_STORAGE,
    WORKFLOW_ID_STORAGE, WORKFLOW_VERSION_STORAGE,
};
