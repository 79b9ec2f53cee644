//! Settings surface over the credential store.
//!
//! The operator only ever edits a [`Draft`]; [`validate_and_commit`] is the
//! one place a draft becomes [`Credentials`], and [`SettingsSurface`] owns
//! when that happens.

pub mod draft;
pub mod surface;

pub use draft::{validate_and_commit, Credentials, Draft, DraftField, ValidationError};
pub use surface::{CommitError, SettingsSurface, Visibility};
