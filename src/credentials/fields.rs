//! Field-level rules for credentials.

use std::fmt;
use std::num::NonZeroU64;

/// Required prefix of an API key.
pub const API_KEY_PREFIX: &str = "sk-";

/// Required prefix of a workflow identifier.
pub const WORKFLOW_ID_PREFIX: &str = "wf_";

/// Largest version accepted, the biggest integer an f64 holds exactly.
const MAX_WORKFLOW_VERSION: f64 = 9_007_199_254_740_991.0;

/// Check that `value` is non-empty and carries `prefix`.
pub fn well_formed(value: &str, prefix: &str) -> bool {
    !value.is_empty() && value.starts_with(prefix)
}

/// Check whether an API key is well-formed.
pub fn is_well_formed_api_key(value: &str) -> bool {
    well_formed(value, API_KEY_PREFIX)
}

/// Check whether a workflow identifier is well-formed.
pub fn is_well_formed_workflow_id(value: &str) -> bool {
    well_formed(value, WORKFLOW_ID_PREFIX)
}

/// Mask a secret for display or logging.
///
/// Short values are fully hidden; longer ones keep the first three and the
/// last four characters.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return "\u{2022}".repeat(chars.len());
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}\u{2026}{}", head, tail)
}

/// A pinned workflow version. Always at least 1.
///
/// Absence of a version (`Option::None`) means "use latest".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkflowVersion(NonZeroU64);

impl WorkflowVersion {
    /// Create a version from an integer, `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// The numeric version.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Normalize free-form text into a version.
    ///
    /// Empty text, non-numbers, non-finite numbers and anything below 1
    /// after flooring yield `None`. `"3.7"` yields 3.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let number: f64 = trimmed.parse().ok()?;
        if !number.is_finite() || number <= 0.0 {
            return None;
        }

        let floored = number.floor();
        if !(1.0..=MAX_WORKFLOW_VERSION).contains(&floored) {
            return None;
        }
        Self::new(floored as u64)
    }
}

impl fmt::Display for WorkflowVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
