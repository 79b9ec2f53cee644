//! `--status` and `--clear`.

use std::io::Write;

use color_eyre::{eyre::eyre, Result};

use crate::credentials::{mask_secret, CredentialStore, WriteOutcome};
use crate::traits::KeyValueStorage;

fn hydrate<S: KeyValueStorage>(store: &mut CredentialStore<S>) -> Result<()> {
    if store.load() {
        Ok(())
    } else {
        Err(eyre!("Settings storage is unavailable"))
    }
}

/// Print readiness and the stored values; the API key is masked.
pub fn write_status<S, W>(store: &mut CredentialStore<S>, out: &mut W) -> Result<()>
where
    S: KeyValueStorage,
    W: Write,
{
    hydrate(store)?;
    let Some(snapshot) = store.snapshot() else {
        return Err(eyre!("Settings storage is unavailable"));
    };

    let state = if snapshot.is_valid() { "ready" } else { "incomplete" };
    writeln!(out, "Status:           {}", state)?;
    writeln!(out, "API key:          {}", or_unset(&snapshot.api_key, mask_secret))?;
    writeln!(
        out,
        "Workflow ID:      {}",
        or_unset(&snapshot.workflow_id, str::to_string)
    )?;
    let version = snapshot
        .workflow_version
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Latest".to_string());
    writeln!(out, "Workflow version: {}", version)?;
    Ok(())
}

fn or_unset(value: &str, render: fn(&str) -> String) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        render(value)
    }
}

/// Remove every stored credential.
pub fn run_clear<S, W>(store: &mut CredentialStore<S>, out: &mut W) -> Result<()>
where
    S: KeyValueStorage,
    W: Write,
{
    hydrate(store)?;
    match store.clear()? {
        WriteOutcome::Applied => {
            writeln!(out, "Stored credentials cleared.")?;
            Ok(())
        }
        WriteOutcome::Deferred => Err(eyre!("Settings storage is unavailable")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStorage;
    use crate::credentials::{API_KEY_STORAGE, WORKFLOW_ID_STORAGE, WORKFLOW_VERSION_STORAGE};

    fn render(storage: InMemoryStorage) -> Result<String> {
        let mut store = CredentialStore::new(storage);
        let mut out = Vec::new();
        write_status(&mut store, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_status_ready_masks_key() {
        let storage = InMemoryStorage::with_entries([
            (API_KEY_STORAGE, "sk-proj-secretvalue-9876"),
            (WORKFLOW_ID_STORAGE, "wf_abc"),
            (WORKFLOW_VERSION_STORAGE, "4"),
        ]);
        let text = render(storage).unwrap();

        assert!(text.contains("ready"));
        assert!(!text.contains("incomplete"));
        assert!(text.contains("9876"));
        assert!(!text.contains("secretvalue"));
        assert!(text.contains("wf_abc"));
        assert!(text.contains("Workflow version: 4"));
    }

    #[test]
    fn test_status_empty() {
        let text = render(InMemoryStorage::new()).unwrap();
        assert!(text.contains("incomplete"));
        assert!(text.contains("(not set)"));
        assert!(text.contains("Latest"));
    }

    #[test]
    fn test_status_unavailable_is_error() {
        assert!(render(InMemoryStorage::unavailable()).is_err());
    }

    #[test]
    fn test_clear_removes_entries() {
        let storage = InMemoryStorage::with_entries([
            (API_KEY_STORAGE, "sk-1"),
            (WORKFLOW_ID_STORAGE, "wf_1"),
        ]);
        let mut store = CredentialStore::new(storage.clone());
        let mut out = Vec::new();

        run_clear(&mut store, &mut out).unwrap();
        assert!(storage.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("cleared"));
    }
}
