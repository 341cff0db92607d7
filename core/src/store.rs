use crate::types::prompt::Prompt;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store for the full prompt collection.
///
/// The whole collection is one JSON document: every read loads it entirely,
/// every write replaces it entirely. There is no locking and no atomic
/// rename; overlapping load/save cycles race and the last writer wins.
#[derive(Debug, Clone)]
pub struct PromptStore {
    path: PathBuf,
}

impl PromptStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the collection. A missing, unreadable, or unparsable document
    /// is treated as an empty collection; the failure is logged, never
    /// propagated, so callers cannot tell "empty" from "load failed."
    pub fn load(&self) -> Vec<Prompt> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Prompt database {} does not exist yet", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                tracing::error!("Error reading prompt database {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(prompts) => prompts,
            Err(e) => {
                tracing::error!("Error parsing prompt database {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Overwrites the document with the full collection, pretty-printed so
    /// the file stays hand-diffable. Write failures are logged and swallowed;
    /// callers must not assume persistence succeeded.
    pub fn save(&self, prompts: &[Prompt]) {
        let body = match serde_json::to_string_pretty(prompts) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Error serializing prompt database: {e}");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).unwrap_or_default();
        }

        if let Err(e) = fs::write(&self.path, body) {
            tracing::error!("Error writing prompt database {}: {e}", self.path.display());
        }
    }
}
