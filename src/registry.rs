use crate::domain::MicrofrontendInfo;
use crate::error::ObservabilityError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory map from microfrontend id to its latest registered metadata.
#[derive(Debug, Default)]
pub struct MicrofrontendRegistry {
    entries: RwLock<HashMap<String, Arc<MicrofrontendInfo>>>,
}

impl MicrofrontendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `info`, replacing any previous entry with the same id.
    pub fn register(&self, info: MicrofrontendInfo) -> Result<(), ObservabilityError> {
        validate_id(&info.id)?;

        let id = info.id.clone();
        let previous = self.entries.write().insert(id.clone(), Arc::new(info));
        match previous {
            Some(_) => debug!(mfe_id = %id, "Replaced microfrontend metadata"),
            None => debug!(mfe_id = %id, "Registered microfrontend"),
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<MicrofrontendInfo>> {
        self.entries.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Registered ids in lexical order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.read().keys().cloned().collect();
        ids.sort_unstable();
        ids
    }
}

/// Rejects ids that are empty or whitespace-only.
fn validate_id(id: &str) -> Result<(), ObservabilityError> {
    if id.trim().is_empty() {
        return Err(ObservabilityError::Validation(
            "Microfrontend info must include a non-empty id".into(),
        ));
    }
    Ok(())
}
