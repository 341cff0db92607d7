use crate::error::StoreError;
use crate::store::PromptStore;
use crate::types::prompt::Prompt;
use serde_json::{Map, Value};
use uuid::Uuid;

pub trait PromptService {
    fn list(&self) -> Result<Vec<Prompt>, StoreError>;
    fn create(&self, fields: Map<String, Value>) -> Result<Prompt, StoreError>;
    fn update(&self, id: &str, patch: Map<String, Value>) -> Result<Prompt, StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

pub struct PromptServiceImpl {
    store: PromptStore,
}

impl PromptServiceImpl {
    pub fn new(store: PromptStore) -> Self {
        Self { store }
    }

    fn generate_id() -> String {
        format!("prompt-{}", Uuid::new_v4().simple())
    }
}

impl PromptService for PromptServiceImpl {
    fn list(&self) -> Result<Vec<Prompt>, StoreError> {
        Ok(self.store.load())
    }

    fn create(&self, fields: Map<String, Value>) -> Result<Prompt, StoreError> {
        let mut prompts = self.store.load();

        let prompt = Prompt::from_fields(Self::generate_id(), fields)?;
        prompts.push(prompt.clone());
        self.store.save(&prompts);

        Ok(prompt)
    }

    fn update(&self, id: &str, patch: Map<String, Value>) -> Result<Prompt, StoreError> {
        let mut prompts = self.store.load();

        let index = prompts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let merged = prompts[index].merged_with(&patch)?;
        prompts[index] = merged.clone();
        self.store.save(&prompts);

        Ok(merged)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut prompts = self.store.load();

        let initial_len = prompts.len();
        prompts.retain(|p| p.id != id);
        if prompts.len() == initial_len {
            return Err(StoreError::NotFound(id.to_string()));
        }

        self.store.save(&prompts);
        Ok(())
    }
}
