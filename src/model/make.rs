//! Car make entity.

use serde::{Deserialize, Serialize};

use crate::store::Entity;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarMake {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CarMakeDraft {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarMakePatch {
    pub name: Option<String>,
}

impl Entity for CarMake {
    type Draft = CarMakeDraft;
    type Patch = CarMakePatch;

    fn build(id: String, draft: CarMakeDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: CarMakePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}
