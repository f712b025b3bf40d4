//! List entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// A named list. Owns items by convention only: deleting a list does not
/// cascade to its items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ListDraft {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPatch {
    pub name: Option<String>,
}

impl Entity for List {
    type Draft = ListDraft;
    type Patch = ListPatch;

    fn build(id: String, draft: ListDraft) -> Self {
        Self {
            id,
            name: draft.name,
            created_at: Utc::now(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: ListPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}
