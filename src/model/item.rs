//! List item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// An item belonging to a list. `list_id` is an unvalidated reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub list_id: String,
    pub name: String,
    pub done: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub list_id: Option<String>,
    pub name: Option<String>,
    pub done: Option<bool>,
}

impl Entity for Item {
    type Draft = ItemDraft;
    type Patch = ItemPatch;

    fn build(id: String, draft: ItemDraft) -> Self {
        Self {
            id,
            list_id: draft.list_id,
            name: draft.name,
            done: draft.done,
            created_at: Utc::now(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: ItemPatch) {
        if let Some(list_id) = patch.list_id {
            self.list_id = list_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }
}
