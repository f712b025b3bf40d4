//! Car dealer entity.

use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// An independent dealer record; cars point at it by id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDealer {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone)]
pub struct CarDealerDraft {
    pub name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDealerPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Entity for CarDealer {
    type Draft = CarDealerDraft;
    type Patch = CarDealerPatch;

    fn build(id: String, draft: CarDealerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            city: draft.city,
            country: draft.country,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: CarDealerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
    }
}
