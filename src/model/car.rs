//! Car entity.

use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// A car offered by a dealer.
///
/// `dealer_id` and `car_make_id` are unvalidated references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub dealer_id: String,
    pub car_make_id: String,
    pub name: String,
    pub price: f64,
    pub year: i32,
    pub color: String,
    pub wheels_count: u32,
}

/// Validated creation payload for a [`Car`].
#[derive(Debug, Clone)]
pub struct CarDraft {
    pub dealer_id: String,
    pub car_make_id: String,
    pub name: String,
    pub price: f64,
    pub year: i32,
    pub color: String,
    pub wheels_count: u32,
}

/// Partial update for a [`Car`]. Unknown keys (including `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPatch {
    pub dealer_id: Option<String>,
    pub car_make_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub wheels_count: Option<u32>,
}

impl Entity for Car {
    type Draft = CarDraft;
    type Patch = CarPatch;

    fn build(id: String, draft: CarDraft) -> Self {
        Self {
            id,
            dealer_id: draft.dealer_id,
            car_make_id: draft.car_make_id,
            name: draft.name,
            price: draft.price,
            year: draft.year,
            color: draft.color,
            wheels_count: draft.wheels_count,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: CarPatch) {
        if let Some(dealer_id) = patch.dealer_id {
            self.dealer_id = dealer_id;
        }
        if let Some(car_make_id) = patch.car_make_id {
            self.car_make_id = car_make_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(wheels_count) = patch.wheels_count {
            self.wheels_count = wheels_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let car = Car::build(
            "c1".to_string(),
            CarDraft {
                dealer_id: "d1".to_string(),
                car_make_id: "m1".to_string(),
                name: "roadster".to_string(),
                price: 9_999.5,
                year: 2021,
                color: "red".to_string(),
                wheels_count: 4,
            },
        );

        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["dealerId"], "d1");
        assert_eq!(json["carMakeId"], "m1");
        assert_eq!(json["wheelsCount"], 4);
    }

    #[test]
    fn test_patch_ignores_unknown_keys() {
        let patch: CarPatch =
            serde_json::from_value(serde_json::json!({"id": "evil", "color": "green"})).unwrap();
        assert_eq!(patch.color.as_deref(), Some("green"));
        assert!(patch.name.is_none());
    }
}
