use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::car::SizeClass;

/// Per-size price table. Rows that carry one always carry all four sizes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizePricing {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub extra_large: f64,
}

impl SizePricing {
    pub fn get(&self, size: SizeClass) -> f64 {
        match size {
            SizeClass::Small => self.small,
            SizeClass::Medium => self.medium,
            SizeClass::Large => self.large,
            SizeClass::ExtraLarge => self.extra_large,
        }
    }
}

/// A sellable wash service, row of the `services` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pricing: Option<SizePricing>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Service {
    /// Price for a given vehicle size, falling back to the base price when
    /// the row has no per-size table.
    pub fn price_for(&self, size: SizeClass) -> f64 {
        self.pricing.map(|p| p.get(size)).unwrap_or(self.price)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct NewService {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<SizePricing>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ServiceChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<SizePricing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_for_prefers_size_table() {
        let svc = Service {
            id: Uuid::new_v4(),
            name: "Full Wash".into(),
            price: 10.0,
            description: None,
            pricing: Some(SizePricing { small: 8.0, medium: 10.0, large: 12.0, extra_large: 15.0 }),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(svc.price_for(SizeClass::ExtraLarge), 15.0);

        let flat = Service { pricing: None, ..svc };
        assert_eq!(flat.price_for(SizeClass::ExtraLarge), 10.0);
    }

    #[test]
    fn changes_skip_absent_fields() {
        let changes = ServiceChanges { price: Some(12.5), ..Default::default() };
        let json = serde_json::to_value(&changes).expect("serialize");
        assert_eq!(json, serde_json::json!({ "price": 12.5 }));
    }
}
