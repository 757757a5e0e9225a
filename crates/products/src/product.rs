use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::{round_gs, DomainError, DomainResult};

/// Catalog entry input, as submitted by the products form.
///
/// Products upsert by SKU: re-registering a known SKU updates the base fields
/// and keeps the record's computed fields until the next valuation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    /// List price in G$ (whole units).
    pub list_price_gs: Decimal,
}

impl NewProduct {
    /// Validate and convert into a catalog record with empty computed fields.
    pub fn into_product(self) -> DomainResult<Product> {
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.list_price_gs < Decimal::ZERO {
            return Err(DomainError::validation("list price cannot be negative"));
        }

        Ok(Product {
            sku: self.sku,
            name: self.name,
            list_price_gs: round_gs(self.list_price_gs),
            stock: None,
            average_cost_gs: None,
        })
    }
}

/// Catalog entry.
///
/// `stock` and `average_cost_gs` are display fields produced by the inventory
/// aggregator; they are `None` until the first valuation pass writes them
/// back. The catalog itself never computes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub list_price_gs: Decimal,
    pub stock: Option<i64>,
    pub average_cost_gs: Option<Decimal>,
}
