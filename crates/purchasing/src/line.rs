use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::{generate_key, round_gs, round_usd, DomainError, DomainResult, RecordId};

/// Display-key prefix for purchase lines.
const KEY_PREFIX: &str = "C";

/// Purchase line input, as submitted by the purchases form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPurchaseLine {
    /// Supplier order this line belongs to (joins to [`crate::OrderTotal`]).
    pub order_no: String,
    pub sku: String,
    pub purchase_date: NaiveDate,
    pub supplier: String,
    /// Packages bought.
    pub quantity_acquired: i64,
    /// Sellable units per package.
    pub units_per_package: i64,
    /// Cost per package in USD.
    pub unit_cost_usd: Decimal,
    /// Fixed USD→G$ exchange rate agreed for this purchase.
    pub exchange_rate: Decimal,
    /// US-leg courier tracking (informational).
    pub tracking_us: Option<String>,
    /// PY-leg tracking code (joins to the shipment retrieval).
    pub tracking_py: String,
    /// Shipped weight in kg.
    pub weight_kg: Decimal,
}

impl NewPurchaseLine {
    /// Validate and register as a [`PurchaseLine`], assigning its identifier
    /// and display key.
    ///
    /// The form layer validates before submitting; this is the defensive
    /// re-check at the domain boundary. Referential checks (does the order
    /// total or the shipment exist?) are deliberately absent — missing
    /// reference data degrades to zero shares at pricing time.
    pub fn into_line(self) -> DomainResult<PurchaseLine> {
        if self.order_no.trim().is_empty() {
            return Err(DomainError::validation("order number cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if self.tracking_py.trim().is_empty() {
            return Err(DomainError::validation("PY tracking code cannot be empty"));
        }
        if self.quantity_acquired < 0 {
            return Err(DomainError::validation("quantity acquired cannot be negative"));
        }
        if self.units_per_package < 1 {
            return Err(DomainError::validation("units per package must be at least 1"));
        }
        if self.unit_cost_usd < Decimal::ZERO {
            return Err(DomainError::validation("unit cost cannot be negative"));
        }
        if self.exchange_rate < Decimal::ZERO {
            return Err(DomainError::validation("exchange rate cannot be negative"));
        }
        if self.weight_kg < Decimal::ZERO {
            return Err(DomainError::validation("weight cannot be negative"));
        }

        Ok(PurchaseLine {
            id: RecordId::new(),
            display_key: generate_key(KEY_PREFIX),
            order_no: self.order_no,
            sku: self.sku,
            purchase_date: self.purchase_date,
            supplier: self.supplier,
            quantity_acquired: self.quantity_acquired,
            units_per_package: self.units_per_package,
            unit_cost_usd: self.unit_cost_usd,
            exchange_rate: self.exchange_rate,
            tracking_us: self.tracking_us,
            tracking_py: self.tracking_py,
            weight_kg: self.weight_kg,
        })
    }
}

/// Registered purchase line.
///
/// The identifier and display key are fixed at registration; every derived
/// cost is recomputed from scratch by the calculator on each engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub id: RecordId,
    /// Human-readable alias (`C-YYYYMMDD-RRRR`); not unique.
    pub display_key: String,
    pub order_no: String,
    pub sku: String,
    pub purchase_date: NaiveDate,
    pub supplier: String,
    pub quantity_acquired: i64,
    pub units_per_package: i64,
    pub unit_cost_usd: Decimal,
    pub exchange_rate: Decimal,
    pub tracking_us: Option<String>,
    pub tracking_py: String,
    pub weight_kg: Decimal,
}

impl PurchaseLine {
    /// Sellable units in this lot: packages × units per package.
    pub fn total_units(&self) -> i64 {
        self.quantity_acquired * self.units_per_package
    }

    /// Lot cost in USD: packages × package cost, rounded to cents.
    pub fn lot_cost_usd(&self) -> Decimal {
        round_usd(Decimal::from(self.quantity_acquired) * self.unit_cost_usd)
    }

    /// Lot cost in G$ at the fixed rate, rounded to the whole guaraní.
    pub fn lot_cost_gs(&self) -> Decimal {
        round_gs(self.lot_cost_usd() * self.exchange_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_line() -> NewPurchaseLine {
        NewPurchaseLine {
            order_no: "AMZ-1043".to_string(),
            sku: "P1".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
            supplier: "Amazon".to_string(),
            quantity_acquired: 4,
            units_per_package: 10,
            unit_cost_usd: dec!(9.99),
            exchange_rate: dec!(7350),
            tracking_us: Some("1Z999AA1".to_string()),
            tracking_py: "PY-2211".to_string(),
            weight_kg: dec!(10),
        }
    }

    #[test]
    fn valid_input_registers_with_key_and_id() {
        let line = new_line().into_line().unwrap();
        assert_eq!(line.total_units(), 40);
        assert!(line.display_key.starts_with("C-"));
    }

    #[test]
    fn each_registration_gets_its_own_id() {
        let a = new_line().into_line().unwrap();
        let b = new_line().into_line().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn lot_costs_follow_the_fixed_rate() {
        let line = new_line().into_line().unwrap();
        assert_eq!(line.lot_cost_usd(), dec!(39.96));
        assert_eq!(line.lot_cost_gs(), dec!(293706));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut input = new_line();
        input.quantity_acquired = -1;
        let err = input.into_line().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut input = new_line();
        input.weight_kg = dec!(-0.5);
        assert!(input.into_line().is_err());
    }

    #[test]
    fn zero_units_per_package_is_rejected() {
        let mut input = new_line();
        input.units_per_package = 0;
        assert!(input.into_line().is_err());
    }

    #[test]
    fn blank_tracking_py_is_rejected() {
        let mut input = new_line();
        input.tracking_py = String::new();
        assert!(input.into_line().is_err());
    }
}
