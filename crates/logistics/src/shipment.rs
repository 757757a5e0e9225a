use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::{generate_key, round_gs, DomainError, DomainResult, RecordId};

/// Display-key prefix for shipment retrievals.
const KEY_PREFIX: &str = "R";

/// Shipment retrieval input, as submitted by the logistics form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShipment {
    /// PY-leg tracking code; natural key of the retrieval.
    pub tracking_py: String,
    pub retrieval_date: NaiveDate,
    /// Total retrieval cost in G$.
    pub total_cost_gs: Decimal,
}

impl NewShipment {
    /// Validate and register as a [`Shipment`], assigning its identifier and
    /// display key.
    pub fn into_shipment(self) -> DomainResult<Shipment> {
        if self.tracking_py.trim().is_empty() {
            return Err(DomainError::validation("PY tracking code cannot be empty"));
        }
        if self.total_cost_gs < Decimal::ZERO {
            return Err(DomainError::validation("retrieval cost cannot be negative"));
        }

        Ok(Shipment {
            id: RecordId::new(),
            display_key: generate_key(KEY_PREFIX),
            tracking_py: self.tracking_py,
            retrieval_date: self.retrieval_date,
            total_cost_gs: round_gs(self.total_cost_gs),
        })
    }
}

/// Registered shipment retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: RecordId,
    /// Human-readable alias (`R-YYYYMMDD-RRRR`); not unique.
    pub display_key: String,
    pub tracking_py: String,
    pub retrieval_date: NaiveDate,
    pub total_cost_gs: Decimal,
}
