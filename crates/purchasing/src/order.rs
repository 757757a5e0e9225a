use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::{round_usd, DomainError, DomainResult};

/// Invoiced total of one supplier order.
///
/// One row per order number, upserted from the order-totals form. The
/// difference between this amount and the sum of the order's lot costs is the
/// "extra" (tax, US shipping, fees) that gets split evenly across the order's
/// lines at pricing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotal {
    pub order_no: String,
    pub invoiced_total_usd: Decimal,
}

impl OrderTotal {
    pub fn new(order_no: impl Into<String>, invoiced_total_usd: Decimal) -> DomainResult<Self> {
        let order_no = order_no.into();
        if order_no.trim().is_empty() {
            return Err(DomainError::validation("order number cannot be empty"));
        }
        if invoiced_total_usd < Decimal::ZERO {
            return Err(DomainError::validation("invoiced total cannot be negative"));
        }

        Ok(Self {
            order_no,
            invoiced_total_usd: round_usd(invoiced_total_usd),
        })
    }
}
