//! Distribution-factor computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::{round_factor, round_weight};
use reventa_purchasing::PurchaseLine;

use crate::shipment::Shipment;

/// A shipment retrieval with its derived distribution data attached.
///
/// Valid for the snapshot it was computed from; registering more purchase
/// lines on the same tracking code changes what the next run derives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedShipment {
    pub shipment: Shipment,
    /// Total shipped weight across the purchase lines on this tracking code,
    /// rounded to the gram for display.
    pub aggregate_weight_kg: Decimal,
    /// Retrieval cost per kilogram, G$/kg.
    pub distribution_factor: Decimal,
}

/// Compute a shipment's aggregate weight and distribution factor.
///
/// Sums the shipped weight of every purchase line carrying the shipment's
/// tracking code, then divides the retrieval cost by it. A shipment with no
/// matching lines (it may be registered before its purchases) or zero total
/// weight gets a zero factor — defined, never an error.
///
/// The division uses the raw weight sum; the 3-dp rounding on
/// `aggregate_weight_kg` is display-only.
pub fn price_shipment(shipment: &Shipment, purchases: &[PurchaseLine]) -> PricedShipment {
    let raw_weight: Decimal = purchases
        .iter()
        .filter(|line| line.tracking_py == shipment.tracking_py)
        .map(|line| line.weight_kg)
        .sum();

    let distribution_factor = if raw_weight > Decimal::ZERO {
        round_factor(shipment.total_cost_gs / raw_weight)
    } else {
        Decimal::ZERO
    };

    PricedShipment {
        shipment: shipment.clone(),
        aggregate_weight_kg: round_weight(raw_weight),
        distribution_factor,
    }
}
