//! Purchase landed-cost allocation.
//!
//! Two allocation policies coexist, on purpose:
//!
//! - the order's "extra" invoice amount (invoiced total minus the sum of lot
//!   costs) splits **evenly per line** of the order;
//! - the shipment retrieval cost splits **by weight**, via the shipment's
//!   G$/kg distribution factor.
//!
//! The asymmetry is the business's accounting policy, not an accident. Do not
//! unify the two without the owner's sign-off.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::{round_gs, round_usd};

use crate::line::PurchaseLine;

/// A purchase line with its derived costs attached.
///
/// Valid for the snapshot it was computed from; every engine run re-derives
/// the cost fields in full. Nothing here is an update of the stored line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedPurchaseLine {
    pub line: PurchaseLine,
    pub total_units: i64,
    pub lot_cost_usd: Decimal,
    pub lot_cost_gs: Decimal,
    /// Even share of the order's non-product invoice residual, in USD.
    pub extra_share_usd: Decimal,
    /// Weight-proportional share of the shipment retrieval cost, in G$.
    pub retrieval_share_gs: Decimal,
}

/// Price one purchase line.
///
/// `siblings` must contain every line of the same order **including `line`
/// itself**; passing the full purchase history is fine, lines of other orders
/// are ignored. `invoiced_total_usd` and `distribution_factor` are the
/// looked-up reference values — `None` (or a non-positive invoice total)
/// degrades the corresponding share to zero rather than failing, since
/// reference data may be entered after the purchase.
pub fn price_line(
    line: &PurchaseLine,
    siblings: &[PurchaseLine],
    invoiced_total_usd: Option<Decimal>,
    distribution_factor: Option<Decimal>,
) -> PricedPurchaseLine {
    let extra_share_usd = extra_share(line, siblings, invoiced_total_usd);

    let retrieval_share_gs = match distribution_factor {
        Some(factor) => round_gs(factor * line.weight_kg),
        None => Decimal::ZERO,
    };

    PricedPurchaseLine {
        total_units: line.total_units(),
        lot_cost_usd: line.lot_cost_usd(),
        lot_cost_gs: line.lot_cost_gs(),
        extra_share_usd,
        retrieval_share_gs,
        line: line.clone(),
    }
}

/// Even split of the order's invoice residual.
///
/// `residual = invoiced_total − Σ lot_cost_usd(siblings)`, divided by the
/// sibling head count (not weighted by cost or quantity).
fn extra_share(
    line: &PurchaseLine,
    siblings: &[PurchaseLine],
    invoiced_total_usd: Option<Decimal>,
) -> Decimal {
    let invoiced = match invoiced_total_usd {
        Some(total) if total > Decimal::ZERO => total,
        _ => return Decimal::ZERO,
    };

    let order_lines = siblings.iter().filter(|s| s.order_no == line.order_no);
    let (count, sum_lots) = order_lines.fold((0i64, Decimal::ZERO), |(n, sum), s| {
        (n + 1, sum + s.lot_cost_usd())
    });

    if count == 0 {
        // `line` is always a member of its own order, so this only happens
        // on a caller bug; an empty order carries no share.
        return Decimal::ZERO;
    }

    round_usd((invoiced - sum_lots) / Decimal::from(count))
}
