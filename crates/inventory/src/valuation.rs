//! Inventory valuation over full purchase and sale history.
//!
//! Every query recomputes from scratch over the entire historical set: O(n)
//! per SKU, no caching, no incremental path. That keeps the numbers correct
//! under out-of-order or late-arriving records, which an interactively-entered
//! dataset produces all the time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::round_avg_gs;
use reventa_products::Product;
use reventa_purchasing::PricedPurchaseLine;
use reventa_sales::SaleLine;

/// Stock and weighted-average landed cost of one SKU, as of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuValuation {
    pub sku: String,
    /// Units acquired minus units sold. Negative under oversell — surfaced,
    /// not clamped.
    pub stock: i64,
    /// Total landed cost (lot cost G$ + retrieval share G$) divided by units
    /// ever acquired; 0 when nothing was ever acquired.
    pub average_unit_cost_gs: Decimal,
}

/// Compute stock and weighted-average landed unit cost for one SKU.
pub fn value_sku(
    sku: &str,
    purchases: &[PricedPurchaseLine],
    sales: &[SaleLine],
) -> SkuValuation {
    let matching = || purchases.iter().filter(|p| p.line.sku == sku);

    let acquired_units: i64 = matching().map(|p| p.total_units).sum();
    let sold_units: i64 = sales
        .iter()
        .filter(|s| s.sku == sku)
        .map(|s| s.quantity_sold)
        .sum();

    let total_landed_gs: Decimal = matching()
        .map(|p| p.lot_cost_gs + p.retrieval_share_gs)
        .sum();

    let average_unit_cost_gs = if acquired_units > 0 {
        round_avg_gs(total_landed_gs / Decimal::from(acquired_units))
    } else {
        Decimal::ZERO
    };

    SkuValuation {
        sku: sku.to_string(),
        stock: acquired_units - sold_units,
        average_unit_cost_gs,
    }
}

/// Catalog-wide roll-up for the inventory overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_products: usize,
    /// Sum of per-SKU stock (oversold SKUs subtract).
    pub total_stock: i64,
    /// Σ stock × average unit cost over SKUs with positive stock.
    pub stock_value_gs: Decimal,
    pub oversold_skus: usize,
}

/// Value every catalog entry and roll the results up.
pub fn summarize(
    catalog: &[Product],
    purchases: &[PricedPurchaseLine],
    sales: &[SaleLine],
) -> CatalogSummary {
    let valuations: Vec<SkuValuation> = catalog
        .iter()
        .map(|p| value_sku(&p.sku, purchases, sales))
        .collect();

    CatalogSummary {
        total_products: catalog.len(),
        total_stock: valuations.iter().map(|v| v.stock).sum(),
        stock_value_gs: valuations
            .iter()
            .filter(|v| v.stock > 0)
            .map(|v| Decimal::from(v.stock) * v.average_unit_cost_gs)
            .sum(),
        oversold_skus: valuations.iter().filter(|v| v.stock < 0).count(),
    }
}
