//! `reventa-inventory` — stock and weighted-average cost aggregation.

pub mod valuation;

pub use valuation::{summarize, value_sku, CatalogSummary, SkuValuation};
