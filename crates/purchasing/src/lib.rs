//! `reventa-purchasing` — purchase lot records and landed-cost allocation.
//!
//! A purchase line is one SKU bought on one supplier order. Pricing a line
//! attaches its derived costs: lot cost in both currencies, a head-count
//! share of the order's "extra" (non-product) invoice amount, and a
//! weight-proportional share of the shipment retrieval cost.

pub mod costing;
pub mod line;
pub mod order;

pub use costing::{price_line, PricedPurchaseLine};
pub use line::{NewPurchaseLine, PurchaseLine};
pub use order::OrderTotal;
