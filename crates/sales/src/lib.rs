//! `reventa-sales` — sale records.

pub mod sale;

pub use sale::{record_sale, NewSale, SaleLine};
