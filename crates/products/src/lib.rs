//! `reventa-products` — product catalog records.

pub mod product;

pub use product::{NewProduct, Product};
