//! `reventa-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod key;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use key::generate_key;
pub use money::{round_avg_gs, round_factor, round_gs, round_usd, round_weight};
