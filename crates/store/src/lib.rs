//! `reventa-store` — the persistent-store interface boundary.
//!
//! The real deployment keeps its records in a remote store that answers
//! fetch-all-matching queries and upserts by natural key. The engine never
//! talks to it directly; the admin layer fetches snapshots through these
//! traits and hands plain slices to the calculators. The in-memory
//! implementations back tests and the demo binary.

pub mod memory;
pub mod tables;

pub use memory::{InMemoryAppendStore, InMemoryKeyedStore};
pub use tables::{AppendStore, KeyedStore};
