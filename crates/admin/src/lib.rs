//! `reventa-admin` — admin flows over the store boundary.
//!
//! Each service call mirrors one form submission in the admin UI: fetch the
//! snapshots the engine needs, run the calculators, write records back. The
//! engine itself stays pure; this crate is the only place that touches
//! stores.

pub mod services;

pub use services::AdminServices;
