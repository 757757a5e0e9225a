//! `reventa-logistics` — shipment retrievals and cost distribution.
//!
//! A retrieval is one pickup of freight on the PY side, identified by its
//! tracking code. Its total cost is spread over the purchase lines it carried
//! in proportion to their weight, via a G$/kg distribution factor.

pub mod distribution;
pub mod shipment;

pub use distribution::{price_shipment, PricedShipment};
pub use shipment::{NewShipment, Shipment};
