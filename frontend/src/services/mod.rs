//! Backend services.
//!
//! # Services
//!
//! - [`orders`] - Shipment request submission to the order intake API

pub mod orders;

pub use orders::*;
