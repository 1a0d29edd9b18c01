//! UI Components for the CargoHub landing page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with phone and order button
//! - [`Footer`] - Contacts and copyright
//!
//! # Sections
//! - [`Hero`] - Headline and primary call to action
//! - [`Stats`] - Key figures
//! - [`Features`] - Benefits and route cards
//! - [`HowItWorks`] - Five-step process
//! - [`ShippingTypes`] - Shipping modes with prices
//! - [`Testimonials`] - Client reviews
//! - [`Cta`] - Closing call to action
//! - [`Faq`] - Question accordion
//!
//! # Feature Components
//! - [`OrderForm`] - Shipment request modal

mod header;
mod hero;
mod stats;
mod features;
mod how_it_works;
mod shipping_types;
mod testimonials;
mod cta;
mod faq;
mod order_form;
mod footer;

pub use header::*;
pub use hero::*;
pub use stats::*;
pub use features::*;
pub use how_it_works::*;
pub use shipping_types::*;
pub use testimonials::*;
pub use cta::*;
pub use faq::*;
pub use order_form::*;
pub use footer::*;
