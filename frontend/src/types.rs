//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Order Types** - Raw form values and the typed shipment request
//! - **Error Types** - Field validation and submission errors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Order Types
// =============================================================================

/// Supported shipping corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// UAE → Russia
    UaeToRf,
    /// Turkey → Russia
    TurkeyToRf,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::UaeToRf, Route::TurkeyToRf];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::UaeToRf => "uae_to_rf",
            Route::TurkeyToRf => "turkey_to_rf",
        }
    }

    /// Human-readable label for the route selector.
    pub fn label(&self) -> &'static str {
        match self {
            Route::UaeToRf => "🇦🇪 ОАЭ → Россия",
            Route::TurkeyToRf => "🇹🇷 Турция → Россия",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s.trim())
            .ok_or(())
    }
}

/// Identifies one input of the order form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ClientName,
    ClientPhone,
    ClientEmail,
    CompanyName,
    Route,
    CargoType,
    CargoWeight,
    CargoVolume,
    Description,
    PickupAddress,
    DeliveryAddress,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 11] = [
        Field::ClientName,
        Field::ClientPhone,
        Field::ClientEmail,
        Field::CompanyName,
        Field::Route,
        Field::CargoType,
        Field::CargoWeight,
        Field::CargoVolume,
        Field::Description,
        Field::PickupAddress,
        Field::DeliveryAddress,
    ];

    /// JSON key / input name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ClientName => "client_name",
            Field::ClientPhone => "client_phone",
            Field::ClientEmail => "client_email",
            Field::CompanyName => "company_name",
            Field::Route => "route",
            Field::CargoType => "cargo_type",
            Field::CargoWeight => "cargo_weight",
            Field::CargoVolume => "cargo_volume",
            Field::Description => "description",
            Field::PickupAddress => "pickup_address",
            Field::DeliveryAddress => "delivery_address",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::ClientName | Field::ClientPhone | Field::Route | Field::CargoType
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderFormValues {
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub company_name: String,
    /// Empty until a route is picked.
    pub route: String,
    pub cargo_type: String,
    pub cargo_weight: String,
    pub cargo_volume: String,
    pub description: String,
    pub pickup_address: String,
    pub delivery_address: String,
}

impl OrderFormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ClientName => &self.client_name,
            Field::ClientPhone => &self.client_phone,
            Field::ClientEmail => &self.client_email,
            Field::CompanyName => &self.company_name,
            Field::Route => &self.route,
            Field::CargoType => &self.cargo_type,
            Field::CargoWeight => &self.cargo_weight,
            Field::CargoVolume => &self.cargo_volume,
            Field::Description => &self.description,
            Field::PickupAddress => &self.pickup_address,
            Field::DeliveryAddress => &self.delivery_address,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::ClientName => &mut self.client_name,
            Field::ClientPhone => &mut self.client_phone,
            Field::ClientEmail => &mut self.client_email,
            Field::CompanyName => &mut self.company_name,
            Field::Route => &mut self.route,
            Field::CargoType => &mut self.cargo_type,
            Field::CargoWeight => &mut self.cargo_weight,
            Field::CargoVolume => &mut self.cargo_volume,
            Field::Description => &mut self.description,
            Field::PickupAddress => &mut self.pickup_address,
            Field::DeliveryAddress => &mut self.delivery_address,
        };
        *slot = value;
    }

    /// True when every field is blank.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).trim().is_empty())
    }
}

/// Validated shipment request, posted to `/api/v1/orders/`.
///
/// Optional fields left blank are omitted from the JSON body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub client_name: String,
    pub client_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub route: Route,
    pub cargo_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// A single failed field check, shown inline under the input.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Why an order could not be delivered to the intake service.
///
/// The visitor only ever sees a generic message; the variant is logged.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmitError {
    /// Request body could not be built.
    #[error("Failed to encode order: {0}")]
    Encode(String),

    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-2xx status.
    #[error("Order rejected by server ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Why a submit click did not start a request.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmitBlocked {
    /// A request is in flight or the confirmation is still showing.
    #[error("A submission is already in progress")]
    Busy,

    /// Local validation failed.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Result type alias for order transport.
pub type SubmitResult<T> = Result<T, SubmitError>;
