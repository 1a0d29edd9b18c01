//! CargoHub - Frontend Rust/Leptos Application
//!
//! A WebAssembly landing page for a cargo brokerage shipping from the UAE
//! and Turkey to Russia, with a single lead-capture form that posts
//! shipment requests to the order intake API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  LandingPage (owns RwSignal<OrderFlow>)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header ─────────────── open() ──────────┐                   │
//! │  Hero ───────────────── open() ──────────┤                   │
//! │  Stats, Features, HowItWorks             │                   │
//! │  ShippingTypes ──────── open() ──────────┤                   │
//! │  Testimonials                            ▼                   │
//! │  Cta ────────────────── open() ───▶ OrderForm (modal)        │
//! │  Faq                                     │ submit()          │
//! │  Footer                                  ▼                   │
//! │                          POST {API_BASE_URL}/api/v1/orders/  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - API base URL and constants
//! - [`types`] - Shipment request, form values, errors
//! - [`validation`] - Per-field validators
//! - [`flow`] - Order modal state machine and submit driver
//! - [`services`] - Order intake HTTP client
//! - [`content`] - Static page copy
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::{Route, Router, Routes};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod flow;
pub mod services;
pub mod content;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Orders
    Field, OrderFormValues, ShipmentRequest,
    // Errors
    FieldError, SubmitBlocked, SubmitError, SubmitResult,
};

// Flow
pub use flow::{OrderFlow, SubmitOutcome, SubmitPhase, GENERIC_SUBMIT_ERROR};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚚 CargoHub - Starting Leptos App (API: {})", api_base_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} - Грузоперевозки из ОАЭ и Турции в РФ", APP_NAME)/>
        <Meta
            name="description"
            content="Надежные грузоперевозки из ОАЭ и Турции в Россию. Доставка под ключ с полным сопровождением."
        />
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    // Modal state lives here and is handed to whoever needs it.
    let order_flow = create_rw_signal(OrderFlow::new());
    let open_order_form = Callback::new(move |_: ()| {
        log::debug!("Opening order form");
        order_flow.update(OrderFlow::open);
    });

    view! {
        <Header on_order_click=open_order_form/>

        <main class="page">
            <Hero on_order_click=open_order_form/>
            <Stats/>
            <Features/>
            <HowItWorks/>
            <ShippingTypes on_order_click=open_order_form/>
            <Testimonials/>
            <Cta on_order_click=open_order_form/>
            <Faq/>
            <OrderForm flow=order_flow/>
        </main>

        <Footer/>
    }
}
