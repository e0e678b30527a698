//! PayPal checkout page
//!
//! WASM frontend wiring the PayPal JS SDK to the order workflow in
//! `checkout-core`. The page markup (amount input, widget containers,
//! order-info panel) is served as static HTML; this crate only attaches to
//! it.

mod api;
mod app;
mod bindings;
mod dom;
mod loader;
mod logging;
mod sdk;
mod status;

pub use dom::DomPage;
pub use loader::DomScriptLoader;
pub use sdk::{PaypalCardFields, PaypalSdk};
pub use status::{LeptosStatusPanel, OrderInfo};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    app::run_when_ready();
}
