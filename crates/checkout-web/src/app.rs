//! Page bootstrap
//!
//! DOM-ready → amount listener + status panel → config fetch → SDK script →
//! widgets. Any failure before the widgets exist is logged and leaves the
//! page without a checkout UI.

use std::rc::Rc;

use checkout_core::{
    load_sdk, refresh_total, CheckoutCallbacks, HttpBackend, OrderWorkflow, Result,
    SdkInitializer,
};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::api;
use crate::dom::DomPage;
use crate::loader::DomScriptLoader;
use crate::sdk::PaypalSdk;
use crate::status::LeptosStatusPanel;

/// Start now if the document is parsed, otherwise on `DOMContentLoaded`
pub fn run_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::error!("No document available");
        return;
    };

    if document.ready_state() != "loading" {
        start();
        return;
    }

    let on_ready = Closure::once_into_js(start);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        tracing::error!(error = ?e, "Could not wait for DOMContentLoaded");
    }
}

fn start() {
    if let Err(e) = boot() {
        tracing::error!(error = %e, "Checkout bootstrap failed");
    }
}

fn boot() -> Result<()> {
    let page = Rc::new(DomPage::from_window()?);

    let listener_page = page.clone();
    page.on_amount_input(move || {
        refresh_total(listener_page.as_ref());
    })?;

    let panel = LeptosStatusPanel::mount(page.order_info()?);
    let origin = api::page_origin()?;

    wasm_bindgen_futures::spawn_local(async move {
        let config = match api::fetch_sdk_config(&origin).await {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load checkout configuration");
                return;
            }
        };

        let workflow: Rc<dyn CheckoutCallbacks> = Rc::new(OrderWorkflow::new(
            HttpBackend::new(origin),
            page.clone(),
            panel,
        ));

        let loader = DomScriptLoader::new(page.document().clone());
        let initializer = SdkInitializer::new(page.mounts().clone());
        let init_page = page.clone();

        let loaded = load_sdk(&loader, &config, move || match PaypalSdk::from_window() {
            Ok(sdk) => {
                initializer.initialize(&sdk, workflow, &init_page);
            }
            Err(e) => tracing::error!(error = %e, "PayPal SDK loaded without its namespace"),
        });

        if let Err(e) = loaded {
            tracing::error!(error = %e, "Failed to load PayPal SDK");
        }
    });

    Ok(())
}
