//! DOM mount points
//!
//! The checkout page's fixed elements, looked up by id on every access.

use checkout_core::{CheckoutError, CheckoutPage, MountPoints, Result};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Checkout page backed by the live document
#[derive(Clone)]
pub struct DomPage {
    document: Document,
    mounts: MountPoints,
}

impl DomPage {
    pub fn new(document: Document, mounts: MountPoints) -> Self {
        Self { document, mounts }
    }

    /// Page for the current window with the default mount points
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CheckoutError::MountPoint("document".into()))?;

        Ok(Self::new(document, MountPoints::default()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mounts(&self) -> &MountPoints {
        &self.mounts
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            tracing::warn!(id, "Page element not found");
        }
        element
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id).and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    /// The order-info panel the status presenter renders into
    pub fn order_info(&self) -> Result<HtmlElement> {
        self.html_element(&self.mounts.order_info)
            .ok_or_else(|| CheckoutError::MountPoint(self.mounts.order_info.clone()))
    }

    /// Run `handler` on every `input` event of the amount field
    pub fn on_amount_input(&self, handler: impl Fn() + 'static) -> Result<()> {
        let input = self
            .element(&self.mounts.amount_input)
            .ok_or_else(|| CheckoutError::MountPoint(self.mounts.amount_input.clone()))?;

        let listener = Closure::<dyn Fn()>::new(handler);
        input
            .add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())
            .map_err(|e| CheckoutError::MountPoint(format!("{e:?}")))?;
        // Lives as long as the page.
        listener.forget();
        Ok(())
    }
}

impl CheckoutPage for DomPage {
    fn amount_value(&self) -> Option<String> {
        self.element(&self.mounts.amount_input)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }

    fn set_total(&self, total: &str) {
        if let Some(display) = self.element(&self.mounts.total_amount) {
            display.set_text_content(Some(total));
        }
    }

    fn hide_card_section(&self) {
        if let Some(section) = self.html_element(&self.mounts.card_section) {
            if let Err(e) = section.style().set_property("display", "none") {
                tracing::warn!(error = ?e, "Could not hide card section");
            }
        }
    }

    fn on_card_submit(&self, handler: Box<dyn Fn()>) {
        let Some(button) = self.element(&self.mounts.card_submit) else {
            return;
        };

        let listener = Closure::wrap(handler);
        if let Err(e) =
            button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            tracing::error!(error = ?e, "Could not wire card submit button");
            return;
        }
        listener.forget();
    }
}
