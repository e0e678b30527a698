//! Low-level wasm-bindgen bindings to the PayPal JS SDK.
//!
//! Covers only what the checkout page uses: `paypal.Buttons`,
//! `paypal.Messages` and `paypal.CardFields`. Higher-level wrappers live in
//! `sdk.rs`.

use js_sys::Promise;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The global `paypal` namespace installed by the SDK script.
    #[derive(Debug, Clone)]
    pub type JsPaypal;

    /// Any SDK component with a `render(selector)` method.
    #[derive(Debug, Clone)]
    pub type JsComponent;

    /// Card-fields handle returned by `paypal.CardFields(options)`.
    #[derive(Debug, Clone)]
    pub type JsCardFields;

    /// `paypal.Buttons(options)`
    #[wasm_bindgen(method, catch, js_name = Buttons)]
    pub fn buttons(this: &JsPaypal, options: &JsValue) -> Result<JsComponent, JsValue>;

    /// `paypal.Messages(options)`
    #[wasm_bindgen(method, catch, js_name = Messages)]
    pub fn messages(this: &JsPaypal, options: &JsValue) -> Result<JsComponent, JsValue>;

    /// `paypal.CardFields(options)`
    #[wasm_bindgen(method, catch, js_name = CardFields)]
    pub fn card_fields(this: &JsPaypal, options: &JsValue) -> Result<JsCardFields, JsValue>;

    /// `component.render(selector)` → JS `Promise`
    #[wasm_bindgen(method, catch)]
    pub fn render(this: &JsComponent, selector: &str) -> Result<Promise, JsValue>;

    /// `cardFields.isEligible()`
    #[wasm_bindgen(method, js_name = isEligible)]
    pub fn is_eligible(this: &JsCardFields) -> bool;

    #[wasm_bindgen(method, catch, js_name = NumberField)]
    pub fn number_field(this: &JsCardFields) -> Result<JsComponent, JsValue>;

    #[wasm_bindgen(method, catch, js_name = ExpiryField)]
    pub fn expiry_field(this: &JsCardFields) -> Result<JsComponent, JsValue>;

    #[wasm_bindgen(method, catch, js_name = CVVField)]
    pub fn cvv_field(this: &JsCardFields) -> Result<JsComponent, JsValue>;

    /// `cardFields.submit()` → JS `Promise`; runs createOrder/onApprove internally
    #[wasm_bindgen(method, catch)]
    pub fn submit(this: &JsCardFields) -> Result<Promise, JsValue>;
}
