//! PayPal SDK adapter
//!
//! Implements the core [`PaymentSdk`] / [`CardFields`] traits on top of the
//! raw bindings. Callback objects handed to the SDK are built from the shared
//! [`CheckoutCallbacks`]; async callbacks become JS promises.

use std::rc::Rc;

use checkout_core::{
    ButtonStyle, CardField, CardFields, CheckoutCallbacks, CheckoutError, MessagesOptions,
    PaymentSdk, PaymentSource, Result,
};
use js_sys::{Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};

use crate::bindings::{JsCardFields, JsComponent, JsPaypal};

/// Best-effort text for a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

fn sdk_error(value: JsValue) -> CheckoutError {
    CheckoutError::Sdk(describe_js(&value))
}

/// Serialize through JSON so the SDK receives a plain object
fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(sdk_error)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(sdk_error)?;
    Ok(())
}

fn get_string(data: &JsValue, key: &str) -> Option<String> {
    Reflect::get(data, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}

/// Await a render promise in the background, logging rejection
fn spawn_render(widget: &'static str, promise: Promise) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            tracing::error!(widget, error = %describe_js(&e), "Widget render failed");
        }
    });
}

/// `{createOrder, onApprove, onError[, onCancel]}` for an SDK component
fn callback_options(callbacks: &Rc<dyn CheckoutCallbacks>, with_cancel: bool) -> Result<Object> {
    let options = Object::new();

    let cb = callbacks.clone();
    let create_order = Closure::<dyn Fn(JsValue) -> Promise>::new(move |data: JsValue| {
        let cb = cb.clone();
        let source = get_string(&data, "paymentSource").map(PaymentSource::new);
        future_to_promise(async move {
            cb.create_order(source)
                .await
                .map(JsValue::from)
                .map_err(|e| js_sys::Error::new(&e.to_string()).into())
        })
    });
    set(&options, "createOrder", &create_order.into_js_value())?;

    let cb = callbacks.clone();
    let on_approve = Closure::<dyn Fn(JsValue) -> Promise>::new(move |data: JsValue| {
        let cb = cb.clone();
        let order_id = get_string(&data, "orderID");
        future_to_promise(async move {
            match order_id {
                Some(order_id) => cb.on_approve(&order_id).await,
                None => cb.on_error("approval received without an order id"),
            }
            Ok(JsValue::UNDEFINED)
        })
    });
    set(&options, "onApprove", &on_approve.into_js_value())?;

    let cb = callbacks.clone();
    let on_error = Closure::<dyn Fn(JsValue)>::new(move |err: JsValue| {
        cb.on_error(&describe_js(&err));
    });
    set(&options, "onError", &on_error.into_js_value())?;

    if with_cancel {
        let cb = callbacks.clone();
        let on_cancel = Closure::<dyn Fn(JsValue)>::new(move |_data: JsValue| cb.on_cancel());
        set(&options, "onCancel", &on_cancel.into_js_value())?;
    }

    Ok(options)
}

/// Handle to the loaded `paypal` namespace
pub struct PaypalSdk {
    paypal: JsPaypal,
}

impl PaypalSdk {
    /// Look up `window.paypal`; fails if the script has not run
    pub fn from_window() -> Result<Self> {
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str("paypal"))
            .map_err(sdk_error)?;

        if value.is_undefined() || value.is_null() {
            return Err(CheckoutError::Sdk("paypal namespace not found".into()));
        }

        Ok(Self {
            paypal: value.unchecked_into(),
        })
    }
}

impl PaymentSdk for PaypalSdk {
    type CardFields = PaypalCardFields;

    fn render_buttons(
        &self,
        style: &ButtonStyle,
        callbacks: Rc<dyn CheckoutCallbacks>,
        container: &str,
    ) -> Result<()> {
        let options = callback_options(&callbacks, true)?;
        set(&options, "style", &to_js(style)?)?;

        let buttons = self.paypal.buttons(&options).map_err(sdk_error)?;
        spawn_render("buttons", buttons.render(container).map_err(sdk_error)?);
        Ok(())
    }

    fn supports_messages(&self) -> bool {
        Reflect::get(&self.paypal, &JsValue::from_str("Messages"))
            .map(|value| value.is_instance_of::<Function>())
            .unwrap_or(false)
    }

    fn render_messages(&self, options: &MessagesOptions, container: &str) -> Result<()> {
        let messages = self.paypal.messages(&to_js(options)?).map_err(sdk_error)?;
        spawn_render("messages", messages.render(container).map_err(sdk_error)?);
        Ok(())
    }

    fn card_fields(&self, callbacks: Rc<dyn CheckoutCallbacks>) -> Result<PaypalCardFields> {
        let options = callback_options(&callbacks, false)?;
        let inner = self.paypal.card_fields(&options).map_err(sdk_error)?;
        Ok(PaypalCardFields { inner })
    }
}

/// Card-entry widget
pub struct PaypalCardFields {
    inner: JsCardFields,
}

impl CardFields for PaypalCardFields {
    fn is_eligible(&self) -> bool {
        self.inner.is_eligible()
    }

    fn render(&self, field: CardField, container: &str) -> Result<()> {
        let component: JsComponent = match field {
            CardField::Number => self.inner.number_field(),
            CardField::Expiry => self.inner.expiry_field(),
            CardField::Cvv => self.inner.cvv_field(),
        }
        .map_err(sdk_error)?;

        spawn_render("card-field", component.render(container).map_err(sdk_error)?);
        Ok(())
    }

    fn submit(&self) {
        match self.inner.submit() {
            Ok(promise) => spawn_local(async move {
                // Validation failures also reach onError through the SDK.
                if let Err(e) = JsFuture::from(promise).await {
                    tracing::warn!(error = %describe_js(&e), "Card submission rejected");
                }
            }),
            Err(e) => tracing::error!(error = %describe_js(&e), "Card submission failed"),
        }
    }
}
