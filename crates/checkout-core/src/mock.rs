//! Mock Backend and Page
//!
//! For testing and headless demos. The backend hands out sequential order
//! ids and answers captures from a configurable JSON body.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::backend::CheckoutBackend;
use crate::error::{CheckoutError, Result};
use crate::model::{CaptureResponse, CreateOrderRequest, Order};
use crate::page::CheckoutPage;

/// Failure a scripted call answers with
#[derive(Clone, Debug)]
enum Failure {
    Status(u16),
    Network(String),
}

impl Failure {
    fn to_error(&self) -> CheckoutError {
        match self {
            Failure::Status(status) => CheckoutError::Status(*status),
            Failure::Network(reason) => CheckoutError::Network(reason.clone()),
        }
    }
}

/// Scripted order backend
pub struct MockBackend {
    create_failure: Option<Failure>,
    capture_failure: Option<Failure>,
    capture_body: serde_json::Value,
    next_order: Cell<u32>,
    create_requests: RefCell<Vec<CreateOrderRequest>>,
    capture_requests: RefCell<Vec<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Backend that succeeds with a single `COMPLETED` capture of 10.00 USD
    pub fn new() -> Self {
        Self {
            create_failure: None,
            capture_failure: None,
            capture_body: Self::completed_capture("C-1", "10.00", "USD"),
            next_order: Cell::new(1),
            create_requests: RefCell::new(Vec::new()),
            capture_requests: RefCell::new(Vec::new()),
        }
    }

    /// Capture response body with exactly one capture
    pub fn completed_capture(id: &str, value: &str, currency: &str) -> serde_json::Value {
        serde_json::json!({
            "purchase_units": [{
                "payments": {
                    "captures": [{
                        "id": id,
                        "amount": {"value": value, "currency_code": currency},
                        "status": "COMPLETED"
                    }]
                }
            }]
        })
    }

    /// Fail order creation with an HTTP status
    pub fn failing_create(mut self, status: u16) -> Self {
        self.create_failure = Some(Failure::Status(status));
        self
    }

    /// Fail order creation as if the backend were unreachable
    pub fn failing_create_network(mut self, reason: impl Into<String>) -> Self {
        self.create_failure = Some(Failure::Network(reason.into()));
        self
    }

    /// Fail capture with an HTTP status
    pub fn failing_capture(mut self, status: u16) -> Self {
        self.capture_failure = Some(Failure::Status(status));
        self
    }

    /// Answer captures with this body
    pub fn with_capture_body(mut self, body: serde_json::Value) -> Self {
        self.capture_body = body;
        self
    }

    pub fn create_requests(&self) -> Vec<CreateOrderRequest> {
        self.create_requests.borrow().clone()
    }

    pub fn capture_requests(&self) -> Vec<String> {
        self.capture_requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CheckoutBackend for MockBackend {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order> {
        self.create_requests.borrow_mut().push(request.clone());

        if let Some(failure) = &self.create_failure {
            return Err(failure.to_error());
        }

        let n = self.next_order.get();
        self.next_order.set(n + 1);
        Ok(Order { id: format!("O-{n}") })
    }

    async fn capture_order(&self, order_id: &str) -> Result<CaptureResponse> {
        self.capture_requests.borrow_mut().push(order_id.to_string());

        if let Some(failure) = &self.capture_failure {
            return Err(failure.to_error());
        }

        Ok(serde_json::from_value(self.capture_body.clone())?)
    }
}

/// Page with in-memory mount points
#[derive(Default)]
pub struct MockPage {
    amount: RefCell<Option<String>>,
    total: RefCell<Option<String>>,
    card_hidden: Cell<bool>,
    submit_handler: RefCell<Option<Box<dyn Fn()>>>,
}

impl MockPage {
    /// Page whose amount field holds `amount`
    pub fn with_amount(amount: &str) -> Self {
        let page = Self::default();
        page.type_amount(amount);
        page
    }

    /// Page without an amount field at all
    pub fn without_amount() -> Self {
        Self::default()
    }

    pub fn type_amount(&self, amount: &str) {
        *self.amount.borrow_mut() = Some(amount.to_string());
    }

    pub fn total(&self) -> Option<String> {
        self.total.borrow().clone()
    }

    pub fn card_section_hidden(&self) -> bool {
        self.card_hidden.get()
    }

    pub fn has_submit_handler(&self) -> bool {
        self.submit_handler.borrow().is_some()
    }

    /// Simulate a click on the card submit button. Returns false if nothing is wired.
    pub fn click_card_submit(&self) -> bool {
        match self.submit_handler.borrow().as_ref() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl CheckoutPage for MockPage {
    fn amount_value(&self) -> Option<String> {
        self.amount.borrow().clone()
    }

    fn set_total(&self, total: &str) {
        *self.total.borrow_mut() = Some(total.to_string());
    }

    fn hide_card_section(&self) {
        self.card_hidden.set(true);
    }

    fn on_card_submit(&self, handler: Box<dyn Fn()>) {
        *self.submit_handler.borrow_mut() = Some(handler);
    }
}
