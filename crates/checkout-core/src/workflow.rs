//! Order Workflow
//!
//! The callbacks shared by every payment widget. One checkout attempt is
//! `create_order` followed (if the payer approves) by `on_approve`; the SDK
//! enforces that ordering. Attempts share no state: each one creates a fresh
//! order, and the status panel simply shows whatever happened last.
//!
//! Failure policy differs per callback:
//!
//! | callback       | on failure                                   |
//! |----------------|----------------------------------------------|
//! | `create_order` | shown, and returned to the SDK (aborts flow) |
//! | `on_approve`   | shown, swallowed                             |
//! | `on_error`     | generic message shown, detail logged         |

use async_trait::async_trait;

use crate::amount::effective_amount;
use crate::backend::CheckoutBackend;
use crate::error::Result;
use crate::model::{Capture, CreateOrderRequest, PaymentSource};
use crate::page::CheckoutPage;
use crate::status::{StatusMessage, StatusPanel};

/// Capability interface injected into each SDK widget
#[async_trait(?Send)]
pub trait CheckoutCallbacks {
    /// Create an order and return its id to the SDK
    async fn create_order(&self, payment_source: Option<PaymentSource>) -> Result<String>;

    /// Capture an approved order. Never fails from the SDK's point of view.
    async fn on_approve(&self, order_id: &str);

    /// Payer closed the flow
    fn on_cancel(&self);

    /// SDK reported an error
    fn on_error(&self, error: &str);
}

/// Workflow wired to a backend, the page and the status panel
pub struct OrderWorkflow<B, P, S> {
    backend: B,
    page: P,
    status: S,
}

impl<B, P, S> OrderWorkflow<B, P, S>
where
    B: CheckoutBackend,
    P: CheckoutPage,
    S: StatusPanel,
{
    pub fn new(backend: B, page: P, status: S) -> Self {
        Self {
            backend,
            page,
            status,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    async fn capture(&self, order_id: &str) -> Result<Capture> {
        let response = self.backend.capture_order(order_id).await?;
        response.first_capture().cloned()
    }
}

#[async_trait(?Send)]
impl<B, P, S> CheckoutCallbacks for OrderWorkflow<B, P, S>
where
    B: CheckoutBackend,
    P: CheckoutPage,
    S: StatusPanel,
{
    async fn create_order(&self, payment_source: Option<PaymentSource>) -> Result<String> {
        let request = CreateOrderRequest {
            total_amount: effective_amount(self.page.amount_value().as_deref()),
            payment_source,
        };

        match self.backend.create_order(&request).await {
            Ok(order) => {
                tracing::info!(
                    order_id = %order.id,
                    amount = %request.total_amount,
                    payment_source = ?request.payment_source,
                    "Order created"
                );
                self.status.show(StatusMessage::order_created(&order.id));
                Ok(order.id)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating order");
                self.status.show(StatusMessage::order_failed(&e));
                Err(e)
            }
        }
    }

    async fn on_approve(&self, order_id: &str) {
        match self.capture(order_id).await {
            Ok(capture) => {
                tracing::info!(
                    order_id = %order_id,
                    transaction_id = %capture.id,
                    status = %capture.status,
                    "Payment captured"
                );
                self.status.show(StatusMessage::payment_successful(&capture));
            }
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "Error capturing payment");
                self.status.show(StatusMessage::capture_failed(&e));
            }
        }
    }

    fn on_cancel(&self) {
        tracing::info!("Payment cancelled by payer");
        self.status.show(StatusMessage::cancelled());
    }

    fn on_error(&self, error: &str) {
        tracing::error!(error = %error, "Payment SDK error");
        self.status.show(StatusMessage::payment_error());
    }
}
