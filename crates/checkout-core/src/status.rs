//! Status Presenter
//!
//! A single `{title, message}` pair shown in the order-info panel. Every
//! update replaces whatever was there before.

use std::cell::RefCell;

use crate::error::CheckoutError;
use crate::model::Capture;

/// Title/message pair for the status panel
///
/// The message is kept as separate lines; the panel joins them with line
/// breaks and renders every line as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub title: String,
    pub lines: Vec<String>,
}

impl StatusMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: vec![message.into()],
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Message text with lines joined by `\n`
    pub fn message(&self) -> String {
        self.lines.join("\n")
    }

    pub fn order_created(order_id: &str) -> Self {
        Self::new("Order Created", format!("Order ID: {order_id}"))
    }

    pub fn order_failed(err: &CheckoutError) -> Self {
        Self::new("Error", format!("Failed to create order: {err}"))
    }

    pub fn payment_successful(capture: &Capture) -> Self {
        Self::new("Payment Successful", format!("Transaction ID: {}", capture.id))
            .with_line(format!(
                "Amount: {} {}",
                capture.amount.value, capture.amount.currency_code
            ))
            .with_line(format!("Status: {}", capture.status))
    }

    pub fn capture_failed(err: &CheckoutError) -> Self {
        Self::new("Error", format!("Failed to capture payment: {err}"))
    }

    pub fn cancelled() -> Self {
        Self::new("Payment Cancelled", "User cancelled the payment")
    }

    pub fn payment_error() -> Self {
        Self::new("Payment Error", "An error occurred during payment processing")
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.title, self.lines.join(" / "))
    }
}

/// Panel that displays the current status message
pub trait StatusPanel {
    /// Replace the panel content and make it visible
    fn show(&self, message: StatusMessage);
}

impl<P: StatusPanel + ?Sized> StatusPanel for std::rc::Rc<P> {
    fn show(&self, message: StatusMessage) {
        (**self).show(message);
    }
}

/// In-memory panel (for tests and headless runs)
///
/// Keeps every update so callers can assert on how often the panel changed;
/// only the last one counts as visible.
#[derive(Default)]
pub struct MemoryStatusPanel {
    updates: RefCell<Vec<StatusMessage>>,
}

impl MemoryStatusPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently visible, if the panel was ever shown
    pub fn current(&self) -> Option<StatusMessage> {
        self.updates.borrow().last().cloned()
    }

    /// Whether the panel has been made visible
    pub fn is_visible(&self) -> bool {
        !self.updates.borrow().is_empty()
    }

    /// Every update in order
    pub fn updates(&self) -> Vec<StatusMessage> {
        self.updates.borrow().clone()
    }
}

impl StatusPanel for MemoryStatusPanel {
    fn show(&self, message: StatusMessage) {
        tracing::debug!(title = %message.title, "Status updated");
        self.updates.borrow_mut().push(message);
    }
}
