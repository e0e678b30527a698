//! # checkout-core
//!
//! Platform-independent pieces of the PayPal checkout page.
//!
//! ## Flow
//!
//! ```text
//! ┌───────────┐   ┌─────────────┐   ┌────────────────┐   ┌──────────────┐
//! │ Bootstrap │──▶│ Initializer │──▶│ Order Workflow │──▶│ Status Panel │
//! │ (loader)  │   │  (widgets)  │   │  (callbacks)   │   │ (presenter)  │
//! └───────────┘   └─────────────┘   └────────────────┘   └──────────────┘
//!                                           │
//!                                           ▼
//!                                  CheckoutBackend (HTTP)
//! ```
//!
//! Nothing in here touches the DOM or the SDK directly. The browser crate
//! implements [`CheckoutPage`], [`PaymentSdk`], [`ScriptLoader`] and
//! [`StatusPanel`]; tests implement them with fakes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use checkout_core::{HttpBackend, OrderWorkflow, SdkInitializer};
//!
//! let workflow = Rc::new(OrderWorkflow::new(HttpBackend::new(origin), page.clone(), panel));
//! SdkInitializer::new(MountPoints::default()).initialize(&sdk, workflow, &page);
//! ```

pub mod amount;
pub mod backend;
pub mod bootstrap;
pub mod error;
pub mod mock;
pub mod model;
pub mod page;
pub mod sdk;
pub mod status;
pub mod workflow;

pub use amount::{effective_amount, DEFAULT_AMOUNT};
pub use backend::{CheckoutBackend, HttpBackend};
pub use bootstrap::{load_sdk, refresh_total, ScriptLoader};
pub use error::{CheckoutError, Result};
pub use mock::{MockBackend, MockPage};
pub use model::{Capture, CaptureResponse, CreateOrderRequest, Money, Order, PaymentSource};
pub use page::{CheckoutPage, MountPoints};
pub use sdk::{
    ButtonStyle, CardField, CardFields, CardFieldsOutcome, Component, Intent, MessagesOptions,
    PaymentSdk, SdkConfig, SdkInitializer, WidgetReport, CONFIG_PATH,
};
pub use status::{MemoryStatusPanel, StatusMessage, StatusPanel};
pub use workflow::{CheckoutCallbacks, OrderWorkflow};
