//! Payment SDK wiring
//!
//! [`SdkConfig`] describes the script to load. Once it is loaded,
//! [`SdkInitializer`] builds the three widgets through the [`PaymentSdk`]
//! adapter, handing each one the same [`CheckoutCallbacks`].
//!
//! ```text
//!                 ┌──────────────┐
//!             ┌──▶│   Buttons    │──┐
//! ┌─────────┐ │   └──────────────┘  │   ┌───────────────────┐
//! │ Initial-│─┼──▶│   Messages   │  ├──▶│ CheckoutCallbacks │
//! │  izer   │ │   └──────────────┘  │   └───────────────────┘
//! └─────────┘ └──▶│ Card Fields  │──┘
//!                 └──────────────┘
//! ```

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::amount::effective_amount;
use crate::error::{CheckoutError, Result};
use crate::page::{CheckoutPage, MountPoints};
use crate::workflow::CheckoutCallbacks;

/// Path the page fetches its [`SdkConfig`] from
pub const CONFIG_PATH: &str = "/api/config";

/// SDK components requested in the script URL
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Component {
    Buttons,
    CardFields,
    Messages,
}

impl Component {
    pub fn as_str(&self) -> &str {
        match self {
            Component::Buttons => "buttons",
            Component::CardFields => "card-fields",
            Component::Messages => "messages",
        }
    }
}

/// Payment intent; orders are always captured immediately
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Capture,
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::Capture => "capture",
        }
    }
}

/// Parameters of the SDK script URL
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SdkConfig {
    /// SDK origin, e.g. `https://www.paypal.com`
    pub host: String,

    /// Merchant client id (supplied by the server)
    pub client_id: String,

    pub components: Vec<Component>,

    pub intent: Intent,

    /// Funding sources to enable on top of the defaults
    pub enable_funding: Vec<String>,

    /// Single currency for every order
    pub currency: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            host: "https://www.paypal.com".into(),
            client_id: String::new(),
            components: vec![Component::Buttons, Component::CardFields, Component::Messages],
            intent: Intent::Capture,
            enable_funding: vec!["venmo".into(), "paylater".into()],
            currency: "USD".into(),
        }
    }
}

impl SdkConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Default::default()
        }
    }

    /// Build the `<host>/sdk/js?...` script URL
    pub fn script_url(&self) -> Result<String> {
        if self.client_id.trim().is_empty() {
            return Err(CheckoutError::Config("SDK client id not set".into()));
        }

        let base = format!("{}/sdk/js", self.host.trim_end_matches('/'));
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| CheckoutError::Config(format!("invalid SDK host {}: {e}", self.host)))?;

        let components = self
            .components
            .iter()
            .map(Component::as_str)
            .collect::<Vec<_>>()
            .join(",");

        url.query_pairs_mut()
            .append_pair("components", &components)
            .append_pair("intent", self.intent.as_str())
            .append_pair("client-id", &self.client_id)
            .append_pair("enable-funding", &self.enable_funding.join(","))
            .append_pair("currency", &self.currency);

        Ok(url.into())
    }
}

/// Visual style of the button set
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    pub layout: String,
    pub color: String,
    pub shape: String,
    pub label: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            layout: "vertical".into(),
            color: "blue".into(),
            shape: "rect".into(),
            label: "paypal".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageLogo {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageStyle {
    pub layout: String,
    pub logo: MessageLogo,
}

/// Options for the promotional message widget
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessagesOptions {
    /// Fixed at construction time
    pub amount: String,
    pub placement: String,
    pub style: MessageStyle,
}

impl MessagesOptions {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            placement: "payment".into(),
            style: MessageStyle {
                layout: "text".into(),
                logo: MessageLogo {
                    kind: "inline".into(),
                },
            },
        }
    }
}

/// Card sub-fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardField {
    Number,
    Expiry,
    Cvv,
}

/// Adapter over the loaded payment SDK
pub trait PaymentSdk {
    type CardFields: CardFields + 'static;

    /// Construct the button set and render it into `container`
    fn render_buttons(
        &self,
        style: &ButtonStyle,
        callbacks: Rc<dyn CheckoutCallbacks>,
        container: &str,
    ) -> Result<()>;

    /// Whether the SDK exposes the promotional message component
    fn supports_messages(&self) -> bool;

    fn render_messages(&self, options: &MessagesOptions, container: &str) -> Result<()>;

    /// Construct the card-entry widget (no rendering yet)
    fn card_fields(&self, callbacks: Rc<dyn CheckoutCallbacks>) -> Result<Self::CardFields>;
}

/// Card-entry widget handle
pub trait CardFields {
    fn is_eligible(&self) -> bool;

    fn render(&self, field: CardField, container: &str) -> Result<()>;

    /// Validate the fields and run create/approve through the callbacks
    fn submit(&self);
}

/// What happened to the card-entry widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFieldsOutcome {
    Rendered,
    /// Not offered here; the card section was hidden
    Ineligible,
    #[default]
    Failed,
}

/// Widgets that made it onto the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetReport {
    pub buttons: bool,
    pub messages: bool,
    pub card_fields: CardFieldsOutcome,
}

/// Builds the widgets once the SDK is available
pub struct SdkInitializer {
    mounts: MountPoints,
}

impl Default for SdkInitializer {
    fn default() -> Self {
        Self::new(MountPoints::default())
    }
}

impl SdkInitializer {
    pub fn new(mounts: MountPoints) -> Self {
        Self { mounts }
    }

    /// Construct buttons, messages and card fields.
    ///
    /// A widget that fails is logged and skipped; the others still render.
    pub fn initialize<S, P>(
        &self,
        sdk: &S,
        callbacks: Rc<dyn CheckoutCallbacks>,
        page: &P,
    ) -> WidgetReport
    where
        S: PaymentSdk,
        P: CheckoutPage,
    {
        let mut report = WidgetReport::default();

        match sdk.render_buttons(&ButtonStyle::default(), callbacks.clone(), &self.mounts.buttons) {
            Ok(()) => report.buttons = true,
            Err(e) => tracing::error!(error = %e, "Failed to render payment buttons"),
        }

        if sdk.supports_messages() {
            let options = MessagesOptions::new(effective_amount(page.amount_value().as_deref()));
            match sdk.render_messages(&options, &self.mounts.messages) {
                Ok(()) => report.messages = true,
                Err(e) => tracing::error!(error = %e, "Failed to render pay-later message"),
            }
        }

        report.card_fields = match sdk.card_fields(callbacks) {
            Ok(card_fields) => self.mount_card_fields(card_fields, page),
            Err(e) => {
                tracing::error!(error = %e, "Failed to construct card fields");
                CardFieldsOutcome::Failed
            }
        };

        tracing::info!(
            buttons = report.buttons,
            messages = report.messages,
            card_fields = ?report.card_fields,
            "Payment widgets initialized"
        );
        report
    }

    fn mount_card_fields<C, P>(&self, card_fields: C, page: &P) -> CardFieldsOutcome
    where
        C: CardFields + 'static,
        P: CheckoutPage,
    {
        if !card_fields.is_eligible() {
            tracing::debug!("Card fields not eligible, hiding card section");
            page.hide_card_section();
            return CardFieldsOutcome::Ineligible;
        }

        let fields = [
            (CardField::Number, &self.mounts.card_number),
            (CardField::Expiry, &self.mounts.card_expiry),
            (CardField::Cvv, &self.mounts.card_cvv),
        ];
        for (field, container) in fields {
            if let Err(e) = card_fields.render(field, container) {
                tracing::error!(field = ?field, error = %e, "Failed to render card field");
                return CardFieldsOutcome::Failed;
            }
        }

        let card_fields = Rc::new(card_fields);
        page.on_card_submit(Box::new(move || card_fields.submit()));
        CardFieldsOutcome::Rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::mock::{MockBackend, MockPage};
    use crate::status::MemoryStatusPanel;
    use crate::workflow::OrderWorkflow;

    type Log = Rc<RefCell<Vec<String>>>;

    struct FakeSdk {
        log: Log,
        messages: bool,
        eligible: bool,
        fail_buttons: bool,
    }

    impl FakeSdk {
        fn new() -> Self {
            Self {
                log: Rc::default(),
                messages: true,
                eligible: true,
                fail_buttons: false,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    struct FakeCardFields {
        log: Log,
        eligible: bool,
    }

    impl PaymentSdk for FakeSdk {
        type CardFields = FakeCardFields;

        fn render_buttons(
            &self,
            style: &ButtonStyle,
            _callbacks: Rc<dyn CheckoutCallbacks>,
            container: &str,
        ) -> Result<()> {
            if self.fail_buttons {
                return Err(CheckoutError::Sdk("buttons unavailable".into()));
            }
            self.log
                .borrow_mut()
                .push(format!("buttons:{}:{container}", style.layout));
            Ok(())
        }

        fn supports_messages(&self) -> bool {
            self.messages
        }

        fn render_messages(&self, options: &MessagesOptions, container: &str) -> Result<()> {
            self.log
                .borrow_mut()
                .push(format!("messages:{}:{container}", options.amount));
            Ok(())
        }

        fn card_fields(&self, _callbacks: Rc<dyn CheckoutCallbacks>) -> Result<FakeCardFields> {
            Ok(FakeCardFields {
                log: self.log.clone(),
                eligible: self.eligible,
            })
        }
    }

    impl CardFields for FakeCardFields {
        fn is_eligible(&self) -> bool {
            self.eligible
        }

        fn render(&self, field: CardField, container: &str) -> Result<()> {
            self.log
                .borrow_mut()
                .push(format!("card:{field:?}:{container}"));
            Ok(())
        }

        fn submit(&self) {
            self.log.borrow_mut().push("card:submit".into());
        }
    }

    fn callbacks() -> Rc<dyn CheckoutCallbacks> {
        Rc::new(OrderWorkflow::new(
            MockBackend::new(),
            MockPage::default(),
            MemoryStatusPanel::new(),
        ))
    }

    #[test]
    fn test_script_url() {
        let url = SdkConfig::new("test-client").script_url().unwrap();
        let parsed = reqwest::Url::parse(&url).unwrap();

        assert_eq!(parsed.host_str(), Some("www.paypal.com"));
        assert_eq!(parsed.path(), "/sdk/js");

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("components".into(), "buttons,card-fields,messages".into()),
                ("intent".into(), "capture".into()),
                ("client-id".into(), "test-client".into()),
                ("enable-funding".into(), "venmo,paylater".into()),
                ("currency".into(), "USD".into()),
            ]
        );
    }

    #[test]
    fn test_script_url_requires_client_id() {
        let result = SdkConfig::default().script_url();
        assert!(matches!(result, Err(CheckoutError::Config(_))));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SdkConfig =
            serde_json::from_str(r#"{"clientId":"abc","currency":"EUR"}"#).unwrap();
        assert_eq!(config.client_id, "abc");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.intent, Intent::Capture);
        assert_eq!(config.components.len(), 3);
    }

    #[test]
    fn test_widget_options_serialize_like_sdk_expects() {
        assert_eq!(
            serde_json::to_value(ButtonStyle::default()).unwrap(),
            serde_json::json!({
                "layout": "vertical", "color": "blue", "shape": "rect", "label": "paypal"
            })
        );
        assert_eq!(
            serde_json::to_value(MessagesOptions::new("10.00")).unwrap(),
            serde_json::json!({
                "amount": "10.00",
                "placement": "payment",
                "style": {"layout": "text", "logo": {"type": "inline"}}
            })
        );
    }

    #[test]
    fn test_initialize_all_widgets() {
        let sdk = FakeSdk::new();
        let page = MockPage::with_amount("");

        let report = SdkInitializer::default().initialize(&sdk, callbacks(), &page);

        assert!(report.buttons);
        assert!(report.messages);
        assert_eq!(report.card_fields, CardFieldsOutcome::Rendered);
        assert_eq!(
            sdk.calls(),
            vec![
                "buttons:vertical:#paypal-button-container",
                "messages:10.00:#paylater-message-container",
                "card:Number:#card-number-field",
                "card:Expiry:#card-expiry-field",
                "card:Cvv:#card-cvv-field",
            ]
        );
        assert!(!page.card_section_hidden());

        assert!(page.click_card_submit());
        assert_eq!(sdk.calls().last().map(String::as_str), Some("card:submit"));
    }

    #[test]
    fn test_ineligible_card_fields_hide_section() {
        let sdk = FakeSdk {
            eligible: false,
            ..FakeSdk::new()
        };
        let page = MockPage::default();

        let report = SdkInitializer::default().initialize(&sdk, callbacks(), &page);

        assert_eq!(report.card_fields, CardFieldsOutcome::Ineligible);
        assert!(report.buttons);
        assert!(report.messages);
        assert!(page.card_section_hidden());
        assert!(!page.has_submit_handler());
        assert!(!sdk.calls().iter().any(|c| c.starts_with("card:")));
    }

    #[test]
    fn test_messages_skipped_without_capability() {
        let sdk = FakeSdk {
            messages: false,
            ..FakeSdk::new()
        };

        let report = SdkInitializer::default().initialize(&sdk, callbacks(), &MockPage::default());

        assert!(!report.messages);
        assert!(!sdk.calls().iter().any(|c| c.starts_with("messages:")));
    }

    #[test]
    fn test_message_amount_fixed_at_construction() {
        let sdk = FakeSdk::new();
        let page = MockPage::with_amount("42.00");

        SdkInitializer::default().initialize(&sdk, callbacks(), &page);
        page.type_amount("99.00");

        assert!(sdk
            .calls()
            .contains(&"messages:42.00:#paylater-message-container".to_string()));
        assert!(!sdk.calls().iter().any(|c| c.contains("99.00")));
    }

    #[test]
    fn test_button_failure_does_not_block_other_widgets() {
        let sdk = FakeSdk {
            fail_buttons: true,
            ..FakeSdk::new()
        };
        let page = MockPage::default();

        let report = SdkInitializer::default().initialize(&sdk, callbacks(), &page);

        assert!(!report.buttons);
        assert!(report.messages);
        assert_eq!(report.card_fields, CardFieldsOutcome::Rendered);
    }
}
