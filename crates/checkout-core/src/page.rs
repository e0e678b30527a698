//! Page mount points.

/// The fixed elements of the checkout page the workflow reads and writes.
pub trait CheckoutPage {
    /// Current value of the amount input (`None` if the field is absent)
    fn amount_value(&self) -> Option<String>;

    /// Write the displayed total verbatim
    fn set_total(&self, total: &str);

    /// Hide the card-entry section
    fn hide_card_section(&self);

    /// Run `handler` whenever the card submit button is clicked
    fn on_card_submit(&self, handler: Box<dyn Fn()>);
}

impl<P: CheckoutPage + ?Sized> CheckoutPage for std::rc::Rc<P> {
    fn amount_value(&self) -> Option<String> {
        (**self).amount_value()
    }

    fn set_total(&self, total: &str) {
        (**self).set_total(total);
    }

    fn hide_card_section(&self) {
        (**self).hide_card_section();
    }

    fn on_card_submit(&self, handler: Box<dyn Fn()>) {
        (**self).on_card_submit(handler);
    }
}

/// Element ids/selectors the widgets render into
///
/// Widget containers (`buttons` through `card_cvv`) are CSS selectors handed
/// to the SDK; the rest are element ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountPoints {
    pub amount_input: String,
    pub total_amount: String,
    pub buttons: String,
    pub messages: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub card_submit: String,
    pub card_section: String,
    pub order_info: String,
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            amount_input: "amount-input".into(),
            total_amount: "total-amount".into(),
            buttons: "#paypal-button-container".into(),
            messages: "#paylater-message-container".into(),
            card_number: "#card-number-field".into(),
            card_expiry: "#card-expiry-field".into(),
            card_cvv: "#card-cvv-field".into(),
            card_submit: "card-submit-button".into(),
            card_section: "card-section".into(),
            order_info: "order-info".into(),
        }
    }
}
