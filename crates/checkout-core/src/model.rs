//! Wire types for the order backend.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Funding instrument chosen in the SDK (card, venmo, paylater, ...)
///
/// Opaque to this crate; forwarded to the backend as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentSource(String);

impl PaymentSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of `POST /api/checkout-orders`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Amount exactly as entered (or the default)
    pub total_amount: String,

    /// Omitted from the body when the SDK did not supply one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,
}

/// Order returned by the backend. Only the id is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
}

/// Monetary amount as reported by a capture
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub value: String,
    pub currency_code: String,
}

/// A single capture (transaction) record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub id: String,
    pub amount: Money,
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payments {
    #[serde(default)]
    pub captures: Vec<Capture>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    #[serde(default)]
    pub payments: Payments,
}

/// Body returned by `POST /api/orders/{id}/capture`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResponse {
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
}

impl CaptureResponse {
    /// First capture of the first purchase unit.
    ///
    /// An empty unit or capture list is a malformed response.
    pub fn first_capture(&self) -> Result<&Capture> {
        let unit = self.purchase_units.first().ok_or_else(|| {
            CheckoutError::MalformedResponse("no purchase units in capture response".into())
        })?;

        unit.payments.captures.first().ok_or_else(|| {
            CheckoutError::MalformedResponse("no captures in first purchase unit".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_request_body() {
        let request = CreateOrderRequest {
            total_amount: "10.00".into(),
            payment_source: Some(PaymentSource::new("paypal")),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"totalAmount": "10.00", "paymentSource": "paypal"})
        );
    }

    #[test]
    fn test_missing_payment_source_is_omitted() {
        let request = CreateOrderRequest {
            total_amount: "5.00".into(),
            payment_source: None,
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"totalAmount":"5.00"}"#);
    }

    #[test]
    fn test_order_ignores_extra_fields() {
        let order: Order =
            serde_json::from_str(r#"{"id":"O-1","status":"CREATED","links":[]}"#).unwrap();
        assert_eq!(order.id, "O-1");
    }

    #[test]
    fn test_first_capture() {
        let response: CaptureResponse = serde_json::from_value(serde_json::json!({
            "id": "O-1",
            "purchase_units": [{
                "payments": {
                    "captures": [{
                        "id": "C-1",
                        "amount": {"value": "10.00", "currency_code": "USD"},
                        "status": "COMPLETED"
                    }]
                }
            }]
        }))
        .unwrap();

        let capture = response.first_capture().unwrap();
        assert_eq!(capture.id, "C-1");
        assert_eq!(capture.amount.value, "10.00");
        assert_eq!(capture.amount.currency_code, "USD");
        assert_eq!(capture.status, "COMPLETED");
    }

    #[test]
    fn test_empty_capture_response_is_malformed() {
        let empty = CaptureResponse::default();
        assert!(matches!(
            empty.first_capture(),
            Err(CheckoutError::MalformedResponse(_))
        ));

        let no_captures: CaptureResponse =
            serde_json::from_str(r#"{"purchase_units":[{"payments":{"captures":[]}}]}"#).unwrap();
        assert!(no_captures.first_capture().is_err());
    }
}
