//! Order Backend
//!
//! The two endpoints the checkout page talks to. The backend is opaque: it
//! owns order creation and capture, this side only posts and reads JSON.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{CheckoutError, Result};
use crate::model::{CaptureResponse, CreateOrderRequest, Order};

/// Path of the order-creation endpoint
pub const CREATE_ORDER_PATH: &str = "/api/checkout-orders";

/// Capture endpoint for an order on the backend at `base_url`
///
/// The order id always fills exactly one path segment: `/`, `?`, `#` and `%`
/// are percent-encoded, and ids that are empty or dot segments are rejected.
pub fn capture_url(base_url: &str, order_id: &str) -> Result<Url> {
    if matches!(order_id, "" | "." | "..") {
        return Err(CheckoutError::InvalidOrderId(order_id.to_string()));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| CheckoutError::Config(format!("invalid backend url {base_url:?}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| CheckoutError::Config(format!("backend url {base_url:?} cannot take a path")))?
        .pop_if_empty()
        .extend(["api", "orders", order_id, "capture"]);

    Ok(url)
}

/// Order backend client trait
///
/// Futures are not `Send`: in the browser they run on the page's event loop.
#[async_trait(?Send)]
pub trait CheckoutBackend {
    /// Create a new order for the given amount
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order>;

    /// Capture a previously approved order
    async fn capture_order(&self, order_id: &str) -> Result<CaptureResponse>;
}

/// reqwest-based backend client
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the backend at `base_url` (e.g. the page origin)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reject non-2xx statuses, then parse the body as JSON
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(CheckoutError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl CheckoutBackend for HttpBackend {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order> {
        let response = self
            .client
            .post(self.url(CREATE_ORDER_PATH))
            .json(request)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn capture_order(&self, order_id: &str) -> Result<CaptureResponse> {
        let response = self
            .client
            .post(capture_url(&self.base_url, order_id)?)
            .send()
            .await?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentSource;
    use axum::{extract::Path, http::StatusCode, routing::post, Json, Router};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn stub_router() -> Router {
        Router::new()
            .route(
                "/api/checkout-orders",
                post(|Json(body): Json<serde_json::Value>| async move {
                    let source = body["paymentSource"].as_str().unwrap_or("none").to_string();
                    let total = body["totalAmount"].as_str().unwrap_or_default().to_string();
                    Json(serde_json::json!({
                        "id": format!("O-{total}-{source}"),
                        "status": "CREATED",
                    }))
                }),
            )
            .route(
                "/api/orders/{order_id}/capture",
                post(|Path(order_id): Path<String>| async move {
                    Json(serde_json::json!({
                        "id": order_id,
                        "purchase_units": [{
                            "payments": {
                                "captures": [{
                                    "id": format!("C-{order_id}"),
                                    "amount": {"value": "10.00", "currency_code": "USD"},
                                    "status": "COMPLETED"
                                }]
                            }
                        }]
                    }))
                }),
            )
    }

    #[test]
    fn test_capture_url() {
        let url = capture_url("http://localhost:3000", "O-1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/orders/O-1/capture");

        let url = capture_url("http://localhost:3000/shop/", "O-1").unwrap();
        assert_eq!(url.path(), "/shop/api/orders/O-1/capture");
    }

    #[test]
    fn test_capture_url_keeps_order_id_in_one_segment() {
        let url = capture_url("http://localhost:3000", "x?q=1").unwrap();
        assert_eq!(url.path(), "/api/orders/x%3Fq=1/capture");
        assert_eq!(url.query(), None);

        let url = capture_url("http://localhost:3000", "../../admin/refund#a%").unwrap();
        assert_eq!(url.path(), "/api/orders/..%2F..%2Fadmin%2Frefund%23a%25/capture");
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_capture_url_rejects_dot_segments() {
        for id in ["", ".", ".."] {
            let err = capture_url("http://localhost:3000", id).unwrap_err();
            assert!(matches!(err, CheckoutError::InvalidOrderId(_)), "{id:?}");
        }
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:3000/");
        assert_eq!(backend.base_url(), "http://localhost:3000");
        assert_eq!(
            backend.url(CREATE_ORDER_PATH),
            "http://localhost:3000/api/checkout-orders"
        );
    }

    #[tokio::test]
    async fn test_create_order_posts_json() {
        let backend = HttpBackend::new(spawn_backend(stub_router()).await);

        let order = backend
            .create_order(&CreateOrderRequest {
                total_amount: "12.34".into(),
                payment_source: Some(PaymentSource::new("card")),
            })
            .await
            .unwrap();

        assert_eq!(order.id, "O-12.34-card");
    }

    #[tokio::test]
    async fn test_capture_order() {
        let backend = HttpBackend::new(spawn_backend(stub_router()).await);

        let response = backend.capture_order("O-7").await.unwrap();
        let capture = response.first_capture().unwrap();
        assert_eq!(capture.id, "C-O-7");
        assert_eq!(capture.status, "COMPLETED");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let router = Router::new().route(
            "/api/checkout-orders",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let backend = HttpBackend::new(spawn_backend(router).await);

        let err = backend
            .create_order(&CreateOrderRequest {
                total_amount: "10.00".into(),
                payment_source: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let router = Router::new().route(
            "/api/orders/{order_id}/capture",
            post(|| async { "not json" }),
        );
        let backend = HttpBackend::new(spawn_backend(router).await);

        let err = backend.capture_order("O-1").await.unwrap_err();
        assert!(matches!(err, CheckoutError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_capture_order_id_is_encoded() {
        let backend = HttpBackend::new(spawn_backend(stub_router()).await);

        let response = backend.capture_order("a/b").await.unwrap();
        assert_eq!(response.first_capture().unwrap().id, "C-a/b");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(format!("http://{addr}"));
        let err = backend.capture_order("O-1").await.unwrap_err();
        assert!(matches!(err, CheckoutError::Network(_)));
    }
}
