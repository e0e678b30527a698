//! API Client

use checkout_core::{CheckoutError, Result, SdkConfig, CONFIG_PATH};

/// Origin of the page, used as the backend base URL
pub fn page_origin() -> Result<String> {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| CheckoutError::Config("page origin unavailable".into()))
}

/// Fetch the SDK configuration from the server
pub async fn fetch_sdk_config(origin: &str) -> Result<SdkConfig> {
    let response = reqwest::Client::new()
        .get(format!("{origin}{CONFIG_PATH}"))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(CheckoutError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
