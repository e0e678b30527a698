//! Server configuration from the environment.

use checkout_core::SdkConfig;

/// Log directives when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// `RUST_LOG` directives from any key lookup
pub fn log_directives(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("RUST_LOG")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.into())
}

/// Dev server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: String,

    /// Directory with `index.html` and the wasm bundle
    pub static_dir: String,

    /// Base URL of the order backend (no trailing slash)
    pub backend_url: String,

    /// Served to the page at `/api/config`
    pub sdk: SdkConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: "static".into(),
            backend_url: "http://localhost:8080".into(),
            sdk: SdkConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `PAYPAL_CLIENT_ID`, `PAYPAL_SDK_HOST`, `CHECKOUT_CURRENCY`,
    /// `CHECKOUT_BACKEND_URL`, `STATIC_DIR` and `BIND_ADDR`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let mut sdk = SdkConfig::default();
        if let Some(client_id) = get("PAYPAL_CLIENT_ID") {
            sdk.client_id = client_id;
        }
        if let Some(host) = get("PAYPAL_SDK_HOST") {
            sdk.host = host;
        }
        if let Some(currency) = get("CHECKOUT_CURRENCY") {
            sdk.currency = currency.to_uppercase();
        }

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
            backend_url: get("CHECKOUT_BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            sdk,
        }
    }

    pub fn client_id_configured(&self) -> bool {
        !self.sdk.client_id.is_empty()
    }
}
