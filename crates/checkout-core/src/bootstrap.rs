//! Page Bootstrap
//!
//! Keeps the total display in step with the amount input and injects the
//! SDK script. A script that fails to load is logged and nothing else
//! happens: the widgets simply never appear.

use crate::amount::effective_amount;
use crate::error::Result;
use crate::page::CheckoutPage;
use crate::sdk::SdkConfig;

/// Injects a script into the page
pub trait ScriptLoader {
    /// Start loading `src`. Exactly one of the callbacks fires later.
    fn load(
        &self,
        src: &str,
        on_load: Box<dyn FnOnce()>,
        on_error: Box<dyn FnOnce(String)>,
    ) -> Result<()>;
}

/// Write the effective amount into the total display and return it
pub fn refresh_total<P: CheckoutPage + ?Sized>(page: &P) -> String {
    let total = effective_amount(page.amount_value().as_deref());
    page.set_total(&total);
    total
}

/// Load the SDK script and run `on_ready` once it is available.
///
/// Errors here mean the script was never requested (bad config or no
/// document); load failures after that are only logged.
pub fn load_sdk<L, F>(loader: &L, config: &SdkConfig, on_ready: F) -> Result<()>
where
    L: ScriptLoader + ?Sized,
    F: FnOnce() + 'static,
{
    let src = config.script_url()?;
    tracing::debug!(src = %src, "Loading payment SDK");

    loader.load(
        &src,
        Box::new(move || {
            tracing::info!("Payment SDK loaded");
            on_ready();
        }),
        Box::new(|reason| {
            tracing::error!(error = %reason, "Failed to load PayPal SDK");
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::error::CheckoutError;
    use crate::mock::MockPage;

    /// Loader that settles synchronously
    struct FakeLoader {
        succeed: bool,
        requested: RefCell<Vec<String>>,
    }

    impl FakeLoader {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScriptLoader for FakeLoader {
        fn load(
            &self,
            src: &str,
            on_load: Box<dyn FnOnce()>,
            on_error: Box<dyn FnOnce(String)>,
        ) -> Result<()> {
            self.requested.borrow_mut().push(src.to_string());
            if self.succeed {
                on_load();
            } else {
                on_error("network error".into());
            }
            Ok(())
        }
    }

    #[test]
    fn test_refresh_total_defaults_empty_amount() {
        let page = MockPage::with_amount("");
        assert_eq!(refresh_total(&page), "10.00");
        assert_eq!(page.total().as_deref(), Some("10.00"));

        page.type_amount("7.5");
        refresh_total(&page);
        assert_eq!(page.total().as_deref(), Some("7.5"));
    }

    #[test]
    fn test_load_sdk_runs_initializer_on_load() {
        let loader = FakeLoader::new(true);
        let ready = Rc::new(Cell::new(false));

        let flag = ready.clone();
        load_sdk(&loader, &SdkConfig::new("client"), move || flag.set(true)).unwrap();

        assert!(ready.get());
        let requested = loader.requested.borrow();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].starts_with("https://www.paypal.com/sdk/js?"));
    }

    #[test]
    fn test_load_failure_skips_initializer() {
        let loader = FakeLoader::new(false);
        let ready = Rc::new(Cell::new(false));

        let flag = ready.clone();
        load_sdk(&loader, &SdkConfig::new("client"), move || flag.set(true)).unwrap();

        assert!(!ready.get());
    }

    #[test]
    fn test_missing_client_id_never_requests_script() {
        let loader = FakeLoader::new(true);

        let result = load_sdk(&loader, &SdkConfig::default(), || {});

        assert!(matches!(result, Err(CheckoutError::Config(_))));
        assert!(loader.requested.borrow().is_empty());
    }
}
