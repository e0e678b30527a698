//! Script tag loader

use checkout_core::{CheckoutError, Result, ScriptLoader};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlScriptElement};

/// Appends `<script src=...>` to the document head
pub struct DomScriptLoader {
    document: Document,
}

impl DomScriptLoader {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ScriptLoader for DomScriptLoader {
    fn load(
        &self,
        src: &str,
        on_load: Box<dyn FnOnce()>,
        on_error: Box<dyn FnOnce(String)>,
    ) -> Result<()> {
        let script: HtmlScriptElement = self
            .document
            .create_element("script")
            .map_err(|e| CheckoutError::ScriptLoad(format!("{e:?}")))?
            .unchecked_into();
        script.set_src(src);

        let onload = Closure::once_into_js(move || on_load());
        let failed_src = src.to_string();
        let onerror = Closure::once_into_js(move |_event: web_sys::Event| {
            on_error(format!("could not load {failed_src}"));
        });
        script.set_onload(Some(onload.unchecked_ref()));
        script.set_onerror(Some(onerror.unchecked_ref()));

        let head = self
            .document
            .head()
            .ok_or_else(|| CheckoutError::MountPoint("head".into()))?;
        head.append_child(&script)
            .map_err(|e| CheckoutError::ScriptLoad(format!("{e:?}")))?;

        Ok(())
    }
}
