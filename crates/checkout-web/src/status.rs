//! Order-info panel

use checkout_core::{StatusMessage, StatusPanel};
use leptos::prelude::*;
use web_sys::HtmlElement;

/// Current status as `<div class="info-item"><h4/><p/></div>`
///
/// Lines are separated by `<br>` and rendered as text.
#[component]
pub fn OrderInfo(status: ReadSignal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        status.get().map(|StatusMessage { title, lines }| {
            view! {
                <div class="info-item">
                    <h4>{title}</h4>
                    <p>{message_lines(lines)}</p>
                </div>
            }
        })
    }
}

fn message_lines(lines: Vec<String>) -> impl IntoView {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| view! { {(i > 0).then(|| view! { <br /> })} {line} })
        .collect_view()
}

/// [`StatusPanel`] that drives the [`OrderInfo`] component
pub struct LeptosStatusPanel {
    panel: HtmlElement,
    set_status: WriteSignal<Option<StatusMessage>>,
}

impl LeptosStatusPanel {
    /// Take over `panel`, dropping whatever markup it had
    pub fn mount(panel: HtmlElement) -> Self {
        let (status, set_status) = signal(None::<StatusMessage>);

        panel.set_inner_html("");
        leptos::mount::mount_to(panel.clone(), move || view! { <OrderInfo status=status /> })
            .forget();

        Self { panel, set_status }
    }
}

impl StatusPanel for LeptosStatusPanel {
    fn show(&self, message: StatusMessage) {
        tracing::debug!(title = %message.title, "Status updated");
        self.set_status.set(Some(message));

        if let Err(e) = self.panel.style().set_property("display", "block") {
            tracing::warn!(error = ?e, "Could not show order-info panel");
        }
    }
}
