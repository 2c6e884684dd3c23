use dioxus::prelude::*;

/// Acknowledgment shown after a submission.
#[component]
pub fn ConfettiModal(show: Signal<bool>) -> Element {
    if !*show.read() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| show.set(false),

            div {
                class: "modal",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "Close",
                    onclick: move |_| show.set(false),
                    "\u{00d7}"
                }
                div { class: "party", "\u{1f973}" }
                div { class: "modal-title", "Submitted Successfully!" }
                span { class: "subtle", "Please check console log" }
            }
        }
    }
}
