use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator { message: "Loading...".to_string() }
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(message: String) -> Element {
    rsx! {
        div {
            role: "status",
            style: "color: #374151; font-size: 22px; border: 1px solid #D1D5DB; background: white; padding: 10px 16px; border-radius: 8px; margin: 15px; width: fit-content;",
            "{message}"
        }
    }
}
