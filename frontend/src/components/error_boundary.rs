//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error caught by {} boundary: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 32px; max-width: 760px;",
                        h1 {
                            style: "color: #B91C1C; font-size: 40px; font-weight: 500; margin: 0;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 20px; margin: 0;",
                            "This page failed to render ({boundary_name})."
                        }
                        a {
                            href: "/",
                            style: "color: #4F46E5; font-size: 20px;",
                            "Back to the marketplace"
                        }
                        pre {
                            style: "color: #111827; background: #FEF2F2; border: 1px solid #FCA5A5; padding: 12px; border-radius: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 18px; border: 1px solid #4F46E5; background: white; padding: 8px 16px; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "8px",

            h2 {
                style: "color: #B91C1C; font-size: 28px; font-weight: 500; margin: 0;",
                "This section failed to load",
            }

            pre {
                style: "color: #7F1D1D; background: #FEF2F2; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}

/// Inline notice for a failed search; the page stays usable.
#[component]
pub fn SearchErrorNotice(message: String, on_retry: Callback<()>) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                margin: 16px 8px;
                padding: 14px 18px;
                border-radius: 10px;
                border: 1px solid #FCA5A5;
                background: #FEF2F2;
                color: #7F1D1D;
                font-size: 18px;
            ",
            span { style: "flex: 1;", "{message}" }
            button {
                style: "border: 1px solid #B91C1C; color: #B91C1C; background: white; border-radius: 8px; padding: 6px 14px; cursor: pointer; font-size: 16px;",
                onclick: move |_| on_retry.call(()),
                "Try again"
            }
        }
    }
}
