//! Error boundary component for rendering failures.

use dioxus::{logger::tracing, prelude::*};

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                tracing::error!(boundary = %boundary_name.read().as_str(), "page failed to render");
                rsx! {
                    div {
                        style: "display:flex; flex-direction: column; gap: 12px; padding: 32px;",
                        h1 {
                            style: "color:#B91C1C; font-size: 40px; font-weight: 700;",
                            "Something went wrong",
                        }
                        p {
                            style: "color:#7F1D1D; font-size: 18px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            class: "afrolearn-button-outline",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color:black; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; text-wrap: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Catches failures of a single section so the rest of the page keeps working.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                tracing::warn!("section failed to render: {error_txt}");
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "afrolearn-button-outline",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 24px;
            ",

            h2 {
                style: "color:#B91C1C; font-size: 24px; font-weight: 600;",
                "This section failed to load",
            }

            pre {
                style: "color:#7F1D1D; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
