use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearchOff};

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "AfroLearn - Page not found" }
        div {
            id: "x-not-found-page",
            style: "
                display:flex;
                flex-direction: column;
                align-items:center;
                gap: 16px;
                padding: 96px 32px;
                text-align: center;
            ",
            Icon { icon: MdSearchOff, style: "width: 64px; height: 64px; color: #9CA3AF;" }
            h1 { style: "font-size: 32px; font-weight: 700; margin: 0;", "Page not found" }
            p { style: "color: #6B7280; margin: 0;", "Nothing lives at /{path}." }
            div {
                style: "display:flex; gap: 12px;",
                Link { to: Route::HomePage {}, class: "afrolearn-button-outline", "Go home" }
                Link { to: Route::all_courses(), class: "afrolearn-button-primary", "Browse courses" }
            }
        }
    }
}
