use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::{md_action_icons::{MdSearch, MdViewList, MdViewModule}, md_navigation_icons::MdClose}};
use dioxus_primitives::{ContentAlign, ContentSide};

use crate::{
    components::hover_card::{HoverCard, HoverCardContent, HoverCardTrigger},
    data_definitions::view_mode::ViewMode,
    pages::courses_page::CatalogControl,
};


#[component]
pub fn CatalogSearchBar(control: CatalogControl, view_mode: Signal<ViewMode>) -> Element {
    let query = use_memo(move || control.snapshot.read().query.clone());
    let search_oninput = move |event: Event<FormData>| {
        control.set_query.call(event.value());
    };
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                justify-content: space-between;
                align-items: center;
                gap: 16px;
            ",
            div {
                id: "x-catalog-search-box",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 12px;
                    background-color: #F3F4F6;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 44px;
                    color: #111827;
                    border: 1px solid #E5E7EB;
                    width: 460px;
                    max-width: 100%;
                    box-sizing: border-box;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "search",
                    placeholder: "Search courses, instructors, topics...",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 16px;
                    ",
                    value: "{query}",
                    oninput: search_oninput,
                }
                if !query.read().is_empty() {
                    button {
                        style: "border: none; background: none; cursor: pointer; display:flex;",
                        onclick: move |_| control.set_query.call(String::new()),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px; color:#6B7280;" }
                    }
                }
            }
            div {
                style: "display:flex; align-items:center; gap: 8px;",
                ViewModeButton { mode: ViewMode::Grid, view_mode, icon: MdViewModule, label: "Grid view" }
                ViewModeButton { mode: ViewMode::List, view_mode, icon: MdViewList, label: "List view" }
            }
        }
    }
}

#[component]
fn ViewModeButton<I: IconShape + Clone + PartialEq + 'static>(mode: ViewMode, mut view_mode: Signal<ViewMode>, icon: I, label: String) -> Element {
    let is_selected = view_mode() == mode;
    let background = if is_selected { "#111827" } else { "white" };
    let color = if is_selected { "white" } else { "#111827" };
    rsx! {
        HoverCard {
            HoverCardTrigger {
                button {
                    style: "
                        width: 36px;
                        height: 36px;
                        display:flex;
                        align-items:center;
                        justify-content:center;
                        background: {background};
                        border: 1px solid #D1D5DB;
                        border-radius: 8px;
                        cursor: pointer;
                    ",
                    onclick: move |_| view_mode.set(mode),
                    Icon { icon: icon, style: "width: 20px; height: 20px; color: {color};" }
                }
            },
            HoverCardContent {
                side: ContentSide::Bottom,
                align: ContentAlign::Center,
                div {
                    class: "afrolearn-tooltip",
                    "{label}",
                }
            }
        }
    }
}
