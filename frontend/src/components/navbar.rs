//! Top header bar and page layout. Owns the sign-in dialog state for every page.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_primitives::ContentAlign;
use dioxus_primitives::ContentSide;

use common::mock_data::categories;
use crate::components::auth_modals::AuthModals;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::footer::Footer;
use crate::components::hover_card::HoverCard;
use crate::components::hover_card::HoverCardContent;
use crate::components::hover_card::HoverCardTrigger;
use crate::data_definitions::auth_form::UserType;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::{Icon, IconShape};


/// Sign-in state owned by the layout and handed to pages through context.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthControl {
    pub user_type: Memo<Option<UserType>>,
    pub open_auth: Callback<()>,
}

/// Shared layout: header, page outlet, footer and the auth dialog.
#[component]
pub fn Navbar() -> Element {
    let mut auth_open = use_signal(|| false);
    let mut user_type = use_signal(|| None::<UserType>);
    let signed_in_as = use_memo(move || user_type());

    use_context_provider(move || AuthControl {
        user_type: signed_in_as,
        open_auth: Callback::new(move |_: ()| auth_open.set(true)),
    });

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            div {
                id: "x-nav-header",
                style: "
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 64px;
                    padding: 0 32px;
                    background-color: white;
                    border-bottom: 1px solid #E5E7EB;
                    box-shadow: 0 2px 8px rgba(0,0,0,0.04);
                ",

                NavbarLogo {},
                NavbarLinks {},
                HeaderSearchInput {},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarAccount { user_type: signed_in_as(), on_sign_in: move |_| auth_open.set(true) },
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }

            Footer {}

            AuthModals {
                open: auth_open(),
                on_open_change: move |open: bool| auth_open.set(open),
                on_auth_success: move |kind: UserType| {
                    tracing::info!("signed in as {kind}");
                    user_type.set(Some(kind));
                },
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            class: "afrolearn-logo",
            span {
                class: "afrolearn-gradient-sunset",
                style: "display:flex; padding: 6px; border-radius: 12px;",
                Icon { icon: MdSchool, style: "width: 24px; height: 24px; color: white;" }
            }
            span {
                style: "font-size: 20px; font-weight: 700; color: #111827;",
                "AfroLearn"
            }
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                gap: 16px;
                align-items: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            CategoriesMenu {}
            Link { to: Route::all_courses(), class: "afrolearn-nav-link", "All Courses" }
            Link { to: Route::ProgramsPage { }, class: "afrolearn-nav-link", "Intensive Programs" }
        }
    }
}

#[component]
fn CategoriesMenu() -> Element {
    let mut is_open = use_signal(|| false);
    rsx! {
        div {
            style: "position: relative;",
            onmouseleave: move |_| is_open.set(false),
            button {
                class: "afrolearn-nav-link",
                style: "display:flex; align-items:center; border:none; background:none; cursor:pointer;",
                onclick: move |_| is_open.set(!is_open()),
                "Categories"
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
            }
            if is_open() {
                div {
                    style: "
                        position: absolute;
                        top: 36px;
                        left: 0;
                        width: 300px;
                        padding: 12px;
                        background: white;
                        border: 1px solid #E5E7EB;
                        border-radius: 10px;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                        display:flex;
                        flex-direction: column;
                        gap: 4px;
                    ",
                    for category in categories() {
                        Link {
                            key: "{category.name}",
                            to: Route::courses_in_category(category.name.clone()),
                            class: "afrolearn-menu-item",
                            onclick: move |_| is_open.set(false),
                            "{category.icon} {category.name}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderSearchInput() -> Element {
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: #F3F4F6;
                border-radius: 9999px;
                padding: 6px 14px;
                height: 36px;
                width: 320px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 18px; height: 18px; color:#6B7280;" }
            input {
                r#type: "search",
                placeholder: "Search courses...",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                value: "{search_q}",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        navigator().push(Route::courses_matching(search_q.read().trim().to_string()));
                        search_q.set(String::new());
                    }
                },
            }
        }
    }
}

#[component]
fn NavbarAccount(user_type: Option<UserType>, on_sign_in: Callback<()>) -> Element {
    match user_type {
        Some(kind) => rsx! {
            div {
                style: "display:flex; align-items:center; gap: 8px; font-size: 14px; color: #374151;",
                Icon { icon: MdPerson, style: "width: 22px; height: 22px;" }
                "Signed in as {kind}"
            }
        },
        None => rsx! {
            button {
                class: "afrolearn-button-primary",
                onclick: move |_| on_sign_in(()),
                "Sign In"
            }
        },
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        HoverCard {
            HoverCardTrigger {
                Link {
                    to: to,
                    span {
                        style: "color:#374151; display:flex;",
                        Icon { icon: icon, style: "width: 24px; height: 24px;" }
                    }
                }
            },
            HoverCardContent {
                side: ContentSide::Bottom,
                align: ContentAlign::Start,
                div {
                    class: "afrolearn-tooltip",
                    "{label}",
                }
            }
        }
    }
}
