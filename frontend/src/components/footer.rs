//! Site footer.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_social_icons::MdSchool;

use common::mock_data::categories;
use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        div {
            id: "x-footer",
            style: "
                display:flex;
                flex-direction: column;
                gap: 32px;
                padding: 48px 32px 24px 32px;
                background: #F9FAFB;
                border-top: 1px solid #E5E7EB;
            ",
            div {
                style: "
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 32px;
                ",
                div {
                    style: "display:flex; flex-direction: column; gap: 12px; max-width: 360px;",
                    div {
                        style: "display:flex; align-items:center; gap: 8px; font-size: 20px; font-weight: 700;",
                        Icon { icon: MdSchool, style: "width: 24px; height: 24px; color: #EA580C;" }
                        "AfroLearn"
                    }
                    p {
                        style: "color: #4B5563; font-size: 14px; line-height: 1.6;",
                        "Courses built by African experts for African learners. Learn the skills that matter in your market, at your pace."
                    }
                }
                FooterColumn { title: "Quick Links",
                    li { Link { to: Route::all_courses(), class: "afrolearn-footer-link", "Browse Courses" } }
                    li { Link { to: Route::ProgramsPage { }, class: "afrolearn-footer-link", "Intensive Programs" } }
                }
                FooterColumn { title: "Popular Categories",
                    for category in categories().into_iter().take(5) {
                        li {
                            key: "{category.name}",
                            Link { to: Route::courses_in_category(category.name.clone()), class: "afrolearn-footer-link", "{category.name}" }
                        }
                    }
                }
            }
            div {
                style: "border-top: 1px solid #E5E7EB; padding-top: 16px; color: #6B7280; font-size: 13px; text-align: center;",
                "© 2024 AfroLearn. All rights reserved. Made with ❤️ for Africa."
            }
        }
    }
}

#[component]
fn FooterColumn(title: String, children: Element) -> Element {
    rsx! {
        div {
            h3 { style: "font-weight: 600; color: #111827; margin-bottom: 16px;", "{title}" }
            ul {
                style: "display:flex; flex-direction: column; gap: 8px; list-style: none; padding: 0; margin: 0;",
                {children}
            }
        }
    }
}
