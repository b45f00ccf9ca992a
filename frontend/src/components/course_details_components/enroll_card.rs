use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdSchedule, MdVerifiedUser}, md_av_icons::MdSubscriptions, md_social_icons::MdPublic}};

use common::course::{Course, format_price};
use crate::components::navbar::AuthControl;


/// Sidebar card with the price and the enroll button.
#[component]
pub fn EnrollCard(course: ReadSignal<Course>, lesson_count: usize) -> Element {
    let auth = use_context::<AuthControl>();
    let Course { duration, language, original_price, .. } = course.read().clone();
    let is_free = course.read().is_free();
    let price_label = course.read().price_label();
    let enroll_label = if is_free { "Enroll for Free" } else { "Enroll Now" };
    let signed_in = auth.user_type.read().is_some();

    rsx! {
        div {
            id: "x-enroll-card",
            class: "afrolearn-card",
            style: "
                padding: 24px;
                display:flex;
                flex-direction: column;
                gap: 16px;
                position: sticky;
                top: 96px;
            ",
            div {
                style: "display:flex; align-items: baseline; gap: 10px;",
                span { style: "font-size: 32px; font-weight: 800;", "{price_label}" }
                if let Some(original) = original_price {
                    span {
                        style: "color: #9CA3AF; text-decoration: line-through;",
                        "{format_price(original)}"
                    }
                }
            }
            button {
                class: "afrolearn-button-primary",
                style: "width: 100%; justify-content: center;",
                onclick: move |_| auth.open_auth.call(()),
                "{enroll_label}"
            }
            if signed_in {
                p { style: "font-size: 14px; color: #059669; margin: 0;", "You're signed in. Enrollment opens soon." }
            }
            div {
                style: "display:flex; flex-direction: column; gap: 10px; color: #374151; font-size: 14px;",
                h4 { style: "font-size: 16px; font-weight: 600; margin: 0; color: #111827;", "This course includes" }
                EnrollCardFeature { icon: MdSchedule, text: "{duration} of content" }
                EnrollCardFeature { icon: MdSubscriptions, text: "{lesson_count} lessons" }
                EnrollCardFeature { icon: MdPublic, text: "Taught in {language}" }
                EnrollCardFeature { icon: MdVerifiedUser, text: "Certificate of completion" }
            }
        }
    }
}

#[component]
fn EnrollCardFeature<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, text: String) -> Element {
    rsx! {
        div {
            style: "display:flex; align-items:center; gap: 8px;",
            Icon { icon: icon, style: "width: 18px; height: 18px; color: #E8590C;" }
            span { "{text}" }
        }
    }
}
