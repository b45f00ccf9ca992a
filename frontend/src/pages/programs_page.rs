use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdCheckCircle, MdEvent, MdSchedule}, md_social_icons::{MdPeople, MdPublic}}};

use common::{course::format_price, mock_data::{Program, mock_programs}};
use crate::components::navbar::AuthControl;


/// Cohort-based mentorship programs
#[component]
pub fn ProgramsPage() -> Element {
    let programs = use_hook(mock_programs);
    rsx! {
        Title { "AfroLearn - Programs" }
        div {
            id: "x-programs-page",
            style: "
                width: 100%;
                max-width: 1280px;
                margin: 0 auto;
                padding: 32px;
                box-sizing: border-box;
                display:flex;
                flex-direction: column;
                gap: 32px;
            ",
            div {
                h1 { style: "font-size: 36px; font-weight: 700; margin: 0 0 8px 0;", "Mentorship Programs" }
                p {
                    style: "color: #6B7280; font-size: 18px; margin: 0;",
                    "Live, cohort-based programs with expert mentors and a limited number of seats."
                }
            }
            div {
                style: "display:grid; grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); gap: 24px;",
                for program in programs {
                    ProgramCard { key: "{program.id}", program }
                }
            }
        }
    }
}

#[component]
fn ProgramCard(program: Program) -> Element {
    let auth = use_context::<AuthControl>();
    let seats_left = program.seats_left();
    let Program {
        title,
        instructor,
        instructor_bio,
        duration,
        price,
        start_date,
        category,
        description,
        features,
        thumbnail,
        schedule,
        language,
        ..
    } = program;
    let seats_color = if seats_left <= 5 { "#DC2626" } else { "#059669" };

    rsx! {
        div {
            class: "afrolearn-card afrolearn-hover-shadow",
            style: "display:flex; flex-direction: column; overflow: hidden;",
            img { src: "{thumbnail}", alt: "{title}", style: "width: 100%; height: 200px; object-fit: cover;" }
            div {
                style: "padding: 24px; display:flex; flex-direction: column; gap: 14px;",
                span { class: "afrolearn-badge afrolearn-badge-secondary", style: "align-self: flex-start;", "{category}" }
                h3 { class: "afrolearn-card-title", "{title}" }
                p { style: "color: #4B5563; margin: 0;", "{description}" }
                div {
                    style: "font-size: 14px; color: #374151;",
                    strong { "{instructor}" }
                    p { style: "margin: 4px 0 0 0; color: #6B7280;", "{instructor_bio}" }
                }
                div {
                    style: "display:grid; grid-template-columns: 1fr 1fr; gap: 8px; font-size: 14px; color: #374151;",
                    ProgramFact { icon: MdSchedule, text: "{duration}" }
                    ProgramFact { icon: MdEvent, text: "Starts {start_date}" }
                    ProgramFact { icon: MdPublic, text: "{language}" }
                    ProgramFact { icon: MdPeople, text: "{schedule}" }
                }
                ul {
                    style: "list-style: none; margin: 0; padding: 0; display:flex; flex-direction: column; gap: 6px;",
                    for feature in features {
                        li {
                            key: "{feature}",
                            style: "display:flex; align-items:center; gap: 8px; font-size: 14px;",
                            Icon { icon: MdCheckCircle, style: "width: 16px; height: 16px; color: #059669;" }
                            "{feature}"
                        }
                    }
                }
                div {
                    style: "display:flex; align-items:center; justify-content: space-between; margin-top: 8px;",
                    div {
                        div { style: "font-size: 26px; font-weight: 800;", "{format_price(price)}" }
                        div { style: "font-size: 14px; color: {seats_color};", "{seats_left} seats left" }
                    }
                    button {
                        class: "afrolearn-button-primary",
                        disabled: seats_left == 0,
                        onclick: move |_| auth.open_auth.call(()),
                        "Apply Now"
                    }
                }
            }
        }
    }
}

#[component]
fn ProgramFact<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, text: String) -> Element {
    rsx! {
        div {
            style: "display:flex; align-items:center; gap: 6px;",
            Icon { icon: icon, style: "width: 16px; height: 16px; color: #E8590C;" }
            span { "{text}" }
        }
    }
}
