//! Course detail page: header, preview, tabs and the enroll sidebar.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_av_icons::MdPlayArrow, md_navigation_icons::MdArrowBack, md_toggle_icons::MdStar}};

use common::{course::{CourseDetails, format_count}, mock_data::course_details};
use crate::{
    components::{
        course_details_components::{course_tabs::CourseTabs, enroll_card::EnrollCard},
        error_boundary::ComponentErrorBoundary,
    },
    data_definitions::catalog_dataset::catalog_dataset,
    routes::Route,
};

#[component]
pub fn CourseDetailsPage(course_id: String) -> Element {
    rsx! {
        CourseDetailsPageRootComponent { course_id }
    }
}

#[component]
fn CourseDetailsPageRootComponent(course_id: ReadSignal<String>) -> Element {
    let details = use_memo(move || {
        let course_id = course_id.read().clone();
        let details = course_details(catalog_dataset(), &course_id);
        if details.is_none() {
            tracing::info!(%course_id, "no course with this id");
        }
        details
    });

    let Some(details) = details() else {
        return rsx! {
            Title { "AfroLearn - Course not found" }
            CourseNotFound {}
        };
    };

    rsx! {
        Title { "AfroLearn - {details.course.title}" }
        CourseDetailsContent { details }
    }
}

#[component]
fn CourseDetailsContent(details: ReadSignal<CourseDetails>) -> Element {
    let course = details.read().course.clone();
    let lesson_count = details.read().lesson_count();
    let students = format_count(course.students);
    rsx! {
        div {
            id: "x-course-details-page",
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
            Link {
                to: Route::all_courses(),
                class: "afrolearn-nav-link",
                Icon { icon: MdArrowBack, style: "width: 18px; height: 18px;" }
                "Back to courses"
            }

            div {
                style: "display:flex; flex-direction: column; gap: 12px;",
                span { class: "afrolearn-badge afrolearn-badge-secondary", style: "align-self: flex-start;", "{course.category}" }
                h1 { style: "font-size: 40px; font-weight: 800; margin: 0;", "{course.title}" }
                p { style: "font-size: 18px; color: #4B5563; margin: 0;", "{course.description}" }
                div {
                    style: "display:flex; flex-wrap: wrap; align-items:center; gap: 16px; color: #374151;",
                    span { "By " strong { "{course.instructor}" } }
                    span {
                        style: "display:flex; align-items:center; gap: 4px;",
                        Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #FACC15;" }
                        "{course.rating} ({course.review_count} reviews)"
                    }
                    span { "{students} students" }
                    span { "Last updated {course.last_updated}" }
                }
            }

            div {
                style: "
                    position: relative;
                    border-radius: 20px;
                    overflow: hidden;
                    max-height: 460px;
                ",
                img {
                    src: "{course.thumbnail}",
                    alt: "{course.title}",
                    style: "width: 100%; height: 460px; object-fit: cover; display:block;",
                }
                div {
                    style: "
                        position: absolute;
                        inset: 0;
                        display:flex;
                        align-items:center;
                        justify-content:center;
                        background: rgba(0,0,0,0.3);
                    ",
                    button {
                        class: "afrolearn-button-primary",
                        Icon { icon: MdPlayArrow, style: "width: 22px; height: 22px;" }
                        "Preview Course"
                    }
                }
            }

            div {
                style: "display:flex; flex-wrap: wrap; gap: 32px; align-items: flex-start;",
                div {
                    style: "flex: 2; min-width: 320px;",
                    ComponentErrorBoundary {
                        CourseTabs { details }
                    }
                }
                div {
                    style: "flex: 1; min-width: 280px;",
                    EnrollCard { course, lesson_count }
                }
            }
        }
    }
}

#[component]
fn CourseNotFound() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                align-items:center;
                gap: 16px;
                padding: 96px 32px;
                text-align: center;
            ",
            div { style: "font-size: 64px;", "📚" }
            h1 { style: "font-size: 28px; font-weight: 700; margin: 0;", "Course not found" }
            p { style: "color: #6B7280; margin: 0;", "The course you are looking for does not exist or has been removed." }
            Link {
                to: Route::all_courses(),
                class: "afrolearn-button-primary",
                "Browse all courses"
            }
        }
    }
}
