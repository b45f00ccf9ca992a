//! Course card used by the catalog grid/list and the landing page.

use dioxus::prelude::*;
use common::course::{Course, format_count, format_price};
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdBook, MdSchedule}, md_social_icons::MdPeople, md_toggle_icons::MdStar}};

use crate::{data_definitions::view_mode::CardVariant, routes::Route};

#[component]
pub fn CourseCard(course: ReadSignal<Course>, variant: CardVariant) -> Element {
    let Course {
        id,
        title,
        instructor,
        thumbnail,
        category,
        rating,
        review_count,
        students,
        duration,
        level,
        language,
        description,
        is_popular,
        original_price,
        ..
    } = course.read().clone();
    let is_free = course.read().is_free();
    let price_label = course.read().price_label();
    let is_featured = variant == CardVariant::Featured;
    let direction = if is_featured { "row" } else { "column" };
    let title_class = if is_featured { "afrolearn-card-title afrolearn-card-title-large" } else { "afrolearn-card-title" };
    let image_style = if is_featured { "width: 45%; min-height: 260px;" } else { "width: 100%; height: 190px;" };

    rsx! {
        div {
            class: "afrolearn-card afrolearn-hover-shadow",
            style: "
                display: flex;
                flex-direction: {direction};
                overflow: hidden;
            ",
            // THUMBNAIL WITH BADGES
            div {
                style: "position: relative; flex-shrink: 0; {image_style}",
                img {
                    src: "{thumbnail}",
                    alt: "{title}",
                    style: "width: 100%; height: 100%; object-fit: cover; display: block;",
                }
                if is_popular {
                    span { class: "afrolearn-badge afrolearn-gradient-sunset", style: "position: absolute; top: 12px; left: 12px;", "Popular" }
                }
                if is_free {
                    span { class: "afrolearn-badge afrolearn-gradient-forest", style: "position: absolute; top: 12px; right: 12px;", "Free" }
                }
            }
            // CONTENT
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 14px;
                    padding: 16px;
                    flex: 1;
                    min-width: 0;
                ",
                div {
                    style: "display:flex; flex-direction: column; gap: 10px;",
                    div {
                        style: "display:flex; align-items:center; gap: 6px; font-size: 13px; color: #6B7280;",
                        Icon { icon: MdBook, style: "width: 16px; height: 16px;" }
                        "{category}"
                    }
                    Link {
                        to: Route::course_details(id.clone()),
                        class: "{title_class}",
                        "{title}"
                    }
                    p { style: "font-size: 14px; color: #6B7280;", "by {instructor}" }

                    CourseStats { rating, review_count, students, duration }

                    div {
                        style: "display:flex; flex-wrap: wrap; gap: 8px;",
                        span { class: "afrolearn-badge afrolearn-badge-secondary", "{level}" }
                        span { class: "afrolearn-badge afrolearn-badge-outline", "{language}" }
                    }

                    if is_featured {
                        p { style: "font-size: 14px; line-height: 1.6; color: #4B5563;", "{description}" }
                    }
                }
                // PRICE AND CALL TO ACTION
                div {
                    style: "display:flex; align-items:center; justify-content: space-between; gap: 12px;",
                    div {
                        if is_free {
                            div { style: "font-size: 20px; font-weight: 700; color: #15803D;", "Free" }
                        } else {
                            div { style: "font-size: 22px; font-weight: 700; color: #111827;", "{price_label}" }
                            if let Some(original_price) = original_price {
                                div { style: "font-size: 13px; color: #6B7280; text-decoration: line-through;", "{format_price(original_price)}" }
                            }
                        }
                    }
                    Link {
                        to: Route::course_details(id.clone()),
                        class: "afrolearn-button-primary",
                        if is_free { "Enroll Free" } else { "View Course" }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseStats(rating: f64, review_count: u32, students: u32, duration: String) -> Element {
    rsx! {
        div {
            style: "display:flex; align-items:center; gap: 14px; font-size: 14px; color: #6B7280;",
            div {
                style: "display:flex; align-items:center; gap: 4px;",
                Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #FACC15;" }
                span { style: "font-weight: 600; color: #111827;", "{rating}" }
                span { "({review_count})" }
            }
            div {
                style: "display:flex; align-items:center; gap: 4px;",
                Icon { icon: MdPeople, style: "width: 16px; height: 16px;" }
                "{format_count(students)}"
            }
            div {
                style: "display:flex; align-items:center; gap: 4px;",
                Icon { icon: MdSchedule, style: "width: 16px; height: 16px;" }
                "{duration}"
            }
        }
    }
}
