use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdFavorite, MdSearch, MdTrendingUp};
use dioxus_free_icons::icons::md_av_icons::MdPlayArrow;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowForward;
use dioxus_free_icons::icons::md_social_icons::MdPublic;
use dioxus_free_icons::icons::md_toggle_icons::MdStar;
use dioxus_free_icons::Icon;

use common::catalog_const::POPULAR_COURSES_ON_LANDING;
use common::mock_data::{CategoryInfo, Testimonial, categories, platform_stats, popular_courses, testimonials};
use crate::components::course_components::course_card::CourseCard;
use crate::components::navbar::AuthControl;
use crate::data_definitions::catalog_dataset::catalog_dataset;
use crate::data_definitions::view_mode::CardVariant;
use crate::routes::Route;


/// Landing page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "AfroLearn - Empowering African Minds Through Education" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                box-sizing: border-box;
            ",
            HeroSection {}
            StatsSection {}
            CategoriesSection {}
            PopularCoursesSection {}
            TestimonialsSection {}
            CallToActionSection {}
        }
    }
}

#[component]
fn Section(background: String, title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        section {
            style: "padding: 72px 32px; background: {background};",
            div {
                style: "max-width: 1280px; margin: 0 auto; display:flex; flex-direction: column; gap: 40px;",
                div {
                    style: "text-align: center;",
                    h2 { style: "font-size: 36px; font-weight: 700; margin: 0 0 12px 0;", "{title}" }
                    p { style: "font-size: 18px; color: #6B7280; margin: 0;", "{subtitle}" }
                }
                {children}
            }
        }
    }
}

#[component]
fn HeroSection() -> Element {
    let auth = use_context::<AuthControl>();
    rsx! {
        section {
            id: "x-home-hero",
            style: "
                padding: 80px 32px;
                background: linear-gradient(135deg, #FFF7ED 0%, #FFFFFF 50%, #ECFDF5 100%);
            ",
            div {
                style: "
                    max-width: 1280px;
                    margin: 0 auto;
                    display:flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 48px;
                ",
                div {
                    style: "flex: 1; min-width: 320px; display:flex; flex-direction: column; gap: 24px;",
                    span { class: "afrolearn-badge afrolearn-badge-secondary", style: "align-self: flex-start;", "🌍 MADE FOR AFRICA" }
                    h1 {
                        style: "font-size: 52px; font-weight: 800; line-height: 1.1; margin: 0;",
                        "Empowering "
                        span { class: "afrolearn-gradient-text", "African Minds" }
                        " Through Education"
                    }
                    p {
                        style: "font-size: 20px; color: #4B5563; line-height: 1.6; margin: 0;",
                        "Join thousands of learners across Africa. Learn from local experts and global professionals. Courses designed for African contexts, challenges, and opportunities."
                    }
                    div {
                        style: "display:flex; flex-wrap: wrap; gap: 16px;",
                        button {
                            class: "afrolearn-button-primary",
                            onclick: move |_| auth.open_auth.call(()),
                            "Get Started"
                            Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
                        }
                        Link {
                            to: Route::all_courses(),
                            class: "afrolearn-button-outline",
                            Icon { icon: MdPlayArrow, style: "width: 20px; height: 20px;" }
                            "Browse Courses"
                        }
                    }
                    div {
                        style: "display:flex; align-items:center; gap: 8px; color: #6B7280;",
                        for i in 0..5 {
                            Icon { key: "{i}", icon: MdStar, style: "width: 18px; height: 18px; color: #FACC15;" }
                        }
                        span { "Rated 4.8/5 by 50+ students" }
                    }
                    HeroSearchInput {}
                }
                div {
                    style: "flex: 1; min-width: 320px; display:flex; flex-direction: column; gap: 16px;",
                    div {
                        class: "afrolearn-gradient-sunset",
                        style: "height: 320px; border-radius: 24px; display:flex; align-items:center; justify-content:center; font-size: 120px;",
                        "🎓"
                    }
                    div {
                        style: "display:flex; gap: 16px; flex-wrap: wrap;",
                        HeroHighlight { title: "80% Success Rate", subtitle: "Course completion", icon: MdTrendingUp }
                        HeroHighlight { title: "5 Countries", subtitle: "Across Africa", icon: MdPublic }
                    }
                }
            }
        }
    }
}

#[component]
fn HeroSearchInput() -> Element {
    let nav = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                max-width: 480px;
                color: #111827;
                border: 1px solid #E5E7EB;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "What do you want to learn?",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        nav.push(Route::courses_matching(search_q.read().clone()));
                    }
                },
            }
        }
    }
}

#[component]
fn HeroHighlight<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(title: String, subtitle: String, icon: I) -> Element {
    rsx! {
        div {
            class: "afrolearn-card",
            style: "flex: 1; display:flex; align-items:center; gap: 12px; padding: 16px;",
            div {
                class: "afrolearn-gradient-forest",
                style: "width: 44px; height: 44px; border-radius: 12px; display:flex; align-items:center; justify-content:center; color: white;",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
            }
            div {
                div { style: "font-weight: 700;", "{title}" }
                div { style: "font-size: 14px; color: #6B7280;", "{subtitle}" }
            }
        }
    }
}

#[component]
fn StatsSection() -> Element {
    let stats = use_hook(platform_stats);
    rsx! {
        section {
            id: "x-home-stats",
            class: "afrolearn-gradient-sunset",
            style: "padding: 48px 32px; color: white;",
            div {
                style: "
                    max-width: 1280px;
                    margin: 0 auto;
                    display:grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 24px;
                    text-align: center;
                ",
                for stat in stats {
                    div {
                        key: "{stat.label}",
                        div { style: "font-size: 40px; font-weight: 800;", "{stat.value}" }
                        div { style: "font-size: 16px; opacity: 0.9;", "{stat.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoriesSection() -> Element {
    let all_categories = use_hook(categories);
    rsx! {
        Section {
            background: "white",
            title: "Explore by Category",
            subtitle: "Discover courses tailored for African contexts and global standards",
            div {
                style: "
                    display:grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 20px;
                ",
                for category in all_categories {
                    CategoryTile { key: "{category.name}", category }
                }
            }
        }
    }
}

#[component]
fn CategoryTile(category: CategoryInfo) -> Element {
    let CategoryInfo { name, icon, course_count, gradient } = category;
    rsx! {
        Link {
            to: Route::courses_in_category(name.clone()),
            class: "afrolearn-card afrolearn-hover-shadow afrolearn-category-tile",
            div {
                style: "
                    width: 56px;
                    height: 56px;
                    border-radius: 16px;
                    display:flex;
                    align-items:center;
                    justify-content:center;
                    font-size: 28px;
                    background: {gradient};
                ",
                "{icon}"
            }
            div {
                h3 { style: "font-size: 18px; font-weight: 600; margin: 0;", "{name}" }
                p { style: "font-size: 14px; color: #6B7280; margin: 4px 0 0 0;", "{course_count} courses" }
            }
        }
    }
}

/// The most popular course is shown large, the rest as regular cards.
fn popular_card_variant(rank: usize) -> CardVariant {
    if rank == 0 { CardVariant::Featured } else { CardVariant::Default }
}

#[component]
fn PopularCoursesSection() -> Element {
    let popular = use_hook(|| popular_courses(catalog_dataset(), POPULAR_COURSES_ON_LANDING));
    rsx! {
        Section {
            background: "#F9FAFB",
            title: "Popular Courses",
            subtitle: "Join thousands of students in our most loved courses",
            div {
                style: "display:flex; flex-direction: column; gap: 24px;",
                for (i, course) in popular.into_iter().enumerate() {
                    CourseCard {
                        key: "{course.id}",
                        course,
                        variant: popular_card_variant(i),
                    }
                }
            }
            div {
                style: "text-align: center;",
                Link {
                    to: Route::all_courses(),
                    class: "afrolearn-button-outline",
                    "View All Courses"
                    Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}

#[component]
fn TestimonialsSection() -> Element {
    let all_testimonials = use_hook(testimonials);
    rsx! {
        Section {
            background: "white",
            title: "Success Stories from Africa",
            subtitle: "Real stories from learners who transformed their careers",
            div {
                style: "
                    display:grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 24px;
                ",
                for testimonial in all_testimonials {
                    TestimonialCard { key: "{testimonial.name}", testimonial }
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    let Testimonial { name, role, location, avatar, content, rating } = testimonial;
    rsx! {
        div {
            class: "afrolearn-card",
            style: "padding: 24px; display:flex; flex-direction: column; gap: 16px;",
            div {
                style: "display:flex; gap: 2px;",
                for i in 0..rating {
                    Icon { key: "{i}", icon: MdStar, style: "width: 18px; height: 18px; color: #FACC15;" }
                }
            }
            p { style: "font-style: italic; color: #374151; line-height: 1.6; margin: 0;", "\"{content}\"" }
            div {
                style: "display:flex; align-items:center; gap: 12px;",
                img { src: "{avatar}", alt: "{name}", style: "width: 48px; height: 48px; border-radius: 9999px; object-fit: cover;" }
                div {
                    div { style: "font-weight: 600;", "{name}" }
                    div { style: "font-size: 14px; color: #6B7280;", "{role} • {location}" }
                }
            }
        }
    }
}

#[component]
fn CallToActionSection() -> Element {
    let auth = use_context::<AuthControl>();
    rsx! {
        section {
            id: "x-home-cta",
            class: "afrolearn-gradient-forest",
            style: "padding: 72px 32px; color: white; text-align: center;",
            div {
                style: "max-width: 760px; margin: 0 auto; display:flex; flex-direction: column; gap: 20px; align-items: center;",
                h2 { style: "font-size: 36px; font-weight: 700; margin: 0;", "Ready to Transform Your Future?" }
                p {
                    style: "font-size: 18px; opacity: 0.9; margin: 0;",
                    "Join over 100+ African learners who are building skills, advancing careers, and creating opportunities. Start your learning journey today."
                }
                div {
                    style: "display:flex; flex-wrap: wrap; gap: 16px; justify-content: center;",
                    Link {
                        to: Route::all_courses(),
                        class: "afrolearn-button-primary afrolearn-button-light",
                        Icon { icon: MdFavorite, style: "width: 20px; height: 20px;" }
                        "Start Learning Today"
                    }
                    button {
                        class: "afrolearn-button-outline afrolearn-button-outline-light",
                        onclick: move |_| auth.open_auth.call(()),
                        "Become an Instructor"
                    }
                }
            }
        }
    }
}
