//! Overview / Curriculum / Reviews / Instructor tabs of the course detail page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdBook, MdSchedule}, md_av_icons::MdPlayCircleOutline, md_social_icons::MdPeople, md_toggle_icons::MdStar}};

use common::course::{Course, CourseDetails, CurriculumSection, Review, format_count};
use crate::{
    components::course_components::course_card::CourseCard,
    data_definitions::{catalog_dataset::catalog_dataset, view_mode::CardVariant},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseTab {
    #[default]
    Overview,
    Curriculum,
    Reviews,
    Instructor,
}

impl CourseTab {
    pub const ALL: [CourseTab; 4] = [CourseTab::Overview, CourseTab::Curriculum, CourseTab::Reviews, CourseTab::Instructor];

    pub fn label(&self) -> &'static str {
        match self {
            CourseTab::Overview => "Overview",
            CourseTab::Curriculum => "Curriculum",
            CourseTab::Reviews => "Reviews",
            CourseTab::Instructor => "Instructor",
        }
    }
}

/// Other courses taught by the same instructor, excluding `course` itself.
pub fn other_courses_by_instructor<'a>(dataset: &'a [Course], course: &Course) -> Vec<&'a Course> {
    dataset.iter().filter(|c| c.instructor == course.instructor && c.id != course.id).collect()
}

#[component]
pub fn CourseTabs(details: ReadSignal<CourseDetails>) -> Element {
    let mut selected = use_signal(CourseTab::default);
    rsx! {
        div {
            id: "x-course-tabs",
            style: "display:flex; flex-direction: column; gap: 20px;",
            div {
                role: "tablist",
                style: "
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    background: #F3F4F6;
                    border-radius: 10px;
                    padding: 4px;
                    gap: 4px;
                ",
                for tab in CourseTab::ALL {
                    button {
                        key: "{tab.label()}",
                        role: "tab",
                        class: if selected() == tab { "afrolearn-tab afrolearn-tab-active" } else { "afrolearn-tab" },
                        onclick: move |_| selected.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            div {
                class: "afrolearn-card",
                style: "padding: 24px;",
                {
                    match selected() {
                        CourseTab::Overview => rsx! { OverviewTab { details } },
                        CourseTab::Curriculum => rsx! { CurriculumTab { details } },
                        CourseTab::Reviews => rsx! { ReviewsTab { details } },
                        CourseTab::Instructor => rsx! { InstructorTab { details } },
                    }
                }
            }
        }
    }
}

#[component]
fn OverviewTab(details: ReadSignal<CourseDetails>) -> Element {
    let details = details.read().clone();
    let course = &details.course;
    let students = format_count(course.students);
    let lessons = details.lesson_count();
    rsx! {
        h3 { style: "font-size: 22px; font-weight: 600; margin: 0 0 12px 0;", "Course Overview" }
        p { style: "color: #374151; line-height: 1.7;", "{course.description}" }
        div {
            style: "display:flex; flex-wrap: wrap; gap: 8px; margin-top: 16px;",
            span {
                class: "afrolearn-badge afrolearn-badge-secondary",
                Icon { icon: MdSchedule, style: "width: 14px; height: 14px;" }
                "{course.duration}"
            }
            span {
                class: "afrolearn-badge afrolearn-badge-secondary",
                Icon { icon: MdPeople, style: "width: 14px; height: 14px;" }
                "{students} students"
            }
            span {
                class: "afrolearn-badge afrolearn-badge-secondary",
                Icon { icon: MdBook, style: "width: 14px; height: 14px;" }
                "{lessons} lessons"
            }
        }
        if !course.tags.is_empty() {
            h4 { style: "font-size: 16px; font-weight: 600; margin: 24px 0 8px 0;", "What you'll learn" }
            div {
                style: "display:flex; flex-wrap: wrap; gap: 8px;",
                for tag in course.tags.iter() {
                    span { key: "{tag}", class: "afrolearn-badge afrolearn-badge-outline", "{tag}" }
                }
            }
        }
    }
}

#[component]
fn CurriculumTab(details: ReadSignal<CourseDetails>) -> Element {
    let sections = details.read().curriculum.clone();
    let lesson_count = details.read().lesson_count();
    rsx! {
        div {
            style: "display:flex; justify-content: space-between; align-items: baseline; margin-bottom: 12px;",
            h3 { style: "font-size: 22px; font-weight: 600; margin: 0;", "Curriculum" }
            span { style: "color: #6B7280;", "{sections.len()} sections • {lesson_count} lessons" }
        }
        div {
            style: "display:flex; flex-direction: column; gap: 16px;",
            for (i, section) in sections.into_iter().enumerate() {
                CurriculumSectionBlock { key: "{i}", number: i + 1, section }
            }
        }
    }
}

#[component]
fn CurriculumSectionBlock(number: usize, section: CurriculumSection) -> Element {
    let CurriculumSection { title, lessons } = section;
    rsx! {
        div {
            style: "border: 1px solid #E5E7EB; border-radius: 10px; overflow: hidden;",
            div {
                style: "background: #F9FAFB; padding: 12px 16px; font-weight: 600;",
                "Section {number}: {title}"
            }
            ul {
                style: "list-style: none; margin: 0; padding: 0;",
                for (i, lesson) in lessons.into_iter().enumerate() {
                    li {
                        key: "{i}",
                        style: "display:flex; align-items:center; gap: 10px; padding: 10px 16px; border-top: 1px solid #F3F4F6;",
                        Icon { icon: MdPlayCircleOutline, style: "width: 18px; height: 18px; color: #E8590C;" }
                        span { style: "flex: 1;", "{lesson.title}" }
                        if lesson.is_preview {
                            span { class: "afrolearn-badge afrolearn-badge-outline", "Preview" }
                        }
                        span { style: "color: #6B7280; font-size: 14px;", "{lesson.minutes} min" }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewsTab(details: ReadSignal<CourseDetails>) -> Element {
    let reviews = details.read().reviews.clone();
    let average = details.read().average_review_rating().map(|r| format!("{r:.1}"));
    rsx! {
        div {
            style: "display:flex; justify-content: space-between; align-items: baseline; margin-bottom: 12px;",
            h3 { style: "font-size: 22px; font-weight: 600; margin: 0;", "Student Reviews" }
            if let Some(average) = average {
                span {
                    style: "display:flex; align-items:center; gap: 4px; font-weight: 600;",
                    Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #FACC15;" }
                    "{average} average"
                }
            }
        }
        if reviews.is_empty() {
            p { style: "color: #6B7280;", "No reviews yet." }
        }
        div {
            style: "display:flex; flex-direction: column; gap: 20px;",
            for review in reviews {
                ReviewItem { key: "{review.id}", review }
            }
        }
    }
}

#[component]
fn ReviewItem(review: Review) -> Element {
    let Review { user, avatar, rating, comment, .. } = review;
    let initial = user.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    rsx! {
        div {
            style: "display:flex; gap: 14px;",
            if avatar.is_empty() {
                div {
                    style: "width: 44px; height: 44px; border-radius: 9999px; background: #FED7AA; display:flex; align-items:center; justify-content:center; font-weight: 600;",
                    "{initial}"
                }
            } else {
                img { src: "{avatar}", alt: "{user}", style: "width: 44px; height: 44px; border-radius: 9999px; object-fit: cover;" }
            }
            div {
                div {
                    style: "display:flex; align-items:center; gap: 8px;",
                    span { style: "font-weight: 600;", "{user}" }
                    div {
                        style: "display:flex;",
                        for i in 0..rating {
                            Icon { key: "{i}", icon: MdStar, style: "width: 16px; height: 16px; color: #FACC15;" }
                        }
                    }
                }
                p { style: "margin: 4px 0 0 0; color: #374151;", "{comment}" }
            }
        }
    }
}

#[component]
fn InstructorTab(details: ReadSignal<CourseDetails>) -> Element {
    let CourseDetails { course, instructor_bio, .. } = details.read().clone();
    let other_courses: Vec<Course> = other_courses_by_instructor(catalog_dataset(), &course).into_iter().cloned().collect();
    rsx! {
        div {
            style: "display:flex; align-items:center; gap: 16px; margin-bottom: 16px;",
            img {
                src: "{course.instructor_avatar}",
                alt: "{course.instructor}",
                style: "width: 72px; height: 72px; border-radius: 9999px; object-fit: cover;",
            }
            div {
                h3 { style: "font-size: 22px; font-weight: 600; margin: 0;", "{course.instructor}" }
                p { style: "color: #6B7280; margin: 4px 0 0 0;", "{course.category}" }
            }
        }
        p { style: "color: #374151; line-height: 1.7;", "{instructor_bio}" }
        if !other_courses.is_empty() {
            h4 { style: "font-size: 16px; font-weight: 600; margin: 24px 0 12px 0;", "More courses by {course.instructor}" }
            div {
                style: "display:grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;",
                for other in other_courses {
                    CourseCard { key: "{other.id}", course: other, variant: CardVariant::Default }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use common::mock_data::mock_courses;

    use super::*;

    #[test]
    fn overview_is_the_default_tab() {
        assert_eq!(CourseTab::default(), CourseTab::Overview);
        assert_eq!(CourseTab::ALL.map(|t| t.label()), ["Overview", "Curriculum", "Reviews", "Instructor"]);
    }

    #[test]
    fn other_courses_exclude_the_current_one() {
        let courses = mock_courses();
        for course in &courses {
            let others = other_courses_by_instructor(&courses, course);
            assert!(others.iter().all(|c| c.id != course.id && c.instructor == course.instructor));
        }
    }
}
