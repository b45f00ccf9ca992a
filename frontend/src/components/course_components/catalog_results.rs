//! Catalog view: result count, grid or list of cards, empty state and "Load More".

use dioxus::prelude::*;

use common::{catalog_const::CATALOG_PAGE_SIZE, catalog_summary::CatalogSummary, course::Course};
use crate::{
    components::course_components::course_card::CourseCard,
    data_definitions::view_mode::ViewMode,
    pages::courses_page::CatalogControl,
};

#[component]
pub fn CatalogResults(
    control: CatalogControl,
    filtered: Memo<Vec<&'static Course>>,
    total: usize,
    view_mode: Signal<ViewMode>,
    mut visible_count: Signal<usize>,
) -> Element {
    let summary = use_memo(move || CatalogSummary::new(filtered.read().len(), total, control.snapshot.read().query.clone()));
    let has_more = use_memo(move || filtered.read().len() > visible_count());

    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 24px;",
            p {
                style: "color: #6B7280;",
                "{summary.read().message()}"
            }

            if summary.read().is_empty() {
                EmptyResults { on_clear: control.clear }
            } else {
                div {
                    style: "{view_mode.read().container_style()}",
                    for course in filtered.read().iter().take(visible_count()) {
                        CourseCard {
                            key: "{course.id}",
                            course: (*course).clone(),
                            variant: view_mode.read().card_variant(),
                        }
                    }
                }
                if has_more() {
                    div {
                        style: "text-align: center; margin-top: 24px;",
                        button {
                            class: "afrolearn-button-outline",
                            style: "padding: 12px 28px; font-size: 16px;",
                            onclick: move |_| visible_count += CATALOG_PAGE_SIZE,
                            "Load More Courses"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmptyResults(on_clear: Callback<()>) -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                padding: 64px 0;
                text-align: center;
            ",
            div { style: "font-size: 56px;", "🔍" }
            h3 { style: "font-size: 20px; font-weight: 600;", "No courses found" }
            p { style: "color: #6B7280;", "Try adjusting your search or filters to find more courses." }
            button {
                class: "afrolearn-button-outline",
                onclick: move |_| on_clear(()),
                "Clear all filters"
            }
        }
    }
}
