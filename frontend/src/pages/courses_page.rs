//! Course catalog page: search box, filter panel and the filtered results.

use std::{cell::RefCell, rc::Rc};

use dioxus::{logger::tracing, prelude::*};

use common::{
    catalog_const::CATALOG_PAGE_SIZE,
    catalog_controller::{CatalogController, CatalogSnapshot},
    course_sort::{SortOrder, sort_courses},
    filter_cache::FilterCache,
    filter_state::FilterUpdate,
};
use crate::{
    components::{
        course_components::{catalog_results::CatalogResults, catalog_search_bar::CatalogSearchBar, course_filters::CourseFilters},
        error_boundary::ComponentErrorBoundary,
    },
    data_definitions::{catalog_dataset::catalog_dataset, catalog_seed::CatalogSeed, url_param::UrlParam, view_mode::ViewMode},
};

/// Read access to the catalog state plus the only ways to change it.
#[derive(Clone, Copy, PartialEq)]
pub struct CatalogControl {
    pub snapshot: Memo<CatalogSnapshot>,
    pub dispatch: Callback<FilterUpdate>,
    pub set_query: Callback<String>,
    /// Clears the query and every filter.
    pub clear: Callback<()>,
}

/// Catalog page
#[component]
pub fn CoursesPage(seed: UrlParam<CatalogSeed>) -> Element {
    rsx! {
        Title { "AfroLearn - Explore Courses" }
        CoursesPageRootComponent { seed: seed.0.clone() }
    }
}

fn new_controller(seed: &CatalogSeed) -> CatalogController {
    let mut controller = seed.controller();
    controller.subscribe(|snapshot| {
        tracing::debug!(query = %snapshot.query, active_filters = snapshot.filters.has_active_filters(), "catalog state published");
    });
    controller
}

#[component]
fn CoursesPageRootComponent(seed: ReadSignal<CatalogSeed>) -> Element {
    let mut controller = use_signal(|| new_controller(&seed.peek()));
    // when the url changes (the read signal given to us), the controller is not reset by navigation.
    use_effect(move || {
        let fresh = new_controller(&seed.read());
        if fresh.snapshot() != controller.peek().snapshot() {
            controller.set(fresh);
        }
    });

    let snapshot = use_memo(move || controller.read().snapshot().clone());
    let dispatch = use_callback(move |update: FilterUpdate| {
        if let Err(e) = controller.write().dispatch(update) {
            tracing::warn!("ignored filter update: {e}");
        }
    });
    let set_query = use_callback(move |query: String| controller.write().set_query(query));
    let clear = use_callback(move |_: ()| controller.write().clear());
    let control = CatalogControl { snapshot, dispatch, set_query, clear };

    let view_mode = use_signal(ViewMode::default);
    let sort_order = use_signal(SortOrder::default);
    let mut visible_count = use_signal(|| CATALOG_PAGE_SIZE);
    // new results start again from the first page
    use_effect(move || {
        let _ = snapshot.read();
        visible_count.set(CATALOG_PAGE_SIZE);
    });

    let cache = use_hook(|| Rc::new(RefCell::new(FilterCache::new())));
    let filtered = use_memo(move || {
        let snapshot = snapshot.read();
        let mut courses = cache.borrow_mut().filter(catalog_dataset(), &snapshot.query, &snapshot.filters);
        sort_courses(&mut courses, sort_order());
        courses
    });
    let total = catalog_dataset().len();

    rsx! {
        div {
            id: "x-courses-page-root-component",
            style: "
                width: 100%;
                max-width: 1400px;
                margin: 0 auto;
                padding: 32px;
                box-sizing: border-box;
                display: flex;
                flex-direction: column;
                gap: 24px;
            ",
            div {
                h1 { style: "font-size: 36px; font-weight: 700;", "Explore Courses" }
                p { style: "color: #6B7280; font-size: 18px;", "Discover {total}+ courses designed for African learners" }
            }

            CatalogSearchBar { control, view_mode }

            div {
                id: "x-courses-bottom-space",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 32px;
                    align-items: flex-start;
                ",
                div {
                    id: "x-courses-left-panel",
                    style: "width: 300px; flex-shrink: 0;",
                    CourseFilters { control, sort_order }
                }
                div {
                    id: "x-courses-results-panel",
                    style: "flex: 1; min-width: 320px;",
                    ComponentErrorBoundary {
                        CatalogResults { control, filtered, total, view_mode, visible_count }
                    }
                }
            }
        }
    }
}
