use std::collections::BTreeSet;

use common::catalog_controller::CatalogController;
use common::course::Course;
use common::filter_engine::filter_courses;
use common::filter_state::{FilterField, FilterPatch, FilterState, FilterUpdate, PriceRange};
use common::mock_data::{categories, mock_courses};
use pretty_assertions::assert_eq;

fn ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn defaults_return_the_dataset_unchanged() {
    let courses = mock_courses();
    let result = filter_courses(&courses, "", &FilterState::default());
    let expected: Vec<&Course> = courses.iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn adding_a_category_restriction_never_grows_the_result() {
    let courses = mock_courses();
    for query in ["", "african", "dr."] {
        let unrestricted = filter_courses(&courses, query, &FilterState::default());
        for category in categories() {
            let state = FilterState::with_category(Some(category.name.clone()));
            let restricted = filter_courses(&courses, query, &state);
            assert!(restricted.iter().all(|c| unrestricted.contains(c)), "query {query:?} category {}", category.name);
        }
    }
}

#[test]
fn rerunning_with_unchanged_inputs_is_identical() {
    let courses = mock_courses();
    let state = FilterState { rating: 4.6, ..Default::default() };
    assert_eq!(filter_courses(&courses, "a", &state), filter_courses(&courses, "a", &state));
}

#[test]
fn instructor_match_is_enough() {
    let courses = mock_courses();
    let result = filter_courses(&courses, "kwame", &FilterState::default());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].instructor, "Kwame Asante");
    assert!(!result[0].title.to_lowercase().contains("kwame"));
}

#[test]
fn price_and_rating_edges_are_included() {
    let courses = mock_courses();
    let at_max = FilterState::default().apply(FilterUpdate::SetPriceRange(PriceRange::new(0.0, 89.99))).unwrap();
    assert!(ids(&filter_courses(&courses, "", &at_max)).contains(&"1".to_string()));

    let at_min = FilterState::default().apply(FilterUpdate::SetPriceRange(PriceRange::new(89.99, 200.0))).unwrap();
    assert_eq!(ids(&filter_courses(&courses, "", &at_min)), vec!["1"]);

    let at_rating = FilterState { rating: 4.5, ..Default::default() };
    assert!(ids(&filter_courses(&courses, "", &at_rating)).contains(&"6".to_string()));
}

#[test]
fn clear_resets_regardless_of_prior_state() {
    let courses = mock_courses();
    let mut controller = CatalogController::from_seed(Some("Languages".to_string()), "swahili");
    controller.set_filter(FilterPatch {
        level: Some(BTreeSet::from([common::course::CourseLevel::Advanced])),
        price: Some(PriceRange::new(10.0, 20.0)),
        rating: Some(4.9),
        ..Default::default()
    });
    controller.toggle_set_member(FilterField::Duration, "0-2 hours").unwrap();
    assert!(controller.filtered(&courses).is_empty());

    controller.clear();
    assert_eq!(controller.filtered(&courses), filter_courses(&courses, "", &FilterState::default()));
}

#[test]
fn rating_above_every_paid_course_leaves_only_agriculture() {
    let courses = mock_courses();
    let state = FilterState::default().apply(FilterUpdate::SetRating(4.85)).unwrap();
    let result = filter_courses(&courses, "", &state);
    assert_eq!(ids(&result), vec!["2"]);
    assert_eq!(result[0].category, "Agriculture & Farming");
    assert!(result[0].is_free());
}

#[test]
fn business_category_keeps_relative_order() {
    let courses = mock_courses();
    let state = FilterState::with_category(Some("Business & Entrepreneurship".to_string()));
    assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["3", "6"]);
}

#[test]
fn seeded_controller_then_query() {
    let courses = mock_courses();
    let mut controller = CatalogController::from_seed(Some("Business & Entrepreneurship".to_string()), "");
    controller.set_query("DIGITAL");
    let summary = controller.summary(&courses);
    assert_eq!(summary.message(), "Showing 1 of 6 courses for \"DIGITAL\"");
}
