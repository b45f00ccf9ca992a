//! Client-side search and filter engine for the course catalog.
//!
//! [`filter_courses`] keeps every course that passes all active predicates, in dataset
//! order. A predicate is active when its filter field differs from the default; the price
//! predicate is always checked.

use crate::course::Course;
use crate::filter_state::FilterState;

/// Case-insensitive substring match against title, instructor or category.
pub fn matches_query(course: &Course, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    [&course.title, &course.instructor, &course.category]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

pub fn matches_category(course: &Course, state: &FilterState) -> bool {
    state.categories.is_empty() || state.categories.contains(&course.category)
}

pub fn matches_level(course: &Course, state: &FilterState) -> bool {
    state.level.is_empty() || state.level.contains(&course.level)
}

pub fn matches_price(course: &Course, state: &FilterState) -> bool {
    state.price.contains(course.price)
}

pub fn matches_rating(course: &Course, state: &FilterState) -> bool {
    state.rating <= 0.0 || course.rating >= state.rating
}

/// Any selected language contained in the course language, so "Swahili" matches "English/Swahili".
pub fn matches_language(course: &Course, state: &FilterState) -> bool {
    if state.language.is_empty() {
        return true;
    }
    let course_language = course.language.to_lowercase();
    state.language.iter().any(|lang| course_language.contains(&lang.to_lowercase()))
}

/// A course with an unparseable duration never matches an active duration filter.
pub fn matches_duration(course: &Course, state: &FilterState) -> bool {
    if state.duration.is_empty() {
        return true;
    }
    let Some(hours) = course.duration_hours() else { return false };
    state.duration.iter().any(|bucket| bucket.contains(hours))
}

pub fn course_matches(course: &Course, query: &str, state: &FilterState) -> bool {
    matches_query(course, query)
        && matches_category(course, state)
        && matches_level(course, state)
        && matches_price(course, state)
        && matches_rating(course, state)
        && matches_language(course, state)
        && matches_duration(course, state)
}

/// Indices into `dataset` of the matching courses, ascending.
pub fn filter_course_indices(dataset: &[Course], query: &str, state: &FilterState) -> Vec<usize> {
    dataset
        .iter()
        .enumerate()
        .filter(|(_, course)| course_matches(course, query, state))
        .map(|(i, _)| i)
        .collect()
}

pub fn filter_courses<'a>(dataset: &'a [Course], query: &str, state: &FilterState) -> Vec<&'a Course> {
    dataset.iter().filter(|course| course_matches(course, query, state)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::course::CourseLevel;
    use crate::filter_state::{DurationBucket, FilterField, FilterUpdate, PriceRange};
    use crate::mock_data::mock_courses;

    fn ids(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn empty_dataset_gives_empty_result() {
        assert!(filter_courses(&[], "react", &FilterState::default()).is_empty());
    }

    #[test]
    fn defaults_keep_everything_in_order() {
        let courses = mock_courses();
        let result = filter_courses(&courses, "", &FilterState::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn query_matches_any_of_title_instructor_category() {
        let courses = mock_courses();
        let state = FilterState::default();
        assert_eq!(ids(&filter_courses(&courses, "SWAHILI", &state)), vec!["5"]);
        assert_eq!(ids(&filter_courses(&courses, "okafor", &state)), vec!["3"]);
        assert_eq!(ids(&filter_courses(&courses, "health &", &state)), vec!["4"]);
        assert!(filter_courses(&courses, "quantum", &state).is_empty());
    }

    #[test]
    fn query_does_not_search_tags() {
        let courses = mock_courses();
        // "Frontend" is only a tag of course 1
        assert!(filter_courses(&courses, "frontend", &FilterState::default()).is_empty());
    }

    #[test]
    fn level_filter() {
        let courses = mock_courses();
        let state = FilterState { level: BTreeSet::from([CourseLevel::Beginner]), ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["2", "3", "5"]);
        let state = FilterState { level: BTreeSet::from([CourseLevel::Advanced]), ..Default::default() };
        assert!(filter_courses(&courses, "", &state).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let courses = mock_courses();
        let state = FilterState::default().apply(FilterUpdate::SetPriceRange(PriceRange::new(34.99, 56.99))).unwrap();
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["4", "5", "6"]);

        let free_only = FilterState::default().apply(FilterUpdate::SetPriceRange(PriceRange::new(0.0, 0.0))).unwrap();
        assert_eq!(ids(&filter_courses(&courses, "", &free_only)), vec!["2"]);
    }

    #[test]
    fn rating_threshold_is_inclusive() {
        let courses = mock_courses();
        let state = FilterState { rating: 4.8, ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["1", "2", "5"]);
    }

    #[test]
    fn language_matches_composite_field() {
        let courses = mock_courses();
        let state = FilterState::default().toggle_set_member(FilterField::Language, "swahili").unwrap();
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["5"]);
        let state = state.toggle_set_member(FilterField::Language, "French").unwrap();
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["5"]);
    }

    #[test]
    fn duration_buckets_filter_by_hours() {
        let courses = mock_courses();
        let state = FilterState { duration: BTreeSet::from([DurationBucket::Over17Hours]), ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["5"]);
        let state = FilterState { duration: BTreeSet::from([DurationBucket::UpTo2Hours]), ..Default::default() };
        assert!(filter_courses(&courses, "", &state).is_empty());
    }

    #[test]
    fn unparseable_duration_never_matches_active_duration_filter() {
        let mut courses = mock_courses();
        courses[0].duration = "self paced".to_string();
        let state = FilterState { duration: DurationBucket::ALL.into_iter().collect(), ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["2", "3", "4", "5", "6"]);
    }

    #[test]
    fn unknown_selections_match_nothing() {
        let courses = mock_courses();
        let state = FilterState { categories: BTreeSet::from(["Astrophysics".to_string()]), ..Default::default() };
        assert!(filter_courses(&courses, "", &state).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let courses = mock_courses();
        let state = FilterState::default()
            .toggle_set_member(FilterField::Categories, "Business & Entrepreneurship")
            .unwrap()
            .toggle_set_member(FilterField::Level, "Intermediate")
            .unwrap();
        assert_eq!(ids(&filter_courses(&courses, "", &state)), vec!["6"]);
        assert!(filter_courses(&courses, "kwame", &state).is_empty());
    }

    #[test]
    fn indices_agree_with_courses() {
        let courses = mock_courses();
        let state = FilterState { rating: 4.7, ..Default::default() };
        let indices = filter_course_indices(&courses, "", &state);
        let by_index: Vec<&Course> = indices.iter().map(|&i| &courses[i]).collect();
        assert_eq!(by_index, filter_courses(&courses, "", &state));
    }
}
