pub mod catalog_results;
pub mod catalog_search_bar;
pub mod course_card;
pub mod course_filters;
