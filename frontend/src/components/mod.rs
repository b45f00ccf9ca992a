pub mod auth_modals;
pub mod course_components;
pub mod course_details_components;
pub mod error_boundary;
pub mod footer;
pub mod hover_card;
pub mod navbar;
