pub mod course_details_page;
pub mod courses_page;
pub mod home_page;
pub mod not_found_page;
pub mod programs_page;
