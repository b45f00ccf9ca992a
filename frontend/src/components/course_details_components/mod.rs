pub mod course_tabs;
pub mod enroll_card;
