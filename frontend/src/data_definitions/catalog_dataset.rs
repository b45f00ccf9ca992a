//! The session's course dataset, built once on first use.

use std::sync::LazyLock;

use common::course::Course;
use common::mock_data::mock_courses;

static COURSES: LazyLock<Vec<Course>> = LazyLock::new(mock_courses);

pub fn catalog_dataset() -> &'static [Course] {
    &COURSES
}
