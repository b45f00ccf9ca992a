use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::catalog_seed::CatalogSeed;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::course_details_page::CourseDetailsPage;
use crate::pages::courses_page::CoursesPage;
use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::programs_page::ProgramsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/courses?:seed")]
    CoursesPage { seed: UrlParam<CatalogSeed> },


    #[route("/courses/:course_id")]
    CourseDetailsPage { course_id: String },


    #[route("/programs")]
    ProgramsPage {},

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn all_courses() -> Self {
        Self::CoursesPage { seed: UrlParam::from(CatalogSeed::default()) }
    }

    pub fn courses_in_category(category: impl Into<String>) -> Self {
        Self::CoursesPage { seed: UrlParam::from(CatalogSeed::category(category)) }
    }

    pub fn courses_matching(query: impl Into<String>) -> Self {
        Self::CoursesPage { seed: UrlParam::from(CatalogSeed::query(query)) }
    }

    pub fn course_details(course_id: impl Into<String>) -> Self {
        Self::CourseDetailsPage { course_id: course_id.into() }
    }
}
