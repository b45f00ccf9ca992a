//! Common library: course data model, filter state and the catalog filter engine.

extern crate serde;


pub mod error;
pub mod catalog_const;
pub mod course;
pub mod filter_state;
pub mod filter_engine;
pub mod course_sort;
pub mod catalog_summary;
pub mod catalog_controller;
pub mod filter_cache;
pub mod mock_data;
