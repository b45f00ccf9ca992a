pub mod url_param;
pub mod catalog_seed;
pub mod catalog_dataset;
pub mod view_mode;
pub mod auth_form;
