//! Error types for catalog state updates.

use thiserror::Error;

use crate::filter_state::FilterField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A set operation was requested on a field that is not set-typed.
    #[error("filter field `{field}` is not a set field")]
    InvalidFieldKind { field: FilterField },

    #[error("`{value}` is not a valid value for filter field `{field}`")]
    UnknownFilterValue { field: FilterField, value: String },
}
