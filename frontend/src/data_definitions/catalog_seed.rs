//! Initial catalog state carried by links into the catalog page.

use serde::{Deserialize, Serialize};

use common::catalog_controller::CatalogController;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogSeed {
    pub category: Option<String>,
    pub query: String,
}

impl CatalogSeed {
    pub fn category(name: impl Into<String>) -> Self {
        Self { category: Some(name.into()), ..Default::default() }
    }

    pub fn query(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Default::default() }
    }

    pub fn controller(&self) -> CatalogController {
        CatalogController::from_seed(self.category.clone(), self.query.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_seed_preselects_category() {
        let controller = CatalogSeed::category("Languages").controller();
        assert!(controller.filters().categories.contains("Languages"));
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn query_seed_sets_query_only() {
        let controller = CatalogSeed::query("react").controller();
        assert!(!controller.filters().has_active_filters());
        assert_eq!(controller.query(), "react");
    }
}
