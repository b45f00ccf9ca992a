//! Derived values shown next to the filtered catalog: result counts, active filter chips and category options.

use crate::filter_state::{FilterField, FilterState};
use crate::mock_data::categories;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub filtered: usize,
    pub total: usize,
    pub query: String,
}

impl CatalogSummary {
    pub fn new(filtered: usize, total: usize, query: impl Into<String>) -> Self {
        Self { filtered, total, query: query.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.filtered == 0
    }

    /// `Showing 2 of 6 courses`, with ` for "query"` appended when a query is set.
    pub fn message(&self) -> String {
        let mut message = format!("Showing {} of {} courses", self.filtered, self.total);
        if !self.query.is_empty() {
            message.push_str(&format!(" for \"{}\"", self.query));
        }
        message
    }
}

/// A removable badge for one selected value. Removing it toggles `value` off in `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilterChip {
    pub field: FilterField,
    pub value: String,
}

/// Chips for the selected categories followed by the selected levels.
pub fn active_filter_chips(state: &FilterState) -> Vec<ActiveFilterChip> {
    let categories = state.categories.iter().map(|c| ActiveFilterChip { field: FilterField::Categories, value: c.clone() });
    let levels = state.level.iter().map(|l| ActiveFilterChip { field: FilterField::Level, value: l.to_string() });
    categories.chain(levels).collect()
}

/// One checkbox of the category filter: the category name and its advertised course count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub name: String,
    pub course_count: u32,
}

/// Every configured category in display order, including ones with no course in the dataset.
pub fn category_filter_options() -> Vec<CategoryOption> {
    categories()
        .into_iter()
        .map(|category| CategoryOption { name: category.name, course_count: category.course_count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::FilterUpdate;
    use crate::mock_data::mock_courses;

    #[test]
    fn message_without_query() {
        assert_eq!(CatalogSummary::new(6, 6, "").message(), "Showing 6 of 6 courses");
    }

    #[test]
    fn message_appends_query() {
        let summary = CatalogSummary::new(1, 6, "kwame");
        assert_eq!(summary.message(), "Showing 1 of 6 courses for \"kwame\"");
        assert!(!summary.is_empty());
        assert!(CatalogSummary::new(0, 6, "x").is_empty());
    }

    #[test]
    fn chips_list_categories_then_levels() {
        let state = FilterState::default()
            .apply(FilterUpdate::Toggle(FilterField::Level, "Beginner".to_string()))
            .unwrap()
            .apply(FilterUpdate::Toggle(FilterField::Categories, "Languages".to_string()))
            .unwrap()
            .apply(FilterUpdate::Toggle(FilterField::Language, "French".to_string()))
            .unwrap();
        assert_eq!(
            active_filter_chips(&state),
            vec![
                ActiveFilterChip { field: FilterField::Categories, value: "Languages".to_string() },
                ActiveFilterChip { field: FilterField::Level, value: "Beginner".to_string() },
            ]
        );
    }

    #[test]
    fn category_options_cover_every_configured_category() {
        let options = category_filter_options();
        let expected: Vec<(String, u32)> = categories().into_iter().map(|c| (c.name, c.course_count)).collect();
        let actual: Vec<(String, u32)> = options.iter().map(|o| (o.name.clone(), o.course_count)).collect();
        assert_eq!(actual, expected);
        assert_eq!(options.len(), 7);
    }

    #[test]
    fn category_options_include_categories_without_courses() {
        let options = category_filter_options();
        let in_dataset: Vec<String> = mock_courses().into_iter().map(|c| c.category).collect();
        let arts = options.iter().find(|o| o.name == "Arts & Culture").unwrap();
        assert_eq!(arts.course_count, 98);
        assert!(!in_dataset.contains(&arts.name));
        assert!(options.iter().any(|o| o.name == "Trade Skills" && o.course_count == 76));
    }
}
