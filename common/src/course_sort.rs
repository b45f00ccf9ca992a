//! Sort orders for the catalog view. Applied to engine output, never inside the engine.

use std::cmp::Ordering;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::course::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Dataset order.
    #[default]
    Featured,
    MostPopular,
    HighestRated,
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::Featured,
        SortOrder::MostPopular,
        SortOrder::HighestRated,
        SortOrder::Newest,
        SortOrder::PriceLowToHigh,
        SortOrder::PriceHighToLow,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::MostPopular => "popular",
            SortOrder::HighestRated => "rating",
            SortOrder::Newest => "newest",
            SortOrder::PriceLowToHigh => "price-low",
            SortOrder::PriceHighToLow => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::MostPopular => "Most Popular",
            SortOrder::HighestRated => "Highest Rated",
            SortOrder::Newest => "Newest",
            SortOrder::PriceLowToHigh => "Price: Low to High",
            SortOrder::PriceHighToLow => "Price: High to Low",
        }
    }

    pub fn from_key(key: &str) -> Option<SortOrder> {
        SortOrder::ALL.into_iter().find(|order| order.key() == key)
    }

    fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortOrder::Featured => Ordering::Equal,
            SortOrder::MostPopular => b.students.cmp(&a.students),
            SortOrder::HighestRated => b.rating.total_cmp(&a.rating).then(b.review_count.cmp(&a.review_count)),
            SortOrder::Newest => b.last_updated.cmp(&a.last_updated),
            SortOrder::PriceLowToHigh => a.price.total_cmp(&b.price),
            SortOrder::PriceHighToLow => b.price.total_cmp(&a.price),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stable: ties keep their incoming order.
pub fn sort_courses(courses: &mut [&Course], order: SortOrder) {
    if order == SortOrder::Featured {
        return;
    }
    courses.sort_by(|a, b| order.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::mock_courses;

    fn sorted_ids(order: SortOrder) -> Vec<String> {
        let courses = mock_courses();
        let mut refs: Vec<&Course> = courses.iter().collect();
        sort_courses(&mut refs, order);
        refs.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn featured_keeps_dataset_order() {
        assert_eq!(sorted_ids(SortOrder::Featured), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn price_orders() {
        assert_eq!(sorted_ids(SortOrder::PriceLowToHigh), vec!["2", "5", "4", "6", "3", "1"]);
        assert_eq!(sorted_ids(SortOrder::PriceHighToLow), vec!["1", "3", "6", "4", "5", "2"]);
    }

    #[test]
    fn rating_ties_break_on_review_count() {
        // courses 1 and 5 are both rated 4.8; 5 has more reviews
        assert_eq!(sorted_ids(SortOrder::HighestRated), vec!["2", "5", "1", "3", "4", "6"]);
    }

    #[test]
    fn newest_first() {
        assert_eq!(sorted_ids(SortOrder::Newest), vec!["2", "5", "1", "6", "3", "4"]);
    }

    #[test]
    fn keys_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_key(order.key()), Some(order));
        }
        assert_eq!(SortOrder::from_key("cheapest"), None);
    }
}
