//! Filter state for the course catalog and the typed updates that replace it.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog_const::PRICE_UPPER_BOUND;
use crate::course::CourseLevel;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    Categories,
    Level,
    Price,
    Rating,
    Language,
    Duration,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Categories => "categories",
            FilterField::Level => "level",
            FilterField::Price => "price",
            FilterField::Rating => "rating",
            FilterField::Language => "language",
            FilterField::Duration => "duration",
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Duration buckets offered by the filter panel. Bounds are half-open, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DurationBucket {
    UpTo2Hours,
    From2To6Hours,
    From6To17Hours,
    Over17Hours,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::UpTo2Hours,
        DurationBucket::From2To6Hours,
        DurationBucket::From6To17Hours,
        DurationBucket::Over17Hours,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::UpTo2Hours => "0-2 hours",
            DurationBucket::From2To6Hours => "2-6 hours",
            DurationBucket::From6To17Hours => "6-17 hours",
            DurationBucket::Over17Hours => "17+ hours",
        }
    }

    fn bounds(&self) -> (f64, f64) {
        match self {
            DurationBucket::UpTo2Hours => (0.0, 2.0),
            DurationBucket::From2To6Hours => (2.0, 6.0),
            DurationBucket::From6To17Hours => (6.0, 17.0),
            DurationBucket::Over17Hours => (17.0, f64::INFINITY),
        }
    }

    pub fn contains(&self, hours: f64) -> bool {
        let (low, high) = self.bounds();
        hours >= low && hours < high
    }
}

impl Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationBucket::ALL
            .into_iter()
            .find(|bucket| bucket.label() == s.trim())
            .ok_or_else(|| s.to_string())
    }
}

/// Inclusive price range, kept within `0..=PRICE_UPPER_BOUND` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Clamps both ends into bounds; a crossed range collapses onto `max`.
    pub fn new(min: f64, max: f64) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, PRICE_UPPER_BOUND) };
        let max = clamp(max);
        let min = clamp(min).min(max);
        Self { min, max }
    }

    pub fn full() -> Self {
        Self { min: 0.0, max: PRICE_UPPER_BOUND }
    }

    pub fn is_full(&self) -> bool {
        self.min <= 0.0 && self.max >= PRICE_UPPER_BOUND
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub categories: BTreeSet<String>,
    pub level: BTreeSet<CourseLevel>,
    pub price: PriceRange,
    /// Minimum rating; 0 means no restriction.
    pub rating: f64,
    pub language: BTreeSet<String>,
    pub duration: BTreeSet<DurationBucket>,
}

/// Field-level replacement of a [`FilterState`]. `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPatch {
    pub categories: Option<BTreeSet<String>>,
    pub level: Option<BTreeSet<CourseLevel>>,
    pub price: Option<PriceRange>,
    pub rating: Option<f64>,
    pub language: Option<BTreeSet<String>>,
    pub duration: Option<BTreeSet<DurationBucket>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    SetCategories(BTreeSet<String>),
    SetLevel(BTreeSet<CourseLevel>),
    SetPriceRange(PriceRange),
    SetRating(f64),
    SetLanguage(BTreeSet<String>),
    SetDuration(BTreeSet<DurationBucket>),
    /// Adds the value to a set field, or removes it if already present.
    Toggle(FilterField, String),
    /// Resets every filter field. The search query is not touched.
    Clear,
}

fn normalize_rating(rating: f64) -> f64 {
    if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) }
}

fn toggled<T: Ord + Clone>(set: &BTreeSet<T>, value: T) -> BTreeSet<T> {
    let mut set = set.clone();
    if !set.remove(&value) {
        set.insert(value);
    }
    set
}

impl FilterState {
    /// Defaults, optionally pre-selecting one category (e.g. from a link on the landing page).
    pub fn with_category(category: Option<String>) -> Self {
        let mut state = Self::default();
        if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
            state.categories.insert(category);
        }
        state
    }

    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty()
            || !self.level.is_empty()
            || !self.language.is_empty()
            || !self.duration.is_empty()
            || self.rating > 0.0
            || !self.price.is_full()
    }

    pub fn merged(&self, patch: FilterPatch) -> FilterState {
        FilterState {
            categories: patch.categories.unwrap_or_else(|| self.categories.clone()),
            level: patch.level.unwrap_or_else(|| self.level.clone()),
            price: patch.price.map(|p| PriceRange::new(p.min, p.max)).unwrap_or(self.price),
            rating: patch.rating.map(normalize_rating).unwrap_or(self.rating),
            language: patch.language.unwrap_or_else(|| self.language.clone()),
            duration: patch.duration.unwrap_or_else(|| self.duration.clone()),
        }
    }

    pub fn toggle_set_member(&self, field: FilterField, value: &str) -> Result<FilterState, CatalogError> {
        let mut next = self.clone();
        match field {
            FilterField::Categories => next.categories = toggled(&self.categories, value.to_string()),
            FilterField::Language => next.language = toggled(&self.language, value.to_string()),
            FilterField::Level => {
                let level = value.parse::<CourseLevel>().map_err(|value| CatalogError::UnknownFilterValue { field, value })?;
                next.level = toggled(&self.level, level);
            }
            FilterField::Duration => {
                let bucket = value.parse::<DurationBucket>().map_err(|value| CatalogError::UnknownFilterValue { field, value })?;
                next.duration = toggled(&self.duration, bucket);
            }
            FilterField::Price | FilterField::Rating => return Err(CatalogError::InvalidFieldKind { field }),
        }
        Ok(next)
    }

    /// Returns the state produced by `update`; `self` is left untouched.
    pub fn apply(&self, update: FilterUpdate) -> Result<FilterState, CatalogError> {
        let patch = match update {
            FilterUpdate::SetCategories(categories) => FilterPatch { categories: Some(categories), ..Default::default() },
            FilterUpdate::SetLevel(level) => FilterPatch { level: Some(level), ..Default::default() },
            FilterUpdate::SetPriceRange(price) => FilterPatch { price: Some(price), ..Default::default() },
            FilterUpdate::SetRating(rating) => FilterPatch { rating: Some(rating), ..Default::default() },
            FilterUpdate::SetLanguage(language) => FilterPatch { language: Some(language), ..Default::default() },
            FilterUpdate::SetDuration(duration) => FilterPatch { duration: Some(duration), ..Default::default() },
            FilterUpdate::Toggle(field, value) => return self.toggle_set_member(field, &value),
            FilterUpdate::Clear => return Ok(FilterState::default()),
        };
        Ok(self.merged(patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_active_filters() {
        let state = FilterState::default();
        assert!(!state.has_active_filters());
        assert_eq!(state.price, PriceRange { min: 0.0, max: 200.0 });
        assert_eq!(state.rating, 0.0);
    }

    #[test]
    fn seeded_category_is_selected() {
        let state = FilterState::with_category(Some("Languages".to_string()));
        assert!(state.categories.contains("Languages"));
        assert!(state.has_active_filters());
        assert_eq!(FilterState::with_category(Some("  ".to_string())), FilterState::default());
    }

    #[test]
    fn narrowed_price_counts_as_active() {
        let state = FilterState::default().apply(FilterUpdate::SetPriceRange(PriceRange::new(10.0, 200.0))).unwrap();
        assert!(state.has_active_filters());
    }

    #[test]
    fn price_range_clamps_on_write() {
        assert_eq!(PriceRange::new(-5.0, 500.0), PriceRange::full());
        assert_eq!(PriceRange::new(120.0, 40.0), PriceRange { min: 40.0, max: 40.0 });
        assert_eq!(PriceRange::new(f64::NAN, 50.0), PriceRange { min: 0.0, max: 50.0 });
    }

    #[test]
    fn toggle_adds_then_removes() {
        let state = FilterState::default();
        let once = state.toggle_set_member(FilterField::Language, "Swahili").unwrap();
        assert!(once.language.contains("Swahili"));
        let twice = once.toggle_set_member(FilterField::Language, "Swahili").unwrap();
        assert_eq!(twice, state);
    }

    #[test]
    fn toggle_parses_typed_sets() {
        let state = FilterState::default()
            .toggle_set_member(FilterField::Level, "Beginner")
            .unwrap()
            .toggle_set_member(FilterField::Duration, "17+ hours")
            .unwrap();
        assert!(state.level.contains(&CourseLevel::Beginner));
        assert!(state.duration.contains(&DurationBucket::Over17Hours));

        let err = state.toggle_set_member(FilterField::Level, "Expert").unwrap_err();
        assert_eq!(err, CatalogError::UnknownFilterValue { field: FilterField::Level, value: "Expert".to_string() });
    }

    #[test]
    fn toggle_on_scalar_field_is_rejected() {
        let state = FilterState::default();
        for field in [FilterField::Categories, FilterField::Language] {
            assert!(state.toggle_set_member(field, "English").is_ok());
        }
        assert_eq!(
            state.toggle_set_member(FilterField::Price, "10"),
            Err(CatalogError::InvalidFieldKind { field: FilterField::Price })
        );
        assert_eq!(
            state.apply(FilterUpdate::Toggle(FilterField::Rating, "4".to_string())),
            Err(CatalogError::InvalidFieldKind { field: FilterField::Rating })
        );
    }

    #[test]
    fn patch_replaces_whole_fields() {
        let state = FilterState::default()
            .toggle_set_member(FilterField::Categories, "Languages")
            .unwrap()
            .toggle_set_member(FilterField::Language, "English")
            .unwrap();
        let merged = state.merged(FilterPatch {
            categories: Some(BTreeSet::from(["Health & Medicine".to_string()])),
            rating: Some(4.0),
            ..Default::default()
        });
        assert_eq!(merged.categories, BTreeSet::from(["Health & Medicine".to_string()]));
        assert_eq!(merged.language, state.language);
        assert_eq!(merged.rating, 4.0);
    }

    #[test]
    fn clear_resets_everything() {
        let state = FilterState::with_category(Some("Languages".to_string()))
            .apply(FilterUpdate::SetRating(4.5))
            .unwrap();
        assert_eq!(state.apply(FilterUpdate::Clear).unwrap(), FilterState::default());
    }

    #[test]
    fn duration_buckets_are_half_open() {
        assert!(DurationBucket::UpTo2Hours.contains(0.0));
        assert!(!DurationBucket::UpTo2Hours.contains(2.0));
        assert!(DurationBucket::From2To6Hours.contains(2.0));
        assert!(DurationBucket::From6To17Hours.contains(15.0));
        assert!(DurationBucket::Over17Hours.contains(17.0));
        assert!(DurationBucket::Over17Hours.contains(400.0));
    }
}
