/// Upper bound of the price slider. The default price range is `0..=PRICE_UPPER_BOUND`.
pub const PRICE_UPPER_BOUND: f64 = 200.0;
pub const PRICE_STEP: f64 = 5.0;

/// Rating thresholds offered by the filter panel, highest first.
pub const RATING_THRESHOLDS: [f64; 4] = [4.5, 4.0, 3.5, 3.0];

pub const LANGUAGE_OPTIONS: [&str; 6] = ["English", "French", "Swahili", "Hausa", "Arabic", "Amharic"];

/// Number of cards revealed per "Load More" click.
pub const CATALOG_PAGE_SIZE: usize = 12;

/// How many popular courses the landing page shows.
pub const POPULAR_COURSES_ON_LANDING: usize = 3;
