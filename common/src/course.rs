//! Shared course models.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [CourseLevel::Beginner, CourseLevel::Intermediate, CourseLevel::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

impl Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub instructor_avatar: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub students: u32,
    pub duration: String,
    pub level: CourseLevel,
    pub category: String,
    pub thumbnail: String,
    pub description: String,
    pub tags: Vec<String>,
    /// May be composite, e.g. "English/Swahili".
    pub language: String,
    /// ISO date, `YYYY-MM-DD`.
    pub last_updated: String,
    pub is_popular: bool,
    pub is_free: bool,
}

impl Course {
    /// A course is free when flagged so or when its price is zero.
    pub fn is_free(&self) -> bool {
        self.is_free || self.price == 0.0
    }

    /// Parses the leading number of the display duration ("12 hours" -> 12.0).
    pub fn duration_hours(&self) -> Option<f64> {
        let number = self.duration.split_whitespace().next()?;
        let hours = number.parse::<f64>().ok()?;
        if hours.is_finite() && hours >= 0.0 { Some(hours) } else { None }
    }

    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format_price(self.price)
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Formats a count with thousands separators (4521 -> "4,521").
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub user: String,
    pub avatar: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub minutes: u32,
    pub is_preview: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumSection {
    pub title: String,
    pub lessons: Vec<Lesson>,
}

/// Extra content shown on the course detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub course: Course,
    pub instructor_bio: String,
    pub curriculum: Vec<CurriculumSection>,
    pub reviews: Vec<Review>,
}

impl CourseDetails {
    pub fn lesson_count(&self) -> usize {
        self.curriculum.iter().map(|section| section.lessons.len()).sum()
    }

    pub fn average_review_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("intermediate".parse::<CourseLevel>(), Ok(CourseLevel::Intermediate));
        assert_eq!(" Advanced ".parse::<CourseLevel>(), Ok(CourseLevel::Advanced));
        assert!("Expert".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn count_gets_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(923), "923");
        assert_eq!(format_count(4521), "4,521");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn price_label_prefers_free() {
        let mut course = crate::mock_data::mock_courses().remove(0);
        assert_eq!(course.price_label(), "$89.99");
        course.price = 0.0;
        assert_eq!(course.price_label(), "Free");
    }

    #[test]
    fn duration_hours_reads_leading_number() {
        let mut course = crate::mock_data::mock_courses().remove(0);
        assert_eq!(course.duration_hours(), Some(12.0));
        course.duration = "1.5 hours".to_string();
        assert_eq!(course.duration_hours(), Some(1.5));
        course.duration = "self paced".to_string();
        assert_eq!(course.duration_hours(), None);
    }
}
