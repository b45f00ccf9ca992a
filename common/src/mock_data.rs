//! Static catalog content. The dataset is built once per session and never mutated.

use serde::{Deserialize, Serialize};

use crate::course::{Course, CourseDetails, CourseLevel, CurriculumSection, Lesson, Review};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub icon: String,
    /// Advertised catalog size, not derived from the mock dataset.
    pub course_count: u32,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub instructor_bio: String,
    pub duration: String,
    pub price: f64,
    pub max_students: u32,
    pub current_students: u32,
    pub start_date: String,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub thumbnail: String,
    pub schedule: String,
    pub language: String,
}

impl Program {
    pub fn seats_left(&self) -> u32 {
        self.max_students.saturating_sub(self.current_students)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub location: String,
    pub avatar: String,
    pub content: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStat {
    pub label: String,
    pub value: String,
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    instructor: &str,
    instructor_avatar: &str,
    price: f64,
    original_price: Option<f64>,
    rating: f64,
    review_count: u32,
    students: u32,
    duration: &str,
    level: CourseLevel,
    category: &str,
    thumbnail: &str,
    description: &str,
    tags: &[&str],
    language: &str,
    last_updated: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        instructor_avatar: instructor_avatar.to_string(),
        price,
        original_price,
        rating,
        review_count,
        students,
        duration: duration.to_string(),
        level,
        category: category.to_string(),
        thumbnail: thumbnail.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        language: language.to_string(),
        last_updated: last_updated.to_string(),
        is_popular: false,
        is_free: false,
    }
}

pub fn mock_courses() -> Vec<Course> {
    vec![
        Course {
            is_popular: true,
            ..course(
                "1",
                "Modern Web Development with React & TypeScript",
                "Kwame Asante",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
                89.99,
                Some(149.99),
                4.8,
                10,
                20,
                "12 hours",
                CourseLevel::Intermediate,
                "Technology & Programming",
                "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=225&fit=crop",
                "Master modern web development with React, TypeScript, and best practices. Perfect for African developers looking to build world-class applications.",
                &["React", "TypeScript", "JavaScript", "Frontend"],
                "English",
                "2024-01-15",
            )
        },
        Course {
            is_popular: true,
            is_free: true,
            ..course(
                "2",
                "Sustainable Agriculture Techniques for Africa",
                "Dr. Amina Hassan",
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
                0.0,
                None,
                4.9,
                567,
                4521,
                "8 hours",
                CourseLevel::Beginner,
                "Agriculture & Farming",
                "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?w=400&h=225&fit=crop",
                "Learn sustainable farming techniques specifically designed for African climates and soil conditions.",
                &["Agriculture", "Sustainability", "Farming", "Climate"],
                "English",
                "2024-01-20",
            )
        },
        course(
            "3",
            "Starting Your Business in Africa: A Complete Guide",
            "Chidi Okafor",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
            67.99,
            Some(99.99),
            4.7,
            298,
            1834,
            "15 hours",
            CourseLevel::Beginner,
            "Business & Entrepreneurship",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=225&fit=crop",
            "Complete guide to starting and scaling a business in African markets, covering legal, financial, and cultural aspects.",
            &["Business", "Entrepreneurship", "Startup", "Africa"],
            "English",
            "2024-01-10",
        ),
        course(
            "4",
            "Traditional African Medicine & Modern Healthcare",
            "Dr. Fatima Al-Rashid",
            "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=100&h=100&fit=crop&crop=face",
            45.99,
            None,
            4.6,
            189,
            923,
            "10 hours",
            CourseLevel::Intermediate,
            "Health & Medicine",
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=400&h=225&fit=crop",
            "Explore the intersection of traditional African medicine and modern healthcare practices.",
            &["Healthcare", "Traditional Medicine", "Medical", "Culture"],
            "English",
            "2024-01-05",
        ),
        Course {
            is_popular: true,
            ..course(
                "5",
                "Learn Swahili: From Beginner to Conversational",
                "Aisha Mwangi",
                "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=100&h=100&fit=crop&crop=face",
                34.99,
                None,
                4.8,
                445,
                2156,
                "20 hours",
                CourseLevel::Beginner,
                "Languages",
                "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=400&h=225&fit=crop",
                "Master Swahili language with native speakers. Perfect for business, travel, and cultural connection.",
                &["Language", "Swahili", "Communication", "Culture"],
                "English/Swahili",
                "2024-01-18",
            )
        },
        course(
            "6",
            "Digital Marketing for African Businesses",
            "Sarah Osei",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
            56.99,
            Some(89.99),
            4.5,
            234,
            1567,
            "14 hours",
            CourseLevel::Intermediate,
            "Business & Entrepreneurship",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=225&fit=crop",
            "Learn digital marketing strategies tailored for African markets and consumer behavior.",
            &["Digital Marketing", "Business", "Social Media", "Strategy"],
            "English",
            "2024-01-12",
        ),
    ]
}

pub fn mock_programs() -> Vec<Program> {
    let features = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        Program {
            id: "1".to_string(),
            title: "Full-Stack Development Bootcamp".to_string(),
            instructor: "Michael Adebayo".to_string(),
            instructor_bio: "Senior Software Engineer with 10+ years experience in Silicon Valley and Lagos tech scene.".to_string(),
            duration: "12 weeks".to_string(),
            price: 899.99,
            max_students: 25,
            current_students: 18,
            start_date: "2024-02-15".to_string(),
            category: "Technology & Programming".to_string(),
            description: "Intensive 12-week program to become a full-stack developer with job placement assistance.".to_string(),
            features: features(&[
                "12 weeks of intensive training",
                "Weekly 1-on-1 mentorship sessions",
                "Real-world project portfolio",
                "Job placement assistance",
                "Certificate of completion",
                "Lifetime access to materials",
                "Alumni network access",
            ]),
            thumbnail: "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=400&h=225&fit=crop".to_string(),
            schedule: "Mon-Fri, 6-9 PM WAT".to_string(),
            language: "English".to_string(),
        },
        Program {
            id: "2".to_string(),
            title: "Agriculture Innovation & Technology Mentorship".to_string(),
            instructor: "Dr. Grace Mumbi".to_string(),
            instructor_bio: "Agricultural scientist and innovation specialist with focus on African farming solutions.".to_string(),
            duration: "8 weeks".to_string(),
            price: 567.99,
            max_students: 15,
            current_students: 12,
            start_date: "2024-02-20".to_string(),
            category: "Agriculture & Farming".to_string(),
            description: "8-week mentorship program focusing on agricultural innovation and modern farming techniques.".to_string(),
            features: features(&[
                "8 weeks of guided learning",
                "Bi-weekly expert sessions",
                "Farm visit opportunities",
                "Innovation project guidance",
                "Networking with agritech startups",
                "Certification in AgriTech",
                "Access to funding opportunities",
            ]),
            thumbnail: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=400&h=225&fit=crop".to_string(),
            schedule: "Tuesdays & Thursdays, 7-8:30 PM EAT".to_string(),
            language: "English".to_string(),
        },
    ]
}

pub fn categories() -> Vec<CategoryInfo> {
    [
        ("Technology & Programming", "💻", 234, "linear-gradient(135deg, #3B82F6 0%, #9333EA 100%)"),
        ("Business & Entrepreneurship", "💼", 189, "linear-gradient(135deg, #F97316 0%, #DC2626 100%)"),
        ("Agriculture & Farming", "🌾", 156, "linear-gradient(135deg, #22C55E 0%, #059669 100%)"),
        ("Health & Medicine", "🏥", 134, "linear-gradient(135deg, #EF4444 0%, #DB2777 100%)"),
        ("Arts & Culture", "🎨", 98, "linear-gradient(135deg, #A855F7 0%, #4F46E5 100%)"),
        ("Languages", "🗣️", 87, "linear-gradient(135deg, #EAB308 0%, #EA580C 100%)"),
        ("Trade Skills", "🔧", 76, "linear-gradient(135deg, #4B5563 0%, #1F2937 100%)"),
    ]
    .into_iter()
    .map(|(name, icon, course_count, gradient)| CategoryInfo {
        name: name.to_string(),
        icon: icon.to_string(),
        course_count,
        gradient: gradient.to_string(),
    })
    .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "Adaora Okonkwo",
            "Software Developer",
            "Lagos, Nigeria",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
            "Afritechcamp helped me transition from marketing to software development. The instructors understand the African context perfectly.",
        ),
        (
            "Kofi Asante",
            "Entrepreneur",
            "Accra, Ghana",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
            "The business courses are tailored for African markets. I learned strategies that actually work here, not just in Silicon Valley.",
        ),
        (
            "Amina Hassan",
            "Agricultural Engineer",
            "Cairo, Egypt",
            "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=100&h=100&fit=crop&crop=face",
            "Finally, agricultural courses that address our climate and soil conditions. The practical knowledge is invaluable.",
        ),
    ]
    .into_iter()
    .map(|(name, role, location, avatar, content)| Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        location: location.to_string(),
        avatar: avatar.to_string(),
        content: content.to_string(),
        rating: 5,
    })
    .collect()
}

pub fn platform_stats() -> Vec<PlatformStat> {
    [("Active Learners", "100+"), ("Courses Available", "50+"), ("Expert Instructors", "50+"), ("Certificates Issued", "100+")]
        .into_iter()
        .map(|(label, value)| PlatformStat { label: label.to_string(), value: value.to_string() })
        .collect()
}

/// Courses flagged popular, at most `limit`, in dataset order.
pub fn popular_courses(dataset: &[Course], limit: usize) -> Vec<Course> {
    dataset.iter().filter(|c| c.is_popular).take(limit).cloned().collect()
}

fn instructor_bio(instructor: &str) -> &'static str {
    match instructor {
        "Kwame Asante" => "Frontend engineer from Kumasi who has shipped web products for banks and startups across West Africa.",
        "Dr. Amina Hassan" => "Soil scientist working with smallholder farmer cooperatives on climate-resilient practices.",
        "Chidi Okafor" => "Serial founder and angel investor based in Lagos, mentoring early-stage African startups.",
        "Dr. Fatima Al-Rashid" => "Physician and researcher studying how traditional remedies fit into modern primary care.",
        "Aisha Mwangi" => "Native Swahili speaker and language teacher from Mombasa with a decade of classroom experience.",
        "Sarah Osei" => "Growth marketer who has run digital campaigns for consumer brands in Ghana and Nigeria.",
        _ => "Experienced instructor on the platform.",
    }
}

fn curriculum_for(course: &Course) -> Vec<CurriculumSection> {
    // roughly two lessons per hour of content, spread over an intro, one section per tag and a wrap-up
    let total_lessons = course.duration_hours().map(|h| (h * 2.0).round() as usize).unwrap_or(6).max(3);
    let middle: Vec<&String> = course.tags.iter().take(3).collect();
    let per_section = (total_lessons.saturating_sub(2) / middle.len().max(1)).max(1);

    let lesson = |title: String, is_preview: bool| Lesson { title, minutes: 30, is_preview };
    let mut sections = vec![CurriculumSection {
        title: "Getting Started".to_string(),
        lessons: vec![lesson(format!("Welcome to {}", course.title), true)],
    }];
    for tag in middle {
        sections.push(CurriculumSection {
            title: tag.clone(),
            lessons: (1..=per_section).map(|i| lesson(format!("{tag}: Part {i}"), false)).collect(),
        });
    }
    sections.push(CurriculumSection {
        title: "Wrapping Up".to_string(),
        lessons: vec![lesson("Final project and next steps".to_string(), false)],
    });
    sections
}

fn reviews_for(course: &Course) -> Vec<Review> {
    let pool = [
        ("Alice", "https://images.unsplash.com/photo-1502685104226-ee32379fefbe?auto=format&fit=crop&w=100&q=80", 5, "Great course! Highly recommended."),
        ("Bob", "https://images.unsplash.com/photo-1527980965255-d3b416303d12?auto=format&fit=crop&w=100&q=80", 4, "Very informative and well-structured."),
        ("Ngozi", "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?auto=format&fit=crop&w=100&q=80", 5, "Examples felt close to home. I used them at work the next week."),
        ("Yusuf", "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&w=100&q=80", 4, "Clear explanations, I would like more exercises."),
    ];
    let offset = course.id.parse::<usize>().unwrap_or(0) % pool.len();
    (0..3)
        .map(|i| {
            let (user, avatar, rating, comment) = pool[(offset + i) % pool.len()];
            Review { id: i as u32 + 1, user: user.to_string(), avatar: avatar.to_string(), rating, comment: comment.to_string() }
        })
        .collect()
}

/// Detail page content for the course with `course_id`, if it exists.
pub fn course_details(dataset: &[Course], course_id: &str) -> Option<CourseDetails> {
    let course = dataset.iter().find(|c| c.id == course_id)?.clone();
    Some(CourseDetails {
        instructor_bio: instructor_bio(&course.instructor).to_string(),
        curriculum: curriculum_for(&course),
        reviews: reviews_for(&course),
        course,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn course_ids_are_unique() {
        let courses = mock_courses();
        let ids: BTreeSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), courses.len());
    }

    #[test]
    fn course_categories_come_from_the_category_list() {
        let names: BTreeSet<String> = categories().into_iter().map(|c| c.name).collect();
        assert!(mock_courses().iter().all(|c| names.contains(&c.category)));
    }

    #[test]
    fn popular_courses_are_limited_and_ordered() {
        let popular = popular_courses(&mock_courses(), 3);
        let ids: Vec<&str> = popular.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
        assert_eq!(popular_courses(&mock_courses(), 1).len(), 1);
    }

    #[test]
    fn details_for_known_course() {
        let details = course_details(&mock_courses(), "5").unwrap();
        assert_eq!(details.course.title, "Learn Swahili: From Beginner to Conversational");
        assert!(details.instructor_bio.contains("Swahili"));
        assert_eq!(details.curriculum.first().map(|s| s.title.as_str()), Some("Getting Started"));
        assert_eq!(details.curriculum.last().map(|s| s.title.as_str()), Some("Wrapping Up"));
        assert!(details.lesson_count() >= 3);
        assert_eq!(details.reviews.len(), 3);
        assert!(details.average_review_rating().is_some_and(|r| (1.0..=5.0).contains(&r)));
    }

    #[test]
    fn details_for_unknown_course() {
        assert!(course_details(&mock_courses(), "999").is_none());
    }

    #[test]
    fn program_seats() {
        let programs = mock_programs();
        assert_eq!(programs[0].seats_left(), 7);
        assert_eq!(programs[1].seats_left(), 3);
    }
}
