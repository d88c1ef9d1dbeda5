//! Interest-based recommendations for the dashboard

use crate::types::{ContentKind, Difficulty, Interest, Recommendation};

use ContentKind::{Course, Project};
use Difficulty::{Advanced, Beginner, Intermediate};

const fn rec(title: &'static str, kind: ContentKind, difficulty: Difficulty) -> Recommendation {
    Recommendation { title, kind, difficulty }
}

/// First interest in the list, or `Tech` when the list is empty or the
/// first entry is not a known interest.
pub fn primary_interest(interests: &[String]) -> Interest {
    interests
        .first()
        .and_then(|s| Interest::from_str(s))
        .unwrap_or_default()
}

const RECS_TECH: &[Recommendation] = &[
    rec("Introduction to Machine Learning", Course, Intermediate),
    rec("Web Development Bootcamp", Course, Beginner),
    rec("Data Structures & Algorithms", Course, Advanced),
    rec("Build a Full-Stack App", Project, Intermediate),
    rec("Introduction to Cybersecurity", Course, Beginner),
];

const RECS_CREATIVE: &[Recommendation] = &[
    rec("Digital Illustration Fundamentals", Course, Beginner),
    rec("Music Production Essentials", Course, Beginner),
    rec("Advanced UI/UX Design", Course, Intermediate),
    rec("Create a Digital Portfolio", Project, Beginner),
    rec("Animation Principles", Course, Intermediate),
];

const RECS_BUSINESS: &[Recommendation] = &[
    rec("Entrepreneurship Basics", Course, Beginner),
    rec("Digital Marketing Strategy", Course, Intermediate),
    rec("Financial Planning for Startups", Course, Intermediate),
    rec("Create a Business Plan", Project, Beginner),
    rec("Leadership & Management", Course, Intermediate),
];

const RECS_EDUCATION: &[Recommendation] = &[
    rec("Effective Teaching Methods", Course, Intermediate),
    rec("Curriculum Development", Course, Advanced),
    rec("Educational Psychology", Course, Intermediate),
    rec("Design a Learning Module", Project, Intermediate),
    rec("Assessment Strategies", Course, Intermediate),
];

const RECS_HEALTH: &[Recommendation] = &[
    rec("Nutrition Fundamentals", Course, Beginner),
    rec("Mental Health First Aid", Course, Beginner),
    rec("Exercise Science", Course, Intermediate),
    rec("Create a Wellness Plan", Project, Beginner),
    rec("Healthcare Ethics", Course, Intermediate),
];

const RECS_IMPACT: &[Recommendation] = &[
    rec("Sustainable Development", Course, Intermediate),
    rec("Community Organizing", Course, Beginner),
    rec("Social Entrepreneurship", Course, Intermediate),
    rec("Design a Community Project", Project, Intermediate),
    rec("Environmental Justice", Course, Intermediate),
];

pub fn recommendations_for(interest: Interest) -> &'static [Recommendation] {
    match interest {
        Interest::Tech => RECS_TECH,
        Interest::Creative => RECS_CREATIVE,
        Interest::Business => RECS_BUSINESS,
        Interest::Education => RECS_EDUCATION,
        Interest::Health => RECS_HEALTH,
        Interest::Impact => RECS_IMPACT,
    }
}

pub fn icon_for(interest: Interest) -> &'static str {
    match interest {
        Interest::Tech => "code",
        Interest::Creative => "palette",
        Interest::Business => "briefcase",
        Interest::Education => "book-open",
        Interest::Health => "heart-pulse",
        Interest::Impact => "sparkles",
    }
}
