//! Career Content Module
//!
//! Static content bundles for every career track, plus the resolution
//! rule that picks the active track from the query value and the
//! persisted selection.

use crate::types::{
    Activity, ActivityPoint, ActivitySeries, CareerType, ContentKind, Difficulty, Event, Insight,
    Project, Recommendation, Skill,
};
use serde::Serialize;

/// Everything the dashboard shows for one career track
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerProfile {
    pub career: CareerType,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub recommendations: &'static [Recommendation],
    pub activities: &'static [Activity],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub events: &'static [Event],
    pub insights: &'static [Insight],
    pub chart: ActivitySeries,
    /// Noun used in the activity-trend caption ("coding patterns")
    pub trend_label: &'static str,
    /// Focus area suggested in the insights tab
    pub focus_area: &'static str,
}

impl CareerProfile {
    /// Recommendations shown on the overview card
    pub fn featured_recommendations(&self) -> &'static [Recommendation] {
        &self.recommendations[..self.recommendations.len().min(4)]
    }

    /// Events shown in the "upcoming" sidebar
    pub fn upcoming_events(&self) -> &'static [Event] {
        &self.events[..self.events.len().min(2)]
    }

    pub fn skill(&self, name: &str) -> Option<&'static Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn project(&self, name: &str) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn event(&self, name: &str) -> Option<&'static Event> {
        self.events.iter().find(|e| e.name == name)
    }
}

// ============================================================
// RESOLUTION
// ============================================================

/// Pick the active career: a known query value wins, then a known
/// persisted value, then `Developer`.
pub fn resolve_career_type(query: Option<&str>, stored: Option<&str>) -> CareerType {
    query
        .and_then(CareerType::from_str)
        .or_else(|| stored.and_then(CareerType::from_str))
        .unwrap_or_default()
}

/// Profile for a raw token; unknown or missing tokens get the developer profile
pub fn career_content(token: Option<&str>) -> &'static CareerProfile {
    profile(token.and_then(CareerType::from_str).unwrap_or_default())
}

pub fn profile(career: CareerType) -> &'static CareerProfile {
    match career {
        CareerType::Developer => &DEVELOPER,
        CareerType::Musician => &MUSICIAN,
        CareerType::Artist => &ARTIST,
        CareerType::Researcher => &RESEARCHER,
        CareerType::Educator => &EDUCATOR,
        CareerType::Entrepreneur => &ENTREPRENEUR,
    }
}

// ============================================================
// TABLES
// ============================================================

const fn rec(title: &'static str, kind: ContentKind, difficulty: Difficulty) -> Recommendation {
    Recommendation { title, kind, difficulty }
}

const fn act(title: &'static str, icon: &'static str) -> Activity {
    Activity { title, icon }
}

const fn skill(name: &'static str, level: u8, category: &'static str) -> Skill {
    Skill { name, level, category }
}

const fn project(name: &'static str, progress: u8, deadline: &'static str) -> Project {
    Project { name, progress, deadline }
}

const fn event(name: &'static str, date: &'static str) -> Event {
    Event { name, date }
}

const fn insight(title: &'static str, description: &'static str) -> Insight {
    Insight { title, description }
}

const fn pt(date: &'static str, primary: u8, secondary: u8) -> ActivityPoint {
    ActivityPoint { date, primary, secondary }
}

use ContentKind::{Course, Project as ProjectKind};
use Difficulty::{Advanced, Beginner, Intermediate};

static DEVELOPER: CareerProfile = CareerProfile {
    career: CareerType::Developer,
    title: "Developer Dashboard",
    description: "Track your coding journey and technical skill development",
    icon: "code",
    recommendations: &[
        rec("Advanced JavaScript Patterns", Course, Intermediate),
        rec("Building Scalable APIs", Course, Advanced),
        rec("React Performance Optimization", Course, Intermediate),
        rec("Full-Stack E-commerce Project", ProjectKind, Advanced),
        rec("Introduction to TypeScript", Course, Beginner),
    ],
    activities: &[
        act("Debug a complex algorithm", "cpu"),
        act("Optimize database queries", "database"),
        act("Refactor legacy code", "git-branch"),
    ],
    skills: &[
        skill("JavaScript", 7, "Frontend"),
        skill("React", 6, "Frontend"),
        skill("Node.js", 5, "Backend"),
        skill("SQL", 4, "Database"),
        skill("System Design", 3, "Architecture"),
    ],
    projects: &[
        project("Personal Portfolio", 85, "2 weeks"),
        project("Task Management API", 60, "1 month"),
        project("E-commerce Frontend", 30, "3 months"),
    ],
    events: &[
        event("Web Dev Hackathon", "June 15-17, 2025"),
        event("React Conference", "July 22-24, 2025"),
        event("Code Review Workshop", "May 30, 2025"),
    ],
    insights: &[
        insight("Coding Patterns", "You excel at frontend development but could improve backend skills"),
        insight("Learning Style", "You learn best through project-based approaches with clear documentation"),
        insight("Productivity", "Your peak coding hours are between 9am-12pm and 4pm-7pm"),
    ],
    chart: ActivitySeries {
        primary_label: "coding",
        secondary_label: "learning",
        points: &[
            pt("Apr 24", 65, 70),
            pt("Apr 25", 60, 65),
            pt("Apr 26", 70, 60),
            pt("Apr 27", 75, 75),
            pt("Apr 28", 60, 80),
            pt("Apr 29", 80, 65),
            pt("Apr 30", 75, 70),
        ],
    },
    trend_label: "coding",
    focus_area: "backend development and database skills",
};

static MUSICIAN: CareerProfile = CareerProfile {
    career: CareerType::Musician,
    title: "Musician Dashboard",
    description: "Track your musical journey and creative development",
    icon: "music",
    recommendations: &[
        rec("Advanced Music Theory", Course, Intermediate),
        rec("Studio Recording Techniques", Course, Advanced),
        rec("Songwriting Workshop", Course, Beginner),
        rec("Collaborative EP Project", ProjectKind, Intermediate),
        rec("Music Business Essentials", Course, Beginner),
    ],
    activities: &[
        act("Practice sight reading", "music-note"),
        act("Record a cover song", "mic"),
        act("Mix a multi-track recording", "headphones"),
    ],
    skills: &[
        skill("Music Theory", 6, "Theory"),
        skill("Performance", 7, "Practical"),
        skill("Composition", 5, "Creative"),
        skill("Production", 4, "Technical"),
        skill("Ear Training", 6, "Practical"),
    ],
    projects: &[
        project("Original EP", 70, "1 month"),
        project("Live Performance Set", 85, "2 weeks"),
        project("Collaborative Remix", 40, "3 months"),
    ],
    events: &[
        event("Songwriting Contest", "June 15-30, 2025"),
        event("Music Production Workshop", "July 8-10, 2025"),
        event("Open Mic Night", "May 25, 2025"),
    ],
    insights: &[
        insight("Musical Strengths", "You excel at performance and improvisation but could develop composition skills"),
        insight("Learning Style", "You learn best through ear training and practical application"),
        insight("Creativity", "Your peak creative hours are in the evening between 7pm-11pm"),
    ],
    chart: ActivitySeries {
        primary_label: "practice",
        secondary_label: "composition",
        points: &[
            pt("Apr 24", 75, 60),
            pt("Apr 25", 80, 55),
            pt("Apr 26", 65, 70),
            pt("Apr 27", 70, 75),
            pt("Apr 28", 85, 60),
            pt("Apr 29", 75, 80),
            pt("Apr 30", 80, 70),
        ],
    },
    trend_label: "practice",
    focus_area: "composition and music theory",
};

static ARTIST: CareerProfile = CareerProfile {
    career: CareerType::Artist,
    title: "Artist Dashboard",
    description: "Track your artistic journey and creative development",
    icon: "palette",
    recommendations: &[
        rec("Color Theory Masterclass", Course, Intermediate),
        rec("Digital Illustration Techniques", Course, Advanced),
        rec("Composition Fundamentals", Course, Beginner),
        rec("Character Design Project", ProjectKind, Intermediate),
        rec("Art Business for Freelancers", Course, Beginner),
    ],
    activities: &[
        act("Practice figure drawing", "pen-tool"),
        act("Create a color study", "palette"),
        act("Experiment with new medium", "brush"),
    ],
    skills: &[
        skill("Drawing", 7, "Fundamental"),
        skill("Color Theory", 5, "Theory"),
        skill("Digital Art", 6, "Technical"),
        skill("Composition", 4, "Theory"),
        skill("Character Design", 6, "Specialized"),
    ],
    projects: &[
        project("Digital Art Portfolio", 75, "1 month"),
        project("Children's Book Illustrations", 40, "3 months"),
        project("Character Design Series", 60, "2 months"),
    ],
    events: &[
        event("Digital Art Exhibition", "June 10-20, 2025"),
        event("Character Design Workshop", "July 15, 2025"),
        event("Art Portfolio Review", "May 28, 2025"),
    ],
    insights: &[
        insight("Artistic Strengths", "You excel at character design and linework but could develop color theory"),
        insight("Learning Style", "You learn best through visual demonstrations and practice"),
        insight("Creativity", "Your peak creative hours are in the morning between 8am-11am"),
    ],
    chart: ActivitySeries {
        primary_label: "practice",
        secondary_label: "creation",
        points: &[
            pt("Apr 24", 70, 65),
            pt("Apr 25", 65, 75),
            pt("Apr 26", 80, 60),
            pt("Apr 27", 75, 70),
            pt("Apr 28", 60, 85),
            pt("Apr 29", 70, 75),
            pt("Apr 30", 75, 80),
        ],
    },
    trend_label: "learning",
    focus_area: "advanced techniques in your field",
};

static RESEARCHER: CareerProfile = CareerProfile {
    career: CareerType::Researcher,
    title: "Researcher Dashboard",
    description: "Track your research journey and analytical development",
    icon: "brain",
    recommendations: &[
        rec("Advanced Research Methods", Course, Advanced),
        rec("Data Analysis with R", Course, Intermediate),
        rec("Scientific Writing Workshop", Course, Intermediate),
        rec("Literature Review Project", ProjectKind, Advanced),
        rec("Research Ethics", Course, Beginner),
    ],
    activities: &[
        act("Analyze recent literature", "book-open"),
        act("Design an experiment", "layers"),
        act("Practice statistical analysis", "bar-chart"),
    ],
    skills: &[
        skill("Research Methods", 7, "Methodology"),
        skill("Data Analysis", 6, "Technical"),
        skill("Scientific Writing", 5, "Communication"),
        skill("Critical Thinking", 7, "Cognitive"),
        skill("Experimental Design", 6, "Methodology"),
    ],
    projects: &[
        project("Research Paper", 65, "2 months"),
        project("Data Analysis Project", 80, "3 weeks"),
        project("Literature Review", 50, "1 month"),
    ],
    events: &[
        event("Research Symposium", "June 20-22, 2025"),
        event("Data Science Workshop", "July 10, 2025"),
        event("Academic Writing Seminar", "May 15, 2025"),
    ],
    insights: &[
        insight("Research Strengths", "You excel at critical analysis but could improve data visualization skills"),
        insight("Learning Style", "You learn best through systematic study and practical application"),
        insight("Productivity", "Your peak analytical hours are in the morning between 9am-1pm"),
    ],
    chart: ActivitySeries {
        primary_label: "research",
        secondary_label: "writing",
        points: &[
            pt("Apr 24", 75, 60),
            pt("Apr 25", 80, 55),
            pt("Apr 26", 70, 65),
            pt("Apr 27", 65, 75),
            pt("Apr 28", 75, 70),
            pt("Apr 29", 80, 65),
            pt("Apr 30", 70, 80),
        ],
    },
    trend_label: "learning",
    focus_area: "advanced techniques in your field",
};

static EDUCATOR: CareerProfile = CareerProfile {
    career: CareerType::Educator,
    title: "Educator Dashboard",
    description: "Track your teaching journey and educational development",
    icon: "book-open",
    recommendations: &[
        rec("Advanced Pedagogical Methods", Course, Advanced),
        rec("Educational Technology Integration", Course, Intermediate),
        rec("Inclusive Classroom Strategies", Course, Intermediate),
        rec("Curriculum Development Project", ProjectKind, Advanced),
        rec("Student Assessment Techniques", Course, Beginner),
    ],
    activities: &[
        act("Create engaging lesson plan", "book-open"),
        act("Design formative assessment", "clipboard-check"),
        act("Explore new teaching tool", "layers"),
    ],
    skills: &[
        skill("Pedagogy", 7, "Methodology"),
        skill("Curriculum Design", 6, "Planning"),
        skill("Assessment", 5, "Evaluation"),
        skill("Classroom Management", 6, "Practical"),
        skill("Educational Technology", 4, "Technical"),
    ],
    projects: &[
        project("Course Curriculum", 75, "1 month"),
        project("Interactive Lesson Series", 60, "2 weeks"),
        project("Student Assessment System", 40, "2 months"),
    ],
    events: &[
        event("Education Innovation Conference", "June 5-7, 2025"),
        event("Inclusive Teaching Workshop", "July 12, 2025"),
        event("EdTech Showcase", "May 20, 2025"),
    ],
    insights: &[
        insight("Teaching Strengths", "You excel at engaging presentation but could develop assessment techniques"),
        insight("Teaching Style", "You're most effective with interactive, discussion-based approaches"),
        insight("Productivity", "Your peak planning hours are in the evening between 6pm-9pm"),
    ],
    chart: ActivitySeries {
        primary_label: "teaching",
        secondary_label: "planning",
        points: &[
            pt("Apr 24", 70, 65),
            pt("Apr 25", 75, 60),
            pt("Apr 26", 65, 75),
            pt("Apr 27", 70, 70),
            pt("Apr 28", 80, 65),
            pt("Apr 29", 75, 70),
            pt("Apr 30", 70, 80),
        ],
    },
    trend_label: "learning",
    focus_area: "advanced techniques in your field",
};

static ENTREPRENEUR: CareerProfile = CareerProfile {
    career: CareerType::Entrepreneur,
    title: "Entrepreneur Dashboard",
    description: "Track your business journey and entrepreneurial development",
    icon: "briefcase",
    recommendations: &[
        rec("Lean Startup Methodology", Course, Intermediate),
        rec("Business Model Innovation", Course, Advanced),
        rec("Digital Marketing Strategy", Course, Intermediate),
        rec("Pitch Deck Development", ProjectKind, Beginner),
        rec("Financial Modeling for Startups", Course, Advanced),
    ],
    activities: &[
        act("Validate business idea", "target"),
        act("Develop marketing strategy", "line-chart"),
        act("Practice pitch presentation", "presentation"),
    ],
    skills: &[
        skill("Business Strategy", 6, "Planning"),
        skill("Marketing", 5, "Growth"),
        skill("Financial Management", 4, "Operations"),
        skill("Leadership", 7, "People"),
        skill("Product Development", 6, "Innovation"),
    ],
    projects: &[
        project("Business Plan", 85, "2 weeks"),
        project("Marketing Campaign", 60, "1 month"),
        project("Investor Pitch Deck", 70, "3 weeks"),
    ],
    events: &[
        event("Startup Pitch Competition", "June 18, 2025"),
        event("Entrepreneurship Summit", "July 25-27, 2025"),
        event("Networking Mixer", "May 12, 2025"),
    ],
    insights: &[
        insight("Business Strengths", "You excel at vision and leadership but could develop financial analysis skills"),
        insight("Working Style", "You're most effective when balancing strategic thinking with tactical execution"),
        insight("Productivity", "Your peak strategic thinking hours are in the morning between 8am-11am"),
    ],
    chart: ActivitySeries {
        primary_label: "strategy",
        secondary_label: "execution",
        points: &[
            pt("Apr 24", 75, 60),
            pt("Apr 25", 70, 65),
            pt("Apr 26", 65, 75),
            pt("Apr 27", 70, 70),
            pt("Apr 28", 80, 65),
            pt("Apr 29", 75, 70),
            pt("Apr 30", 70, 80),
        ],
    },
    trend_label: "learning",
    focus_area: "advanced techniques in your field",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens_resolve_to_their_profile() {
        for career in CareerType::ALL {
            let p = career_content(Some(career.as_str()));
            assert_eq!(p.career, career);
        }
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_developer() {
        assert_eq!(career_content(None).career, CareerType::Developer);
        assert_eq!(career_content(Some("")).career, CareerType::Developer);
        assert_eq!(career_content(Some("astronaut")).career, CareerType::Developer);
        assert_eq!(career_content(Some("Musician")).career, CareerType::Developer);
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(resolve_career_type(Some("artist"), Some("educator")), CareerType::Artist);
        assert_eq!(resolve_career_type(Some("bogus"), Some("educator")), CareerType::Educator);
        assert_eq!(resolve_career_type(None, Some("researcher")), CareerType::Researcher);
        assert_eq!(resolve_career_type(Some("bogus"), Some("bogus")), CareerType::Developer);
        assert_eq!(resolve_career_type(None, None), CareerType::Developer);
    }

    #[test]
    fn test_musician_profile() {
        let p = career_content(Some("musician"));
        assert_eq!(p.title, "Musician Dashboard");
        let names: Vec<&str> = p.skills.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["Music Theory", "Performance", "Composition", "Production", "Ear Training"]
        );
        assert_eq!(p.trend_label, "practice");
    }

    #[test]
    fn test_every_profile_is_complete() {
        for career in CareerType::ALL {
            let p = profile(career);
            assert_eq!(p.recommendations.len(), 5, "{}", career);
            assert_eq!(p.skills.len(), 5, "{}", career);
            assert_eq!(p.projects.len(), 3, "{}", career);
            assert_eq!(p.events.len(), 3, "{}", career);
            assert_eq!(p.chart.points.len(), 7, "{}", career);
            assert!(p.skills.iter().all(|s| s.level <= 10));
            assert!(p.projects.iter().all(|pr| pr.progress <= 100));
        }
    }

    #[test]
    fn test_overview_slices() {
        let p = profile(CareerType::Developer);
        assert_eq!(p.featured_recommendations().len(), 4);
        assert_eq!(p.upcoming_events()[0].name, "Web Dev Hackathon");
        assert_eq!(p.upcoming_events().len(), 2);
    }
}
