//! Pulse Types
//!
//! Core data structures shared by the dashboard and the journal.
//! Lookup keys (career, mood, interest, detected emotion) are closed
//! enumerations; every table keyed on them is an exhaustive `match`.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================
// CAREER TYPE
// ============================================================

/// A professional track that selects the dashboard content bundle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CareerType {
    #[default]
    Developer,
    Musician,
    Artist,
    Researcher,
    Educator,
    Entrepreneur,
}

impl CareerType {
    pub const ALL: [CareerType; 6] = [
        CareerType::Developer,
        CareerType::Musician,
        CareerType::Artist,
        CareerType::Researcher,
        CareerType::Educator,
        CareerType::Entrepreneur,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerType::Developer => "developer",
            CareerType::Musician => "musician",
            CareerType::Artist => "artist",
            CareerType::Researcher => "researcher",
            CareerType::Educator => "educator",
            CareerType::Entrepreneur => "entrepreneur",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "developer" => Some(CareerType::Developer),
            "musician" => Some(CareerType::Musician),
            "artist" => Some(CareerType::Artist),
            "researcher" => Some(CareerType::Researcher),
            "educator" => Some(CareerType::Educator),
            "entrepreneur" => Some(CareerType::Entrepreneur),
            _ => None,
        }
    }
}

impl fmt::Display for CareerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// MOOD
// ============================================================

/// Emotional state label driving activities, tasks, motivation and chart values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
    Tired,
    Energetic,
    Focused,
    Sad,
    Anxious,
    Angry,
    Creative,
    Confused,
    #[serde(rename = "burnt out")]
    BurntOut,
}

impl Mood {
    /// Selector order used by the journal screen
    pub const ALL: [Mood; 11] = [
        Mood::Neutral,
        Mood::Happy,
        Mood::Tired,
        Mood::Energetic,
        Mood::Focused,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
        Mood::Creative,
        Mood::Confused,
        Mood::BurntOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::Tired => "tired",
            Mood::Energetic => "energetic",
            Mood::Focused => "focused",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Creative => "creative",
            Mood::Confused => "confused",
            Mood::BurntOut => "burnt out",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "neutral" => Some(Mood::Neutral),
            "happy" => Some(Mood::Happy),
            "tired" => Some(Mood::Tired),
            "energetic" => Some(Mood::Energetic),
            "focused" => Some(Mood::Focused),
            "sad" => Some(Mood::Sad),
            "anxious" => Some(Mood::Anxious),
            "angry" => Some(Mood::Angry),
            "creative" => Some(Mood::Creative),
            "confused" => Some(Mood::Confused),
            "burnt out" | "burnt_out" => Some(Mood::BurntOut),
            _ => None,
        }
    }

    /// Resolve an optional token, falling back to `Neutral`
    pub fn resolve(token: Option<&str>) -> Self {
        token.and_then(Mood::from_str).unwrap_or_default()
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Neutral => "😐",
            Mood::Happy => "😊",
            Mood::Tired => "😩",
            Mood::Energetic => "🤩",
            Mood::Focused => "🧠",
            Mood::Sad => "😔",
            Mood::Anxious => "😰",
            Mood::Angry => "😡",
            Mood::Creative => "💡",
            Mood::Confused => "😕",
            Mood::BurntOut => "😫",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Neutral => "Neutral",
            Mood::Happy => "Happy",
            Mood::Tired => "Tired",
            Mood::Energetic => "Energetic",
            Mood::Focused => "Focused",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
            Mood::Creative => "Creative",
            Mood::Confused => "Confused",
            Mood::BurntOut => "Burnt Out",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// INTEREST
// ============================================================

/// Interest area chosen during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    #[default]
    Tech,
    Creative,
    Business,
    Education,
    Health,
    Impact,
}

impl Interest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Tech => "tech",
            Interest::Creative => "creative",
            Interest::Business => "business",
            Interest::Education => "education",
            Interest::Health => "health",
            Interest::Impact => "impact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tech" => Some(Interest::Tech),
            "creative" => Some(Interest::Creative),
            "business" => Some(Interest::Business),
            "education" => Some(Interest::Education),
            "health" => Some(Interest::Health),
            "impact" => Some(Interest::Impact),
            _ => None,
        }
    }
}

// ============================================================
// DETECTED EMOTION
// ============================================================

/// Category produced by classifying journal text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DetectedEmotion {
    Joyful,
    Sad,
    BurntOut,
    Focused,
    Creative,
    /// No keyword matched
    Reflective,
}

impl DetectedEmotion {
    /// Insight shown alongside a journal entry of this category
    pub fn insight(&self) -> &'static str {
        match self {
            DetectedEmotion::Joyful => "Your positive energy is contagious! This is a great time to take on leadership opportunities or mentor others.",
            DetectedEmotion::Sad => "It's okay to have challenging days. Consider taking a short wellness break or connecting with supportive peers.",
            DetectedEmotion::BurntOut => "I notice signs of burnout. Consider a wellness mission and breaking your tasks into smaller, manageable chunks.",
            DetectedEmotion::Focused => "You're in a great flow state! This is an ideal time for deep work on complex problems.",
            DetectedEmotion::Creative => "Your creative energy is high! Consider brainstorming new ideas or working on design challenges.",
            DetectedEmotion::Reflective => "Reflecting regularly helps build self-awareness. Consider setting specific goals for tomorrow based on today's experiences.",
        }
    }
}

// ============================================================
// STATIC CONTENT RECORDS
// ============================================================

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Course,
    Project,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A course or project suggestion
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub kind: ContentKind,
    pub difficulty: Difficulty,
}

/// A suggested activity with a symbolic icon key
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub icon: &'static str,
}

pub const MAX_SKILL_LEVEL: u8 = 10;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency 0..=10
    pub level: u8,
    pub category: &'static str,
}

impl Skill {
    pub fn next_level(&self) -> u8 {
        self.level + 1
    }

    pub fn xp_to_next(&self) -> u32 {
        u32::from(MAX_SKILL_LEVEL.saturating_sub(self.level)) * 100
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    /// Percent complete 0..=100
    pub progress: u8,
    pub deadline: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Event {
    pub name: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub description: &'static str,
}

/// One day of a career activity chart
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ActivityPoint {
    pub date: &'static str,
    pub primary: u8,
    pub secondary: u8,
}

/// Two labelled series (e.g. coding / learning)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ActivitySeries {
    pub primary_label: &'static str,
    pub secondary_label: &'static str,
    pub points: &'static [ActivityPoint],
}

/// A task suggested for a mood
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MoodTask {
    pub title: &'static str,
    /// "technical", "social", "creative", "wellness", "reflection",
    /// "organization", "planning", "learning", "emotional"
    pub category: &'static str,
    pub xp: u32,
}

// ============================================================
// JOURNAL ENTRY
// ============================================================

/// A reflection written by the user, paired with a mood and an insight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    pub mood: Mood,
    pub ai_insight: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, content: &str, mood: Mood, ai_insight: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            content: content.to_string(),
            mood,
            ai_insight: ai_insight.to_string(),
        }
    }

    /// Entry dated today (UTC)
    pub fn today(content: &str, mood: Mood, ai_insight: &str) -> Self {
        Self::new(Utc::now().date_naive(), content, mood, ai_insight)
    }
}

// ============================================================
// USER PROFILE
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub level: Option<u32>,
    /// Raw interest tokens; the first one is the primary interest
    #[serde(default)]
    pub interests: Vec<String>,
    pub current_mood: Option<Mood>,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
}

impl UserProfile {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            level: None,
            interests: Vec::new(),
            current_mood: None,
            journal: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Student")
    }

    pub fn display_level(&self) -> u32 {
        self.level.unwrap_or(1)
    }
}
