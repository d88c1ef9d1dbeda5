//! Mood Content Module
//!
//! Fixed per-mood tables: dashboard activities, journal tasks, motivation
//! lines, dashboard greetings and the base value each mood contributes to
//! the emotion chart. Moods without a dedicated activity list or greeting
//! share the neutral one.

use crate::types::{Activity, Mood, MoodTask};

const fn act(title: &'static str, icon: &'static str) -> Activity {
    Activity { title, icon }
}

const fn task(title: &'static str, category: &'static str, xp: u32) -> MoodTask {
    MoodTask { title, category, xp }
}

// ============================================================
// ACTIVITIES
// ============================================================

const HAPPY_ACTIVITIES: &[Activity] = &[
    act("Take on a challenging project", "rocket"),
    act("Mentor a peer", "users"),
    act("Set ambitious goals", "star"),
];

const SAD_ACTIVITIES: &[Activity] = &[
    act("Try a mindfulness exercise", "brain"),
    act("Connect with a friend", "message-square"),
    act("Work on something creative", "palette"),
];

const FOCUSED_ACTIVITIES: &[Activity] = &[
    act("Deep dive into a complex topic", "book-open"),
    act("Work on your priority task", "zap"),
    act("Document your insights", "lightbulb"),
];

const TIRED_ACTIVITIES: &[Activity] = &[
    act("Review and organize notes", "book-open"),
    act("Watch an educational video", "rocket"),
    act("Set up for tomorrow", "calendar"),
];

const ANXIOUS_ACTIVITIES: &[Activity] = &[
    act("Break down a big task into steps", "lightbulb"),
    act("Try a breathing exercise", "brain"),
    act("Organize your workspace", "briefcase"),
];

const NEUTRAL_ACTIVITIES: &[Activity] = &[
    act("Explore a new topic", "sparkles"),
    act("Review your goals", "bar-chart"),
    act("Connect with peers", "users"),
];

pub fn activities_for(mood: Mood) -> &'static [Activity] {
    match mood {
        Mood::Happy => HAPPY_ACTIVITIES,
        Mood::Sad => SAD_ACTIVITIES,
        Mood::Focused => FOCUSED_ACTIVITIES,
        Mood::Tired => TIRED_ACTIVITIES,
        Mood::Anxious => ANXIOUS_ACTIVITIES,
        Mood::Neutral
        | Mood::Energetic
        | Mood::Angry
        | Mood::Creative
        | Mood::Confused
        | Mood::BurntOut => NEUTRAL_ACTIVITIES,
    }
}

// ============================================================
// TASKS
// ============================================================

const TASKS_NEUTRAL: &[MoodTask] = &[
    task("Review your weekly goals", "planning", 30),
    task("Learn one new concept", "learning", 50),
    task("Reach out to a classmate", "social", 40),
];

const TASKS_HAPPY: &[MoodTask] = &[
    task("Help a peer with a problem", "social", 60),
    task("Start a stretch project", "technical", 80),
    task("Share a win with your team", "social", 30),
];

const TASKS_TIRED: &[MoodTask] = &[
    task("Take a 20 minute rest", "wellness", 30),
    task("Tidy up your notes", "organization", 40),
    task("Plan tomorrow's top three tasks", "planning", 40),
];

const TASKS_ENERGETIC: &[MoodTask] = &[
    task("Tackle your hardest task first", "technical", 80),
    task("Prototype a new idea", "creative", 70),
    task("Organize a study session", "social", 50),
];

const TASKS_FOCUSED: &[MoodTask] = &[
    task("Complete a deep work block", "technical", 80),
    task("Finish a course module", "learning", 60),
    task("Write down what you learned", "reflection", 40),
];

const TASKS_SAD: &[MoodTask] = &[
    task("Go for a short walk", "wellness", 40),
    task("Write three things you're grateful for", "reflection", 40),
    task("Talk to someone you trust", "emotional", 50),
];

const TASKS_ANXIOUS: &[MoodTask] = &[
    task("Try a 5 minute breathing exercise", "wellness", 40),
    task("Split one big task into small steps", "planning", 50),
    task("Clear your workspace", "organization", 30),
];

const TASKS_ANGRY: &[MoodTask] = &[
    task("Take a break before responding", "emotional", 40),
    task("Do some physical exercise", "wellness", 50),
    task("Write out what's bothering you", "reflection", 40),
];

const TASKS_CREATIVE: &[MoodTask] = &[
    task("Sketch out a new project idea", "creative", 60),
    task("Brainstorm ten ideas without judging", "creative", 50),
    task("Redesign something you built", "technical", 70),
];

const TASKS_CONFUSED: &[MoodTask] = &[
    task("List the questions you have", "reflection", 30),
    task("Ask a mentor for help", "social", 50),
    task("Revisit the fundamentals", "learning", 60),
];

const TASKS_BURNT_OUT: &[MoodTask] = &[
    task("Take the rest of the day off guilt-free", "wellness", 50),
    task("Cancel one non-essential commitment", "planning", 40),
    task("Check in with a friend", "emotional", 40),
];

pub fn tasks_for(mood: Mood) -> &'static [MoodTask] {
    match mood {
        Mood::Neutral => TASKS_NEUTRAL,
        Mood::Happy => TASKS_HAPPY,
        Mood::Tired => TASKS_TIRED,
        Mood::Energetic => TASKS_ENERGETIC,
        Mood::Focused => TASKS_FOCUSED,
        Mood::Sad => TASKS_SAD,
        Mood::Anxious => TASKS_ANXIOUS,
        Mood::Angry => TASKS_ANGRY,
        Mood::Creative => TASKS_CREATIVE,
        Mood::Confused => TASKS_CONFUSED,
        Mood::BurntOut => TASKS_BURNT_OUT,
    }
}

// ============================================================
// MOTIVATION
// ============================================================

pub fn motivation_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Neutral => "Steady days build strong foundations. Pick one small goal and see it through.",
        Mood::Happy => "Your good mood is a great engine for progress. Use it to try something ambitious!",
        Mood::Tired => "Rest is part of the process. Small, gentle steps still move you forward.",
        Mood::Energetic => "You're charged up! Point that energy at the task you've been putting off.",
        Mood::Focused => "Your focus is a superpower right now. Protect it and go deep.",
        Mood::Sad => "It's okay to feel low. Be kind to yourself and reach out if you need support.",
        Mood::Anxious => "One step at a time. You don't have to solve everything today.",
        Mood::Angry => "Strong feelings carry energy. Pause, breathe, then channel it into something constructive.",
        Mood::Creative => "Ideas are flowing. Capture them before they slip away!",
        Mood::Confused => "Confusion is the doorway to understanding. Ask questions and break things down.",
        Mood::BurntOut => "You've been giving a lot. Recovery is productive too; let yourself recharge.",
    }
}

// ============================================================
// DASHBOARD GREETING
// ============================================================

const NEUTRAL_WELCOME: &str = "Today is full of possibilities. What would you like to focus on?";

pub fn welcome_message(mood: Option<Mood>) -> &'static str {
    match mood.unwrap_or_default() {
        Mood::Happy => "You're radiating positive energy today! Let's channel that into something amazing.",
        Mood::Sad => "Even on challenging days, small steps forward matter. What's one thing you'd like to accomplish today?",
        Mood::Focused => "You're in a great flow state! This is perfect for deep work on complex problems.",
        Mood::Tired => "It's okay to pace yourself today. Even small progress is still progress.",
        Mood::Anxious => "Taking things one step at a time can help manage overwhelm. What's your priority today?",
        Mood::Neutral
        | Mood::Energetic
        | Mood::Angry
        | Mood::Creative
        | Mood::Confused
        | Mood::BurntOut => NEUTRAL_WELCOME,
    }
}

// ============================================================
// CHART BASE VALUES
// ============================================================

/// Base value a mood contributes to the confidence/wellbeing chart
pub fn chart_value(mood: Mood) -> f64 {
    match mood {
        Mood::Happy => 80.0,
        Mood::Energetic => 90.0,
        Mood::Neutral => 50.0,
        Mood::Tired => 30.0,
        Mood::Sad => 20.0,
        Mood::Focused => 70.0,
        Mood::Anxious => 35.0,
        Mood::Angry => 25.0,
        Mood::Creative => 75.0,
        Mood::Confused => 40.0,
        Mood::BurntOut => 15.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedicated_activity_lists() {
        assert_eq!(activities_for(Mood::Happy)[0].title, "Take on a challenging project");
        assert_eq!(activities_for(Mood::Anxious)[1].title, "Try a breathing exercise");
    }

    #[test]
    fn test_moods_without_lists_use_neutral() {
        assert_eq!(activities_for(Mood::Energetic), activities_for(Mood::Neutral));
        assert_eq!(activities_for(Mood::BurntOut), activities_for(Mood::Neutral));
    }

    #[test]
    fn test_every_mood_has_tasks_and_motivation() {
        for mood in Mood::ALL {
            assert!(!tasks_for(mood).is_empty(), "{}", mood);
            assert!(!motivation_for(mood).is_empty(), "{}", mood);
            let v = chart_value(mood);
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_welcome_message_fallback() {
        assert_eq!(welcome_message(None), NEUTRAL_WELCOME);
        assert_eq!(welcome_message(Some(Mood::Confused)), NEUTRAL_WELCOME);
        assert!(welcome_message(Some(Mood::Tired)).starts_with("It's okay to pace yourself"));
    }
}
