//! Collaborator Contracts
//!
//! The user-profile provider owns the user record, the journal and the
//! current mood. The emotion provider owns the app-wide mood mode and the
//! mood-keyed content lookups. Both are traits so the views can run against
//! the SQLite store in the service and against in-memory doubles in tests.

use crate::journal::classify_text;
use crate::mood;
use crate::types::{Activity, DetectedEmotion, JournalEntry, Mood, MoodTask, UserProfile};
use serde::Serialize;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No authenticated user")]
    NoUser,
    #[error("Storage error: {0}")]
    Storage(String),
}

// ============================================================
// USER PROFILE PROVIDER
// ============================================================

pub trait UserProfileProvider {
    /// The signed-in user, or `None` when nobody is logged in
    fn current_user(&self) -> Result<Option<UserProfile>, ProviderError>;

    fn append_journal_entry(&self, entry: &JournalEntry) -> Result<(), ProviderError>;

    fn set_current_mood(&self, mood: Mood) -> Result<(), ProviderError>;
}

/// Profile provider holding a single optional user in memory
#[derive(Debug, Default)]
pub struct InMemoryProfileProvider {
    user: Mutex<Option<UserProfile>>,
}

impl InMemoryProfileProvider {
    /// Provider with nobody logged in
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: UserProfile) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }

    fn with_user_mut<T>(&self, f: impl FnOnce(&mut UserProfile) -> T) -> Result<T, ProviderError> {
        let mut guard = self
            .user
            .lock()
            .map_err(|_| ProviderError::Storage("profile lock poisoned".to_string()))?;
        guard.as_mut().map(f).ok_or(ProviderError::NoUser)
    }
}

impl UserProfileProvider for InMemoryProfileProvider {
    fn current_user(&self) -> Result<Option<UserProfile>, ProviderError> {
        let guard = self
            .user
            .lock()
            .map_err(|_| ProviderError::Storage("profile lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn append_journal_entry(&self, entry: &JournalEntry) -> Result<(), ProviderError> {
        self.with_user_mut(|user| user.journal.push(entry.clone()))
    }

    fn set_current_mood(&self, mood: Mood) -> Result<(), ProviderError> {
        self.with_user_mut(|user| user.current_mood = Some(mood))
    }
}

// ============================================================
// EMOTION PROVIDER
// ============================================================

/// Mood-keyed lookups; the defaults read the built-in tables
pub trait EmotionProvider {
    fn current_mood(&self) -> Option<Mood>;

    fn set_mood_mode(&self, mood: Mood);

    fn classify_input_text(&self, text: &str) -> DetectedEmotion {
        classify_text(text)
    }

    fn activities_for_mood(&self, mood: Mood) -> &'static [Activity] {
        mood::activities_for(mood)
    }

    fn tasks_for_mood(&self, mood: Mood) -> &'static [MoodTask] {
        mood::tasks_for(mood)
    }

    fn motivation_for_mood(&self, mood: Mood) -> &'static str {
        mood::motivation_for(mood)
    }
}

/// Emotion provider backed by the built-in tables
#[derive(Debug, Default)]
pub struct StaticEmotionProvider {
    mode: Mutex<Option<Mood>>,
}

impl StaticEmotionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mood(mood: Option<Mood>) -> Self {
        Self {
            mode: Mutex::new(mood),
        }
    }
}

impl EmotionProvider for StaticEmotionProvider {
    fn current_mood(&self) -> Option<Mood> {
        self.mode.lock().map(|m| *m).unwrap_or(None)
    }

    fn set_mood_mode(&self, mood: Mood) {
        match self.mode.lock() {
            Ok(mut m) => *m = Some(mood),
            Err(_) => log::warn!("[EMOTION] Mood lock poisoned; mode not updated"),
        }
    }
}

// ============================================================
// MOOD CONTENT
// ============================================================

/// Everything shown for a mood: selector label, tasks, motivation, activities
#[derive(Debug, Clone, Serialize)]
pub struct MoodContent {
    pub mood: Mood,
    pub label: &'static str,
    pub emoji: &'static str,
    pub tasks: &'static [MoodTask],
    pub motivation: &'static str,
    pub activities: &'static [Activity],
    pub welcome: &'static str,
}

pub fn mood_content<E: EmotionProvider + ?Sized>(emotions: &E, mood: Mood) -> MoodContent {
    MoodContent {
        mood,
        label: mood.label(),
        emoji: mood.emoji(),
        tasks: emotions.tasks_for_mood(mood),
        motivation: emotions.motivation_for_mood(mood),
        activities: emotions.activities_for_mood(mood),
        welcome: mood::welcome_message(Some(mood)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_in_memory_provider_without_user() {
        let provider = InMemoryProfileProvider::new();
        assert!(provider.current_user().unwrap().is_none());
        let entry = JournalEntry::today("hi", Mood::Happy, "insight");
        assert!(matches!(provider.append_journal_entry(&entry), Err(ProviderError::NoUser)));
        assert!(matches!(provider.set_current_mood(Mood::Sad), Err(ProviderError::NoUser)));
    }

    #[test]
    fn test_in_memory_provider_appends_in_order() {
        let provider = InMemoryProfileProvider::with_user(UserProfile::new("u1"));
        let day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        provider
            .append_journal_entry(&JournalEntry::new(day, "one", Mood::Sad, "a"))
            .unwrap();
        provider
            .append_journal_entry(&JournalEntry::new(day, "two", Mood::Happy, "b"))
            .unwrap();

        let user = provider.current_user().unwrap().unwrap();
        let contents: Vec<&str> = user.journal.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[test]
    fn test_static_emotion_provider_lookups() {
        let emotions = StaticEmotionProvider::new();
        assert_eq!(emotions.current_mood(), None);
        emotions.set_mood_mode(Mood::Creative);
        assert_eq!(emotions.current_mood(), Some(Mood::Creative));

        for m in Mood::ALL {
            assert_eq!(emotions.tasks_for_mood(m), mood::tasks_for(m));
            assert_eq!(emotions.motivation_for_mood(m), mood::motivation_for(m));
        }
        assert_eq!(emotions.classify_input_text("so drained"), DetectedEmotion::BurntOut);
    }

    #[test]
    fn test_unknown_mood_token_gets_neutral_content() {
        let emotions = StaticEmotionProvider::new();
        let content = mood_content(&emotions, Mood::resolve(Some("grumpy")));
        assert_eq!(content.mood, Mood::Neutral);
        assert_eq!(content.tasks, mood::tasks_for(Mood::Neutral));
        assert_eq!(content.motivation, mood::motivation_for(Mood::Neutral));
        assert_eq!(content.activities, mood::activities_for(Mood::Neutral));
    }
}
