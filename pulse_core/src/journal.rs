//! Journal Module
//!
//! Write → analyze → record flow for journal entries.
//!
//! The composer is a two-state machine (`Idle` / `Analyzing`). A submission
//! snapshots the text and the selected mood, hands the text to a
//! [`JournalAnalyzer`], maps the detected emotion to its insight, and
//! appends the resulting entry through the profile provider. Only one
//! submission can be in flight at a time.

use crate::providers::{
    mood_content, EmotionProvider, MoodContent, ProviderError, StaticEmotionProvider, UserProfileProvider,
};
use crate::tasks::TaskBoard;
use crate::types::{DetectedEmotion, JournalEntry, Mood};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

// ============================================================
// CONFIGURATION
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Simulated latency of the analysis step
    pub analysis_delay_ms: u64,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 1500,
        }
    }
}

// ============================================================
// ERRORS
// ============================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Analysis backend unavailable: {0}")]
    Unavailable(String),
    #[error("Analysis failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Journal entry is empty")]
    EmptyEntry,
    #[error("An entry is already being analyzed")]
    AlreadyAnalyzing,
    #[error("No submission is in progress")]
    NotAnalyzing,
    #[error("Submission cancelled")]
    Cancelled,
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

// ============================================================
// KEYWORD CLASSIFIER
// ============================================================

/// Checked in order; the first match wins.
static KEYWORDS: Lazy<Vec<(DetectedEmotion, Regex)>> = Lazy::new(|| {
    [
        (
            DetectedEmotion::BurntOut,
            r"(?i)\b(burn(t|ed)[\s-]?out|burnout|exhausted|overwhelmed|drained)\b",
        ),
        (
            DetectedEmotion::Sad,
            r"(?i)\b(sad|down|upset|lonely|cry|crying|depressed|unhappy|miserable)\b",
        ),
        (
            DetectedEmotion::Joyful,
            r"(?i)\b(happy|joy|joyful|excited|amazing|awesome|wonderful|fantastic|thrilled|love)\b",
        ),
        (
            DetectedEmotion::Focused,
            r"(?i)\b(focus|focused|productive|flow|concentrated|deep work)\b",
        ),
        (
            DetectedEmotion::Creative,
            r"(?i)\b(creative|idea|ideas|inspired|imagination|design|designing)\b",
        ),
    ]
    .into_iter()
    .map(|(emotion, pattern)| (emotion, Regex::new(pattern).expect("keyword pattern is valid")))
    .collect()
});

/// Classify raw journal text; `Reflective` when no keyword matches.
pub fn classify_text(text: &str) -> DetectedEmotion {
    KEYWORDS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(emotion, _)| *emotion)
        .unwrap_or(DetectedEmotion::Reflective)
}

// ============================================================
// ANALYZER
// ============================================================

/// Turns journal text into a detected emotion.
///
/// The simulated implementation never fails; a real model-backed analyzer
/// reports failures through [`AnalysisError`] and the composer leaves the
/// journal untouched.
#[async_trait]
pub trait JournalAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<DetectedEmotion, AnalysisError>;
}

/// Classification through an emotion provider behind a fixed delay
#[derive(Debug)]
pub struct SimulatedAnalyzer<E = StaticEmotionProvider> {
    delay: Duration,
    emotions: E,
}

impl SimulatedAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self::with_provider(delay, StaticEmotionProvider::new())
    }

    pub fn from_config(config: &JournalConfig) -> Self {
        Self::new(Duration::from_millis(config.analysis_delay_ms))
    }
}

impl<E: EmotionProvider> SimulatedAnalyzer<E> {
    pub fn with_provider(delay: Duration, emotions: E) -> Self {
        Self { delay, emotions }
    }
}

#[async_trait]
impl<E: EmotionProvider + Send + Sync> JournalAnalyzer for SimulatedAnalyzer<E> {
    async fn analyze(&self, text: &str) -> Result<DetectedEmotion, AnalysisError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.emotions.classify_input_text(text))
    }
}

// ============================================================
// COMPOSER
// ============================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum JournalTab {
    #[default]
    Write,
    History,
    Tasks,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComposerState {
    Idle,
    Analyzing,
}

/// Text and mood captured when a submission starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub text: String,
    pub mood: Mood,
}

/// Per-session journal editor state
#[derive(Debug, Clone, Serialize)]
pub struct JournalComposer {
    text: String,
    selected_mood: Mood,
    state: ComposerState,
    active_tab: JournalTab,
    last_insight: Option<String>,
    tasks: TaskBoard,
}

impl Default for JournalComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalComposer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            selected_mood: Mood::Neutral,
            state: ComposerState::Idle,
            active_tab: JournalTab::Write,
            last_insight: None,
            tasks: TaskBoard::new(Mood::Neutral, crate::mood::tasks_for(Mood::Neutral)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    pub fn selected_mood(&self) -> Mood {
        self.selected_mood
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    pub fn is_analyzing(&self) -> bool {
        self.state == ComposerState::Analyzing
    }

    pub fn active_tab(&self) -> JournalTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: JournalTab) {
        self.active_tab = tab;
    }

    pub fn last_insight(&self) -> Option<&str> {
        self.last_insight.as_deref()
    }

    pub fn tasks(&self) -> &TaskBoard {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskBoard {
        &mut self.tasks
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() && !self.is_analyzing()
    }

    /// Change the selected mood: switches the app's mood mode and loads the
    /// mood's tasks (completion progress starts over) and motivation.
    pub fn select_mood<E: EmotionProvider + ?Sized>(&mut self, mood: Mood, emotions: &E) -> MoodContent {
        let content = mood_content(emotions, mood);
        if mood != self.selected_mood || self.tasks.mood() != mood {
            self.tasks = TaskBoard::new(mood, content.tasks);
        }
        self.selected_mood = mood;
        emotions.set_mood_mode(mood);
        log::debug!("[JOURNAL] Selected mood: {}", mood);
        content
    }

    /// Validate and enter `Analyzing`, capturing the text and mood
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, JournalError> {
        if self.is_analyzing() {
            return Err(JournalError::AlreadyAnalyzing);
        }
        if self.text.trim().is_empty() {
            return Err(JournalError::EmptyEntry);
        }

        self.state = ComposerState::Analyzing;
        log::info!(
            "[JOURNAL] Analyzing entry ({} chars, mood: {})",
            self.text.len(),
            self.selected_mood
        );
        Ok(PendingSubmission {
            text: self.text.clone(),
            mood: self.selected_mood,
        })
    }

    /// Return to `Idle` without recording anything; the text is kept
    pub fn abort_submit(&mut self) {
        self.state = ComposerState::Idle;
    }

    /// Record the analysis outcome.
    ///
    /// On success the entry is appended, the current mood updated, the text
    /// cleared and the history tab shown. On any failure before the append
    /// confirms, nothing is recorded and the text is kept.
    pub fn finish_submit<P: UserProfileProvider + ?Sized>(
        &mut self,
        pending: PendingSubmission,
        analysis: Result<DetectedEmotion, AnalysisError>,
        profile: &P,
        today: NaiveDate,
    ) -> Result<JournalEntry, JournalError> {
        if !self.is_analyzing() {
            return Err(JournalError::NotAnalyzing);
        }
        self.state = ComposerState::Idle;

        let emotion = analysis.map_err(|e| {
            log::warn!("[JOURNAL] Analysis failed: {}", e);
            e
        })?;

        let insight = emotion.insight();
        let entry = JournalEntry::new(today, &pending.text, pending.mood, insight);

        profile.append_journal_entry(&entry).map_err(|e| {
            log::warn!("[JOURNAL] Failed to save entry: {}", e);
            e
        })?;

        if let Err(e) = profile.set_current_mood(pending.mood) {
            log::warn!("[JOURNAL] Entry saved but mood update failed: {}", e);
        }

        self.last_insight = Some(insight.to_string());
        self.text.clear();
        self.active_tab = JournalTab::History;
        log::info!("[JOURNAL] Recorded entry {} ({:?})", entry.id, emotion);
        Ok(entry)
    }

    /// Full submission: analyze, then record. Cancelling the token (view
    /// teardown) abandons the analysis and records nothing.
    pub async fn submit<A, P>(
        &mut self,
        analyzer: &A,
        profile: &P,
        cancel: &CancellationToken,
    ) -> Result<JournalEntry, JournalError>
    where
        A: JournalAnalyzer + ?Sized,
        P: UserProfileProvider + ?Sized,
    {
        let pending = self.begin_submit()?;

        let analysis = tokio::select! {
            _ = cancel.cancelled() => None,
            result = analyzer.analyze(&pending.text) => Some(result),
        };

        match analysis {
            Some(result) => self.finish_submit(pending, result, profile, Utc::now().date_naive()),
            None => {
                log::info!("[JOURNAL] Analysis cancelled");
                self.abort_submit();
                Err(JournalError::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{InMemoryProfileProvider, StaticEmotionProvider};
    use crate::types::UserProfile;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn logged_in() -> InMemoryProfileProvider {
        let _ = env_logger::builder().is_test(true).try_init();
        InMemoryProfileProvider::with_user(UserProfile::new("student"))
    }

    fn journal_len(profile: &InMemoryProfileProvider) -> usize {
        profile.current_user().unwrap().unwrap().journal.len()
    }

    /// Classifies everything as creative, whatever the text says
    struct AlwaysCreative;

    impl EmotionProvider for AlwaysCreative {
        fn current_mood(&self) -> Option<Mood> {
            None
        }

        fn set_mood_mode(&self, _mood: Mood) {}

        fn classify_input_text(&self, _text: &str) -> DetectedEmotion {
            DetectedEmotion::Creative
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl JournalAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _text: &str) -> Result<DetectedEmotion, AnalysisError> {
            Err(AnalysisError::Unavailable("model offline".to_string()))
        }
    }

    struct CountingAnalyzer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl JournalAnalyzer for CountingAnalyzer {
        async fn analyze(&self, text: &str) -> Result<DetectedEmotion, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(classify_text(text))
        }
    }

    #[test]
    fn test_classifier_categories() {
        assert_eq!(classify_text("I feel totally burnt out"), DetectedEmotion::BurntOut);
        assert_eq!(classify_text("Completely EXHAUSTED today"), DetectedEmotion::BurntOut);
        assert_eq!(classify_text("Feeling sad and lonely"), DetectedEmotion::Sad);
        assert_eq!(classify_text("So excited about the demo!"), DetectedEmotion::Joyful);
        assert_eq!(classify_text("Very productive session"), DetectedEmotion::Focused);
        assert_eq!(classify_text("Had a new idea for my app"), DetectedEmotion::Creative);
        assert_eq!(classify_text("I had a great day coding"), DetectedEmotion::Reflective);
    }

    #[test]
    fn test_classifier_matches_whole_words() {
        // "unhappy" is sad, not joyful
        assert_eq!(classify_text("I'm unhappy with my progress"), DetectedEmotion::Sad);
        assert_eq!(classify_text("Watched the countdown"), DetectedEmotion::Reflective);
    }

    #[tokio::test]
    async fn test_whitespace_submission_is_rejected() {
        let profile = logged_in();
        let analyzer = CountingAnalyzer { calls: AtomicUsize::new(0) };
        let mut composer = JournalComposer::new();
        composer.set_text("   \n\t ");

        let result = composer.submit(&analyzer, &profile, &CancellationToken::new()).await;

        assert!(matches!(result, Err(JournalError::EmptyEntry)));
        assert_eq!(composer.state(), ComposerState::Idle);
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
        assert_eq!(journal_len(&profile), 0);
        assert!(!composer.can_submit());
    }

    #[tokio::test]
    async fn test_great_day_coding_scenario() {
        let profile = logged_in();
        let emotions = StaticEmotionProvider::new();
        let analyzer = SimulatedAnalyzer::new(Duration::ZERO);
        let mut composer = JournalComposer::new();
        composer.select_mood(Mood::Happy, &emotions);
        composer.set_text("I had a great day coding");

        let entry = composer
            .submit(&analyzer, &profile, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.content, "I had a great day coding");
        assert_eq!(entry.ai_insight, DetectedEmotion::Reflective.insight());
        assert_eq!(composer.text(), "");
        assert_eq!(composer.active_tab(), JournalTab::History);
        assert_eq!(composer.state(), ComposerState::Idle);
        assert_eq!(composer.last_insight(), Some(entry.ai_insight.as_str()));

        let user = profile.current_user().unwrap().unwrap();
        assert_eq!(user.journal, vec![entry]);
        assert_eq!(user.current_mood, Some(Mood::Happy));
        assert_eq!(emotions.current_mood(), Some(Mood::Happy));
    }

    #[tokio::test]
    async fn test_entry_uses_mood_selected_at_submit_time() {
        let profile = logged_in();
        let emotions = StaticEmotionProvider::new();
        let mut composer = JournalComposer::new();
        composer.select_mood(Mood::Tired, &emotions);
        composer.set_text("Long day of lectures");

        let pending = composer.begin_submit().unwrap();
        // changing the selector mid-analysis does not affect the entry
        composer.select_mood(Mood::Energetic, &emotions);
        let entry = composer
            .finish_submit(pending, Ok(DetectedEmotion::Reflective), &profile, Utc::now().date_naive())
            .unwrap();

        assert_eq!(entry.mood, Mood::Tired);
    }

    #[test]
    fn test_second_submit_while_analyzing_is_refused() {
        let mut composer = JournalComposer::new();
        composer.set_text("First thoughts");
        composer.begin_submit().unwrap();

        assert!(!composer.can_submit());
        assert!(matches!(composer.begin_submit(), Err(JournalError::AlreadyAnalyzing)));
    }

    #[tokio::test]
    async fn test_analysis_failure_keeps_text_and_records_nothing() {
        let profile = logged_in();
        let mut composer = JournalComposer::new();
        composer.set_text("Some reflection");

        let result = composer.submit(&FailingAnalyzer, &profile, &CancellationToken::new()).await;

        assert!(matches!(result, Err(JournalError::Analysis(AnalysisError::Unavailable(_)))));
        assert_eq!(composer.text(), "Some reflection");
        assert_eq!(composer.state(), ComposerState::Idle);
        assert_eq!(composer.active_tab(), JournalTab::Write);
        assert_eq!(journal_len(&profile), 0);
    }

    #[tokio::test]
    async fn test_missing_user_records_nothing() {
        let profile = InMemoryProfileProvider::new();
        let analyzer = SimulatedAnalyzer::new(Duration::ZERO);
        let mut composer = JournalComposer::new();
        composer.set_text("Hello");

        let result = composer.submit(&analyzer, &profile, &CancellationToken::new()).await;

        assert!(matches!(result, Err(JournalError::Provider(ProviderError::NoUser))));
        assert_eq!(composer.text(), "Hello");
        assert_eq!(composer.state(), ComposerState::Idle);
    }

    #[tokio::test]
    async fn test_cancelled_submission_returns_to_idle() {
        let profile = logged_in();
        let analyzer = SimulatedAnalyzer::new(Duration::from_secs(60));
        let mut composer = JournalComposer::new();
        composer.set_text("Never analyzed");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = composer.submit(&analyzer, &profile, &cancel).await;

        assert!(matches!(result, Err(JournalError::Cancelled)));
        assert_eq!(composer.state(), ComposerState::Idle);
        assert_eq!(composer.text(), "Never analyzed");
        assert_eq!(journal_len(&profile), 0);
    }

    #[tokio::test]
    async fn test_each_submission_appends_one_entry() {
        let profile = logged_in();
        let analyzer = SimulatedAnalyzer::new(Duration::from_millis(1));
        let mut composer = JournalComposer::new();

        for i in 0..3 {
            composer.set_text(&format!("Entry {}", i));
            composer
                .submit(&analyzer, &profile, &CancellationToken::new())
                .await
                .unwrap();
            assert_eq!(journal_len(&profile), i + 1);
        }
    }

    #[test]
    fn test_finish_without_begin_is_rejected() {
        let profile = logged_in();
        let mut composer = JournalComposer::new();
        let pending = PendingSubmission {
            text: "x".to_string(),
            mood: Mood::Neutral,
        };
        let result = composer.finish_submit(pending, Ok(DetectedEmotion::Joyful), &profile, Utc::now().date_naive());
        assert!(matches!(result, Err(JournalError::NotAnalyzing)));
    }

    #[tokio::test]
    async fn test_simulated_analyzer_classifies_through_provider() {
        let analyzer = SimulatedAnalyzer::with_provider(Duration::ZERO, AlwaysCreative);
        assert_eq!(
            analyzer.analyze("so sad and drained").await.unwrap(),
            DetectedEmotion::Creative
        );

        let profile = logged_in();
        let mut composer = JournalComposer::new();
        composer.set_text("feeling down today");
        let entry = composer
            .submit(&analyzer, &profile, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(entry.ai_insight, DetectedEmotion::Creative.insight());
    }

    #[tokio::test]
    async fn test_default_analyzer_uses_keyword_tables() {
        let analyzer = SimulatedAnalyzer::new(Duration::ZERO);
        assert_eq!(analyzer.analyze("so drained").await.unwrap(), DetectedEmotion::BurntOut);
    }
}
