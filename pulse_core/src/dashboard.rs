//! Dashboard Module
//!
//! Per-view dashboard session: the resolved career track, notification
//! panel, drill-down selections and loading progress. `snapshot` joins the
//! session with the signed-in user and the emotion state into the view
//! model the dashboard renders.

use crate::content::{profile, resolve_career_type, CareerProfile};
use crate::interest::{icon_for, primary_interest, recommendations_for};
use crate::loading::LoadingTracker;
use crate::mood::welcome_message;
use crate::notifications::NotificationPanel;
use crate::providers::EmotionProvider;
use crate::selection::{DrillDownPanels, PanelKind};
use crate::types::{
    Activity, ActivitySeries, CareerType, Event, Insight, Interest, Mood, Project,
    Recommendation, Skill, UserProfile,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Please log in to view the dashboard")]
    LoginRequired,
    #[error("No {kind:?} named '{name}' on the {career} dashboard")]
    UnknownItem {
        kind: PanelKind,
        name: String,
        career: CareerType,
    },
}

/// Detail card for the expanded skill
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkillDetail {
    pub name: &'static str,
    pub level: u8,
    pub next_level: u8,
    pub xp_to_next: u32,
}

impl From<&Skill> for SkillDetail {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name,
            level: skill.level,
            next_level: skill.next_level(),
            xp_to_next: skill.xp_to_next(),
        }
    }
}

/// Everything the dashboard view renders
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub career: CareerType,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub greeting_name: String,
    pub level: u32,
    pub mood: Option<Mood>,
    pub welcome: &'static str,
    pub featured_recommendations: &'static [Recommendation],
    pub primary_interest: Interest,
    pub interest_icon: &'static str,
    pub interest_recommendations: &'static [Recommendation],
    pub activities: &'static [Activity],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub events: &'static [Event],
    pub upcoming_events: &'static [Event],
    pub insights: &'static [Insight],
    pub chart: ActivitySeries,
    pub trend_label: &'static str,
    pub focus_area: &'static str,
    pub expanded: DrillDownPanels,
    pub skill_detail: Option<SkillDetail>,
    pub notifications_expanded: bool,
    pub unread_notifications: usize,
    pub loading: LoadingTracker,
    /// Interest picker shown instead of the dashboard
    pub needs_interest_selection: bool,
}

#[derive(Debug, Clone)]
pub struct DashboardSession {
    career: CareerType,
    query: Option<String>,
    notifications: NotificationPanel,
    panels: DrillDownPanels,
    loading: LoadingTracker,
}

impl DashboardSession {
    /// Open a session, resolving the career from the query value and the
    /// persisted selection.
    pub fn open(query: Option<&str>, stored: Option<&str>) -> Self {
        let career = resolve_career_type(query, stored);
        log::debug!("[DASHBOARD] Opened with career {}", career);
        Self {
            career,
            query: query.map(str::to_string),
            notifications: NotificationPanel::default(),
            panels: DrillDownPanels::default(),
            loading: LoadingTracker::new(),
        }
    }

    /// Re-resolve the career when the query value changes. Returns whether
    /// the active career changed; expanded items are collapsed when it does.
    pub fn update_query(&mut self, query: Option<&str>, stored: Option<&str>) -> bool {
        if self.query.as_deref() == query {
            return false;
        }
        self.query = query.map(str::to_string);

        let career = resolve_career_type(query, stored);
        if career == self.career {
            return false;
        }
        log::info!("[DASHBOARD] Career changed: {} -> {}", self.career, career);
        self.career = career;
        self.panels.collapse_all();
        true
    }

    pub fn career(&self) -> CareerType {
        self.career
    }

    pub fn profile(&self) -> &'static CareerProfile {
        profile(self.career)
    }

    pub fn notifications(&self) -> &NotificationPanel {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationPanel {
        &mut self.notifications
    }

    pub fn panels(&self) -> &DrillDownPanels {
        &self.panels
    }

    pub fn loading(&self) -> LoadingTracker {
        self.loading
    }

    pub fn set_loading(&mut self, tracker: LoadingTracker) {
        self.loading = tracker;
    }

    /// Toggle a drill-down item; the name must exist on the active profile.
    /// Returns whether the item is expanded afterwards.
    pub fn select(&mut self, kind: PanelKind, name: &str) -> Result<bool, DashboardError> {
        let profile = self.profile();
        let known = match kind {
            PanelKind::Project => profile.project(name).is_some(),
            PanelKind::Skill => profile.skill(name).is_some(),
            PanelKind::Event => profile.event(name).is_some(),
        };
        if !known {
            return Err(DashboardError::UnknownItem {
                kind,
                name: name.to_string(),
                career: self.career,
            });
        }
        Ok(self.panels.toggle(kind, name))
    }

    pub fn snapshot<E: EmotionProvider + ?Sized>(
        &self,
        user: Option<&UserProfile>,
        emotions: &E,
    ) -> Result<DashboardSnapshot, DashboardError> {
        let user = user.ok_or(DashboardError::LoginRequired)?;
        let profile = self.profile();
        let mood = emotions.current_mood();
        let interest = primary_interest(&user.interests);
        let skill_detail = self
            .panels
            .skills
            .expanded()
            .and_then(|name| profile.skill(name))
            .map(SkillDetail::from);

        Ok(DashboardSnapshot {
            career: self.career,
            title: profile.title,
            description: profile.description,
            icon: profile.icon,
            greeting_name: user.display_name().to_string(),
            level: user.display_level(),
            mood,
            welcome: welcome_message(mood),
            featured_recommendations: profile.featured_recommendations(),
            primary_interest: interest,
            interest_icon: icon_for(interest),
            interest_recommendations: recommendations_for(interest),
            activities: emotions.activities_for_mood(mood.unwrap_or_default()),
            skills: profile.skills,
            projects: profile.projects,
            events: profile.events,
            upcoming_events: profile.upcoming_events(),
            insights: profile.insights,
            chart: profile.chart,
            trend_label: profile.trend_label,
            focus_area: profile.focus_area,
            expanded: self.panels.clone(),
            skill_detail,
            notifications_expanded: self.notifications.is_expanded(),
            unread_notifications: self.notifications.unread_count(),
            loading: self.loading,
            needs_interest_selection: self.loading.is_loaded() && user.interests.is_empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::StaticEmotionProvider;

    fn student() -> UserProfile {
        let mut user = UserProfile::new("u-1");
        user.name = Some("Maya".to_string());
        user.level = Some(3);
        user.interests = vec!["creative".to_string(), "tech".to_string()];
        user
    }

    #[test]
    fn test_snapshot_requires_user() {
        let session = DashboardSession::open(None, None);
        let err = session.snapshot(None, &StaticEmotionProvider::new()).unwrap_err();
        assert_eq!(err, DashboardError::LoginRequired);
    }

    #[test]
    fn test_musician_dashboard() {
        let session = DashboardSession::open(Some("musician"), Some("artist"));
        let emotions = StaticEmotionProvider::with_mood(Some(Mood::Happy));
        let snap = session.snapshot(Some(&student()), &emotions).unwrap();

        assert_eq!(snap.career, CareerType::Musician);
        assert_eq!(snap.greeting_name, "Maya");
        assert_eq!(snap.level, 3);
        assert_eq!(snap.primary_interest, Interest::Creative);
        assert!(snap.featured_recommendations.len() <= 4);
        assert!(snap.upcoming_events.len() <= 2);
        assert_eq!(snap.welcome, welcome_message(Some(Mood::Happy)));
        assert_eq!(snap.activities, emotions.activities_for_mood(Mood::Happy));
    }

    #[test]
    fn test_defaults_for_sparse_user() {
        let session = DashboardSession::open(Some("astronaut"), None);
        let mut user = UserProfile::new("u-2");
        user.interests.clear();
        let snap = session.snapshot(Some(&user), &StaticEmotionProvider::new()).unwrap();

        assert_eq!(snap.career, CareerType::Developer);
        assert_eq!(snap.greeting_name, "Student");
        assert_eq!(snap.level, 1);
        assert_eq!(snap.primary_interest, Interest::Tech);
        assert_eq!(snap.activities, crate::mood::activities_for(Mood::Neutral));
        // picker only appears once loading has finished
        assert!(!snap.needs_interest_selection);
    }

    #[test]
    fn test_interest_picker_after_loading() {
        let mut session = DashboardSession::open(None, None);
        session.set_loading(LoadingTracker::done());
        let user = UserProfile::new("u-3");
        let snap = session.snapshot(Some(&user), &StaticEmotionProvider::new()).unwrap();
        assert!(snap.needs_interest_selection);
    }

    #[test]
    fn test_query_change_collapses_panels() {
        let mut session = DashboardSession::open(Some("developer"), None);
        let skill = session.profile().skills[0].name;
        assert!(session.select(PanelKind::Skill, skill).unwrap());

        // same query: nothing happens
        assert!(!session.update_query(Some("developer"), Some("artist")));
        assert_eq!(session.panels().skills.expanded(), Some(skill));

        assert!(session.update_query(Some("artist"), None));
        assert_eq!(session.career(), CareerType::Artist);
        assert_eq!(session.panels().skills.expanded(), None);
    }

    #[test]
    fn test_select_unknown_item() {
        let mut session = DashboardSession::open(Some("musician"), None);
        let err = session.select(PanelKind::Project, "Nonexistent").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownItem { kind: PanelKind::Project, .. }));
    }

    #[test]
    fn test_skill_detail_follows_expanded_skill() {
        let mut session = DashboardSession::open(Some("researcher"), None);
        let skill = session.profile().skills[0];
        session.select(PanelKind::Skill, skill.name).unwrap();

        let snap = session
            .snapshot(Some(&student()), &StaticEmotionProvider::new())
            .unwrap();
        let detail = snap.skill_detail.unwrap();
        assert_eq!(detail.name, skill.name);
        assert_eq!(detail.next_level, skill.level + 1);
        assert_eq!(detail.xp_to_next, skill.xp_to_next());
    }
}
