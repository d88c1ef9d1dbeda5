//! Web API Module
//!
//! RESTful endpoints for the dashboard and journal views. Every endpoint
//! returns the `{ success, data, error }` envelope. Per-user view state
//! (dashboard session, journal composer, mood mode) lives in memory; the
//! profile and journal live in the SQLite store.

use crate::config::ServerConfig;
use crate::store::{ProfileStore, StoreError, UserScope};
use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer, ResponseError};
use chrono::Utc;
use pulse_core::chart::{emotion_series_random, EmotionSample};
use pulse_core::dashboard::{DashboardError, DashboardSession};
use pulse_core::journal::{JournalAnalyzer, JournalComposer, JournalError, SimulatedAnalyzer};
use pulse_core::loading::{simulate_loading, LoadingConfig};
use pulse_core::providers::{mood_content, ProviderError, StaticEmotionProvider};
use pulse_core::selection::PanelKind;
use pulse_core::tasks::TaskError;
use pulse_core::types::{CareerType, JournalEntry, Mood, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

// ============================================================
// APPLICATION STATE
// ============================================================

/// In-memory view state for one signed-in user
pub struct UserSession {
    pub dashboard: DashboardSession,
    pub composer: JournalComposer,
    pub emotions: StaticEmotionProvider,
    /// Cancelled when the session is closed
    teardown: CancellationToken,
}

impl UserSession {
    fn open(user: &UserProfile, stored_career: Option<&str>) -> Self {
        Self {
            dashboard: DashboardSession::open(None, stored_career),
            composer: JournalComposer::new(),
            emotions: StaticEmotionProvider::with_mood(user.current_mood),
            teardown: CancellationToken::new(),
        }
    }

    fn close(&self) {
        self.teardown.cancel();
    }
}

/// Shared application state
pub struct AppState {
    pub store: ProfileStore,
    pub analyzer: Arc<dyn JournalAnalyzer>,
    pub loading: LoadingConfig,
    /// Mood lookups that are not tied to a user
    pub default_emotions: StaticEmotionProvider,
    pub sessions: Mutex<HashMap<String, UserSession>>,
}

impl AppState {
    pub fn new(store: ProfileStore, analyzer: Arc<dyn JournalAnalyzer>, loading: LoadingConfig) -> Self {
        Self {
            store,
            analyzer,
            loading,
            default_emotions: StaticEmotionProvider::new(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, StoreError> {
        let store = ProfileStore::new(config.db_path.clone())?;
        let analyzer = Arc::new(SimulatedAnalyzer::from_config(&config.journal_config()));
        Ok(Self::new(store, analyzer, config.loading_config()))
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<String, UserSession>>, ApiError> {
        self.sessions.lock().map_err(|_| ApiError::SessionState)
    }

    fn load_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.store.get_user(user_id)?.ok_or(ApiError::LoginRequired)
    }

    /// Close a user's session, cancelling its loading and in-flight analysis
    fn close_session(&self, user_id: &str) -> Result<bool, ApiError> {
        let removed = self.sessions()?.remove(user_id);
        if let Some(session) = &removed {
            session.close();
            log::info!("[API] Closed session for {}", user_id);
        }
        Ok(removed.is_some())
    }
}

/// Run `f` against the user's session, opening one (and starting its
/// loading simulation) on first use.
fn with_session<T>(
    state: &Arc<AppState>,
    user: &UserProfile,
    f: impl FnOnce(&mut UserSession) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    let stored = state.store.career_selection(&user.id)?;
    let mut opened = None;

    let result = {
        let mut sessions = state.sessions()?;
        let session = sessions.entry(user.id.clone()).or_insert_with(|| {
            let session = UserSession::open(user, stored.as_deref());
            opened = Some(session.teardown.clone());
            session
        });
        f(session)
    };

    if let Some(teardown) = opened {
        log::info!("[API] Opened session for {}", user.id);
        spawn_loading(state.clone(), user.id.clone(), teardown);
    }
    result
}

fn spawn_loading(state: Arc<AppState>, user_id: String, teardown: CancellationToken) {
    tokio::spawn(async move {
        let config = state.loading.clone();
        let result = simulate_loading(&config, &teardown, |tracker| {
            if let Ok(mut sessions) = state.sessions.lock() {
                if let Some(session) = sessions.get_mut(&user_id) {
                    session.dashboard.set_loading(tracker);
                }
            }
        })
        .await;

        if result.is_err() {
            log::debug!("[API] Loading stopped for closed session {}", user_id);
        }
    });
}

// ============================================================
// ERRORS
// ============================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please log in to continue")]
    LoginRequired,
    #[error("{0}")]
    BadRequest(String),
    #[error("Session state unavailable")]
    SessionState,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Journal(#[from] JournalError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::LoginRequired => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionState | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Journal(e) => match e {
                JournalError::EmptyEntry => StatusCode::BAD_REQUEST,
                JournalError::AlreadyAnalyzing
                | JournalError::NotAnalyzing
                | JournalError::Cancelled => StatusCode::CONFLICT,
                JournalError::Analysis(_) => StatusCode::BAD_GATEWAY,
                JournalError::Provider(ProviderError::NoUser) => StatusCode::UNAUTHORIZED,
                JournalError::Provider(ProviderError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Task(_) => StatusCode::NOT_FOUND,
            ApiError::Dashboard(e) => match e {
                DashboardError::LoginRequired => StatusCode::UNAUTHORIZED,
                DashboardError::UnknownItem { .. } => StatusCode::NOT_FOUND,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("[API] {}", self);
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(&self.to_string()))
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub level: Option<u32>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub current_mood: Option<String>,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub career: Option<String>,
}

#[derive(Deserialize)]
pub struct CareerRequest {
    pub career: String,
}

#[derive(Deserialize)]
pub struct SelectRequest {
    pub kind: PanelKind,
    pub name: String,
}

#[derive(Deserialize)]
pub struct SubmitJournalRequest {
    pub user_id: String,
    pub content: String,
    /// Mood to select before submitting; the current selection otherwise
    pub mood: Option<String>,
}

#[derive(Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

#[derive(Serialize)]
pub struct JournalView {
    pub entries: Vec<JournalEntry>,
    pub composer: JournalComposer,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub entry: JournalEntry,
    pub composer: JournalComposer,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

type ApiResult = Result<HttpResponse, ApiError>;

fn ok<T: Serialize>(data: T) -> ApiResult {
    Ok(HttpResponse::Ok().json(ApiResponse::success(data)))
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Pulse API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create or replace a user profile
async fn create_user(data: web::Data<Arc<AppState>>, req: web::Json<CreateUserRequest>) -> ApiResult {
    let req = req.into_inner();
    let mut user = UserProfile::new(&req.id.unwrap_or_else(|| Uuid::new_v4().to_string()));
    user.name = req.name;
    user.level = req.level;
    user.interests = req.interests;
    user.current_mood = req.current_mood.as_deref().map(|m| Mood::resolve(Some(m)));

    data.store.upsert_user(&user)?;
    // stale view state would still show the old profile's mood
    data.close_session(&user.id)?;
    ok(data.load_user(&user.id)?)
}

async fn get_dashboard(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    query: web::Query<DashboardQuery>,
) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let stored = data.store.career_selection(&user.id)?;

    let snapshot = with_session(&data, &user, |session| {
        session
            .dashboard
            .update_query(query.career.as_deref(), stored.as_deref());
        Ok(session.dashboard.snapshot(Some(&user), &session.emotions)?)
    })?;
    ok(snapshot)
}

/// Close the dashboard view for a user
async fn close_dashboard(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> ApiResult {
    let closed = data.close_session(&path.into_inner())?;
    ok(serde_json::json!({ "closed": closed }))
}

/// Persist the career selection used when no query value is given
async fn set_career(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    req: web::Json<CareerRequest>,
) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let career = CareerType::from_str(&req.career)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown career: {}", req.career)))?;

    data.store.set_career_selection(&user.id, career)?;
    ok(serde_json::json!({ "career": career }))
}

async fn select_item(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    req: web::Json<SelectRequest>,
) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let snapshot = with_session(&data, &user, |session| {
        session.dashboard.select(req.kind, &req.name)?;
        Ok(session.dashboard.snapshot(Some(&user), &session.emotions)?)
    })?;
    ok(snapshot)
}

async fn get_notifications(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let panel = with_session(&data, &user, |session| Ok(session.dashboard.notifications().clone()))?;
    ok(panel)
}

async fn toggle_notifications(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let panel = with_session(&data, &user, |session| {
        let panel = session.dashboard.notifications_mut();
        panel.toggle();
        Ok(panel.clone())
    })?;
    ok(panel)
}

async fn mark_notifications_read(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let panel = with_session(&data, &user, |session| {
        let panel = session.dashboard.notifications_mut();
        panel.mark_all_read();
        Ok(panel.clone())
    })?;
    ok(panel)
}

async fn get_journal(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let composer = with_session(&data, &user, |session| Ok(session.composer.clone()))?;
    ok(JournalView {
        entries: user.journal,
        composer,
    })
}

/// Submit a journal entry: analyze, append, update mood
async fn submit_journal(data: web::Data<Arc<AppState>>, req: web::Json<SubmitJournalRequest>) -> ApiResult {
    let user = data.load_user(&req.user_id)?;

    let (pending, teardown) = with_session(&data, &user, |session| {
        if session.composer.is_analyzing() {
            return Err(JournalError::AlreadyAnalyzing.into());
        }
        // a blank entry leaves mood, tasks and text exactly as they were
        if req.content.trim().is_empty() {
            return Err(JournalError::EmptyEntry.into());
        }
        if let Some(token) = req.mood.as_deref() {
            session.composer.select_mood(Mood::resolve(Some(token)), &session.emotions);
        }
        session.composer.set_text(&req.content);
        let pending = session.composer.begin_submit()?;
        Ok((pending, session.teardown.clone()))
    })?;

    // the session lock is released while the analysis runs
    let analysis = tokio::select! {
        _ = teardown.cancelled() => None,
        result = data.analyzer.analyze(&pending.text) => Some(result),
    };
    // teardown removed the session; there is nothing left to return to
    let Some(analysis) = analysis else {
        log::info!("[API] Submission for {} cancelled by teardown", user.id);
        return Err(JournalError::Cancelled.into());
    };

    let scope = UserScope::new(&data.store, &user.id);
    let response = {
        let mut sessions = data.sessions()?;
        let session = sessions
            .get_mut(&user.id)
            .ok_or(ApiError::Journal(JournalError::Cancelled))?;
        let entry = session
            .composer
            .finish_submit(pending, analysis, &scope, Utc::now().date_naive())?;
        SubmitResponse {
            entry,
            composer: session.composer.clone(),
        }
    };

    log::info!("[API] Journal entry {} recorded for {}", response.entry.id, user.id);
    ok(response)
}

async fn get_emotion_chart(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let series: Vec<EmotionSample> = emotion_series_random(&user.journal);
    ok(series)
}

/// Activities, tasks, motivation and greeting for a mood token
async fn get_mood(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> ApiResult {
    let token = path.into_inner();
    let mood = Mood::resolve(Some(token.as_str()));
    ok(mood_content(&data.default_emotions, mood))
}

async fn select_mood(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    req: web::Json<MoodRequest>,
) -> ApiResult {
    let user = data.load_user(&path.into_inner())?;
    let mood = Mood::resolve(Some(req.mood.as_str()));
    let content = with_session(&data, &user, |session| {
        Ok(session.composer.select_mood(mood, &session.emotions))
    })?;
    ok(content)
}

async fn complete_task(data: web::Data<Arc<AppState>>, path: web::Path<(String, usize)>) -> ApiResult {
    let (user_id, index) = path.into_inner();
    let user = data.load_user(&user_id)?;
    let completion = with_session(&data, &user, |session| {
        Ok(session.composer.tasks_mut().complete(index)?)
    })?;
    ok(completion)
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register every route; shared by the server and the integration tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/users", web::post().to(create_user))
        .route("/api/dashboard/{user_id}", web::get().to(get_dashboard))
        .route("/api/dashboard/{user_id}", web::delete().to(close_dashboard))
        .route("/api/dashboard/{user_id}/career", web::post().to(set_career))
        .route("/api/dashboard/{user_id}/select", web::post().to(select_item))
        .route("/api/notifications/{user_id}", web::get().to(get_notifications))
        .route("/api/notifications/{user_id}/toggle", web::post().to(toggle_notifications))
        .route("/api/notifications/{user_id}/read-all", web::post().to(mark_notifications_read))
        .route("/api/journal", web::post().to(submit_journal))
        .route("/api/journal/{user_id}", web::get().to(get_journal))
        .route("/api/journal/{user_id}/chart", web::get().to(get_emotion_chart))
        .route("/api/journal/{user_id}/mood", web::post().to(select_mood))
        .route("/api/journal/{user_id}/tasks/{index}/complete", web::post().to(complete_task))
        .route("/api/mood/{mood}", web::get().to(get_mood));
}

/// Configure and run the API server
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(
        AppState::from_config(&config).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?,
    );

    log::info!("Pulse API starting at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
