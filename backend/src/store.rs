//! Profile Store Module
//!
//! SQLite-backed persistence for user profiles, journal entries and the
//! persisted career selection. `UserScope` exposes one user's record
//! through the core `UserProfileProvider` seam.

use chrono::NaiveDate;
use pulse_core::providers::{ProviderError, UserProfileProvider};
use pulse_core::types::{CareerType, JournalEntry, Mood, UserProfile};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT,
        level INTEGER,
        interests TEXT NOT NULL,
        current_mood TEXT
    );
    CREATE TABLE IF NOT EXISTS journal_entries (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        user_id TEXT NOT NULL,
        date TEXT NOT NULL,
        content TEXT NOT NULL,
        mood TEXT NOT NULL,
        ai_insight TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_journal_user_id ON journal_entries(user_id);
    CREATE TABLE IF NOT EXISTS career_selection (
        user_id TEXT PRIMARY KEY,
        career TEXT NOT NULL
    );
";

// ============================================================
// ERRORS
// ============================================================

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Stored interests are not valid JSON: {0}")]
    Interests(#[from] serde_json::Error),
    #[error("Corrupt {field} value: {value}")]
    Corrupt { field: &'static str, value: String },
    #[error("Unknown user: {0}")]
    UnknownUser(String),
    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for ProviderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UnknownUser(_) => ProviderError::NoUser,
            other => ProviderError::Storage(other.to_string()),
        }
    }
}

// ============================================================
// PROFILE STORE
// ============================================================

#[derive(Clone)]
pub struct ProfileStore {
    conn: Arc<Mutex<Connection>>,
}

impl ProfileStore {
    /// Open (or create) the database file; defaults to `pulse.db`
    pub fn new(db_path: Option<PathBuf>) -> Result<Self, StoreError> {
        let path = db_path.unwrap_or_else(|| PathBuf::from("pulse.db"));
        log::info!("[STORE] Opening database at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// Create an in-memory store for testing
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Insert or update the profile columns. Journal entries are append-only
    /// and are never touched here.
    pub fn upsert_user(&self, user: &UserProfile) -> Result<(), StoreError> {
        let interests = serde_json::to_string(&user.interests)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO users (id, name, level, interests, current_mood)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                level = excluded.level,
                interests = excluded.interests,
                current_mood = excluded.current_mood",
            params![
                user.id,
                user.name,
                user.level,
                interests,
                user.current_mood.map(|m| m.as_str()),
            ],
        )?;

        log::info!("[STORE] Saved profile for {}", user.id);
        Ok(())
    }

    pub fn get_user(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, name, level, interests, current_mood FROM users WHERE id = ?1",
                [user_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<u32>>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, Option<String>>(4)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, name, level, interests, current_mood)) = row else {
            return Ok(None);
        };

        Ok(Some(UserProfile {
            journal: load_journal(&conn, &id)?,
            id,
            name,
            level,
            interests: serde_json::from_str(&interests)?,
            current_mood: current_mood.as_deref().map(parse_mood).transpose()?,
        }))
    }

    pub fn journal(&self, user_id: &str) -> Result<Vec<JournalEntry>, StoreError> {
        let conn = self.lock()?;
        load_journal(&conn, user_id)
    }

    pub fn append_journal_entry(&self, user_id: &str, entry: &JournalEntry) -> Result<(), StoreError> {
        let conn = self.lock()?;
        ensure_user(&conn, user_id)?;
        insert_entry(&conn, user_id, entry)?;
        log::debug!("[STORE] Appended journal entry {} for {}", entry.id, user_id);
        Ok(())
    }

    pub fn set_current_mood(&self, user_id: &str, mood: Mood) -> Result<(), StoreError> {
        let conn = self.lock()?;
        let updated = conn.execute(
            "UPDATE users SET current_mood = ?1 WHERE id = ?2",
            params![mood.as_str(), user_id],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownUser(user_id.to_string()));
        }
        Ok(())
    }

    /// Raw persisted career token, if any
    pub fn career_selection(&self, user_id: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock()?;
        Ok(conn
            .query_row(
                "SELECT career FROM career_selection WHERE user_id = ?1",
                [user_id],
                |row| row.get(0),
            )
            .optional()?)
    }

    pub fn set_career_selection(&self, user_id: &str, career: CareerType) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO career_selection (user_id, career) VALUES (?1, ?2)
             ON CONFLICT(user_id) DO UPDATE SET career = excluded.career",
            params![user_id, career.as_str()],
        )?;
        log::info!("[STORE] Career selection for {} set to {}", user_id, career);
        Ok(())
    }
}

// ============================================================
// HELPERS
// ============================================================

fn ensure_user(conn: &Connection, user_id: &str) -> Result<(), StoreError> {
    let exists: Option<i64> = conn
        .query_row("SELECT 1 FROM users WHERE id = ?1", [user_id], |row| row.get(0))
        .optional()?;
    match exists {
        Some(_) => Ok(()),
        None => Err(StoreError::UnknownUser(user_id.to_string())),
    }
}

fn insert_entry(conn: &Connection, user_id: &str, entry: &JournalEntry) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO journal_entries (id, user_id, date, content, mood, ai_insight)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.id,
            user_id,
            entry.date.format(DATE_FORMAT).to_string(),
            entry.content,
            entry.mood.as_str(),
            entry.ai_insight,
        ],
    )?;
    Ok(())
}

fn load_journal(conn: &Connection, user_id: &str) -> Result<Vec<JournalEntry>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, content, mood, ai_insight
         FROM journal_entries
         WHERE user_id = ?1
         ORDER BY seq ASC",
    )?;

    let rows = stmt.query_map([user_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut entries = Vec::new();
    for row in rows {
        let (id, date, content, mood, ai_insight) = row?;
        let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|_| StoreError::Corrupt {
            field: "date",
            value: date.clone(),
        })?;
        entries.push(JournalEntry {
            id,
            date,
            content,
            mood: parse_mood(&mood)?,
            ai_insight,
        });
    }
    Ok(entries)
}

fn parse_mood(value: &str) -> Result<Mood, StoreError> {
    Mood::from_str(value).ok_or_else(|| StoreError::Corrupt {
        field: "mood",
        value: value.to_string(),
    })
}

// ============================================================
// PROVIDER ADAPTER
// ============================================================

/// One user's record seen through the core profile provider seam
pub struct UserScope<'a> {
    store: &'a ProfileStore,
    user_id: &'a str,
}

impl<'a> UserScope<'a> {
    pub fn new(store: &'a ProfileStore, user_id: &'a str) -> Self {
        Self { store, user_id }
    }
}

impl UserProfileProvider for UserScope<'_> {
    fn current_user(&self) -> Result<Option<UserProfile>, ProviderError> {
        Ok(self.store.get_user(self.user_id)?)
    }

    fn append_journal_entry(&self, entry: &JournalEntry) -> Result<(), ProviderError> {
        Ok(self.store.append_journal_entry(self.user_id, entry)?)
    }

    fn set_current_mood(&self, mood: Mood) -> Result<(), ProviderError> {
        Ok(self.store.set_current_mood(self.user_id, mood)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserProfile {
        let mut user = UserProfile::new("u-1");
        user.name = Some("Ana".to_string());
        user.level = Some(4);
        user.interests = vec!["health".to_string()];
        user
    }

    #[test]
    fn test_user_round_trip() {
        let store = ProfileStore::in_memory().unwrap();
        assert!(store.get_user("u-1").unwrap().is_none());

        store.upsert_user(&sample_user()).unwrap();
        let loaded = store.get_user("u-1").unwrap().unwrap();
        assert_eq!(loaded, sample_user());
    }

    #[test]
    fn test_journal_keeps_insertion_order() {
        let store = ProfileStore::in_memory().unwrap();
        store.upsert_user(&sample_user()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        let first = JournalEntry::new(date, "first", Mood::BurntOut, "rest");
        let second = JournalEntry::new(date, "second", Mood::Happy, "celebrate");
        store.append_journal_entry("u-1", &first).unwrap();
        store.append_journal_entry("u-1", &second).unwrap();

        let journal = store.journal("u-1").unwrap();
        assert_eq!(journal, vec![first, second]);
    }

    #[test]
    fn test_profile_update_keeps_journal() {
        let store = ProfileStore::in_memory().unwrap();
        store.upsert_user(&sample_user()).unwrap();
        let entry = JournalEntry::today("kept", Mood::Happy, "insight");
        store.append_journal_entry("u-1", &entry).unwrap();

        let mut renamed = sample_user();
        renamed.name = Some("Ana Maria".to_string());
        store.upsert_user(&renamed).unwrap();

        let user = store.get_user("u-1").unwrap().unwrap();
        assert_eq!(user.name.as_deref(), Some("Ana Maria"));
        assert_eq!(user.journal, vec![entry]);
    }

    #[test]
    fn test_append_for_unknown_user_fails() {
        let store = ProfileStore::in_memory().unwrap();
        let entry = JournalEntry::today("hello", Mood::Neutral, "insight");
        assert!(matches!(
            store.append_journal_entry("ghost", &entry),
            Err(StoreError::UnknownUser(_))
        ));
        assert!(store.journal("ghost").unwrap().is_empty());
    }

    #[test]
    fn test_user_scope_maps_missing_user() {
        let store = ProfileStore::in_memory().unwrap();
        let scope = UserScope::new(&store, "ghost");
        assert!(scope.current_user().unwrap().is_none());
        assert!(matches!(scope.set_current_mood(Mood::Sad), Err(ProviderError::NoUser)));
    }

    #[test]
    fn test_career_selection() {
        let store = ProfileStore::in_memory().unwrap();
        assert_eq!(store.career_selection("u-1").unwrap(), None);
        store.set_career_selection("u-1", CareerType::Artist).unwrap();
        store.set_career_selection("u-1", CareerType::Musician).unwrap();
        assert_eq!(store.career_selection("u-1").unwrap().as_deref(), Some("musician"));
    }

    #[test]
    fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pulse.db");
        {
            let store = ProfileStore::new(Some(path.clone())).unwrap();
            store.upsert_user(&sample_user()).unwrap();
            store.set_current_mood("u-1", Mood::Focused).unwrap();
        }
        let store = ProfileStore::new(Some(path)).unwrap();
        let user = store.get_user("u-1").unwrap().unwrap();
        assert_eq!(user.current_mood, Some(Mood::Focused));
    }
}
