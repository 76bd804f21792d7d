//! SQLite-backed history of analyses, keyed by user.

use crate::record::{AnalysisSource, HistoryItem};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use facemetric_core::{AnalysisData, FaceShape, Ratios};
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

/// Default number of records returned by [`HistoryStore::recent`] callers.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS history (
    seq             INTEGER PRIMARY KEY AUTOINCREMENT,
    id              TEXT NOT NULL UNIQUE,
    user            TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    shape           TEXT NOT NULL,
    score           INTEGER NOT NULL,
    face_ratio      REAL,
    nose_eye_ratio  REAL,
    lips_nose_ratio REAL,
    source          TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_history_user_created ON history (user, created_at);
";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt history row: {0}")]
    Corrupt(String),
}

/// Column values of one row before validation.
struct RawRow {
    id: String,
    user: String,
    created_at: String,
    shape: String,
    score: i64,
    face_ratio: Option<f64>,
    nose_eye_ratio: Option<f64>,
    lips_nose_ratio: Option<f64>,
    source: String,
}

impl RawRow {
    fn into_item(self) -> Result<HistoryItem, StoreError> {
        let date = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| {
                StoreError::Corrupt(format!("{}: bad date {:?}: {e}", self.id, self.created_at))
            })?
            .with_timezone(&Utc);
        let shape = self
            .shape
            .parse::<FaceShape>()
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.id)))?;
        let score = u8::try_from(self.score)
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| {
                StoreError::Corrupt(format!("{}: score {} out of range", self.id, self.score))
            })?;
        let source = self
            .source
            .parse::<AnalysisSource>()
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.id)))?;

        // NaN ratios are stored as NULL by SQLite.
        Ok(HistoryItem {
            id: self.id,
            user: self.user,
            date,
            shape,
            score,
            ratios: Ratios {
                face_ratio: self.face_ratio.unwrap_or(0.0),
                nose_eye_ratio: self.nose_eye_ratio.unwrap_or(0.0),
                lips_nose_ratio: self.lips_nose_ratio.unwrap_or(0.0),
            },
            source,
        })
    }
}

/// Persistent per-user analysis history.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Open (or create) the history database at `path`, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        tracing::info!(path = %path.display(), "history store opened");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Record an analysis for `user`, assigning an id and timestamp.
    pub fn add(
        &self,
        user: &str,
        data: &AnalysisData,
        source: AnalysisSource,
    ) -> Result<HistoryItem, StoreError> {
        let item = HistoryItem {
            id: uuid::Uuid::new_v4().to_string(),
            user: user.to_string(),
            // Stored with microsecond precision; truncate so the returned
            // item matches what is read back.
            date: Utc::now().trunc_subsecs(6),
            shape: data.shape,
            score: data.ratio.score,
            ratios: data.ratio.ratios,
            source,
        };

        self.conn.execute(
            "INSERT INTO history
                (id, user, created_at, shape, score,
                 face_ratio, nose_eye_ratio, lips_nose_ratio, source)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                item.id,
                item.user,
                item.date.to_rfc3339_opts(SecondsFormat::Micros, true),
                item.shape.as_str(),
                item.score,
                item.ratios.face_ratio,
                item.ratios.nose_eye_ratio,
                item.ratios.lips_nose_ratio,
                item.source.as_str(),
            ],
        )?;

        tracing::debug!(
            user,
            id = %item.id,
            shape = %item.shape,
            score = item.score,
            source = %item.source,
            "history item added"
        );

        Ok(item)
    }

    /// The user's most recent records, newest first, at most `limit`.
    pub fn recent(&self, user: &str, limit: usize) -> Result<Vec<HistoryItem>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(
            "SELECT id, user, created_at, shape, score,
                    face_ratio, nose_eye_ratio, lips_nose_ratio, source
             FROM history
             WHERE user = ?1
             ORDER BY created_at DESC, seq DESC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![user, limit], |row| {
            Ok(RawRow {
                id: row.get(0)?,
                user: row.get(1)?,
                created_at: row.get(2)?,
                shape: row.get(3)?,
                score: row.get(4)?,
                face_ratio: row.get(5)?,
                nose_eye_ratio: row.get(6)?,
                lips_nose_ratio: row.get(7)?,
                source: row.get(8)?,
            })
        })?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row?.into_item()?);
        }
        Ok(items)
    }

    /// Delete all of the user's records. Returns how many were removed.
    pub fn clear(&self, user: &str) -> Result<usize, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM history WHERE user = ?1", params![user])?;
        tracing::info!(user, removed, "history cleared");
        Ok(removed)
    }
}
