//! Shared test fixtures for portal-db and downstream crates.
//!
//! Seeding goes straight to SQL: rows other than review outcomes are created
//! by setup collaborators, never by `PortalService`.

use std::sync::Arc;

use tempfile::TempDir;

use crate::service::PortalService;

/// A service over a throwaway database file. The file lives as long as the fixture.
pub struct TestPortal {
    _dir: TempDir,
    pub svc: Arc<PortalService>,
}

impl TestPortal {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portal.db");
        let svc = PortalService::new_local(path.to_str().unwrap())
            .await
            .unwrap();
        Self {
            _dir: dir,
            svc: Arc::new(svc),
        }
    }

    async fn insert(&self, sql: &str, params: impl libsql::params::IntoParams) -> i64 {
        let conn = self.svc.db().connect().await.unwrap();
        conn.execute(sql, params).await.unwrap();
        conn.last_insert_rowid()
    }

    pub async fn word(&self, jamaican_patois: &str, english: &str) -> i64 {
        self.insert(
            "INSERT INTO words (jamaican_patois, english) VALUES (?1, ?2)",
            libsql::params![jamaican_patois, english],
        )
        .await
    }

    pub async fn word_with_parts(&self, jamaican_patois: &str, english: &str, parts: &str) -> i64 {
        self.insert(
            "INSERT INTO words (jamaican_patois, english, parts) VALUES (?1, ?2, ?3)",
            libsql::params![jamaican_patois, english, parts],
        )
        .await
    }

    /// Insert `n` numbered words and return their ids in order.
    pub async fn words(&self, n: usize) -> Vec<i64> {
        let mut ids = Vec::with_capacity(n);
        for i in 1..=n {
            ids.push(self.word(&format!("wud {i}"), &format!("word {i}")).await);
        }
        ids
    }

    pub async fn group(&self, name: &str) -> i64 {
        self.insert("INSERT INTO groups (name) VALUES (?1)", [name])
            .await
    }

    pub async fn add_to_group(&self, word_id: i64, group_id: i64) {
        self.insert(
            "INSERT INTO word_groups (word_id, group_id) VALUES (?1, ?2)",
            libsql::params![word_id, group_id],
        )
        .await;
    }

    pub async fn activity(&self, name: &str) -> i64 {
        self.insert("INSERT INTO study_activities (name) VALUES (?1)", [name])
            .await
    }

    pub async fn session(&self, group_id: i64, activity_id: i64) -> i64 {
        self.insert(
            "INSERT INTO study_sessions (group_id, study_activity_id) VALUES (?1, ?2)",
            libsql::params![group_id, activity_id],
        )
        .await
    }

    /// Insert a session with an explicit `created_at` (`YYYY-MM-DD HH:MM:SS`).
    pub async fn session_at(&self, group_id: i64, activity_id: i64, created_at: &str) -> i64 {
        self.insert(
            "INSERT INTO study_sessions (group_id, study_activity_id, created_at)
             VALUES (?1, ?2, ?3)",
            libsql::params![group_id, activity_id, created_at],
        )
        .await
    }

    /// Schedule a word into a session.
    pub async fn schedule(&self, session_id: i64, word_id: i64) {
        self.insert(
            "INSERT INTO word_review_items (study_session_id, word_id) VALUES (?1, ?2)",
            libsql::params![session_id, word_id],
        )
        .await;
    }

    /// Row count of `table`.
    pub async fn count(&self, table: &str) -> i64 {
        let conn = self.svc.db().connect().await.unwrap();
        let mut rows = conn
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get(0).unwrap()
    }
}
