//! store.rs — in-memory interview result store behind the persistence
//! boundary. Capacity-bounded; a real database can replace it without
//! touching the evaluators.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::score::ScoreSet;

#[derive(Debug, Clone, Serialize)]
pub struct StoredResult {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub question: String,
    pub answer: String,
    pub scores: ScoreSet,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ResultStore {
    inner: Mutex<StoreInner>,
    cap: usize,
}

#[derive(Debug)]
struct StoreInner {
    rows: Vec<StoredResult>,
    next_id: u64,
}

impl ResultStore {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.min(10_000);
        Self {
            inner: Mutex::new(StoreInner {
                rows: Vec::with_capacity(cap),
                next_id: 1,
            }),
            cap,
        }
    }

    /// Insert a result and return its id. Oldest rows are evicted past capacity.
    pub fn insert(&self, user_id: u64, question: &str, answer: &str, scores: ScoreSet) -> u64 {
        let mut g = self.inner.lock().expect("store mutex poisoned");
        let id = g.next_id;
        g.next_id += 1;
        let row = StoredResult {
            id,
            user_id,
            question: question.to_string(),
            answer: answer.to_string(),
            scores,
            created_at: Utc::now(),
        };
        g.rows.push(row);
        if g.rows.len() > self.cap {
            let excess = g.rows.len() - self.cap;
            g.rows.drain(0..excess);
        }
        id
    }

    /// Past results for one user, newest first.
    pub fn results_for(&self, user_id: u64) -> Vec<StoredResult> {
        let g = self.inner.lock().expect("store mutex poisoned");
        g.rows
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::with_capacity(2000)
    }
}
