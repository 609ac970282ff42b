#![allow(dead_code, unused_imports, unused_variables)]

pub mod api;
pub mod api_docs;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod uptime;

use chrono::{DateTime, Utc};

// ========================================
// APP STATE
// ========================================

/// Shared state handed to every handler. Cheap to clone; the start time is
/// captured once at construction and anchors all uptime math.
#[derive(Clone)]
pub struct AppState {
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
