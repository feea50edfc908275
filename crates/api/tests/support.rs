//! Shared helpers for the router integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use routine_core::{Clock, TextGenerator};
use routine_domain::{Config, Result, RoutineError};
use routine_app::AppContext;

/// Replays canned replies; fails once the script is exhausted.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String>>>,
    models: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self { replies: Mutex::new(replies.into()), models: Mutex::new(Vec::new()) })
    }

    pub fn models(&self) -> Vec<String> {
        self.models.lock().expect("models mutex").clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, model: &str, _prompt: &str) -> Result<String> {
        self.models.lock().expect("models mutex").push(model.to_string());
        self.replies
            .lock()
            .expect("replies mutex")
            .pop_front()
            .unwrap_or_else(|| Err(RoutineError::Generation("429 RESOURCE_EXHAUSTED".into())))
    }
}

pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Saturday 2026-10-17 08:00 in Seoul.
pub fn kst_morning() -> FixedClock {
    let kst = FixedOffset::east_opt(9 * 3600).expect("offset");
    FixedClock(kst.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).single().expect("valid time"))
}

pub fn test_context(generator: Arc<ScriptedGenerator>) -> Arc<AppContext> {
    Arc::new(AppContext::with_services(
        Config::with_api_key("test-key"),
        generator,
        Arc::new(kst_morning()),
    ))
}
