use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use routine_core::TextGenerator;
use routine_domain::{Result as DomainResult, RoutineError};

/// One recorded call to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCall {
    pub model: String,
    pub prompt: String,
}

/// In-memory `TextGenerator` that replays scripted replies in order.
///
/// Once the script is exhausted every further call fails, which keeps
/// unexpected extra attempts visible in assertions.
#[derive(Default, Clone)]
pub struct MockTextGenerator {
    replies: Arc<Mutex<VecDeque<DomainResult<String>>>>,
    calls: Arc<Mutex<Vec<GenerateCall>>>,
}

impl MockTextGenerator {
    pub fn new(replies: Vec<DomainResult<String>>) -> Self {
        Self { replies: Arc::new(Mutex::new(replies.into())), calls: Arc::default() }
    }

    /// Generator whose every call fails.
    pub fn always_failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> DomainResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(GenerateCall { model: model.to_string(), prompt: prompt.to_string() });

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RoutineError::Generation("429 RESOURCE_EXHAUSTED".into())))
    }
}
