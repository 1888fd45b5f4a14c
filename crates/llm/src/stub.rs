//! Scripted completion provider for tests.

use crate::Completion;
use anyhow::{Result, anyhow};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

/// Outcome of one scripted call.
#[derive(Debug, Clone)]
enum Outcome {
    Reply(String),
    Fail(String),
}

/// A completion provider that replays scripted outcomes in order.
///
/// Every call records the prompt it received, then pops the front of the
/// script; running past the end panics. Clones share the script and the
/// recorded prompts. An optional per-call delay keeps the future pending
/// long enough for concurrency tests to observe ordering.
#[derive(Clone, Default)]
pub struct StubCompletion {
    inner: Arc<Inner>,
    latency: Option<Duration>,
}

#[derive(Default)]
struct Inner {
    script: Mutex<VecDeque<Outcome>>,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    /// Create a stub with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Outcome::Reply(text.into()))
    }

    /// Queue a failure.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Outcome::Fail(message.into()))
    }

    /// Sleep this long inside every call.
    pub fn delay(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// The prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.inner.prompts.lock().unwrap().clone()
    }

    fn push(self, outcome: Outcome) -> Self {
        self.inner.script.lock().unwrap().push_back(outcome);
        self
    }
}

impl Completion for StubCompletion {
    async fn complete(&self, _model: &str, prompt: &str) -> Result<String> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.inner.prompts.lock().unwrap().push(prompt.to_owned());
        let outcome = self.inner.script.lock().unwrap().pop_front();
        match outcome {
            Some(Outcome::Reply(text)) => Ok(text),
            Some(Outcome::Fail(message)) => Err(anyhow!(message)),
            None => panic!("stub completion script exhausted"),
        }
    }
}
