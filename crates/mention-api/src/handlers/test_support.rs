//! In-memory collaborators for handler tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use mention_common::BotConfig;
use mention_core::entities::{BotPost, Member};
use mention_core::error::DomainError;
use mention_core::traits::{MemberSource, MessageDispatcher, PlatformResult};

use crate::server::create_app;
use crate::state::AppState;

/// Configuration with every credential set and `u9` blacklisted
pub fn complete_config() -> BotConfig {
    config_with(&[])
}

/// `complete_config` with overrides; an empty value unsets a variable
pub fn config_with(overrides: &[(&str, &str)]) -> BotConfig {
    let mut vars: HashMap<String, String> = [
        ("BOT_ID", "bot-1"),
        ("GROUP_ID", "group-1"),
        ("ACCESS_TOKEN", "token-1"),
        ("BLACKLIST_USER_IDS", "u9"),
        ("MENTION_INTRO", "Summon:"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in overrides {
        vars.insert((*k).to_string(), (*v).to_string());
    }
    BotConfig::from_lookup(|name| vars.get(name).cloned()).unwrap()
}

enum Outcome {
    Members(Vec<Member>),
    Fail(String),
    Panic,
}

/// Member source returning a canned result and recording its calls
pub struct FakeMembers {
    outcome: Outcome,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeMembers {
    fn with(outcome: Outcome, delay: Option<Duration>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn returning(members: Vec<Member>) -> Arc<Self> {
        Self::with(Outcome::Members(members), None)
    }

    pub fn empty() -> Arc<Self> {
        Self::returning(Vec::new())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::with(Outcome::Fail(message.to_string()), None)
    }

    /// Fails only after `delay`, like an outbound call hitting its timeout
    pub fn failing_after(delay: Duration, message: &str) -> Arc<Self> {
        Self::with(Outcome::Fail(message.to_string()), Some(delay))
    }

    pub fn panicking() -> Arc<Self> {
        Self::with(Outcome::Panic, None)
    }

    /// `(group_id, access_token)` per call
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemberSource for FakeMembers {
    async fn fetch_members(&self, group_id: &str, access_token: &str) -> PlatformResult<Vec<Member>> {
        self.calls
            .lock()
            .unwrap()
            .push((group_id.to_string(), access_token.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Outcome::Members(members) => Ok(members.clone()),
            Outcome::Fail(message) => Err(DomainError::MemberFetchFailed(message.clone())),
            Outcome::Panic => panic!("member source blew up"),
        }
    }
}

/// Dispatcher recording every post as JSON
pub struct FakeDispatcher {
    fail: bool,
    posts: Mutex<Vec<serde_json::Value>>,
}

impl FakeDispatcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            posts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            posts: Mutex::new(Vec::new()),
        })
    }

    pub fn posts(&self) -> Vec<serde_json::Value> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageDispatcher for FakeDispatcher {
    async fn dispatch(&self, post: &BotPost) -> PlatformResult<()> {
        self.posts.lock().unwrap().push(serde_json::to_value(post).unwrap());
        if self.fail {
            return Err(DomainError::dispatch("HTTP 503 Service Unavailable"));
        }
        Ok(())
    }
}

pub fn app(config: BotConfig, members: Arc<FakeMembers>, dispatcher: Arc<FakeDispatcher>) -> Router {
    create_app(AppState::new(config, members, dispatcher))
}
