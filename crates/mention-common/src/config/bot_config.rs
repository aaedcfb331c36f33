//! Bot configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).
//! Platform credentials are optional at startup: the health check reports what
//! is missing and a trigger fails with `ConfigIncomplete` until it is set.

use std::env;
use std::fmt;
use std::time::Duration;

use mention_core::mention::DEFAULT_INTRO_TEMPLATE;
use mention_core::{Blacklist, OffsetUnit};
use serde::Deserialize;

use crate::error::AppError;

/// Main bot configuration, built once at startup
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub platform: PlatformConfig,
    pub mentions: MentionConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Messaging platform configuration
#[derive(Clone)]
pub struct PlatformConfig {
    pub api_url: String,
    pub bot_id: Option<String>,
    pub group_id: Option<String>,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

/// Credentials needed to read a group's member list
#[derive(Debug, Clone, Copy)]
pub struct GroupCredentials<'a> {
    pub group_id: &'a str,
    pub access_token: &'a str,
}

impl PlatformConfig {
    /// Required values that are not set, by variable name
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (BOT_ID, self.bot_id.is_none()),
            (GROUP_ID, self.group_id.is_none()),
            (ACCESS_TOKEN, self.access_token.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Upper bound for one webhook request: a member fetch and a bot post
    /// in sequence, each bounded by `timeout`
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.timeout.saturating_mul(2).saturating_add(REQUEST_TIMEOUT_MARGIN)
    }

    /// Bot id, or `ConfigIncomplete` when unset
    pub fn bot_id(&self) -> Result<&str, AppError> {
        self.bot_id
            .as_deref()
            .ok_or_else(|| AppError::config_incomplete(vec![BOT_ID]))
    }

    /// Group id and access token, or `ConfigIncomplete` naming what is unset
    pub fn group_credentials(&self) -> Result<GroupCredentials<'_>, AppError> {
        match (self.group_id.as_deref(), self.access_token.as_deref()) {
            (Some(group_id), Some(access_token)) => Ok(GroupCredentials {
                group_id,
                access_token,
            }),
            _ => {
                let missing = self
                    .missing()
                    .into_iter()
                    .filter(|name| *name != BOT_ID)
                    .collect();
                Err(AppError::config_incomplete(missing))
            }
        }
    }
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("api_url", &self.api_url)
            .field("bot_id", &self.bot_id)
            .field("group_id", &self.group_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Mention-all behaviour
#[derive(Debug, Clone)]
pub struct MentionConfig {
    /// Intro template; `{sender}` is replaced by the sender's name
    pub intro_template: String,
    /// Skip the member who sent the trigger
    pub exclude_sender: bool,
    pub offset_unit: OffsetUnit,
    pub blacklist: Blacklist,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            intro_template: DEFAULT_INTRO_TEMPLATE.to_string(),
            exclude_sender: false,
            offset_unit: OffsetUnit::default(),
            blacklist: Blacklist::new(),
        }
    }
}

// Variable names
const BOT_ID: &str = "BOT_ID";
const GROUP_ID: &str = "GROUP_ID";
const ACCESS_TOKEN: &str = "ACCESS_TOKEN";

/// Slack on top of the outbound calls for parsing and building
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

/// Prefix of the legacy variable names (`GROUPME_BOT_ID`, ...)
const LEGACY_PREFIX: &str = "GROUPME_";

// Default value functions
fn default_app_name() -> String {
    "mention-all-bot".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_url() -> String {
    "https://api.groupme.com/v3".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl BotConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if an optional variable is set to an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let credential = |name: &'static str| var(name).or_else(|| var(&format!("{LEGACY_PREFIX}{name}")));

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(default_host),
                port: parse_or("PORT", var("PORT"), default_port())?,
            },
            platform: PlatformConfig {
                api_url: var("GROUPME_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_api_url),
                bot_id: credential(BOT_ID),
                group_id: credential(GROUP_ID),
                access_token: credential(ACCESS_TOKEN),
                timeout: parse_timeout("HTTP_TIMEOUT_SECS", var("HTTP_TIMEOUT_SECS"))?,
            },
            mentions: MentionConfig {
                intro_template: lookup("MENTION_INTRO")
                    .unwrap_or_else(|| DEFAULT_INTRO_TEMPLATE.to_string()),
                exclude_sender: parse_bool("MENTION_EXCLUDE_SENDER", var("MENTION_EXCLUDE_SENDER"))?,
                offset_unit: parse_or("MENTION_OFFSET_UNIT", var("MENTION_OFFSET_UNIT"), OffsetUnit::default())?,
                blacklist: var("BLACKLIST_USER_IDS")
                    .map(|raw| Blacklist::from_csv(&raw))
                    .unwrap_or_default(),
            },
        })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue(name, raw)),
    }
}

fn parse_timeout(name: &'static str, raw: Option<String>) -> Result<Duration, ConfigError> {
    match parse_or(name, raw, default_timeout_secs())? {
        0 => Err(ConfigError::InvalidValue(name, "0".to_string())),
        secs => Ok(Duration::from_secs(secs)),
    }
}

fn parse_bool(name: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(_) => Err(ConfigError::InvalidValue(name, raw.unwrap_or_default())),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
