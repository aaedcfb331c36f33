//! Configuration structs

mod bot_config;

pub use bot_config::{
    AppSettings, BotConfig, ConfigError, Environment, GroupCredentials, MentionConfig,
    PlatformConfig, ServerConfig,
};
