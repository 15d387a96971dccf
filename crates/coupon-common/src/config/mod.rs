//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CooldownConfig, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, ServerConfig,
};
