//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseSettings, Environment, JwtConfig,
    RateLimitConfig, ServerConfig,
};
