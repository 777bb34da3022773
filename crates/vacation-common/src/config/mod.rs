//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DataSourceConfig, DataSourceKind, Environment,
    LatencyConfig, ServerConfig,
};
