//! Configuration for Products API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;
use domain_products::endpoints::{EndpointConfig, DEFAULT_PAGE_LIMIT};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub postgres: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub endpoints: EndpointConfig,
}

impl Config {
    /// `PAGE_LIMIT_DEFAULT` is kept as text and only validated when a list
    /// request falls back to it.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let postgres = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let endpoints = EndpointConfig {
            default_page_limit: env_or_default("PAGE_LIMIT_DEFAULT", DEFAULT_PAGE_LIMIT),
        };

        Ok(Self {
            app: app_info!(),
            postgres,
            server,
            environment,
            endpoints,
        })
    }
}
