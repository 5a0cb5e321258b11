use crate::domain::common::EntityKind;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Base URLs of the inventory API, fixed at build time
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EndpointsConfig {
    pub warehouse: String,
    pub supply: String,
    pub supplier: String,
    pub reports: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
    pub toast_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            rows_per_page: 5,
            rows_per_page_options: vec![5, 10, 25],
            toast_timeout_ms: 3000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Default configuration, the same values the dashboard has always used
pub const DEFAULT_CONFIG: &str = r#"
[endpoints]
warehouse = "http://35.198.40.220:8085/api/almacen"
supply = "http://35.198.13.111:83/api/insumo"
supplier = "http://35.198.40.220:8085/api/proveedores"
reports = "http://35.198.13.111:83/api"

[ui]
rows_per_page = 5
rows_per_page_options = [5, 10, 25]
toast_timeout_ms = 3000
"#;

impl AppConfig {
    /// Parses and checks a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    pub fn base_url(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Warehouse => &self.endpoints.warehouse,
            EntityKind::Supply => &self.endpoints.supply,
            EntityKind::Supplier => &self.endpoints.supplier,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.ui.rows_per_page == 0 {
            return Err(ConfigError::Invalid("ui.rows_per_page must be positive".into()));
        }
        if self.ui.rows_per_page_options.contains(&0) {
            return Err(ConfigError::Invalid(
                "ui.rows_per_page_options must be positive".into(),
            ));
        }
        let endpoints = [
            &self.endpoints.warehouse,
            &self.endpoints.supply,
            &self.endpoints.supplier,
            &self.endpoints.reports,
        ];
        if endpoints.iter().any(|url| url.trim().is_empty()) {
            return Err(ConfigError::Invalid("endpoint URL must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    /// Parsed from [`DEFAULT_CONFIG`], the single copy of the built-in values
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in config is valid")
    }
}

/// Loads `contents` or falls back to the built-in defaults
pub fn load_config(contents: &str) -> (AppConfig, Option<ConfigError>) {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
