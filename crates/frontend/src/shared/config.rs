//! Конфигурация фронтенда, встроенная при сборке из `config.toml`.

use contracts::domain::common::EntityKind;
use contracts::shared::config::{load_config, AppConfig};
use once_cell::sync::Lazy;

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let (config, error) = load_config(EMBEDDED_CONFIG);
    if let Some(e) = error {
        log::error!("Embedded config rejected, using defaults: {}", e);
    }
    config
});

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

pub fn base_url(kind: EntityKind) -> &'static str {
    CONFIG.base_url(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let embedded = AppConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(embedded, AppConfig::default());
    }
}
