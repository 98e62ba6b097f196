//! Repository adapters for the persistence layer

use std::path::PathBuf;

use fare_domain::model::Tariff;
use fare_domain::repository::TariffRepository;
use fare_infra::persistence::FileTariffRepository;
use fare_types::Result;

use crate::config::Config;

/// Open the tariff file named by the config, if any
pub fn open_tariff_repo(config: &Config) -> Option<FileTariffRepository> {
    config.tariff_path.clone().map(FileTariffRepository::new)
}

/// Resolve the active tariff
///
/// An explicit path wins over the configured one; with neither, the standard
/// tariff applies.
pub fn load_tariff(config: &Config, override_path: Option<PathBuf>) -> Result<Tariff> {
    let repo = match override_path {
        Some(path) => Some(FileTariffRepository::new(path)),
        None => open_tariff_repo(config),
    };
    match repo {
        Some(repo) => repo.load_tariff(),
        None => Ok(Tariff::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn test_standard_tariff_without_paths() {
        let tariff = load_tariff(&Config::default(), None).unwrap();
        assert_eq!(tariff, Tariff::standard());
    }

    #[test]
    fn test_override_wins_over_config() {
        let dir = tempdir().unwrap();
        let configured = dir.path().join("configured.toml");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&configured, "base_fare = 40\n").unwrap();
        std::fs::write(&explicit, "base_fare = 45\n").unwrap();

        let config = Config {
            tariff_path: Some(configured),
            ..Config::default()
        };
        assert_eq!(load_tariff(&config, None).unwrap().base_fare, dec!(40));
        assert_eq!(load_tariff(&config, Some(explicit)).unwrap().base_fare, dec!(45));
    }

    #[test]
    fn test_missing_configured_tariff_is_an_error() {
        let dir = tempdir().unwrap();
        let config = Config {
            tariff_path: Some(dir.path().join("gone.toml")),
            ..Config::default()
        };
        assert!(load_tariff(&config, None).is_err());
    }
}
