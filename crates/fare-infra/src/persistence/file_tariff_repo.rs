//! File-based implementation of TariffRepository

use std::path::PathBuf;

use fare_domain::model::Tariff;
use fare_domain::repository::TariffRepository;
use fare_types::Error;

/// Tariff read from a TOML file
///
/// Fields missing from the file keep their standard values.
pub struct FileTariffRepository {
    toml_path: PathBuf,
}

impl FileTariffRepository {
    pub fn new(toml_path: PathBuf) -> Self {
        Self { toml_path }
    }

    /// Write a tariff to the TOML path, creating parent directories
    pub fn save(&self, tariff: &Tariff) -> Result<(), Error> {
        tariff.validate()?;
        if let Some(parent) = self.toml_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(tariff)?;
        std::fs::write(&self.toml_path, content)?;
        Ok(())
    }
}

impl TariffRepository for FileTariffRepository {
    fn load_tariff(&self) -> Result<Tariff, Error> {
        if !self.toml_path.exists() {
            return Err(Error::FileNotFound(self.toml_path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.toml_path)?;
        let tariff: Tariff = toml::from_str(&content)?;
        tariff.validate()?;
        log::info!("Loaded tariff from {}", self.toml_path.display());
        Ok(tariff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fare_types::PricingError;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn test_load_partial_tariff() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tariff.toml");
        std::fs::write(
            &path,
            r#"
airport_fee = 12.5

[first_class]
breakpoint_km = 25

[[distance_bands]]
width_km = 10
rate_per_km = 3.2

[[distance_bands]]
rate_per_km = 1.8
"#,
        )
        .unwrap();

        let tariff = FileTariffRepository::new(path).load_tariff().unwrap();
        assert_eq!(tariff.airport_fee, dec!(12.5));
        assert_eq!(tariff.base_fare, dec!(30));
        assert_eq!(tariff.first_class.breakpoint_km, dec!(25));
        assert_eq!(tariff.first_class.short_multiplier, dec!(1.5));
        assert_eq!(tariff.distance_bands.len(), 2);
        assert_eq!(tariff.distance_bands[1].width_km, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let repo = FileTariffRepository::new(dir.path().join("absent.toml"));
        assert!(matches!(repo.load_tariff(), Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_tariff_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tariff.toml");
        std::fs::write(&path, "peak_start_hour = 14\npeak_end_hour = 9\n").unwrap();

        let result = FileTariffRepository::new(path).load_tariff();
        assert!(matches!(result, Err(Error::Pricing(PricingError::InvalidTariff(_)))));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tariff.toml");
        std::fs::write(&path, "base_fare = [").unwrap();

        let result = FileTariffRepository::new(path).load_tariff();
        assert!(matches!(result, Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_save_then_load_standard() {
        let dir = tempdir().unwrap();
        let repo = FileTariffRepository::new(dir.path().join("nested").join("tariff.toml"));
        repo.save(&Tariff::standard()).unwrap();
        assert_eq!(repo.load_tariff().unwrap(), Tariff::standard());
    }
}
