//! Board configuration.
//!
//! Loaded from a TOML file with kebab-case keys. Every key is optional;
//! missing keys take the defaults of the stock two-week, ten-train board.
//!
//! ```toml
//! [generator]
//! vehicles = 10
//! activities-per-vehicle = 10
//! vehicle-label = "Train"
//! min-required-hours = 1
//! max-required-hours = 8
//! min-capacity-hours = 10
//! max-capacity-hours = 30
//! seed = 42
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration loading or validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level board configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BoardConfig {
    /// Initial roster generation.
    pub generator: GeneratorConfig,
}

/// Settings for generating an initial roster and capacity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorConfig {
    /// Number of vehicles in the fleet.
    pub vehicles: usize,
    /// Activities generated per vehicle.
    pub activities_per_vehicle: usize,
    /// Display label for vehicles ("Train" gives "Train 1", id "train-1").
    pub vehicle_label: String,
    /// Smallest labor-hours an activity may require.
    pub min_required_hours: u32,
    /// Largest labor-hours an activity may require.
    pub max_required_hours: u32,
    /// Smallest per-slot capacity.
    pub min_capacity_hours: u32,
    /// Largest per-slot capacity.
    pub max_capacity_hours: u32,
    /// RNG seed for reproducible boards. `None` = entropy-seeded.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vehicles: 10,
            activities_per_vehicle: 10,
            vehicle_label: "Train".to_string(),
            min_required_hours: 1,
            max_required_hours: 8,
            min_capacity_hours: 10,
            max_capacity_hours: 30,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Sets the fleet size.
    pub fn with_vehicles(mut self, vehicles: usize) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Sets activities per vehicle.
    pub fn with_activities_per_vehicle(mut self, n: usize) -> Self {
        self.activities_per_vehicle = n;
        self
    }

    /// Sets the required-hours range (inclusive).
    pub fn with_required_hours(mut self, min: u32, max: u32) -> Self {
        self.min_required_hours = min;
        self.max_required_hours = max;
        self
    }

    /// Sets the capacity range (inclusive).
    pub fn with_capacity_hours(mut self, min: u32, max: u32) -> Self {
        self.min_capacity_hours = min;
        self.max_capacity_hours = max;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the ranges are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vehicle_label.trim().is_empty() {
            return Err(ConfigError::Invalid("vehicle-label is empty".into()));
        }
        if self.min_required_hours == 0 {
            return Err(ConfigError::Invalid(
                "min-required-hours must be at least 1".into(),
            ));
        }
        if self.min_required_hours > self.max_required_hours {
            return Err(ConfigError::Invalid(format!(
                "min-required-hours ({}) exceeds max-required-hours ({})",
                self.min_required_hours, self.max_required_hours
            )));
        }
        if self.min_capacity_hours > self.max_capacity_hours {
            return Err(ConfigError::Invalid(format!(
                "min-capacity-hours ({}) exceeds max-capacity-hours ({})",
                self.min_capacity_hours, self.max_capacity_hours
            )));
        }
        Ok(())
    }
}

impl BoardConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.generator.vehicles, 10);
        assert_eq!(config.generator.activities_per_vehicle, 10);
        assert!(config.generator.seed.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config = BoardConfig::from_toml_str(
            r#"
            [generator]
            vehicles = 4
            max-required-hours = 12
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.vehicles, 4);
        assert_eq!(config.generator.max_required_hours, 12);
        assert_eq!(config.generator.min_required_hours, 1);
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.vehicle_label, "Train");
    }

    #[test]
    fn test_invalid_ranges() {
        let err = BoardConfig::from_toml_str(
            r#"
            [generator]
            min-capacity-hours = 50
            max-capacity-hours = 10
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("min-capacity-hours")));

        let zero = GeneratorConfig::default().with_required_hours(0, 4);
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = BoardConfig::from_toml_str("[generator\nvehicles = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nvehicle-label = \"Bus\"\nvehicles = 3").unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.generator.vehicle_label, "Bus");
        assert_eq!(config.generator.vehicles, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
