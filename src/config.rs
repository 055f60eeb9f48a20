//! Scheduler configuration.
//!
//! All fields have defaults, so a partial (or empty) JSON document is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse repave config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid repave config: {0}")]
    Invalid(String),
}

/// Tunable policy parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepaveConfig {
    /// Roads below this fraction of max health are urgent.
    pub critical_threshold: f64,
    /// Roads below this fraction of max health are worth repairing.
    pub repair_threshold: f64,
    /// Maximum workers repaving one room at a time.
    pub allowed_pavers_per_room: usize,
    /// Cycles a classification result stays valid.
    pub cache_ttl: u64,
    /// Health restored per unit of energy.
    pub repair_power: f64,
}

impl Default for RepaveConfig {
    fn default() -> Self {
        Self {
            critical_threshold: 0.25,
            repair_threshold: 0.9,
            allowed_pavers_per_room: 1,
            cache_ttl: 25,
            repair_power: 100.0,
        }
    }
}

impl RepaveConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the critical threshold.
    pub fn with_critical_threshold(mut self, fraction: f64) -> Self {
        self.critical_threshold = fraction;
        self
    }

    /// Sets the repair threshold.
    pub fn with_repair_threshold(mut self, fraction: f64) -> Self {
        self.repair_threshold = fraction;
        self
    }

    /// Sets the per-room worker cap.
    pub fn with_allowed_pavers_per_room(mut self, count: usize) -> Self {
        self.allowed_pavers_per_room = count;
        self
    }

    /// Sets the classification cache TTL in cycles.
    pub fn with_cache_ttl(mut self, cycles: u64) -> Self {
        self.cache_ttl = cycles;
        self
    }

    /// Sets the repair rate.
    pub fn with_repair_power(mut self, repair_power: f64) -> Self {
        self.repair_power = repair_power;
        self
    }

    /// Checks that thresholds are fractions in order and the repair rate
    /// is usable as a divisor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("critical_threshold", self.critical_threshold),
            ("repair_threshold", self.repair_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.critical_threshold > self.repair_threshold {
            return Err(ConfigError::Invalid(format!(
                "critical_threshold ({}) exceeds repair_threshold ({})",
                self.critical_threshold, self.repair_threshold
            )));
        }

        if !self.repair_power.is_finite() || self.repair_power <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "repair_power must be positive, got {}",
                self.repair_power
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = RepaveConfig::default();
        assert!((c.critical_threshold - 0.25).abs() < 1e-10);
        assert!((c.repair_threshold - 0.9).abs() < 1e-10);
        assert_eq!(c.allowed_pavers_per_room, 1);
        assert_eq!(c.cache_ttl, 25);
        assert!((c.repair_power - 100.0).abs() < 1e-10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = RepaveConfig::new()
            .with_critical_threshold(0.1)
            .with_repair_threshold(0.5)
            .with_allowed_pavers_per_room(3)
            .with_cache_ttl(5)
            .with_repair_power(1.0);
        assert_eq!(c.allowed_pavers_per_room, 3);
        assert_eq!(c.cache_ttl, 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c = RepaveConfig::from_json(r#"{ "allowed_pavers_per_room": 2 }"#).unwrap();
        assert_eq!(c.allowed_pavers_per_room, 2);
        assert_eq!(c.cache_ttl, 25);

        let empty = RepaveConfig::from_json("{}").unwrap();
        assert_eq!(empty, RepaveConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = RepaveConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_thresholds() {
        let out_of_range = RepaveConfig::new().with_repair_threshold(1.5);
        assert!(matches!(out_of_range.validate(), Err(ConfigError::Invalid(_))));

        let inverted = RepaveConfig::new()
            .with_critical_threshold(0.8)
            .with_repair_threshold(0.5);
        let err = inverted.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds repair_threshold"));

        let nan = RepaveConfig::new().with_critical_threshold(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_invalid_repair_power() {
        assert!(RepaveConfig::new().with_repair_power(0.0).validate().is_err());
        assert!(RepaveConfig::new().with_repair_power(-1.0).validate().is_err());
        assert!(RepaveConfig::new()
            .with_repair_power(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_from_json_validates() {
        let err = RepaveConfig::from_json(r#"{ "repair_power": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
