use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use crate::errors::ConfigError;

const DEFAULT_PERIOD_MILLIS: u64 = 5000;
const DEFAULT_TAG: &str = "SensorStream";

/// Mock sensor behaviour, used when no device url is configured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Standard deviation of the Gaussian noise added to every reading. No noise if `None`.
    pub noise_stdev: Option<f64>,
    /// Fraction of reads that fail, in `[0, 1]`.
    pub failure_rate: f64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            noise_stdev: None,
            failure_rate: 0.0,
        }
    }
}

/// Sampler configuration.
///
/// Every field is optional in the JSON form:
///
/// ```
/// use sampler_rs::SamplerConfig;
///
/// let config = SamplerConfig::from_json_str(r#"{ "period_millis": 1000 }"#).unwrap();
/// assert_eq!(config.period_millis, 1000);
/// assert_eq!(config.history_window, None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub tag: String,
    pub period_millis: u64,
    /// Maximum number of samples kept. Unbounded if `None`.
    pub history_window: Option<usize>,
    /// Base url of the device serving `GET {device_url}/{sensor}`. Mock sensors if `None`.
    pub device_url: Option<String>,
    pub mock: MockConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            period_millis: DEFAULT_PERIOD_MILLIS,
            history_window: None,
            device_url: None,
            mock: MockConfig::default(),
        }
    }
}

impl SamplerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SamplerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn with_period_millis(mut self, period_millis: u64) -> Self {
        self.period_millis = period_millis;
        self
    }

    pub fn with_history_window(mut self, history_window: Option<usize>) -> Self {
        self.history_window = history_window;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_millis == 0 {
            return Err(ConfigError::InvalidPeriod);
        }
        if self.history_window == Some(0) {
            return Err(ConfigError::InvalidWindow);
        }
        if !(0.0..=1.0).contains(&self.mock.failure_rate) {
            return Err(ConfigError::InvalidFailureRate(self.mock.failure_rate));
        }
        if let Some(stdev) = self.mock.noise_stdev {
            if !stdev.is_finite() || stdev < 0.0 {
                return Err(ConfigError::InvalidNoiseStdev(stdev));
            }
        }
        Ok(())
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_millis)
    }

    pub fn window(&self) -> Result<Option<NonZeroUsize>, ConfigError> {
        match self.history_window {
            None => Ok(None),
            Some(n) => NonZeroUsize::new(n)
                .map(Some)
                .ok_or(ConfigError::InvalidWindow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SamplerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SamplerConfig::default());
        assert_eq!(config.period(), Duration::from_secs(5));
        assert_eq!(config.tag, "SensorStream");
        assert!(config.window().unwrap().is_none());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "tag": "bench",
            "period_millis": 250,
            "history_window": 10,
            "device_url": "http://192.168.1.20:8080",
            "mock": { "noise_stdev": 0.2, "failure_rate": 0.1 }
        }"#;
        let config = SamplerConfig::from_json_str(json).unwrap();
        assert_eq!(config.tag, "bench");
        assert_eq!(config.period(), Duration::from_millis(250));
        assert_eq!(config.window().unwrap(), NonZeroUsize::new(10));
        assert_eq!(config.device_url.as_deref(), Some("http://192.168.1.20:8080"));
        assert_eq!(config.mock.noise_stdev, Some(0.2));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            SamplerConfig::from_json_str(r#"{ "period_millis": 0 }"#),
            Err(ConfigError::InvalidPeriod)
        ));
        assert!(matches!(
            SamplerConfig::from_json_str(r#"{ "history_window": 0 }"#),
            Err(ConfigError::InvalidWindow)
        ));
        assert!(matches!(
            SamplerConfig::from_json_str(r#"{ "mock": { "failure_rate": 1.5 } }"#),
            Err(ConfigError::InvalidFailureRate(_))
        ));
        assert!(matches!(
            SamplerConfig::from_json_str(r#"{ "mock": { "noise_stdev": -0.5 } }"#),
            Err(ConfigError::InvalidNoiseStdev(stdev)) if stdev == -0.5
        ));
        assert!(matches!(
            SamplerConfig::from_json_str("period_millis = 10"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_noise_stdev_must_be_finite() {
        let mut config = SamplerConfig::default();
        config.mock.noise_stdev = Some(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNoiseStdev(_))
        ));

        config.mock.noise_stdev = Some(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("sampler-config-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "period_millis": 100 }}"#).unwrap();

        let config = SamplerConfig::from_file(&path).unwrap();
        assert_eq!(config.period_millis, 100);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            SamplerConfig::from_file(&path),
            Err(ConfigError::Read(_))
        ));
    }
}
