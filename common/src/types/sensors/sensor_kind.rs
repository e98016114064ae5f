use serde::{Deserialize, Serialize};
use std::fmt;

/// The four sensors polled on every tick.
///
/// # Examples
///
/// ```
/// use common::types::sensors::SensorKind;
///
/// let sensor = SensorKind::try_from("gyro").unwrap();
/// assert_eq!(sensor, SensorKind::Gyroscope);
/// assert_eq!(usize::from(&sensor), 1);
/// assert_eq!(sensor.to_string(), "gyroscope");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
    Vibration,
    Location,
}

impl SensorKind {
    pub const ALL: [SensorKind; 4] = [
        SensorKind::Accelerometer,
        SensorKind::Gyroscope,
        SensorKind::Vibration,
        SensorKind::Location,
    ];

    /// Name used in logs and as the device endpoint path.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "accelerometer",
            SensorKind::Gyroscope => "gyroscope",
            SensorKind::Vibration => "vibration",
            SensorKind::Location => "location",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&SensorKind> for usize {
    fn from(value: &SensorKind) -> Self {
        match value {
            SensorKind::Accelerometer => 0,
            SensorKind::Gyroscope => 1,
            SensorKind::Vibration => 2,
            SensorKind::Location => 3,
        }
    }
}

impl From<SensorKind> for usize {
    fn from(value: SensorKind) -> Self {
        usize::from(&value)
    }
}

impl TryFrom<&str> for SensorKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower_case_value = value.to_lowercase();
        if lower_case_value.starts_with("acc") {
            Ok(Self::Accelerometer)
        } else if lower_case_value.starts_with("gyr") {
            Ok(Self::Gyroscope)
        } else if lower_case_value.starts_with("vib") {
            Ok(Self::Vibration)
        } else if lower_case_value.starts_with("loc") || lower_case_value == "gps" {
            Ok(Self::Location)
        } else {
            Err(format!("Unknown sensor: {}", value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_distinct_and_ordered() {
        let indices: Vec<usize> = SensorKind::ALL.iter().map(usize::from).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            SensorKind::try_from("Accelerometer").unwrap(),
            SensorKind::Accelerometer
        );
        assert_eq!(SensorKind::try_from("GYRO").unwrap(), SensorKind::Gyroscope);
        assert_eq!(
            SensorKind::try_from("vibration").unwrap(),
            SensorKind::Vibration
        );
        assert_eq!(SensorKind::try_from("gps").unwrap(), SensorKind::Location);
        assert_eq!(
            SensorKind::try_from("location").unwrap(),
            SensorKind::Location
        );
        assert!(SensorKind::try_from("magnetometer").is_err());
    }

    #[test]
    fn test_display_matches_endpoint_name() {
        for sensor in SensorKind::ALL {
            assert_eq!(sensor.to_string(), sensor.as_str());
            assert_eq!(SensorKind::try_from(sensor.as_str()).unwrap(), sensor);
        }
    }
}
