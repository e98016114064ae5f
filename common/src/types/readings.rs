//! Readings returned by the individual sensor adapters. Immutable once returned.

use serde::{Deserialize, Serialize};

use crate::types::untimed::XYZ;

/// Acceleration along x, y and z.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AccelerometerReading(pub XYZ);

/// Rotation along x, y and z.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GyroscopeReading(pub XYZ);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VibrationReading {
    #[serde(rename = "isVibrating")]
    pub is_vibrating: bool,
}

/// Geographical position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationReading {
    pub latitude: f64,
    pub longitude: f64,
}

impl AccelerometerReading {
    pub fn new(measurement: [f64; 3]) -> Self {
        Self(XYZ::new(measurement))
    }

    pub fn inner(&self) -> XYZ {
        self.0
    }
}

impl GyroscopeReading {
    pub fn new(measurement: [f64; 3]) -> Self {
        Self(XYZ::new(measurement))
    }

    pub fn inner(&self) -> XYZ {
        self.0
    }
}

impl VibrationReading {
    pub fn new(is_vibrating: bool) -> Self {
        Self { is_vibrating }
    }
}

impl LocationReading {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_device_payloads() {
        let accel: AccelerometerReading =
            serde_json::from_str(r#"{"x": 1.2, "y": 2.3, "z": 3.4}"#).unwrap();
        assert_eq!(accel, AccelerometerReading::new([1.2, 2.3, 3.4]));

        let gyro: GyroscopeReading =
            serde_json::from_str(r#"{"x": 0.1, "y": 0.2, "z": 0.3}"#).unwrap();
        assert_eq!(gyro.inner(), XYZ::new([0.1, 0.2, 0.3]));

        let vibration: VibrationReading =
            serde_json::from_str(r#"{"isVibrating": true}"#).unwrap();
        assert!(vibration.is_vibrating);

        let location: LocationReading =
            serde_json::from_str(r#"{"latitude": 34.0522, "longitude": -118.2437}"#).unwrap();
        assert_eq!(location, LocationReading::new(34.0522, -118.2437));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        assert!(serde_json::from_str::<AccelerometerReading>(r#"{"x": 1.0, "y": 2.0}"#).is_err());
        assert!(serde_json::from_str::<VibrationReading>(r#"{"vibrating": true}"#).is_err());
    }
}
