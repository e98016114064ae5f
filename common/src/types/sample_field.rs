use crate::types::timed::DerivedSample;

/// Attributes of a [`DerivedSample`] that can be projected into a single time series.
///
/// # Examples
///
/// ```
/// use common::types::SampleField;
///
/// assert_eq!(SampleField::AccelerationRateOfChange.column_name(), "acceleration_rate_of_change");
/// assert_eq!(SampleField::ALL.len(), 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleField {
    AccelerometerX,
    AccelerometerY,
    AccelerometerZ,
    GyroscopeX,
    GyroscopeY,
    GyroscopeZ,
    /// `1.0` while vibrating, `0.0` otherwise.
    Vibrating,
    Latitude,
    Longitude,
    AccelerationMagnitude,
    AccelerationRateOfChange,
}

impl SampleField {
    pub const ALL: [SampleField; 11] = [
        SampleField::AccelerometerX,
        SampleField::AccelerometerY,
        SampleField::AccelerometerZ,
        SampleField::GyroscopeX,
        SampleField::GyroscopeY,
        SampleField::GyroscopeZ,
        SampleField::Vibrating,
        SampleField::Latitude,
        SampleField::Longitude,
        SampleField::AccelerationMagnitude,
        SampleField::AccelerationRateOfChange,
    ];

    pub fn value_of(&self, sample: &DerivedSample) -> f64 {
        match self {
            SampleField::AccelerometerX => sample.get_accelerometer().x(),
            SampleField::AccelerometerY => sample.get_accelerometer().y(),
            SampleField::AccelerometerZ => sample.get_accelerometer().z(),
            SampleField::GyroscopeX => sample.get_gyroscope().x(),
            SampleField::GyroscopeY => sample.get_gyroscope().y(),
            SampleField::GyroscopeZ => sample.get_gyroscope().z(),
            SampleField::Vibrating => {
                if sample.is_vibrating() {
                    1.0
                } else {
                    0.0
                }
            }
            SampleField::Latitude => sample.get_latitude(),
            SampleField::Longitude => sample.get_longitude(),
            SampleField::AccelerationMagnitude => sample.get_acceleration_magnitude(),
            SampleField::AccelerationRateOfChange => sample.get_acceleration_rate_of_change(),
        }
    }

    /// Column header used for tabular export.
    pub fn column_name(&self) -> &'static str {
        match self {
            SampleField::AccelerometerX => "accelerometer_x",
            SampleField::AccelerometerY => "accelerometer_y",
            SampleField::AccelerometerZ => "accelerometer_z",
            SampleField::GyroscopeX => "gyroscope_x",
            SampleField::GyroscopeY => "gyroscope_y",
            SampleField::GyroscopeZ => "gyroscope_z",
            SampleField::Vibrating => "vibrating",
            SampleField::Latitude => "latitude",
            SampleField::Longitude => "longitude",
            SampleField::AccelerationMagnitude => "acceleration_magnitude",
            SampleField::AccelerationRateOfChange => "acceleration_rate_of_change",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::readings::{
        AccelerometerReading, GyroscopeReading, LocationReading, VibrationReading,
    };
    use crate::types::timed::FusedSample;
    use once_cell::sync::Lazy;

    static SAMPLE: Lazy<DerivedSample> = Lazy::new(|| {
        DerivedSample::new(
            FusedSample::new(
                10.0,
                AccelerometerReading::new([1.0, 2.0, 3.0]),
                GyroscopeReading::new([4.0, 5.0, 6.0]),
                VibrationReading::new(true),
                LocationReading::new(7.0, 8.0),
            ),
            9.0,
            10.0,
        )
    });

    #[test]
    fn test_value_of_every_field() {
        let values: Vec<f64> = SampleField::ALL
            .iter()
            .map(|field| field.value_of(&SAMPLE))
            .collect();
        assert_eq!(
            values,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 1.0, 7.0, 8.0, 9.0, 10.0]
        );
    }

    #[test]
    fn test_vibrating_projects_to_zero_when_still() {
        let still = DerivedSample::new(
            FusedSample::new(
                0.0,
                AccelerometerReading::default(),
                GyroscopeReading::default(),
                VibrationReading::new(false),
                LocationReading::default(),
            ),
            0.0,
            0.0,
        );
        assert_eq!(SampleField::Vibrating.value_of(&still), 0.0);
    }

    #[test]
    fn test_column_names_are_unique() {
        let mut names: Vec<&str> = SampleField::ALL.iter().map(|f| f.column_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SampleField::ALL.len());
    }
}
