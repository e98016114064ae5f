//! CSV export of the sample history.

use std::io;

use common::types::SampleField;

use crate::history::History;

pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Writes a header and one row per sample, oldest first.
pub fn write_csv<W: io::Write>(history: &History, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![TIMESTAMP_COLUMN];
    header.extend(SampleField::ALL.iter().map(|field| field.column_name()));
    wtr.write_record(&header)?;

    for sample in history.iter() {
        let mut row = vec![sample.get_timestamp().to_string()];
        row.extend(
            SampleField::ALL
                .iter()
                .map(|field| field.value_of(sample).to_string()),
        );
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::{
        AccelerometerReading, DerivedSample, FusedSample, GyroscopeReading, LocationReading,
        VibrationReading,
    };

    #[test]
    fn test_write_csv() {
        let mut history = History::new();
        let fused = FusedSample::new(
            5.0,
            AccelerometerReading::new([3.0, 4.0, 0.0]),
            GyroscopeReading::new([0.1, 0.2, 0.3]),
            VibrationReading::new(true),
            LocationReading::new(34.0522, -118.2437),
        );
        history.append(DerivedSample::new(fused, 5.0, 0.5));

        let mut buffer = Vec::new();
        write_csv(&history, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "timestamp,accelerometer_x,accelerometer_y,accelerometer_z,gyroscope_x,gyroscope_y,gyroscope_z,vibrating,latitude,longitude,acceleration_magnitude,acceleration_rate_of_change"
        );
        assert_eq!(lines[1], "5,3,4,0,0.1,0.2,0.3,1,34.0522,-118.2437,5,0.5");
    }

    #[test]
    fn test_empty_history_writes_header_only() {
        let mut buffer = Vec::new();
        write_csv(&History::new(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
