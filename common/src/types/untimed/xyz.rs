use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

pub const N_XYZ_COORDINATES: usize = 3;

/// 3-axis measurement, as produced by the accelerometer and the gyroscope.
///
/// Serializes as `{"x": .., "y": .., "z": ..}`, the shape returned by the device endpoints.
///
/// # Examples
///
/// ```
/// use common::types::untimed::XYZ;
///
/// let acceleration = XYZ::new([3.0, 4.0, 0.0]);
/// assert_eq!(acceleration.magnitude(), 5.0);
/// assert_eq!(acceleration.x(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Axes", into = "Axes")]
pub struct XYZ(Vector3<f64>);

#[derive(Serialize, Deserialize)]
struct Axes {
    x: f64,
    y: f64,
    z: f64,
}

impl From<Axes> for XYZ {
    fn from(value: Axes) -> Self {
        Self::new([value.x, value.y, value.z])
    }
}

impl From<XYZ> for Axes {
    fn from(value: XYZ) -> Self {
        let [x, y, z] = value.inner();
        Self { x, y, z }
    }
}

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn from_vector(data: Vector3<f64>) -> Self {
        Self(data)
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`. Never negative.
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }
}

impl From<XYZ> for [f64; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(value))
    }
}

impl From<XYZ> for Vec<f64> {
    fn from(value: XYZ) -> Self {
        value.inner().to_vec()
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES {
            return Err("Can't convert to XYZ");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Add for XYZ {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for XYZ {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Div<f64> for XYZ {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Mul<f64> for XYZ {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl AddAssign for XYZ {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl SubAssign for XYZ {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let data = [1.0, 2.0, 3.0];
        let xyz = XYZ::new(data);
        assert_eq!(xyz.inner(), data);
        assert_eq!((xyz.x(), xyz.y(), xyz.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(XYZ::new([3.0, 4.0, 0.0]).magnitude(), 5.0);
        assert_eq!(XYZ::new([0.0, 0.0, 0.0]).magnitude(), 0.0);
        assert_eq!(XYZ::new([-2.0, 0.0, 0.0]).magnitude(), 2.0);

        let xyz = XYZ::new([1.2, 2.3, 3.4]);
        let expected = (1.2f64 * 1.2 + 2.3 * 2.3 + 3.4 * 3.4).sqrt();
        assert!((xyz.magnitude() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_is_never_negative() {
        let values = [-1e6, -3.5, -0.0, 0.0, 1e-9, 7.25, 1e6];
        for x in values {
            for y in values {
                for z in values {
                    assert!(XYZ::new([x, y, z]).magnitude() >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_try_from_vec() {
        assert_eq!(
            XYZ::try_from(vec![1.0, 2.0, 3.0]).unwrap(),
            XYZ::new([1.0, 2.0, 3.0])
        );
        assert!(XYZ::try_from(vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_add_sub() {
        let xyz1 = XYZ::new([1.0, 2.0, 3.0]);
        let xyz2 = XYZ::new([4.0, 5.0, 6.0]);
        assert_eq!((xyz1 + xyz2).inner(), [5.0, 7.0, 9.0]);
        assert_eq!((xyz2 - xyz1).inner(), [3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_scale() {
        let xyz = XYZ::new([4.0, 6.0, 8.0]);
        assert_eq!((xyz / 2.0).inner(), [2.0, 3.0, 4.0]);
        assert_eq!((xyz * 0.5).inner(), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_assign_ops() {
        let mut xyz = XYZ::new([1.0, 2.0, 3.0]);
        xyz += XYZ::new([4.0, 5.0, 6.0]);
        assert_eq!(xyz.inner(), [5.0, 7.0, 9.0]);
        xyz -= XYZ::new([1.0, 1.0, 1.0]);
        assert_eq!(xyz.inner(), [4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_json_shape() {
        let xyz: XYZ = serde_json::from_str(r#"{"x": 0.1, "y": 0.2, "z": 0.3}"#).unwrap();
        assert_eq!(xyz, XYZ::new([0.1, 0.2, 0.3]));

        let value = serde_json::to_value(XYZ::new([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(value, serde_json::json!({"x": 1.0, "y": 2.0, "z": 3.0}));
    }
}
