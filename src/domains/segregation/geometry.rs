use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position3D {
    pub const ZERO: Position3D = Position3D { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn square_length(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn square_distance(&self, other: &Position3D) -> f64 {
        (*self - *other).square_length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Position3D {
    type Output = Position3D;

    fn add(self, rhs: Position3D) -> Position3D {
        Position3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position3D {
    type Output = Position3D;

    fn sub(self, rhs: Position3D) -> Position3D {
        Position3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Div<f64> for Position3D {
    type Output = Position3D;

    fn div(self, rhs: f64) -> Position3D {
        Position3D::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Arithmetic mean of the given positions, `None` for an empty set.
pub fn centroid<'a, I>(positions: I) -> Option<Position3D>
where
    I: IntoIterator<Item = &'a Position3D>,
{
    let (sum, count) = positions
        .into_iter()
        .fold((Position3D::ZERO, 0usize), |(sum, n), p| (sum + *p, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Sum of squared distances from `reference`.
pub fn scatter<'a, I>(positions: I, reference: Position3D) -> f64
where
    I: IntoIterator<Item = &'a Position3D>,
{
    positions
        .into_iter()
        .map(|p| p.square_distance(&reference))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_empty_set_is_undefined() {
        let none: Vec<Position3D> = Vec::new();
        assert!(centroid(&none).is_none());
    }

    #[test]
    fn centroid_is_the_mean() {
        let pts = vec![
            Position3D::new(0.0, 0.0, 0.0),
            Position3D::new(2.0, 4.0, 0.0),
            Position3D::new(4.0, 2.0, 3.0),
        ];
        assert_eq!(centroid(&pts), Some(Position3D::new(2.0, 2.0, 1.0)));
    }

    #[test]
    fn scatter_sums_square_distances() {
        let pts = vec![Position3D::new(1.0, 0.0, 0.0), Position3D::new(-1.0, 0.0, 2.0)];
        assert_eq!(scatter(&pts, Position3D::ZERO), 1.0 + 5.0);
    }

    #[test]
    fn missing_z_deserializes_as_ground_plane() {
        let p: Position3D = serde_json::from_str(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
        assert_eq!(p, Position3D::new(1.5, -2.0, 0.0));
    }
}
