use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// A point carries no frame tag: whether it is WGS84, GCJ02 or BD09 depends
/// on the operation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Point {
    /// Create a new point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Validate that coordinates are within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0 && self.latitude <= 90.0 &&
        self.longitude >= -180.0 && self.longitude <= 180.0
    }

    /// Whether the point falls inside the rectangle approximating mainland China.
    /// Edges are excluded.
    pub fn in_china(&self) -> bool {
        crate::libraries::coord_transform::in_china(self)
    }

    /// Haversine distance to another point in meters
    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::services::location::calculate_distance(self, other)
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_validation() {
        let valid_point = Point::new(45.0, -120.0);
        assert!(valid_point.is_valid());

        assert!(Point::new(90.0, 180.0).is_valid());
        assert!(Point::new(-90.0, -180.0).is_valid());

        let invalid_lat = Point::new(91.0, 0.0);
        assert!(!invalid_lat.is_valid());

        let invalid_lng = Point::new(0.0, 181.0);
        assert!(!invalid_lng.is_valid());
    }

    #[test]
    fn test_wire_format_uses_lat_lon() {
        let point = Point::new(37.065, 128.543);
        let json = serde_json::to_value(point).unwrap();

        assert_eq!(json, serde_json::json!({ "lat": 37.065, "lon": 128.543 }));

        let parsed: Point = serde_json::from_str(r#"{"lon": 116.4, "lat": 39.9}"#).unwrap();
        assert_eq!(parsed, Point::new(39.9, 116.4));
    }

    #[test]
    fn test_missing_field_rejected() {
        let parsed = serde_json::from_str::<Point>(r#"{"lat": 39.9}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(37.065, 128.543).to_string(), "(37.065000, 128.543000)");
    }

    #[test]
    fn test_geo_conversion_orders_lon_first() {
        let p: geo::Point<f64> = Point::new(37.065, 128.543).into();
        assert_eq!(p.x(), 128.543);
        assert_eq!(p.y(), 37.065);
    }

    #[test]
    fn test_distance_to() {
        let a = Point::new(37.7749, -122.4194);
        let b = Point::new(37.7750, -122.4194);
        let distance = a.distance_to(&b);
        assert!(distance > 10.0 && distance < 12.0); // ~11 meters
    }
}
