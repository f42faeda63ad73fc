use geo::{HaversineDistance, Point as GeoPoint};

use crate::models::Point;

/// Calculate distance between two points in meters using Haversine formula
pub fn calculate_distance(point1: &Point, point2: &Point) -> f64 {
    let p1: GeoPoint<f64> = (*point1).into();
    let p2: GeoPoint<f64> = (*point2).into();

    p1.haversine_distance(&p2)
}
