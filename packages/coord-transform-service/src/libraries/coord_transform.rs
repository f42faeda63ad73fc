use std::f64::consts::PI;

use crate::models::Point;

/// Krasovsky 1940 semi-major axis (meters)
const A: f64 = 6378245.0;

/// Krasovsky 1940 eccentricity squared
const EE: f64 = 0.00669342162296594323;

const X_PI: f64 = PI * 3000.0 / 180.0;

/// Bounding box approximating mainland China, exclusive on every edge
const CHINA_MIN_LON: f64 = 73.66;
const CHINA_MAX_LON: f64 = 135.05;
const CHINA_MIN_LAT: f64 = 3.86;
const CHINA_MAX_LAT: f64 = 53.55;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("({latitude:.6}, {longitude:.6}) out of China")]
    OutOfRegion { latitude: f64, longitude: f64 },
}

impl TransformError {
    fn out_of_region(p: &Point) -> Self {
        TransformError::OutOfRegion {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

/// Check whether a point lies strictly inside the China bounding box
pub fn in_china(p: &Point) -> bool {
    p.longitude > CHINA_MIN_LON
        && p.longitude < CHINA_MAX_LON
        && p.latitude > CHINA_MIN_LAT
        && p.latitude < CHINA_MAX_LAT
}

fn transform_lat(lon: f64, lat: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * lon + 3.0 * lat + 0.2 * lat * lat + 0.1 * lon * lat
        + 0.2 * lon.abs().sqrt();
    ret += (20.0 * (6.0 * lon * PI).sin() + 20.0 * (2.0 * lon * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lat * PI).sin() + 40.0 * (lat / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (lat / 12.0 * PI).sin() + 320.0 * (lat * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lon(lon: f64, lat: f64) -> f64 {
    let mut ret = 300.0 + lon + 2.0 * lat + 0.1 * lon * lon + 0.1 * lon * lat
        + 0.1 * lon.abs().sqrt();
    ret += (20.0 * (6.0 * lon * PI).sin() + 20.0 * (2.0 * lon * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lon * PI).sin() + 40.0 * (lon / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (lon / 12.0 * PI).sin() + 300.0 * (lon / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Shift a point by the GCJ02 obfuscation offset, treating it as WGS84.
/// Returns `(lat, lon)` of the shifted point.
fn gcj02_offset(p: &Point) -> (f64, f64) {
    let dlat = transform_lat(p.longitude - 105.0, p.latitude - 35.0);
    let dlng = transform_lon(p.longitude - 105.0, p.latitude - 35.0);

    let radlat = p.latitude / 180.0 * PI;
    let magic = 1.0 - EE * radlat.sin() * radlat.sin();
    let sqrtmagic = magic.sqrt();

    // Meridian and parallel radii of curvature at this latitude
    let dlat = (dlat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrtmagic) * PI);
    let dlng = (dlng * 180.0) / (A / sqrtmagic * radlat.cos() * PI);

    (p.latitude + dlat, p.longitude + dlng)
}

/// Convert a WGS84 point to GCJ02
pub fn wgs84_to_gcj02(p: Point) -> Result<Point, TransformError> {
    if !in_china(&p) {
        return Err(TransformError::out_of_region(&p));
    }
    let (mglat, mglng) = gcj02_offset(&p);
    Ok(Point::new(mglat, mglng))
}

/// Convert a GCJ02 point to WGS84.
///
/// Single-step approximation: the forward offset is estimated at the GCJ02
/// position and subtracted. Accurate to a few meters at worst inside China.
/// Not refined iteratively.
pub fn gcj02_to_wgs84(p: Point) -> Result<Point, TransformError> {
    if !in_china(&p) {
        return Err(TransformError::out_of_region(&p));
    }
    let (mglat, mglng) = gcj02_offset(&p);
    Ok(Point::new(p.latitude * 2.0 - mglat, p.longitude * 2.0 - mglng))
}

/// Convert a GCJ02 point to BD09. Never fails.
pub fn gcj02_to_bd09(p: Point) -> Point {
    let (lon, lat) = (p.longitude, p.latitude);
    let z = (lon * lon + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lon) + 0.000003 * (lon * X_PI).cos();
    Point::new(z * theta.sin() + 0.006, z * theta.cos() + 0.0065)
}

/// Convert a BD09 point to GCJ02. Never fails.
pub fn bd09_to_gcj02(p: Point) -> Point {
    let x = p.longitude - 0.0065;
    let y = p.latitude - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    Point::new(z * theta.sin(), z * theta.cos())
}

/// WGS84 to BD09, via GCJ02
pub fn wgs84_to_bd09(p: Point) -> Result<Point, TransformError> {
    wgs84_to_gcj02(p).map(gcj02_to_bd09)
}

/// BD09 to WGS84, via GCJ02. The region guard applies to the GCJ02 point.
pub fn bd09_to_wgs84(p: Point) -> Result<Point, TransformError> {
    gcj02_to_wgs84(bd09_to_gcj02(p))
}
