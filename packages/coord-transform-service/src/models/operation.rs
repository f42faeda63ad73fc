use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::libraries::coord_transform::{self, TransformError};

/// Coordinate reference frames the service understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    Wgs84,
    Gcj02,
    Bd09,
}

/// The six conversions exposed to remote callers.
///
/// Shared by the HTTP handlers and `CoordTransformClient`, so the route slug
/// for an operation is defined in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "wgs84-to-gcj02", alias = "WGS84ToGCJ02")]
    Wgs84ToGcj02,
    #[serde(rename = "gcj02-to-wgs84", alias = "GCJ02ToWGS84")]
    Gcj02ToWgs84,
    #[serde(rename = "gcj02-to-bd09", alias = "GCJ02ToBd09")]
    Gcj02ToBd09,
    #[serde(rename = "bd09-to-gcj02", alias = "Bd09ToGCJ02")]
    Bd09ToGcj02,
    #[serde(rename = "wgs84-to-bd09", alias = "WGS84ToBd09")]
    Wgs84ToBd09,
    #[serde(rename = "bd09-to-wgs84", alias = "Bd09ToWGS84")]
    Bd09ToWgs84,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Wgs84ToGcj02,
        Operation::Gcj02ToWgs84,
        Operation::Gcj02ToBd09,
        Operation::Bd09ToGcj02,
        Operation::Wgs84ToBd09,
        Operation::Bd09ToWgs84,
    ];

    /// Route slug, e.g. `wgs84-to-gcj02`
    pub fn slug(self) -> &'static str {
        match self {
            Operation::Wgs84ToGcj02 => "wgs84-to-gcj02",
            Operation::Gcj02ToWgs84 => "gcj02-to-wgs84",
            Operation::Gcj02ToBd09 => "gcj02-to-bd09",
            Operation::Bd09ToGcj02 => "bd09-to-gcj02",
            Operation::Wgs84ToBd09 => "wgs84-to-bd09",
            Operation::Bd09ToWgs84 => "bd09-to-wgs84",
        }
    }

    pub fn source(self) -> Frame {
        match self {
            Operation::Wgs84ToGcj02 | Operation::Wgs84ToBd09 => Frame::Wgs84,
            Operation::Gcj02ToWgs84 | Operation::Gcj02ToBd09 => Frame::Gcj02,
            Operation::Bd09ToGcj02 | Operation::Bd09ToWgs84 => Frame::Bd09,
        }
    }

    pub fn target(self) -> Frame {
        match self {
            Operation::Gcj02ToWgs84 | Operation::Bd09ToWgs84 => Frame::Wgs84,
            Operation::Wgs84ToGcj02 | Operation::Bd09ToGcj02 => Frame::Gcj02,
            Operation::Gcj02ToBd09 | Operation::Wgs84ToBd09 => Frame::Bd09,
        }
    }

    /// Whether the operation can be rejected by the China region guard
    pub fn is_guarded(self) -> bool {
        !matches!(self, Operation::Gcj02ToBd09 | Operation::Bd09ToGcj02)
    }

    /// Run the conversion on `point`
    pub fn apply(self, point: Point) -> Result<Point, TransformError> {
        match self {
            Operation::Wgs84ToGcj02 => coord_transform::wgs84_to_gcj02(point),
            Operation::Gcj02ToWgs84 => coord_transform::gcj02_to_wgs84(point),
            Operation::Gcj02ToBd09 => Ok(coord_transform::gcj02_to_bd09(point)),
            Operation::Bd09ToGcj02 => Ok(coord_transform::bd09_to_gcj02(point)),
            Operation::Wgs84ToBd09 => coord_transform::wgs84_to_bd09(point),
            Operation::Bd09ToWgs84 => coord_transform::bd09_to_wgs84(point),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
