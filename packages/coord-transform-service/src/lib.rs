pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

pub use libraries::coord_transform::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, in_china, wgs84_to_bd09,
    wgs84_to_gcj02, TransformError,
};
pub use models::{Frame, Operation, Point};
