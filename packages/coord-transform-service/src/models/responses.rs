use serde::{Deserialize, Serialize};

use super::operation::{Frame, Operation};
use crate::libraries::coord_transform::TransformError;

/// Error code sent for points rejected by the China region guard
pub const OUT_OF_REGION: &str = "out_of_region";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,

    // Rejected coordinate, present for out_of_region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl ErrorResponse {
    /// Recover the structured transform error, if this response carries one
    pub fn transform_error(&self) -> Option<TransformError> {
        match (self.error.as_str(), self.lat, self.lon) {
            (OUT_OF_REGION, Some(latitude), Some(longitude)) => {
                Some(TransformError::OutOfRegion { latitude, longitude })
            }
            _ => None,
        }
    }
}

impl From<TransformError> for ErrorResponse {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::OutOfRegion { latitude, longitude } => Self {
                error: OUT_OF_REGION.to_string(),
                message: err.to_string(),
                lat: Some(latitude),
                lon: Some(longitude),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationInfo {
    pub operation: Operation,
    pub source: Frame,
    pub target: Frame,
    pub region_guarded: bool,
}

impl From<Operation> for OperationInfo {
    fn from(operation: Operation) -> Self {
        Self {
            operation,
            source: operation.source(),
            target: operation.target(),
            region_guarded: operation.is_guarded(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationsResponse {
    pub operations: Vec<OperationInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_region_response_round_trips() {
        let err = TransformError::OutOfRegion {
            latitude: 1.5,
            longitude: -2.25,
        };
        let response = ErrorResponse::from(err);

        assert_eq!(response.error, "out_of_region");
        assert_eq!(response.message, "(1.500000, -2.250000) out of China");
        assert_eq!(response.transform_error(), Some(err));
    }

    #[test]
    fn test_unknown_error_has_no_transform_error() {
        let response = ErrorResponse {
            error: "bad_request".to_string(),
            message: "nope".to_string(),
            lat: None,
            lon: None,
        };
        assert_eq!(response.transform_error(), None);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("lat").is_none());
    }

    #[test]
    fn test_operation_info() {
        let info = OperationInfo::from(Operation::Bd09ToWgs84);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "operation": "bd09-to-wgs84",
                "source": "bd09",
                "target": "wgs84",
                "region_guarded": true
            })
        );
    }
}
