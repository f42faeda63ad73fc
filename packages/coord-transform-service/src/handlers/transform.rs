use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::{
    libraries::coord_transform::TransformError,
    models::{ErrorResponse, Operation, OperationInfo, OperationsResponse, Point},
};

/// Error returned to remote callers of a transform operation
#[derive(Debug)]
pub struct ApiError(TransformError);

impl From<TransformError> for ApiError {
    fn from(err: TransformError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TransformError::OutOfRegion { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}

/// Run one of the six conversions on the posted point
pub async fn transform(
    Path(operation): Path<Operation>,
    Json(point): Json<Point>,
) -> Result<Json<Point>, ApiError> {
    debug!("{} {}", operation, point);

    let converted = operation.apply(point).map_err(|e| {
        info!("Rejected {} for {}: {}", operation, point, e);
        ApiError::from(e)
    })?;

    Ok(Json(converted))
}

/// List the supported conversions
pub async fn list_operations() -> Json<OperationsResponse> {
    Json(OperationsResponse {
        operations: Operation::ALL.into_iter().map(OperationInfo::from).collect(),
    })
}
