pub mod operation;
pub mod point;
pub mod responses;

// Re-export commonly used types
pub use operation::{Frame, Operation};
pub use point::Point;
pub use responses::{ErrorResponse, OperationInfo, OperationsResponse};
