use reqwest::StatusCode;

use crate::{
    config::Config,
    libraries::coord_transform::TransformError,
    models::{ErrorResponse, Operation, Point},
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Unexpected { status: StatusCode, message: String },
}

/// HTTP client for a remote coordinate transform service
#[derive(Debug, Clone)]
pub struct CoordTransformClient {
    base_url: String,
    http: reqwest::Client,
}

impl CoordTransformClient {
    /// Build a client for the service at `config.host:config.port`
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Self::with_base_url(config.base_url(), config)
    }

    pub fn with_base_url(base_url: impl Into<String>, config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("coord-transform-client/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Run `operation` remotely on `point`
    pub async fn transform(&self, operation: Operation, point: Point) -> Result<Point, ClientError> {
        let url = format!("{}/api/v1/transform/{}", self.base_url, operation.slug());
        tracing::debug!("POST {} {}", url, point);

        let response = self.http.post(&url).json(&point).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<Point>().await?);
        }

        let body = response.text().await?;
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => match err.transform_error() {
                Some(transform_err) => Err(transform_err.into()),
                None => Err(ClientError::Unexpected {
                    status,
                    message: err.message,
                }),
            },
            Err(_) => Err(ClientError::Unexpected {
                status,
                message: body,
            }),
        }
    }

    pub async fn wgs84_to_gcj02(&self, point: Point) -> Result<Point, ClientError> {
        self.transform(Operation::Wgs84ToGcj02, point).await
    }

    pub async fn gcj02_to_wgs84(&self, point: Point) -> Result<Point, ClientError> {
        self.transform(Operation::Gcj02ToWgs84, point).await
    }

    pub async fn gcj02_to_bd09(&self, point: Point) -> Result<Point, ClientError> {
        self.transform(Operation::Gcj02ToBd09, point).await
    }

    pub async fn bd09_to_gcj02(&self, point: Point) -> Result<Point, ClientError> {
        self.transform(Operation::Bd09ToGcj02, point).await
    }

    pub async fn wgs84_to_bd09(&self, point: Point) -> Result<Point, ClientError> {
        self.transform(Operation::Wgs84ToBd09, point).await
    }

    pub async fn bd09_to_wgs84(&self, point: Point) -> Result<Point, ClientError> {
        self.transform(Operation::Bd09ToWgs84, point).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client =
            CoordTransformClient::with_base_url("http://127.0.0.1:8008/", &Config::default()).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8008");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let config = Config {
            request_timeout_secs: 1,
            ..Config::default()
        };
        // Port 9 (discard) is not served in the test environment
        let client = CoordTransformClient::with_base_url("http://127.0.0.1:9", &config).unwrap();

        let result = client.wgs84_to_gcj02(Point::new(37.065, 128.543)).await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }
}
