use coord_transform_service::{
    config::Config,
    handlers::router,
    services::client::{ClientError, CoordTransformClient},
    Point, TransformError,
};

/// Serve the router on an ephemeral port and return a client pointed at it
async fn spawn_server() -> CoordTransformClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });

    CoordTransformClient::with_base_url(format!("http://{}", addr), &Config::default()).unwrap()
}

#[tokio::test]
async fn test_client_demo_point() {
    let client = spawn_server().await;
    let point = Point::new(37.065, 128.543);

    let gcj = client.wgs84_to_gcj02(point).await.unwrap();
    assert!((gcj.latitude - 37.065651049489816).abs() < 1e-9);
    assert!((gcj.longitude - 128.54820547949757).abs() < 1e-9);

    let bd = client.wgs84_to_bd09(point).await.unwrap();
    let back = client.bd09_to_wgs84(bd).await.unwrap();
    assert!((back.latitude - point.latitude).abs() < 1e-4);
    assert!((back.longitude - point.longitude).abs() < 1e-4);
}

#[tokio::test]
async fn test_client_gcj02_bd09_pair() {
    let client = spawn_server().await;
    let point = Point::new(39.915, 116.404);

    let bd = client.gcj02_to_bd09(point).await.unwrap();
    let gcj = client.bd09_to_gcj02(bd).await.unwrap();
    assert!((gcj.latitude - point.latitude).abs() < 1e-5);
    assert!((gcj.longitude - point.longitude).abs() < 1e-5);

    let wgs = client.gcj02_to_wgs84(point).await.unwrap();
    assert!(point.distance_to(&wgs) < 1_000.0);
}

#[tokio::test]
async fn test_client_out_of_region_is_structured() {
    let client = spawn_server().await;

    let err = client.wgs84_to_gcj02(Point::new(0.0, 0.0)).await.unwrap_err();
    match err {
        ClientError::Transform(TransformError::OutOfRegion { latitude, longitude }) => {
            assert_eq!(latitude, 0.0);
            assert_eq!(longitude, 0.0);
        }
        other => panic!("expected OutOfRegion, got {:?}", other),
    }
}
