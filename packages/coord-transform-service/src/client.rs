use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coord_transform_service::{
    config::Config, services::client::CoordTransformClient, Point,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coord_transform_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;
    let client = CoordTransformClient::new(&config)?;

    let point = Point::new(37.065, 128.543);
    println!("wgs84 coordinate: {}", point);

    let gcj = client
        .wgs84_to_gcj02(point)
        .await
        .with_context(|| format!("failed to transform {} from wgs84 to gcj02", point))?;
    println!("gcj02 coordinate: {} ({:.1}m shift)", gcj, point.distance_to(&gcj));

    let bd = client
        .wgs84_to_bd09(point)
        .await
        .with_context(|| format!("failed to transform {} from wgs84 to bd09", point))?;
    println!("bd09 coordinate: {} ({:.1}m shift)", bd, point.distance_to(&bd));

    Ok(())
}
