use crate::config::IndexConfig;
use crate::services::storage::S3PackageStore;
use aws_sdk_s3::config::Region;
use std::sync::Arc;
use tracing::info;

pub async fn setup_storage(config: &IndexConfig) -> Arc<S3PackageStore> {
    info!("☁️  S3 Storage: bucket {:?}", config.bucket);

    let mut loader = aws_config::from_env().region(Region::new(config.region.clone()));
    if let Some(endpoint_url) = &config.endpoint_url {
        info!("🔧 Endpoint override: {}", endpoint_url);
        loader = loader.endpoint_url(endpoint_url);
    }
    let aws_config = loader.load().await;

    let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
    if config.endpoint_url.is_some() {
        // S3-compatible stores (MinIO) require path-style addressing
        builder = builder.force_path_style(true);
    }

    let s3_client = aws_sdk_s3::Client::from_conf(builder.build());
    Arc::new(S3PackageStore::new(s3_client, config.bucket.clone()))
}
