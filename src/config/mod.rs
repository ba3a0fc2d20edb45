use std::env;
use std::net::SocketAddr;

/// Runtime configuration, read once at startup and injected into the
/// services that need it.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Bucket holding `<package>/<package>-<version>.<ext>` objects
    pub bucket: String,

    /// Optional endpoint override for S3-compatible stores (MinIO etc.)
    pub endpoint_url: Option<String>,

    /// Region handed to the SDK when the environment configures none
    /// (default: "us-east-1")
    pub region: String,

    /// Listen address for the HTTP surface (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            endpoint_url: None,
            region: "us-east-1".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl IndexConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing `S3_BUCKET` is not rejected here; the empty bucket name
    /// surfaces as a backend error on the first storage call.
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            bucket: env::var("S3_BUCKET").unwrap_or(default.bucket),

            endpoint_url: env::var("S3_ENDPOINT").ok(),

            region: env::var("AWS_REGION").unwrap_or(default.region),

            bind_addr: env::var("BIND_ADDR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.bind_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.bucket, "");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    }
}
