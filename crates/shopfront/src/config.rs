use std::env;

use shopfront_core::product::DEFAULT_SEED_COUNT;

/// Default DynamoDB table holding products.
pub const DEFAULT_TABLE_NAME: &str = "Product";

/// Default AWS region for the table.
pub const DEFAULT_REGION: &str = "ap-southeast-1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table name (default: "Product")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub table_name: String,
    /// AWS region (default: "ap-southeast-1")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub region: String,
    /// Custom endpoint URL, e.g. for DynamoDB Local
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub endpoint_url: Option<String>,
    /// Number of products written by `POST /products` (default: 4)
    pub seed_count: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRODUCT_TABLE_NAME` - DynamoDB table name (default: "Product")
    /// - `AWS_REGION` - AWS region (default: "ap-southeast-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `SEED_PRODUCT_COUNT` - Products per seed request (default: 4)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("PRODUCT_TABLE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: lookup("AWS_REGION")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()),
            seed_count: lookup("SEED_PRODUCT_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SEED_COUNT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.table_name, "Product");
        assert_eq!(config.region, "ap-southeast-1");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.seed_count, 4);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PRODUCT_TABLE_NAME", "products-dev"),
            ("AWS_REGION", "us-east-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("SEED_PRODUCT_COUNT", "10"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.table_name, "products-dev");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.seed_count, 10);
    }

    #[test]
    fn test_invalid_and_empty_values_fall_back_to_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PRODUCT_TABLE_NAME", ""),
            ("AWS_ENDPOINT_URL", ""),
            ("SEED_PRODUCT_COUNT", "many"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config, Config::default());
    }
}
