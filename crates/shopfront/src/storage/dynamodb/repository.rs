//! DynamoDB repository implementation.
//!
//! Implements [`ProductRepository`] on a single table keyed by the string attribute `id`.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use shopfront_core::product::{Product, ProductUpdate};
use shopfront_core::storage::{ProductRepository, Result};

use super::conversions::{
    item_to_product, product_key, product_to_item, update_values, KEY_ATTRIBUTE,
    UPDATE_EXPRESSION,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds one SDK client for the lifetime of the process.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Credentials come from the AWS SDK default provider chain. The region and
    /// optional endpoint override come from `config`.
    pub async fn connect(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        tracing::info!(
            table = %config.table_name,
            region = %config.region,
            endpoint = ?config.endpoint_url,
            "Connected DynamoDB product repository"
        );

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl ProductRepository for DynamoDbRepository {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut start_key = None;
        let mut pages = 0u32;

        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;
            pages += 1;

            for item in page.items.unwrap_or_default() {
                products.push(item_to_product(&item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(count = products.len(), pages, "Scanned product table");

        Ok(products)
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) if !item.is_empty() => Ok(Some(item_to_product(&item)?)),
            _ => Ok(None),
        }
    }

    async fn save_product(&self, product: &Product) -> Result<()> {
        let item = product_to_item(product)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<()> {
        let values = update_values(update)?;

        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(id)))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#name", "name")
            .set_expression_attribute_values(Some(values))
            .condition_expression(format!("attribute_exists({KEY_ATTRIBUTE})"))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, id))?;

        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
