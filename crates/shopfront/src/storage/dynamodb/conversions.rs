//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and products.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use shopfront_core::product::{is_storable_number, Product, ProductUpdate};
use shopfront_core::storage::RepositoryError;

/// Partition key attribute of the product table.
pub const KEY_ATTRIBUTE: &str = "id";

/// Update expression applied by `update_product`.
///
/// `name` is a DynamoDB reserved word and must go through an attribute name placeholder.
pub const UPDATE_EXPRESSION: &str = "SET #name = :name, description = :description, price = :price";

/// Build the key map for a product ID.
pub fn product_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(KEY_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))])
}

/// Convert a Product to DynamoDB item.
pub fn product_to_item(
    product: &Product,
) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let mut item = HashMap::new();

    item.insert(
        KEY_ATTRIBUTE.to_string(),
        AttributeValue::S(product.id.clone()),
    );
    item.insert("name".to_string(), AttributeValue::S(product.name.clone()));
    item.insert(
        "description".to_string(),
        AttributeValue::S(product.description.clone()),
    );
    item.insert(
        "price".to_string(),
        number_attribute("price", product.price)?,
    );
    item.insert("rate".to_string(), number_attribute("rate", product.rate)?);
    item.insert(
        "image".to_string(),
        AttributeValue::S(product.image.clone()),
    );

    Ok(item)
}

/// Convert a DynamoDB item to Product.
pub fn item_to_product(item: &HashMap<String, AttributeValue>) -> Result<Product, RepositoryError> {
    Ok(Product {
        id: get_string(item, KEY_ATTRIBUTE)?,
        name: get_string(item, "name")?,
        description: get_string(item, "description")?,
        price: get_number(item, "price")?,
        rate: get_number(item, "rate")?,
        image: get_string(item, "image")?,
    })
}

/// Expression attribute values for [`UPDATE_EXPRESSION`].
pub fn update_values(
    update: &ProductUpdate,
) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    Ok(HashMap::from([
        (":name".to_string(), AttributeValue::S(update.name.clone())),
        (
            ":description".to_string(),
            AttributeValue::S(update.description.clone()),
        ),
        (":price".to_string(), number_attribute("price", update.price)?),
    ]))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Encode a float as a DynamoDB number.
///
/// DynamoDB numbers have no NaN or infinity and a magnitude between 1e-130 and 1e126.
fn number_attribute(key: &str, value: f64) -> Result<AttributeValue, RepositoryError> {
    if !is_storable_number(value) {
        return Err(RepositoryError::Serialization(format!(
            "{key} {value:e} is outside the DynamoDB number range"
        )));
    }
    Ok(AttributeValue::N(value.to_string()))
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute.
fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<f64, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    raw.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}
