use serde::{Deserialize, Serialize};

/// Smallest non-zero magnitude the table store can hold in a number attribute.
pub const MIN_NUMBER_MAGNITUDE: f64 = 1e-130;

/// Magnitudes at or above this overflow a table store number attribute.
pub const MAX_NUMBER_MAGNITUDE: f64 = 1e126;

/// Whether `value` fits in a table store number attribute.
///
/// Zero is storable; otherwise the magnitude must lie in
/// [`MIN_NUMBER_MAGNITUDE`, `MAX_NUMBER_MAGNITUDE`). NaN and infinities are not.
pub fn is_storable_number(value: f64) -> bool {
    value == 0.0 || (MIN_NUMBER_MAGNITUDE..MAX_NUMBER_MAGNITUDE).contains(&value.abs())
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Customer rating, nominally between 0 and 5.
    pub rate: f64,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Creates a new product with the given ID and name, other fields empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price: 0.0,
            rate: 0.0,
            image: String::new(),
        }
    }

    /// Sets the description for this product.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the price for this product.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the rate for this product.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the image URL for this product.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Applies a partial update in place.
    ///
    /// Only `name`, `description` and `price` change; `rate` and `image` are kept.
    pub fn apply(&mut self, update: &ProductUpdate) {
        self.name.clone_from(&update.name);
        self.description.clone_from(&update.description);
        self.price = update.price;
    }
}

/// Fields that can be changed on an existing product.
///
/// Request bodies may carry a full product; fields other than these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductUpdate {
    /// Checks that the update can be stored.
    pub fn validate(&self) -> Result<(), String> {
        if !is_storable_number(self.price) {
            return Err(format!("price {:e} is out of range", self.price));
        }
        Ok(())
    }
}

/// Simple `{"message": ...}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The acknowledgement returned by update and delete.
    pub fn done() -> Self {
        Self::new("Done")
    }
}
