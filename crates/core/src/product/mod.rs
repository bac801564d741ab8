mod mock_data;
mod types;

pub use mock_data::{
    generate_sample_product, generate_sample_products, DEFAULT_SEED_COUNT, PRICE_RANGE, RATE_RANGE,
};
pub use types::{
    is_storable_number, Message, Product, ProductUpdate, MAX_NUMBER_MAGNITUDE,
    MIN_NUMBER_MAGNITUDE,
};
