//! Storage backend implementations.
//!
//! Concrete implementations of [`ProductRepository`] from `shopfront_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled and is what the tests run against.
//! The backend is picked at startup with `--storage`.
//!
//! Build without the AWS SDK:
//! ```bash
//! cargo build -p shopfront --no-default-features
//! ```
//!
//! [`ProductRepository`]: shopfront_core::storage::ProductRepository

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
