//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`ProductRepository`]
//! using `aws-sdk-dynamodb`.
//!
//! [`ProductRepository`]: shopfront_core::storage::ProductRepository

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
