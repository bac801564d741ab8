//! In-memory storage backend.
//!
//! Stores products in a `HashMap` wrapped in `Arc<RwLock<_>>`. Data is lost
//! when the process exits, which makes it suitable for tests and local runs
//! without DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
