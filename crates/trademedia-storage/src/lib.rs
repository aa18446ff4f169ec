//! Trademedia Storage Library
//!
//! This crate provides the storage abstraction and implementations for the
//! media ingestion service: the `Storage` trait, an S3-compatible backend,
//! and a local filesystem backend for development and tests.
//!
//! # Object key format
//!
//! All uploads are written under keys of the form
//! `trade-{timestamp_millis}-{random}.{ext}`. Key generation is centralized
//! in the [`keys`] module; keys must not contain `..` or a leading `/`.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use trademedia_core::StorageBackend;
pub use traits::{Storage, StorageError, StorageResult};
