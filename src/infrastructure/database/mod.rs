//! SQL persistence plumbing.
//!
//! Provides connection pooling for the PostgreSQL and SQLite template backends.

pub mod pool;

pub use pool::{connect_postgres, connect_sqlite, mask_database_url};
