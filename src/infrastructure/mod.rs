//! Infrastructure layer modules
//!
//! This module contains shared infrastructure components:
//! - `auth`: Admin login, JWT issuance and bearer token verification
//! - `config`: Application configuration and settings
//! - `database`: SQLite and PostgreSQL connection pools
//! - `error`: HTTP-facing error type
//! - `metrics`: Prometheus metrics helpers

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod metrics;
