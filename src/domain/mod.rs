//! Domain layer modules
//!
//! This module contains business domain logic:
//! - `render`: Placeholder extraction and literal substitution
//! - `template`: Template records and their storage backends

pub mod render;
pub mod template;
