//! Middleware modules.

pub mod error;
pub mod json_body;
