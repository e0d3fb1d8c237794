//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate holds the post model and the repository port, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
