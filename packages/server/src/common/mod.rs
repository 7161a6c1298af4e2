// Common types and utilities shared across the application

pub mod error;
pub mod pagination;

pub use error::ApiError;
pub use pagination::Page;
