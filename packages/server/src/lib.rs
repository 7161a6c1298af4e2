// Movie Catalogue - API Core
//
// Backend API for a movie catalogue with user reviews: CRUD over
// PostgreSQL, cookie-borne JWT authentication, role-based access
// policy, and on-demand rating aggregation.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
