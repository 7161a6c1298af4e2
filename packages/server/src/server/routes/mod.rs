// HTTP routes
pub mod auth;
pub mod health;
pub mod movies;
pub mod reviews;

pub use auth::*;
pub use health::*;
pub use movies::*;
pub use reviews::*;
