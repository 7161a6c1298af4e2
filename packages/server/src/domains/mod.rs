// Domain modules: one per entity plus authentication

pub mod auth;
pub mod movies;
pub mod reviews;
pub mod users;
