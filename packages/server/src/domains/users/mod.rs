pub mod data;
pub mod models;

pub use data::UserData;
pub use models::{Role, User};
