pub mod data;
pub mod models;
pub mod rating;

pub use data::ReviewData;
pub use models::Review;
pub use rating::average_rating;
