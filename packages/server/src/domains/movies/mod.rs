pub mod data;
pub mod models;

pub use data::{MovieData, MovieInput, MovieWithRating};
pub use models::{Movie, MovieDetails, MovieFilter};
