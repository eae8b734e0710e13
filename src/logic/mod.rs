//! Rotation business logic: ratings, court allocation, match completion.

pub mod allocation;
pub mod rating;
mod rotation;

pub use allocation::{allocate_all, allocate_one};
pub use rating::update_ratings;
pub use rotation::{complete_match, fill_courts, tick};
