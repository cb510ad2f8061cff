//! # HomeStay Infrastructure
//!
//! Concrete implementations of the core crate's repository traits backed by
//! MySQL through SQLx, plus connection pool construction.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::{
    MySqlAmenityRepository, MySqlPlaceAmenityRepository, MySqlPlaceRepository,
    MySqlReviewRepository, MySqlUserRepository,
};
