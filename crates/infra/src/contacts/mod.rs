//! Remote contact sources

mod random_user;

pub use random_user::RandomUserClient;
