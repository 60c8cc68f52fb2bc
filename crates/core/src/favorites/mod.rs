//! Favorites store: the durable set of favorited contacts

pub mod ports;
pub mod service;

pub use service::FavoritesService;
