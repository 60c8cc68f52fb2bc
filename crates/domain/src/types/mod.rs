//! Domain types and models

pub mod contact;
pub mod export;
pub mod favorite;
pub mod stats;

pub use contact::{filter_contacts, Contact, ContactName, ContactPicture};
pub use export::{ExportedContact, FavoritesExport};
pub use favorite::{FavoriteEntry, FavoritesCollection};
pub use stats::{ActivitySummary, HourlyBucket};
