//! Contact fetching and the last-fetched roster

pub mod ports;
pub mod roster;
pub mod service;

pub use roster::ContactRoster;
pub use service::ContactsService;
