//! Contact records imported from the remote contact source
//!
//! The JSON shape matches what the favorites blob stores under `user`, so a
//! contact snapshot round-trips through storage unchanged.

use serde::{Deserialize, Serialize};

/// A person fetched from the contact source. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identifier, unique within one fetch
    pub id: String,
    /// Given and family name
    pub name: ContactName,
    /// Contact email address, free-form
    pub email: String,
    /// Phone number as formatted by the source
    pub phone: String,
    /// Avatar URLs; empty when the source omits them
    #[serde(default)]
    pub picture: ContactPicture,
}

/// Personal name as delivered by the contact source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactName {
    /// Given name
    pub first: String,
    /// Family name
    pub last: String,
}

/// Avatar image URLs in three sizes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPicture {
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl Contact {
    /// `"{first} {last}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Case-insensitive search over full name, email and phone.
    ///
    /// A blank query matches every contact.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.full_name().to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.phone.to_lowercase().contains(&needle)
    }
}

/// Contacts matching `query`, in their original order.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts.iter().filter(|contact| contact.matches(query)).collect()
}
