//! Favorited contacts and the collection persisted under one storage key
//!
//! Wire format (one JSON array per key):
//!
//! ```json
//! [{ "id": "u1", "user": { ...contact... }, "timestamp": 1714572000000 }]
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::contact::Contact;

/// A contact snapshot together with the moment it was favorited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Same value as `contact.id`
    pub id: String,
    /// Owned copy; survives the contact list being refetched
    #[serde(rename = "user", alias = "contact")]
    pub contact: Contact,
    /// Milliseconds since the UNIX epoch. Never mutated after creation.
    #[serde(rename = "timestamp", alias = "favoritedAt")]
    pub favorited_at: i64,
}

impl FavoriteEntry {
    /// Entry keyed by `contact.id`
    pub fn new(contact: Contact, favorited_at: i64) -> Self {
        Self { id: contact.id.clone(), contact, favorited_at }
    }
}

/// Favorites in favoriting order, at most one entry per id.
///
/// Deserializing drops later duplicates so a hand-edited blob cannot break
/// the uniqueness invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesCollection(Vec<FavoriteEntry>);

impl FavoritesCollection {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of favorited contacts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when nothing is favorited
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a contact with `id` is favorited
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|entry| entry.id == id)
    }

    /// Entry for `id`, if favorited
    pub fn get(&self, id: &str) -> Option<&FavoriteEntry> {
        self.0.iter().find(|entry| entry.id == id)
    }

    /// Entries in favoriting order
    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteEntry> {
        self.0.iter()
    }

    /// Entries as a slice, oldest favorite first
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.0
    }

    /// Append `entry` unless its id is already present.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn insert(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(&entry.id) {
            return false;
        }
        self.0.push(entry);
        true
    }

    /// Remove the entry with `id`. Returns the removed entry, if any.
    pub fn remove(&mut self, id: &str) -> Option<FavoriteEntry> {
        let index = self.0.iter().position(|entry| entry.id == id)?;
        Some(self.0.remove(index))
    }
}

impl From<Vec<FavoriteEntry>> for FavoritesCollection {
    fn from(entries: Vec<FavoriteEntry>) -> Self {
        let mut collection = Self(Vec::with_capacity(entries.len()));
        for entry in entries {
            collection.insert(entry);
        }
        collection
    }
}

impl IntoIterator for FavoritesCollection {
    type Item = FavoriteEntry;
    type IntoIter = std::vec::IntoIter<FavoriteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FavoritesCollection {
    type Item = &'a FavoriteEntry;
    type IntoIter = std::slice::Iter<'a, FavoriteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for FavoritesCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FavoritesCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<FavoriteEntry>::deserialize(deserializer).map(Self::from)
    }
}
