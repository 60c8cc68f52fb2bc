use std::io::Write;

use chrono::{Local, TimeZone};
use clap::Subcommand;
use rolodex_domain::{Contact, FavoriteEntry, RolodexError};
use serde_json::json;

use super::write_json;
use crate::AppContext;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List favorites in the order they were added
    List,
    /// Favorite a contact from the last fetched batch
    Add { id: String },
    /// Unfavorite a contact
    Remove { id: String },
    /// Favorite or unfavorite a contact
    Toggle { id: String },
    /// Tell whether a contact is a favorite
    Check { id: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "favorites::list",
            Self::Add { .. } => "favorites::add",
            Self::Remove { .. } => "favorites::remove",
            Self::Toggle { .. } => "favorites::toggle",
            Self::Check { .. } => "favorites::check",
        }
    }
}

pub async fn handle<W: Write>(
    command: Command,
    context: &AppContext,
    out: &mut W,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        Command::List => list(context, out, json).await,
        Command::Add { id } => {
            let contact = resolve_contact(context, &id).await?;
            context.favorites.add(&contact).await?;
            report(out, json, &contact, true)
        }
        Command::Remove { id } => {
            let existing = context.favorites.get(&id).await?;
            context.favorites.remove(&id).await?;
            match existing {
                Some(entry) => report(out, json, &entry.contact, false),
                None if json => write_json(out, &json!({ "id": id, "favorite": false })),
                None => {
                    writeln!(out, "{id} is not a favorite")?;
                    Ok(())
                }
            }
        }
        Command::Toggle { id } => {
            let contact = resolve_contact(context, &id).await?;
            let favorite = context.favorites.toggle(&contact).await?;
            report(out, json, &contact, favorite)
        }
        Command::Check { id } => {
            let favorite = context.favorites.is_favorite(&id).await?;
            if json {
                return write_json(out, &json!({ "id": id, "favorite": favorite }));
            }
            writeln!(out, "{}", if favorite { "yes" } else { "no" })?;
            Ok(())
        }
    }
}

async fn list<W: Write>(context: &AppContext, out: &mut W, json: bool) -> anyhow::Result<()> {
    let favorites = context.favorites.list().await;

    if json {
        return write_json(out, &favorites);
    }

    if favorites.is_empty() {
        writeln!(out, "No favorites yet.")?;
        return Ok(());
    }

    for entry in &favorites {
        writeln!(
            out,
            "{}  {}  {}  [{}]  added {}",
            entry.contact.full_name(),
            entry.contact.email,
            entry.contact.phone,
            entry.id,
            favorited_at_label(entry)
        )?;
    }
    writeln!(out, "{} favorites", favorites.len())?;
    Ok(())
}

/// The last fetched batch first; a stored favorite's snapshot otherwise, so
/// favorites from older batches can still be toggled off.
async fn resolve_contact(context: &AppContext, id: &str) -> Result<Contact, RolodexError> {
    match context.contacts.find(id).await {
        Ok(contact) => Ok(contact),
        Err(RolodexError::NotFound(message)) => match context.favorites.get(id).await? {
            Some(entry) => Ok(entry.contact),
            None => Err(RolodexError::NotFound(message)),
        },
        Err(err) => Err(err),
    }
}

fn report<W: Write>(
    out: &mut W,
    json: bool,
    contact: &Contact,
    favorite: bool,
) -> anyhow::Result<()> {
    if json {
        return write_json(out, &json!({ "id": contact.id, "favorite": favorite }));
    }

    let verb = if favorite { "Added" } else { "Removed" };
    let preposition = if favorite { "to" } else { "from" };
    writeln!(out, "{verb} {} {preposition} favorites", contact.full_name())?;
    Ok(())
}

fn favorited_at_label(entry: &FavoriteEntry) -> String {
    Local
        .timestamp_millis_opt(entry.favorited_at)
        .single()
        .map(|instant| instant.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "at an unknown time".to_string())
}
