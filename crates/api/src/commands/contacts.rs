use std::io::Write;

use clap::Args;
use rolodex_domain::{filter_contacts, Contact};
use serde::Serialize;

use super::write_json;
use crate::AppContext;

#[derive(Args, Debug)]
pub struct Command {
    /// Number of contacts to fetch (defaults to `contacts.default_count`)
    #[arg(long, short)]
    pub count: Option<u32>,

    /// Only show contacts whose name, email or phone contains this text
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Serialize)]
struct ContactRow<'a> {
    #[serde(flatten)]
    contact: &'a Contact,
    favorite: bool,
}

pub async fn handle<W: Write>(
    command: Command,
    context: &AppContext,
    out: &mut W,
    json: bool,
) -> anyhow::Result<()> {
    let count = command.count.unwrap_or(context.config.contacts.default_count);
    let contacts = context.contacts.refresh(count).await?;
    let favorites = context.favorites.list().await;

    let query = command.search.as_deref().unwrap_or_default();
    let rows: Vec<ContactRow<'_>> = filter_contacts(&contacts, query)
        .into_iter()
        .map(|contact| ContactRow { contact, favorite: favorites.contains(&contact.id) })
        .collect();

    if json {
        return write_json(out, &rows);
    }

    if rows.is_empty() {
        writeln!(out, "No contacts match.")?;
        return Ok(());
    }

    for row in &rows {
        let marker = if row.favorite { "*" } else { " " };
        writeln!(
            out,
            "{marker} {}  {}  {}  [{}]",
            row.contact.full_name(),
            row.contact.email,
            row.contact.phone,
            row.contact.id
        )?;
    }
    writeln!(out, "{} of {} contacts shown", rows.len(), contacts.len())?;
    Ok(())
}
