//! Shared fixtures for command handler tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rolodex_common::MockClock;
use rolodex_core::ContactSource;
use rolodex_domain::{
    Config, Contact, ContactName, ContactPicture, Result as DomainResult, RolodexError,
    StorageBackend,
};
use rolodex_lib::{AppContext, Cli};

pub fn contact(id: &str, first: &str, last: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: ContactName { first: first.into(), last: last.into() },
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "555-0100".into(),
        picture: ContactPicture::default(),
    }
}

pub fn roster() -> Vec<Contact> {
    vec![
        contact("u1", "Ada", "Lovelace"),
        contact("u2", "Grace", "Hopper"),
        contact("u3", "Alan", "Turing"),
    ]
}

/// Source that hands out a queued batch per call, repeating the last one.
pub struct ScriptedSource {
    batches: Mutex<Vec<Vec<Contact>>>,
    failure: Option<RolodexError>,
}

impl ScriptedSource {
    pub fn new(batches: Vec<Vec<Contact>>) -> Arc<Self> {
        Arc::new(Self { batches: Mutex::new(batches), failure: None })
    }

    /// Source whose every fetch fails with `error`
    pub fn failing(error: RolodexError) -> Arc<Self> {
        Arc::new(Self { batches: Mutex::new(Vec::new()), failure: Some(error) })
    }
}

#[async_trait]
impl ContactSource for ScriptedSource {
    async fn fetch_contacts(&self, count: u32) -> DomainResult<Vec<Contact>> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let mut batches = self.batches.lock().unwrap();
        let batch = if batches.len() > 1 { batches.remove(0) } else { batches[0].clone() };
        Ok(batch.into_iter().take(count as usize).collect())
    }
}

pub fn memory_config() -> Config {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    config
}

pub fn clock() -> MockClock {
    MockClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap())
}

pub fn context_with(config: Config, batches: Vec<Vec<Contact>>) -> AppContext {
    AppContext::with_adapters(config, ScriptedSource::new(batches), Arc::new(clock()))
}

pub fn context() -> AppContext {
    context_with(memory_config(), vec![roster()])
}

/// Parse `args` as a command line and run it, returning stdout.
pub async fn run(context: &AppContext, args: &[&str]) -> anyhow::Result<String> {
    use clap::Parser;

    let cli = Cli::try_parse_from(std::iter::once("rolodex").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    cli.command.execute(context, &mut out, cli.json).await?;
    Ok(String::from_utf8(out)?)
}
