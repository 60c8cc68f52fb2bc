//! Commands over the file backend and the real HTTP contact source

mod support;

use rolodex_common::testing::TempDir;
use rolodex_domain::{Config, StorageBackend};
use rolodex_lib::AppContext;
use serde_json::{json, Value};
use support::{context_with, roster, run};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn file_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::File;
    config.storage.path = dir.child("state");
    config.export.directory = dir.child("exports");
    config
}

#[tokio::test]
async fn favorites_persist_across_contexts() {
    let dir = TempDir::new("rolodex-app").unwrap();

    {
        let ctx = context_with(file_config(&dir), vec![roster()]);
        run(&ctx, &["contacts"]).await.unwrap();
        run(&ctx, &["favorites", "add", "u1"]).await.unwrap();
    }

    let ctx = context_with(file_config(&dir), vec![roster()]);
    assert_eq!(run(&ctx, &["favorites", "check", "u1"]).await.unwrap().trim(), "yes");
    // roster survives too, so an id from the earlier fetch still resolves
    run(&ctx, &["favorites", "add", "u2"]).await.unwrap();
    assert_eq!(ctx.favorites.count().await, 2);
}

#[tokio::test]
async fn export_writes_dated_file() {
    let dir = TempDir::new("rolodex-app").unwrap();
    let ctx = context_with(file_config(&dir), vec![roster()]);
    run(&ctx, &["contacts"]).await.unwrap();
    run(&ctx, &["favorites", "add", "u1"]).await.unwrap();

    let output: Value =
        serde_json::from_str(&run(&ctx, &["export", "--json"]).await.unwrap()).unwrap();

    let expected = dir.child("exports").join("favorites_export_2024-05-01.json");
    assert_eq!(output["path"], expected.display().to_string());
    let document: Value =
        serde_json::from_str(&std::fs::read_to_string(&expected).unwrap()).unwrap();
    assert_eq!(document["totalFavorites"], 1);
    assert_eq!(document["favorites"][0]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn export_dir_flag_overrides_config() {
    let dir = TempDir::new("rolodex-app").unwrap();
    let ctx = context_with(file_config(&dir), vec![roster()]);
    run(&ctx, &["contacts"]).await.unwrap();
    run(&ctx, &["favorites", "add", "u1"]).await.unwrap();
    let target = dir.child("elsewhere");

    let output = run(&ctx, &["export", "--dir", target.to_str().unwrap()]).await.unwrap();

    assert!(output.starts_with("Exported favorites to"));
    assert!(target.join("favorites_export_2024-05-01.json").exists());
    assert!(!dir.child("exports").exists());
}

#[tokio::test]
async fn contacts_command_fetches_from_random_user_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "login": { "uuid": "0c5e" },
                "name": { "title": "Mr", "first": "Edsger", "last": "Dijkstra" },
                "email": "edsger@example.com",
                "phone": "555-0199",
                "picture": { "large": "l", "medium": "m", "thumbnail": "t" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    config.contacts.base_url = server.uri();
    config.contacts.max_attempts = 1;
    let ctx = AppContext::new(config).unwrap();

    let output = run(&ctx, &["contacts", "--count", "1"]).await.unwrap();

    assert!(output.contains("Edsger Dijkstra"));
    assert!(output.contains("[0c5e]"));
}

#[tokio::test]
async fn contact_source_failure_surfaces_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(503)).mount(&server).await;

    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    config.contacts.base_url = server.uri();
    config.contacts.max_attempts = 1;
    let ctx = AppContext::new(config).unwrap();

    let err = run(&ctx, &["contacts"]).await.unwrap_err();

    assert!(err.to_string().contains("503"));
}
