use anyhow::Result;
use httpmock::prelude::*;
use love_connect::config::toml_config::AppConfig;
use love_connect::{CardService, CardTheme, LoveError, MemoryService, RestRepository};

fn repository_for(server: &MockServer) -> Result<RestRepository> {
    let config = AppConfig::from_toml_str(&format!(
        r#"
[remote]
url = "{}"
api_key = "anon-key"
timeout_seconds = 5
"#,
        server.base_url()
    ))?;
    Ok(RestRepository::from_config(config.remote()?)?)
}

#[tokio::test]
async fn test_create_card_posts_row_and_returns_representation() -> Result<()> {
    let server = MockServer::start();

    let insert_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/love_cards")
            .header("prefer", "return=representation")
            .header("apikey", "anon-key")
            .json_body_partial(
                serde_json::json!({
                    "partner_name": "Sam",
                    "message": "Be mine",
                    "theme": "modern",
                    "photo_url": null
                })
                .to_string(),
            );
        then.status(201).json_body(serde_json::json!([{
            "id": "c0ffee",
            "partner_name": "Sam",
            "message": "Be mine",
            "theme": "modern",
            "photo_url": null,
            "created_at": "2026-02-10T08:30:00+00:00",
            "share_code": "K3Y9QW1Z"
        }]));
    });

    let cards = CardService::new(repository_for(&server)?);
    let card = cards
        .create_card("Sam", "Be mine", CardTheme::Modern, None)
        .await?;

    insert_mock.assert();
    assert_eq!(card.id, "c0ffee");
    assert_eq!(card.share_code, "K3Y9QW1Z");
    Ok(())
}

#[tokio::test]
async fn test_get_unknown_card_is_not_found() -> Result<()> {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/love_cards")
            .query_param("share_code", "eq.MISSING1");
        then.status(200).json_body(serde_json::json!([]));
    });

    let cards = CardService::new(repository_for(&server)?);
    let err = cards.get_card("MISSING1").await.unwrap_err();

    lookup_mock.assert();
    assert!(matches!(err, LoveError::NotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn test_memories_list_create_delete() -> Result<()> {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/memories")
            .query_param("order", "memory_date.desc");
        then.status(200).json_body(serde_json::json!([
            {
                "id": "m1",
                "title": "Trip",
                "description": "Lisbon",
                "photo_url": null,
                "memory_date": "2023-09-12",
                "created_at": "2023-09-13T10:00:00+00:00"
            },
            {
                "id": "m2",
                "title": "Anniversary",
                "description": "Dinner",
                "photo_url": "https://x/photos/2.jpg",
                "memory_date": "2024-05-01",
                "created_at": "2024-05-02T10:00:00+00:00"
            }
        ]));
    });

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/memories")
            .json_body_partial(r#"{"title": "Picnic", "memory_date": "2024-06-01"}"#);
        then.status(201).json_body(serde_json::json!([{
            "id": "m3",
            "title": "Picnic",
            "description": "Park",
            "photo_url": null,
            "memory_date": "2024-06-01",
            "created_at": "2024-06-01T18:00:00+00:00"
        }]));
    });

    let delete_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/memories")
            .query_param("id", "eq.m1")
            .header("prefer", "return=representation");
        then.status(200).json_body(serde_json::json!([{
            "id": "m1",
            "title": "Trip",
            "description": "Lisbon",
            "photo_url": null,
            "memory_date": "2023-09-12",
            "created_at": "2023-09-13T10:00:00+00:00"
        }]));
    });

    let memories = MemoryService::new(repository_for(&server)?);

    let listed = memories.list().await?;
    list_mock.assert();
    assert_eq!(listed[0].id, "m2");
    assert_eq!(listed[1].id, "m1");

    let created = memories.create("Picnic", "Park", "2024-06-01", None).await?;
    create_mock.assert();
    assert_eq!(created.id, "m3");

    memories.delete("m1").await?;
    delete_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_deleting_unknown_memory_is_not_found() -> Result<()> {
    let server = MockServer::start();
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/memories")
            .query_param("id", "eq.nope");
        then.status(200).json_body(serde_json::json!([]));
    });

    let memories = MemoryService::new(repository_for(&server)?);
    let err = memories.delete("nope").await.unwrap_err();

    delete_mock.assert();
    assert!(matches!(err, LoveError::NotFound { .. }));
    assert_eq!(
        err.severity(),
        love_connect::utils::error::ErrorSeverity::Low
    );
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_retryable_remote_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/memories");
        then.status(503).body("upstream unavailable");
    });

    let memories = MemoryService::new(repository_for(&server)?);
    let err = memories.list().await.unwrap_err();

    assert!(matches!(err, LoveError::RemoteError { status: 503, .. }));
    assert_eq!(
        err.severity(),
        love_connect::utils::error::ErrorSeverity::Medium
    );
    Ok(())
}
