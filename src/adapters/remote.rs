use crate::config::toml_config::RemoteConfig;
use crate::domain::model::{LoveCard, Memory, NewLoveCard, NewMemory};
use crate::domain::ports::LoveRepository;
use crate::utils::error::{LoveError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const CARDS_TABLE: &str = "love_cards";
const MEMORIES_TABLE: &str = "memories";

/// Records and photos on a PostgREST + object-storage backend (Supabase layout).
pub struct RestRepository {
    client: Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl RestRepository {
    pub fn new(base_url: &str, api_key: &str, bucket: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
        })
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Self::new(
            &config.url,
            &config.api_key,
            &config.photo_bucket,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn public_photo_url(&self, file_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, file_name
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        tracing::debug!("Remote response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!("Remote request failed with {}: {}", status, message);
        Err(LoveError::RemoteError {
            status: status.as_u16(),
            message,
        })
    }

    /// POST with `return=representation` and unwrap the single returned row.
    async fn insert<T: serde::Serialize + Sync, R: DeserializeOwned + Send>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<R> {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(row);

        let mut rows: Vec<R> = self.send(request).await?.json().await?;
        if rows.is_empty() {
            return Err(LoveError::RemoteError {
                status: 200,
                message: format!("insert into '{}' returned no rows", table),
            });
        }
        Ok(rows.swap_remove(0))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl LoveRepository for RestRepository {
    async fn create_card(&self, card: NewLoveCard) -> Result<LoveCard> {
        tracing::debug!("Inserting card into {}", CARDS_TABLE);
        self.insert(CARDS_TABLE, &card).await
    }

    async fn get_card_by_share_code(&self, share_code: &str) -> Result<Option<LoveCard>> {
        let request = self.client.get(self.table_url(CARDS_TABLE)).query(&[
            ("share_code", format!("eq.{}", share_code)),
            ("select", "*".to_string()),
        ]);

        let cards: Vec<LoveCard> = self.send(request).await?.json().await?;
        Ok(cards.into_iter().next())
    }

    async fn list_memories(&self) -> Result<Vec<Memory>> {
        let request = self
            .client
            .get(self.table_url(MEMORIES_TABLE))
            .query(&[("select", "*"), ("order", "memory_date.desc")]);

        Ok(self.send(request).await?.json().await?)
    }

    async fn create_memory(&self, memory: NewMemory) -> Result<Memory> {
        tracing::debug!("Inserting memory into {}", MEMORIES_TABLE);
        self.insert(MEMORIES_TABLE, &memory).await
    }

    async fn delete_memory(&self, id: &str) -> Result<()> {
        let request = self
            .client
            .delete(self.table_url(MEMORIES_TABLE))
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", id))]);

        // PostgREST 對不存在的 id 也回 2xx，以回傳的列數判斷
        let deleted: Vec<serde_json::Value> = self.send(request).await?.json().await?;
        if deleted.is_empty() {
            return Err(LoveError::NotFound {
                what: format!("memory '{}'", id),
            });
        }
        Ok(())
    }

    async fn upload_photo(&self, file_name: &str, data: Vec<u8>) -> Result<String> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, file_name
        );
        let request = self
            .client
            .post(url)
            .header("cache-control", "3600")
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type_for(file_name))
            .body(data);

        self.send(request).await?;
        Ok(self.public_photo_url(file_name))
    }
}
