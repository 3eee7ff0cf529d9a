use crate::domain::model::{LoveCard, Memory, NewLoveCard, NewMemory};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persisted key-value state, injected into the planner.
pub trait KeyValueStore: Send + Sync {
    fn load(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>>> + Send;
    fn save(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Remote record and photo storage for cards and memories.
#[async_trait]
pub trait LoveRepository: Send + Sync {
    async fn create_card(&self, card: NewLoveCard) -> Result<LoveCard>;
    async fn get_card_by_share_code(&self, share_code: &str) -> Result<Option<LoveCard>>;
    async fn list_memories(&self) -> Result<Vec<Memory>>;
    async fn create_memory(&self, memory: NewMemory) -> Result<Memory>;
    /// `NotFound` when no memory has `id`.
    async fn delete_memory(&self, id: &str) -> Result<()>;
    /// Stores the bytes under `file_name` and returns the public URL.
    async fn upload_photo(&self, file_name: &str, data: Vec<u8>) -> Result<String>;
}
