use crate::domain::model::{Memory, NewMemory};
use crate::domain::ports::LoveRepository;
use crate::utils::error::{LoveError, Result};
use crate::utils::validation::{is_input_whitespace, require_non_blank};
use chrono::NaiveDate;

/// "October 18, 2026"
pub fn format_memory_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn parse_memory_date(value: &str) -> Result<NaiveDate> {
    require_non_blank("memory_date", value)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        LoveError::invalid_input("memory_date", format!("Expected YYYY-MM-DD: {}", e))
    })
}

pub struct MemoryService<R: LoveRepository> {
    repository: R,
}

impl<R: LoveRepository> MemoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Newest memory first.
    pub async fn list(&self) -> Result<Vec<Memory>> {
        let mut memories = self.repository.list_memories().await?;
        memories.sort_by(|a, b| b.memory_date.cmp(&a.memory_date));
        tracing::debug!("Fetched {} memories", memories.len());
        Ok(memories)
    }

    pub async fn create(
        &self,
        title: &str,
        description: &str,
        memory_date: &str,
        photo_url: Option<&str>,
    ) -> Result<Memory> {
        require_non_blank("title", title)?;
        require_non_blank("description", description)?;
        let memory_date = parse_memory_date(memory_date)?;

        let memory = NewMemory {
            title: title.to_string(),
            description: description.to_string(),
            photo_url: photo_url
                .map(|url| url.trim_matches(is_input_whitespace))
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            memory_date,
        };

        let stored = self.repository.create_memory(memory).await?;
        tracing::info!(id = %stored.id, "Memory saved");
        Ok(stored)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        require_non_blank("id", id)?;
        self.repository.delete_memory(id.trim()).await?;
        tracing::info!(id = id.trim(), "Memory deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::InMemoryRepository;

    #[test]
    fn test_format_memory_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_memory_date(date), "October 18, 2026");
        let date = NaiveDate::from_ymd_opt(2025, 2, 4).unwrap();
        assert_eq!(format_memory_date(date), "February 4, 2025");
    }

    #[test]
    fn test_parse_memory_date() {
        assert_eq!(
            parse_memory_date("2024-02-14").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
        );
        assert!(parse_memory_date("14/02/2024").is_err());
        assert!(parse_memory_date("").is_err());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let service = MemoryService::new(InMemoryRepository::default());
        service
            .create("First date", "Coffee", "2023-05-01", None)
            .await
            .unwrap();
        service
            .create("Anniversary", "Dinner", "2024-05-01", Some("https://x/p.jpg"))
            .await
            .unwrap();
        service
            .create("Trip", "Lisbon", "2023-09-12", None)
            .await
            .unwrap();

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Anniversary", "Trip", "First date"]);
    }

    #[tokio::test]
    async fn test_create_requires_fields() {
        let repository = InMemoryRepository::default();
        let service = MemoryService::new(repository.clone());
        assert!(service.create("", "d", "2024-01-01", None).await.is_err());
        assert!(service.create("t", " ", "2024-01-01", None).await.is_err());
        assert!(service.create("t", "d", "", None).await.is_err());
        assert!(repository.memories.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let service = MemoryService::new(InMemoryRepository::default());
        let memory = service
            .create("Picnic", "Park", "2024-06-01", None)
            .await
            .unwrap();
        service.delete(&memory.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
        assert!(service.delete("").await.is_err());

        // already gone
        let err = service.delete(&memory.id).await.unwrap_err();
        assert!(matches!(err, LoveError::NotFound { .. }));
    }
}
