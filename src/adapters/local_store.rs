use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// All keys live in a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next snapshot is written to before it replaces `path`.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_all(&self) -> Result<Map<String, Value>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    async fn load(&self, key: &str) -> Result<Option<Value>> {
        let mut values = self.read_all().await?;
        Ok(values.remove(key))
    }

    async fn save(&self, key: &str, value: &Value) -> Result<()> {
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // 先寫暫存檔再 rename，中途失敗時原檔保持完整
        let data = serde_json::to_vec_pretty(&values)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, data).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        tracing::debug!("Wrote key '{}' to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LoveError;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("absent.json"));
        let value = tokio_test::block_on(store.load("valentineNotes")).unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_save_creates_parents_and_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/state/planner.json");
        let store = JsonFileStore::new(&path);

        store.save("a", &json!(["Rose Day"])).await.unwrap();
        store.save("b", &json!({"Hug Day": "hug!"})).await.unwrap();

        assert!(path.exists());
        assert_eq!(store.load("a").await.unwrap(), Some(json!(["Rose Day"])));
        assert_eq!(
            store.load("b").await.unwrap(),
            Some(json!({"Hug Day": "hug!"}))
        );

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load("a").await.unwrap(), Some(json!(["Rose Day"])));
    }

    #[tokio::test]
    async fn test_save_replaces_file_through_staging_copy() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("planner.json");
        let store = JsonFileStore::new(&path);
        assert_eq!(store.staging_path(), temp_dir.path().join("planner.json.tmp"));

        // leftover from an interrupted save
        std::fs::write(store.staging_path(), "{\"valentineCompl").unwrap();
        store.save("a", &json!(1)).await.unwrap();
        store.save("b", &json!(2)).await.unwrap();

        assert!(!store.staging_path().exists());
        let raw: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw, json!({"a": 1, "b": 2}));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("planner.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load("a").await,
            Err(LoveError::SerializationError(_))
        ));
    }
}
