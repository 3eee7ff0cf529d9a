use crate::domain::ports::LoveRepository;
use crate::utils::error::{LoveError, Result};
use std::path::Path;

/// Remote object name for an upload: `<unix millis>.<original extension>`.
pub fn photo_object_name(local: &Path, unix_millis: i64) -> String {
    match local.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{}.{}", unix_millis, ext.to_lowercase()),
        _ => unix_millis.to_string(),
    }
}

/// Reads a local image and uploads it, returning its public URL.
pub async fn upload_photo_file<R: LoveRepository>(repository: &R, local: &Path) -> Result<String> {
    if !local.is_file() {
        return Err(LoveError::invalid_input(
            "photo",
            format!("'{}' is not a readable file", local.display()),
        ));
    }

    let data = tokio::fs::read(local).await?;
    let name = photo_object_name(local, chrono::Utc::now().timestamp_millis());

    tracing::debug!("Uploading {} ({} bytes) as {}", local.display(), data.len(), name);
    let url = repository.upload_photo(&name, data).await?;
    tracing::info!(url = %url, "Photo uploaded");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::InMemoryRepository;
    use std::io::Write;

    #[test]
    fn test_photo_object_name() {
        assert_eq!(
            photo_object_name(Path::new("/tmp/Beach.JPG"), 1_700_000_000_000),
            "1700000000000.jpg"
        );
        assert_eq!(photo_object_name(Path::new("noext"), 42), "42");
    }

    #[tokio::test]
    async fn test_upload_photo_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();

        let url = upload_photo_file(&InMemoryRepository::default(), file.path())
            .await
            .unwrap();
        assert!(url.starts_with("memory://photos/"));
        assert!(url.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_missing_file_is_invalid_input() {
        let result = upload_photo_file(
            &InMemoryRepository::default(),
            Path::new("/definitely/not/here.jpg"),
        )
        .await;
        assert!(matches!(result, Err(LoveError::InvalidInput { .. })));
    }
}
