//! Read-only image catalog.

use std::path::PathBuf;

use crate::document::JsonDocument;
use crate::error::EventDirResult;
use crate::event::ImageMeta;

pub struct ImageCatalog {
    document: JsonDocument<Vec<ImageMeta>>,
}

impl ImageCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ImageCatalog {
            document: JsonDocument::new(path),
        }
    }

    pub fn document(&self) -> &JsonDocument<Vec<ImageMeta>> {
        &self.document
    }

    /// Every image, as stored.
    pub async fn list(&self) -> EventDirResult<Vec<ImageMeta>> {
        self.document.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventDirError;

    #[tokio::test]
    async fn test_list_returns_stored_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.json");
        std::fs::write(
            &path,
            r#"[{"path": "b.jpg", "caption": "B"}, {"path": "a.jpg", "caption": "A"}]"#,
        )
        .unwrap();

        let images = ImageCatalog::new(path).list().await.unwrap();
        let paths: Vec<_> = images.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["b.jpg", "a.jpg"]);
    }

    #[tokio::test]
    async fn test_missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ImageCatalog::new(dir.path().join("images.json"));

        assert!(matches!(catalog.list().await, Err(EventDirError::Io(_))));
    }
}
