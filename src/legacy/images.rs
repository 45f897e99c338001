use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::utils::error::MigrateError;

/// One image metadata record from `images.news.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageMeta {
    pub pk: i64,
    pub fields: ImageFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageFields {
    /// Path as exported, usually prefixed with `original_images/`
    pub file: String,
    pub title: String,
}

impl ImageMeta {
    /// Bare filename with the export's `original_images/` prefix stripped.
    pub fn file_name(&self) -> &str {
        self.fields
            .file
            .strip_prefix("original_images/")
            .unwrap_or(&self.fields.file)
    }
}

/// In-memory index of the image metadata export.
pub struct ImageCatalog {
    images: Vec<ImageMeta>,
}

impl ImageCatalog {
    pub fn new(images: Vec<ImageMeta>) -> Self {
        ImageCatalog { images }
    }

    /// Look up a record by its primary key.
    pub fn find(&self, pk: i64) -> Option<&ImageMeta> {
        self.images.iter().find(|image| image.pk == pk)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageMeta> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Load the image metadata catalog from `images.news.json`.
pub fn load_image_catalog(path: &Path) -> Result<ImageCatalog, MigrateError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| MigrateError::Export(format!("failed to read {}: {}", path.display(), e)))?;

    let images: Vec<ImageMeta> = serde_json::from_str(&raw)
        .map_err(|e| MigrateError::Export(format!("failed to parse {}: {}", path.display(), e)))?;

    Ok(ImageCatalog::new(images))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_pk() {
        let images: Vec<ImageMeta> = serde_json::from_str(
            r#"[
                {"pk": 5, "fields": {"file": "original_images/sun.jpg", "title": "Sunset"}},
                {"pk": 9, "fields": {"file": "original_images/moon.png", "title": "Moonrise"}}
            ]"#,
        )
        .unwrap();
        let catalog = ImageCatalog::new(images);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(5).unwrap().fields.title, "Sunset");
        assert!(catalog.find(7).is_none());
    }

    #[test]
    fn test_file_name_strips_export_prefix() {
        let image: ImageMeta = serde_json::from_str(
            r#"{"pk": 1, "fields": {"file": "original_images/sun.jpg", "title": "Sunset"}}"#,
        )
        .unwrap();

        assert_eq!(image.file_name(), "sun.jpg");
    }
}
