mod articles;
mod images;

pub use articles::{load_articles, LegacyArticle};
pub use images::{load_image_catalog, ImageCatalog, ImageMeta};

use std::path::{Path, PathBuf};

/// Well-known file layout of a legacy export directory.
pub struct ExportLayout {
    data_dir: PathBuf,
}

impl ExportLayout {
    pub fn new(source_dir: &Path, data_dir: &str) -> Self {
        ExportLayout {
            data_dir: source_dir.join(data_dir),
        }
    }

    /// Directory holding the export files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Article export file
    pub fn articles_file(&self) -> PathBuf {
        self.data_dir.join("old_news.json")
    }

    /// Image metadata export file
    pub fn images_file(&self) -> PathBuf {
        self.data_dir.join("images.news.json")
    }

    /// Directory holding the raw image files
    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join("original_images")
    }
}
