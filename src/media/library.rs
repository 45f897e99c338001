use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::media::types::{MediaFolder, MediaImage};
use crate::utils::error::MigrateError;
use crate::utils::fs::{copy_file, create_directory, write_file_atomic};

const INDEX_FILE: &str = "library.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryIndex {
    #[serde(default)]
    folders: Vec<MediaFolder>,
    #[serde(default)]
    images: Vec<MediaImage>,
}

/// File-backed media library: a JSON index document plus the stored files,
/// laid out as `<root>/<folder-slug>/<filename>`.
///
/// Folders are keyed by name and images by (name, folder), so every create
/// is an idempotent upsert. The index is rewritten atomically after each
/// change, which makes a partially failed run safe to repeat.
pub struct MediaLibrary {
    root: PathBuf,
    base_url: String,
    index: LibraryIndex,
}

impl MediaLibrary {
    /// Open a library rooted at `root`, creating it if absent.
    pub fn open(root: &Path, base_url: &str) -> Result<Self, MigrateError> {
        create_directory(root).map_err(|e| {
            MigrateError::Media(format!("failed to create library root {}: {}", root.display(), e))
        })?;

        let index_path = root.join(INDEX_FILE);
        let index = if index_path.exists() {
            let raw = fs::read_to_string(&index_path).map_err(|e| {
                MigrateError::Media(format!("failed to read {}: {}", index_path.display(), e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                MigrateError::Media(format!("failed to parse {}: {}", index_path.display(), e))
            })?
        } else {
            LibraryIndex::default()
        };

        Ok(MediaLibrary {
            root: root.to_path_buf(),
            base_url: base_url.trim_end_matches('/').to_string(),
            index,
        })
    }

    pub fn folder(&self, name: &str) -> Option<&MediaFolder> {
        self.index.folders.iter().find(|folder| folder.name == name)
    }

    /// Get-or-create a folder by name. Repeated calls return the existing
    /// record's id.
    pub fn ensure_folder(&mut self, name: &str, owner: &str) -> Result<u64, MigrateError> {
        if let Some(folder) = self.folder(name) {
            return Ok(folder.id);
        }

        let id = self.index.folders.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let dir = self.root.join(slug::slugify(name));
        create_directory(&dir).map_err(|e| {
            MigrateError::Media(format!("failed to create folder {}: {}", dir.display(), e))
        })?;

        self.index.folders.push(MediaFolder {
            id,
            name: name.to_string(),
            owner: owner.to_string(),
        });
        self.save()?;

        Ok(id)
    }

    pub fn find_image(&self, folder_id: u64, name: &str) -> Option<&MediaImage> {
        self.index
            .images
            .iter()
            .find(|image| image.folder_id == folder_id && image.name == name)
    }

    /// Get-or-upload an image into a folder, keyed on (name, folder).
    ///
    /// A new image copies the source file into the folder, appends a record
    /// and commits the index; an existing one is returned untouched. The
    /// boolean reports whether anything was created.
    pub fn get_or_upload(
        &mut self,
        folder_id: u64,
        name: &str,
        original_filename: &str,
        source: &Path,
        owner: &str,
    ) -> Result<(MediaImage, bool), MigrateError> {
        if let Some(existing) = self.find_image(folder_id, name) {
            return Ok((existing.clone(), false));
        }

        let folder = self
            .index
            .folders
            .iter()
            .find(|folder| folder.id == folder_id)
            .ok_or_else(|| MigrateError::Media(format!("unknown media folder id {}", folder_id)))?;
        let folder_slug = slug::slugify(&folder.name);

        let dest = self.root.join(&folder_slug).join(original_filename);
        copy_file(source, &dest).map_err(|e| {
            MigrateError::Media(format!(
                "failed to store {} as {}: {}",
                source.display(),
                dest.display(),
                e
            ))
        })?;

        let id = self.index.images.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let image = MediaImage {
            id,
            folder_id,
            name: name.to_string(),
            original_filename: original_filename.to_string(),
            file: format!("{}/{}", folder_slug, original_filename),
            url: format!(
                "{}/{}/{}",
                self.base_url,
                folder_slug,
                urlencoding::encode(original_filename)
            ),
            owner: owner.to_string(),
            is_public: true,
        };
        self.index.images.push(image.clone());
        self.save()?;

        Ok((image, true))
    }

    pub fn image_count(&self) -> usize {
        self.index.images.len()
    }

    fn save(&self) -> Result<(), MigrateError> {
        let raw = serde_json::to_string_pretty(&self.index)
            .map_err(|e| MigrateError::Media(format!("failed to serialize library index: {}", e)))?;

        write_file_atomic(self.root.join(INDEX_FILE), &raw).map_err(|e| {
            MigrateError::Media(format!("failed to write library index: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"not really a jpeg").unwrap();
        path
    }

    #[test]
    fn test_ensure_folder_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = MediaLibrary::open(&dir.path().join("media"), "/media").unwrap();

        let first = library.ensure_folder("News images", "admin").unwrap();
        let second = library.ensure_folder("News images", "admin").unwrap();

        assert_eq!(first, second);
        assert!(dir.path().join("media/news-images").is_dir());
    }

    #[test]
    fn test_get_or_upload_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let source = fixture_image(dir.path(), "sun.jpg");
        let mut library = MediaLibrary::open(&dir.path().join("media"), "/media").unwrap();
        let folder = library.ensure_folder("News images", "admin").unwrap();

        let (image, created) = library
            .get_or_upload(folder, "Sunset", "sun.jpg", &source, "admin")
            .unwrap();
        assert!(created);
        assert_eq!(image.url, "/media/news-images/sun.jpg");
        assert!(dir.path().join("media/news-images/sun.jpg").is_file());

        let (again, created) = library
            .get_or_upload(folder, "Sunset", "sun.jpg", &source, "admin")
            .unwrap();
        assert!(!created);
        assert_eq!(again.id, image.id);
        assert_eq!(library.image_count(), 1);
    }

    #[test]
    fn test_reopen_sees_previous_records() {
        let dir = tempfile::tempdir().unwrap();
        let source = fixture_image(dir.path(), "sun.jpg");
        let root = dir.path().join("media");

        {
            let mut library = MediaLibrary::open(&root, "/media").unwrap();
            let folder = library.ensure_folder("News images", "admin").unwrap();
            library
                .get_or_upload(folder, "Sunset", "sun.jpg", &source, "admin")
                .unwrap();
        }

        let mut library = MediaLibrary::open(&root, "/media").unwrap();
        let folder = library.ensure_folder("News images", "admin").unwrap();
        let (_, created) = library
            .get_or_upload(folder, "Sunset", "sun.jpg", &source, "admin")
            .unwrap();

        assert!(!created);
        assert_eq!(library.image_count(), 1);
    }

    #[test]
    fn test_url_encodes_filename() {
        let dir = tempfile::tempdir().unwrap();
        let source = fixture_image(dir.path(), "za studena.jpg");
        let mut library = MediaLibrary::open(&dir.path().join("media"), "/media").unwrap();
        let folder = library.ensure_folder("News images", "admin").unwrap();

        let (image, _) = library
            .get_or_upload(folder, "Cold", "za studena.jpg", &source, "admin")
            .unwrap();

        assert_eq!(image.url, "/media/news-images/za%20studena.jpg");
    }
}
