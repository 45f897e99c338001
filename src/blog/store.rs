use std::fs;
use std::path::{Path, PathBuf};

use crate::blog::types::BlogArticle;
use crate::utils::error::MigrateError;
use crate::utils::fs::{create_directory, write_file_atomic};

const INDEX_FILE: &str = "articles.json";

/// File-backed blog store: one JSON document of article records.
///
/// Articles are looked up by translation title before insert, and an insert
/// commits the shell and all its translations in a single atomic write, so
/// a rerun over already-migrated input creates no duplicates.
pub struct BlogStore {
    root: PathBuf,
    articles: Vec<BlogArticle>,
}

impl BlogStore {
    /// Open a store rooted at `root`, creating it if absent.
    pub fn open(root: &Path) -> Result<Self, MigrateError> {
        create_directory(root).map_err(|e| {
            MigrateError::Store(format!("failed to create store root {}: {}", root.display(), e))
        })?;

        let index_path = root.join(INDEX_FILE);
        let articles = if index_path.exists() {
            let raw = fs::read_to_string(&index_path).map_err(|e| {
                MigrateError::Store(format!("failed to read {}: {}", index_path.display(), e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                MigrateError::Store(format!("failed to parse {}: {}", index_path.display(), e))
            })?
        } else {
            Vec::new()
        };

        Ok(BlogStore {
            root: root.to_path_buf(),
            articles,
        })
    }

    /// True when any article already carries a translation with this title.
    pub fn has_translation_title(&self, language: &str, title: &str) -> bool {
        self.articles.iter().any(|article| {
            article
                .translations
                .iter()
                .any(|t| t.language == language && t.title == title)
        })
    }

    /// Insert an article and its translations as one atomic commit.
    /// Returns the assigned id.
    pub fn insert(&mut self, mut article: BlogArticle) -> Result<u64, MigrateError> {
        let id = self.articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        article.id = id;
        self.articles.push(article);
        self.save()?;

        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    fn save(&self) -> Result<(), MigrateError> {
        let raw = serde_json::to_string_pretty(&self.articles)
            .map_err(|e| MigrateError::Store(format!("failed to serialize articles: {}", e)))?;

        write_file_atomic(self.root.join(INDEX_FILE), &raw)
            .map_err(|e| MigrateError::Store(format!("failed to write articles: {}", e)))
    }
}
