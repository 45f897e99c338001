use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::utils::error::MigrateError;

/// One article record from the legacy `old_news.json` export.
///
/// String fields may be absent or `null` in older dumps and deserialize to
/// `None` in both cases. The English body and lead appear with a `_en`
/// suffix in some exports and without one in others; both spellings are
/// accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_cs: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub slug_cs: Option<String>,
    #[serde(default, alias = "text_en")]
    pub text: Option<String>,
    #[serde(default)]
    pub text_cs: Option<String>,
    #[serde(default, alias = "perex_en")]
    pub perex: Option<String>,
    #[serde(default)]
    pub perex_cs: Option<String>,
    /// Publication date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub expire_at: Option<String>,
    #[serde(default)]
    pub expired: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl LegacyArticle {
    /// Czech body, falling back to the Czech perex.
    pub fn czech_content(&self) -> Option<&str> {
        non_empty(&self.text_cs).or_else(|| non_empty(&self.perex_cs))
    }

    /// English body, falling back to the English perex.
    pub fn english_content(&self) -> Option<&str> {
        non_empty(&self.text).or_else(|| non_empty(&self.perex))
    }

    /// An article counts as expired when the flag is set or any expiry
    /// date is present.
    pub fn is_expired(&self) -> bool {
        self.expired || non_empty(&self.expire_at).is_some()
    }

    pub fn czech_title(&self) -> &str {
        self.title_cs.as_deref().unwrap_or("")
    }
}

/// Load the article list from `old_news.json`.
pub fn load_articles(path: &Path) -> Result<Vec<LegacyArticle>, MigrateError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| MigrateError::Export(format!("failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| MigrateError::Export(format!("failed to parse {}: {}", path.display(), e)))
}
