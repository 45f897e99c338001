use serde::{Deserialize, Serialize};

/// A language-specific variant of an article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub language: String,
    pub title: String,
    pub slug: String,
    pub lead_in: String,
}

/// One article shell with its attached translations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogArticle {
    /// Assigned by the store on insert
    pub id: u64,
    pub is_published: bool,
    /// RFC 3339 timestamp carrying the source timezone offset
    pub publishing_date: String,
    pub owner: String,
    pub translations: Vec<Translation>,
}

impl BlogArticle {
    /// A published article shell with no translations yet.
    pub fn published(publishing_date: String, owner: &str) -> Self {
        BlogArticle {
            id: 0,
            is_published: true,
            publishing_date,
            owner: owner.to_string(),
            translations: Vec::new(),
        }
    }

    pub fn add_translation(&mut self, language: &str, title: &str, slug: &str, lead_in: &str) {
        self.translations.push(Translation {
            language: language.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            lead_in: lead_in.to_string(),
        });
    }
}
