use serde::{Deserialize, Serialize};

/// A named container inside the media library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFolder {
    pub id: u64,
    pub name: String,
    pub owner: String,
}

/// A managed image record, distinct from the stored file itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaImage {
    pub id: u64,
    pub folder_id: u64,
    pub name: String,
    pub original_filename: String,
    /// Path of the stored file, relative to the library root
    pub file: String,
    /// Public URL the rendered markup points at
    pub url: String,
    pub owner: String,
    pub is_public: bool,
}
