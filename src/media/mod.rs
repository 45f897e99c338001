mod library;
mod types;

pub use library::MediaLibrary;
pub use types::{MediaFolder, MediaImage};
