use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::legacy::ImageCatalog;
use crate::media::MediaLibrary;

lazy_static! {
    // Legacy embed placeholders. Attribute order and set are fixed in the
    // export; anything else is left in place and caught by the leftover
    // check below.
    static ref EMBED_RE: Regex = Regex::new(
        r#"<embed alt="([^"]+)" embedtype="image" format="(fullwidth|left|right)" id="(\d+)"/>"#
    ).unwrap();
}

/// Rewrite legacy embed tags in `text` into anchor-wrapped `<img>` markup,
/// uploading the referenced files into the media library as needed.
///
/// Returns the rewritten text and the number of newly created images. A
/// reference to an unknown image id, or an `<embed` occurrence the pattern
/// does not recognize, aborts the run.
pub fn migrate_text(
    text: &str,
    catalog: &ImageCatalog,
    images_dir: &Path,
    library: &mut MediaLibrary,
    folder_name: &str,
    owner: &str,
) -> Result<(String, usize), String> {
    let mut images_created = 0;
    let mut output = text.to_string();

    if output.contains("<embed") {
        for caps in EMBED_RE.captures_iter(text) {
            let tag = &caps[0];
            let alt = &caps[1];
            let image_id: i64 = caps[3]
                .parse()
                .map_err(|e| format!("invalid embed id {}: {}", &caps[3], e))?;

            let meta = catalog
                .find(image_id)
                .ok_or_else(|| format!("pk {} was not found in the image metadata", image_id))?;
            let file_name = meta.file_name();
            let file_path = images_dir.join(file_name);

            // The folder lookup runs once per tag; the library makes it an
            // idempotent upsert.
            let folder_id = library
                .ensure_folder(folder_name, owner)
                .map_err(|e| e.to_string())?;
            let (image, created) = library
                .get_or_upload(folder_id, &meta.fields.title, file_name, &file_path, owner)
                .map_err(|e| e.to_string())?;
            if created {
                images_created += 1;
            }

            let replacement = format!(
                r#"<a href="{src}" target="_blank"><img alt="{alt}" title="{title}" class="" src="{src}" id="{id}"/></a>"#,
                src = image.url,
                alt = alt,
                title = meta.fields.title,
                id = image.id,
            );
            output = output.replace(tag, &replacement);
        }
    }

    if output.contains("<embed") {
        return Err(format!(
            "embed tag left in the text after migration:\n\n{}",
            output
        ));
    }

    Ok((cleanup_markup(&output), images_created))
}

/// Ids referenced by well-formed embed tags in `text`.
pub fn embed_ids(text: &str) -> Vec<i64> {
    EMBED_RE
        .captures_iter(text)
        .filter_map(|caps| caps[3].parse().ok())
        .collect()
}

/// True when the text contains an `<embed` occurrence the rewrite pattern
/// does not recognize.
pub fn has_unmatched_embed(text: &str) -> bool {
    text.matches("<embed").count() > EMBED_RE.find_iter(text).count()
}

/// Light whitespace cleanup applied after the rewrite. Replacement order
/// matters: `<p><br/></p>` has to go before the bare `<br/>`.
fn cleanup_markup(text: &str) -> String {
    text.replace("<p><br/></p>", "")
        .replace("<br/>", "")
        .replace(r#"<p class=""></p>"#, "")
        .replace("<p></p>", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::ImageMeta;

    use std::fs;
    use std::path::PathBuf;

    fn sample_catalog() -> ImageCatalog {
        let images: Vec<ImageMeta> = serde_json::from_str(
            r#"[{"pk": 5, "fields": {"file": "original_images/sun.jpg", "title": "Sunset"}}]"#,
        )
        .unwrap();
        ImageCatalog::new(images)
    }

    fn sample_library(dir: &Path) -> (MediaLibrary, PathBuf) {
        let images_dir = dir.join("original_images");
        fs::create_dir_all(&images_dir).unwrap();
        fs::write(images_dir.join("sun.jpg"), b"not really a jpeg").unwrap();

        let library = MediaLibrary::open(&dir.join("media"), "/media").unwrap();
        (library, images_dir)
    }

    #[test]
    fn test_text_without_embeds_is_only_cleaned() {
        let dir = tempfile::tempdir().unwrap();
        let (mut library, images_dir) = sample_library(dir.path());
        let catalog = sample_catalog();

        let text = "<p>Hello</p><p><br/></p><p class=\"\"></p>";
        let (output, created) = migrate_text(
            text,
            &catalog,
            &images_dir,
            &mut library,
            "News images",
            "admin",
        )
        .unwrap();

        assert_eq!(output, "<p>Hello</p>");
        assert_eq!(created, 0);
    }

    #[test]
    fn test_embed_is_rewritten_to_anchor_wrapped_img() {
        let dir = tempfile::tempdir().unwrap();
        let (mut library, images_dir) = sample_library(dir.path());
        let catalog = sample_catalog();

        let text = r#"<p>Intro</p><embed alt="sunset" embedtype="image" format="left" id="5"/>"#;
        let (output, created) = migrate_text(
            text,
            &catalog,
            &images_dir,
            &mut library,
            "News images",
            "admin",
        )
        .unwrap();

        assert_eq!(created, 1);
        assert!(!output.contains("<embed"));
        assert_eq!(
            output,
            "<p>Intro</p><a href=\"/media/news-images/sun.jpg\" target=\"_blank\">\
             <img alt=\"sunset\" title=\"Sunset\" class=\"\" src=\"/media/news-images/sun.jpg\" id=\"1\"/></a>"
        );
    }

    #[test]
    fn test_second_pass_uploads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (mut library, images_dir) = sample_library(dir.path());
        let catalog = sample_catalog();

        let text = r#"<embed alt="sunset" embedtype="image" format="left" id="5"/>"#;
        let (_, first) = migrate_text(
            text,
            &catalog,
            &images_dir,
            &mut library,
            "News images",
            "admin",
        )
        .unwrap();
        let (_, second) = migrate_text(
            text,
            &catalog,
            &images_dir,
            &mut library,
            "News images",
            "admin",
        )
        .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(library.image_count(), 1);
    }

    #[test]
    fn test_unknown_image_id_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let (mut library, images_dir) = sample_library(dir.path());
        let catalog = sample_catalog();

        let text = r#"<embed alt="lost" embedtype="image" format="left" id="99"/>"#;
        let result = migrate_text(
            text,
            &catalog,
            &images_dir,
            &mut library,
            "News images",
            "admin",
        );

        assert!(result.unwrap_err().contains("pk 99"));
    }

    #[test]
    fn test_unrecognized_embed_shape_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let (mut library, images_dir) = sample_library(dir.path());
        let catalog = sample_catalog();

        // extra attribute, not matched by the pattern
        let text = r#"<embed alt="sunset" embedtype="image" format="left" id="5" style="x"/>"#;
        let result = migrate_text(
            text,
            &catalog,
            &images_dir,
            &mut library,
            "News images",
            "admin",
        );

        assert!(result.unwrap_err().contains("embed tag left"));
    }

    #[test]
    fn test_embed_helpers() {
        let matched = r#"<embed alt="a b" embedtype="image" format="fullwidth" id="5"/>"#;
        let broken = r#"<embed src="x"/>"#;

        assert_eq!(embed_ids(matched), vec![5]);
        assert!(embed_ids(broken).is_empty());
        assert!(!has_unmatched_embed(matched));
        assert!(has_unmatched_embed(broken));
    }
}
