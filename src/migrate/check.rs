use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use walkdir::WalkDir;

use crate::config::MigrationConfig;
use crate::legacy::{self, ExportLayout};
use crate::migrate::content::{embed_ids, has_unmatched_embed};

/// Findings from a read-only validation pass over an export.
///
/// Fatal findings are the conditions a migration run would abort on;
/// warnings are the ones it would count and move past.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub fatal: Vec<String>,
    pub warnings: Vec<String>,
    pub articles_seen: usize,
    pub images_seen: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.fatal.is_empty()
    }
}

/// Validate an export without writing anything: expired articles, embed
/// references that would not resolve, missing or orphaned image files and
/// unparsable dates.
pub fn check_export(source_dir: &Path, config: &MigrationConfig) -> Result<CheckReport, String> {
    let layout = ExportLayout::new(source_dir, &config.data_dir);

    let articles = legacy::load_articles(&layout.articles_file()).map_err(|e| e.to_string())?;
    let catalog = legacy::load_image_catalog(&layout.images_file()).map_err(|e| e.to_string())?;
    if catalog.is_empty() {
        log::debug!("Image catalog is empty");
    }
    let images_dir = layout.images_dir();

    let mut report = CheckReport {
        articles_seen: articles.len(),
        images_seen: catalog.len(),
        ..CheckReport::default()
    };

    for (counter, article) in articles.iter().enumerate() {
        if article.is_expired() {
            report.fatal.push(format!("article {} is expired", counter));
        }

        if NaiveDate::parse_from_str(&article.date, "%Y-%m-%d").is_err() {
            report
                .fatal
                .push(format!("article {}: unparsable date {:?}", counter, article.date));
        }

        if article.czech_content().is_none() {
            report
                .warnings
                .push(format!("article {}: no Czech content, would be skipped", counter));
        }
        if article.english_content().is_none() {
            report
                .warnings
                .push(format!("article {}: no English content", counter));
        }

        for text in [article.czech_content(), article.english_content()]
            .into_iter()
            .flatten()
        {
            if has_unmatched_embed(text) {
                report.fatal.push(format!(
                    "article {}: embed tag the rewrite pattern does not recognize",
                    counter
                ));
            }

            for id in embed_ids(text) {
                match catalog.find(id) {
                    None => report.fatal.push(format!(
                        "article {}: embed references unknown pk {}",
                        counter, id
                    )),
                    Some(meta) => {
                        let path = images_dir.join(meta.file_name());
                        if !path.is_file() {
                            report.fatal.push(format!(
                                "article {}: image file missing: {}",
                                counter,
                                path.display()
                            ));
                        }
                    }
                }
            }
        }
    }

    // Image files in the export never referenced by the catalog
    let known: HashSet<&str> = catalog.iter().map(|meta| meta.file_name()).collect();
    for entry in WalkDir::new(&images_dir).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() {
            let name = entry.file_name().to_string_lossy();
            if !known.contains(name.as_ref()) {
                report
                    .warnings
                    .push(format!("unreferenced image file: {}", name));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn write_export(source: &Path, articles_json: &str, images_json: &str) {
        let data = source.join("data_for_migration");
        fs::create_dir_all(data.join("original_images")).unwrap();
        fs::write(data.join("old_news.json"), articles_json).unwrap();
        fs::write(data.join("images.news.json"), images_json).unwrap();
    }

    #[test]
    fn test_clean_export() {
        let source = tempfile::tempdir().unwrap();
        write_export(
            source.path(),
            r#"[{"title_cs": "A", "text_cs": "<p>a</p>", "text": "<p>a</p>", "date": "2019-04-02"}]"#,
            "[]",
        );

        let report = check_export(source.path(), &MigrationConfig::default()).unwrap();

        assert!(report.is_clean());
        assert!(report.warnings.is_empty());
        assert_eq!(report.articles_seen, 1);
    }

    #[test]
    fn test_flags_expired_and_unknown_pk_and_missing_file() {
        let source = tempfile::tempdir().unwrap();
        write_export(
            source.path(),
            r#"[
                {"title_cs": "A", "text_cs": "x", "date": "2019-04-02", "expired": true},
                {"title_cs": "B",
                 "text_cs": "<embed alt=\"a b\" embedtype=\"image\" format=\"left\" id=\"9\"/>",
                 "date": "2019-04-03"},
                {"title_cs": "C",
                 "text_cs": "<embed alt=\"a b\" embedtype=\"image\" format=\"left\" id=\"5\"/>",
                 "date": "2019-04-04"}
            ]"#,
            r#"[{"pk": 5, "fields": {"file": "original_images/gone.jpg", "title": "Gone"}}]"#,
        );

        let report = check_export(source.path(), &MigrationConfig::default()).unwrap();

        assert_eq!(report.fatal.len(), 3);
        assert!(report.fatal[0].contains("expired"));
        assert!(report.fatal[1].contains("unknown pk 9"));
        assert!(report.fatal[2].contains("image file missing"));
    }

    #[test]
    fn test_flags_orphaned_images_as_warnings() {
        let source = tempfile::tempdir().unwrap();
        write_export(
            source.path(),
            r#"[{"title_cs": "A", "text_cs": "x", "text": "y", "date": "2019-04-02"}]"#,
            "[]",
        );
        fs::write(
            source
                .path()
                .join("data_for_migration/original_images/stray.jpg"),
            b"x",
        )
        .unwrap();

        let report = check_export(source.path(), &MigrationConfig::default()).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("stray.jpg"));
    }
}
