use std::path::PathBuf;

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::blog::{BlogArticle, BlogStore};
use crate::config::MigrationConfig;
use crate::legacy::{self, ExportLayout};
use crate::media::MediaLibrary;

mod check;
mod content;
mod report;

pub use check::{check_export, CheckReport};
pub use content::migrate_text;
pub use report::{generate_migration_report, print_summary};

/// Options for a migration run
pub struct MigrationOptions {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub config: MigrationConfig,
    pub verbose: bool,
}

/// Counters accumulated over one run, printed as the final summary
#[derive(Debug, Default)]
pub struct MigrationSummary {
    pub cs_articles_created: usize,
    pub en_articles_created: usize,
    pub images_created: usize,
    pub missing_cs_content: usize,
    pub missing_en_content: usize,
    pub warnings: Vec<String>,
}

/// Run the migration: load the export, rewrite each article's markup
/// (uploading referenced images), and create bilingual article records.
///
/// Fails fast on the first expired article, unresolvable embed reference,
/// leftover embed tag or unparsable date; partial progress stays in the
/// stores and is safe to re-run.
pub fn run_migration(options: &MigrationOptions) -> Result<MigrationSummary, String> {
    let config = &options.config;
    let layout = ExportLayout::new(&options.source_dir, &config.data_dir);

    log::info!("Data directory: {}", layout.data_dir().display());

    let articles = legacy::load_articles(&layout.articles_file()).map_err(|e| e.to_string())?;
    let catalog = legacy::load_image_catalog(&layout.images_file()).map_err(|e| e.to_string())?;
    let images_dir = layout.images_dir();

    let timezone: Tz = config
        .timezone
        .parse()
        .map_err(|_| format!("unknown timezone: {}", config.timezone))?;

    let mut library = MediaLibrary::open(&options.dest_dir.join("media"), &config.media_base_url)
        .map_err(|e| e.to_string())?;
    let mut store = BlogStore::open(&options.dest_dir.join("blog")).map_err(|e| e.to_string())?;
    if !store.is_empty() {
        log::info!("Destination store already holds {} articles", store.len());
    }

    let mut summary = MigrationSummary::default();

    for (counter, article) in articles.iter().enumerate() {
        if counter >= config.article_limit {
            break;
        }

        if article.is_expired() {
            return Err(format!("article {} is expired", counter));
        }

        let czech = match article.czech_content() {
            Some(text) => text,
            None => {
                summary.missing_cs_content += 1;
                continue;
            }
        };
        let english = article.english_content();
        if english.is_none() {
            summary.missing_en_content += 1;
        }

        // Prevents creating duplicates across reruns
        if store.has_translation_title("cs", article.czech_title()) {
            summary
                .warnings
                .push(format!("article already exists, skipped: {}", article.czech_title()));
            continue;
        }

        let (cs_text, created) = migrate_text(
            czech,
            &catalog,
            &images_dir,
            &mut library,
            &config.folder_name,
            &config.user,
        )?;
        summary.images_created += created;

        let publishing_date =
            publish_timestamp(&article.date, config.publish_hour_offset, timezone)?;

        let mut record = BlogArticle::published(publishing_date, &config.user);
        record.add_translation(
            "cs",
            article.czech_title(),
            article.slug_cs.as_deref().unwrap_or(""),
            &cs_text,
        );

        let mut english_created = false;
        if let Some(english) = english {
            let (en_text, created) = migrate_text(
                english,
                &catalog,
                &images_dir,
                &mut library,
                &config.folder_name,
                &config.user,
            )?;
            summary.images_created += created;
            record.add_translation(
                "en",
                article.title.as_deref().unwrap_or(""),
                article.slug.as_deref().unwrap_or(""),
                &en_text,
            );
            english_created = true;
        }

        store.insert(record).map_err(|e| e.to_string())?;
        summary.cs_articles_created += 1;
        if english_created {
            summary.en_articles_created += 1;
        }

        if options.verbose {
            log::info!("Migrated article: {}", article.czech_title());
        }
    }

    log::debug!("Media library now holds {} images", library.image_count());

    Ok(summary)
}

/// Publish timestamp for an article: the source date at midnight, plus the
/// configured hour offset, localized to the target timezone.
fn publish_timestamp(date: &str, hour_offset: i64, timezone: Tz) -> Result<String, String> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| format!("failed to parse date {}: {}", date, e))?;
    let local = day.and_time(NaiveTime::MIN) + Duration::hours(hour_offset);

    let localized = timezone
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| format!("date {} does not exist in {}", date, timezone))?;

    Ok(localized.to_rfc3339())
}
