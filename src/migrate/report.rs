use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::migrate::MigrationSummary;

/// Print the plain-text summary lines for a completed run
pub fn print_summary(summary: &MigrationSummary) {
    println!("Number of created CS articles: {}", summary.cs_articles_created);
    println!("Number of created EN articles: {}", summary.en_articles_created);
    println!("Number of created images: {}", summary.images_created);
    println!("Number of missing CS contents: {}", summary.missing_cs_content);
    println!("Number of missing EN contents: {}", summary.missing_en_content);
}

/// Write a migration report into the destination directory
pub fn generate_migration_report(
    summary: &MigrationSummary,
    dest_dir: &Path,
) -> Result<PathBuf, String> {
    let report_path = dest_dir.join("MIGRATION.md");
    let mut file = File::create(&report_path)
        .map_err(|e| format!("Failed to create migration report: {}", e))?;

    let datetime = Local::now().format("%Y-%m-%d %H:%M:%S");
    let warnings = if summary.warnings.is_empty() {
        "None".to_string()
    } else {
        summary
            .warnings
            .iter()
            .map(|w| format!("- {}", w))
            .collect::<Vec<String>>()
            .join("\n")
    };

    let report_content = format!(
        r#"# Migration Report

## Overview
- **Migration Date**: {}
- **CS articles created**: {}
- **EN articles created**: {}
- **Images created**: {}
- **Articles without CS content**: {}
- **Articles without EN content**: {}

## Warnings

{}

## Next Steps

1. Review the migrated articles in the blog store.
2. Spot-check rewritten image markup against the media library.
3. Address any warnings listed above.

"#,
        datetime,
        summary.cs_articles_created,
        summary.en_articles_created,
        summary.images_created,
        summary.missing_cs_content,
        summary.missing_en_content,
        warnings,
    );

    file.write_all(report_content.as_bytes())
        .map_err(|e| format!("Failed to write migration report: {}", e))?;

    Ok(report_path)
}
