use silo_fetch::{HttpClient, fetch_attachment};
use silo_vault::Resource;
use tracing::{debug, warn};

use crate::archive::{ExportBundle, VaultArchive};
use crate::error::Result;
use crate::manifest::{MANIFEST_FILE_NAME, Manifest, ManifestRow};
use crate::options::ExportOptions;
use crate::paths::PathRegistry;
use crate::report::{ExportReport, SkippedAttachment};
use crate::sanitize::sanitize_name;

/// What an export run hands back: the downloadable bundle plus a summary.
#[derive(Debug)]
pub struct ExportOutcome {
    pub bundle: ExportBundle,
    pub report: ExportReport,
}

/// Package a vault snapshot into a ZIP archive.
///
/// Resources are processed strictly sequentially, awaiting each attachment
/// fetch before the next resource; manifest row order and collision-suffix
/// numbering both depend on that. Per resource, up to three files are
/// materialized into its label folder:
///
/// 1. the attachment copy (fetch failure skips only this file),
/// 2. a `.url` internet shortcut when the resource has an origin URL,
/// 3. a note text file for non-URL content and/or the user annotation.
///
/// Every resource contributes exactly one manifest row whose path is the
/// first file written for it, or its bare folder path when none was. Only
/// the final ZIP serialization can fail the whole run.
pub async fn export_vault<C: HttpClient>(
    client: &C,
    resources: &[Resource],
    options: &ExportOptions,
) -> Result<ExportOutcome> {
    let mut archive = VaultArchive::new();
    let mut registry = PathRegistry::new();
    let mut manifest = Manifest::new();
    let mut report = ExportReport {
        resource_count: resources.len(),
        ..ExportReport::default()
    };

    for resource in resources {
        let folder = sanitize_name(resource.primary_label().unwrap_or(&options.unsorted_folder));
        let base = if resource.title.trim().is_empty() {
            sanitize_name(&options.fallback_title)
        } else {
            sanitize_name(&resource.title)
        };

        archive.ensure_folder(&folder);
        let mut representative: Option<String> = None;

        if let Some(attachment) = &resource.attachment {
            match fetch_attachment(client, attachment).await {
                Ok(fetched) => {
                    let path = registry.next_available(&folder, &base, &fetched.extension);
                    registry.register(path.clone());
                    archive.add_file(path.clone(), fetched.bytes.to_vec());
                    representative = Some(path);
                }
                Err(err) => {
                    warn!(resource = %resource.id, error = %err, "skipping attachment");
                    report.skipped_attachments.push(SkippedAttachment {
                        resource_id: resource.id.clone(),
                        title: resource.title.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let origin_url = resource.origin_url().map(str::to_owned);
        if let Some(url) = &origin_url {
            let path = registry.next_available(&folder, &base, "url");
            registry.register(path.clone());
            archive.add_file(path.clone(), url_shortcut(url).into_bytes());
            representative.get_or_insert(path);
        }

        let content = resource.note_content().filter(|c| !c.trim().is_empty());
        let note = resource.note.as_deref().filter(|n| !n.trim().is_empty());
        if content.is_some() || note.is_some() {
            let note_base = format!("{base}{}", options.note_suffix);
            let path = registry.next_available(&folder, &note_base, "txt");
            registry.register(path.clone());
            archive.add_file(path.clone(), note_text(content, note).into_bytes());
            representative.get_or_insert(path);
        }

        let archive_path = representative.unwrap_or_else(|| format!("{folder}/"));
        debug!(resource = %resource.id, path = %archive_path, "resource packed");

        manifest.push(ManifestRow {
            title: resource.title.clone(),
            labels: resource.labels.clone(),
            origin_url,
            archive_path,
        });
    }

    report.file_count = archive.file_count();
    archive.add_file(MANIFEST_FILE_NAME.to_owned(), manifest.to_csv().into_bytes());

    let bundle = archive.finish(&options.archive_prefix)?;
    Ok(ExportOutcome { bundle, report })
}

fn url_shortcut(url: &str) -> String {
    format!("[InternetShortcut]\nURL={url}\n")
}

fn note_text(content: Option<&str>, note: Option<&str>) -> String {
    let mut text = String::new();
    if let Some(content) = content {
        text.push_str("CONTENT:\n");
        text.push_str(content);
        text.push('\n');
    }
    if let Some(note) = note {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str("NOTE:\n");
        text.push_str(note);
        text.push('\n');
    }
    text
}
