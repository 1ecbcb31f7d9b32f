/// Summary of one export run.
///
/// Attachment fetch failures are recovered per resource; they end up here
/// rather than aborting the run, so callers can surface partial-failure
/// outcomes.
#[derive(Clone, Debug, Default)]
pub struct ExportReport {
    pub resource_count: usize,
    /// Materialized resource files, not counting the manifest.
    pub file_count: usize,
    pub skipped_attachments: Vec<SkippedAttachment>,
}

#[derive(Clone, Debug)]
pub struct SkippedAttachment {
    pub resource_id: String,
    pub title: String,
    pub reason: String,
}
