/// Fixed name of the index file at the archive root.
pub const MANIFEST_FILE_NAME: &str = "_Silo_Index.csv";

const BOM: &str = "\u{feff}";
const HEADER: &str = "\"Title\";\"Tags\";\"Origin URL\";\"Path in Archive\"";

/// One manifest line: where a resource landed in the archive.
#[derive(Clone, Debug)]
pub struct ManifestRow {
    pub title: String,
    pub labels: Vec<String>,
    pub origin_url: Option<String>,
    /// Representative in-archive path: the first file written for the
    /// resource, or the bare folder path when nothing was.
    pub archive_path: String,
}

/// Row accumulator for the CSV index.
///
/// Semicolon-delimited with every field quoted, prefixed with a UTF-8 BOM
/// so spreadsheet imports pick up the encoding. One row per input resource,
/// in input order.
#[derive(Debug, Default)]
pub struct Manifest {
    rows: Vec<ManifestRow>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ManifestRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from(BOM);
        out.push_str(HEADER);
        out.push('\n');

        for row in &self.rows {
            let line = format!(
                "{};{};{};{}",
                csv_field(&row.title),
                csv_field(&row.labels.join(", ")),
                csv_field(row.origin_url.as_deref().unwrap_or("")),
                csv_field(&row.archive_path),
            );
            out.push_str(&line);
            out.push('\n');
        }

        out
    }
}

/// Quote one field: newlines collapse to spaces, inner quotes double.
fn csv_field(value: &str) -> String {
    let flat = value.replace("\r\n", " ").replace(['\n', '\r'], " ");
    format!("\"{}\"", flat.replace('"', "\"\""))
}
