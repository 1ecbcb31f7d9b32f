/// Configuration for one export run.
///
/// The defaults reproduce the conventional layout: labelless resources land
/// in `_Unsorted`, note files get a `_Note` suffix, and the archive is
/// named `Silo-Export-<ISO-date>.zip`.
///
/// # Examples
///
/// ```
/// use silo_export::ExportOptions;
///
/// let options = ExportOptions::default()
///     .unsorted_folder("inbox")
///     .archive_prefix("Vault-Backup");
/// ```
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Folder for resources with no labels.
    pub unsorted_folder: String,
    /// Suffix inserted before `.txt` on note files.
    pub note_suffix: String,
    /// Base name for resources with an empty title.
    pub fallback_title: String,
    /// Leading part of the archive file name, before the date.
    pub archive_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            unsorted_folder: "_Unsorted".to_owned(),
            note_suffix: "_Note".to_owned(),
            fallback_title: "resource".to_owned(),
            archive_prefix: "Silo-Export".to_owned(),
        }
    }
}

impl ExportOptions {
    pub fn unsorted_folder(mut self, name: impl Into<String>) -> Self {
        self.unsorted_folder = name.into();
        self
    }

    pub fn note_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.note_suffix = suffix.into();
        self
    }

    pub fn fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    pub fn archive_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.archive_prefix = prefix.into();
        self
    }
}
