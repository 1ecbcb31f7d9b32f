//! Vault archive exporter.
//!
//! Takes an ordered snapshot of vault resources and packages it as a single
//! downloadable ZIP: one folder per primary label (labelless resources land
//! in a fallback bucket), per-resource attachment copies, `.url` shortcut
//! files and note text files, plus a root-level CSV manifest describing
//! where every resource landed.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Filesystem-safe name sanitization
//! - `paths.rs` - Collision-free path allocation
//! - `manifest.rs` - CSV index accumulation
//! - `archive.rs` - In-memory tree and ZIP serialization
//! - `builder.rs` - Per-resource orchestration
//!
//! Resources are processed strictly sequentially; manifest row order and
//! collision-suffix numbering both follow input order.

pub use self::archive::{ExportBundle, VaultArchive};
pub use self::builder::{ExportOutcome, export_vault};
pub use self::error::{ExportError, Result};
pub use self::manifest::{MANIFEST_FILE_NAME, Manifest, ManifestRow};
pub use self::options::ExportOptions;
pub use self::paths::PathRegistry;
pub use self::report::{ExportReport, SkippedAttachment};
pub use self::sanitize::sanitize_name;

mod archive;
mod builder;
mod error;
mod manifest;
mod options;
mod paths;
mod report;
mod sanitize;
